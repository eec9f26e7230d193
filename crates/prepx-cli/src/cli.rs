//! CLI argument definitions using clap derive macros.

use clap::{ArgAction, Parser, Subcommand};

use crate::commands::{AnalyzeCommand, CreateCommand, ListCommand};
use crate::error::CliError;

/// prepx - experiment folder scaffolding
///
/// Create experiment folder hierarchies wired together with symlinks
/// to raw data, binarized data, checkpoints and tensorboard locations.
#[derive(Debug, Parser)]
#[command(
    name = "prepx",
    author,
    version,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        help = "Increase verbosity level"
    )]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(
        short,
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    /// Output format
    #[arg(
        long,
        global = true,
        default_value = "text",
        help = "Output format (text, json)"
    )]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Available subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create experiment folders and their symlink wiring
    Create(CreateCommand),

    /// List the train runs of an experiment
    List(ListCommand),

    /// Render a folder tree with symlink targets
    Analyze(AnalyzeCommand),
}

impl Cli {
    /// Execute the selected command
    pub fn execute(self) -> Result<(), CliError> {
        let ctx = CommandContext {
            format: self.format,
            quiet: self.quiet,
        };

        match self.command {
            Command::Create(cmd) => cmd.execute(&ctx),
            Command::List(cmd) => cmd.execute(&ctx),
            Command::Analyze(cmd) => cmd.execute(&ctx),
        }
    }
}

/// Context passed to all commands
#[derive(Debug)]
pub struct CommandContext {
    pub format: OutputFormat,
    pub quiet: bool,
}
