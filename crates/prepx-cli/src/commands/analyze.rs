//! Analyze command implementation.

use std::path::PathBuf;

use clap::{Parser, ValueHint};

use crate::cli::CommandContext;
use crate::error::CliError;
use crate::output::{render_tree, Output};

/// Render a folder tree with symlink targets
#[derive(Debug, Parser)]
pub struct AnalyzeCommand {
    /// Folder to inspect
    #[arg(value_hint = ValueHint::DirPath)]
    pub folder: PathBuf,

    /// Maximum number of levels to descend in the folder hierarchy
    #[arg(long)]
    pub max_level: Option<usize>,
}

impl AnalyzeCommand {
    pub fn execute(&self, ctx: &CommandContext) -> Result<(), CliError> {
        let tree = render_tree(&self.folder, self.max_level)?;
        Output::new(ctx).message(&tree);
        Ok(())
    }
}
