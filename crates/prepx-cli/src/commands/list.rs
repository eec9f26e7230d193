//! List command implementation.

use std::fmt;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueHint};
use serde::Serialize;

use prepx_common_fs::path as fs_path;
use prepx_experiment::ExperimentFolder;

use crate::cli::CommandContext;
use crate::error::CliError;
use crate::output::Output;

/// List the train runs of an experiment
#[derive(Debug, Parser)]
pub struct ListCommand {
    /// Name of the experiment
    #[arg(long)]
    pub experiment_name: String,

    /// Root experiments folder, defaults to the current directory
    #[arg(long, env = "PREPX_ROOT_FOLDER", value_hint = ValueHint::DirPath)]
    pub root_folder: Option<PathBuf>,
}

/// Train run names of one experiment.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct TrainRuns(Vec<String>);

impl fmt::Display for TrainRuns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("\n"))
    }
}

impl ListCommand {
    pub fn execute(&self, ctx: &CommandContext) -> Result<(), CliError> {
        let cwd = std::env::current_dir()?;
        let root_folder = fs_path::absolutize(
            self.root_folder.as_deref().unwrap_or(Path::new(".")),
            &cwd,
        );

        let exp = ExperimentFolder::new(&self.experiment_name, root_folder);
        let runs = TrainRuns(exp.trains()?);
        Output::new(ctx).print(&runs)
    }
}
