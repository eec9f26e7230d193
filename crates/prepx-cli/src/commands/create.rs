//! Create command implementation.

use std::fmt;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueHint};
use serde::Serialize;
use tracing::warn;

use prepx_common_fs::path as fs_path;
use prepx_experiment::{EvalOptions, ExperimentFolder, TrainOptions};

use crate::cli::CommandContext;
use crate::error::CliError;
use crate::output::Output;

/// What to do when the train run already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum IfTrainExists {
    /// Fail the invocation.
    Abort,
    /// Keep the existing run and report success.
    Ignore,
}

/// Create experiment folders and their symlink wiring
#[derive(Debug, Parser)]
pub struct CreateCommand {
    /// Name of the experiment
    #[arg(long)]
    pub experiment_name: String,

    /// Name of the model/train run
    #[arg(long)]
    pub train_name: Option<String>,

    /// Name of the eval run
    #[arg(long)]
    pub eval_name: Option<String>,

    /// Root experiments folder, defaults to the current directory
    #[arg(long, env = "PREPX_ROOT_FOLDER", value_hint = ValueHint::DirPath)]
    pub root_folder: Option<PathBuf>,

    /// Folder with the relevant raw data
    #[arg(long, value_hint = ValueHint::DirPath)]
    pub raw_data_folder: Option<PathBuf>,

    /// Folder with the relevant binarized data
    #[arg(long, value_hint = ValueHint::DirPath)]
    pub binarized_data_folder: Option<PathBuf>,

    /// Folder with existing checkpoints, created inside the run folder when omitted
    #[arg(long, value_hint = ValueHint::DirPath)]
    pub checkpoints_folder: Option<PathBuf>,

    /// Checkpoint to evaluate when using --eval-only
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub eval_checkpoint: Option<PathBuf>,

    /// Only create the empty experiment folder
    #[arg(long)]
    pub empty_only: bool,

    /// Only create the eval folder of the experiment
    #[arg(long, conflicts_with = "empty_only")]
    pub eval_only: bool,

    /// Create a tensorboard folder inside the train run
    #[arg(long)]
    pub with_tensorboard: bool,

    /// What to do when the train run already exists
    #[arg(long, value_enum, default_value = "abort")]
    pub if_train_exists: IfTrainExists,
}

/// Result of a create invocation.
#[derive(Debug, Serialize)]
pub struct CreateReport {
    pub experiment: String,
    pub root: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub train: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eval: Option<PathBuf>,
}

impl fmt::Display for CreateReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Path to created experiment: {}", self.root.display())?;
        if let Some(train) = &self.train {
            write!(f, "\nTrain run: {}", train.display())?;
        }
        if let Some(eval) = &self.eval {
            write!(f, "\nEval run: {}", eval.display())?;
        }
        Ok(())
    }
}

impl CreateCommand {
    pub fn execute(&self, ctx: &CommandContext) -> Result<(), CliError> {
        let cwd = std::env::current_dir()?;
        let root_folder = fs_path::absolutize(
            self.root_folder.as_deref().unwrap_or(Path::new(".")),
            &cwd,
        );

        let exp = ExperimentFolder::new(&self.experiment_name, root_folder);
        let root = exp.create_root()?;

        let mut report = CreateReport {
            experiment: self.experiment_name.clone(),
            root,
            train: None,
            eval: None,
        };

        if !self.empty_only {
            if self.eval_only {
                report.eval = Some(self.create_eval(&exp, &cwd)?);
            } else {
                report.train = Some(self.create_train(&exp, &cwd)?);
            }
        }

        Output::new(ctx).print(&report)
    }

    fn create_train(&self, exp: &ExperimentFolder, cwd: &Path) -> Result<PathBuf, CliError> {
        let name = self.train_name.as_deref().ok_or_else(|| {
            CliError::validation_with_hint(
                "--train-name is required unless --empty-only or --eval-only is set",
                "pass --train-name <name>",
            )
        })?;
        let raw_data = self.required_raw_data(cwd)?;

        let mut options = TrainOptions::new(raw_data).with_tensorboard(self.with_tensorboard);
        if let Some(folder) = &self.checkpoints_folder {
            options = options.checkpoint_folder(fs_path::absolutize(folder, cwd));
        }
        if let Some(binarized) = &self.binarized_data_folder {
            options = options.binarized_data_folder(fs_path::absolutize(binarized, cwd));
        }

        match exp.create_train(name, options) {
            Ok(path) => Ok(path),
            Err(e) if e.is_name_collision() && self.if_train_exists == IfTrainExists::Ignore => {
                warn!(name, "train run already exists, keeping it");
                Ok(exp.train_root().join(name))
            }
            Err(e) => Err(e.into()),
        }
    }

    fn create_eval(&self, exp: &ExperimentFolder, cwd: &Path) -> Result<PathBuf, CliError> {
        let name = self.eval_name.as_deref().ok_or_else(|| {
            CliError::validation_with_hint(
                "--eval-name is required with --eval-only",
                "pass --eval-name <name>",
            )
        })?;
        let checkpoint = self.eval_checkpoint.as_deref().ok_or_else(|| {
            CliError::validation_with_hint(
                "--eval-checkpoint is required with --eval-only",
                "pass --eval-checkpoint <path>",
            )
        })?;
        let checkpoint = fs_path::absolutize(checkpoint, cwd);
        if !checkpoint.exists() {
            return Err(CliError::validation(format!(
                "eval checkpoint does not exist: {}",
                checkpoint.display()
            )));
        }
        let raw_data = self.required_raw_data(cwd)?;

        let mut options = EvalOptions::new(checkpoint, raw_data);
        if let Some(binarized) = &self.binarized_data_folder {
            options = options.binarized_data_folder(fs_path::absolutize(binarized, cwd));
        }

        Ok(exp.create_eval(name, options)?)
    }

    fn required_raw_data(&self, cwd: &Path) -> Result<PathBuf, CliError> {
        let raw = self.raw_data_folder.as_deref().ok_or_else(|| {
            CliError::validation_with_hint(
                "--raw-data-folder is required",
                "pass --raw-data-folder <path>",
            )
        })?;
        Ok(fs_path::absolutize(raw, cwd))
    }
}
