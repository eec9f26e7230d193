//! Train run construction.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::eval::EvalOptions;
use crate::experiment::ExperimentFolder;
use crate::Result;
use prepx_common_fs as fs_util;

/// Link name for the raw data folder inside a run.
pub(crate) const RAW_DATA_LINK: &str = "raw_data";
/// Link name for the binarized data folder inside a run.
pub(crate) const BINARIZED_DATA_LINK: &str = "binarized_data";
/// Checkpoint folder name inside a train run.
const CHECKPOINT_DIR: &str = "checkpoints";
/// Conventional best-checkpoint filename; produced by training, not here.
const BEST_CHECKPOINT: &str = "checkpoint_best.pt";
/// Tensorboard folder name inside a train run.
const TENSORBOARD_DIR: &str = "tensorboard";
/// Link name for the attached eval run.
const EVAL_LINK: &str = "eval";

/// Options for building a train run.
#[derive(Debug, Clone)]
pub struct TrainOptions {
    raw_data_folder: PathBuf,
    checkpoint_folder: Option<PathBuf>,
    binarized_data_folder: Option<PathBuf>,
    eval_folder: Option<PathBuf>,
    with_tensorboard: bool,
}

impl TrainOptions {
    /// Options linking the run to `raw_data_folder`, with a fresh
    /// checkpoint folder, a tensorboard folder, and a cascaded eval run.
    pub fn new(raw_data_folder: impl Into<PathBuf>) -> Self {
        Self {
            raw_data_folder: raw_data_folder.into(),
            checkpoint_folder: None,
            binarized_data_folder: None,
            eval_folder: None,
            with_tensorboard: true,
        }
    }

    /// Link `checkpoints` to an external folder instead of creating one.
    pub fn checkpoint_folder(mut self, folder: impl Into<PathBuf>) -> Self {
        self.checkpoint_folder = Some(folder.into());
        self
    }

    /// Link `binarized_data` to this folder, when it exists on disk.
    pub fn binarized_data_folder(mut self, folder: impl Into<PathBuf>) -> Self {
        self.binarized_data_folder = Some(folder.into());
        self
    }

    /// Attach an existing eval folder instead of cascading a new one.
    ///
    /// Ignored when the folder does not exist, in which case the cascade
    /// runs as if nothing was attached.
    pub fn eval_folder(mut self, folder: impl Into<PathBuf>) -> Self {
        self.eval_folder = Some(folder.into());
        self
    }

    /// Whether to create an empty `tensorboard/` folder (default true).
    pub fn with_tensorboard(mut self, enabled: bool) -> Self {
        self.with_tensorboard = enabled;
        self
    }
}

/// A train run under `<experiment>/train/<name>` with its derived link
/// paths, computed once at construction.
pub(crate) struct TrainFolder {
    name: String,
    path: PathBuf,
    options: TrainOptions,
    raw_data_link: PathBuf,
    checkpoint_link: PathBuf,
    checkpoint_best: PathBuf,
}

impl TrainFolder {
    pub(crate) fn new(name: &str, path: PathBuf, options: TrainOptions) -> Self {
        let raw_data_link = path.join(RAW_DATA_LINK);
        let checkpoint_link = path.join(CHECKPOINT_DIR);
        let checkpoint_best = checkpoint_link.join(BEST_CHECKPOINT);
        Self {
            name: name.to_string(),
            path,
            options,
            raw_data_link,
            checkpoint_link,
            checkpoint_best,
        }
    }

    /// Run the construction protocol and return the train run path.
    pub(crate) fn create(self, parent: &ExperimentFolder) -> Result<PathBuf> {
        fs_util::ensure_dir(&self.path)?;

        info!(
            link = %self.raw_data_link.display(),
            target = %self.options.raw_data_folder.display(),
            "linking raw data"
        );
        fs_util::require_exists(&self.options.raw_data_folder)?;
        fs_util::symlink(&self.options.raw_data_folder, &self.raw_data_link)?;

        if let Some(binarized) = &self.options.binarized_data_folder {
            let link = self.path.join(BINARIZED_DATA_LINK);
            if binarized.exists() {
                info!(link = %link.display(), target = %binarized.display(), "linking binarized data");
                fs_util::symlink(binarized, &link)?;
            } else {
                debug!(target = %binarized.display(), "binarized data source absent, skipping link");
            }
        }

        match &self.options.checkpoint_folder {
            Some(folder) => {
                info!(link = %self.checkpoint_link.display(), target = %folder.display(), "linking checkpoints");
                fs_util::require_exists(folder)?;
                fs_util::symlink(folder, &self.checkpoint_link)?;
            }
            None => {
                info!(path = %self.checkpoint_link.display(), "creating empty checkpoint folder");
                fs_util::ensure_dir(&self.checkpoint_link)?;
            }
        }

        if self.options.with_tensorboard {
            let tensorboard = self.path.join(TENSORBOARD_DIR);
            info!(path = %tensorboard.display(), "creating tensorboard folder");
            fs_util::ensure_dir(&tensorboard)?;
        }

        // Each train run owns exactly one eval run, created lazily unless
        // an existing one is attached. The checkpoint handed over is the
        // conventional best-checkpoint path, which training has not
        // produced yet.
        let eval_name = format!("eval_{}", self.name);
        let eval_path = match &self.options.eval_folder {
            Some(folder) if folder.exists() => folder.clone(),
            _ => parent.create_eval(
                &eval_name,
                EvalOptions::new(&self.checkpoint_best, &self.raw_data_link)
                    .binarized_data_folder(self.path.join(BINARIZED_DATA_LINK)),
            )?,
        };

        let eval_link = self.path.join(EVAL_LINK);
        info!(link = %eval_link.display(), target = %eval_path.display(), "linking eval run");
        fs_util::symlink(&eval_path, &eval_link)?;

        Ok(self.path)
    }
}
