//! Eval run construction.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::train::{BINARIZED_DATA_LINK, RAW_DATA_LINK};
use crate::Result;
use prepx_common_fs as fs_util;

/// Link name for the checkpoint under evaluation.
const CHECKPOINT_LINK: &str = "checkpoint";
/// Link name for the back-reference to the originating train run.
const TRAIN_LINK: &str = "train";

/// Options for building an eval run.
#[derive(Debug, Clone)]
pub struct EvalOptions {
    checkpoint: PathBuf,
    raw_data_folder: PathBuf,
    binarized_data_folder: Option<PathBuf>,
    train_folder: Option<PathBuf>,
}

impl EvalOptions {
    /// Options evaluating `checkpoint` against `raw_data_folder`.
    ///
    /// The checkpoint may be a file or a folder and is not required to
    /// exist: the train cascade points here before training has produced
    /// anything.
    pub fn new(checkpoint: impl Into<PathBuf>, raw_data_folder: impl Into<PathBuf>) -> Self {
        Self {
            checkpoint: checkpoint.into(),
            raw_data_folder: raw_data_folder.into(),
            binarized_data_folder: None,
            train_folder: None,
        }
    }

    /// Link `binarized_data` to this folder, when it exists on disk.
    pub fn binarized_data_folder(mut self, folder: impl Into<PathBuf>) -> Self {
        self.binarized_data_folder = Some(folder.into());
        self
    }

    /// Link `train` back to the originating train run folder.
    ///
    /// Pure back-reference for navigability; carries no ownership.
    pub fn train_folder(mut self, folder: impl Into<PathBuf>) -> Self {
        self.train_folder = Some(folder.into());
        self
    }
}

/// An eval run under `<experiment>/eval/<name>` with its derived link
/// paths.
pub(crate) struct EvalFolder {
    name: String,
    path: PathBuf,
    options: EvalOptions,
    checkpoint_link: PathBuf,
    raw_data_link: PathBuf,
}

impl EvalFolder {
    pub(crate) fn new(name: &str, path: PathBuf, options: EvalOptions) -> Self {
        let checkpoint_link = path.join(CHECKPOINT_LINK);
        let raw_data_link = path.join(RAW_DATA_LINK);
        Self {
            name: name.to_string(),
            path,
            options,
            checkpoint_link,
            raw_data_link,
        }
    }

    /// Run the construction protocol and return the eval run path.
    pub(crate) fn create(self) -> Result<PathBuf> {
        info!(name = %self.name, path = %self.path.display(), "creating eval run");
        fs_util::ensure_dir(&self.path)?;

        // No existence check: the target may be the not-yet-produced
        // best checkpoint handed over by the train cascade.
        info!(
            link = %self.checkpoint_link.display(),
            target = %self.options.checkpoint.display(),
            "linking checkpoint"
        );
        fs_util::symlink(&self.options.checkpoint, &self.checkpoint_link)?;

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

        if let Some(train_folder) = &self.options.train_folder {
            let link = self.path.join(TRAIN_LINK);
            info!(link = %link.display(), target = %train_folder.display(), "linking train run");
            fs_util::symlink(train_folder, &link)?;
        }

        Ok(self.path)
    }
}
