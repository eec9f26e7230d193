//! The experiment root folder.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::ExperimentError;
use crate::eval::{EvalFolder, EvalOptions};
use crate::train::{TrainFolder, TrainOptions};
use crate::Result;
use prepx_common_fs as fs_util;

/// Subfolder holding train runs.
const TRAIN_ROOT: &str = "train";
/// Subfolder holding eval runs.
const EVAL_ROOT: &str = "eval";

/// Handle to an experiment root folder.
///
/// The filesystem itself is the persisted state; this handle derives
/// paths and runs the scaffolding protocols against them. It is cheap
/// to construct and does not touch the disk until an operation runs.
#[derive(Debug, Clone)]
pub struct ExperimentFolder {
    experiment_name: String,
    full_path: PathBuf,
}

impl ExperimentFolder {
    /// Create a handle for `experiment_name` under `root_folder`.
    pub fn new(experiment_name: impl Into<String>, root_folder: impl Into<PathBuf>) -> Self {
        let experiment_name = experiment_name.into();
        let full_path = root_folder.into().join(&experiment_name);
        Self {
            experiment_name,
            full_path,
        }
    }

    /// Create a handle rooted at the current working directory.
    pub fn in_current_dir(experiment_name: impl Into<String>) -> std::io::Result<Self> {
        Ok(Self::new(experiment_name, std::env::current_dir()?))
    }

    /// The experiment name.
    pub fn experiment_name(&self) -> &str {
        &self.experiment_name
    }

    /// Full path of the experiment root (`<root_folder>/<experiment_name>`).
    pub fn full_path(&self) -> &Path {
        &self.full_path
    }

    /// Path of the train root (`<full_path>/train`).
    pub fn train_root(&self) -> PathBuf {
        self.full_path.join(TRAIN_ROOT)
    }

    /// Path of the eval root (`<full_path>/eval`).
    pub fn eval_root(&self) -> PathBuf {
        self.full_path.join(EVAL_ROOT)
    }

    /// Names of the train runs currently under the train root.
    ///
    /// Empty when the train root does not exist yet.
    pub fn trains(&self) -> Result<Vec<String>> {
        let train_root = self.train_root();
        if !train_root.exists() {
            return Ok(Vec::new());
        }
        Ok(fs_util::list_dir_names(&train_root)?)
    }

    /// Create the experiment root folder if absent and return its path.
    ///
    /// Recursive and idempotent; never fails due to pre-existence.
    pub fn create_root(&self) -> Result<PathBuf> {
        info!(path = %self.full_path.display(), "creating experiment root");
        fs_util::ensure_dir(&self.full_path)?;
        Ok(self.full_path.clone())
    }

    /// Create a train run named `name` and return its path.
    ///
    /// Fails with [`ExperimentError::NameCollision`] when a train run of
    /// that name already exists. Cascades into an eval run unless an
    /// existing eval folder is attached via the options.
    pub fn create_train(&self, name: &str, options: TrainOptions) -> Result<PathBuf> {
        if self.trains()?.iter().any(|t| t == name) {
            return Err(ExperimentError::NameCollision {
                name: name.to_string(),
            });
        }

        let path = self.train_root().join(name);
        TrainFolder::new(name, path, options).create(self)
    }

    /// Create an eval run named `name` and return its path.
    ///
    /// No uniqueness check: colliding with an existing run surfaces as a
    /// link-creation failure partway through. Callers that need the
    /// guard keep names unique themselves.
    pub fn create_eval(&self, name: &str, options: EvalOptions) -> Result<PathBuf> {
        let path = self.eval_root().join(name);
        EvalFolder::new(name, path, options).create()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_derived_paths() {
        let exp = ExperimentFolder::new("myexp", "/work/experiments");
        assert_eq!(exp.experiment_name(), "myexp");
        assert_eq!(exp.full_path(), Path::new("/work/experiments/myexp"));
        assert_eq!(exp.train_root(), PathBuf::from("/work/experiments/myexp/train"));
        assert_eq!(exp.eval_root(), PathBuf::from("/work/experiments/myexp/eval"));
    }

    #[test]
    fn test_create_root_is_idempotent() {
        let dir = tempdir().unwrap();
        let exp = ExperimentFolder::new("myexp", dir.path());

        let first = exp.create_root().unwrap();
        assert!(first.is_dir());

        let second = exp.create_root().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_trains_empty_without_train_root() {
        let dir = tempdir().unwrap();
        let exp = ExperimentFolder::new("myexp", dir.path());
        exp.create_root().unwrap();

        assert!(exp.trains().unwrap().is_empty());
    }
}
