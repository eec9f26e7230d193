//! Error types for experiment scaffolding.

use prepx_common_fs::FsError;
use thiserror::Error;

/// The main error type for scaffolding operations.
#[derive(Debug, Error)]
pub enum ExperimentError {
    /// A train run with this name already exists in the experiment.
    #[error("a train folder named '{name}' already exists")]
    NameCollision {
        /// The colliding train run name.
        name: String,
    },

    /// A filesystem operation failed.
    #[error(transparent)]
    Fs(#[from] FsError),
}

impl ExperimentError {
    /// Whether this error is a train-name collision.
    pub fn is_name_collision(&self) -> bool {
        matches!(self, Self::NameCollision { .. })
    }

    /// Whether this error is a missing symlink source.
    pub fn is_missing_source(&self) -> bool {
        matches!(self, Self::Fs(FsError::SourceNotFound { .. }))
    }
}

/// Result type alias using [`ExperimentError`].
pub type Result<T> = std::result::Result<T, ExperimentError>;
