//! CLI error handling.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use thiserror::Error;

use prepx_experiment::ExperimentError;

use crate::Exit;

/// CLI error type with exit-code mapping.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{message}")]
    Validation {
        message: String,
        hint: Option<String>,
    },

    #[error(transparent)]
    Experiment(#[from] ExperimentError),

    #[error("{message}")]
    Io {
        message: String,
        #[source]
        source: io::Error,
        path: Option<PathBuf>,
    },

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl CliError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        let exit = match self {
            Self::Validation { .. } => Exit::ValidationError,
            Self::Experiment(e) if e.is_name_collision() => Exit::NameCollision,
            Self::Experiment(e) if e.is_missing_source() => Exit::MissingSource,
            Self::Experiment(_) => Exit::IoError,
            Self::Io { .. } => Exit::IoError,
            Self::Other(_) => Exit::GeneralError,
        };
        exit.into()
    }

    /// Get the hint for this error if available
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::Validation { hint, .. } => hint.as_deref(),
            _ => None,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            hint: None,
        }
    }

    /// Create a validation error with hint
    pub fn validation_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    /// Create an I/O error with path context
    pub fn io_with_path(
        message: impl Into<String>,
        source: io::Error,
        path: impl Into<PathBuf>,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source,
            path: Some(path.into()),
        }
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
            source: err,
            path: None,
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Validation {
            message: format!("invalid JSON output: {err}"),
            hint: None,
        }
    }
}
