//! Experiment folder scaffolding for prepx.
//!
//! An experiment is a named folder holding `train/<name>` and
//! `eval/<name>` run folders, wired to data and checkpoint locations
//! with symbolic links. [`ExperimentFolder`] is the entry point; it
//! creates the root and builds train and eval runs. Creating a train
//! run cascades into an eval run unless an existing one is attached.
//!
//! All operations are synchronous blocking filesystem calls executed
//! in sequence. There is no rollback: a failure partway through leaves
//! the already-created part of the tree in place.

mod error;
mod eval;
mod experiment;
mod train;

pub use error::{ExperimentError, Result};
pub use eval::EvalOptions;
pub use experiment::ExperimentFolder;
pub use train::TrainOptions;
