//! # agp-matrix-github
//!
//! Serializes the set of verification task names as a GitHub Actions build
//! matrix: a single structured output line the workflow parses to fan one job
//! out per task.

use thiserror::Error;

pub mod matrix;

pub use matrix::{MATRIX_OUTPUT_MARKER, matrix_line, matrix_task_names};

/// Errors that can occur during matrix emission.
#[derive(Debug, Error)]
pub enum MatrixError {
    /// The task list was empty; a matrix with no jobs is a configuration
    /// mistake, not a valid pipeline.
    #[error("cannot emit an empty build matrix")]
    EmptyMatrix,

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for matrix emission.
pub type Result<T> = std::result::Result<T, MatrixError>;
