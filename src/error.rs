//! Error handling for sensor pipeline operations.
//!
//! Provides error types with context for loading, column lookup,
//! output writing and logger setup failures.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("Input file not found at path: {path}")]
    InputNotFound { path: PathBuf },

    #[error("Failed to load input file: {path} - {reason}")]
    Load { path: PathBuf, reason: String },

    #[error("Required column '{column}' is missing from the table")]
    MissingColumn { column: String },

    #[error("Failed to write output file: {path} - {reason}")]
    Write { path: PathBuf, reason: String },

    #[error("Logging setup failed for {path}: {reason}")]
    Logging { path: PathBuf, reason: String },
}

impl PipelineError {
    /// Create a missing column error
    pub fn missing_column(column: impl Into<String>) -> Self {
        Self::MissingColumn {
            column: column.into(),
        }
    }

    /// True when the error means the input could not be loaded at all
    pub fn is_load_failure(&self) -> bool {
        matches!(self, Self::InputNotFound { .. } | Self::Load { .. })
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;
