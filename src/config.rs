//! Configuration management.
//!
//! Provides the configuration structure for a pipeline run: where the
//! input is read from, where outputs and the log file are written.
//! Defaults reproduce the fixed file layout the tool has always used.

use crate::constants::{DEFAULT_INPUT_FILE, DEFAULT_LOG_FILE, DEFAULT_OUTPUT_DIR};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration for a pipeline run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Semicolon-delimited input file
    pub input_path: PathBuf,

    /// Directory receiving the CSV and JSON Lines outputs
    pub output_dir: PathBuf,

    /// Log file, truncated at startup
    pub log_path: PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_FILE),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            log_path: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl PipelineConfig {
    /// Create configuration with a custom input file
    pub fn with_input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = path.into();
        self
    }

    /// Create configuration with a custom output directory
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Create configuration with a custom log file
    pub fn with_log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_path = path.into();
        self
    }

    pub fn input_path(&self) -> &Path {
        &self.input_path
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}
