//! Core data structures for sensor processing.
//!
//! Defines the keyed table passed through the pipeline, the statistics
//! value objects, row status and the reports returned to callers.

use crate::constants::{STATUS_OK, STATUS_WARNING};
use crate::error::Result;
use polars::prelude::DataFrame;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Table of readings plus the name of its row-key column
///
/// The key column is the first column of the source file. It stays in the
/// frame while the pipeline runs and is dropped on export.
#[derive(Debug, Clone)]
pub struct SensorTable {
    frame: DataFrame,
    key_column: String,
}

impl SensorTable {
    pub fn new(frame: DataFrame, key_column: impl Into<String>) -> Self {
        Self {
            frame,
            key_column: key_column.into(),
        }
    }

    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    pub fn frame_mut(&mut self) -> &mut DataFrame {
        &mut self.frame
    }

    pub fn key_column(&self) -> &str {
        &self.key_column
    }

    pub fn height(&self) -> usize {
        self.frame.height()
    }

    pub fn is_empty(&self) -> bool {
        self.frame.height() == 0
    }

    /// Copy of the frame without the key column, in current column order
    pub fn export_frame(&self) -> Result<DataFrame> {
        Ok(self.frame.drop(&self.key_column)?)
    }
}

/// Whole-column aggregates; `None` when every cell is missing
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ColumnStatistics {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
}

/// Aggregates over the two measurement columns
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TableStatistics {
    pub temperature: ColumnStatistics,
    pub utilization: ColumnStatistics,
}

/// Per-row classification result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Ok,
    Warning,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Ok => STATUS_OK,
            Status::Warning => STATUS_WARNING,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Paths written by the persister; `None` where that write failed
#[derive(Debug, Default, Clone)]
pub struct PersistReport {
    pub csv_path: Option<PathBuf>,
    pub json_path: Option<PathBuf>,
}

impl PersistReport {
    pub fn all_written(&self) -> bool {
        self.csv_path.is_some() && self.json_path.is_some()
    }
}

/// Outcome of a full pipeline run
#[derive(Debug, Default)]
pub struct PipelineReport {
    pub rows: usize,
    pub warnings: Option<usize>,
    pub statistics: Option<TableStatistics>,
    pub persisted: PersistReport,
    pub processing_time_ms: u128,
}
