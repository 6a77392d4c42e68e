//! Output writing for processed tables
//!
//! Writes the final table as CSV and as JSON Lines. Both files share a stem
//! derived from the run's start time (`HH_MM_SS_DDMMYYYY`). The two writes
//! are independent: a failure in one is logged and the other still runs.

use crate::constants::{CSV_EXTENSION, JSON_EXTENSION, OUTPUT_SEPARATOR, OUTPUT_STEM_FORMAT};
use crate::error::{PipelineError, Result};
use crate::models::{PersistReport, SensorTable};
use chrono::NaiveDateTime;
use polars::prelude::*;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

/// Writer for the CSV and JSON Lines exports of one run
#[derive(Debug, Clone)]
pub struct OutputWriter {
    output_dir: PathBuf,
    stem: String,
}

impl OutputWriter {
    /// Create a writer whose file names derive from `started_at`
    pub fn new(output_dir: impl Into<PathBuf>, started_at: NaiveDateTime) -> Self {
        Self {
            output_dir: output_dir.into(),
            stem: output_stem(started_at),
        }
    }

    pub fn stem(&self) -> &str {
        &self.stem
    }

    pub fn csv_path(&self) -> PathBuf {
        self.output_path(CSV_EXTENSION)
    }

    pub fn json_path(&self) -> PathBuf {
        self.output_path(JSON_EXTENSION)
    }

    fn output_path(&self, extension: &str) -> PathBuf {
        self.output_dir.join(format!("{}.{}", self.stem, extension))
    }

    /// Write both exports, without the key column
    ///
    /// Never fails: each error is logged and reported as a missing path.
    pub fn persist(&self, table: &SensorTable) -> PersistReport {
        info!("Saving {} rows", table.height());

        let mut frame = match table.export_frame() {
            Ok(frame) => frame,
            Err(e) => {
                error!("Failed to prepare table for export: {}", e);
                return PersistReport::default();
            }
        };

        let csv_path = self.csv_path();
        let csv_written = log_outcome(&csv_path, self.write_csv(&mut frame, &csv_path));

        let json_path = self.json_path();
        let json_written = log_outcome(&json_path, self.write_json(&mut frame, &json_path));

        PersistReport {
            csv_path: csv_written,
            json_path: json_written,
        }
    }

    fn write_csv(&self, frame: &mut DataFrame, path: &Path) -> Result<()> {
        debug!("Writing CSV to {}", path.display());
        let file = File::create(path).map_err(|e| write_error(path, e))?;

        CsvWriter::new(file)
            .include_header(true)
            .with_separator(OUTPUT_SEPARATOR)
            .finish(frame)
            .map_err(|e| write_error(path, e))
    }

    fn write_json(&self, frame: &mut DataFrame, path: &Path) -> Result<()> {
        debug!("Writing JSON Lines to {}", path.display());
        let file = File::create(path).map_err(|e| write_error(path, e))?;

        JsonWriter::new(file)
            .with_json_format(JsonFormat::JsonLines)
            .finish(frame)
            .map_err(|e| write_error(path, e))
    }
}

/// File stem shared by both exports, e.g. `14_07_09_05032024`
pub fn output_stem(started_at: NaiveDateTime) -> String {
    started_at.format(OUTPUT_STEM_FORMAT).to_string()
}

fn write_error(path: &Path, reason: impl std::fmt::Display) -> PipelineError {
    PipelineError::Write {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}

fn log_outcome(path: &Path, result: Result<()>) -> Option<PathBuf> {
    match result {
        Ok(()) => {
            info!("Data written to {}", path.display());
            Some(path.to_path_buf())
        }
        Err(e) => {
            error!("{}", e);
            None
        }
    }
}
