//! Processing pipeline.
//!
//! Runs the stages in a fixed order over one table owned by the driver:
//! load, forward-fill, annotate statistics, classify status, sort by
//! timestamp, persist. Only a load failure (or a library error such as a
//! missing column) stops the run; empty-table conditions are logged and
//! the stage is skipped.

pub mod classifier;
pub mod loader;
pub mod preprocess;
pub mod sorter;
pub mod statistics;
pub mod writer;

#[cfg(test)]
pub mod tests;

use self::{
    classifier::classify_status, loader::load_table, preprocess::forward_fill,
    sorter::sort_by_timestamp, statistics::annotate_statistics, writer::OutputWriter,
};

use crate::config::PipelineConfig;
use crate::error::Result;
use crate::models::PipelineReport;
use chrono::NaiveDateTime;
use std::time::Instant;
use tracing::{error, info};

/// Driver for one pipeline run
#[derive(Debug)]
pub struct Pipeline {
    config: PipelineConfig,
    started_at: NaiveDateTime,
}

impl Pipeline {
    /// Create a pipeline; `started_at` names the output files
    pub fn new(config: PipelineConfig, started_at: NaiveDateTime) -> Self {
        Self { config, started_at }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Output writer for this run's start time and output directory
    pub fn output_writer(&self) -> OutputWriter {
        OutputWriter::new(self.config.output_dir(), self.started_at)
    }

    /// Run every stage once, in order
    pub fn run(&self) -> Result<PipelineReport> {
        self.execute().inspect_err(|e| error!("{}", e))
    }

    fn execute(&self) -> Result<PipelineReport> {
        let start_time = Instant::now();
        info!("Starting run on {}", self.config.input_path().display());

        let mut table = load_table(self.config.input_path())?;
        forward_fill(&mut table)?;
        let statistics = annotate_statistics(&mut table)?;
        let warnings = classify_status(&mut table)?;
        sort_by_timestamp(&mut table)?;
        let persisted = self.output_writer().persist(&table);

        let processing_time_ms = start_time.elapsed().as_millis();
        info!("Run finished in {}ms", processing_time_ms);

        Ok(PipelineReport {
            rows: table.height(),
            warnings,
            statistics,
            persisted,
            processing_time_ms,
        })
    }
}
