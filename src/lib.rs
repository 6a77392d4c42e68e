//! Sensor Processor Library
//!
//! Reads a semicolon-delimited file of sensor readings and runs it through
//! a fixed pipeline:
//! - Forward-fill missing cells column by column
//! - Attach whole-table min/max/mean of temperature and utilization
//! - Classify each row as `OK` or `WARNING`
//! - Sort rows by timestamp
//! - Write the result as CSV and JSON Lines under a timestamped stem

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod models;
pub mod pipeline;

// Re-export commonly used types
pub use config::PipelineConfig;
pub use error::{PipelineError, Result};
pub use models::{ColumnStatistics, PipelineReport, SensorTable, Status, TableStatistics};
pub use pipeline::Pipeline;
