//! Command-line interface components.

use crate::config::PipelineConfig;
use crate::constants::{DEFAULT_INPUT_FILE, DEFAULT_LOG_FILE, DEFAULT_OUTPUT_DIR};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sensor_processor")]
#[command(
    about = "Annotate semicolon-delimited sensor readings with statistics and status, then export to CSV and JSON Lines"
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Path to the semicolon-delimited input file
    #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT_FILE)]
    pub input_path: PathBuf,

    /// Directory for the CSV and JSON Lines outputs
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Log file, overwritten on every run
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Mirror log events to stderr at debug level
    #[arg(short, long)]
    pub verbose: bool,

    /// Do not print the run summary
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Build the pipeline configuration from the parsed arguments
    pub fn to_config(&self) -> PipelineConfig {
        PipelineConfig::default()
            .with_input_path(&self.input_path)
            .with_output_dir(&self.output_dir)
            .with_log_path(&self.log_file)
    }
}
