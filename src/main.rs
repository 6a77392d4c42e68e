use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use clap::Parser;
use colored::*;
use sensor_processor::cli::Args;
use sensor_processor::{Pipeline, PipelineReport, logging};
use std::process;

fn main() {
    // Output files are named after the moment the process started
    let started_at = Local::now().naive_local();
    let args = Args::parse();

    if let Err(error) = run(&args, started_at) {
        eprintln!("Error: {:#}", error);
        process::exit(1);
    }
}

/// Run the pipeline with logging active; the log guard is dropped on return
fn run(args: &Args, started_at: NaiveDateTime) -> Result<()> {
    let config = args.to_config();
    let _logging = logging::init(&config.log_path, args.verbose)
        .context("Failed to set up logging")?;

    let report = Pipeline::new(config, started_at).run().map_err(|error| {
        let stage = if error.is_load_failure() {
            "Failed to load input"
        } else {
            "Processing failed"
        };
        anyhow::Error::new(error).context(stage)
    })?;

    if !args.quiet {
        print_summary(&report);
    }
    Ok(())
}

fn print_summary(report: &PipelineReport) {
    println!("\n{}", "Processing Summary".bright_green().bold());
    println!(
        "  {} {}ms",
        "Time elapsed:".bright_cyan(),
        report.processing_time_ms.to_string().bright_white()
    );
    println!(
        "  {} {}",
        "Rows:".bright_cyan(),
        report.rows.to_string().bright_white().bold()
    );
    if let Some(warnings) = report.warnings {
        let count = warnings.to_string();
        let count = if warnings > 0 {
            count.bright_yellow().bold()
        } else {
            count.bright_white()
        };
        println!("  {} {}", "Warnings:".bright_cyan(), count);
    }

    let outputs = [
        ("CSV:", &report.persisted.csv_path),
        ("JSON:", &report.persisted.json_path),
    ];
    for (label, path) in outputs {
        match path {
            Some(path) => println!("  {} {}", label.bright_cyan(), path.display()),
            None => println!("  {} {}", label.bright_red(), "write failed".bright_red()),
        }
    }
}
