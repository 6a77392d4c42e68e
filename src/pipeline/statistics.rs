//! Whole-table statistics.
//!
//! Computes min, max and mean of the temperature and utilization columns
//! and attaches them to every row as broadcast columns, so the classifier
//! and both row-wise exports can read them directly.

use crate::constants::columns::{
    TEMPERATURE, TEMPERATURE_MAX, TEMPERATURE_MEAN, TEMPERATURE_MIN, UTILIZATION,
    UTILIZATION_MAX, UTILIZATION_MEAN, UTILIZATION_MIN,
};
use crate::error::{PipelineError, Result};
use crate::models::{ColumnStatistics, SensorTable, TableStatistics};
use polars::prelude::*;
use tracing::{debug, error, info};

/// Compute the statistics and broadcast them onto every row
///
/// Returns `None` and leaves the table untouched when it has no rows.
pub fn annotate_statistics(table: &mut SensorTable) -> Result<Option<TableStatistics>> {
    info!("Adding statistics columns");

    if table.is_empty() {
        error!("Table is empty, statistics cannot be computed");
        return Ok(None);
    }

    let statistics = compute_statistics(table.frame())?;
    debug!("Computed statistics: {:?}", statistics);

    let annotated = table
        .frame()
        .clone()
        .lazy()
        .with_columns([
            scalar(statistics.temperature.min).alias(TEMPERATURE_MIN),
            scalar(statistics.temperature.max).alias(TEMPERATURE_MAX),
            scalar(statistics.temperature.mean).alias(TEMPERATURE_MEAN),
            scalar(statistics.utilization.min).alias(UTILIZATION_MIN),
            scalar(statistics.utilization.max).alias(UTILIZATION_MAX),
            scalar(statistics.utilization.mean).alias(UTILIZATION_MEAN),
        ])
        .collect()?;
    *table.frame_mut() = annotated;

    Ok(Some(statistics))
}

/// Aggregate both measurement columns without touching the frame
pub fn compute_statistics(frame: &DataFrame) -> Result<TableStatistics> {
    Ok(TableStatistics {
        temperature: column_statistics(frame, TEMPERATURE)?,
        utilization: column_statistics(frame, UTILIZATION)?,
    })
}

fn column_statistics(frame: &DataFrame, name: &str) -> Result<ColumnStatistics> {
    let column = frame
        .column(name)
        .map_err(|_| PipelineError::missing_column(name))?;
    let values = column
        .as_materialized_series()
        .cast(&DataType::Float64)?;
    let values = values.f64()?;

    Ok(ColumnStatistics {
        min: values.min(),
        max: values.max(),
        mean: values.mean(),
    })
}

/// Literal broadcast to every row; an all-missing column yields a null column
fn scalar(value: Option<f64>) -> Expr {
    match value {
        Some(value) => lit(value),
        None => lit(NULL).cast(DataType::Float64),
    }
}
