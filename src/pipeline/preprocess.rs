//! Missing value handling.

use crate::error::Result;
use crate::models::SensorTable;
use polars::prelude::*;
use tracing::{debug, info, warn};

/// Forward-fill every column in row order
///
/// Each missing cell takes the nearest preceding non-missing value of its
/// own column. Float NaN counts as missing. Leading missing cells have
/// nothing to copy and stay missing.
pub fn forward_fill(table: &mut SensorTable) -> Result<()> {
    info!("Preprocessing: forward-filling missing values");

    if table.is_empty() {
        warn!("Table is empty, nothing to fill");
        return Ok(());
    }

    let frame = nan_to_missing(table.frame())?;
    let missing_before = missing_cells(&frame);
    if missing_before == 0 {
        debug!("No missing values found");
        return Ok(());
    }

    let filled = frame.fill_null(FillNullStrategy::Forward(None))?;
    let missing_after = missing_cells(&filled);
    *table.frame_mut() = filled;

    debug!(
        "Filled {} missing cells, {} leading cells left missing",
        missing_before - missing_after,
        missing_after
    );
    Ok(())
}

fn nan_to_missing(frame: &DataFrame) -> Result<DataFrame> {
    let float_columns: Vec<Expr> = frame
        .get_columns()
        .iter()
        .filter(|column| column.dtype().is_float())
        .map(|column| col(column.name().clone()).fill_nan(lit(NULL)))
        .collect();

    if float_columns.is_empty() {
        return Ok(frame.clone());
    }
    Ok(frame.clone().lazy().with_columns(float_columns).collect()?)
}

fn missing_cells(frame: &DataFrame) -> usize {
    frame
        .get_columns()
        .iter()
        .map(|column| column.null_count())
        .sum()
}
