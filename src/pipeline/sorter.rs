//! Chronological ordering.

use crate::constants::columns::TIMESTAMP;
use crate::error::{PipelineError, Result};
use crate::models::SensorTable;
use polars::prelude::*;
use tracing::{error, info};

/// Stable ascending sort on `timestamp`, missing timestamps last
///
/// An empty table is reported and left as it is.
pub fn sort_by_timestamp(table: &mut SensorTable) -> Result<()> {
    info!("Sorting rows by {}", TIMESTAMP);

    if table.is_empty() {
        error!("Table is empty, nothing to sort");
        return Ok(());
    }

    if table.frame().column(TIMESTAMP).is_err() {
        return Err(PipelineError::missing_column(TIMESTAMP));
    }

    let sorted = table
        .frame()
        .clone()
        .lazy()
        .sort_by_exprs(
            [col(TIMESTAMP)],
            SortMultipleOptions::default()
                .with_maintain_order(true)
                .with_nulls_last(true),
        )
        .collect()?;
    *table.frame_mut() = sorted;

    Ok(())
}
