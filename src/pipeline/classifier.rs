//! Row status classification.
//!
//! A row is flagged `WARNING` when either reading rises above its column
//! mean by more than `WARNING_THRESHOLD` times the peak utilization:
//!
//! ```text
//! temperature > temperature_mean + 0.3 * utilization_max
//!   or utilization > utilization_mean + 0.3 * utilization_max
//! ```
//!
//! Both margins are scaled by `utilization_max`, including the temperature
//! one. Any comparison against a missing value counts as false.

use crate::constants::WARNING_THRESHOLD;
use crate::constants::columns::{
    STATUS, TEMPERATURE, TEMPERATURE_MEAN, UTILIZATION, UTILIZATION_MAX, UTILIZATION_MEAN,
};
use crate::error::{PipelineError, Result};
use crate::models::{SensorTable, Status};
use polars::prelude::*;
use tracing::{error, info};

const REQUIRED_COLUMNS: [&str; 5] = [
    TEMPERATURE,
    UTILIZATION,
    TEMPERATURE_MEAN,
    UTILIZATION_MAX,
    UTILIZATION_MEAN,
];

/// Add the `status` column; returns the number of `WARNING` rows
///
/// Returns `None` and leaves the table untouched when it has no rows.
pub fn classify_status(table: &mut SensorTable) -> Result<Option<usize>> {
    info!("Adding status column");

    if table.is_empty() {
        error!("Table is empty, status cannot be assigned");
        return Ok(None);
    }

    for name in REQUIRED_COLUMNS {
        if table.frame().column(name).is_err() {
            return Err(PipelineError::missing_column(name));
        }
    }

    let classified = table
        .frame()
        .clone()
        .lazy()
        .with_column(status_expr())
        .collect()?;
    *table.frame_mut() = classified;

    let warnings = count_status(table.frame(), Status::Warning)?;
    info!(
        "{} of {} rows flagged {}",
        warnings,
        table.height(),
        Status::Warning
    );

    Ok(Some(warnings))
}

/// Expression producing the status label for each row
pub fn status_expr() -> Expr {
    let margin = lit(WARNING_THRESHOLD) * col(UTILIZATION_MAX);
    let temperature_high = col(TEMPERATURE).gt(col(TEMPERATURE_MEAN) + margin.clone());
    let utilization_high = col(UTILIZATION).gt(col(UTILIZATION_MEAN) + margin);

    when(temperature_high.or(utilization_high))
        .then(lit(Status::Warning.as_str()))
        .otherwise(lit(Status::Ok.as_str()))
        .alias(STATUS)
}

fn count_status(frame: &DataFrame, status: Status) -> Result<usize> {
    let labels = frame.column(STATUS)?.as_materialized_series().str()?;
    Ok(labels
        .into_iter()
        .filter(|label| *label == Some(status.as_str()))
        .count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::statistics::annotate_statistics;
    use crate::pipeline::tests::{f64_values, str_values};

    fn annotated_table(temperature: &[f64], utilization: &[f64]) -> SensorTable {
        let ids: Vec<i64> = (0..temperature.len() as i64).collect();
        let frame = df!(
            "id" => ids,
            "temperature" => temperature,
            "utilization" => utilization,
        )
        .unwrap();
        let mut table = SensorTable::new(frame, "id");
        annotate_statistics(&mut table).unwrap();
        table
    }

    #[test]
    fn test_three_row_scenario() {
        // mean temperature 24, max utilization 3, margin 0.9:
        // 50 > 24.9 flags row 1, and utilization 3 > 2 + 0.9 flags row 2
        let mut table = annotated_table(&[10.0, 50.0, 12.0], &[1.0, 2.0, 3.0]);

        let warnings = classify_status(&mut table).unwrap();

        assert_eq!(warnings, Some(2));
        assert_eq!(
            str_values(table.frame(), STATUS),
            vec![Some("OK"), Some("WARNING"), Some("WARNING")]
        );
    }

    #[test]
    fn test_temperature_branch_alone() {
        // utilization flat at 2: utilization never exceeds 2 + 0.6
        let mut table = annotated_table(&[10.0, 50.0, 12.0], &[2.0, 2.0, 2.0]);

        let warnings = classify_status(&mut table).unwrap();

        assert_eq!(warnings, Some(1));
        assert_eq!(
            str_values(table.frame(), STATUS),
            vec![Some("OK"), Some("WARNING"), Some("OK")]
        );
    }

    #[test]
    fn test_utilization_branch() {
        // utilization mean 0.3, max 1.0: 1.0 > 0.3 + 0.3 triggers
        let mut table = annotated_table(&[5.0, 5.0, 5.0, 5.0], &[0.0, 0.1, 0.1, 1.0]);

        classify_status(&mut table).unwrap();

        assert_eq!(
            str_values(table.frame(), STATUS),
            vec![Some("OK"), Some("OK"), Some("OK"), Some("WARNING")]
        );
    }

    #[test]
    fn test_boundary_is_not_a_warning() {
        // mean 2, max utilization 10: bound is exactly 5 for temperature
        let frame = df!(
            "id" => [0i64, 1],
            "temperature" => [5.0, 5.0],
            "utilization" => [0.0, 0.0],
            "temperature_mean" => [2.0, 2.0],
            "utilization_mean" => [0.0, 0.0],
            "utilization_max" => [10.0, 10.0],
        )
        .unwrap();
        let mut table = SensorTable::new(frame, "id");

        let warnings = classify_status(&mut table).unwrap();

        assert_eq!(warnings, Some(0));
    }

    #[test]
    fn test_rule_holds_for_every_row() {
        let mut table = annotated_table(
            &[18.0, 19.5, 35.0, 21.0, 20.5, 17.0],
            &[0.2, 0.9, 0.4, 0.3, 0.25, 0.1],
        );

        classify_status(&mut table).unwrap();

        let frame = table.frame();
        let temperature = f64_values(frame, TEMPERATURE);
        let utilization = f64_values(frame, UTILIZATION);
        let temperature_mean = f64_values(frame, TEMPERATURE_MEAN);
        let utilization_mean = f64_values(frame, UTILIZATION_MEAN);
        let utilization_max = f64_values(frame, UTILIZATION_MAX);
        let status = str_values(frame, STATUS);

        for row in 0..frame.height() {
            let margin = WARNING_THRESHOLD * utilization_max[row].unwrap();
            let expected = temperature[row].unwrap() > temperature_mean[row].unwrap() + margin
                || utilization[row].unwrap() > utilization_mean[row].unwrap() + margin;
            let label = if expected { "WARNING" } else { "OK" };
            assert_eq!(status[row], Some(label), "row {row}");
        }
    }

    #[test]
    fn test_missing_reading_compares_false() {
        let frame = df!(
            "id" => [0i64, 1],
            "temperature" => [None, Some(1.0)],
            "utilization" => [Some(0.0), None],
            "temperature_mean" => [1.0, 1.0],
            "utilization_mean" => [0.0, 0.0],
            "utilization_max" => [1.0, 1.0],
        )
        .unwrap();
        let mut table = SensorTable::new(frame, "id");

        classify_status(&mut table).unwrap();

        assert_eq!(
            str_values(table.frame(), STATUS),
            vec![Some("OK"), Some("OK")]
        );
    }

    #[test]
    fn test_empty_table_is_not_classified() {
        let frame = df!("id" => Vec::<i64>::new()).unwrap();
        let mut table = SensorTable::new(frame, "id");

        let warnings = classify_status(&mut table).unwrap();

        assert!(warnings.is_none());
        assert!(table.frame().column(STATUS).is_err());
    }

    #[test]
    fn test_requires_statistics_columns() {
        let frame = df!(
            "id" => [0i64],
            "temperature" => [1.0],
            "utilization" => [1.0],
        )
        .unwrap();
        let mut table = SensorTable::new(frame, "id");

        let result = classify_status(&mut table);

        match result {
            Err(PipelineError::MissingColumn { column }) => assert_eq!(column, TEMPERATURE_MEAN),
            other => panic!("Expected MissingColumn error, got {:?}", other),
        }
    }
}
