//! Integration tests for the pipeline module
//!
//! Runs the complete pipeline against small input files in temporary
//! directories.


use polars::prelude::DataFrame;

/// Values of a float column, in row order
pub fn f64_values(frame: &DataFrame, name: &str) -> Vec<Option<f64>> {
    frame
        .column(name)
        .unwrap()
        .as_materialized_series()
        .f64()
        .unwrap()
        .into_iter()
        .collect()
}

/// Values of an integer column, in row order
pub fn i64_values(frame: &DataFrame, name: &str) -> Vec<Option<i64>> {
    frame
        .column(name)
        .unwrap()
        .as_materialized_series()
        .i64()
        .unwrap()
        .into_iter()
        .collect()
}

/// Values of a string column, in row order
pub fn str_values<'a>(frame: &'a DataFrame, name: &str) -> Vec<Option<&'a str>> {
    frame
        .column(name)
        .unwrap()
        .as_materialized_series()
        .str()
        .unwrap()
        .into_iter()
        .collect()
}
