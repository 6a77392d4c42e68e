//! Input loading.
//!
//! Reads the semicolon-delimited readings file into a [`SensorTable`].
//! The first column of the file becomes the row key.

use crate::constants::{INPUT_SEPARATOR, MISSING_VALUE_MARKERS};
use crate::error::{PipelineError, Result};
use crate::models::SensorTable;
use polars::prelude::*;
use std::path::Path;
use tracing::{debug, info};

/// Load the readings file at `path`
///
/// Any failure here is fatal for the run: no partial table is returned.
pub fn load_table(path: &Path) -> Result<SensorTable> {
    debug!("Loading readings from {}", path.display());

    if !path.is_file() {
        return Err(PipelineError::InputNotFound {
            path: path.to_path_buf(),
        });
    }

    let markers: Vec<PlSmallStr> = MISSING_VALUE_MARKERS
        .iter()
        .copied()
        .map(PlSmallStr::from_static)
        .collect();

    let frame = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .map_parse_options(|options| {
            options
                .with_separator(INPUT_SEPARATOR)
                .with_null_values(Some(NullValues::AllColumns(markers.clone())))
        })
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .and_then(|reader| reader.finish())
        .map_err(|e| PipelineError::Load {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    let key_column = frame
        .get_column_names()
        .first()
        .map(|name| name.to_string())
        .ok_or_else(|| PipelineError::Load {
            path: path.to_path_buf(),
            reason: "file has no columns".to_string(),
        })?;

    info!(
        "Loaded {} rows and {} columns from {}",
        frame.height(),
        frame.width(),
        path.display()
    );

    Ok(SensorTable::new(frame, key_column))
}
