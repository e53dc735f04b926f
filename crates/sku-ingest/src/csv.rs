//! CSV reading into polars DataFrames.

use std::path::Path;

use polars::prelude::{CsvReadOptions, DataFrame, SerReader};

use sku_model::{MapperError, Result};

/// Read a CSV file with a header row into a DataFrame.
///
/// Every column is read as text (no schema inference) so cell values
/// round-trip unchanged through annotation and write-out. Missing fields
/// become nulls.
pub fn read_csv_frame(path: &Path) -> Result<DataFrame> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| MapperError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| MapperError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    Ok(df)
}
