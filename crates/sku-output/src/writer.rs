//! Extension dispatch for table output.

use std::path::Path;

use polars::prelude::DataFrame;

use sku_model::{MapperError, Result};

use crate::csv::write_csv_frame;
use crate::excel::write_excel_frame;

/// Write a frame to `path`, picking the format from the file extension.
///
/// `.csv` and `.xlsx` are writable. Legacy `.xls` workbooks are read-only
/// on the input side and rejected here; callers pick `.xlsx` instead.
pub fn write_table(df: &DataFrame, path: &Path) -> Result<()> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_lowercase();

    match extension.as_str() {
        "csv" => write_csv_frame(df, path),
        "xlsx" => write_excel_frame(df, path),
        _ => Err(MapperError::UnsupportedFormat {
            path: path.to_path_buf(),
            extension,
        }),
    }
}
