//! Format-dispatched table reading.

use std::path::Path;

use polars::prelude::DataFrame;
use tracing::debug;

use sku_model::{MapperError, Result};

use crate::csv::read_csv_frame;
use crate::excel::read_excel_frame;
use crate::format::TableFormat;

/// Read a tabular file into a DataFrame, choosing the reader by extension.
///
/// # Errors
///
/// [`MapperError::FileNotFound`] when the path does not exist,
/// [`MapperError::UnsupportedFormat`] for unknown extensions, and
/// [`MapperError::Parse`] when the content is not readable as a table.
pub fn read_table(path: &Path) -> Result<DataFrame> {
    ensure_file_exists(path)?;
    let format = TableFormat::from_path(path)?;
    let df = match format {
        TableFormat::Csv => read_csv_frame(path)?,
        TableFormat::Excel => read_excel_frame(path)?,
    };
    debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "table loaded"
    );
    Ok(df)
}

fn ensure_file_exists(path: &Path) -> Result<()> {
    std::fs::metadata(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            MapperError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            MapperError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    Ok(())
}
