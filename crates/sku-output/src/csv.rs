//! CSV output.

use std::fs::File;
use std::path::Path;

use polars::prelude::{CsvWriter, DataFrame, SerWriter};
use tracing::debug;

use sku_model::{MapperError, Result};

/// Write a frame to `path` as UTF-8 CSV with a header row.
///
/// Null cells become empty fields.
pub fn write_csv_frame(df: &DataFrame, path: &Path) -> Result<()> {
    let mut file = File::create(path).map_err(|source| MapperError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;

    let mut out = df.clone();
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut out)?;

    debug!(path = %path.display(), rows = df.height(), "csv written");
    Ok(())
}
