//! Excel output.

use std::path::Path;

use polars::prelude::{DataFrame, DataType};
use rust_xlsxwriter::{Workbook, XlsxError};
use tracing::debug;

use sku_model::{MapperError, Result};

/// Worksheet name for generated workbooks.
const SHEET_NAME: &str = "Sheet1";

fn workbook_error(path: &Path, error: XlsxError) -> MapperError {
    MapperError::WorkbookSave {
        path: path.to_path_buf(),
        message: error.to_string(),
    }
}

/// Write a frame to `path` as a single-sheet xlsx workbook.
///
/// The first row carries the column headers. Every cell is written as
/// text; null cells are left empty.
pub fn write_excel_frame(df: &DataFrame, path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(SHEET_NAME)
        .map_err(|error| workbook_error(path, error))?;

    for (col_idx, column) in df.get_columns().iter().enumerate() {
        let col = col_idx as u16;
        worksheet
            .write_string(0, col, column.name().as_str())
            .map_err(|error| workbook_error(path, error))?;

        let values = column.cast(&DataType::String)?;
        let ca = values.str()?;
        for (row_idx, value) in ca.into_iter().enumerate() {
            if let Some(text) = value {
                worksheet
                    .write_string(row_idx as u32 + 1, col, text)
                    .map_err(|error| workbook_error(path, error))?;
            }
        }
    }

    workbook
        .save(path)
        .map_err(|error| workbook_error(path, error))?;

    debug!(path = %path.display(), rows = df.height(), "workbook written");
    Ok(())
}
