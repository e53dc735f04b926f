//! Excel reading into polars DataFrames via calamine.

use std::path::Path;

use calamine::{Data, Reader, Sheets, open_workbook_auto};
use polars::prelude::{Column, DataFrame};

use sku_model::{MapperError, Result};

/// Read the first sheet of an Excel workbook into a DataFrame.
///
/// The first row of the used range is taken as the header row. Cells are
/// stringified (integers without a decimal point); empty cells become
/// nulls so blank SKUs stay explicit.
pub fn read_excel_frame(path: &Path) -> Result<DataFrame> {
    let mut workbook: Sheets<_> = open_workbook_auto(path).map_err(|e| MapperError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let sheet_names: Vec<String> = workbook.sheet_names().to_vec();
    let Some(first_sheet) = sheet_names.first() else {
        return Err(MapperError::Parse {
            path: path.to_path_buf(),
            message: "workbook contains no sheets".to_string(),
        });
    };

    let range = workbook
        .worksheet_range(first_sheet)
        .map_err(|e| MapperError::Parse {
            path: path.to_path_buf(),
            message: format!("failed to read sheet '{first_sheet}': {e}"),
        })?;

    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return Err(MapperError::Parse {
            path: path.to_path_buf(),
            message: format!("sheet '{first_sheet}' is empty"),
        });
    };

    let mut headers: Vec<String> = Vec::with_capacity(header_row.len());
    for (idx, cell) in header_row.iter().enumerate() {
        let name = cell_to_string(cell)
            .map(|text| text.trim().to_string())
            .unwrap_or_default();
        if name.is_empty() {
            return Err(MapperError::Parse {
                path: path.to_path_buf(),
                message: format!("empty column header at position {}", idx + 1),
            });
        }
        if headers.contains(&name) {
            return Err(MapperError::Parse {
                path: path.to_path_buf(),
                message: format!("duplicate column header '{name}'"),
            });
        }
        headers.push(name);
    }

    let mut columns: Vec<Vec<Option<String>>> = vec![Vec::new(); headers.len()];
    for row in rows {
        for (idx, slot) in columns.iter_mut().enumerate() {
            slot.push(row.get(idx).and_then(cell_to_string));
        }
    }

    let frame_columns: Vec<Column> = headers
        .iter()
        .zip(columns)
        .map(|(name, values)| Column::new(name.as_str().into(), values))
        .collect();

    DataFrame::new(frame_columns).map_err(|e| MapperError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Convert a cell to displayable text; `None` for blank cells.
fn cell_to_string(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(s) => {
            if s.is_empty() {
                None
            } else {
                Some(s.clone())
            }
        }
        Data::Float(n) => Some(format_float(*n)),
        Data::Int(n) => Some(n.to_string()),
        Data::Bool(b) => Some(if *b { "TRUE" } else { "FALSE" }.to_string()),
        Data::Error(e) => Some(e.to_string()),
        Data::DateTime(dt) => Some(format_float(dt.as_f64())),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Some(s.clone()),
    }
}

/// Format numbers the way spreadsheets display them: integers without
/// decimals.
fn format_float(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;

    fn temp_xlsx() -> tempfile::NamedTempFile {
        tempfile::Builder::new().suffix(".xlsx").tempfile().unwrap()
    }

    #[test]
    fn reads_first_sheet_with_headers() {
        let file = temp_xlsx();
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "SKU").unwrap();
        sheet.write_string(0, 1, "Quantity").unwrap();
        sheet.write_string(1, 0, "abc123").unwrap();
        sheet.write_number(1, 1, 3.0).unwrap();
        sheet.write_number(2, 1, 1.5).unwrap();
        workbook.save(file.path()).unwrap();

        let df = read_excel_frame(file.path()).unwrap();
        assert_eq!(df.height(), 2);
        let names: Vec<&str> = df.get_column_names_str();
        assert_eq!(names, vec!["SKU", "Quantity"]);

        let sku = df.column("SKU").unwrap().str().unwrap();
        assert_eq!(sku.get(0), Some("abc123"));
        assert_eq!(sku.get(1), None);

        let quantity = df.column("Quantity").unwrap().str().unwrap();
        assert_eq!(quantity.get(0), Some("3"));
        assert_eq!(quantity.get(1), Some("1.5"));
    }

    #[test]
    fn duplicate_headers_are_a_parse_error() {
        let file = temp_xlsx();
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "SKU").unwrap();
        sheet.write_string(0, 1, "SKU").unwrap();
        workbook.save(file.path()).unwrap();

        let result = read_excel_frame(file.path());
        assert!(matches!(result, Err(MapperError::Parse { .. })));
    }

    #[test]
    fn float_formatting_drops_integer_decimals() {
        assert_eq!(format_float(3.0), "3");
        assert_eq!(format_float(1.5), "1.5");
        assert_eq!(format_float(-2.0), "-2");
    }
}
