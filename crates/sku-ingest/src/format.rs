//! Source format detection by file extension.

use std::path::Path;

use sku_model::{MapperError, Result};

/// Tabular formats the readers understand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    /// Comma-separated text (`.csv`).
    Csv,
    /// Excel workbook (`.xlsx` or legacy `.xls`).
    Excel,
}

impl TableFormat {
    /// Detect the format from a path's extension.
    ///
    /// # Errors
    ///
    /// Returns [`MapperError::UnsupportedFormat`] for unknown or missing
    /// extensions.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_lowercase();
        match extension.as_str() {
            "csv" => Ok(Self::Csv),
            "xlsx" | "xls" => Ok(Self::Excel),
            _ => Err(MapperError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn detects_csv_and_excel() {
        assert_eq!(
            TableFormat::from_path(Path::new("sales.csv")).unwrap(),
            TableFormat::Csv
        );
        assert_eq!(
            TableFormat::from_path(Path::new("sales.xlsx")).unwrap(),
            TableFormat::Excel
        );
        assert_eq!(
            TableFormat::from_path(Path::new("legacy.xls")).unwrap(),
            TableFormat::Excel
        );
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        assert_eq!(
            TableFormat::from_path(Path::new("SALES.CSV")).unwrap(),
            TableFormat::Csv
        );
    }

    #[test]
    fn rejects_unknown_extensions() {
        let err = TableFormat::from_path(Path::new("sales.parquet")).unwrap_err();
        assert!(matches!(
            err,
            MapperError::UnsupportedFormat { ref extension, .. } if extension == "parquet"
        ));

        let err = TableFormat::from_path(&PathBuf::from("no_extension")).unwrap_err();
        assert!(matches!(err, MapperError::UnsupportedFormat { .. }));
    }
}
