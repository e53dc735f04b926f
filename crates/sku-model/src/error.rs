//! Error types shared across the SKU mapper crates.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading, transforming, or writing tables.
#[derive(Debug, Error)]
pub enum MapperError {
    // === File System Errors ===
    /// Source file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write file.
    #[error("failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Workbook serialization failed.
    #[error("failed to save workbook {path}: {message}")]
    WorkbookSave { path: PathBuf, message: String },

    // === Format Errors ===
    /// File extension not recognized for load or save.
    #[error("unsupported file format '{extension}' for {path}")]
    UnsupportedFormat { path: PathBuf, extension: String },

    // === Parsing Errors ===
    /// File content could not be parsed as tabular data.
    #[error("failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    // === Schema Errors ===
    /// Required column not found in a loaded table.
    #[error("required column '{column}' not found in {path}")]
    MissingColumn { column: String, path: PathBuf },

    /// Column not found in an in-memory table.
    #[error("column '{column}' not found in table")]
    ColumnNotFound { column: String },

    /// Transformation requested without a usable mapping table.
    #[error("no SKU mappings loaded; load a mapping table before processing")]
    EmptyMapping,

    // === Report Errors ===
    /// Run report serialization failed.
    #[error("failed to encode run report: {message}")]
    ReportEncode { message: String },

    // === DataFrame Errors ===
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for MapperError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for SKU mapper operations.
pub type Result<T> = std::result::Result<T, MapperError>;
