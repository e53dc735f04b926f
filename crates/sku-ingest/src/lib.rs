//! Tabular file ingestion: CSV and Excel sources read into polars
//! DataFrames with every cell kept as text.

pub mod csv;
pub mod excel;
pub mod format;
pub mod reader;

pub use csv::read_csv_frame;
pub use excel::read_excel_frame;
pub use format::TableFormat;
pub use reader::read_table;
