//! Output writers for annotated sales tables.
//!
//! CSV and xlsx table output plus a JSON run report, each selected by the
//! caller or by file extension through [`write_table`].

pub mod csv;
pub mod excel;
pub mod report;
pub mod writer;

pub use csv::write_csv_frame;
pub use excel::write_excel_frame;
pub use report::{RunReport, write_run_report_json};
pub use writer::write_table;
