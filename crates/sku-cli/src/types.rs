use std::path::PathBuf;

use sku_model::AnnotateReport;

#[derive(Debug)]
pub struct ProcessResult {
    pub sales_file: PathBuf,
    pub mapping_file: PathBuf,
    /// None when the run was a dry run.
    pub output_file: Option<PathBuf>,
    pub report_json: Option<PathBuf>,
    pub mapping_entries: usize,
    pub duplicate_keys: usize,
    pub skipped_blank_rows: usize,
    pub report: AnnotateReport,
    /// Set when --fail-on-unmapped was given and unmapped SKUs remain.
    pub has_errors: bool,
}
