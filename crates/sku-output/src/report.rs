//! Machine-readable run reports.

use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::Serialize;
use tracing::debug;

use sku_model::{AnnotateReport, MapperError, Result};

const REPORT_SCHEMA: &str = "sku-mapper.run-report";
const REPORT_SCHEMA_VERSION: u32 = 1;

/// Summary of one processing run, written as JSON on request.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub sales_file: PathBuf,
    pub mapping_file: PathBuf,
    /// Absent when the run was a dry run.
    pub output_file: Option<PathBuf>,
    pub mapping_entries: usize,
    pub duplicate_keys: usize,
    pub skipped_blank_rows: usize,
    pub results: AnnotateReport,
}

#[derive(Serialize)]
struct RunReportPayload<'a> {
    schema: &'static str,
    schema_version: u32,
    generated_at: String,
    sales_file: &'a Path,
    mapping_file: &'a Path,
    output_file: Option<&'a Path>,
    mapping_entries: usize,
    duplicate_keys: usize,
    skipped_blank_rows: usize,
    results: &'a AnnotateReport,
}

/// Write `report` to `path` as pretty-printed JSON.
///
/// Parent directories are created as needed.
pub fn write_run_report_json(path: &Path, report: &RunReport) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|source| MapperError::FileWrite {
                path: path.to_path_buf(),
                source,
            })?;
        }
    }

    let payload = RunReportPayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        sales_file: &report.sales_file,
        mapping_file: &report.mapping_file,
        output_file: report.output_file.as_deref(),
        mapping_entries: report.mapping_entries,
        duplicate_keys: report.duplicate_keys,
        skipped_blank_rows: report.skipped_blank_rows,
        results: &report.results,
    };
    let json = serde_json::to_string_pretty(&payload).map_err(|error| {
        MapperError::ReportEncode {
            message: error.to_string(),
        }
    })?;
    std::fs::write(path, format!("{json}\n")).map_err(|source| MapperError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), "run report written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> RunReport {
        let mut results = AnnotateReport {
            rows: 3,
            mapped: 2,
            passthrough: 1,
            combos: 1,
            blank_skus: 0,
            ..AnnotateReport::default()
        };
        results.unmapped.insert("GHOST".to_string(), 1);
        RunReport {
            sales_file: PathBuf::from("sales.csv"),
            mapping_file: PathBuf::from("mapping.csv"),
            output_file: Some(PathBuf::from("sales_msku.csv")),
            mapping_entries: 10,
            duplicate_keys: 2,
            skipped_blank_rows: 1,
            results,
        }
    }

    #[test]
    fn report_json_carries_schema_and_counts() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");

        write_run_report_json(&path, &sample_report()).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["schema"], "sku-mapper.run-report");
        assert_eq!(value["schema_version"], 1);
        assert_eq!(value["mapping_entries"], 10);
        assert_eq!(value["results"]["mapped"], 2);
        assert_eq!(value["results"]["unmapped"]["GHOST"], 1);
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn missing_parent_directories_are_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports/nested/report.json");

        write_run_report_json(&path, &sample_report()).unwrap();

        assert!(path.exists());
    }
}
