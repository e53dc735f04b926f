use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span};

use sku_cli::pipeline::{annotate, load_mapping, load_sales, write_output};
use sku_map::{ComboRule, MapperOptions};
use sku_output::{RunReport, write_run_report_json};

use crate::cli::{MappingArgs, ProcessArgs};
use crate::summary::apply_table_style;
use crate::types::ProcessResult;

pub fn run_process(args: &ProcessArgs) -> Result<ProcessResult> {
    let process_span = info_span!("process", sales_file = %args.sales_file.display());
    let _process_guard = process_span.enter();

    let options = MapperOptions::default()
        .with_sku_column(args.sku_column.clone())
        .with_msku_column(args.msku_column.clone())
        .with_combo(ComboRule::new(
            args.combo_prefix.clone(),
            args.combo_placeholder.clone(),
        ));

    let mapping = load_mapping(&args.mapping_file)?;
    let sales = load_sales(&args.sales_file)?;
    let annotated = annotate(&sales, &mapping.table, &options)?;

    let output_file = if args.dry_run {
        info!("dry run; output not written");
        None
    } else {
        let path = args
            .output
            .clone()
            .unwrap_or_else(|| default_output_path(&args.sales_file));
        write_output(&annotated.frame, &path)?;
        Some(path)
    };

    if let Some(report_path) = &args.report_json {
        let run_report = RunReport {
            sales_file: args.sales_file.clone(),
            mapping_file: args.mapping_file.clone(),
            output_file: output_file.clone(),
            mapping_entries: mapping.table.len(),
            duplicate_keys: mapping.table.duplicate_keys(),
            skipped_blank_rows: mapping.table.skipped_blank(),
            results: annotated.report.clone(),
        };
        write_run_report_json(report_path, &run_report)
            .with_context(|| format!("write run report {}", report_path.display()))?;
    }

    let has_errors = args.fail_on_unmapped && annotated.report.has_unmapped();
    Ok(ProcessResult {
        sales_file: args.sales_file.clone(),
        mapping_file: args.mapping_file.clone(),
        output_file,
        report_json: args.report_json.clone(),
        mapping_entries: mapping.table.len(),
        duplicate_keys: mapping.table.duplicate_keys(),
        skipped_blank_rows: mapping.table.skipped_blank(),
        report: annotated.report,
        has_errors,
    })
}

pub fn run_mapping(args: &MappingArgs) -> Result<()> {
    let mapping = load_mapping(&args.file)?;

    println!("Mapping: {}", args.file.display());
    println!("Source rows: {}", mapping.source_rows);
    println!("Entries: {}", mapping.table.len());
    println!("Duplicate keys: {}", mapping.table.duplicate_keys());
    println!("Blank SKU rows: {}", mapping.table.skipped_blank());

    if mapping.table.is_empty() {
        return Ok(());
    }

    let limit = if args.limit == 0 {
        mapping.table.len()
    } else {
        args.limit
    };
    let mut table = Table::new();
    table.set_header(vec!["SKU", "MSKU"]);
    apply_table_style(&mut table);
    for (sku, msku) in mapping.table.iter().take(limit) {
        table.add_row(vec![sku, msku]);
    }
    println!("{table}");
    if limit < mapping.table.len() {
        println!("... {} more entries", mapping.table.len() - limit);
    }
    Ok(())
}

/// Default output path: `<stem>_msku` next to the input, keeping the input
/// extension except for legacy `.xls`, which switches to `.xlsx` because
/// only xlsx workbooks are written.
fn default_output_path(sales_file: &Path) -> PathBuf {
    let stem = sales_file
        .file_stem()
        .and_then(OsStr::to_str)
        .unwrap_or("output");
    let extension = sales_file
        .extension()
        .and_then(OsStr::to_str)
        .map_or_else(|| "csv".to_string(), str::to_lowercase);
    let extension = if extension == "xls" {
        "xlsx".to_string()
    } else {
        extension
    };
    sales_file.with_file_name(format!("{stem}_msku.{extension}"))
}
