//! Integration tests for the pipeline module.

use std::fs;
use std::path::{Path, PathBuf};

use sku_cli::pipeline::{annotate, load_mapping, load_sales, write_output};
use sku_map::MapperOptions;

fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn csv_pipeline_annotates_and_writes() {
    let dir = tempfile::tempdir().unwrap();
    let mapping_path = write_file(
        dir.path(),
        "mapping.csv",
        "SKU,MSKU\nABC123,M-1\nXYZ999,M-2\n",
    );
    let sales_path = write_file(
        dir.path(),
        "sales.csv",
        "Order ID,SKU,Qty\nORD-1,abc123,2\nORD-2,combo_pack,1\nORD-3,ghost,5\n",
    );

    let mapping = load_mapping(&mapping_path).unwrap();
    let frame = load_sales(&sales_path).unwrap();
    let annotated = annotate(&frame, &mapping.table, &MapperOptions::default()).unwrap();

    assert_eq!(annotated.report.rows, 3);
    assert_eq!(annotated.report.mapped, 1);
    assert_eq!(annotated.report.combos, 1);
    assert_eq!(annotated.report.passthrough, 2);
    assert_eq!(annotated.report.unmapped.get("GHOST"), Some(&1));

    let output = dir.path().join("sales_msku.csv");
    write_output(&annotated.frame, &output).unwrap();

    let content = fs::read_to_string(&output).unwrap();
    let mut lines = content.lines();
    assert_eq!(lines.next(), Some("Order ID,SKU,Qty,MSKU"));
    assert_eq!(lines.next(), Some("ORD-1,abc123,2,M-1"));
    assert_eq!(lines.next(), Some("ORD-2,COMBO_MSKU,1,COMBO_MSKU"));
    assert_eq!(lines.next(), Some("ORD-3,ghost,5,ghost"));
    assert_eq!(lines.next(), None);
}

#[test]
fn mapping_counts_duplicates_and_blanks() {
    let dir = tempfile::tempdir().unwrap();
    let mapping_path = write_file(
        dir.path(),
        "mapping.csv",
        "SKU,MSKU\nabc123,M-1\nABC123,M-9\n,M-5\n",
    );

    let mapping = load_mapping(&mapping_path).unwrap();

    assert_eq!(mapping.source_rows, 3);
    assert_eq!(mapping.table.len(), 1);
    assert_eq!(mapping.table.duplicate_keys(), 1);
    assert_eq!(mapping.table.skipped_blank(), 1);
    // Last loaded value wins for the duplicated key.
    assert_eq!(mapping.table.lookup("ABC123"), Some("M-9"));
}

#[test]
fn missing_mapping_file_reports_not_found() {
    let dir = tempfile::tempdir().unwrap();

    let error = load_mapping(&dir.path().join("missing.csv")).unwrap_err();

    let message = format!("{error:#}");
    assert!(message.contains("file not found"), "got: {message}");
}

#[test]
fn sales_without_sku_column_fails_before_output() {
    let dir = tempfile::tempdir().unwrap();
    let mapping_path = write_file(dir.path(), "mapping.csv", "SKU,MSKU\nABC123,M-1\n");
    let sales_path = write_file(dir.path(), "sales.csv", "Item,Qty\nabc123,2\n");

    let mapping = load_mapping(&mapping_path).unwrap();
    let frame = load_sales(&sales_path).unwrap();
    let error = annotate(&frame, &mapping.table, &MapperOptions::default()).unwrap_err();

    let message = format!("{error:#}");
    assert!(message.contains("column 'SKU' not found"), "got: {message}");
}

#[test]
fn xlsx_output_round_trips_through_loader() {
    let dir = tempfile::tempdir().unwrap();
    let mapping_path = write_file(dir.path(), "mapping.csv", "SKU,MSKU\nABC123,M-1\n");
    let sales_path = write_file(dir.path(), "sales.csv", "SKU\nabc123\ncombo_pack\n");

    let mapping = load_mapping(&mapping_path).unwrap();
    let frame = load_sales(&sales_path).unwrap();
    let annotated = annotate(&frame, &mapping.table, &MapperOptions::default()).unwrap();

    let output = dir.path().join("sales_msku.xlsx");
    write_output(&annotated.frame, &output).unwrap();

    let reread = load_sales(&output).unwrap();
    assert_eq!(reread.height(), 2);
    let msku = reread.column("MSKU").unwrap().str().unwrap();
    assert_eq!(msku.get(0), Some("M-1"));
    assert_eq!(msku.get(1), Some("COMBO_MSKU"));
}

#[test]
fn unsupported_output_extension_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let mapping_path = write_file(dir.path(), "mapping.csv", "SKU,MSKU\nABC123,M-1\n");
    let sales_path = write_file(dir.path(), "sales.csv", "SKU\nabc123\n");

    let mapping = load_mapping(&mapping_path).unwrap();
    let frame = load_sales(&sales_path).unwrap();
    let annotated = annotate(&frame, &mapping.table, &MapperOptions::default()).unwrap();

    let error = write_output(&annotated.frame, &dir.path().join("out.parquet")).unwrap_err();

    let message = format!("{error:#}");
    assert!(message.contains("unsupported file format"), "got: {message}");
}
