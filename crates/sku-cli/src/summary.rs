use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::ProcessResult;

/// Distinct unmapped SKUs shown before truncating the table.
const MAX_UNMAPPED_ROWS: usize = 20;

pub fn print_summary(result: &ProcessResult) {
    println!("Sales: {}", result.sales_file.display());
    println!("Mapping: {}", result.mapping_file.display());
    match &result.output_file {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run)"),
    }
    if let Some(path) = &result.report_json {
        println!("Run report: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Count")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Rows"), Cell::new(result.report.rows)]);
    table.add_row(vec![
        Cell::new("Mapped"),
        count_cell(result.report.mapped, Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("Combo products"),
        count_cell(result.report.combos, Color::Blue),
    ]);
    table.add_row(vec![
        Cell::new("Unmapped"),
        count_cell(result.report.passthrough, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Blank SKUs"),
        count_cell(result.report.blank_skus, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Mapping entries"),
        Cell::new(result.mapping_entries),
    ]);
    table.add_row(vec![
        Cell::new("Duplicate mapping keys"),
        count_cell(result.duplicate_keys, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Blank mapping rows"),
        count_cell(result.skipped_blank_rows, Color::Yellow),
    ]);
    println!("{table}");

    print_unmapped_table(result);
    if result.has_errors {
        eprintln!("error: {} distinct SKUs stayed unmapped", result.report.unmapped.len());
    }
}

fn print_unmapped_table(result: &ProcessResult) {
    if result.report.unmapped.is_empty() {
        return;
    }
    let mut entries: Vec<(&String, &usize)> = result.report.unmapped.iter().collect();
    entries.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    let distinct = entries.len();

    let mut table = Table::new();
    table.set_header(vec![header_cell("Unmapped SKU"), header_cell("Rows")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (sku, count) in entries.into_iter().take(MAX_UNMAPPED_ROWS) {
        table.add_row(vec![Cell::new(sku), Cell::new(count)]);
    }
    println!();
    println!("Unmapped SKUs:");
    println!("{table}");
    if distinct > MAX_UNMAPPED_ROWS {
        println!("... {} more distinct SKUs", distinct - MAX_UNMAPPED_ROWS);
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(60);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(value: usize, color: Color) -> Cell {
    if value > 0 {
        Cell::new(value).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(value)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
