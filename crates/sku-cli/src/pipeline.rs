//! Sales annotation pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Load mapping**: Read the mapping file and build the lookup table
//! 2. **Load sales**: Read the sales data file
//! 3. **Annotate**: Resolve master SKUs, collapsing combo products
//! 4. **Write**: Save the annotated table
//!
//! Each stage takes the output of the previous stage and returns typed
//! results, so callers can assemble summaries without re-reading files.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use polars::prelude::DataFrame;
use tracing::{info, info_span, warn};

use sku_ingest::read_table;
use sku_map::{MapperOptions, MappingTable};
use sku_model::AnnotateReport;
use sku_output::write_table;
use sku_transform::annotate_sales;

// ============================================================================
// Stage 1: Load mapping
// ============================================================================

/// Result of the mapping-load stage.
#[derive(Debug)]
pub struct MappingLoadResult {
    /// Lookup table keyed by normalized SKU.
    pub table: MappingTable,
    /// Rows in the mapping source, before dedup and blank filtering.
    pub source_rows: usize,
}

/// Read a mapping file and build the lookup table.
///
/// Accepts any format [`read_table`] understands; the table keeps counts
/// of duplicate keys and skipped blank rows for reporting.
pub fn load_mapping(path: &Path) -> Result<MappingLoadResult> {
    let span = info_span!("load_mapping", file = %path.display());
    let _guard = span.enter();
    let start = Instant::now();

    let frame = read_table(path).with_context(|| format!("read {}", path.display()))?;
    let source_rows = frame.height();
    let table = MappingTable::from_frame(&frame, path)
        .with_context(|| format!("build mapping table from {}", path.display()))?;

    info!(
        entries = table.len(),
        duplicates = table.duplicate_keys(),
        skipped = table.skipped_blank(),
        source_rows,
        duration_ms = start.elapsed().as_millis(),
        "mapping loaded"
    );
    Ok(MappingLoadResult { table, source_rows })
}

// ============================================================================
// Stage 2: Load sales
// ============================================================================

/// Read a sales data file with every column as text.
pub fn load_sales(path: &Path) -> Result<DataFrame> {
    let span = info_span!("load_sales", file = %path.display());
    let _guard = span.enter();
    let start = Instant::now();

    let frame = read_table(path).with_context(|| format!("read {}", path.display()))?;

    info!(
        rows = frame.height(),
        columns = frame.width(),
        duration_ms = start.elapsed().as_millis(),
        "sales data loaded"
    );
    Ok(frame)
}

// ============================================================================
// Stage 3: Annotate
// ============================================================================

/// Result of the annotation stage.
#[derive(Debug)]
pub struct AnnotateStageResult {
    /// The annotated sales frame.
    pub frame: DataFrame,
    /// Row-level outcome counts from the final pass.
    pub report: AnnotateReport,
}

/// Annotate the sales frame against the mapping table.
pub fn annotate(
    df: &DataFrame,
    table: &MappingTable,
    options: &MapperOptions,
) -> Result<AnnotateStageResult> {
    let span = info_span!("annotate");
    let _guard = span.enter();
    let start = Instant::now();

    let (frame, report) = annotate_sales(df, table, options).context("annotate sales rows")?;

    info!(
        rows = report.rows,
        mapped = report.mapped,
        passthrough = report.passthrough,
        combos = report.combos,
        blank = report.blank_skus,
        duration_ms = start.elapsed().as_millis(),
        "annotation complete"
    );
    if report.has_unmapped() {
        warn!(
            distinct = report.unmapped.len(),
            rows = report.passthrough,
            "unmapped skus kept their original value"
        );
    }
    Ok(AnnotateStageResult { frame, report })
}

// ============================================================================
// Stage 4: Write output
// ============================================================================

/// Write the annotated frame to `path`, format chosen by extension.
pub fn write_output(df: &DataFrame, path: &Path) -> Result<()> {
    let span = info_span!("write_output", file = %path.display());
    let _guard = span.enter();
    let start = Instant::now();

    write_table(df, path).with_context(|| format!("write {}", path.display()))?;

    info!(
        rows = df.height(),
        duration_ms = start.elapsed().as_millis(),
        "output written"
    );
    Ok(())
}
