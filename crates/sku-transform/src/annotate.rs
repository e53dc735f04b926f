//! Whole-frame SKU annotation.

use polars::prelude::DataFrame;
use tracing::debug;

use sku_map::{MapperOptions, MappingTable};
use sku_model::{AnnotateReport, MapperError, Result};

use crate::executors::{collapse_combo_column, resolve_msku_column};

/// Annotate a sales frame with resolved master SKUs.
///
/// Works on a copy of the input and runs three passes in a fixed order:
/// resolve the MSKU column, collapse combo SKUs in place, then resolve
/// again so combo rows pick up the placeholder's mapping state. Later
/// passes must see the rewritten SKU cells, so the passes cannot be fused.
///
/// The input frame is never modified. Row count and every column other
/// than the SKU and MSKU columns are preserved.
///
/// # Errors
///
/// [`MapperError::EmptyMapping`] when the table has no entries and
/// [`MapperError::ColumnNotFound`] when the configured SKU column is
/// absent, both raised before any column is written.
pub fn annotate_sales(
    df: &DataFrame,
    table: &MappingTable,
    options: &MapperOptions,
) -> Result<(DataFrame, AnnotateReport)> {
    if table.is_empty() {
        return Err(MapperError::EmptyMapping);
    }
    if !df
        .get_column_names_str()
        .contains(&options.sku_column.as_str())
    {
        return Err(MapperError::ColumnNotFound {
            column: options.sku_column.clone(),
        });
    }

    let mut annotated = df.clone();

    let first = resolve_msku_column(
        &mut annotated,
        table,
        &options.sku_column,
        &options.msku_column,
    )?;
    debug!(
        mapped = first.mapped,
        passthrough = first.passthrough,
        blank = first.blank,
        "initial resolution pass"
    );

    let combos = collapse_combo_column(&mut annotated, &options.combo, &options.sku_column)?;
    debug!(combos, placeholder = %options.combo.placeholder, "combo collapse pass");

    let last = resolve_msku_column(
        &mut annotated,
        table,
        &options.sku_column,
        &options.msku_column,
    )?;
    debug!(
        mapped = last.mapped,
        passthrough = last.passthrough,
        blank = last.blank,
        "final resolution pass"
    );

    let report = AnnotateReport {
        rows: annotated.height(),
        mapped: last.mapped,
        passthrough: last.passthrough,
        combos,
        blank_skus: last.blank,
        unmapped: last.unmapped,
    };
    Ok((annotated, report))
}
