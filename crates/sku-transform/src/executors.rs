//! Column-level transformation executors.
//!
//! Each function operates on one DataFrame column and returns what it
//! changed, so the annotation pipeline can assemble a run report without
//! re-scanning the frame.

use std::collections::BTreeMap;

use polars::prelude::{DataFrame, DataType, IntoSeries, StringChunkedBuilder};
use tracing::debug;

use sku_map::{ComboRule, MappingTable};
use sku_model::{MapperError, Result, is_blank, normalize_sku};

/// Per-row outcome counts of one MSKU resolution pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveStats {
    /// Rows whose SKU matched a mapping entry.
    pub mapped: usize,
    /// Rows whose SKU missed and kept its original text.
    pub passthrough: usize,
    /// Rows with an empty or whitespace-only SKU cell.
    pub blank: usize,
    /// Miss counts keyed by normalized SKU.
    pub unmapped: BTreeMap<String, usize>,
}

/// Resolve every SKU in `sku_column` and write the results to `msku_column`.
///
/// Blank SKU cells produce a null MSKU; misses carry the original SKU text
/// through unchanged and are tallied per normalized key. The MSKU column is
/// replaced wholesale on every call.
///
/// # Errors
///
/// [`MapperError::ColumnNotFound`] when `sku_column` is absent.
pub fn resolve_msku_column(
    df: &mut DataFrame,
    table: &MappingTable,
    sku_column: &str,
    msku_column: &str,
) -> Result<ResolveStats> {
    if df.column(sku_column).is_err() {
        return Err(MapperError::ColumnNotFound {
            column: sku_column.to_string(),
        });
    }

    let sku_col = df.column(sku_column)?.cast(&DataType::String)?;
    let sku_ca = sku_col.str()?;

    let mut builder = StringChunkedBuilder::new(msku_column.into(), df.height());
    let mut stats = ResolveStats::default();

    for raw_sku in sku_ca.into_iter() {
        match raw_sku {
            Some(raw) if !is_blank(raw) => {
                let resolution = table.resolve(raw);
                if resolution.is_mapped() {
                    stats.mapped += 1;
                } else {
                    stats.passthrough += 1;
                    *stats.unmapped.entry(normalize_sku(raw)).or_insert(0) += 1;
                }
                builder.append_value(resolution.into_value());
            }
            _ => {
                stats.blank += 1;
                builder.append_null();
            }
        }
    }

    df.with_column(builder.finish().into_series())?;
    Ok(stats)
}

/// Rewrite combo-prefixed SKU cells to the rule's placeholder, in place.
///
/// Matching is whitespace and case insensitive; non-matching cells keep
/// their original text. Returns the number of rewritten cells.
///
/// # Errors
///
/// [`MapperError::ColumnNotFound`] when `sku_column` is absent.
pub fn collapse_combo_column(
    df: &mut DataFrame,
    rule: &ComboRule,
    sku_column: &str,
) -> Result<usize> {
    if df.column(sku_column).is_err() {
        return Err(MapperError::ColumnNotFound {
            column: sku_column.to_string(),
        });
    }

    let sku_col = df.column(sku_column)?.cast(&DataType::String)?;
    let sku_ca = sku_col.str()?;

    let mut builder = StringChunkedBuilder::new(sku_column.into(), df.height());
    let mut modified = 0;

    for raw_sku in sku_ca.into_iter() {
        match raw_sku {
            Some(raw) if rule.matches(raw) => {
                debug!(sku = %raw, "combo product identified");
                modified += 1;
                builder.append_value(&rule.placeholder);
            }
            Some(raw) => builder.append_value(raw),
            None => builder.append_null(),
        }
    }

    if modified > 0 {
        df.with_column(builder.finish().into_series())?;
    }

    Ok(modified)
}
