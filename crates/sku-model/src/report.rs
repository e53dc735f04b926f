//! Run-report types produced by the annotation pipeline.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Aggregate outcome of one annotation run over a sales table.
///
/// Counts describe the final state of the annotated table: resolve counts
/// come from the last resolve pass, the combo count from the collapse pass.
/// For every run, `rows == mapped + passthrough + blank_skus`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotateReport {
    /// Total rows in the sales table.
    pub rows: usize,
    /// Rows whose MSKU came from the mapping table.
    pub mapped: usize,
    /// Rows whose MSKU fell back to the original SKU text (lookup miss).
    pub passthrough: usize,
    /// Rows whose SKU was rewritten to the combo placeholder.
    pub combos: usize,
    /// Rows with a missing or blank SKU; their MSKU is left empty.
    pub blank_skus: usize,
    /// Distinct unmapped SKUs (normalized) with occurrence counts.
    pub unmapped: BTreeMap<String, usize>,
}

impl AnnotateReport {
    /// True when at least one row fell back to its original SKU.
    #[must_use]
    pub fn has_unmapped(&self) -> bool {
        self.passthrough > 0
    }

    /// Rows that received a usable MSKU (mapped or passthrough).
    #[must_use]
    pub fn annotated_rows(&self) -> usize {
        self.mapped + self.passthrough
    }
}
