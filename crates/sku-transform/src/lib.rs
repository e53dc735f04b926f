//! Sales-frame annotation built from column-level executors.

pub mod annotate;
pub mod executors;

pub use annotate::annotate_sales;
pub use executors::{ResolveStats, collapse_combo_column, resolve_msku_column};
