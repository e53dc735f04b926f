//! Mapping-table construction and SKU resolution.
//!
//! Loads a two-column SKU to master-SKU table and resolves raw SKU text
//! against it with normalized, whitespace and case insensitive keys.

pub mod options;
pub mod table;

pub use options::{
    ComboRule, DEFAULT_COMBO_PLACEHOLDER, DEFAULT_COMBO_PREFIX, DEFAULT_MSKU_COLUMN,
    DEFAULT_SKU_COLUMN, MapperOptions,
};
pub use sku_model::normalize_sku;
pub use table::{MAPPING_MSKU_COLUMN, MAPPING_SKU_COLUMN, MappingTable, SkuResolution};
