//! Configuration for SKU resolution and combo handling.

use serde::{Deserialize, Serialize};
use sku_model::normalize_sku;

/// Default reserved prefix marking combo products.
pub const DEFAULT_COMBO_PREFIX: &str = "COMBO_";

/// Default placeholder every combo SKU collapses to.
pub const DEFAULT_COMBO_PLACEHOLDER: &str = "COMBO_MSKU";

/// Default sales-table column holding the seller SKU.
pub const DEFAULT_SKU_COLUMN: &str = "SKU";

/// Default sales-table column receiving the master SKU.
pub const DEFAULT_MSKU_COLUMN: &str = "MSKU";

/// Prefix rule that collapses combo products to a fixed placeholder.
///
/// Matching compares normalized forms, so `combo_pack` and ` COMBO_PACK `
/// both match the default prefix. Every match is replaced with the same
/// placeholder text; per-combo resolution is a known limitation of the
/// rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComboRule {
    /// Reserved prefix identifying combo SKUs (compared normalized).
    pub prefix: String,
    /// Placeholder written over every matched SKU.
    pub placeholder: String,
}

impl Default for ComboRule {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_COMBO_PREFIX.to_string(),
            placeholder: DEFAULT_COMBO_PLACEHOLDER.to_string(),
        }
    }
}

impl ComboRule {
    pub fn new(prefix: String, placeholder: String) -> Self {
        Self { prefix, placeholder }
    }

    /// True when the normalized SKU starts with the normalized prefix.
    #[must_use]
    pub fn matches(&self, raw_sku: &str) -> bool {
        normalize_sku(raw_sku).starts_with(&normalize_sku(&self.prefix))
    }
}

/// Options controlling sales-table annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapperOptions {
    /// Sales column holding the seller SKU.
    pub sku_column: String,
    /// Sales column receiving the resolved master SKU.
    pub msku_column: String,
    /// Combo-product rule applied between the two resolve passes.
    pub combo: ComboRule,
}

impl Default for MapperOptions {
    fn default() -> Self {
        Self {
            sku_column: DEFAULT_SKU_COLUMN.to_string(),
            msku_column: DEFAULT_MSKU_COLUMN.to_string(),
            combo: ComboRule::default(),
        }
    }
}

impl MapperOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sales column read for seller SKUs.
    #[must_use]
    pub fn with_sku_column(mut self, name: String) -> Self {
        self.sku_column = name;
        self
    }

    /// Set the sales column written with master SKUs.
    #[must_use]
    pub fn with_msku_column(mut self, name: String) -> Self {
        self.msku_column = name;
        self
    }

    /// Set the combo-product rule.
    #[must_use]
    pub fn with_combo(mut self, combo: ComboRule) -> Self {
        self.combo = combo;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combo_match_is_case_and_whitespace_insensitive() {
        let rule = ComboRule::default();
        assert!(rule.matches("COMBO_PACK1"));
        assert!(rule.matches("combo_special"));
        assert!(rule.matches("  Combo_Bundle  "));
        assert!(!rule.matches("PACK_COMBO"));
        assert!(!rule.matches(""));
    }

    #[test]
    fn combo_rule_accepts_custom_prefix() {
        let rule = ComboRule::new("bundle-".to_string(), "BUNDLE".to_string());
        assert!(rule.matches("Bundle-Trio"));
        assert!(!rule.matches("COMBO_TRIO"));
    }

    #[test]
    fn options_builders() {
        let options = MapperOptions::new()
            .with_sku_column("seller_sku".to_string())
            .with_msku_column("master_sku".to_string());
        assert_eq!(options.sku_column, "seller_sku");
        assert_eq!(options.msku_column, "master_sku");
        assert_eq!(options.combo.placeholder, DEFAULT_COMBO_PLACEHOLDER);
    }
}
