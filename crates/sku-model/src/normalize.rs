//! SKU text normalization.
//!
//! Mapping keys and lookup queries share one normal form: surrounding
//! whitespace stripped, all characters uppercased. Raw cell text is kept
//! everywhere else so values round-trip unchanged.

/// Normalize a raw SKU for use as a mapping key or lookup query.
///
/// # Examples
///
/// ```
/// use sku_model::normalize_sku;
///
/// assert_eq!(normalize_sku(" abc123 "), "ABC123");
/// assert_eq!(normalize_sku("COMBO_pack"), "COMBO_PACK");
/// ```
#[must_use]
pub fn normalize_sku(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// True when cell text holds no usable SKU (empty or whitespace-only).
#[must_use]
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
