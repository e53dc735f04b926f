//! The SKU to master-SKU mapping table and lookup resolution.

use std::collections::BTreeMap;
use std::path::Path;

use polars::prelude::{DataFrame, DataType};
use tracing::debug;

use sku_model::{MapperError, Result, is_blank, normalize_sku};

/// Required key column of a mapping source.
pub const MAPPING_SKU_COLUMN: &str = "SKU";

/// Required value column of a mapping source.
pub const MAPPING_MSKU_COLUMN: &str = "MSKU";

/// Outcome of resolving one raw SKU against the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkuResolution {
    /// The normalized SKU matched; carries the mapped master SKU.
    Mapped(String),
    /// No entry matched; carries the original input unchanged.
    Passthrough(String),
}

impl SkuResolution {
    /// The value to write into the MSKU column.
    #[must_use]
    pub fn into_value(self) -> String {
        match self {
            Self::Mapped(value) | Self::Passthrough(value) => value,
        }
    }

    /// True for a mapping-table hit.
    #[must_use]
    pub fn is_mapped(&self) -> bool {
        matches!(self, Self::Mapped(_))
    }
}

/// In-memory mapping from normalized SKU to master SKU.
///
/// Keys are normalized at insert time and queries at lookup time, so the
/// table is insensitive to case and surrounding whitespace on both sides.
/// The last insert wins on duplicate normalized keys; the overwrite count
/// is kept for reporting. Loading a new source replaces the previous
/// table wholesale.
#[derive(Debug, Clone, Default)]
pub struct MappingTable {
    entries: BTreeMap<String, String>,
    duplicate_keys: usize,
    skipped_blank: usize,
}

impl MappingTable {
    /// Build a table from a loaded two-column mapping frame.
    ///
    /// The frame must expose `SKU` and `MSKU` columns with exactly those
    /// names. Rows with a blank SKU contribute no entry and are counted;
    /// MSKU values are stored verbatim, including empty cells.
    ///
    /// # Errors
    ///
    /// [`MapperError::MissingColumn`] when a required column is absent;
    /// `source` identifies the file in the message.
    pub fn from_frame(df: &DataFrame, source: &Path) -> Result<Self> {
        for required in [MAPPING_SKU_COLUMN, MAPPING_MSKU_COLUMN] {
            if df.column(required).is_err() {
                return Err(MapperError::MissingColumn {
                    column: required.to_string(),
                    path: source.to_path_buf(),
                });
            }
        }

        let sku_col = df.column(MAPPING_SKU_COLUMN)?.cast(&DataType::String)?;
        let msku_col = df.column(MAPPING_MSKU_COLUMN)?.cast(&DataType::String)?;
        let sku_ca = sku_col.str()?;
        let msku_ca = msku_col.str()?;

        let mut table = Self::default();
        for (raw_sku, raw_msku) in sku_ca.into_iter().zip(msku_ca.into_iter()) {
            let Some(sku) = raw_sku else {
                table.skipped_blank += 1;
                continue;
            };
            if is_blank(sku) {
                table.skipped_blank += 1;
                continue;
            }
            table.insert(sku, raw_msku.unwrap_or_default());
        }

        debug!(
            entries = table.len(),
            duplicates = table.duplicate_keys,
            skipped = table.skipped_blank,
            source = %source.display(),
            "mapping table built"
        );
        Ok(table)
    }

    /// Insert one pair, normalizing the key. Returns true when an existing
    /// entry was overwritten.
    pub fn insert(&mut self, raw_sku: &str, msku: &str) -> bool {
        let replaced = self
            .entries
            .insert(normalize_sku(raw_sku), msku.to_string())
            .is_some();
        if replaced {
            self.duplicate_keys += 1;
        }
        replaced
    }

    /// Look up the master SKU for a raw SKU, normalizing the query.
    #[must_use]
    pub fn lookup(&self, raw_sku: &str) -> Option<&str> {
        self.entries.get(&normalize_sku(raw_sku)).map(String::as_str)
    }

    /// Resolve a raw SKU, falling back to the original text on a miss.
    ///
    /// The fallback keeps the original, unnormalized input so downstream
    /// consumers always see a value for a non-empty SKU; each miss is
    /// recorded as a lookup-miss observation.
    #[must_use]
    pub fn resolve(&self, raw_sku: &str) -> SkuResolution {
        match self.lookup(raw_sku) {
            Some(msku) => SkuResolution::Mapped(msku.to_string()),
            None => {
                debug!(sku = %raw_sku, "sku not found in mapping; keeping original");
                SkuResolution::Passthrough(raw_sku.to_string())
            }
        }
    }

    /// Number of distinct normalized keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no entries are loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries overwritten by later duplicates during construction.
    #[must_use]
    pub fn duplicate_keys(&self) -> usize {
        self.duplicate_keys
    }

    /// Source rows skipped for carrying a blank SKU.
    #[must_use]
    pub fn skipped_blank(&self) -> usize {
        self.skipped_blank
    }

    /// Iterate entries in normalized-key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(sku, msku)| (sku.as_str(), msku.as_str()))
    }
}
