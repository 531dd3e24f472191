//! Header alias table.
//!
//! Maps the many spellings spreadsheets use for BOM headers ("MPN",
//! "Mfr Part #", "Qty", ...) onto the canonical column names.

use crate::config::{HeaderMatching, SchemaConfig};
use crate::model::{DESCRIPTION, LIFECYCLE_STATUS, MANUFACTURER, PART_NUMBER, QUANTITY, ROHS};
use std::collections::HashMap;

/// Built-in aliases: source spelling -> canonical column.
///
/// Canonical names map to themselves so that `partnumber` or `Part-Number`
/// are recognized without an explicit entry.
pub const DEFAULT_ALIASES: &[(&str, &str)] = &[
    ("mpn", PART_NUMBER),
    ("mfr part #", PART_NUMBER),
    ("mfr part", PART_NUMBER),
    ("part number", PART_NUMBER),
    ("partnumber", PART_NUMBER),
    ("qty", QUANTITY),
    ("quantity", QUANTITY),
    ("manufacturer", MANUFACTURER),
    ("mfr", MANUFACTURER),
    ("description", DESCRIPTION),
    ("lifecycle", LIFECYCLE_STATUS),
    ("lifecycle status", LIFECYCLE_STATUS),
    ("lifecyclestatus", LIFECYCLE_STATUS),
    ("rohs", ROHS),
    ("rohs status", ROHS),
];

/// Normalize a header for alias lookup.
///
/// Both modes trim and lower-case. Strict mode also drops spaces, hyphens
/// and `#` anywhere in the header, so `Mfr Part #`, `mfr-part` and `MFRPART`
/// share one key.
#[must_use]
pub fn header_key(header: &str, mode: HeaderMatching) -> String {
    let lowered = header.trim().to_lowercase();
    match mode {
        HeaderMatching::Lenient => lowered,
        HeaderMatching::Strict => lowered
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '#')
            .collect(),
    }
}

/// Resolved alias table for one normalization run.
#[derive(Debug, Clone)]
pub struct AliasMap {
    mode: HeaderMatching,
    entries: HashMap<String, String>,
}

impl AliasMap {
    /// The built-in table only.
    #[must_use]
    pub fn builtin(mode: HeaderMatching) -> Self {
        let mut map = Self {
            mode,
            entries: HashMap::with_capacity(DEFAULT_ALIASES.len()),
        };
        for (src, dest) in DEFAULT_ALIASES {
            map.insert(src, dest);
        }
        map
    }

    /// Built-in table with the configured aliases merged over it.
    ///
    /// Entries whose source or destination is blank are ignored.
    #[must_use]
    pub fn from_config(config: &SchemaConfig) -> Self {
        let mut map = Self::builtin(config.header_matching);
        for (src, dest) in &config.aliases {
            if !map.insert(src, dest) {
                tracing::debug!("Ignoring blank alias {src:?} -> {dest:?}");
            }
        }
        map
    }

    /// Insert or override an alias. Returns `false` if it was blank.
    fn insert(&mut self, src: &str, dest: &str) -> bool {
        let key = header_key(src, self.mode);
        let dest = dest.trim();
        if key.is_empty() || dest.is_empty() {
            return false;
        }
        self.entries.insert(key, dest.to_string());
        true
    }

    /// Canonical name for an input header, if it has an alias.
    #[must_use]
    pub fn resolve(&self, header: &str) -> Option<&str> {
        self.entries
            .get(&header_key(header, self.mode))
            .map(String::as_str)
    }

    /// Matching mode in effect.
    #[must_use]
    pub const fn mode(&self) -> HeaderMatching {
        self.mode
    }

    /// Number of distinct alias keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for AliasMap {
    fn default() -> Self {
        Self::builtin(HeaderMatching::default())
    }
}
