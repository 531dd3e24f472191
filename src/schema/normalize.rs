//! Column normalization into the canonical BOM schema.

use super::aliases::AliasMap;
use crate::config::SchemaConfig;
use crate::model::{Table, CANONICAL_COLUMNS};
use std::collections::HashSet;

/// Rename BOM columns to canonical names and add any canonical column that
/// is still missing.
///
/// - Headers are resolved through the built-in alias table merged with
///   `config.aliases`.
/// - Unmatched columns pass through unchanged.
/// - A column already carrying its canonical name keeps it; otherwise the
///   first column resolving to a name wins and later ones keep their
///   original header.
/// - Missing canonical columns are appended filled with nulls.
///
/// The input table is not modified.
#[must_use]
pub fn normalize_bom_columns(raw: &Table, config: &SchemaConfig) -> Table {
    let aliases = AliasMap::from_config(config);
    let targets: Vec<Option<&str>> = raw.columns().iter().map(|c| aliases.resolve(c)).collect();

    // Columns that are already named canonically own their name.
    let mut claimed: HashSet<String> = raw.columns().iter().cloned().collect();
    let mut renamed = 0usize;

    let mut normalized = raw.with_renamed_columns(|idx, original| match targets[idx] {
        Some(target) if target == original => original.to_string(),
        Some(target) if !claimed.contains(target) => {
            claimed.insert(target.to_string());
            renamed += 1;
            target.to_string()
        }
        Some(target) => {
            tracing::warn!(
                "Column {original:?} also maps to {target:?}; keeping its original header"
            );
            original.to_string()
        }
        None => original.to_string(),
    });

    let mut added = Vec::new();
    for column in CANONICAL_COLUMNS {
        if normalized.add_null_column(column) {
            added.push(column);
        }
    }

    tracing::debug!(
        "Normalized columns: {renamed} renamed, {} added ({})",
        added.len(),
        added.join(", ")
    );

    normalized
}
