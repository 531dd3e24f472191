//! Configuration types for bomer.
//!
//! [`BomerConfig`] mirrors the `bomer.yaml` file; [`AnalyzeConfig`] is the
//! per-invocation configuration assembled by the CLI.

use super::defaults::{
    DEFAULT_LIFECYCLE_WEIGHT, DEFAULT_MISSING_PRICE_WEIGHT, DEFAULT_OUTPUT_DIR,
    DEFAULT_SINGLE_SOURCE_WEIGHT,
};
use crate::reports::ReportFormat;
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::PathBuf;

// ============================================================================
// File configuration
// ============================================================================

/// Top-level configuration loaded from `bomer.yaml`.
///
/// Every section is optional; an absent file yields `BomerConfig::default()`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BomerConfig {
    /// Column alias overrides and header matching mode
    pub schema: SchemaConfig,
    /// Currency and build volume
    pub cost: CostConfig,
    /// Risk score weights
    pub risk: RiskConfig,
    /// Supplier catalog location
    pub suppliers: SuppliersConfig,
}

impl BomerConfig {
    /// Create a new `BomerConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a `BomerConfig` builder.
    pub fn builder() -> BomerConfigBuilder {
        BomerConfigBuilder::default()
    }
}

/// How input headers are compared against the alias table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum HeaderMatching {
    /// Ignore case, spaces, hyphens and `#`
    #[default]
    Strict,
    /// Ignore case and surrounding whitespace only
    Lenient,
}

/// Schema normalization settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct SchemaConfig {
    /// Extra header aliases (source header -> canonical column), merged over
    /// the built-in table. Non-string entries are ignored.
    #[serde(deserialize_with = "deserialize_aliases")]
    #[schemars(with = "IndexMap<String, String>")]
    pub aliases: IndexMap<String, String>,
    /// Header comparison mode
    pub header_matching: HeaderMatching,
}

/// Accept any YAML value for `schema.aliases`, keeping only string pairs.
fn deserialize_aliases<'de, D>(deserializer: D) -> Result<IndexMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let serde_json::Value::Object(map) = value else {
        if !value.is_null() {
            tracing::warn!("schema.aliases is not a mapping; ignoring it");
        }
        return Ok(IndexMap::new());
    };

    Ok(map
        .into_iter()
        .filter_map(|(src, dest)| match dest {
            serde_json::Value::String(dest) => Some((src, dest)),
            other => {
                tracing::debug!("Ignoring non-string alias {src:?} -> {other}");
                None
            }
        })
        .collect())
}

/// Cost engine settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct CostConfig {
    /// Reporting currency; overrides the catalog's currency
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Number of assemblies to project total spend for (must be positive)
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 0.0))]
    pub default_volume: Option<f64>,
}

/// Risk score weights. Each must lie in `[0, 1]`; they need not sum to 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct RiskConfig {
    /// Weight of the single-sourced parts ratio
    #[schemars(range(min = 0.0, max = 1.0))]
    pub single_source_weight: f64,
    /// Weight of the missing-price parts ratio
    #[schemars(range(min = 0.0, max = 1.0))]
    pub missing_price_weight: f64,
    /// Weight of the obsolete parts ratio
    #[schemars(range(min = 0.0, max = 1.0))]
    pub lifecycle_weight: f64,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            single_source_weight: DEFAULT_SINGLE_SOURCE_WEIGHT,
            missing_price_weight: DEFAULT_MISSING_PRICE_WEIGHT,
            lifecycle_weight: DEFAULT_LIFECYCLE_WEIGHT,
        }
    }
}

/// Supplier catalog settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct SuppliersConfig {
    /// Default supplier catalog path when `--suppliers` is not given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

// ============================================================================
// Builder for BomerConfig
// ============================================================================

/// Builder for constructing `BomerConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct BomerConfigBuilder {
    config: BomerConfig,
}

impl BomerConfigBuilder {
    /// Add a header alias.
    pub fn alias(mut self, source: impl Into<String>, canonical: impl Into<String>) -> Self {
        self.config
            .schema
            .aliases
            .insert(source.into(), canonical.into());
        self
    }

    /// Set the header matching mode.
    pub const fn header_matching(mut self, mode: HeaderMatching) -> Self {
        self.config.schema.header_matching = mode;
        self
    }

    /// Set the reporting currency.
    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.config.cost.currency = Some(currency.into());
        self
    }

    /// Set the projected build volume.
    pub const fn default_volume(mut self, volume: f64) -> Self {
        self.config.cost.default_volume = Some(volume);
        self
    }

    /// Set all three risk weights.
    pub const fn risk_weights(mut self, single_source: f64, missing_price: f64, lifecycle: f64) -> Self {
        self.config.risk = RiskConfig {
            single_source_weight: single_source,
            missing_price_weight: missing_price,
            lifecycle_weight: lifecycle,
        };
        self
    }

    /// Set the default supplier catalog path.
    pub fn suppliers_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.suppliers.path = Some(path.into());
        self
    }

    /// Build the configuration.
    pub fn build(self) -> BomerConfig {
        self.config
    }
}

// ============================================================================
// Command Configuration Types
// ============================================================================

/// Configuration for one `analyze` invocation.
#[derive(Debug, Clone)]
pub struct AnalyzeConfig {
    /// Input file paths
    pub paths: AnalyzePaths,
    /// Output configuration
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
    /// Explicit config file path, if any
    pub config_path: Option<PathBuf>,
}

/// Input paths for analysis
#[derive(Debug, Clone)]
pub struct AnalyzePaths {
    /// BOM CSV file
    pub bom: PathBuf,
    /// Supplier catalog JSON file; falls back to `suppliers.path` then the default
    pub suppliers: Option<PathBuf>,
}

/// Output-related configuration
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Format of the report printed to stdout
    pub format: ReportFormat,
    /// Directory the artifacts are written to
    pub dir: PathBuf,
    /// Disable colored output
    pub no_color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::Summary,
            dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            no_color: false,
        }
    }
}

/// Behavior flags for analysis
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Exit with code 1 if validation issues were found
    pub fail_on_issues: bool,
    /// Exit with code 2 if the risk score exceeds this value (0-100)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_risk: Option<f64>,
    /// Suppress non-essential output
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BomerConfig::default();
        assert!(config.schema.aliases.is_empty());
        assert_eq!(config.schema.header_matching, HeaderMatching::Strict);
        assert_eq!(config.risk.single_source_weight, 0.4);
        assert_eq!(config.risk.missing_price_weight, 0.3);
        assert_eq!(config.risk.lifecycle_weight, 0.3);
        assert_eq!(config.cost.currency, None);
        assert_eq!(config.suppliers.path, None);
    }

    #[test]
    fn test_partial_yaml_keeps_other_defaults() {
        let config: BomerConfig =
            serde_yaml_ng::from_str("risk:\n  lifecycle_weight: 0.5\n").expect("valid yaml");
        assert_eq!(config.risk.lifecycle_weight, 0.5);
        assert_eq!(config.risk.single_source_weight, 0.4);
    }

    #[test]
    fn test_aliases_ignore_non_string_values() {
        let yaml = r#"
schema:
  aliases:
    "manufacturer part": PartNumber
    "bogus": 12
    "nested": [a, b]
    "vendor": Manufacturer
"#;
        let config: BomerConfig = serde_yaml_ng::from_str(yaml).expect("valid yaml");
        let keys: Vec<_> = config.schema.aliases.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["manufacturer part", "vendor"]);
    }

    #[test]
    fn test_aliases_non_mapping_is_ignored() {
        let config: BomerConfig =
            serde_yaml_ng::from_str("schema:\n  aliases: [mpn]\n").expect("valid yaml");
        assert!(config.schema.aliases.is_empty());
    }

    #[test]
    fn test_header_matching_parses_lowercase() {
        let config: BomerConfig =
            serde_yaml_ng::from_str("schema:\n  header_matching: lenient\n").expect("valid yaml");
        assert_eq!(config.schema.header_matching, HeaderMatching::Lenient);
    }

    #[test]
    fn test_builder() {
        let config = BomerConfig::builder()
            .alias("vendor", "Manufacturer")
            .currency("EUR")
            .default_volume(100.0)
            .risk_weights(0.5, 0.25, 0.25)
            .suppliers_path("cat.json")
            .build();
        assert_eq!(config.schema.aliases.get("vendor").map(String::as_str), Some("Manufacturer"));
        assert_eq!(config.cost.currency.as_deref(), Some("EUR"));
        assert_eq!(config.cost.default_volume, Some(100.0));
        assert_eq!(config.risk.single_source_weight, 0.5);
        assert_eq!(config.suppliers.path, Some(PathBuf::from("cat.json")));
    }
}
