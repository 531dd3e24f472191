//! Configuration validation for bomer.
//!
//! Configuration problems are fatal: the pipeline refuses to start while any
//! [`ConfigError`] is outstanding.

use super::types::{
    AnalyzeConfig, BehaviorConfig, BomerConfig, CostConfig, RiskConfig, SchemaConfig,
};
use crate::model::CANONICAL_COLUMNS;

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for BomerConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.schema.validate());
        errors.extend(self.cost.validate());
        errors.extend(self.risk.validate());
        errors
    }
}

impl Validatable for SchemaConfig {
    fn validate(&self) -> Vec<ConfigError> {
        // Blank aliases are dropped at merge time; only non-canonical targets
        // are worth a warning since they are legal pass-through renames.
        for (src, dest) in &self.aliases {
            let dest = dest.trim();
            if !dest.is_empty() && !CANONICAL_COLUMNS.contains(&dest) {
                tracing::warn!(
                    "schema.aliases maps {src:?} to non-canonical column {dest:?}"
                );
            }
        }
        Vec::new()
    }
}

impl Validatable for CostConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if let Some(ref currency) = self.currency {
            if currency.trim().is_empty() {
                errors.push(ConfigError::new(
                    "cost.currency",
                    "Currency must not be empty if provided",
                ));
            }
        }

        if let Some(volume) = self.default_volume {
            if !volume.is_finite() || volume <= 0.0 {
                errors.push(ConfigError::new(
                    "cost.default_volume",
                    format!("Default volume must be positive if provided, got {volume}"),
                ));
            }
        }

        errors
    }
}

impl Validatable for RiskConfig {
    fn validate(&self) -> Vec<ConfigError> {
        [
            ("risk.single_source_weight", self.single_source_weight),
            ("risk.missing_price_weight", self.missing_price_weight),
            ("risk.lifecycle_weight", self.lifecycle_weight),
        ]
        .into_iter()
        .filter(|(_, weight)| !(0.0..=1.0).contains(weight))
        .map(|(field, weight)| {
            ConfigError::new(field, format!("Weight must be between 0 and 1, got {weight}"))
        })
        .collect()
    }
}

impl Validatable for BehaviorConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if let Some(max_risk) = self.max_risk {
            if !(0.0..=100.0).contains(&max_risk) {
                errors.push(ConfigError::new(
                    "behavior.max_risk",
                    format!("Maximum risk score must be between 0 and 100, got {max_risk}"),
                ));
            }
        }
        errors
    }
}

impl Validatable for AnalyzeConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = self.behavior.validate();

        if self.paths.bom.as_os_str().is_empty() {
            errors.push(ConfigError::new("paths.bom", "BOM path must not be empty"));
        }

        if self.output.dir.exists() && !self.output.dir.is_dir() {
            errors.push(ConfigError::new(
                "output.dir",
                format!("Not a directory: {}", self.output.dir.display()),
            ));
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::{AnalyzePaths, OutputConfig};
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        assert!(BomerConfig::default().is_valid());
    }

    #[test]
    fn test_risk_weight_out_of_range() {
        let config = BomerConfig::builder().risk_weights(1.5, 0.3, -0.1).build();
        let errors = config.validate();
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["risk.single_source_weight", "risk.lifecycle_weight"]);
    }

    #[test]
    fn test_risk_weight_bounds_inclusive() {
        let config = BomerConfig::builder().risk_weights(0.0, 1.0, 1.0).build();
        assert!(config.is_valid());
    }

    #[test]
    fn test_risk_weight_nan_rejected() {
        let config = BomerConfig::builder().risk_weights(f64::NAN, 0.3, 0.3).build();
        assert_eq!(config.validate().len(), 1);
    }

    #[test]
    fn test_default_volume_must_be_positive() {
        let config = BomerConfig::builder().default_volume(0.0).build();
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "cost.default_volume");

        assert!(BomerConfig::builder().default_volume(250.0).build().is_valid());
    }

    #[test]
    fn test_blank_currency_rejected() {
        let config = BomerConfig::builder().currency("  ").build();
        assert!(!config.is_valid());
    }

    #[test]
    fn test_non_canonical_alias_is_not_an_error() {
        let config = BomerConfig::builder().alias("vendor", "Vendor").build();
        assert!(config.is_valid());
    }

    #[test]
    fn test_analyze_config_max_risk_range() {
        let config = AnalyzeConfig {
            paths: AnalyzePaths {
                bom: PathBuf::from("bom.csv"),
                suppliers: None,
            },
            output: OutputConfig::default(),
            behavior: BehaviorConfig {
                max_risk: Some(150.0),
                ..Default::default()
            },
            config_path: None,
        };
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "behavior.max_risk");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::new("risk.lifecycle_weight", "bad");
        assert_eq!(err.to_string(), "risk.lifecycle_weight: bad");
    }
}
