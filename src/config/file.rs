//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::BomerConfig;
use super::validation::{ConfigError, Validatable};
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
pub const CONFIG_FILE_NAMES: &[&str] = &["bomer.yaml", "bomer.yml", ".bomer.yaml", ".bomer.yml"];

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided (returned only if it exists)
/// 2. Current directory
/// 3. User config directory (~/.config/bomer/)
///
/// An explicit path that does not exist stops the search; it is never
/// silently replaced by a discovered file.
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return path.exists().then(|| path.to_path_buf());
    }

    if let Some(path) = std::env::current_dir()
        .ok()
        .and_then(|cwd| find_config_in_dir(&cwd))
    {
        return Some(path);
    }

    dirs::config_dir().and_then(|dir| find_config_in_dir(&dir.join("bomer")))
}

/// Directories searched when no explicit path is given, in order.
#[must_use]
pub fn config_search_dirs() -> Vec<PathBuf> {
    let mut dirs_out = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        dirs_out.push(cwd);
    }
    if let Some(dir) = dirs::config_dir() {
        dirs_out.push(dir.join("bomer"));
    }
    dirs_out
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug)]
pub enum ConfigFileError {
    /// File not found
    NotFound(PathBuf),
    /// IO error reading file
    Io(std::io::Error),
    /// YAML parsing error
    Parse(serde_yaml_ng::Error),
    /// Parsed but failed validation
    Invalid(Vec<ConfigError>),
}

impl std::fmt::Display for ConfigFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => {
                write!(f, "Config file not found: {}", path.display())
            }
            Self::Io(e) => write!(f, "Failed to read config file: {e}"),
            Self::Parse(e) => write!(f, "Failed to parse config file: {e}"),
            Self::Invalid(errors) => {
                let joined = errors
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; ");
                write!(f, "Invalid configuration: {joined}")
            }
        }
    }
}

impl std::error::Error for ConfigFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound(_) | Self::Invalid(_) => None,
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigFileError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_yaml_ng::Error> for ConfigFileError {
    fn from(err: serde_yaml_ng::Error) -> Self {
        Self::Parse(err)
    }
}

impl From<ConfigFileError> for crate::error::BomerError {
    fn from(err: ConfigFileError) -> Self {
        Self::Config(err.to_string())
    }
}

/// Parse a `BomerConfig` from YAML text. Empty text yields the defaults.
pub fn parse_config_str(content: &str) -> Result<BomerConfig, ConfigFileError> {
    if content.trim().is_empty() {
        return Ok(BomerConfig::default());
    }
    let config: Option<BomerConfig> = serde_yaml_ng::from_str(content)?;
    Ok(config.unwrap_or_default())
}

/// Load a `BomerConfig` from a YAML file without validating it.
pub fn load_config_file(path: &Path) -> Result<BomerConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    parse_config_str(&content)
}

/// Load and validate configuration.
///
/// Returns the defaults when no file is found (an absent file is not an
/// error). A file that exists but cannot be parsed, or that fails validation,
/// is an error.
pub fn load_config(
    explicit_path: Option<&Path>,
) -> Result<(BomerConfig, Option<PathBuf>), ConfigFileError> {
    let Some(path) = discover_config_file(explicit_path) else {
        if let Some(explicit) = explicit_path {
            tracing::warn!(
                "Config file {} not found; using defaults",
                explicit.display()
            );
        } else {
            tracing::debug!("No config file found; using defaults");
        }
        return Ok((BomerConfig::default(), None));
    };

    tracing::debug!("Loading config from {}", path.display());
    let config = load_config_file(&path)?;

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigFileError::Invalid(errors));
    }

    Ok((config, Some(path)))
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate an example config file content from the defaults.
#[must_use]
pub fn generate_example_config() -> String {
    let example = BomerConfig::default();
    format!(
        r"# bomer configuration
# Place this file at bomer.yaml in your working directory or ~/.config/bomer/

{}
",
        serde_yaml_ng::to_string(&example).unwrap_or_default()
    )
}

/// Generate a commented example config with all options.
#[must_use]
pub fn generate_full_example_config() -> String {
    r"# bomer configuration file
# =========================
#
# Place it at:
#   - bomer.yaml in the directory you run bomer from
#   - ~/.config/bomer/bomer.yaml for a per-user default
#
# Every section is optional.

# Column normalization
schema:
  # strict: ignore case, spaces, hyphens and '#' when matching headers
  # lenient: ignore case only
  header_matching: strict
  # Extra header aliases, merged over the built-in table, e.g.
  #   'manufacturer part': PartNumber
  #   vendor: Manufacturer
  aliases: {}

# Cost analysis
# cost:
#   # Reporting currency (defaults to the supplier catalog's currency, then USD)
#   currency: USD
#   # Project total spend for this many assemblies
#   default_volume: 100

# Risk scoring weights, each between 0 and 1
risk:
  single_source_weight: 0.4
  missing_price_weight: 0.3
  lifecycle_weight: 0.3

# Supplier catalog used when --suppliers is not given
# suppliers:
#   path: data/suppliers.json
"
    .to_string()
}

// ============================================================================
// Tests
// ============================================================================
