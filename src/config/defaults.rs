//! Default values for bomer configuration.

/// Currency used when neither the config nor the catalog names one.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Supplier catalog location used when neither CLI nor config provides one.
pub const DEFAULT_SUPPLIERS_PATH: &str = "data/suppliers.json";

/// Directory analysis artifacts are written to by default.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Default weight of the single-source ratio in the risk score.
pub const DEFAULT_SINGLE_SOURCE_WEIGHT: f64 = 0.4;

/// Default weight of the missing-price ratio in the risk score.
pub const DEFAULT_MISSING_PRICE_WEIGHT: f64 = 0.3;

/// Default weight of the obsolete ratio in the risk score.
pub const DEFAULT_LIFECYCLE_WEIGHT: f64 = 0.3;
