//! Supplier price catalog.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A multi-supplier price catalog as read from the suppliers JSON file.
///
/// ```json
/// {
///   "currency": "USD",
///   "suppliers": [
///     { "name": "SupplierA", "prices": { "RES-10K-1%": 0.01 } }
///   ]
/// }
/// ```
///
/// Prices are kept as raw JSON values; coercion happens when the price index
/// is built so that one malformed entry never rejects the whole catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupplierCatalog {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default)]
    pub suppliers: Vec<Supplier>,
}

/// One supplier and the parts it offers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub prices: IndexMap<String, serde_json::Value>,
}

impl Supplier {
    /// Create a supplier with numeric prices.
    pub fn new<I, K>(name: impl Into<String>, prices: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        Self {
            name: name.into(),
            prices: prices
                .into_iter()
                .map(|(k, v)| (k.into(), serde_json::Value::from(v)))
                .collect(),
        }
    }

    /// Whether this supplier lists the part at all, regardless of price validity.
    #[must_use]
    pub fn offers(&self, part_number: &str) -> bool {
        self.prices.contains_key(part_number)
    }
}

impl SupplierCatalog {
    /// Build a catalog from suppliers.
    #[must_use]
    pub fn new(currency: Option<String>, suppliers: Vec<Supplier>) -> Self {
        Self {
            currency,
            suppliers,
        }
    }

    /// Number of suppliers listing the exact part number.
    #[must_use]
    pub fn supplier_count(&self, part_number: &str) -> usize {
        self.suppliers
            .iter()
            .filter(|s| s.offers(part_number))
            .count()
    }
}
