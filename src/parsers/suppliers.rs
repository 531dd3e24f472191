//! Supplier catalog loader.

use crate::error::{BomerError, LoadErrorKind, Result};
use crate::model::SupplierCatalog;
use std::path::Path;

/// Load a supplier catalog from a JSON file.
///
/// The document must be an object whose optional `suppliers` member is a
/// list of `{name, prices}` objects. Individual prices are not checked here.
pub fn load_suppliers(path: &Path) -> Result<SupplierCatalog> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        let kind = if e.kind() == std::io::ErrorKind::NotFound {
            LoadErrorKind::NotFound
        } else {
            LoadErrorKind::Read(e.to_string())
        };
        BomerError::supplier_load(path, kind)
    })?;

    let catalog =
        parse_suppliers_str(&content).map_err(|kind| BomerError::supplier_load(path, kind))?;
    tracing::info!(
        "Loaded {} supplier(s) from {}",
        catalog.suppliers.len(),
        path.display()
    );
    Ok(catalog)
}

/// Parse a supplier catalog from JSON text.
pub fn parse_suppliers_str(content: &str) -> std::result::Result<SupplierCatalog, LoadErrorKind> {
    serde_json::from_str(content).map_err(|e| LoadErrorKind::InvalidJson(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_catalog() {
        let catalog = parse_suppliers_str(
            r#"{
                "currency": "EUR",
                "suppliers": [
                    {"name": "A", "prices": {"P1": 0.5}},
                    {"name": "B", "prices": {"P1": 0.4, "P2": "1.0"}}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(catalog.currency.as_deref(), Some("EUR"));
        assert_eq!(catalog.suppliers.len(), 2);
        assert_eq!(catalog.supplier_count("P1"), 2);
    }

    #[test]
    fn test_wrong_shape_is_rejected() {
        for bad in [
            "[1, 2]",
            r#"{"suppliers": {"name": "A"}}"#,
            r#"{"suppliers": [{"name": "A", "prices": [0.5]}]}"#,
            "not json",
        ] {
            assert!(
                matches!(parse_suppliers_str(bad), Err(LoadErrorKind::InvalidJson(_))),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_empty_object_is_empty_catalog() {
        let catalog = parse_suppliers_str("{}").unwrap();
        assert!(catalog.suppliers.is_empty());
        assert_eq!(catalog.currency, None);
    }

    #[test]
    fn test_missing_file() {
        let err = load_suppliers(Path::new("/nonexistent/suppliers.json")).unwrap_err();
        assert!(matches!(
            err,
            BomerError::SupplierLoad {
                source: LoadErrorKind::NotFound,
                ..
            }
        ));
    }
}
