//! End-to-end BOM analysis.
//!
//! raw table -> normalize -> validate -> optimize -> {cost, risk}

use crate::config::{BomerConfig, DEFAULT_SUPPLIERS_PATH};
use crate::engines::{analyze_costs, analyze_risk, optimize_bom, CostSummary, RiskSummary, RiskWeights};
use crate::error::Result;
use crate::model::{OptimizedBom, SupplierCatalog, Table};
use crate::parsers::{load_bom, load_suppliers};
use crate::schema::{normalize_bom_columns, validate_bom, Issue};
use std::path::{Path, PathBuf};

/// Everything one analysis run produces.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    /// BOM file the run read, when it came from disk
    pub bom_path: Option<PathBuf>,
    /// Supplier catalog file the run read, when it came from disk
    pub suppliers_path: Option<PathBuf>,
    /// Canonical table, source row order preserved
    pub normalized: Table,
    /// Data-quality findings on `normalized`
    pub issues: Vec<Issue>,
    pub optimized: OptimizedBom,
    pub cost: CostSummary,
    pub risk: RiskSummary,
}

impl AnalysisResult {
    /// True when the validator reported anything.
    #[must_use]
    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    /// Number of distinct parts after aggregation.
    #[must_use]
    pub fn part_count(&self) -> usize {
        self.optimized.part_count()
    }
}

/// Run the analysis over in-memory inputs.
///
/// Data-quality issues never abort the run; they are returned alongside the
/// full cost and risk output.
pub fn analyze_tables(
    raw: &Table,
    catalog: &SupplierCatalog,
    config: &BomerConfig,
) -> Result<AnalysisResult> {
    let normalized = normalize_bom_columns(raw, &config.schema);

    let issues = validate_bom(&normalized);
    if !issues.is_empty() {
        tracing::warn!("BOM has {} data-quality issue(s)", issues.len());
    }

    let optimized = optimize_bom(&normalized)?;
    let cost = analyze_costs(&optimized, catalog, &config.cost);
    let risk = analyze_risk(&optimized, catalog, &RiskWeights::from(&config.risk));

    tracing::info!(
        "Analyzed {} part(s): total cost {} {}, risk score {}",
        optimized.part_count(),
        cost.total_cost,
        cost.currency,
        risk.risk_score
    );

    Ok(AnalysisResult {
        bom_path: None,
        suppliers_path: None,
        normalized,
        issues,
        optimized,
        cost,
        risk,
    })
}

/// Supplier catalog location: explicit path, then `suppliers.path` from the
/// config, then `data/suppliers.json`.
#[must_use]
pub fn resolve_suppliers_path(explicit: Option<&Path>, config: &BomerConfig) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| config.suppliers.path.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SUPPLIERS_PATH))
}

/// Load both inputs from disk and analyze them.
///
/// Load errors are fatal and raised before any analysis starts.
pub fn run_analysis(
    bom_path: &Path,
    suppliers_path: Option<&Path>,
    config: &BomerConfig,
) -> Result<AnalysisResult> {
    let suppliers_path = resolve_suppliers_path(suppliers_path, config);

    let raw = load_bom(bom_path)?;
    let catalog = load_suppliers(&suppliers_path)?;

    let mut result = analyze_tables(&raw, &catalog, config)?;
    result.bom_path = Some(bom_path.to_path_buf());
    result.suppliers_path = Some(suppliers_path);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Cell, Supplier, PART_NUMBER};

    fn raw(columns: &[&str], rows: &[&[&str]]) -> Table {
        Table::from_rows(
            columns.iter().map(ToString::to_string).collect(),
            rows.iter()
                .map(|r| {
                    r.iter()
                        .map(|v| (!v.is_empty()).then(|| (*v).to_string()))
                        .collect::<Vec<Cell>>()
                })
                .collect(),
        )
    }

    fn catalog() -> SupplierCatalog {
        SupplierCatalog::new(
            Some("USD".into()),
            vec![
                Supplier::new("A", [("P1", 0.5)]),
                Supplier::new("B", [("P1", 0.4), ("P2", 1.0)]),
            ],
        )
    }

    #[test]
    fn test_analyze_tables_end_to_end() {
        let bom = raw(
            &["MPN", "Qty", "Lifecycle"],
            &[&["P1", "4", ""], &["P2", "5", "Obsolete"], &["P1", "6", ""]],
        );
        let result = analyze_tables(&bom, &catalog(), &BomerConfig::default()).unwrap();

        assert!(!result.has_issues());
        assert_eq!(result.normalized.row_count(), 3);
        assert_eq!(result.part_count(), 2);
        assert_eq!(result.cost.total_cost, 9.0);
        assert!(result.risk.lines[1].obsolete);
        assert_eq!(result.bom_path, None);
    }

    #[test]
    fn test_issues_do_not_abort() {
        let bom = raw(&["MPN", "Qty"], &[&["", "1"], &["P1", "abc"], &["P2", "2"]]);
        let result = analyze_tables(&bom, &catalog(), &BomerConfig::default()).unwrap();
        assert_eq!(result.issues.len(), 2);
        assert_eq!(result.cost.total_cost, 2.0);
    }

    #[test]
    fn test_unrecognized_headers_still_analyze() {
        let bom = raw(&["Item", "Count"], &[&["P1", "1"]]);
        let result = analyze_tables(&bom, &catalog(), &BomerConfig::default()).unwrap();
        assert!(result.normalized.has_column(PART_NUMBER));
        assert!(result.optimized.is_empty());
        assert_eq!(result.risk.risk_score, 0.0);
        // every row is missing its part number and quantity
        assert_eq!(result.issues.len(), 2);
    }

    #[test]
    fn test_resolve_suppliers_path_precedence() {
        let config = BomerConfig::builder().suppliers_path("cfg/suppliers.json").build();
        assert_eq!(
            resolve_suppliers_path(Some(Path::new("cli.json")), &config),
            PathBuf::from("cli.json")
        );
        assert_eq!(
            resolve_suppliers_path(None, &config),
            PathBuf::from("cfg/suppliers.json")
        );
        assert_eq!(
            resolve_suppliers_path(None, &BomerConfig::default()),
            PathBuf::from(DEFAULT_SUPPLIERS_PATH)
        );
    }
}
