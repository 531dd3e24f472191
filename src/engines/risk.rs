//! Weighted supply-chain risk scoring.

use crate::config::RiskConfig;
use crate::model::{round_to, OptimizedBom, SupplierCatalog};
use serde::{Deserialize, Serialize};

/// Lifecycle states counted as obsolete, compared trimmed and lower-cased.
pub const OBSOLETE_STATES: [&str; 3] = ["obsolete", "eol", "end of life"];

/// Upper bound of the score. Weights summing past one would otherwise exceed it.
pub const MAX_RISK_SCORE: f64 = 100.0;

/// Weights applied to each risk ratio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskWeights {
    pub single_source: f64,
    pub missing_price: f64,
    pub lifecycle: f64,
}

impl Default for RiskWeights {
    fn default() -> Self {
        Self::from(&RiskConfig::default())
    }
}

impl From<&RiskConfig> for RiskWeights {
    fn from(config: &RiskConfig) -> Self {
        Self {
            single_source: config.single_source_weight,
            missing_price: config.missing_price_weight,
            lifecycle: config.lifecycle_weight,
        }
    }
}

/// Risk flags for one BOM line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskLine {
    #[serde(rename = "PartNumber")]
    pub part_number: String,
    pub supplier_count: usize,
    pub single_source: bool,
    pub missing_price: bool,
    pub obsolete: bool,
}

/// Aggregate risk for the whole BOM.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskSummary {
    /// 0 to 100, rounded to two decimals.
    pub risk_score: f64,
    pub single_source_ratio: f64,
    pub missing_price_ratio: f64,
    pub obsolete_ratio: f64,
    pub lines: Vec<RiskLine>,
}

impl RiskSummary {
    /// Lines flagged by any rule.
    pub fn flagged(&self) -> impl Iterator<Item = &RiskLine> {
        self.lines
            .iter()
            .filter(|l| l.single_source || l.missing_price || l.obsolete)
    }
}

/// Whether a lifecycle status marks the part as end of life.
#[must_use]
pub fn is_obsolete(status: Option<&str>) -> bool {
    status.is_some_and(|s| {
        let normalized = s.trim().to_lowercase();
        OBSOLETE_STATES.contains(&normalized.as_str())
    })
}

/// Score the optimized BOM.
///
/// Ratios are taken over `max(lines, 1)`, so an empty BOM scores zero. The
/// score is capped at [`MAX_RISK_SCORE`].
#[must_use]
pub fn analyze_risk(
    bom: &OptimizedBom,
    catalog: &SupplierCatalog,
    weights: &RiskWeights,
) -> RiskSummary {
    let lines: Vec<RiskLine> = bom
        .lines
        .iter()
        .map(|line| {
            let part = line.part_number.trim();
            let supplier_count = catalog.supplier_count(part);
            RiskLine {
                part_number: part.to_string(),
                supplier_count,
                single_source: supplier_count == 1,
                missing_price: supplier_count == 0,
                obsolete: is_obsolete(line.lifecycle_status.as_deref()),
            }
        })
        .collect();

    let single_source_ratio = ratio(&lines, |l| l.single_source);
    let missing_price_ratio = ratio(&lines, |l| l.missing_price);
    let obsolete_ratio = ratio(&lines, |l| l.obsolete);

    let raw_score = 100.0
        * (weights.single_source * single_source_ratio
            + weights.missing_price * missing_price_ratio
            + weights.lifecycle * obsolete_ratio);

    let summary = RiskSummary {
        risk_score: round_to(raw_score.min(MAX_RISK_SCORE), 2),
        single_source_ratio,
        missing_price_ratio,
        obsolete_ratio,
        lines,
    };
    tracing::debug!(
        "Risk score {} ({} flagged line(s))",
        summary.risk_score,
        summary.flagged().count()
    );
    summary
}

fn ratio(lines: &[RiskLine], flag: impl Fn(&RiskLine) -> bool) -> f64 {
    let hits = lines.iter().filter(|l| flag(l)).count();
    hits as f64 / lines.len().max(1) as f64
}
