//! Report type definitions.

use crate::engines::{CostSummary, RiskSummary};
use crate::pipeline::AnalysisResult;
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for the report printed after an analysis
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Human-readable summary (same text as summary.txt)
    #[default]
    Summary,
    /// The analysis.json payload
    Json,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Summary => write!(f, "summary"),
            ReportFormat::Json => write!(f, "json"),
        }
    }
}

/// Run metadata written at the top of `analysis.json`.
///
/// Carries no timestamp, so identical inputs give identical payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub bom_path: Option<String>,
    pub suppliers_path: Option<String>,
    pub part_count: usize,
    pub tool: String,
    pub version: String,
}

impl ReportMetadata {
    /// Metadata for an analysis result.
    #[must_use]
    pub fn for_result(result: &AnalysisResult) -> Self {
        Self {
            bom_path: result
                .bom_path
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            suppliers_path: result
                .suppliers_path
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            part_count: result.part_count(),
            tool: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// The `analysis.json` document.
#[derive(Debug, Serialize)]
pub struct AnalysisPayload<'a> {
    pub metadata: ReportMetadata,
    pub cost: &'a CostSummary,
    pub risk: &'a RiskSummary,
}

impl<'a> AnalysisPayload<'a> {
    #[must_use]
    pub fn new(result: &'a AnalysisResult) -> Self {
        Self {
            metadata: ReportMetadata::for_result(result),
            cost: &result.cost,
            risk: &result.risk,
        }
    }
}
