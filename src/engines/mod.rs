//! Analysis engines run over the canonical BOM.
//!
//! - [`optimize_bom`]: aggregates duplicate part numbers
//! - [`analyze_costs`]: prices the optimized BOM at the cheapest supplier
//! - [`analyze_risk`]: scores sourcing and lifecycle risk
//!
//! Cost and risk both consume the optimized BOM and never see each other's
//! output.

mod cost;
mod optimizer;
mod risk;

pub use cost::{
    analyze_costs, resolve_currency, CostLineItem, CostSummary, PriceIndex, COST_PRECISION,
};
pub use optimizer::optimize_bom;
pub use risk::{
    analyze_risk, is_obsolete, RiskLine, RiskSummary, RiskWeights, MAX_RISK_SCORE,
    OBSOLETE_STATES,
};
