//! Pipeline orchestration for BOM analysis.
//!
//! Loads inputs, runs normalize, validate, optimize, cost and risk, and
//! writes the resulting artifacts. CLI handlers are thin wrappers around
//! [`run_analysis`] and [`write_artifacts`].

mod analyze;
mod output;

pub use analyze::{analyze_tables, resolve_suppliers_path, run_analysis, AnalysisResult};
pub use output::{
    should_use_color, write_artifacts, write_output, ArtifactPaths, OutputTarget, ANALYSIS_FILE,
    ISSUES_FILE, NORMALIZED_BOM_FILE, OPTIMIZED_BOM_FILE, SUMMARY_FILE,
};

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success - analysis complete and no threshold tripped
    pub const SUCCESS: i32 = 0;
    /// Validation issues were found and `--fail-on-issues` was set
    pub const ISSUES_FOUND: i32 = 1;
    /// Risk score exceeded `--max-risk`
    pub const RISK_EXCEEDED: i32 = 2;
    /// An error occurred
    pub const ERROR: i32 = 3;
}
