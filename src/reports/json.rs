//! JSON report generator.

use super::{AnalysisPayload, ReportError, ReportFormat, ReportGenerator};
use crate::pipeline::AnalysisResult;
use crate::schema::Issue;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate_analysis_report(&self, result: &AnalysisResult) -> Result<String, ReportError> {
        let payload = AnalysisPayload::new(result);
        let json = if self.pretty {
            serde_json::to_string_pretty(&payload)?
        } else {
            serde_json::to_string(&payload)?
        };
        Ok(json)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

/// Render the validator's findings as a pretty-printed JSON array.
pub fn issues_to_json(issues: &[Issue]) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(issues)?)
}
