//! Report generation for analysis results.
//!
//! - Summary: human-readable text, written to `summary.txt` and optionally
//!   colored on stdout
//! - JSON: the `analysis.json` payload and the `issues.json` list
//! - CSV: tabular artifacts (`normalized_bom.csv`, `optimized_bom.csv`)

mod csv;
mod json;
mod summary;
mod types;

pub use self::csv::{table_to_csv, write_table_csv};
pub use json::{issues_to_json, JsonReporter};
pub use summary::SummaryReporter;
pub use types::{AnalysisPayload, ReportFormat, ReportMetadata};

use crate::error::{BomerError, ReportErrorKind};
use crate::pipeline::AnalysisResult;
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("CSV error: {0}")]
    CsvError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

impl From<::csv::Error> for ReportError {
    fn from(err: ::csv::Error) -> Self {
        Self::CsvError(err.to_string())
    }
}

impl From<ReportError> for BomerError {
    fn from(err: ReportError) -> Self {
        match err {
            ReportError::IoError(e) => e.into(),
            ReportError::SerializationError(msg) => {
                Self::report("rendering report", ReportErrorKind::JsonSerializationError(msg))
            }
            ReportError::CsvError(msg) => {
                Self::report("rendering report", ReportErrorKind::CsvSerializationError(msg))
            }
            ReportError::FormatError(e) => {
                Self::report("rendering report", ReportErrorKind::FormatError(e.to_string()))
            }
        }
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Render a report for an analysis run
    fn generate_analysis_report(&self, result: &AnalysisResult) -> Result<String, ReportError>;

    /// Write report to a writer
    fn write_analysis_report(
        &self,
        result: &AnalysisResult,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let report = self.generate_analysis_report(result)?;
        writer.write_all(report.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator> {
    create_reporter_with_options(format, true)
}

/// Create a report generator with color control
#[must_use]
pub fn create_reporter_with_options(
    format: ReportFormat,
    use_color: bool,
) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Summary => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
        ReportFormat::Json => Box::new(JsonReporter::new()),
    }
}
