//! Summary report generator for shell output and `summary.txt`.

use super::{ReportError, ReportFormat, ReportGenerator};
use crate::model::format_number;
use crate::pipeline::AnalysisResult;
use std::fmt::Write as _;

/// Scores below this are shown green.
const LOW_RISK: f64 = 25.0;
/// Scores below this (and at least [`LOW_RISK`]) are shown yellow.
const MEDIUM_RISK: f64 = 50.0;

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

fn percent(ratio: f64) -> String {
    format!("{:.2}%", ratio * 100.0)
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn score_color(score: f64) -> &'static str {
        if score < LOW_RISK {
            "green"
        } else if score < MEDIUM_RISK {
            "yellow"
        } else {
            "red"
        }
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate_analysis_report(&self, result: &AnalysisResult) -> Result<String, ReportError> {
        let cost = &result.cost;
        let risk = &result.risk;
        let mut out = String::new();

        writeln!(out, "{}", self.color("=== BOMER Summary ===", "bold"))?;
        writeln!(out)?;
        writeln!(
            out,
            "{} {}",
            self.color("Parts after optimization:", "cyan"),
            result.part_count()
        )?;
        writeln!(
            out,
            "{} {} {}",
            self.color("Total cost:", "cyan"),
            format_number(cost.total_cost),
            cost.currency
        )?;
        if let (Some(volume), Some(volume_cost)) = (cost.build_volume, cost.volume_cost) {
            writeln!(
                out,
                "{} {} {}",
                self.color(&format!("Projected cost for {} builds:", format_number(volume)), "cyan"),
                format_number(volume_cost),
                cost.currency
            )?;
        }
        writeln!(
            out,
            "{} {}",
            self.color("Estimated risk score (0-100):", "cyan"),
            self.color(
                &format_number(risk.risk_score),
                Self::score_color(risk.risk_score)
            )
        )?;
        writeln!(out)?;

        writeln!(out, "{}", self.color("Risk breakdown:", "bold"))?;
        writeln!(out, "  Single-source parts ratio: {}", percent(risk.single_source_ratio))?;
        writeln!(out, "  Missing-price parts ratio: {}", percent(risk.missing_price_ratio))?;
        writeln!(out, "  Obsolete parts ratio:      {}", percent(risk.obsolete_ratio))?;
        writeln!(out)?;

        if !cost.missing_prices.is_empty() {
            writeln!(
                out,
                "{}",
                self.color("Parts with no price in supplier data:", "yellow")
            )?;
            for part in &cost.missing_prices {
                writeln!(out, "  - {part}")?;
            }
            writeln!(out)?;
        }

        if result.issues.is_empty() {
            writeln!(
                out,
                "{} {}",
                self.color("Validation issues:", "bold"),
                self.color("none.", "green")
            )?;
        } else {
            writeln!(out, "{}", self.color("Validation issues:", "red"))?;
            for issue in &result.issues {
                writeln!(out, "  - {issue}")?;
            }
        }

        Ok(out)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}
