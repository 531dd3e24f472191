//! Analyze command handler.
//!
//! Implements the `analyze` subcommand: load, analyze, write artifacts and
//! print the chosen report.

use crate::config::{load_config, AnalyzeConfig, BehaviorConfig, Validatable};
use crate::pipeline::{
    exit_codes, run_analysis, should_use_color, write_artifacts, write_output, AnalysisResult,
    OutputTarget,
};
use crate::reports::create_reporter_with_options;
use anyhow::{bail, Context, Result};

/// Run the analyze command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
#[allow(clippy::needless_pass_by_value)]
pub fn run_analyze(config: AnalyzeConfig) -> Result<i32> {
    let errors = config.validate();
    if !errors.is_empty() {
        let joined = errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        bail!("Invalid arguments: {joined}");
    }

    let (file_config, loaded_from) = load_config(config.config_path.as_deref())?;
    if let Some(path) = &loaded_from {
        tracing::debug!("Using config file {}", path.display());
    }

    let result = run_analysis(
        &config.paths.bom,
        config.paths.suppliers.as_deref(),
        &file_config,
    )
    .with_context(|| format!("Analysis of {} failed", config.paths.bom.display()))?;

    let exit_code = determine_exit_code(&config.behavior, &result);

    write_artifacts(&result, &config.output.dir).context("Failed to write artifacts")?;
    if !config.behavior.quiet {
        tracing::info!(
            "Analysis complete. Artifacts written to: {}",
            config.output.dir.display()
        );
    }

    let target = OutputTarget::Stdout;
    let use_color = should_use_color(config.output.no_color, &target);
    let reporter = create_reporter_with_options(config.output.format, use_color);
    let report = reporter.generate_analysis_report(&result)?;
    write_output(&report, &target, config.behavior.quiet)?;

    Ok(exit_code)
}

/// Determine the exit code from the analysis and the threshold flags.
fn determine_exit_code(behavior: &BehaviorConfig, result: &AnalysisResult) -> i32 {
    if let Some(max_risk) = behavior.max_risk {
        if result.risk.risk_score > max_risk {
            tracing::warn!(
                "Risk score {} exceeds maximum {max_risk}",
                result.risk.risk_score
            );
            return exit_codes::RISK_EXCEEDED;
        }
    }
    if behavior.fail_on_issues && result.has_issues() {
        return exit_codes::ISSUES_FOUND;
    }
    exit_codes::SUCCESS
}
