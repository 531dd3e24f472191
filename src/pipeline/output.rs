//! Output handling for analysis artifacts and reports.

use super::AnalysisResult;
use crate::error::{BomerError, ErrorContext, Result};
use crate::reports::{
    issues_to_json, table_to_csv, JsonReporter, ReportGenerator, SummaryReporter,
};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

/// Canonical table, source row order.
pub const NORMALIZED_BOM_FILE: &str = "normalized_bom.csv";
/// Aggregated table, sorted by part number.
pub const OPTIMIZED_BOM_FILE: &str = "optimized_bom.csv";
pub const ISSUES_FILE: &str = "issues.json";
pub const ANALYSIS_FILE: &str = "analysis.json";
pub const SUMMARY_FILE: &str = "summary.txt";

/// Target for output - either stdout or a file
#[derive(Debug, Clone)]
pub enum OutputTarget {
    /// Write to stdout
    Stdout,
    /// Write to a file
    File(PathBuf),
}

impl OutputTarget {
    /// Create output target from optional path
    pub fn from_option(path: Option<PathBuf>) -> Self {
        match path {
            Some(p) => OutputTarget::File(p),
            None => OutputTarget::Stdout,
        }
    }

    /// Check if output is to a terminal
    pub fn is_terminal(&self) -> bool {
        matches!(self, OutputTarget::Stdout) && std::io::stdout().is_terminal()
    }
}

/// Determine if color should be used based on flags, environment and target
pub fn should_use_color(no_color_flag: bool, target: &OutputTarget) -> bool {
    !no_color_flag && std::env::var("NO_COLOR").is_err() && target.is_terminal()
}

/// Write output to the target (stdout or file)
pub fn write_output(content: &str, target: &OutputTarget, quiet: bool) -> Result<()> {
    match target {
        OutputTarget::Stdout => {
            print!("{content}");
            if !content.ends_with('\n') {
                println!();
            }
            Ok(())
        }
        OutputTarget::File(path) => {
            std::fs::write(path, content).map_err(|e| BomerError::io(path, e))?;
            if !quiet {
                tracing::info!("Report written to {}", path.display());
            }
            Ok(())
        }
    }
}

/// Paths of the five artifacts written by [`write_artifacts`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub normalized_bom: PathBuf,
    pub optimized_bom: PathBuf,
    pub issues: PathBuf,
    pub analysis: PathBuf,
    pub summary: PathBuf,
}

impl ArtifactPaths {
    #[must_use]
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            normalized_bom: dir.join(NORMALIZED_BOM_FILE),
            optimized_bom: dir.join(OPTIMIZED_BOM_FILE),
            issues: dir.join(ISSUES_FILE),
            analysis: dir.join(ANALYSIS_FILE),
            summary: dir.join(SUMMARY_FILE),
        }
    }
}

/// Write every analysis artifact into `dir`, creating it if needed.
///
/// Files are fully rendered before anything is written, so a rendering
/// failure leaves the directory untouched.
pub fn write_artifacts(result: &AnalysisResult, dir: &Path) -> Result<ArtifactPaths> {
    let paths = ArtifactPaths::in_dir(dir);

    let normalized = table_to_csv(&result.normalized).context(NORMALIZED_BOM_FILE)?;
    let optimized = table_to_csv(&result.optimized.to_table()).context(OPTIMIZED_BOM_FILE)?;
    let issues = issues_to_json(&result.issues).context(ISSUES_FILE)?;
    let analysis = JsonReporter::new()
        .generate_analysis_report(result)
        .context(ANALYSIS_FILE)?;
    let summary = SummaryReporter::new()
        .no_color()
        .generate_analysis_report(result)
        .context(SUMMARY_FILE)?;

    std::fs::create_dir_all(dir).map_err(|e| BomerError::io(dir, e))?;

    for (path, content) in [
        (&paths.normalized_bom, normalized),
        (&paths.optimized_bom, optimized),
        (&paths.issues, with_newline(issues)),
        (&paths.analysis, with_newline(analysis)),
        (&paths.summary, summary),
    ] {
        std::fs::write(path, content).map_err(|e| BomerError::io(path, e))?;
    }

    tracing::info!("Artifacts written to {}", dir.display());
    Ok(paths)
}

fn with_newline(mut content: String) -> String {
    if !content.ends_with('\n') {
        content.push('\n');
    }
    content
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_target_from_option_none() {
        let target = OutputTarget::from_option(None);
        assert!(matches!(target, OutputTarget::Stdout));
    }

    #[test]
    fn test_output_target_from_option_some() {
        let path = PathBuf::from("/tmp/report.txt");
        let target = OutputTarget::from_option(Some(path.clone()));
        match target {
            OutputTarget::File(p) => assert_eq!(p, path),
            OutputTarget::Stdout => panic!("Expected File variant"),
        }
    }

    #[test]
    fn test_should_use_color_with_flag() {
        assert!(!should_use_color(true, &OutputTarget::Stdout));
    }

    #[test]
    fn test_no_color_for_files() {
        let target = OutputTarget::File(PathBuf::from("/tmp/report.txt"));
        assert!(!should_use_color(false, &target));
    }

    #[test]
    fn test_write_output_to_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("out.txt");
        write_output("hello\n", &OutputTarget::File(path.clone()), true).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "hello\n");
    }

    #[test]
    fn test_artifact_names() {
        let paths = ArtifactPaths::in_dir(Path::new("out"));
        assert_eq!(paths.normalized_bom, PathBuf::from("out/normalized_bom.csv"));
        assert_eq!(paths.summary, PathBuf::from("out/summary.txt"));
    }
}
