//! Pipeline integration tests.
//!
//! These tests exercise the full load → normalize → validate → optimize →
//! cost/risk → artifacts pipeline with real fixture files.

use bomer::config::{load_config, BomerConfig};
use bomer::engines::optimize_bom;
use bomer::error::{BomerError, LoadErrorKind, SchemaError};
use bomer::model::{Table, CANONICAL_COLUMNS};
use bomer::pipeline::{
    analyze_tables, run_analysis, write_artifacts, ArtifactPaths, ANALYSIS_FILE, ISSUES_FILE,
    NORMALIZED_BOM_FILE, OPTIMIZED_BOM_FILE, SUMMARY_FILE,
};
use bomer::schema::IssueKind;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ============================================================================
// Test Fixtures
// ============================================================================

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture_path(name: &str) -> PathBuf {
    Path::new(FIXTURES_DIR).join(name)
}

fn analyze_sample(config: &BomerConfig) -> bomer::AnalysisResult {
    run_analysis(
        &fixture_path("sample_bom.csv"),
        Some(fixture_path("suppliers.json").as_path()),
        config,
    )
    .expect("sample analysis should succeed")
}

// ============================================================================
// Analysis
// ============================================================================

mod analysis {
    use super::*;

    #[test]
    fn sample_bom_is_normalized_and_clean() {
        let result = analyze_sample(&BomerConfig::default());

        assert_eq!(&result.normalized.columns()[..6], &CANONICAL_COLUMNS.map(String::from));
        assert_eq!(result.normalized.row_count(), 4);
        assert!(!result.has_issues(), "{:?}", result.issues);
    }

    #[test]
    fn duplicates_are_merged_and_sorted() {
        let result = analyze_sample(&BomerConfig::default());
        let parts: Vec<(&str, f64, usize)> = result
            .optimized
            .lines
            .iter()
            .map(|l| (l.part_number.as_str(), l.quantity, l.source_rows))
            .collect();

        assert_eq!(parts, vec![("P1", 10.0, 2), ("P2", 5.0, 1), ("P3", 2.0, 1)]);
        assert_eq!(result.optimized.lines[2].lifecycle_status.as_deref(), Some("Obsolete"));
    }

    #[test]
    fn cost_uses_cheapest_supplier() {
        let result = analyze_sample(&BomerConfig::default());

        // 10 x 0.4 + 5 x 1.0
        assert_eq!(result.cost.total_cost, 9.0);
        assert_eq!(result.cost.currency, "USD");
        assert_eq!(result.cost.missing_prices, vec!["P3".to_string()]);
        assert_eq!(result.cost.priced_count(), 2);
        assert!(result.cost.volume_cost.is_none());
    }

    #[test]
    fn risk_score_from_default_weights() {
        let result = analyze_sample(&BomerConfig::default());
        let risk = &result.risk;

        // One part in three is single-sourced, unpriced and obsolete each.
        assert_eq!(risk.risk_score, 33.33);
        assert!((risk.single_source_ratio - 1.0 / 3.0).abs() < 1e-12);
        assert!((risk.missing_price_ratio - 1.0 / 3.0).abs() < 1e-12);
        assert!((risk.obsolete_ratio - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(risk.flagged().count(), 2);
    }

    #[test]
    fn config_file_overrides_currency_weights_and_volume() {
        let (config, loaded_from) =
            load_config(Some(fixture_path("bomer.yaml").as_path())).expect("fixture config is valid");
        assert!(loaded_from.is_some());

        let result = analyze_sample(&config);
        assert_eq!(result.cost.currency, "EUR");
        assert_eq!(result.cost.build_volume, Some(100.0));
        assert_eq!(result.cost.volume_cost, Some(900.0));
        // 100 * (0.6 / 3 + 0.3 / 3)
        assert_eq!(result.risk.risk_score, 30.0);
    }

    #[test]
    fn configured_alias_is_applied() {
        let (config, _) = load_config(Some(fixture_path("bomer.yaml").as_path())).expect("valid config");
        let raw = bomer::parsers::parse_bom_str("Stock Code,Qty\nP2,3\n").expect("valid csv");
        let catalog =
            bomer::parsers::parse_suppliers_str(r#"{"suppliers":[{"name":"A","prices":{"P2":2}}]}"#)
                .expect("valid json");

        let result = analyze_tables(&raw, &catalog, &config).expect("analysis succeeds");
        assert_eq!(result.normalized.cell(0, "PartNumber"), Some("P2"));
        assert_eq!(result.cost.total_cost, 6.0);
    }

    #[test]
    fn issues_do_not_abort_the_run() {
        let result = run_analysis(
            &fixture_path("bom_with_issues.csv"),
            Some(fixture_path("suppliers.json").as_path()),
            &BomerConfig::default(),
        )
        .expect("analysis should succeed despite bad rows");

        let found: Vec<(Option<usize>, IssueKind)> =
            result.issues.iter().map(|i| (i.row_index, i.kind)).collect();
        assert_eq!(
            found,
            vec![
                (Some(0), IssueKind::InvalidQuantity),
                (Some(1), IssueKind::EmptyPartNumber),
                (Some(2), IssueKind::NonPositiveQuantity),
            ]
        );

        // Blank part numbers are dropped; bad quantities count as zero.
        let parts: Vec<(&str, f64)> = result
            .optimized
            .lines
            .iter()
            .map(|l| (l.part_number.as_str(), l.quantity))
            .collect();
        assert_eq!(parts, vec![("P1", 0.0), ("P2", 1.0)]);
        assert_eq!(result.cost.total_cost, 1.0);
    }

    #[test]
    fn header_only_table_analyzes_to_zero() {
        let raw = Table::new(vec!["MPN".into(), "Qty".into()]);
        let result = analyze_tables(&raw, &Default::default(), &BomerConfig::default())
            .expect("empty table is analyzable");

        assert_eq!(result.part_count(), 0);
        assert_eq!(result.cost.total_cost, 0.0);
        assert_eq!(result.risk.risk_score, 0.0);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn optimizer_rejects_unnormalized_table() {
        let raw = Table::new(vec!["Description".into()]);
        let err = optimize_bom(&raw).expect_err("optimizer needs PartNumber and Quantity");
        match err {
            SchemaError::MissingColumns { missing, .. } => {
                assert_eq!(missing, vec!["PartNumber".to_string(), "Quantity".to_string()]);
            }
            other => panic!("Expected MissingColumns, got {other:?}"),
        }
    }

    #[test]
    fn table_without_required_columns_is_filled_by_normalization() {
        let raw = Table::from_rows(
            vec!["Description".into()],
            vec![vec![Some("10k resistor".into())]],
        );
        let result = analyze_tables(&raw, &Default::default(), &BomerConfig::default())
            .expect("normalization adds the required columns");

        assert_eq!(result.part_count(), 0);
        assert_eq!(result.risk.risk_score, 0.0);
        assert_eq!(result.cost.total_cost, 0.0);
        // The null part number and quantity are still reported.
        let kinds: Vec<IssueKind> = result.issues.iter().map(|i| i.kind).collect();
        assert_eq!(kinds, vec![IssueKind::EmptyPartNumber, IssueKind::InvalidQuantity]);
    }

    #[test]
    fn header_only_description_table_analyzes_to_zero() {
        let raw = Table::new(vec!["Description".into()]);
        let result = analyze_tables(&raw, &Default::default(), &BomerConfig::default())
            .expect("empty table is analyzable");

        assert_eq!(result.part_count(), 0);
        assert_eq!(result.risk.risk_score, 0.0);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn repeated_runs_are_identical() {
        let config = BomerConfig::default();
        assert_eq!(analyze_sample(&config), analyze_sample(&config));
    }
}

// ============================================================================
// Load Errors
// ============================================================================

mod load_errors {
    use super::*;

    #[test]
    fn missing_bom_file() {
        let err = run_analysis(
            &fixture_path("does_not_exist.csv"),
            Some(fixture_path("suppliers.json").as_path()),
            &BomerConfig::default(),
        )
        .expect_err("missing file must fail");

        assert!(err.is_load_error());
        assert!(matches!(
            err,
            BomerError::BomLoad {
                source: LoadErrorKind::NotFound,
                ..
            }
        ));
    }

    #[test]
    fn header_only_bom_file_is_empty() {
        let err = run_analysis(
            &fixture_path("header_only.csv"),
            Some(fixture_path("suppliers.json").as_path()),
            &BomerConfig::default(),
        )
        .expect_err("no data rows");
        assert!(matches!(
            err,
            BomerError::BomLoad {
                source: LoadErrorKind::Empty,
                ..
            }
        ));
    }

    #[test]
    fn wrong_extension_is_rejected() {
        let err = run_analysis(
            &fixture_path("suppliers.json"),
            Some(fixture_path("suppliers.json").as_path()),
            &BomerConfig::default(),
        )
        .expect_err("json is not a BOM");
        assert!(matches!(
            err,
            BomerError::BomLoad {
                source: LoadErrorKind::UnsupportedExtension { .. },
                ..
            }
        ));
    }

    #[test]
    fn missing_supplier_catalog() {
        let err = run_analysis(
            &fixture_path("sample_bom.csv"),
            Some(fixture_path("missing_suppliers.json").as_path()),
            &BomerConfig::default(),
        )
        .expect_err("missing catalog must fail");
        assert!(matches!(
            err,
            BomerError::SupplierLoad {
                source: LoadErrorKind::NotFound,
                ..
            }
        ));
    }

    #[test]
    fn malformed_supplier_catalog() {
        let tmp = TempDir::new().expect("temp dir");
        let path = tmp.path().join("suppliers.json");
        std::fs::write(&path, "{ not json").expect("write fixture");

        let err = run_analysis(&fixture_path("sample_bom.csv"), Some(path.as_path()), &BomerConfig::default())
            .expect_err("malformed catalog must fail");
        assert!(matches!(
            err,
            BomerError::SupplierLoad {
                source: LoadErrorKind::InvalidJson(_),
                ..
            }
        ));
    }
}

// ============================================================================
// Artifacts
// ============================================================================

mod artifacts {
    use super::*;

    fn read(path: &Path) -> String {
        std::fs::read_to_string(path).expect("artifact should exist")
    }

    #[test]
    fn writes_all_five_artifacts() {
        let tmp = TempDir::new().expect("temp dir");
        let out = tmp.path().join("nested").join("output");
        let result = analyze_sample(&BomerConfig::default());

        let paths = write_artifacts(&result, &out).expect("artifacts written");
        assert_eq!(paths, ArtifactPaths::in_dir(&out));

        for name in [
            NORMALIZED_BOM_FILE,
            OPTIMIZED_BOM_FILE,
            ISSUES_FILE,
            ANALYSIS_FILE,
            SUMMARY_FILE,
        ] {
            assert!(out.join(name).is_file(), "missing {name}");
        }

        let normalized = read(&paths.normalized_bom);
        assert!(normalized
            .starts_with("PartNumber,Quantity,Manufacturer,Description,LifecycleStatus,RoHS\n"));
        assert_eq!(normalized.lines().count(), 5);

        let optimized = read(&paths.optimized_bom);
        assert_eq!(optimized.lines().count(), 4);
        assert!(optimized.lines().nth(1).is_some_and(|l| l.starts_with("P1,10,")));

        assert_eq!(read(&paths.issues).trim(), "[]");

        let analysis: serde_json::Value =
            serde_json::from_str(&read(&paths.analysis)).expect("analysis.json is JSON");
        assert_eq!(analysis["cost"]["total_cost"], 9.0);
        assert_eq!(analysis["cost"]["missing_prices"][0], "P3");
        assert_eq!(analysis["risk"]["risk_score"], 33.33);
        assert_eq!(analysis["metadata"]["part_count"], 3);

        let summary = read(&paths.summary);
        assert!(summary.contains("Total cost: 9 USD"), "{summary}");
        assert!(!summary.contains('\u{1b}'), "summary.txt must not carry ANSI codes");
    }

    #[test]
    fn artifacts_are_byte_identical_across_runs() {
        let first = TempDir::new().expect("temp dir");
        let second = TempDir::new().expect("temp dir");
        let config = BomerConfig::default();

        let a = write_artifacts(&analyze_sample(&config), first.path()).expect("first run");
        let b = write_artifacts(&analyze_sample(&config), second.path()).expect("second run");

        for (left, right) in [
            (&a.normalized_bom, &b.normalized_bom),
            (&a.optimized_bom, &b.optimized_bom),
            (&a.issues, &b.issues),
            (&a.analysis, &b.analysis),
            (&a.summary, &b.summary),
        ] {
            assert_eq!(
                std::fs::read(left).expect("read"),
                std::fs::read(right).expect("read"),
                "{} differs between runs",
                left.display()
            );
        }
    }

    #[test]
    fn issues_artifact_lists_findings() {
        let tmp = TempDir::new().expect("temp dir");
        let result = run_analysis(
            &fixture_path("bom_with_issues.csv"),
            Some(fixture_path("suppliers.json").as_path()),
            &BomerConfig::default(),
        )
        .expect("analysis succeeds");

        let paths = write_artifacts(&result, tmp.path()).expect("artifacts written");
        let issues: serde_json::Value =
            serde_json::from_str(&read(&paths.issues)).expect("issues.json is JSON");

        let kinds: Vec<&str> = issues
            .as_array()
            .expect("array")
            .iter()
            .filter_map(|i| i["kind"].as_str())
            .collect();
        assert_eq!(
            kinds,
            vec!["invalid_quantity", "empty_part_number", "non_positive_quantity"]
        );
    }
}

// ============================================================================
// CLI Handler
// ============================================================================

mod cli_handler {
    use super::*;
    use bomer::cli::{run_analyze, AnalyzeConfig};
    use bomer::config::{AnalyzePaths, BehaviorConfig, OutputConfig};
    use bomer::pipeline::exit_codes;
    use bomer::reports::ReportFormat;

    fn analyze_config(out: &Path, behavior: BehaviorConfig) -> AnalyzeConfig {
        AnalyzeConfig {
            paths: AnalyzePaths {
                bom: fixture_path("sample_bom.csv"),
                suppliers: Some(fixture_path("suppliers.json")),
            },
            output: OutputConfig {
                format: ReportFormat::Json,
                dir: out.to_path_buf(),
                no_color: true,
            },
            behavior,
            config_path: Some(fixture_path("bomer.yaml")),
        }
    }

    #[test]
    fn analyze_writes_artifacts_and_succeeds() {
        let tmp = TempDir::new().expect("temp dir");
        let code = run_analyze(analyze_config(tmp.path(), BehaviorConfig::default()))
            .expect("analyze succeeds");

        assert_eq!(code, exit_codes::SUCCESS);
        assert!(tmp.path().join(ANALYSIS_FILE).is_file());
    }

    #[test]
    fn analyze_reports_risk_threshold() {
        let tmp = TempDir::new().expect("temp dir");
        let behavior = BehaviorConfig {
            max_risk: Some(10.0),
            ..Default::default()
        };
        let code = run_analyze(analyze_config(tmp.path(), behavior)).expect("analyze succeeds");

        assert_eq!(code, exit_codes::RISK_EXCEEDED);
        // Artifacts are still written when a threshold trips.
        assert!(tmp.path().join(SUMMARY_FILE).is_file());
    }

    #[test]
    fn analyze_rejects_out_of_range_threshold() {
        let tmp = TempDir::new().expect("temp dir");
        let behavior = BehaviorConfig {
            max_risk: Some(150.0),
            ..Default::default()
        };
        assert!(run_analyze(analyze_config(tmp.path(), behavior)).is_err());
    }
}
