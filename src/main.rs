//! bomer: BOM cost and supply-chain risk analysis
//!
//! Normalizes a BOM spreadsheet, validates and aggregates it, then prices it
//! against a supplier catalog and scores its sourcing risk.

#![allow(clippy::needless_pass_by_value)]

use anyhow::{Context, Result};
use bomer::{
    cli,
    config::{AnalyzeConfig, AnalyzePaths, BehaviorConfig, OutputConfig, DEFAULT_OUTPUT_DIR},
    pipeline::exit_codes,
    reports::ReportFormat,
};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "bomer")]
#[command(version)]
#[command(about = "Deterministic BOM cost and risk analysis", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Analysis complete
    1  Validation issues found (with --fail-on-issues)
    2  Risk score above --max-risk
    3  Error occurred

EXAMPLES:
    # Analyze a BOM against the default catalog (data/suppliers.json)
    bomer analyze --bom bom.csv

    # CI gate: fail on data problems or high risk
    bomer analyze --bom bom.csv --suppliers suppliers.json --fail-on-issues --max-risk 40

    # Machine-readable output
    bomer analyze --bom bom.csv -o json > analysis.json")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `analyze` subcommand
#[derive(Parser)]
struct AnalyzeArgs {
    /// Path to the BOM CSV file
    #[arg(long)]
    bom: PathBuf,

    /// Path to the supplier catalog JSON (default: suppliers.path from the
    /// config, then data/suppliers.json)
    #[arg(long)]
    suppliers: Option<PathBuf>,

    /// Directory to write artifacts to
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Report printed to stdout
    #[arg(short, long, default_value = "summary")]
    output: ReportFormat,

    /// Exit with code 1 if the validator reports any issue
    #[arg(long)]
    fail_on_issues: bool,

    /// Exit with code 2 if the risk score exceeds this value (0-100)
    #[arg(long, value_name = "SCORE")]
    max_risk: Option<f64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize, validate and optimize a BOM, then compute cost and risk
    Analyze(AnalyzeArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example bomer.yaml in the current directory
    Init,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    match run(cli) {
        Ok(code) => {
            if code != exit_codes::SUCCESS {
                std::process::exit(code);
            }
        }
        Err(err) => {
            eprintln!("Error: {err:#}");
            std::process::exit(exit_codes::ERROR);
        }
    }
}

/// Dispatch to command handlers, returning the exit code.
fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Analyze(args) => {
            let config = AnalyzeConfig {
                paths: AnalyzePaths {
                    bom: args.bom,
                    suppliers: args.suppliers,
                },
                output: OutputConfig {
                    format: args.output,
                    dir: args.output_dir,
                    no_color: cli.no_color,
                },
                behavior: BehaviorConfig {
                    fail_on_issues: args.fail_on_issues,
                    max_risk: args.max_risk,
                    quiet: cli.quiet,
                },
                config_path: cli.config,
            };

            cli::run_analyze(config)
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "bomer", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }

        Commands::ConfigSchema { output } => {
            let schema = bomer::config::generate_json_schema()?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (config, loaded_from) = bomer::config::load_config(cli.config.as_deref())?;
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                let yaml =
                    serde_yaml_ng::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Path => {
                eprintln!("Config file search paths (in order):");
                for dir in bomer::config::config_search_dirs() {
                    eprintln!("  {}", dir.display());
                }
                eprintln!();
                eprintln!("Recognized file names:");
                for name in bomer::config::CONFIG_FILE_NAMES {
                    eprintln!("  {name}");
                }
                eprintln!();
                match bomer::config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join("bomer.yaml");
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                let content = bomer::config::generate_full_example_config();
                std::fs::write(&target, content)
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(exit_codes::SUCCESS)
            }
        },
    }
}
