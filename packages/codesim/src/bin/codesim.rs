//! codesim CLI
//!
//! # Usage
//!
//! ```bash
//! codesim a.cpp b.cpp
//! codesim --language python --format json a.py b.py
//! codesim --config codesim.yaml a.cpp b.cpp
//! ```
//!
//! Text mode prints only the score on stdout. Diagnostics go to stderr.
//! Exit codes: 0 on success, 1 on a failed comparison, 2 on a usage error.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use codesim::{compare_inputs, CodesimConfig, CodesimError, LanguageId, RatioKind};
use tracing_subscriber::{fmt, EnvFilter};

const LOG_ENV: &str = "CODESIM_LOG";

#[derive(Parser)]
#[command(name = "codesim")]
#[command(version)]
#[command(about = "Structural similarity of two source files, scored 0-100", long_about = None)]
struct Cli {
    /// The two files to compare
    #[arg(value_name = "FILE")]
    inputs: Vec<PathBuf>,

    /// Grammar to parse both files with (default: from the first file's extension, else cpp)
    #[arg(short, long)]
    language: Option<LanguageId>,

    /// YAML configuration file (schema v1)
    #[arg(short, long, value_name = "YAML")]
    config: Option<PathBuf>,

    /// Sequence ratio: matching_blocks or quick
    #[arg(long)]
    ratio: Option<RatioKind>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// YAML (or defaults) → environment → command-line flags
fn resolve_config(cli: &Cli) -> codesim::Result<CodesimConfig> {
    let mut config = match &cli.config {
        Some(path) => CodesimConfig::from_yaml(&path.to_string_lossy())?,
        None => CodesimConfig::default(),
    }
    .apply_env()?;

    if let Some(language) = cli.language {
        config = config.language(language);
    } else if let Some(first) = cli.inputs.first() {
        config = config.infer_language(first);
    }
    if let Some(ratio) = cli.ratio {
        config = config.ratio(ratio);
    }
    Ok(config)
}

fn run(cli: &Cli) -> codesim::Result<()> {
    if cli.inputs.len() != 2 {
        return Err(CodesimError::Usage {
            expected: 2,
            found: cli.inputs.len(),
        });
    }

    let config = resolve_config(cli)?;
    let report = compare_inputs(&cli.inputs, &config)?;

    match cli.format {
        OutputFormat::Text => println!("{}", report.score_text()),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("codesim: {}", e);
            if e.is_usage() {
                eprintln!("Usage: codesim <FIRST> <SECOND>");
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}
