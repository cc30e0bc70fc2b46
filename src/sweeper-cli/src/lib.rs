//! Sweeper CLI.
//!
//! Thin front end over `sweeper-engine`:
//! - `args` - command-line parsing and config overrides
//! - `output` - text rendering of reports

pub mod args;
pub mod output;

use anyhow::{Context, Result};
use std::path::Path;

use sweeper_engine::{Report, SweepConfig, Sweeper};

pub use args::{Cli, LogLevel};

/// Environment variable overriding `--log-level`.
pub const LOG_LEVEL_ENV: &str = "SWEEPER_LOG_LEVEL";

/// Load the sweep configuration: defaults, then the optional TOML file, then flags.
pub fn load_config(cli: &Cli) -> Result<SweepConfig> {
    let base = match &cli.config {
        Some(path) => read_config_file(path)?,
        None => SweepConfig::default(),
    };
    Ok(cli.apply_to(base))
}

fn read_config_file(path: &Path) -> Result<SweepConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    SweepConfig::from_toml_str(&contents)
        .with_context(|| format!("Failed to parse config file {}", path.display()))
}

/// Effective log level: `--verbose`, then the environment, then `--log-level`.
pub fn resolve_log_level(cli: &Cli) -> LogLevel {
    if cli.verbose {
        return LogLevel::Debug;
    }
    std::env::var(LOG_LEVEL_ENV)
        .ok()
        .and_then(|v| LogLevel::from_str_loose(&v))
        .unwrap_or(cli.log_level)
}

/// Run a sweep and return its report.
pub async fn sweep(cli: &Cli) -> Result<Report> {
    let config = load_config(cli)?;
    tracing::debug!(
        path = %cli.path.display(),
        max_age_days = config.max_age_days,
        reference = %config.reference,
        recursive = config.recursive,
        delete_empty_directories = config.delete_empty_directories,
        dry_run = cli.dry_run,
        "Starting sweep"
    );

    let sweeper = Sweeper::new(config);
    let report = if cli.dry_run {
        sweeper.plan(&cli.path).await
    } else {
        sweeper.clean(&cli.path).await
    };
    report.with_context(|| format!("Failed to sweep {}", cli.path.display()))
}

/// Run the command and print the report to stdout.
pub async fn run(cli: Cli) -> Result<()> {
    let report = sweep(&cli).await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", output::render_report(&cli.path, &report, cli.dry_run));
    }

    Ok(())
}
