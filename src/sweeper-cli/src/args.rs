//! Command-line arguments.

use chrono::{DateTime, Utc};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use sweeper_engine::SweepConfig;

/// Delete files older than a retention period and report what happened.
#[derive(Debug, Parser)]
#[command(name = "sweeper", version, about)]
pub struct Cli {
    /// Directory to sweep
    pub path: PathBuf,

    /// Delete files at least this many days old (default: 90)
    #[arg(long, short = 'a')]
    pub max_age_days: Option<u32>,

    /// Descend into subdirectories
    #[arg(long, short = 'r')]
    pub recursive: bool,

    /// Also delete directories that are empty or whose whole content is deleted
    #[arg(long)]
    pub delete_empty_dirs: bool,

    /// Measure ages against this instant instead of now (RFC 3339)
    #[arg(long, value_parser = parse_reference)]
    pub reference: Option<DateTime<Utc>>,

    /// Load settings from a TOML file; flags given on the command line win
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Dry run - show what would be deleted without deleting anything
    #[arg(long)]
    pub dry_run: bool,

    /// Output the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Log level for diagnostics on stderr
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Shorthand for --log-level debug
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Cli {
    /// Apply command-line overrides on top of `base`.
    pub fn apply_to(&self, base: SweepConfig) -> SweepConfig {
        SweepConfig {
            max_age_days: self.max_age_days.unwrap_or(base.max_age_days),
            reference: self.reference.unwrap_or(base.reference),
            recursive: self.recursive || base.recursive,
            delete_empty_directories: self.delete_empty_dirs || base.delete_empty_directories,
        }
    }
}

fn parse_reference(s: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("expected an RFC 3339 timestamp: {e}"))
}

/// Log verbosity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Only show errors
    Error,
    /// Show warnings and errors (default)
    #[default]
    Warn,
    /// Show informational messages, warnings, and errors
    Info,
    /// Show debug messages and above
    Debug,
    /// Show all messages including trace-level details
    Trace,
}

impl LogLevel {
    /// Convert to tracing filter string.
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }

    /// Parse from string (case-insensitive).
    pub fn from_str_loose(s: &str) -> Option<LogLevel> {
        match s.to_lowercase().as_str() {
            "error" => Some(LogLevel::Error),
            "warn" | "warning" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }
}
