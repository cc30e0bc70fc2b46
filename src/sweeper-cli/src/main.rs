//! Sweeper CLI - main entry point.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use sweeper_cli::{Cli, resolve_log_level};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Diagnostics go to stderr so `--json` output on stdout stays parseable.
    // `RUST_LOG` wins when set; otherwise the CLI level applies to our crates only.
    let log_level = resolve_log_level(&cli);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,sweeper_cli={level},sweeper_engine={level}",
            level = log_level.as_filter_str()
        ))
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    sweeper_cli::run(cli).await
}
