//! Entry points: analyze, execute, clean.

use std::path::Path;
use std::time::Instant;
use tracing::info;

use crate::action::Action;
use crate::analyze::analyze_folder;
use crate::config::SweepConfig;
use crate::error::Result;
use crate::execute::{Leftovers, execute_actions};
use crate::fs::{FileSystem, LocalFileSystem};
use crate::report::Report;

/// Runs sweeps with one configuration against one filesystem.
#[derive(Debug, Clone)]
pub struct Sweeper<F = LocalFileSystem> {
    config: SweepConfig,
    fs: F,
}

impl Sweeper<LocalFileSystem> {
    pub fn new(config: SweepConfig) -> Self {
        Self::with_filesystem(config, LocalFileSystem)
    }
}

impl<F: FileSystem> Sweeper<F> {
    pub fn with_filesystem(config: SweepConfig, fs: F) -> Self {
        Self { config, fs }
    }

    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    /// Build the action tree for the entries under `root`. Nothing is modified.
    pub async fn analyze(&self, root: impl AsRef<Path>) -> Result<Vec<Action>> {
        analyze_folder(&self.fs, root.as_ref(), &self.config).await
    }

    /// Carry out an analyzed tree.
    ///
    /// Dispositions are taken as resolved at analysis time. Returns the entries that
    /// could not be removed without failing the run.
    pub async fn execute(&self, tree: &[Action]) -> Result<Leftovers> {
        execute_actions(&self.fs, tree).await
    }

    /// Analyze, execute and report in one go.
    pub async fn clean(&self, root: impl AsRef<Path>) -> Result<Report> {
        let root = root.as_ref();
        let start = Instant::now();

        let tree = self.analyze(root).await?;
        let leftovers = self.execute(&tree).await?;
        let report = Report::build(&tree, leftovers);

        info!(
            root = %root.display(),
            deleted = report.delete.len(),
            retained = report.retain.len(),
            busy = report.busy.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Sweep completed"
        );

        Ok(report)
    }

    /// Report what [`clean`](Self::clean) would do, without touching the filesystem.
    pub async fn plan(&self, root: impl AsRef<Path>) -> Result<Report> {
        let tree = self.analyze(root).await?;
        Ok(Report::planned(&tree))
    }
}

/// Analyze `root` on the local filesystem.
pub async fn analyze(root: impl AsRef<Path>, config: &SweepConfig) -> Result<Vec<Action>> {
    Sweeper::new(config.clone()).analyze(root).await
}

/// Execute an analyzed tree on the local filesystem.
pub async fn execute(tree: &[Action], config: &SweepConfig) -> Result<Leftovers> {
    Sweeper::new(config.clone()).execute(tree).await
}

/// Analyze, execute and report on `root` on the local filesystem.
pub async fn clean(root: impl AsRef<Path>, config: &SweepConfig) -> Result<Report> {
    Sweeper::new(config.clone()).clean(root).await
}

/// Dry-run report for `root` on the local filesystem.
pub async fn plan(root: impl AsRef<Path>, config: &SweepConfig) -> Result<Report> {
    Sweeper::new(config.clone()).plan(root).await
}
