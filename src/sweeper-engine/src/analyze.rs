//! Folder analysis: builds the action tree for one directory level, recursing on demand.

use futures::FutureExt;
use futures::future::{BoxFuture, try_join_all};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::action::{Action, DirDisposition};
use crate::classify::{Classification, classify};
use crate::config::SweepConfig;
use crate::error::Result;
use crate::fs::FileSystem;
use crate::resolve::resolve;

/// Analyze the immediate entries of `path`, in listing order.
///
/// Entries are classified concurrently. With `recursive` set, each subdirectory is analyzed
/// depth-first and its disposition resolved only after all of its children are known.
/// Any listing or metadata failure aborts the whole subtree.
pub(crate) fn analyze_folder<'a, F>(
    fs: &'a F,
    path: &'a Path,
    config: &'a SweepConfig,
) -> BoxFuture<'a, Result<Vec<Action>>>
where
    F: FileSystem + ?Sized,
{
    async move {
        let entries = fs.read_dir(path).await?;
        debug!(path = %path.display(), entries = entries.len(), "Analyzing directory");

        try_join_all(
            entries
                .into_iter()
                .map(|entry| analyze_entry(fs, entry, config)),
        )
        .await
    }
    .boxed()
}

async fn analyze_entry<F>(fs: &F, path: PathBuf, config: &SweepConfig) -> Result<Action>
where
    F: FileSystem + ?Sized,
{
    match classify(fs, &path, config).await? {
        Classification::File(disposition) => Ok(Action::file(path, disposition)),
        Classification::Directory if !config.recursive => {
            Ok(Action::directory(path, DirDisposition::Retain, Vec::new()))
        }
        Classification::Directory => {
            let children = analyze_folder(fs, &path, config).await?;
            let disposition = resolve(&children, config.delete_empty_directories);
            Ok(Action::directory(path, disposition, children))
        }
    }
}
