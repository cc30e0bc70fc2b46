//! Execution of an action tree against the filesystem.

use futures::FutureExt;
use futures::future::{BoxFuture, try_join_all};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::action::{Action, DirDisposition, FileDisposition};
use crate::error::Result;
use crate::fs::{FileSystem, FsErrorKind};

/// Entries an execution run planned to delete but had to leave in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Leftovers {
    /// BUSY entries for files that were in use by another process.
    pub busy: Vec<Action>,
    /// Directories that still had entries when their removal was attempted.
    pub not_empty: Vec<PathBuf>,
}

impl Leftovers {
    /// True when every planned deletion went through.
    pub fn is_empty(&self) -> bool {
        self.busy.is_empty() && self.not_empty.is_empty()
    }

    fn busy(path: &Path) -> Self {
        Self {
            busy: vec![Action::busy(path)],
            not_empty: Vec::new(),
        }
    }

    fn not_empty(path: &Path) -> Self {
        Self {
            busy: Vec::new(),
            not_empty: vec![path.to_path_buf()],
        }
    }

    fn merge(mut self, other: Leftovers) -> Self {
        self.busy.extend(other.busy);
        self.not_empty.extend(other.not_empty);
        self
    }
}

/// Execute `actions` depth-first.
///
/// Siblings run concurrently; a directory is only removed after all of its children have
/// finished, and only if none of them left anything behind.
pub(crate) fn execute_actions<'a, F>(
    fs: &'a F,
    actions: &'a [Action],
) -> BoxFuture<'a, Result<Leftovers>>
where
    F: FileSystem + ?Sized,
{
    async move {
        let results = try_join_all(actions.iter().map(|action| execute_action(fs, action))).await?;
        Ok(results
            .into_iter()
            .fold(Leftovers::default(), Leftovers::merge))
    }
    .boxed()
}

async fn execute_action<F>(fs: &F, action: &Action) -> Result<Leftovers>
where
    F: FileSystem + ?Sized,
{
    match action {
        Action::File {
            path,
            disposition: FileDisposition::Delete,
        } => remove_file(fs, path).await,
        Action::File {
            disposition: FileDisposition::Retain | FileDisposition::Busy,
            ..
        } => Ok(Leftovers::default()),
        Action::Directory {
            path,
            disposition,
            children,
        } => {
            let leftovers = execute_actions(fs, children).await?;
            match disposition {
                DirDisposition::Retain => Ok(leftovers),
                DirDisposition::Delete if !leftovers.is_empty() => {
                    debug!(
                        path = %path.display(),
                        busy = leftovers.busy.len(),
                        "Keeping directory with entries left behind"
                    );
                    Ok(leftovers)
                }
                DirDisposition::Delete => remove_dir(fs, path).await,
            }
        }
    }
}

async fn remove_file<F>(fs: &F, path: &Path) -> Result<Leftovers>
where
    F: FileSystem + ?Sized,
{
    match fs.remove_file(path).await {
        Ok(()) => {
            debug!(path = %path.display(), "Deleted file");
            Ok(Leftovers::default())
        }
        Err(e) if e.kind == FsErrorKind::InUse => {
            warn!(path = %path.display(), error = %e.source, "File is in use, leaving it in place");
            Ok(Leftovers::busy(path))
        }
        Err(e) => Err(e.into()),
    }
}

async fn remove_dir<F>(fs: &F, path: &Path) -> Result<Leftovers>
where
    F: FileSystem + ?Sized,
{
    match fs.remove_dir(path).await {
        Ok(()) => {
            debug!(path = %path.display(), "Deleted directory");
            Ok(Leftovers::default())
        }
        Err(e) if e.kind == FsErrorKind::NotEmpty => {
            warn!(
                path = %path.display(),
                "Directory gained entries after analysis, leaving it in place"
            );
            Ok(Leftovers::not_empty(path))
        }
        Err(e) => Err(e.into()),
    }
}
