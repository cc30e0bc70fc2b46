//! Filesystem provider used by the analyzer and executor.
//!
//! The engine only talks to the disk through [`FileSystem`]. [`LocalFileSystem`] is the
//! production implementation on top of `tokio::fs`; tests wrap it to inject failures such as
//! files held open by another process.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::io;
use std::path::{Path, PathBuf};

use crate::action::EntryKind;
use crate::error::FsOp;

/// Outcome classes the engine reacts to differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsErrorKind {
    NotFound,
    AccessDenied,
    /// Locked or held open by another process.
    InUse,
    /// Directory removal attempted on a directory that still has entries.
    NotEmpty,
    Other,
}

impl FsErrorKind {
    /// Classify an I/O error, by `ErrorKind` first and raw OS code second.
    pub fn classify(err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => return FsErrorKind::NotFound,
            io::ErrorKind::PermissionDenied => return FsErrorKind::AccessDenied,
            io::ErrorKind::ResourceBusy | io::ErrorKind::ExecutableFileBusy => {
                return FsErrorKind::InUse;
            }
            io::ErrorKind::DirectoryNotEmpty => return FsErrorKind::NotEmpty,
            _ => {}
        }

        match err.raw_os_error() {
            Some(code) if is_in_use_code(code) => FsErrorKind::InUse,
            Some(code) if is_not_empty_code(code) => FsErrorKind::NotEmpty,
            _ => FsErrorKind::Other,
        }
    }
}

#[cfg(unix)]
fn is_in_use_code(code: i32) -> bool {
    code == libc::EBUSY || code == libc::ETXTBSY
}

// ERROR_SHARING_VIOLATION (32) or ERROR_LOCK_VIOLATION (33)
#[cfg(windows)]
fn is_in_use_code(code: i32) -> bool {
    code == 32 || code == 33
}

#[cfg(not(any(unix, windows)))]
fn is_in_use_code(_code: i32) -> bool {
    false
}

#[cfg(unix)]
fn is_not_empty_code(code: i32) -> bool {
    code == libc::ENOTEMPTY || code == libc::EEXIST
}

// ERROR_DIR_NOT_EMPTY
#[cfg(windows)]
fn is_not_empty_code(code: i32) -> bool {
    code == 145
}

#[cfg(not(any(unix, windows)))]
fn is_not_empty_code(_code: i32) -> bool {
    false
}

/// A failed filesystem operation.
#[derive(Debug, thiserror::Error)]
#[error("Failed to {op} '{}': {source}", path.display())]
pub struct FsError {
    pub op: FsOp,
    pub path: PathBuf,
    pub kind: FsErrorKind,
    #[source]
    pub source: io::Error,
}

impl FsError {
    /// Wraps an I/O error, classifying it.
    pub fn from_io(op: FsOp, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self {
            op,
            path: path.into(),
            kind: FsErrorKind::classify(&source),
            source,
        }
    }
}

/// What the classifier needs to know about an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryMetadata {
    pub kind: EntryKind,
    pub modified: DateTime<Utc>,
}

/// Filesystem operations the engine depends on.
#[async_trait]
pub trait FileSystem: Send + Sync {
    /// Absolute paths of the immediate entries of `path`.
    async fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>, FsError>;

    /// Entry type and modification time of `path`. Symlinks are not followed.
    async fn metadata(&self, path: &Path) -> Result<EntryMetadata, FsError>;

    async fn remove_file(&self, path: &Path) -> Result<(), FsError>;

    /// Removes an empty directory. Fails with [`FsErrorKind::NotEmpty`] otherwise.
    async fn remove_dir(&self, path: &Path) -> Result<(), FsError>;
}

/// [`FileSystem`] backed by the local disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

#[async_trait]
impl FileSystem for LocalFileSystem {
    async fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>, FsError> {
        let wrap = |e| FsError::from_io(FsOp::ReadDir, path, e);

        let mut entries = tokio::fs::read_dir(path).await.map_err(wrap)?;
        let mut paths = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(wrap)? {
            paths.push(entry.path());
        }

        // Listing order is platform dependent; sort so reports are stable.
        paths.sort();
        Ok(paths)
    }

    async fn metadata(&self, path: &Path) -> Result<EntryMetadata, FsError> {
        let wrap = |e| FsError::from_io(FsOp::Metadata, path, e);

        let metadata = tokio::fs::symlink_metadata(path).await.map_err(wrap)?;
        let modified = metadata.modified().map_err(wrap)?;
        let kind = if metadata.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        };

        Ok(EntryMetadata {
            kind,
            modified: modified.into(),
        })
    }

    async fn remove_file(&self, path: &Path) -> Result<(), FsError> {
        tokio::fs::remove_file(path)
            .await
            .map_err(|e| FsError::from_io(FsOp::RemoveFile, path, e))
    }

    async fn remove_dir(&self, path: &Path) -> Result<(), FsError> {
        tokio::fs::remove_dir(path)
            .await
            .map_err(|e| FsError::from_io(FsOp::RemoveDir, path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_classify_by_kind() {
        let classify = |kind| FsErrorKind::classify(&io::Error::from(kind));
        assert_eq!(classify(io::ErrorKind::NotFound), FsErrorKind::NotFound);
        assert_eq!(
            classify(io::ErrorKind::PermissionDenied),
            FsErrorKind::AccessDenied
        );
        assert_eq!(classify(io::ErrorKind::ResourceBusy), FsErrorKind::InUse);
        assert_eq!(
            classify(io::ErrorKind::DirectoryNotEmpty),
            FsErrorKind::NotEmpty
        );
        assert_eq!(classify(io::ErrorKind::Interrupted), FsErrorKind::Other);
    }

    #[cfg(unix)]
    #[test]
    fn test_classify_by_os_code() {
        let err = io::Error::from_raw_os_error(libc::EBUSY);
        assert_eq!(FsErrorKind::classify(&err), FsErrorKind::InUse);

        let err = io::Error::from_raw_os_error(libc::ENOTEMPTY);
        assert_eq!(FsErrorKind::classify(&err), FsErrorKind::NotEmpty);
    }

    #[tokio::test]
    async fn test_read_dir_sorted() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("b.txt"), "b").unwrap();
        fs::write(temp.path().join("a.txt"), "a").unwrap();
        fs::create_dir(temp.path().join("c")).unwrap();

        let entries = LocalFileSystem.read_dir(temp.path()).await.unwrap();
        assert_eq!(
            entries,
            vec![
                temp.path().join("a.txt"),
                temp.path().join("b.txt"),
                temp.path().join("c"),
            ]
        );
    }

    #[tokio::test]
    async fn test_metadata_kind() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("f"), "x").unwrap();
        fs::create_dir(temp.path().join("d")).unwrap();

        let file = LocalFileSystem.metadata(&temp.path().join("f")).await.unwrap();
        assert_eq!(file.kind, EntryKind::File);
        let dir = LocalFileSystem.metadata(&temp.path().join("d")).await.unwrap();
        assert_eq!(dir.kind, EntryKind::Directory);
    }

    #[tokio::test]
    async fn test_missing_entry_is_not_found() {
        let temp = TempDir::new().unwrap();
        let err = LocalFileSystem
            .metadata(&temp.path().join("missing"))
            .await
            .unwrap_err();
        assert_eq!(err.kind, FsErrorKind::NotFound);
        assert_eq!(err.op, FsOp::Metadata);
    }

    #[tokio::test]
    async fn test_remove_dir_not_empty() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("d");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("f"), "x").unwrap();

        let err = LocalFileSystem.remove_dir(&dir).await.unwrap_err();
        assert_eq!(err.kind, FsErrorKind::NotEmpty);
        assert!(dir.exists());
    }
}
