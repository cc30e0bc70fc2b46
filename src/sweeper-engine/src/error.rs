//! Error types for sweep operations.

use std::fmt;
use std::path::PathBuf;

use crate::fs::{FsError, FsErrorKind};

/// Result type alias for sweep operations.
pub type Result<T> = std::result::Result<T, SweepError>;

/// Filesystem operation an error occurred in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsOp {
    ReadDir,
    Metadata,
    RemoveFile,
    RemoveDir,
}

impl fmt::Display for FsOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FsOp::ReadDir => "list directory",
            FsOp::Metadata => "read metadata of",
            FsOp::RemoveFile => "remove file",
            FsOp::RemoveDir => "remove directory",
        })
    }
}

/// Errors that abort an analysis or execution.
#[derive(Debug, thiserror::Error)]
pub enum SweepError {
    /// The entry vanished between being listed and being inspected or removed.
    #[error("Failed to {op} '{}': entry not found", path.display())]
    NotFound {
        op: FsOp,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The entry exists but the process is not allowed to touch it.
    #[error("Failed to {op} '{}': access denied", path.display())]
    AccessDenied {
        op: FsOp,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Any other I/O failure.
    #[error("Failed to {op} '{}': {source}", path.display())]
    Io {
        op: FsOp,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration could not be parsed or is out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl SweepError {
    /// Path of the entry the error refers to, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            SweepError::NotFound { path, .. }
            | SweepError::AccessDenied { path, .. }
            | SweepError::Io { path, .. } => Some(path),
            SweepError::InvalidConfig(_) => None,
        }
    }
}

impl From<FsError> for SweepError {
    fn from(err: FsError) -> Self {
        let FsError {
            op,
            path,
            kind,
            source,
        } = err;
        match kind {
            FsErrorKind::NotFound => SweepError::NotFound { op, path, source },
            FsErrorKind::AccessDenied => SweepError::AccessDenied { op, path, source },
            FsErrorKind::InUse | FsErrorKind::NotEmpty | FsErrorKind::Other => {
                SweepError::Io { op, path, source }
            }
        }
    }
}
