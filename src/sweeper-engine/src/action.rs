//! The action tree: what a sweep plans to do (or did) with each entry.

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Filesystem entry type of an [`Action`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    File,
    Directory,
}

/// Fate of a file entry.
///
/// `Busy` is never produced by analysis, only by execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileDisposition {
    Delete,
    Retain,
    Busy,
}

/// Fate of a directory entry, resolved from its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DirDisposition {
    Delete,
    Retain,
}

/// Disposition independent of entry kind, used for grouping reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Disposition {
    Delete,
    Retain,
    Busy,
}

impl Disposition {
    /// Bucket name used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Disposition::Delete => "delete",
            Disposition::Retain => "retain",
            Disposition::Busy => "busy",
        }
    }
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<FileDisposition> for Disposition {
    fn from(value: FileDisposition) -> Self {
        match value {
            FileDisposition::Delete => Disposition::Delete,
            FileDisposition::Retain => Disposition::Retain,
            FileDisposition::Busy => Disposition::Busy,
        }
    }
}

impl From<DirDisposition> for Disposition {
    fn from(value: DirDisposition) -> Self {
        match value {
            DirDisposition::Delete => Disposition::Delete,
            DirDisposition::Retain => Disposition::Retain,
        }
    }
}

/// One node of the action tree.
///
/// Files never carry children and directories can never be busy; both rules are
/// enforced by the shape of the enum rather than checked at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Action {
    File {
        path: PathBuf,
        disposition: FileDisposition,
    },
    Directory {
        path: PathBuf,
        disposition: DirDisposition,
        children: Vec<Action>,
    },
}

impl Action {
    pub fn file(path: impl Into<PathBuf>, disposition: FileDisposition) -> Self {
        Action::File {
            path: path.into(),
            disposition,
        }
    }

    pub fn directory(
        path: impl Into<PathBuf>,
        disposition: DirDisposition,
        children: Vec<Action>,
    ) -> Self {
        Action::Directory {
            path: path.into(),
            disposition,
            children,
        }
    }

    /// BUSY entry for a file that could not be removed because it is in use.
    pub fn busy(path: impl Into<PathBuf>) -> Self {
        Self::file(path, FileDisposition::Busy)
    }

    pub fn kind(&self) -> EntryKind {
        match self {
            Action::File { .. } => EntryKind::File,
            Action::Directory { .. } => EntryKind::Directory,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Action::File { path, .. } | Action::Directory { path, .. } => path.as_path(),
        }
    }

    pub fn disposition(&self) -> Disposition {
        match self {
            Action::File { disposition, .. } => (*disposition).into(),
            Action::Directory { disposition, .. } => (*disposition).into(),
        }
    }

    /// Children of a directory; always empty for files.
    pub fn children(&self) -> &[Action] {
        match self {
            Action::File { .. } => &[],
            Action::Directory { children, .. } => children,
        }
    }

    pub fn is_delete(&self) -> bool {
        self.disposition() == Disposition::Delete
    }

    /// Copy of this node with its children dropped.
    pub fn without_children(&self) -> Self {
        match self {
            Action::File { .. } => self.clone(),
            Action::Directory {
                path, disposition, ..
            } => Action::directory(path.clone(), *disposition, Vec::new()),
        }
    }

    /// Number of filesystem entries in this subtree, this node included.
    pub fn entry_count(&self) -> usize {
        1 + self.children().iter().map(Action::entry_count).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let file = Action::file("/tmp/a.log", FileDisposition::Delete);
        assert_eq!(file.kind(), EntryKind::File);
        assert_eq!(file.disposition(), Disposition::Delete);
        assert!(file.children().is_empty());

        let dir = Action::directory("/tmp/d", DirDisposition::Retain, vec![file.clone()]);
        assert_eq!(dir.kind(), EntryKind::Directory);
        assert_eq!(dir.disposition(), Disposition::Retain);
        assert_eq!(dir.children(), &[file]);
        assert_eq!(dir.entry_count(), 2);
    }

    #[test]
    fn test_without_children() {
        let dir = Action::directory(
            "/tmp/d",
            DirDisposition::Delete,
            vec![Action::file("/tmp/d/x", FileDisposition::Delete)],
        );
        let bare = dir.without_children();
        assert!(bare.children().is_empty());
        assert_eq!(bare.path(), Path::new("/tmp/d"));
        assert_eq!(bare.disposition(), Disposition::Delete);
    }

    #[test]
    fn test_serialize_shape() {
        let dir = Action::directory(
            "/r/d",
            DirDisposition::Retain,
            vec![Action::busy("/r/d/f")],
        );
        let json = serde_json::to_value(&dir).unwrap();
        assert_eq!(json["kind"], "directory");
        assert_eq!(json["disposition"], "retain");
        assert_eq!(json["children"][0]["kind"], "file");
        assert_eq!(json["children"][0]["disposition"], "busy");

        let bare = serde_json::to_value(dir.without_children()).unwrap();
        assert_eq!(bare["children"], serde_json::json!([]));

        let file = serde_json::to_value(Action::busy("/r/f")).unwrap();
        assert!(file.get("children").is_none());
    }
}
