//! Per-entry classification.

use std::path::Path;

use crate::action::{EntryKind, FileDisposition};
use crate::age::days_between;
use crate::config::SweepConfig;
use crate::error::Result;
use crate::fs::FileSystem;

/// What the classifier decided about a single entry.
///
/// Directories are left unresolved: their disposition depends on their children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Classification {
    File(FileDisposition),
    Directory,
}

/// Classify the entry at `path` by kind and, for files, by age.
///
/// Fails if the entry's metadata cannot be read.
pub(crate) async fn classify<F>(fs: &F, path: &Path, config: &SweepConfig) -> Result<Classification>
where
    F: FileSystem + ?Sized,
{
    let metadata = fs.metadata(path).await?;

    Ok(match metadata.kind {
        EntryKind::Directory => Classification::Directory,
        EntryKind::File => {
            let age_days = days_between(config.reference, metadata.modified);
            if config.is_expired(age_days) {
                Classification::File(FileDisposition::Delete)
            } else {
                Classification::File(FileDisposition::Retain)
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SweepError;
    use crate::fs::LocalFileSystem;
    use chrono::{Duration, TimeZone, Utc};
    use std::fs::{self, File};
    use std::time::SystemTime;
    use tempfile::TempDir;

    fn config() -> SweepConfig {
        SweepConfig {
            max_age_days: 90,
            reference: Utc.with_ymd_and_hms(2017, 1, 13, 0, 0, 0).unwrap(),
            ..Default::default()
        }
    }

    fn write_aged(path: &Path, days_before_reference: i64) {
        fs::write(path, "data").unwrap();
        let mtime: SystemTime = (config().reference - Duration::days(days_before_reference)).into();
        File::options()
            .write(true)
            .open(path)
            .unwrap()
            .set_modified(mtime)
            .unwrap();
    }

    #[tokio::test]
    async fn test_old_file_is_deleted() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("old.txt");
        write_aged(&path, 366);

        let class = classify(&LocalFileSystem, &path, &config()).await.unwrap();
        assert_eq!(class, Classification::File(FileDisposition::Delete));
    }

    #[tokio::test]
    async fn test_new_file_is_retained() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("new.txt");
        write_aged(&path, 0);

        let class = classify(&LocalFileSystem, &path, &config()).await.unwrap();
        assert_eq!(class, Classification::File(FileDisposition::Retain));
    }

    #[tokio::test]
    async fn test_age_boundary() {
        let temp = TempDir::new().unwrap();
        let exact = temp.path().join("exact.txt");
        let short = temp.path().join("short.txt");
        write_aged(&exact, 90);
        write_aged(&short, 89);

        assert_eq!(
            classify(&LocalFileSystem, &exact, &config()).await.unwrap(),
            Classification::File(FileDisposition::Delete)
        );
        assert_eq!(
            classify(&LocalFileSystem, &short, &config()).await.unwrap(),
            Classification::File(FileDisposition::Retain)
        );
    }

    #[tokio::test]
    async fn test_future_file_is_retained_even_with_zero_age() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("future.txt");
        write_aged(&path, -2);

        let config = SweepConfig {
            max_age_days: 0,
            ..config()
        };
        let class = classify(&LocalFileSystem, &path, &config).await.unwrap();
        assert_eq!(class, Classification::File(FileDisposition::Retain));
    }

    #[tokio::test]
    async fn test_file_written_just_after_reference_is_retained() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("late.txt");
        fs::write(&path, "data").unwrap();
        let mtime: SystemTime = (config().reference + Duration::milliseconds(500)).into();
        File::options()
            .write(true)
            .open(&path)
            .unwrap()
            .set_modified(mtime)
            .unwrap();

        let config = SweepConfig {
            max_age_days: 0,
            ..config()
        };
        let class = classify(&LocalFileSystem, &path, &config).await.unwrap();
        assert_eq!(class, Classification::File(FileDisposition::Retain));
    }

    #[tokio::test]
    async fn test_directory_is_unresolved() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("folder");
        fs::create_dir(&dir).unwrap();

        let class = classify(&LocalFileSystem, &dir, &config()).await.unwrap();
        assert_eq!(class, Classification::Directory);
    }

    #[tokio::test]
    async fn test_missing_entry_propagates() {
        let temp = TempDir::new().unwrap();
        let err = classify(&LocalFileSystem, &temp.path().join("nope"), &config())
            .await
            .unwrap_err();
        assert!(matches!(err, SweepError::NotFound { .. }));
    }
}
