//! Bottom-up deletability of directories.

use crate::action::{Action, DirDisposition};

/// Resolve a directory's disposition from its already-resolved children.
///
/// Directories are only ever deletion candidates when `delete_empty_directories` is set. A
/// candidate is deleted when it has no children or every child is itself deleted.
pub fn resolve(children: &[Action], delete_empty_directories: bool) -> DirDisposition {
    if delete_empty_directories && children.iter().all(Action::is_delete) {
        DirDisposition::Delete
    } else {
        DirDisposition::Retain
    }
}
