//! Grouped, flat report of a sweep.

use serde::Serialize;
use std::path::PathBuf;

use crate::action::{Action, Disposition};
use crate::execute::Leftovers;
use crate::flatten::flatten;

/// Flattened actions grouped by disposition.
///
/// All three buckets are always present; a bucket with no members is an empty list.
/// Within a bucket, entries keep their flattened order, so descendants precede the
/// directories that contain them. A file that turned out to be busy stays in `delete`
/// (its planned fate) and is also listed in `busy`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub delete: Vec<Action>,
    pub retain: Vec<Action>,
    pub busy: Vec<Action>,
    /// Directories planned for deletion that had gained entries by the time they were removed.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub not_empty: Vec<PathBuf>,
}

impl Report {
    /// Build the report for an analyzed tree and what its execution left behind.
    pub fn build(tree: &[Action], leftovers: Leftovers) -> Self {
        let Leftovers { busy, not_empty } = leftovers;

        let mut report = Self::from_flat(flatten(tree).into_iter().chain(busy));
        report.not_empty = not_empty;
        report
    }

    /// Report for an analyzed tree that was not executed.
    pub fn planned(tree: &[Action]) -> Self {
        Self::build(tree, Leftovers::default())
    }

    /// Group an already flat sequence of actions by disposition.
    pub fn from_flat(actions: impl IntoIterator<Item = Action>) -> Self {
        let mut report = Self::default();
        for action in actions {
            match action.disposition() {
                Disposition::Delete => report.delete.push(action),
                Disposition::Retain => report.retain.push(action),
                Disposition::Busy => report.busy.push(action),
            }
        }
        report
    }

    pub fn bucket(&self, disposition: Disposition) -> &[Action] {
        match disposition {
            Disposition::Delete => &self.delete,
            Disposition::Retain => &self.retain,
            Disposition::Busy => &self.busy,
        }
    }

    /// Number of entries across all buckets.
    pub fn total(&self) -> usize {
        self.delete.len() + self.retain.len() + self.busy.len()
    }
}
