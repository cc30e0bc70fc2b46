//! Flat, dependency-ordered view of an action tree.

use crate::action::Action;

/// Flatten a tree so every directory is preceded by all of its descendants.
///
/// Each directory is replaced by its flattened children followed by a childless copy of
/// itself. Sibling order is preserved, and the result has exactly one entry per node.
pub fn flatten(actions: &[Action]) -> Vec<Action> {
    let mut flat = Vec::with_capacity(actions.iter().map(Action::entry_count).sum());
    flatten_into(actions, &mut flat);
    flat
}

fn flatten_into(actions: &[Action], out: &mut Vec<Action>) {
    for action in actions {
        if let Action::Directory { children, .. } = action {
            flatten_into(children, out);
        }
        out.push(action.without_children());
    }
}
