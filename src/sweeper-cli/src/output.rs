//! Human-readable rendering of sweep reports.

use std::fmt::Write as _;
use std::path::Path;

use sweeper_engine::{Action, EntryKind, Report};

/// Render a report as plain text.
pub fn render_report(root: &Path, report: &Report, dry_run: bool) -> String {
    let mut out = String::new();

    let title = if dry_run {
        "Sweep plan (dry run - nothing was deleted)"
    } else {
        "Sweep report"
    };
    let _ = writeln!(out, "{title}: {}", root.display());
    let _ = writeln!(out, "{}", "=".repeat(50));

    // Busy files and their ancestors stay in the delete bucket; they are listed again below.
    let deleted_label = if dry_run {
        "Would delete"
    } else {
        "Planned for deletion (see busy / not removed)"
    };
    render_bucket(&mut out, deleted_label, &report.delete);
    render_bucket(&mut out, "Retained", &report.retain);
    render_bucket(&mut out, "Busy (in use, left in place)", &report.busy);

    if !report.not_empty.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "Not removed (gained entries during the run): {}",
            report.not_empty.len()
        );
        for path in &report.not_empty {
            let _ = writeln!(out, "  {}/", path.display());
        }
    }

    out
}

fn render_bucket(out: &mut String, label: &str, actions: &[Action]) {
    let _ = writeln!(out);
    let _ = writeln!(out, "{label}: {}", actions.len());
    for action in actions {
        let suffix = match action.kind() {
            EntryKind::Directory => "/",
            EntryKind::File => "",
        };
        let _ = writeln!(out, "  {}{suffix}", action.path().display());
    }
}
