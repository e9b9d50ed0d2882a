//! Presentation: text and JSON formatters for fingerprints, diffs and polls.

use crate::error::ApiError;
use crate::types::{Diff, Fingerprint};
use crate::watch::{PollOutcome, WatchDefinition};
use chrono::{SecondsFormat, Utc};
use comfy_table::Table;
use owo_colors::OwoColorize;
use std::path::Path;

pub fn format_capture_text(root: &Path, fingerprint: &Fingerprint) -> String {
    format!(
        "Captured {}:\n  Root hash: {}\n  Files: {}",
        root.display(),
        fingerprint.hash(),
        fingerprint.len()
    )
}

pub fn format_capture_json(fingerprint: &Fingerprint) -> Result<String, ApiError> {
    Ok(serde_json::to_string_pretty(fingerprint)?)
}

/// One-line summary such as "3 changes (1 added, 1 removed, 1 modified)"
pub fn format_diff_summary(diff: &Diff) -> String {
    let noun = if diff.total_count() == 1 { "change" } else { "changes" };
    format!(
        "{} {} ({} added, {} removed, {} modified)",
        diff.total_count(),
        noun,
        diff.added().len(),
        diff.removed().len(),
        diff.modified().len()
    )
}

pub fn format_diff_text(old: &Fingerprint, new: &Fingerprint, diff: &Diff, color: bool) -> String {
    if !new.changed(old) {
        return format!("Unchanged (root hash {})", new.hash());
    }

    let summary = format_diff_summary(diff);
    let mut s = format!(
        "Root hash: {} -> {}\n{}",
        old.hash(),
        new.hash(),
        if color {
            summary.bold().to_string()
        } else {
            summary
        }
    );

    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.set_header(vec!["Change", "Path"]);
    for path in diff.added() {
        table.add_row(vec!["added", path.as_str()]);
    }
    for path in diff.removed() {
        table.add_row(vec!["removed", path.as_str()]);
    }
    for path in diff.modified() {
        table.add_row(vec!["modified", path.as_str()]);
    }
    s.push('\n');
    s.push_str(&table.to_string());
    s
}

pub fn format_diff_json(old: &Fingerprint, new: &Fingerprint, diff: &Diff) -> Result<String, ApiError> {
    let out = serde_json::json!({
        "changed": new.changed(old),
        "old_hash": old.hash(),
        "new_hash": new.hash(),
        "added": diff.added(),
        "removed": diff.removed(),
        "modified": diff.modified(),
        "total": diff.total_count(),
    });
    Ok(serde_json::to_string_pretty(&out)?)
}

/// Lines printed for one poll of `dirprint watch`
pub fn format_poll_outcome(definition: &WatchDefinition, outcome: &PollOutcome, color: bool) -> String {
    let stamp = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
    match outcome {
        PollOutcome::Baseline(fingerprint) => format!(
            "[{}] watching {} ({} files, root hash {})",
            stamp,
            definition.root.display(),
            fingerprint.len(),
            fingerprint.hash()
        ),
        PollOutcome::Unchanged => format!("[{}] unchanged", stamp),
        PollOutcome::Changed(diff) => {
            let mut lines = vec![format!("[{}] {}", stamp, format_diff_summary(diff))];
            for path in diff.added() {
                lines.push(marker_line('+', path, color));
            }
            for path in diff.removed() {
                lines.push(marker_line('-', path, color));
            }
            for path in diff.modified() {
                lines.push(marker_line('~', path, color));
            }
            lines.join("\n")
        }
    }
}

fn marker_line(marker: char, path: &str, color: bool) -> String {
    let line = format!("  {} {}", marker, path);
    if !color {
        return line;
    }
    match marker {
        '+' => line.green().to_string(),
        '-' => line.red().to_string(),
        _ => line.yellow().to_string(),
    }
}
