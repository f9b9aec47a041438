//! Terminal formatting for notifications, the output log and schema diffs.
//!
//! Every printer has a `_to` variant taking a writer so output can be
//! tested without capturing stdio.

use std::{
    collections::{BTreeMap, BTreeSet},
    io::Write,
};

use colored::Colorize;
use serde_json::Value;

use crate::core::{Affordance, Document};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print_info_to<W: Write>(message: &str, writer: &mut W) {
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), message.green());
}

/// Hint for an affordance the user did not pick.
pub fn print_affordance_hint_to<W: Write>(affordance: Affordance, writer: &mut W) {
    let hint = match affordance {
        Affordance::ShowDiff => "pass --show-diff to print the schema changes",
        Affordance::ShowFile => "pass --show-file or run `i18ntag show` to print the schema",
    };
    let _ = writeln!(writer, "  {} {} {}", "=".blue(), "hint:".bold().cyan(), hint);
}

pub fn print_warning_to<W: Write>(message: &str, writer: &mut W) {
    let _ = writeln!(writer, "{} {}", "warning:".bold().yellow(), message);
}

pub fn print_error_to<W: Write>(message: &str, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {} {}",
        FAILURE_MARK.red(),
        "error:".bold().red(),
        message
    );
}

pub fn print_log_line_to<W: Write>(line: &str, writer: &mut W) {
    let _ = writeln!(writer, "  {} {}", "|".blue(), line);
}

pub fn print_document_to<W: Write>(document: &Document, writer: &mut W) {
    let _ = write!(writer, "{}", document.content);
    if !document.content.ends_with('\n') {
        let _ = writeln!(writer);
    }
}

/// A single difference between the two sides of a diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    Added(String),
    Removed(String),
    Changed {
        path: String,
        old: String,
        current: String,
    },
}

/// Compare two schema documents.
///
/// JSON documents are compared leaf by leaf on their dotted paths. Anything
/// that does not parse is compared line by line.
pub fn schema_changes(old: &str, current: &str) -> Vec<Change> {
    match (
        serde_json::from_str::<Value>(old),
        serde_json::from_str::<Value>(current),
    ) {
        (Ok(old), Ok(current)) => json_changes(&old, &current),
        _ => line_changes(old, current),
    }
}

fn json_changes(old: &Value, current: &Value) -> Vec<Change> {
    let mut old_leaves = BTreeMap::new();
    let mut current_leaves = BTreeMap::new();
    flatten("", old, &mut old_leaves);
    flatten("", current, &mut current_leaves);

    let paths: BTreeSet<&String> = old_leaves.keys().chain(current_leaves.keys()).collect();
    paths
        .into_iter()
        .filter_map(
            |path| match (old_leaves.get(path), current_leaves.get(path)) {
                (Some(old), Some(current)) if old != current => Some(Change::Changed {
                    path: path.clone(),
                    old: old.to_string(),
                    current: current.to_string(),
                }),
                (Some(_), None) => Some(Change::Removed(path.clone())),
                (None, Some(_)) => Some(Change::Added(path.clone())),
                _ => None,
            },
        )
        .collect()
}

fn flatten<'a>(prefix: &str, value: &'a Value, leaves: &mut BTreeMap<String, &'a Value>) {
    match value {
        Value::Object(map) if !map.is_empty() => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten(&path, child, leaves);
            }
        }
        Value::Array(items) if !items.is_empty() => {
            for (index, child) in items.iter().enumerate() {
                flatten(&format!("{}[{}]", prefix, index), child, leaves);
            }
        }
        _ => {
            let path = if prefix.is_empty() { "$" } else { prefix };
            leaves.insert(path.to_string(), value);
        }
    }
}

fn line_changes(old: &str, current: &str) -> Vec<Change> {
    let old_lines: BTreeSet<&str> = old.lines().collect();
    let current_lines: BTreeSet<&str> = current.lines().collect();

    let removed = old
        .lines()
        .filter(|line| !current_lines.contains(line))
        .map(|line| Change::Removed(line.to_string()));
    let added = current
        .lines()
        .filter(|line| !old_lines.contains(line))
        .map(|line| Change::Added(line.to_string()));
    removed.chain(added).collect()
}

/// Print a two-way diff between the snapshot and the current schema.
pub fn print_diff_to<W: Write>(old: &Document, current: &Document, writer: &mut W) {
    let _ = writeln!(writer, "{} {}", "---".red(), old.uri);
    let _ = writeln!(writer, "{} {}", "+++".green(), current.uri);

    let changes = schema_changes(&old.content, &current.content);
    if changes.is_empty() {
        let _ = writeln!(writer, "{}", "no changes".dimmed());
        return;
    }

    for change in &changes {
        let _ = match change {
            Change::Added(path) => writeln!(writer, "{} {}", "+".green(), path.green()),
            Change::Removed(path) => writeln!(writer, "{} {}", "-".red(), path.red()),
            Change::Changed {
                path,
                old,
                current,
            } => writeln!(
                writer,
                "{} {}: {} -> {}",
                "~".yellow(),
                path.yellow(),
                old,
                current
            ),
        };
    }

    let added = changes
        .iter()
        .filter(|c| matches!(c, Change::Added(_)))
        .count();
    let removed = changes
        .iter()
        .filter(|c| matches!(c, Change::Removed(_)))
        .count();
    let changed = changes.len() - added - removed;
    let _ = writeln!(
        writer,
        "{} added, {} removed, {} changed",
        added, removed, changed
    );
}
