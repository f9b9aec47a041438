//! The editor-facing surface the regeneration flow talks to.
//!
//! A host owns every visible resource: the status item the progress
//! indicator animates, notifications, the durable output log and the
//! document/diff views. The CLI and the MCP server each provide one.

use std::fmt;

use serde::Serialize;

use super::snapshot::Document;

/// A visible status resource, acquired when the indicator starts and
/// disposed exactly once when it stops.
pub trait StatusItem: Send + 'static {
    fn set_text(&mut self, text: &str);

    fn dispose(&mut self);
}

/// Follow-up actions offered alongside a confirmation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Affordance {
    ShowDiff,
    ShowFile,
}

impl Affordance {
    pub fn label(self) -> &'static str {
        match self {
            Affordance::ShowDiff => "Show Diff",
            Affordance::ShowFile => "Show File",
        }
    }
}

impl fmt::Display for Affordance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub trait Host: Sync {
    /// Acquire a fresh status item. Called once per indicator run.
    fn create_status_item(&self) -> Box<dyn StatusItem>;

    /// Show a confirmation. Returns the affordance the user picked, if any.
    fn show_info(&self, message: &str, affordances: &[Affordance]) -> Option<Affordance>;

    /// Non-blocking warning.
    fn show_warning(&self, message: &str);

    /// Blocking error.
    fn show_error(&self, message: &str);

    /// Append a line to the durable output log.
    fn append_log(&self, line: &str);

    /// Bring the output log into view.
    fn reveal_log(&self);

    fn show_document(&self, document: &Document);

    /// Present a read-only two-way diff. Diffing is up to the host.
    fn show_diff(&self, old: &Document, current: &Document);
}
