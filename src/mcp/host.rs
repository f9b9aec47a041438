//! [`Host`] that records everything for the tool result.

use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::Serialize;

use crate::core::{Affordance, Document, Host, SchemaDiff, StatusItem};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    /// Follow-up actions offered with the message
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<Affordance>,
}

/// What a tool call showed to the user.
#[derive(Debug, Default, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HostActivity {
    pub notices: Vec<Notice>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub log: Vec<String>,
    pub log_revealed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<Document>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff: Option<SchemaDiff>,
}

struct TracingStatusItem;

impl StatusItem for TracingStatusItem {
    fn set_text(&mut self, text: &str) {
        tracing::debug!(text, "status");
    }

    fn dispose(&mut self) {}
}

/// Collects notices instead of displaying them. Affordances are never
/// picked; the client follows up with the matching tool.
#[derive(Default)]
pub struct McpHost {
    activity: Mutex<HostActivity>,
}

impl McpHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_activity(self) -> HostActivity {
        self.activity
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn activity(&self) -> MutexGuard<'_, HostActivity> {
        self.activity.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn notice(&self, level: NoticeLevel, message: &str, actions: &[Affordance]) {
        self.activity().notices.push(Notice {
            level,
            message: message.to_string(),
            actions: actions.to_vec(),
        });
    }
}

impl Host for McpHost {
    fn create_status_item(&self) -> Box<dyn StatusItem> {
        Box::new(TracingStatusItem)
    }

    fn show_info(&self, message: &str, affordances: &[Affordance]) -> Option<Affordance> {
        self.notice(NoticeLevel::Info, message, affordances);
        None
    }

    fn show_warning(&self, message: &str) {
        self.notice(NoticeLevel::Warning, message, &[]);
    }

    fn show_error(&self, message: &str) {
        self.notice(NoticeLevel::Error, message, &[]);
    }

    fn append_log(&self, line: &str) {
        self.activity().log.push(line.to_string());
    }

    fn reveal_log(&self) {
        self.activity().log_revealed = true;
    }

    fn show_document(&self, document: &Document) {
        self.activity().document = Some(document.clone());
    }

    fn show_diff(&self, old: &Document, current: &Document) {
        self.activity().diff = Some(SchemaDiff {
            old: old.clone(),
            current: current.clone(),
        });
    }
}
