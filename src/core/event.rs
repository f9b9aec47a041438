use std::fmt;

use tokio::sync::mpsc;

/// A progress report from the schema generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    /// Intermediate progress. Shown on the indicator and logged.
    Info(String),
    /// Non-blocking warning.
    Warn(String),
    /// Terminal: the schema was written.
    Success(String),
    /// Terminal: generation failed.
    Error(String),
    /// A report with a kind we don't know. Logged only.
    Unknown(String),
}

impl ProgressEvent {
    /// Build an event from a raw `(message, kind)` report.
    ///
    /// A missing kind means success, matching how generators signal the
    /// final "schema has been updated" message.
    pub fn from_report(message: impl Into<String>, kind: Option<&str>) -> Self {
        let message = message.into();
        match kind.unwrap_or("success") {
            "success" => ProgressEvent::Success(message),
            "info" => ProgressEvent::Info(message),
            "warn" | "warning" => ProgressEvent::Warn(message),
            "error" => ProgressEvent::Error(message),
            _ => ProgressEvent::Unknown(message),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ProgressEvent::Info(message)
            | ProgressEvent::Warn(message)
            | ProgressEvent::Success(message)
            | ProgressEvent::Error(message)
            | ProgressEvent::Unknown(message) => message,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ProgressEvent::Info(_) => "info",
            ProgressEvent::Warn(_) => "warn",
            ProgressEvent::Success(_) => "success",
            ProgressEvent::Error(_) => "error",
            ProgressEvent::Unknown(_) => "unknown",
        }
    }

    /// Success and error end an attempt.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ProgressEvent::Success(_) | ProgressEvent::Error(_))
    }
}

impl fmt::Display for ProgressEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind(), self.message())
    }
}

/// Handle given to a generator for reporting progress.
///
/// Reports sent after the receiving side has finished are dropped.
#[derive(Debug, Clone)]
pub struct Reporter {
    sender: mpsc::UnboundedSender<ProgressEvent>,
}

pub type EventReceiver = mpsc::UnboundedReceiver<ProgressEvent>;

pub fn reporter_channel() -> (Reporter, EventReceiver) {
    let (sender, receiver) = mpsc::unbounded_channel();
    (Reporter { sender }, receiver)
}

impl Reporter {
    pub fn send(&self, event: ProgressEvent) {
        if self.sender.send(event).is_err() {
            tracing::debug!("progress report dropped, regeneration already finished");
        }
    }

    pub fn report(&self, message: impl Into<String>, kind: Option<&str>) {
        self.send(ProgressEvent::from_report(message, kind));
    }

    pub fn info(&self, message: impl Into<String>) {
        self.send(ProgressEvent::Info(message.into()));
    }

    pub fn warn(&self, message: impl Into<String>) {
        self.send(ProgressEvent::Warn(message.into()));
    }

    pub fn success(&self, message: impl Into<String>) {
        self.send(ProgressEvent::Success(message.into()));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.send(ProgressEvent::Error(message.into()));
    }
}
