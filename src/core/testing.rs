//! Test doubles shared by the core unit tests.

use std::sync::{Arc, Mutex};

use super::{
    host::{Affordance, Host, StatusItem},
    snapshot::Document,
};

#[derive(Debug, Default)]
struct StatusEntries {
    texts: Vec<String>,
    acquired: usize,
    disposed: usize,
}

/// Records what status items were asked to do.
#[derive(Debug, Default, Clone)]
pub struct StatusLog {
    inner: Arc<Mutex<StatusEntries>>,
}

impl StatusLog {
    pub fn texts(&self) -> Vec<String> {
        self.inner.lock().unwrap().texts.clone()
    }

    pub fn acquired(&self) -> usize {
        self.inner.lock().unwrap().acquired
    }

    pub fn disposed(&self) -> usize {
        self.inner.lock().unwrap().disposed
    }
}

struct RecordingStatusItem {
    log: StatusLog,
}

impl StatusItem for RecordingStatusItem {
    fn set_text(&mut self, text: &str) {
        self.log.inner.lock().unwrap().texts.push(text.to_string());
    }

    fn dispose(&mut self) {
        self.log.inner.lock().unwrap().disposed += 1;
    }
}

pub fn recording_status_item(log: &StatusLog) -> Box<dyn StatusItem> {
    log.inner.lock().unwrap().acquired += 1;
    Box::new(RecordingStatusItem { log: log.clone() })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    Info(String, Vec<Affordance>),
    Warning(String),
    Error(String),
    Log(String),
    RevealLog,
    Document(Document),
    Diff(Document, Document),
}

/// Host that records every call and picks a scripted affordance.
#[derive(Default)]
pub struct RecordingHost {
    pub status: StatusLog,
    calls: Mutex<Vec<HostCall>>,
    pick: Option<Affordance>,
}

impl RecordingHost {
    pub fn picking(affordance: Affordance) -> Self {
        Self {
            pick: Some(affordance),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.lock().unwrap().clone()
    }

    fn push(&self, call: HostCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl Host for RecordingHost {
    fn create_status_item(&self) -> Box<dyn StatusItem> {
        recording_status_item(&self.status)
    }

    fn show_info(&self, message: &str, affordances: &[Affordance]) -> Option<Affordance> {
        self.push(HostCall::Info(message.to_string(), affordances.to_vec()));
        self.pick.filter(|pick| affordances.contains(pick))
    }

    fn show_warning(&self, message: &str) {
        self.push(HostCall::Warning(message.to_string()));
    }

    fn show_error(&self, message: &str) {
        self.push(HostCall::Error(message.to_string()));
    }

    fn append_log(&self, line: &str) {
        self.push(HostCall::Log(line.to_string()));
    }

    fn reveal_log(&self) {
        self.push(HostCall::RevealLog);
    }

    fn show_document(&self, document: &Document) {
        self.push(HostCall::Document(document.clone()));
    }

    fn show_diff(&self, old: &Document, current: &Document) {
        self.push(HostCall::Diff(old.clone(), current.clone()));
    }
}
