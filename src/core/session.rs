//! Regeneration flow: snapshot, indicator, generator and result dispatch.

use std::{future::Future, pin::pin};

use serde::Serialize;

use super::{
    event::{EventReceiver, ProgressEvent, reporter_channel},
    generator::SchemaGenerator,
    host::{Affordance, Host},
    progress::ProgressIndicator,
    snapshot::{ContentError, ContentProvider, Document, SchemaDocument, Snapshot},
};
use crate::config::Settings;

/// Success messages containing this mean the schema file was rewritten.
pub const SCHEMA_UPDATED_MARKER: &str = "has been updated";

/// Shown when changes are requested before any snapshot exists.
pub const NO_LOCAL_CHANGES: &str = "Schema has no local changes";

/// How a regeneration attempt ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum Outcome {
    Succeeded {
        message: String,
        affordances: Vec<Affordance>,
    },
    Failed { message: String },
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Succeeded { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            Outcome::Succeeded { message, .. } | Outcome::Failed { message } => message,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaDiff {
    pub old: Document,
    pub current: Document,
}

/// Everything one workspace keeps between commands.
///
/// `regenerate` takes `&mut self`, so a session can only run one attempt
/// at a time.
pub struct RegenerationSession {
    settings: Settings,
    snapshot: Snapshot,
    indicator: ProgressIndicator,
}

impl RegenerationSession {
    pub fn new(settings: Settings) -> Self {
        Self::with_indicator(settings, ProgressIndicator::default())
    }

    pub fn with_indicator(settings: Settings, indicator: ProgressIndicator) -> Self {
        Self {
            settings,
            snapshot: Snapshot::default(),
            indicator,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Swap in freshly loaded settings. A different schema path drops the
    /// snapshot, since it described another file.
    pub fn reconfigure(&mut self, settings: Settings) {
        if settings.schema_path != self.settings.schema_path {
            self.snapshot = Snapshot::default();
        }
        self.settings = settings;
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn provider(&self) -> ContentProvider<'_> {
        ContentProvider::new(&self.snapshot, &self.settings.schema_path)
    }

    /// Run one regeneration attempt to completion.
    pub async fn regenerate<H, G>(&mut self, host: &H, generator: &G) -> Outcome
    where
        H: Host,
        G: SchemaGenerator,
    {
        self.indicator.start(|| host.create_status_item());

        // A missing schema just means there is nothing to diff against.
        let previous = tokio::fs::read_to_string(&self.settings.schema_path)
            .await
            .ok();
        tracing::debug!(
            schema = %self.settings.schema_path.display(),
            has_snapshot = previous.is_some(),
            "captured schema snapshot"
        );
        self.snapshot.capture(previous);

        let (reporter, mut events) = reporter_channel();
        let generation = generator.generate(self.settings.generate_request(), reporter);

        let mut outcome = None;
        let timeout = self.settings.timeout;
        let driven = self.drive(host, generation, &mut events, &mut outcome);
        let timed_out = match timeout {
            Some(limit) => tokio::time::timeout(limit, driven).await.is_err(),
            None => {
                driven.await;
                false
            }
        };

        let outcome = match outcome {
            Some(outcome) => outcome,
            None if timed_out => {
                let secs = timeout.map(|limit| limit.as_secs()).unwrap_or_default();
                self.fail(host, format!("Schema generation timed out after {}s", secs))
                    .await
            }
            None => {
                self.fail(host, "Schema generator finished without reporting a result")
                    .await
            }
        };

        // Covers generators that never sent a terminal report.
        self.indicator.stop().await;
        outcome
    }

    /// Open the schema file.
    pub async fn show_schema<H: Host>(&self, host: &H) -> Option<Document> {
        match self.provider().document(SchemaDocument::Current).await {
            Ok(document) => {
                host.show_document(&document);
                Some(document)
            }
            Err(err) => {
                host.show_error(&err.to_string());
                None
            }
        }
    }

    /// Diff the snapshot against the schema on disk.
    pub async fn show_changes<H: Host>(&self, host: &H) -> Option<SchemaDiff> {
        if !self.snapshot.exists() {
            host.show_info(NO_LOCAL_CHANGES, &[]);
            return None;
        }

        let provider = self.provider();
        let documents = async {
            let old = provider.document(SchemaDocument::Old).await?;
            let current = provider.document(SchemaDocument::Current).await?;
            Ok::<_, ContentError>(SchemaDiff { old, current })
        };

        match documents.await {
            Ok(diff) => {
                host.show_diff(&diff.old, &diff.current);
                Some(diff)
            }
            Err(err) => {
                host.show_error(&err.to_string());
                None
            }
        }
    }

    async fn drive<H, F>(
        &mut self,
        host: &H,
        generation: F,
        events: &mut EventReceiver,
        outcome: &mut Option<Outcome>,
    ) where
        H: Host,
        F: Future<Output = ()>,
    {
        let mut generation = pin!(generation);
        let mut generating = true;

        loop {
            tokio::select! {
                _ = &mut generation, if generating => {
                    generating = false;
                }
                event = events.recv() => match event {
                    Some(event) => self.dispatch(host, event, outcome).await,
                    None => break,
                },
            }
        }
    }

    async fn dispatch<H: Host>(
        &mut self,
        host: &H,
        event: ProgressEvent,
        outcome: &mut Option<Outcome>,
    ) {
        tracing::debug!(%event, "generator report");
        self.indicator.clear_detail();

        if outcome.is_some() && event.is_terminal() {
            tracing::warn!(%event, "ignoring extra result from schema generator");
            host.append_log(&format!(
                "Ignored {} report after the result: {}",
                event.kind(),
                event.message()
            ));
            return;
        }

        match event {
            ProgressEvent::Info(message) => {
                self.indicator.set_detail(&message);
                host.append_log(&message);
            }
            ProgressEvent::Warn(message) => host.show_warning(&message),
            ProgressEvent::Success(message) => {
                self.indicator.stop().await;
                *outcome = Some(self.succeed(host, message).await);
            }
            ProgressEvent::Error(message) => {
                *outcome = Some(self.fail(host, message).await);
            }
            ProgressEvent::Unknown(message) => {
                host.append_log(&message);
                host.reveal_log();
            }
        }
    }

    async fn succeed<H: Host>(&self, host: &H, message: String) -> Outcome {
        let affordances = if message.contains(SCHEMA_UPDATED_MARKER) {
            if self.snapshot.exists() {
                vec![Affordance::ShowDiff]
            } else {
                Vec::new()
            }
        } else {
            vec![Affordance::ShowFile]
        };

        match host.show_info(&message, &affordances) {
            Some(Affordance::ShowDiff) => {
                self.show_changes(host).await;
            }
            Some(Affordance::ShowFile) => {
                self.show_schema(host).await;
            }
            None => {}
        }

        Outcome::Succeeded {
            message,
            affordances,
        }
    }

    async fn fail<H: Host>(&mut self, host: &H, message: impl Into<String>) -> Outcome {
        let message = message.into();
        self.indicator.stop().await;
        host.show_error(&message);
        Outcome::Failed { message }
    }
}
