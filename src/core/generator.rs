//! The schema generator collaborator.
//!
//! Extraction itself happens elsewhere. A generator only has to report
//! progress through the [`Reporter`] and finish with one terminal report.

use std::{
    future::Future,
    path::PathBuf,
    process::Stdio,
};

use anyhow::{Result, bail};
use serde::Deserialize;
use tokio::{
    io::{AsyncBufReadExt, AsyncRead, BufReader},
    process::Command,
};

use super::event::{ProgressEvent, Reporter};

/// Inputs handed to a generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    pub source_root: PathBuf,
    pub filter: String,
    pub schema_path: PathBuf,
}

pub trait SchemaGenerator {
    fn generate(
        &self,
        request: GenerateRequest,
        reporter: Reporter,
    ) -> impl Future<Output = ()> + Send;
}

impl<F, Fut> SchemaGenerator for F
where
    F: Fn(GenerateRequest, Reporter) -> Fut,
    Fut: Future<Output = ()> + Send,
{
    fn generate(
        &self,
        request: GenerateRequest,
        reporter: Reporter,
    ) -> impl Future<Output = ()> + Send {
        self(request, reporter)
    }
}

/// Runs an external command and turns its output into reports.
///
/// The command receives `<src> <filter> <schema>` as trailing arguments and
/// the same values in `I18NTAG_SRC`, `I18NTAG_FILTER` and `I18NTAG_SCHEMA`.
/// Every stdout line is a report, either a JSON object
/// `{"type": "info", "message": "..."}` or plain text, which is logged.
/// Stderr lines are logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandGenerator {
    program: String,
    args: Vec<String>,
}

impl CommandGenerator {
    pub fn new(command: &[String]) -> Result<Self> {
        let Some((program, args)) = command.split_first() else {
            bail!("Generator command is empty");
        };
        Ok(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl SchemaGenerator for CommandGenerator {
    fn generate(
        &self,
        request: GenerateRequest,
        reporter: Reporter,
    ) -> impl Future<Output = ()> + Send {
        let program = self.program.clone();
        let args = self.args.clone();

        async move {
            tracing::debug!(%program, ?args, ?request, "spawning schema generator");

            let spawned = Command::new(&program)
                .args(&args)
                .arg(&request.source_root)
                .arg(&request.filter)
                .arg(&request.schema_path)
                .env("I18NTAG_SRC", &request.source_root)
                .env("I18NTAG_FILTER", &request.filter)
                .env("I18NTAG_SCHEMA", &request.schema_path)
                .stdin(Stdio::null())
                .stdout(Stdio::piped())
                .stderr(Stdio::piped())
                .kill_on_drop(true)
                .spawn();

            let mut child = match spawned {
                Ok(child) => child,
                Err(err) => {
                    reporter.error(format!(
                        "Failed to start schema generator `{}`: {}",
                        program, err
                    ));
                    return;
                }
            };

            let stdout = child.stdout.take();
            let stderr = child.stderr.take();

            let (terminal_seen, last_stderr) = tokio::join!(
                forward_reports(stdout, &reporter),
                forward_stderr(stderr, &reporter),
            );

            match child.wait().await {
                Ok(status) if status.success() => {
                    tracing::debug!(%program, "schema generator exited");
                }
                Ok(status) => {
                    if !terminal_seen {
                        let detail = last_stderr
                            .map(|line| format!(": {}", line))
                            .unwrap_or_default();
                        reporter.error(format!(
                            "Schema generator `{}` failed ({}){}",
                            program, status, detail
                        ));
                    }
                }
                Err(err) => {
                    if !terminal_seen {
                        reporter.error(format!(
                            "Failed to wait for schema generator `{}`: {}",
                            program, err
                        ));
                    }
                }
            }
        }
    }
}

#[derive(Deserialize)]
struct RawReport {
    #[serde(rename = "type")]
    kind: Option<String>,
    message: String,
}

/// Parse one line of generator output.
pub fn parse_report_line(line: &str) -> ProgressEvent {
    match serde_json::from_str::<RawReport>(line) {
        Ok(report) => ProgressEvent::from_report(report.message, report.kind.as_deref()),
        Err(_) => ProgressEvent::Unknown(line.to_string()),
    }
}

/// Read `stream` to EOF, one lossily decoded line at a time.
///
/// Invalid UTF-8 never stops the reader: the generator must keep a drained
/// pipe or it dies on its next write.
async fn for_each_line<R, F>(stream: R, mut f: F)
where
    R: AsyncRead + Unpin,
    F: FnMut(&str),
{
    let mut segments = BufReader::new(stream).split(b'\n');
    loop {
        match segments.next_segment().await {
            Ok(Some(bytes)) => f(&String::from_utf8_lossy(&bytes)),
            Ok(None) => break,
            Err(err) => {
                tracing::warn!("failed to read generator output: {}", err);
                break;
            }
        }
    }
}

/// Forward stdout reports. Returns whether a terminal report was seen.
async fn forward_reports<R>(stream: Option<R>, reporter: &Reporter) -> bool
where
    R: AsyncRead + Unpin,
{
    let Some(stream) = stream else {
        return false;
    };

    let mut terminal_seen = false;
    for_each_line(stream, |line| {
        let line = line.trim();
        if line.is_empty() {
            return;
        }
        let event = parse_report_line(line);
        terminal_seen |= event.is_terminal();
        reporter.send(event);
    })
    .await;
    terminal_seen
}

/// Forward stderr as log lines. Returns the last non-empty line.
async fn forward_stderr<R>(stream: Option<R>, reporter: &Reporter) -> Option<String>
where
    R: AsyncRead + Unpin,
{
    let stream = stream?;

    let mut last = None;
    for_each_line(stream, |line| {
        let line = line.trim_end();
        if line.is_empty() {
            return;
        }
        reporter.send(ProgressEvent::Unknown(line.to_string()));
        last = Some(line.to_string());
    })
    .await;
    last
}
