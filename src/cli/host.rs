//! Terminal implementation of [`Host`].

use std::{
    io::{self, IsTerminal, Write},
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use unicode_width::UnicodeWidthStr;

use super::report::{
    print_affordance_hint_to, print_diff_to, print_document_to, print_error_to, print_info_to,
    print_log_line_to, print_warning_to,
};
use crate::core::{Affordance, Document, Host, StatusItem};

/// Width of the status line currently drawn on stderr, 0 when none is.
type StatusWidth = Arc<Mutex<usize>>;

fn lock_width(width: &StatusWidth) -> MutexGuard<'_, usize> {
    width.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Blank out a drawn status line and return the cursor to column 0.
fn clear_status_to<W: Write>(width: &mut usize, writer: &mut W) {
    if *width > 0 {
        let _ = write!(writer, "\r{:width$}\r", "", width = *width);
        let _ = writer.flush();
    }
    *width = 0;
}

/// Status line redrawn in place on stderr.
///
/// Only draws when stderr is a terminal, so piped output stays clean.
struct StatusLine {
    enabled: bool,
    width: StatusWidth,
}

impl StatusItem for StatusLine {
    fn set_text(&mut self, text: &str) {
        if !self.enabled {
            tracing::trace!(text, "status");
            return;
        }
        let mut width = lock_width(&self.width);
        let text_width = UnicodeWidthStr::width(text);
        let padding = width.saturating_sub(text_width);
        let mut stderr = io::stderr().lock();
        let _ = write!(stderr, "\r{}{:padding$}", text, "", padding = padding);
        let _ = stderr.flush();
        *width = text_width;
    }

    fn dispose(&mut self) {
        clear_status_to(&mut lock_width(&self.width), &mut io::stderr().lock());
    }
}

#[derive(Debug, Default)]
struct OutputLog {
    lines: Vec<String>,
    /// Lines already written to the terminal.
    printed: usize,
    revealed: bool,
}

pub struct TerminalHost {
    verbose: bool,
    picks: Vec<Affordance>,
    log: Mutex<OutputLog>,
    status_width: StatusWidth,
}

impl TerminalHost {
    /// `picks` are the affordances to accept automatically when offered.
    pub fn new(verbose: bool, picks: Vec<Affordance>) -> Self {
        Self {
            verbose,
            picks,
            log: Mutex::new(OutputLog::default()),
            status_width: StatusWidth::default(),
        }
    }

    /// Lines appended to the output log so far.
    pub fn log_lines(&self) -> Vec<String> {
        self.log().lines.clone()
    }

    fn log(&self) -> MutexGuard<'_, OutputLog> {
        self.log.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Lock stderr with the status line cleared. The next tick redraws it.
    fn stderr(&self) -> io::StderrLock<'static> {
        // Same lock order as `StatusLine`: width, then stderr.
        let mut width = lock_width(&self.status_width);
        let mut stderr = io::stderr().lock();
        clear_status_to(&mut width, &mut stderr);
        stderr
    }

    /// Clear the status line before writing to stdout on the same terminal.
    fn clear_status(&self) {
        drop(self.stderr());
    }

    fn flush_log(&self, log: &mut OutputLog) {
        if log.printed == log.lines.len() {
            return;
        }
        let mut stderr = self.stderr();
        for line in &log.lines[log.printed..] {
            print_log_line_to(line, &mut stderr);
        }
        log.printed = log.lines.len();
    }
}

impl Host for TerminalHost {
    fn create_status_item(&self) -> Box<dyn StatusItem> {
        Box::new(StatusLine {
            enabled: io::stderr().is_terminal(),
            width: Arc::clone(&self.status_width),
        })
    }

    fn show_info(&self, message: &str, affordances: &[Affordance]) -> Option<Affordance> {
        self.clear_status();
        print_info_to(message, &mut io::stdout().lock());

        let picked = affordances
            .iter()
            .copied()
            .find(|affordance| self.picks.contains(affordance));
        if picked.is_none() {
            for affordance in affordances {
                print_affordance_hint_to(*affordance, &mut io::stdout().lock());
            }
        }
        picked
    }

    fn show_warning(&self, message: &str) {
        print_warning_to(message, &mut self.stderr());
    }

    fn show_error(&self, message: &str) {
        print_error_to(message, &mut self.stderr());
    }

    fn append_log(&self, line: &str) {
        let mut log = self.log();
        log.lines.push(line.to_string());
        if self.verbose || log.revealed {
            self.flush_log(&mut log);
        }
    }

    fn reveal_log(&self) {
        let mut log = self.log();
        log.revealed = true;
        self.flush_log(&mut log);
    }

    fn show_document(&self, document: &Document) {
        self.clear_status();
        print_document_to(document, &mut io::stdout().lock());
    }

    fn show_diff(&self, old: &Document, current: &Document) {
        self.clear_status();
        print_diff_to(old, current, &mut io::stdout().lock());
    }
}
