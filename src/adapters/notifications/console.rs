//! Console notifier that echoes directory events as plain text lines.

use std::io::{self, Stdout, Write};
use std::sync::{Mutex, PoisonError};

use crate::domain::user::DirectoryEvent;
use crate::ports::DirectoryNotifier;

/// Writes each event's console line to an output stream (stdout by default).
pub struct ConsoleNotifier<W: Write + Send = Stdout> {
    out: Mutex<W>,
}

impl ConsoleNotifier<Stdout> {
    /// Notifier writing to the process stdout.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl Default for ConsoleNotifier<Stdout> {
    fn default() -> Self {
        Self::stdout()
    }
}

impl<W: Write + Send> ConsoleNotifier<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Consume the notifier and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> DirectoryNotifier for ConsoleNotifier<W> {
    fn notify(&self, event: &DirectoryEvent) {
        let Some(line) = event.console_line() else {
            return;
        };

        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = writeln!(out, "{}", line) {
            tracing::warn!(event = event.kind(), "Failed to write console notification: {}", e);
        }
    }
}
