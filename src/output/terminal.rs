//! Terminal sink.
//!
//! Wraps a boxed writer (stdout by default) so tests can capture output. The
//! inline path uses a carriage return and an explicit flush — the redrawn
//! line must reach the terminal without a newline.

use std::io::{self, Write};

pub struct Term {
    writer: Box<dyn Write + Send>,
}

impl std::fmt::Debug for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Term").finish_non_exhaustive()
    }
}

impl Default for Term {
    fn default() -> Self {
        Self::new(Box::new(io::stdout()))
    }
}

impl Term {
    #[must_use]
    pub fn new(writer: Box<dyn Write + Send>) -> Self {
        Self { writer }
    }

    /// One newline-terminated line. Write failures to a terminal are not
    /// actionable — they are dropped, matching console semantics.
    pub fn line(&mut self, text: &str) {
        let _ = writeln!(self.writer, "{text}");
    }

    /// Redraws the current line in place: carriage return, no newline,
    /// flushed so the terminal shows it immediately.
    pub fn inline(&mut self, text: &str) {
        let _ = write!(self.writer, "\r{text}");
        let _ = self.writer.flush();
    }

    /// Terminates a pending inline render.
    pub fn newline(&mut self) {
        let _ = writeln!(self.writer);
    }

    /// Raw escape output (terminal clear).
    pub fn raw(&mut self, text: &str) {
        let _ = write!(self.writer, "{text}");
    }
}
