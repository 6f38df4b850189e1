//! Construction is the one fallible step — the directory must exist before
//! the first write — so it goes through a builder that ends in `Result`.

use super::Logger;
use crate::config::LoggerConfig;
use crate::error::Error;
use crate::output::{FileSink, Term};
use crate::stamp::TimestampCache;
use std::collections::HashMap;
use std::fs;
use std::io::Write;

#[derive(Default)]
pub struct LoggerBuilder {
    config: LoggerConfig,
    writer: Option<Box<dyn Write + Send>>,
}

impl LoggerBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an already-loaded config instead of field-by-field setters.
    #[must_use]
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    /// Where rotated audit files land. Supports `~` expansion.
    #[must_use]
    pub fn log_dir(mut self, dir: impl Into<String>) -> Self {
        self.config.log_directory = dir.into();
        self
    }

    /// Hours per rotation window; non-positive values fall back to 24.
    #[must_use]
    pub const fn save_interval_hours(mut self, hours: f64) -> Self {
        self.config.save_interval_hours = hours;
        self
    }

    /// Whether deep-inspected values carry color on the terminal.
    #[must_use]
    pub const fn colorize_objects(mut self, enabled: bool) -> Self {
        self.config.colorize_objects = enabled;
        self
    }

    /// Swaps the terminal sink — tests capture output through this.
    #[must_use]
    pub fn writer(mut self, writer: Box<dyn Write + Send>) -> Self {
        self.writer = Some(writer);
        self
    }

    /// Resolves and creates the log directory, then assembles the logger.
    ///
    /// # Errors
    /// Fails loudly when the directory cannot be created or resolved — an
    /// unwritable audit trail is unrecoverable.
    pub fn build(self) -> Result<Logger, Error> {
        let expanded = shellexpand::tilde(&self.config.log_directory).into_owned();
        if expanded.is_empty() {
            return Err(Error::InvalidPath("empty log directory".to_string()));
        }

        fs::create_dir_all(&expanded)?;
        let log_dir = fs::canonicalize(&expanded)?;

        let sink = FileSink::new(log_dir.clone(), self.config.interval_ms());
        let term = self.writer.map_or_else(Term::default, Term::new);

        Ok(Logger {
            colorize_objects: self.config.colorize_objects,
            log_dir,
            pending: None,
            stamp: TimestampCache::new(),
            sink,
            term,
            counters: HashMap::new(),
            timers: HashMap::new(),
            inline_active: false,
            group_depth: 0,
        })
    }
}
