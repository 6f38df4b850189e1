//! Rotating file sink for the plain-text audit trail.
//!
//! Writes go through the path on every call — no pooled handles — so a
//! rotation is nothing more than computing the next file name. Appends are
//! synchronous, which keeps file order identical to call order for the
//! single writer.

use crate::fmt::strip_ansi;
use crate::level::Level;
use chrono::{DateTime, Local, Utc};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct FileSink {
    dir: PathBuf,
    interval_ms: i64,
    current_path: Option<PathBuf>,
    next_rotation_ms: i64,
}

impl FileSink {
    /// `dir` must already exist — the builder creates it before the sink is
    /// constructed.
    #[must_use]
    pub const fn new(dir: PathBuf, interval_ms: i64) -> Self {
        Self {
            dir,
            interval_ms,
            current_path: None,
            next_rotation_ms: 0,
        }
    }

    /// Appends one ANSI-free line, rotating to a fresh file name when the
    /// window has elapsed (or on the very first write).
    ///
    /// # Errors
    /// I/O errors from the append; the caller turns them into a terminal
    /// diagnostic rather than propagating.
    pub fn persist(
        &mut self,
        now: DateTime<Local>,
        plain_stamp: &str,
        level: Level,
        message: &str,
    ) -> io::Result<()> {
        let now_ms = now.timestamp_millis();
        let path = match &mut self.current_path {
            Some(p) if now_ms < self.next_rotation_ms => &*p,
            slot => {
                self.next_rotation_ms = now_ms + self.interval_ms;
                &*slot.insert(self.dir.join(file_name(now.with_timezone(&Utc))))
            }
        };

        let clean = strip_ansi(message);
        let line = format!("{plain_stamp}[{}] {clean}\n", level.as_str());

        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        file.write_all(line.as_bytes())
    }

    /// Exposed so hosts and tests can locate the active audit file.
    #[must_use]
    pub fn current_path(&self) -> Option<&Path> {
        self.current_path.as_deref()
    }
}

/// Minute-granularity UTC instant with filesystem-safe separators,
/// e.g. `2026-08-06T14-03.log`.
fn file_name(utc: DateTime<Utc>) -> String {
    utc.format("%Y-%m-%dT%H-%M.log").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::fs;
    use tempfile::TempDir;

    fn at(ms: i64) -> DateTime<Local> {
        Local.timestamp_millis_opt(ms).unwrap()
    }

    #[test]
    fn first_write_opens_a_file() {
        let tmp = TempDir::new().unwrap();
        let mut sink = FileSink::new(tmp.path().to_path_buf(), 3_600_000);

        assert!(sink.current_path().is_none());
        sink.persist(at(0), "[ts] ", Level::Log, "hello").unwrap();

        let path = sink.current_path().unwrap().to_path_buf();
        assert_eq!(fs::read_to_string(path).unwrap(), "[ts] [LOG] hello\n");
    }

    #[test]
    fn writes_before_boundary_share_a_file() {
        let tmp = TempDir::new().unwrap();
        let mut sink = FileSink::new(tmp.path().to_path_buf(), 3_600_000);

        sink.persist(at(0), "[ts] ", Level::Log, "one").unwrap();
        let first = sink.current_path().unwrap().to_path_buf();
        sink.persist(at(3_599_999), "[ts] ", Level::Log, "two").unwrap();
        assert_eq!(sink.current_path().unwrap(), first);

        let content = fs::read_to_string(first).unwrap();
        assert_eq!(content.lines().count(), 2);
    }

    #[test]
    fn boundary_crossing_starts_a_new_file() {
        let tmp = TempDir::new().unwrap();
        let mut sink = FileSink::new(tmp.path().to_path_buf(), 3_600_000);

        sink.persist(at(0), "[ts] ", Level::Log, "one").unwrap();
        let first = sink.current_path().unwrap().to_path_buf();
        sink.persist(at(3_600_000), "[ts] ", Level::Log, "two").unwrap();
        let second = sink.current_path().unwrap().to_path_buf();

        assert_ne!(first, second);
        assert!(fs::read_to_string(first).unwrap().contains("one"));
        assert!(fs::read_to_string(second).unwrap().contains("two"));
    }

    #[test]
    fn persisted_lines_are_ansi_free() {
        let tmp = TempDir::new().unwrap();
        let mut sink = FileSink::new(tmp.path().to_path_buf(), 3_600_000);

        sink.persist(at(0), "[ts] ", Level::Error, "\x1b[31mboom\x1b[0m")
            .unwrap();

        let content = fs::read_to_string(sink.current_path().unwrap()).unwrap();
        assert!(!content.contains('\x1b'));
        assert_eq!(content, "[ts] [ERROR] boom\n");
    }

    #[test]
    fn file_name_is_minute_granular() {
        let utc = Utc.with_ymd_and_hms(2026, 8, 6, 14, 3, 59).unwrap();
        assert_eq!(file_name(utc), "2026-08-06T14-03.log");
    }
}
