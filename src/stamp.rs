//! Timestamp prefix cache.
//!
//! Rendering the prefix costs a UTC-offset computation and two formatting
//! passes; at high call rates that work is wasted on identical output, so the
//! rendered string is reused for a rolling one-second window.

use crate::fmt::{NamedColor, RESET};
use chrono::{DateTime, Local, Utc};

/// Cached window length in milliseconds.
const WINDOW_MS: i64 = 1000;

/// Holds both the colored (terminal) and plain (file) form of the prefix so
/// the two always agree within a window.
#[derive(Debug, Default)]
pub struct TimestampCache {
    colored: String,
    plain: String,
    expires_at: i64,
}

impl TimestampCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gray-wrapped prefix for terminal lines, e.g. `[+02:00 2026-08-06 14:03:21] `.
    pub fn colored(&mut self, now: DateTime<Local>) -> &str {
        self.refresh(now);
        &self.colored
    }

    /// Escape-free prefix for persisted lines.
    pub fn plain(&mut self, now: DateTime<Local>) -> &str {
        self.refresh(now);
        &self.plain
    }

    fn refresh(&mut self, now: DateTime<Local>) {
        let now_ms = now.timestamp_millis();
        if now_ms <= self.expires_at && !self.plain.is_empty() {
            return;
        }

        // Offset sign follows the minutes-west convention of the persisted
        // format: zones ahead of UTC render '+', UTC itself renders '-00:00'.
        let west_min = -(now.offset().local_minus_utc() / 60);
        let sign = if west_min < 0 { '+' } else { '-' };
        let hh = (west_min / 60).abs();
        let mm = (west_min % 60).abs();

        // UTC calendar date, local wall-clock time.
        let date = now.with_timezone(&Utc).format("%Y-%m-%d");
        let time = now.format("%H:%M:%S");

        let bracket = format!("[{sign}{hh:02}:{mm:02} {date} {time}]");
        self.colored = format!("{}{bracket}{RESET} ", NamedColor::Gray.ansi());
        self.plain = format!("{bracket} ");
        self.expires_at = now_ms + WINDOW_MS;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(ms: i64) -> DateTime<Local> {
        Local.timestamp_millis_opt(ms).unwrap()
    }

    #[test]
    fn stable_within_window() {
        let mut cache = TimestampCache::new();
        let first = cache.plain(at(10_000)).to_string();
        let again = cache.plain(at(10_999)).to_string();
        assert_eq!(first, again);
    }

    #[test]
    fn recomputes_after_window() {
        let mut cache = TimestampCache::new();
        let first = cache.plain(at(10_000)).to_string();
        let later = cache.plain(at(12_500)).to_string();
        // Different seconds digit — the cache did not serve the stale string.
        assert_ne!(first, later);
    }

    #[test]
    fn colored_strips_to_plain() {
        let mut cache = TimestampCache::new();
        let colored = cache.colored(at(42_000)).to_string();
        let plain = cache.plain(at(42_000)).to_string();
        assert_eq!(crate::fmt::strip_ansi(&colored), plain);
        assert!(plain.ends_with("] "));
        assert!(plain.starts_with('['));
    }

    #[test]
    fn offset_annotation_shape() {
        let mut cache = TimestampCache::new();
        let plain = cache.plain(at(1_000_000)).to_string();
        // "[±HH:MM YYYY-MM-DD HH:MM:SS] "
        let sign = plain.chars().nth(1).unwrap();
        assert!(sign == '+' || sign == '-');
        assert_eq!(plain.chars().nth(4).unwrap(), ':');
    }
}
