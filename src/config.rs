//! Logger configuration.
//!
//! A completely empty config file must still produce a working logger —
//! `#[serde(default)]` on every field ensures zero-config works out of the box.

use crate::error::Error;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Fallback rotation interval when the configured value is unusable.
const DEFAULT_INTERVAL_MS: i64 = 86_400_000;

/// Immutable after construction; the builder resolves `log_directory` to an
/// absolute path and creates it before the first write.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Where rotated audit files land. Tilde-expanded at build time.
    pub log_directory: String,
    /// Hours per rotation window. Non-positive or non-finite values fall back
    /// to 24.
    pub save_interval_hours: f64,
    /// Whether deep-inspected values carry color on the terminal. The audit
    /// file is always plain.
    pub colorize_objects: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            log_directory: default_log_dir(),
            save_interval_hours: 24.0,
            colorize_objects: false,
        }
    }
}

impl LoggerConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    /// Fails if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, Error> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Rotation window in milliseconds, with the 24-hour fallback applied.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn interval_ms(&self) -> i64 {
        if self.save_interval_hours.is_finite() && self.save_interval_hours > 0.0 {
            (self.save_interval_hours * 3_600_000.0) as i64
        } else {
            DEFAULT_INTERVAL_MS
        }
    }
}

fn default_log_dir() -> String {
    directories::ProjectDirs::from("", "", "conlog").map_or_else(
        || "logs".to_string(),
        |dirs| {
            dirs.state_dir()
                .unwrap_or_else(|| dirs.data_dir())
                .join("logs")
                .to_string_lossy()
                .into_owned()
        },
    )
}
