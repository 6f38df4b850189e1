//! `conlog` - Console-style logging engine with a plain-text audit trail.
//!
//! Emulates a rich console API — leveled messages, box-drawing tables,
//! charts, progress bars, named counters and timers — while persisting every
//! dated line, ANSI-free, to time-rotated files.
//!
//! # Example
//!
//! ```no_run
//! use conlog::{LogOptions, Logger};
//! use serde_json::json;
//!
//! let mut logger = Logger::builder()
//!     .log_dir("logs")
//!     .colorize_objects(true)
//!     .build()
//!     .expect("log directory");
//!
//! logger.info(&[json!("Application started")]);
//! logger.with_options(LogOptions::new().color("#ff8800")).warn(&[json!("low disk")]);
//! logger.count("requests");
//! logger.progress("sync", 5, 10);
//! ```
//!
//! # Features
//!
//! - `cli` (default): enables the demo/driver command-line binary.

// Core modules (always available)
pub mod config;
pub mod error;
pub mod fmt;
pub mod level;
pub mod logger;
pub mod output;
pub mod render;
pub mod stamp;

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;

// Re-exports for convenience
pub use config::LoggerConfig;
pub use error::Error;
pub use fmt::{ColorToken, InspectOptions, NamedColor, Rgb};
pub use level::Level;
pub use logger::{LogOptions, Logger, LoggerBuilder};
pub use render::ChartOptions;
