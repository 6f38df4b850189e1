//! Command-line driver for the logging engine.
//!
//! A thin consumer of the library: builds a logger from config (or flags)
//! and forwards one-shot operations. The `demo` subcommand exercises the
//! renderers that are awkward to show from a one-line invocation.

use crate::config::LoggerConfig;
use crate::logger::Logger;
use crate::render::ChartOptions;
use clap::{Parser, Subcommand};
use serde_json::{Value, json};
use std::path::PathBuf;
use std::process::ExitCode;

/// Console operation selector for CLI arguments.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum LogLevel {
    Log,
    Debug,
    Info,
    Warn,
    Error,
}

/// conlog - Console-style logging from the command line.
#[derive(Parser)]
#[command(name = "conlog", version, about = "Console-style logging engine")]
pub struct Cli {
    /// Path to a TOML config file.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override the audit log directory.
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Log a message.
    Log {
        /// Logging operation
        #[arg(value_enum)]
        level: LogLevel,
        /// Message text
        message: Vec<String>,
        /// Color token (name or #hex) for this line
        #[arg(long)]
        color: Option<String>,
        /// Skip timestamp and file persistence
        #[arg(long)]
        no_date: bool,
    },
    /// Exercise tables, charts, counters, timers, and progress bars.
    Demo,
}

/// Parses config and flags, builds the logger, and dispatches.
#[must_use]
pub fn run(cli: &Cli) -> ExitCode {
    let mut config = match &cli.config {
        Some(path) => match LoggerConfig::load_from(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => LoggerConfig::default(),
    };
    if let Some(dir) = &cli.log_dir {
        config.log_directory.clone_from(dir);
    }

    let mut logger = match Logger::from_config(&config) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error creating logger: {e}");
            return ExitCode::FAILURE;
        }
    };

    match &cli.command {
        Command::Log {
            level,
            message,
            color,
            no_date,
        } => {
            let mut opts = crate::logger::LogOptions::new();
            if let Some(token) = color {
                opts = opts.color(token.as_str());
            }
            if *no_date {
                opts = opts.no_date();
            }
            let args: Vec<Value> = vec![json!(message.join(" "))];
            let target = logger.with_options(opts);
            match level {
                LogLevel::Log => target.log(&args),
                LogLevel::Debug => target.debug(&args),
                LogLevel::Info => target.info(&args),
                LogLevel::Warn => target.warn(&args),
                LogLevel::Error => target.error(&args),
            }
            ExitCode::SUCCESS
        }
        Command::Demo => {
            run_demo(&mut logger);
            ExitCode::SUCCESS
        }
    }
}

fn run_demo(logger: &mut Logger) {
    logger.info(&[json!("conlog demo"), json!({"version": env!("CARGO_PKG_VERSION")})]);

    logger.group(&[json!("rendering")]);
    logger.table(&[
        json!({"op": "table", "kind": "box-drawing"}),
        json!({"op": "chart", "kind": "line/vertical"}),
    ]);
    logger.line_chart(&[3.0, 7.0, 2.0, 9.0], None);
    logger.vertical_chart(
        &[4.0, 8.0, 2.0, 6.0],
        &ChartOptions::new().labels(["a", "b", "c", "d"]).height(6),
    );
    logger.group_end();

    logger.count("demo");
    logger.count("demo");
    logger.count_reset("demo");

    logger.time(Logger::DEFAULT_LABEL);
    for i in 0..=10 {
        logger.progress_inline_with("warming up", i, 10, 20);
        std::thread::sleep(std::time::Duration::from_millis(40));
    }
    logger.time_end(Logger::DEFAULT_LABEL);

    logger
        .with_options(crate::logger::LogOptions::new().rainbow())
        .log(&[json!("goodbye")]);
}
