//! The output router: every public operation funnels through here, where
//! overlays are consumed, arguments serialized, the terminal line colorized,
//! and the plain twin appended to the rotating audit file.

mod builder;
mod options;

pub use builder::LoggerBuilder;
pub use options::LogOptions;

use crate::config::LoggerConfig;
use crate::error::Error;
use crate::fmt::{
    ColorToken, InspectOptions, NamedColor, RESET, color_mapify, inspect, rainbowify,
    stringify_arg,
};
use crate::level::Level;
use crate::output::{FileSink, Term};
use crate::render::{self, ChartOptions, DEFAULT_BAR_LEN};
use crate::stamp::TimestampCache;
use chrono::{DateTime, Local};
use serde_json::Value;
use std::backtrace::Backtrace;
use std::collections::HashMap;
use std::path::Path;
use std::time::Instant;

/// Console-style logging engine.
///
/// All operations take `&mut self`: the borrow checker enforces the
/// single-writer assumption, so file-append order always matches call order
/// without locks. Counters, timers, and all rendering state are owned by the
/// instance — independent loggers never interfere.
#[derive(Debug)]
pub struct Logger {
    colorize_objects: bool,
    log_dir: std::path::PathBuf,
    /// One-shot overlay; taken and cleared by the very next operation.
    pending: Option<LogOptions>,
    stamp: TimestampCache,
    sink: FileSink,
    term: Term,
    counters: HashMap<String, u64>,
    timers: HashMap<String, Instant>,
    /// True only while an inline progress render is mid-line.
    inline_active: bool,
    group_depth: usize,
}

impl Logger {
    /// Label used by console semantics when the caller doesn't name one.
    pub const DEFAULT_LABEL: &'static str = "default";

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Builds directly from a loaded configuration.
    ///
    /// # Errors
    /// Fails when the log directory cannot be created or resolved.
    pub fn from_config(config: &LoggerConfig) -> Result<Self, Error> {
        LoggerBuilder::new().config(config.clone()).build()
    }

    /// Stores a one-shot overlay for the next logging call and returns the
    /// logger for chaining: `logger.with_options(opts).warn(...)`.
    pub fn with_options(&mut self, opts: LogOptions) -> &mut Self {
        self.pending = Some(opts);
        self
    }

    /// Directory the rotating audit files land in.
    #[must_use]
    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    /// Path of the audit file the last persisted line went to, if any line
    /// has been persisted yet.
    #[must_use]
    pub fn audit_file(&self) -> Option<&Path> {
        self.sink.current_path()
    }

    // ---- leveled operations ----------------------------------------------

    pub fn log(&mut self, args: &[Value]) {
        let opts = self.begin();
        self.leveled(Level::Log, opts, args);
    }

    pub fn debug(&mut self, args: &[Value]) {
        let opts = self.begin();
        self.leveled(Level::Debug, opts, args);
    }

    pub fn info(&mut self, args: &[Value]) {
        let opts = self.begin();
        self.leveled(Level::Info, opts, args);
    }

    pub fn warn(&mut self, args: &[Value]) {
        let opts = self.begin();
        self.leveled(Level::Warn, opts, args);
    }

    pub fn error(&mut self, args: &[Value]) {
        let opts = self.begin();
        self.leveled(Level::Error, opts, args);
    }

    // Per-call alternatives to the `with_options` chain: same routing, no
    // state shared between calls. Any latent overlay is still consumed — the
    // explicit argument wins.

    pub fn log_with(&mut self, opts: LogOptions, args: &[Value]) {
        let _ = self.begin();
        self.leveled(Level::Log, Some(opts), args);
    }

    pub fn debug_with(&mut self, opts: LogOptions, args: &[Value]) {
        let _ = self.begin();
        self.leveled(Level::Debug, Some(opts), args);
    }

    pub fn info_with(&mut self, opts: LogOptions, args: &[Value]) {
        let _ = self.begin();
        self.leveled(Level::Info, Some(opts), args);
    }

    pub fn warn_with(&mut self, opts: LogOptions, args: &[Value]) {
        let _ = self.begin();
        self.leveled(Level::Warn, Some(opts), args);
    }

    pub fn error_with(&mut self, opts: LogOptions, args: &[Value]) {
        let _ = self.begin();
        self.leveled(Level::Error, Some(opts), args);
    }

    fn leveled(&mut self, level: Level, opts: Option<LogOptions>, args: &[Value]) {
        let msg = self.join_args(args);
        self.emit(level, opts, &msg);
    }

    // ---- auxiliary console operations ------------------------------------

    /// A truthy condition produces no output at all; a falsy one reports an
    /// error-level line. Never panics.
    pub fn assert(&mut self, condition: bool, args: &[Value]) {
        let opts = self.begin();
        if condition {
            return;
        }
        let detail = if args.is_empty() {
            "Assertion failed".to_string()
        } else {
            self.join_args(args)
        };
        self.emit(Level::Assert, opts, &format!("Assertion failed: {detail}"));
    }

    /// Clears the terminal, then logs (and persists) a marker line.
    pub fn clear(&mut self) {
        let opts = self.begin();
        self.term.raw("\x1b[2J\x1b[H");
        self.emit(Level::Clear, opts, "----- CONSOLE CLEARED -----");
    }

    /// Increments and reports the label's counter, lazily starting at zero.
    pub fn count(&mut self, label: &str) {
        let opts = self.begin();
        let value = self.counters.entry(label.to_string()).or_insert(0);
        *value += 1;
        let msg = format!("{label}: {}", *value);
        self.emit(Level::Count, opts, &msg);
    }

    /// Resets the label's counter to zero and reports it.
    pub fn count_reset(&mut self, label: &str) {
        let opts = self.begin();
        self.counters.insert(label.to_string(), 0);
        self.emit(Level::Count, opts, &format!("{label}: 0 (reset)"));
    }

    /// Deep-inspects a single value; `opts` can override the configured
    /// object colorization for this call.
    pub fn dir(&mut self, value: &Value, opts: Option<InspectOptions>) {
        let overlay = self.begin();
        let colors = opts
            .and_then(|o| o.colors)
            .unwrap_or(self.colorize_objects);
        let text = inspect(value, colors);
        self.emit(Level::Dir, overlay, &text);
    }

    pub fn dirxml(&mut self, args: &[Value]) {
        let opts = self.begin();
        let msg = self.join_args(args);
        self.emit(Level::Dirxml, opts, &msg);
    }

    /// Opens a group: subsequent terminal lines indent one step deeper until
    /// the matching `group_end`. The audit file is never indented.
    pub fn group(&mut self, args: &[Value]) {
        let opts = self.begin();
        let msg = self.join_args(args);
        self.emit(Level::Group, opts, &msg);
        self.group_depth += 1;
    }

    /// Terminals have no collapsed state — this behaves like `group` under a
    /// distinct tag.
    pub fn group_collapsed(&mut self, args: &[Value]) {
        let opts = self.begin();
        let msg = self.join_args(args);
        self.emit(Level::GroupCollapsed, opts, &msg);
        self.group_depth += 1;
    }

    /// Closes the innermost group; a stray call without an open group is a
    /// no-op on the depth.
    pub fn group_end(&mut self) {
        let opts = self.begin();
        self.emit(Level::GroupEnd, opts, "(group end)");
        self.group_depth = self.group_depth.saturating_sub(1);
    }

    /// Renders a box-drawing table on the terminal. Only a one-line marker is
    /// persisted — the table body is terminal-only.
    pub fn table(&mut self, rows: &[Value]) {
        let opts = self.begin();
        if rows.is_empty() {
            self.emit(Level::Table, opts, "(empty table)");
            return;
        }

        let now = Local::now();
        let lines = render::table::render(rows);
        self.emit_block(now, &lines);
        self.persist_summary(now, Level::Table, &format!("table with {} rows", rows.len()));
    }

    /// Records the start instant for the label.
    pub fn time(&mut self, label: &str) {
        let opts = self.begin();
        self.timers.insert(label.to_string(), Instant::now());
        self.emit(Level::Time, opts, &format!("Timer \"{label}\" started"));
    }

    /// Reports elapsed time without stopping the timer. An unknown label is
    /// a red diagnostic line, not an error.
    pub fn time_log(&mut self, label: &str, extra: &[Value]) {
        let opts = self.begin();
        let Some(start) = self.timers.get(label) else {
            self.emit_colored(Level::TimeLog, opts, NamedColor::Red, &missing_label(label));
            return;
        };
        let elapsed = start.elapsed().as_millis();
        let mut msg = format!("Timer \"{label}\": {elapsed}ms");
        if !extra.is_empty() {
            msg.push(' ');
            msg.push_str(&self.join_args(extra));
        }
        self.emit(Level::TimeLog, opts, &msg);
    }

    /// Reports elapsed time and removes the timer. An unknown label is a red
    /// diagnostic line, not an error.
    pub fn time_end(&mut self, label: &str) {
        let opts = self.begin();
        let Some(start) = self.timers.remove(label) else {
            self.emit_colored(Level::TimeEnd, opts, NamedColor::Red, &missing_label(label));
            return;
        };
        let elapsed = start.elapsed().as_millis();
        let msg = format!("Timer \"{label}\" ended: {elapsed}ms");
        self.emit(Level::TimeEnd, opts, &msg);
    }

    pub fn time_stamp(&mut self, label: Option<&str>) {
        let opts = self.begin();
        let msg = label.map_or_else(
            || "Timestamp".to_string(),
            |l| format!("Timestamp [{l}]"),
        );
        self.emit(Level::Timestamp, opts, &msg);
    }

    /// Logs the message with a captured backtrace appended.
    pub fn trace(&mut self, args: &[Value]) {
        let opts = self.begin();
        let joined = self.join_args(args);
        let backtrace = Backtrace::force_capture();
        let msg = format!("{joined}\nStack Trace:\n{backtrace}");
        self.emit(Level::Trace, opts, &msg);
    }

    pub fn profile(&mut self, label: &str) {
        let opts = self.begin();
        self.emit(Level::Profile, opts, &format!("Profile \"{label}\" started"));
    }

    pub fn profile_end(&mut self, label: &str) {
        let opts = self.begin();
        self.emit(Level::ProfileEnd, opts, &format!("Profile \"{label}\" ended"));
    }

    // ---- progress --------------------------------------------------------

    /// Full-line progress report through the normal router/file path.
    pub fn progress(&mut self, label: &str, current: u64, total: u64) {
        self.progress_with(label, current, total, DEFAULT_BAR_LEN);
    }

    pub fn progress_with(&mut self, label: &str, current: u64, total: u64, bar_len: usize) {
        let _ = self.begin();
        let line = render::progress::bar_line(label, current, total, bar_len);
        self.emit(Level::Progress, None, &line);
    }

    /// Redraws one terminal line in place via carriage return — no newline
    /// and no file persistence until `current` reaches `total`, at which
    /// point exactly one newline is emitted.
    pub fn progress_inline(&mut self, label: &str, current: u64, total: u64) {
        self.progress_inline_with(label, current, total, DEFAULT_BAR_LEN);
    }

    pub fn progress_inline_with(&mut self, label: &str, current: u64, total: u64, bar_len: usize) {
        self.inline_active = true;
        self.pending = None;

        let line = render::progress::bar_line(label, current, total, bar_len);
        let cyan = NamedColor::Cyan.ansi();
        self.term.inline(&format!("{cyan}[PROGRESS] {line}{RESET}"));

        if current >= total {
            self.term.newline();
            self.inline_active = false;
        }
    }

    // ---- charts ----------------------------------------------------------

    /// One horizontal bar row per value; the whole chart is terminal-only
    /// with a one-line persisted summary.
    pub fn line_chart(&mut self, values: &[f64], color: Option<&str>) {
        let opts = self.begin();
        if values.is_empty() {
            self.emit(Level::Log, opts, "(empty chart)");
            return;
        }

        let seq = color.map_or_else(
            || NamedColor::Green.ansi().to_string(),
            ColorToken::resolve,
        );
        let now = Local::now();
        let lines = render::chart::render_line(values, &seq);
        self.emit_block(now, &lines);

        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        self.persist_summary(
            now,
            Level::Log,
            &format!("line chart with {} bars (max={max})", values.len()),
        );
    }

    /// Scaled vertical chart with grid ticks and optional per-column colors
    /// and labels; terminal-only with a one-line persisted summary.
    pub fn vertical_chart(&mut self, values: &[f64], opts: &ChartOptions) {
        let overlay = self.begin();
        if values.is_empty() {
            self.emit(Level::Log, overlay, "(no data for vertical chart)");
            return;
        }

        let now = Local::now();
        let lines = render::chart::render_vertical(values, opts);
        self.emit_block(now, &lines);

        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        self.persist_summary(
            now,
            Level::Log,
            &format!("vertical chart: {} bars (max={max})", values.len()),
        );
    }

    // ---- router internals ------------------------------------------------

    /// Common prologue: close an active inline render, then take the overlay
    /// so it is consumed by exactly this call.
    fn begin(&mut self) -> Option<LogOptions> {
        self.finish_inline();
        self.pending.take()
    }

    fn finish_inline(&mut self) {
        if self.inline_active {
            self.term.newline();
            self.inline_active = false;
        }
    }

    fn join_args(&self, args: &[Value]) -> String {
        args.iter()
            .map(|v| stringify_arg(v, self.colorize_objects))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn emit(&mut self, level: Level, opts: Option<LogOptions>, msg: &str) {
        self.emit_colored(level, opts, level.default_color(), msg);
    }

    /// Renders one routed line: overlay resolution, persistence, terminal
    /// emit. `fallback` is the color used when the overlay names none.
    fn emit_colored(
        &mut self,
        level: Level,
        opts: Option<LogOptions>,
        fallback: NamedColor,
        msg: &str,
    ) {
        let opts = opts.unwrap_or_default();
        let now = Local::now();

        let color_seq = opts
            .color
            .map_or_else(|| fallback.ansi().to_string(), ColorToken::ansi);
        let body = if opts.color_map.is_empty() {
            if opts.rainbow {
                rainbowify(msg)
            } else {
                format!("{msg}{RESET}")
            }
        } else {
            color_mapify(msg, &opts.color_map)
        };

        if !opts.no_date {
            let plain = self.stamp.plain(now).to_string();
            if let Err(e) = self.sink.persist(now, &plain, level, &body) {
                self.report_sink_error(&e);
            }
        }

        let stamp = if opts.no_date {
            String::new()
        } else {
            self.stamp.colored(now).to_string()
        };
        let indent = "  ".repeat(self.group_depth);
        let tag = level.as_str();
        self.term
            .line(&format!("{indent}{stamp}{color_seq}[{tag}] {body}"));
    }

    /// Terminal-only block (table/chart body): a plain timestamp line, then
    /// the rendered lines, all group-indented.
    fn emit_block(&mut self, now: DateTime<Local>, lines: &[String]) {
        let indent = "  ".repeat(self.group_depth);
        let stamp = self.stamp.plain(now).to_string();
        self.term.line(&format!("{indent}{stamp}"));
        for line in lines {
            self.term.line(&format!("{indent}{line}"));
        }
    }

    fn persist_summary(&mut self, now: DateTime<Local>, level: Level, msg: &str) {
        let plain = self.stamp.plain(now).to_string();
        if let Err(e) = self.sink.persist(now, &plain, level, msg) {
            self.report_sink_error(&e);
        }
    }

    /// A failed append must stay visible without taking down the caller —
    /// one red line on the terminal, nothing propagated.
    fn report_sink_error(&mut self, e: &std::io::Error) {
        let red = NamedColor::Red.ansi();
        self.term
            .line(&format!("{red}[LOGGER] audit write failed: {e}{RESET}"));
    }
}

fn missing_label(label: &str) -> String {
    format!("No such label \"{label}\"")
}
