//! Deep value inspection — renders structured arguments as human-readable
//! text, the way an interactive console would.
//!
//! Values are `serde_json::Value` trees, so inspection is cycle-safe by
//! construction and depth is unbounded.

use super::color::{NamedColor, RESET};
use serde_json::Value;

/// Containers whose compact rendering exceeds this width break across lines.
const BREAK_WIDTH: usize = 72;

const INDENT: &str = "  ";

/// Per-call inspection overrides. A `None` field falls back to the logger's
/// configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct InspectOptions {
    /// Overrides the configured `colorize_objects` for this call.
    pub colors: Option<bool>,
}

impl InspectOptions {
    #[must_use]
    pub const fn new() -> Self {
        Self { colors: None }
    }

    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.colors = Some(enabled);
        self
    }
}

/// Renders a value tree in console-inspector style: bare keys, quoted
/// strings, compact on one line when short, indented across lines when not.
#[must_use]
pub fn inspect(value: &Value, colorize: bool) -> String {
    let compact = render_compact(value, colorize);
    if visible_len(&compact) <= BREAK_WIDTH {
        return compact;
    }
    render_pretty(value, colorize, 0)
}

/// How a logging argument becomes message text: scalars stringify plainly
/// (top-level strings unquoted), containers go through the inspector.
#[must_use]
pub fn stringify_arg(value: &Value, colorize: bool) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null | Value::Bool(_) | Value::Number(_) => value.to_string(),
        Value::Array(_) | Value::Object(_) => inspect(value, colorize),
    }
}

fn render_compact(value: &Value, colorize: bool) -> String {
    match value {
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
            scalar(value, colorize)
        }
        Value::Array(items) => {
            if items.is_empty() {
                return "[]".to_string();
            }
            let inner: Vec<String> = items.iter().map(|v| render_compact(v, colorize)).collect();
            format!("[ {} ]", inner.join(", "))
        }
        Value::Object(map) => {
            if map.is_empty() {
                return "{}".to_string();
            }
            let inner: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("{}: {}", key(k), render_compact(v, colorize)))
                .collect();
            format!("{{ {} }}", inner.join(", "))
        }
    }
}

fn render_pretty(value: &Value, colorize: bool, depth: usize) -> String {
    // Re-check per node: a long object can still hold short sub-containers.
    let compact = render_compact(value, colorize);
    if visible_len(&compact) <= BREAK_WIDTH {
        return compact;
    }

    let pad = INDENT.repeat(depth + 1);
    let close_pad = INDENT.repeat(depth);
    match value {
        Value::Array(items) => {
            let inner: Vec<String> = items
                .iter()
                .map(|v| format!("{pad}{}", render_pretty(v, colorize, depth + 1)))
                .collect();
            format!("[\n{}\n{close_pad}]", inner.join(",\n"))
        }
        Value::Object(map) => {
            let inner: Vec<String> = map
                .iter()
                .map(|(k, v)| {
                    format!("{pad}{}: {}", key(k), render_pretty(v, colorize, depth + 1))
                })
                .collect();
            format!("{{\n{}\n{close_pad}}}", inner.join(",\n"))
        }
        _ => compact,
    }
}

fn scalar(value: &Value, colorize: bool) -> String {
    let (text, color) = match value {
        Value::Null => ("null".to_string(), NamedColor::Gray),
        Value::Bool(b) => (b.to_string(), NamedColor::Yellow),
        Value::Number(n) => (n.to_string(), NamedColor::Yellow),
        Value::String(s) => (format!("'{}'", s.replace('\'', "\\'")), NamedColor::Green),
        _ => unreachable!("scalar called on container"),
    };
    if colorize {
        format!("{}{text}{RESET}", color.ansi())
    } else {
        text
    }
}

/// Identifier-like keys render bare; everything else is quoted.
fn key(k: &str) -> String {
    let ident = !k.is_empty()
        && k.chars().next().is_some_and(|c| c.is_alphabetic() || c == '_')
        && k.chars().all(|c| c.is_alphanumeric() || c == '_');
    if ident {
        k.to_string()
    } else {
        format!("'{k}'")
    }
}

/// Escape sequences occupy no columns — width decisions must ignore them.
fn visible_len(text: &str) -> usize {
    super::transform::strip_ansi(text).chars().count()
}
