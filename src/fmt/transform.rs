//! Whole-message text transforms: per-character color cycling and ANSI
//! stripping for the audit trail.

use super::color::{ColorToken, NamedColor, RESET};
use regex::Regex;
use std::sync::OnceLock;

/// Matches SGR escape sequences (`\x1b[...m`) — the only kind this crate emits.
fn ansi_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new("\x1b\\[[0-9;]*m").expect("static pattern"))
}

/// The persisted audit trail must stay plain text — every line passes through
/// here before it reaches a file.
#[must_use]
pub fn strip_ansi(text: &str) -> String {
    ansi_pattern().replace_all(text, "").into_owned()
}

/// Cycles the given tokens across the characters of `text`, one escape per
/// character, terminated by a single reset. Callers guarantee `tokens` is
/// non-empty.
#[must_use]
pub fn color_mapify(text: &str, tokens: &[ColorToken]) -> String {
    let mut out = String::with_capacity(text.len() * 8);
    for (i, ch) in text.chars().enumerate() {
        out.push_str(&tokens[i % tokens.len()].ansi());
        out.push(ch);
    }
    out.push_str(RESET);
    out
}

/// Fixed six-color cycle for per-character rainbow rendering.
const RAINBOW: [NamedColor; 6] = [
    NamedColor::Red,
    NamedColor::Green,
    NamedColor::Yellow,
    NamedColor::Blue,
    NamedColor::Magenta,
    NamedColor::Cyan,
];

#[must_use]
pub fn rainbowify(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 6);
    for (i, ch) in text.chars().enumerate() {
        out.push_str(RAINBOW[i % RAINBOW.len()].ansi());
        out.push(ch);
    }
    out.push_str(RESET);
    out
}
