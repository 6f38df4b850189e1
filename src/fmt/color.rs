//! Color tokens and their resolution to terminal escape sequences.
//!
//! A token is either a name from a closed palette (classic ANSI escapes) or a
//! hex literal (24-bit escape). One pure function resolves both; anything
//! unrecognized falls back to white so a typo never breaks rendering.

use std::fmt;
use std::str::FromStr;

/// Terminates any active SGR styling so subsequent text returns to the
/// terminal default.
pub const RESET: &str = "\x1b[0m";

/// Closed palette of classic ANSI foreground colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Gray,
}

impl NamedColor {
    /// The classic 8/16-color escapes render consistently on every terminal,
    /// unlike 24-bit sequences.
    #[must_use]
    pub const fn ansi(self) -> &'static str {
        match self {
            Self::Black => "\x1b[30m",
            Self::Red => "\x1b[31m",
            Self::Green => "\x1b[32m",
            Self::Yellow => "\x1b[33m",
            Self::Blue => "\x1b[34m",
            Self::Magenta => "\x1b[35m",
            Self::Cyan => "\x1b[36m",
            Self::White => "\x1b[37m",
            Self::Gray => "\x1b[90m",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White => "white",
            Self::Gray => "gray",
        }
    }
}

impl fmt::Display for NamedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can distinguish an unknown name from
/// other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorError(String);

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown color: '{}'", self.0)
    }
}

impl std::error::Error for ParseColorError {}

impl FromStr for NamedColor {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "black" => Ok(Self::Black),
            "red" => Ok(Self::Red),
            "green" => Ok(Self::Green),
            "yellow" => Ok(Self::Yellow),
            "blue" => Ok(Self::Blue),
            "magenta" => Ok(Self::Magenta),
            "cyan" => Ok(Self::Cyan),
            "white" => Ok(Self::White),
            "gray" | "grey" => Ok(Self::Gray),
            _ => Err(ParseColorError(s.to_string())),
        }
    }
}

/// A dedicated type prevents mixing up raw u8 triples and documents color
/// intent at the type level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// `const` so palettes can be compile-time constants.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Accepts `#RRGGBB` and shorthand `#RGB` (each digit doubled). Anything
    /// else is rejected rather than guessed at.
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#')?;
        if !hex.is_ascii() {
            return None;
        }
        let expanded: String = match hex.len() {
            3 => hex.chars().flat_map(|c| [c, c]).collect(),
            6 => hex.to_string(),
            _ => return None,
        };

        let r = u8::from_str_radix(&expanded[0..2], 16).ok()?;
        let g = u8::from_str_radix(&expanded[2..4], 16).ok()?;
        let b = u8::from_str_radix(&expanded[4..6], 16).ok()?;

        Some(Self { r, g, b })
    }

    /// Terminals need the raw `\x1b[38;2;R;G;Bm` escape — callers shouldn't
    /// hand-build it.
    #[must_use]
    pub fn fg_ansi(self) -> String {
        format!("\x1b[38;2;{};{};{}m", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Either a symbolic palette entry or a validated hex literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorToken {
    Named(NamedColor),
    Rgb(Rgb),
}

impl ColorToken {
    /// Strict parse — `None` for anything outside the palette or hex grammar.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        if let Ok(named) = token.parse::<NamedColor>() {
            return Some(Self::Named(named));
        }
        Rgb::from_hex(token).map(Self::Rgb)
    }

    /// Lossy parse — unrecognized tokens degrade to white so overlay typos
    /// never break a log line.
    #[must_use]
    pub fn parse_lossy(token: &str) -> Self {
        Self::parse(token).unwrap_or(Self::Named(NamedColor::White))
    }

    #[must_use]
    pub fn ansi(self) -> String {
        match self {
            Self::Named(named) => named.ansi().to_string(),
            Self::Rgb(rgb) => rgb.fg_ansi(),
        }
    }

    /// The single pure resolver: named token or hex literal in, escape
    /// sequence out, white for everything else.
    #[must_use]
    pub fn resolve(token: &str) -> String {
        Self::parse_lossy(token).ansi()
    }
}

impl From<NamedColor> for ColorToken {
    fn from(named: NamedColor) -> Self {
        Self::Named(named)
    }
}

impl From<Rgb> for ColorToken {
    fn from(rgb: Rgb) -> Self {
        Self::Rgb(rgb)
    }
}

impl From<&str> for ColorToken {
    fn from(token: &str) -> Self {
        Self::parse_lossy(token)
    }
}

/// Convenience wrapper — most callers just want "make this text colored"
/// without managing reset sequences.
#[must_use]
pub fn colorize(text: &str, color: ColorToken) -> String {
    let fg = color.ansi();
    format!("{fg}{text}{RESET}")
}
