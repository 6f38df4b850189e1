//! One-shot formatting overlay.
//!
//! Stored by `with_options` and consumed by exactly the next logging call,
//! whichever operation that turns out to be. An empty overlay behaves like
//! none at all.

use crate::fmt::ColorToken;

/// Formatting options for a single logging call. Color tokens are parsed
/// lossily at construction — a typo degrades to white rather than erroring.
#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    /// Single color for the tag and message, overriding the level default.
    pub color: Option<ColorToken>,
    /// Skip the timestamp prefix and the audit file for this line.
    pub no_date: bool,
    /// Per-character six-color cycle across the message.
    pub rainbow: bool,
    /// Per-character cycle over these tokens; takes precedence over
    /// `rainbow` and `color` when non-empty.
    pub color_map: Vec<ColorToken>,
}

impl LogOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn color(mut self, token: impl Into<ColorToken>) -> Self {
        self.color = Some(token.into());
        self
    }

    #[must_use]
    pub const fn no_date(mut self) -> Self {
        self.no_date = true;
        self
    }

    #[must_use]
    pub const fn rainbow(mut self) -> Self {
        self.rainbow = true;
        self
    }

    #[must_use]
    pub fn color_map<I, T>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ColorToken>,
    {
        self.color_map = tokens.into_iter().map(Into::into).collect();
        self
    }
}
