//! Terminal chart renderers: horizontal bars (one row per value) and a
//! scaled vertical chart with grid ticks, an x-axis rule, and labels.

use crate::fmt::{ColorToken, NamedColor, RESET};

/// Knobs for [`render_vertical`]. Zero height or ticks fall back to defaults
/// rather than rendering a degenerate chart.
#[derive(Debug, Clone)]
pub struct ChartOptions {
    pub labels: Vec<String>,
    pub colors: Vec<String>,
    pub height: usize,
    pub y_ticks: usize,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            labels: Vec::new(),
            colors: Vec::new(),
            height: 10,
            y_ticks: 5,
        }
    }
}

impl ChartOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// One label per column, rendered under the x-axis.
    #[must_use]
    pub fn labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// One color token per column; columns past the end use the default.
    #[must_use]
    pub fn colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors = colors.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub const fn height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }

    #[must_use]
    pub const fn y_ticks(mut self, y_ticks: usize) -> Self {
        self.y_ticks = y_ticks;
        self
    }
}

/// One row per value: `index: <colored blocks> (value)`. `color_seq` is an
/// already-resolved escape prefix applied to every bar.
#[must_use]
pub fn render_line(values: &[f64], color_seq: &str) -> Vec<String> {
    values
        .iter()
        .enumerate()
        .map(|(idx, val)| {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let blocks = "█".repeat(val.max(0.0) as usize);
            format!("{idx}: {color_seq}{blocks}{RESET} ({val})")
        })
        .collect()
}

/// Scaled column chart, drawn top row first. Bars fill where the column's
/// scaled height reaches the row; tick rows show a light grid marker in the
/// gaps.
#[must_use]
pub fn render_vertical(values: &[f64], opts: &ChartOptions) -> Vec<String> {
    let height = if opts.height > 0 { opts.height } else { 10 };
    let y_ticks = if opts.y_ticks > 0 { opts.y_ticks } else { 5 };

    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let effective_max = if max == 0.0 { 1.0 } else { max };

    #[allow(clippy::cast_precision_loss)]
    let step = height as f64 / y_ticks as f64;

    let mut lines = Vec::with_capacity(height + 2);
    for row in (1..=height).rev() {
        #[allow(clippy::cast_precision_loss)]
        let row_f = row as f64;
        let on_tick = (1..=y_ticks).any(|k| {
            #[allow(clippy::cast_precision_loss)]
            let grid_y = k as f64 * step;
            (grid_y - row_f).abs() < 0.5
        });

        let mut line = String::new();
        for (col, &val) in values.iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let bar_height = (val * height as f64 / effective_max).round();
            if val > 0.0 && row_f <= bar_height {
                let seq = opts
                    .colors
                    .get(col)
                    .map_or_else(|| NamedColor::Yellow.ansi().to_string(), |c| {
                        ColorToken::resolve(c)
                    });
                line.push_str(&format!("{seq}█{RESET} "));
            } else if on_tick {
                line.push_str(&format!("{}·{RESET} ", NamedColor::Gray.ansi()));
            } else {
                line.push_str("  ");
            }
        }
        lines.push(line);
    }

    // X-axis rule: a tick under every column, the first replaced by the corner.
    let axis: String = "┬ ".repeat(values.len());
    lines.push(format!("└{}", axis.chars().skip(1).collect::<String>()));

    if !opts.labels.is_empty() {
        let mut label_line = String::new();
        for i in 0..values.len() {
            let label = opts.labels.get(i).map_or("", String::as_str);
            label_line.push_str(&format!("{label:<2} "));
        }
        lines.push(label_line);
    }

    lines
}
