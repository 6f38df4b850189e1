//! Progress bar construction, shared by the standalone and inline renderers.

use crate::fmt::{NamedColor, RESET};

/// Bar width when the caller doesn't specify one.
pub const DEFAULT_BAR_LEN: usize = 20;

/// `label <filled><empty> pct% (current/total)` — the colored payload both
/// progress operations render. A zero total counts as zero progress rather
/// than a division fault; overshoot past `total` saturates the bar.
#[must_use]
pub fn bar_line(label: &str, current: u64, total: u64, bar_len: usize) -> String {
    #[allow(clippy::cast_precision_loss)]
    let ratio = if total == 0 {
        0.0
    } else {
        current as f64 / total as f64
    };

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let filled = ((ratio * bar_len as f64).floor() as usize).min(bar_len);
    let empty = bar_len - filled;

    let bar = format!(
        "{}{}{}{}{RESET}",
        NamedColor::Green.ansi(),
        "█".repeat(filled),
        NamedColor::Gray.ansi(),
        "─".repeat(empty),
    );
    let pct = format!("{:.1}%", ratio * 100.0);

    format!("{label} {bar} {pct} ({current}/{total})")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fmt::strip_ansi;

    #[test]
    fn half_full_bar_splits_segments() {
        let line = bar_line("x", 5, 10, 10);
        let plain = strip_ansi(&line);
        assert_eq!(plain, "x █████───── 50.0% (5/10)");
    }

    #[test]
    fn zero_total_is_zero_progress() {
        let line = bar_line("x", 0, 0, 10);
        let plain = strip_ansi(&line);
        assert_eq!(plain, "x ────────── 0.0% (0/0)");
    }

    #[test]
    fn overshoot_saturates() {
        let line = bar_line("x", 15, 10, 10);
        let plain = strip_ansi(&line);
        assert!(plain.starts_with("x ██████████ 150.0%"));
    }
}
