//! Formatting utilities used for terminal and export outputs.

use unicode_width::UnicodeWidthStr;

/// Pad to a display width (labels may contain wide characters).
pub fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(UnicodeWidthStr::width(s));
    format!("{s}{}", " ".repeat(fill))
}

/// Fractional hours as `HHh MMm` (short: `HH:MM`), rounded to the minute.
pub fn hours2readable(hours: f64, short: bool) -> String {
    let total = (hours * 60.0).round().max(0.0) as i64;
    let (h, m) = (total / 60, total % 60);

    if short {
        format!("{h:02}:{m:02}")
    } else {
        format!("{h:02}h {m:02}m")
    }
}

/// Hour-of-day as clock time, `24` rendered as `24:00`.
pub fn clock(hour: f64) -> String {
    hours2readable(hour, true)
}

/// Trim trailing zeros for compact numeric output (`6.50` → `6.5`, `2.0` → `2`).
pub fn compact(n: f64) -> String {
    let s = format!("{n:.4}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}
