//! Formatting utilities used for CLI and export outputs.

use unicode_width::UnicodeWidthStr;

pub const MILLIS_PER_HOUR: f64 = 3_600_000.0;

pub fn millis_to_hours(millis: i64) -> f64 {
    millis as f64 / MILLIS_PER_HOUR
}

/// `H:MM`, hours not wrapped at 24.
pub fn format_duration(millis: i64) -> String {
    let total_minutes = millis / 60_000;
    format!("{}:{:02}", total_minutes / 60, total_minutes % 60)
}

/// Hours as a decimal with two fraction digits and a `.` separator.
pub fn format_hours_decimal(millis: i64) -> String {
    format_decimal(millis_to_hours(millis))
}

pub fn format_decimal(value: f64) -> String {
    format!("{:.2}", value)
}

pub fn format_currency(value: f64, symbol: &str) -> String {
    format!("{:.2} {}", value, symbol)
}

/// Pad on the right up to `width` terminal columns.
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}

pub fn pad_left(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(width - w), s)
    }
}
