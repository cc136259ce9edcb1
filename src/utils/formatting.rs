//! Formatting utilities used for CLI and report outputs.

use crate::core::calculator::billing::{split_hm, whole_minutes};
use unicode_width::UnicodeWidthStr;

/// Left-align `s` to `width` terminal columns (wide glyphs count double).
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{s}{}", " ".repeat(width - w))
    }
}

/// `4500` → `"01:15"`
pub fn hhmm(seconds: u64) -> String {
    let (h, m) = split_hm(seconds);
    format!("{h:02}:{m:02}")
}

/// `4500` → `"1h 15m"`
pub fn hours_minutes(seconds: u64) -> String {
    let (h, m) = split_hm(seconds);
    format!("{h}h {m}m")
}

/// `4500` → `"75 min"`
pub fn minutes_label(seconds: u64) -> String {
    format!("{} min", whole_minutes(seconds))
}
