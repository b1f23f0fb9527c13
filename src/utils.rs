//! Shared utility functions used across modules.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::constants::SPINNER_CHARS;

/// Truncate a string to `max_width` terminal columns, appending "..." if truncated.
///
/// Titles from the backend are mostly CJK, so width is measured in columns
/// rather than bytes and never splits a character.
pub fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let (budget, suffix) = if max_width > 3 {
        (max_width - 3, "...")
    } else {
        (max_width, "")
    };
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push_str(suffix);
    out
}

/// Right-pad with spaces to exactly `width` columns (truncating first if needed).
pub fn pad_to_width(s: &str, width: usize) -> String {
    let cut = truncate_str(s, width);
    let pad = width.saturating_sub(cut.width());
    format!("{}{}", cut, " ".repeat(pad))
}

/// Get the spinner character for the current tick.
pub fn spinner_char(tick: u64) -> &'static str {
    SPINNER_CHARS[(tick % SPINNER_CHARS.len() as u64) as usize]
}

/// Get animated loading dots for the current tick.
pub fn loading_dots(tick: u64) -> &'static str {
    match tick % 4 {
        0 => "",
        1 => ".",
        2 => "..",
        _ => "...",
    }
}
