//! Text helpers for drawing note cards.

use chrono::{DateTime, Utc};

/// Number of content characters shown on a card before it is cut off.
pub const PREVIEW_LENGTH: usize = 50;

/// Marker appended to a truncated preview.
pub const ELLIPSIS: &str = "...";

/// Escapes text for insertion into HTML markup, including attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Returns the first [`PREVIEW_LENGTH`] characters of `content`, followed by [`ELLIPSIS`] if
/// anything was cut off.
pub fn preview(content: &str) -> String {
    match content.char_indices().nth(PREVIEW_LENGTH) {
        Some((end, _)) => format!("{}{ELLIPSIS}", &content[..end]),
        None => content.to_string(),
    }
}

/// Describes when a note was last updated, relative to `now`.
///
/// Same-day and previous-day timestamps get a clock time, the rest of the week a day count,
/// and anything older a calendar date such as `Jan 5, 2024`.
pub fn format_relative(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let days = (now - timestamp).num_days().abs();
    match days {
        0 => format!("Today at {}", timestamp.format("%-I:%M %p")),
        1 => format!("Yesterday at {}", timestamp.format("%-I:%M %p")),
        2..=6 => format!("{days} days ago"),
        _ => timestamp.format("%b %-d, %Y").to_string(),
    }
}
