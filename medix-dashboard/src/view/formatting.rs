//! Shared formatting utilities for the painted views.

use crate::progress::StageCounts;

/// Format stage counts as "ICO 2 · PNG 6 · RAW 10".
pub fn format_counts(counts: &StageCounts) -> String {
    format!(
        "ICO {} · PNG {} · RAW {}",
        counts.ico, counts.png, counts.raw
    )
}

/// Format a count with a singular or plural noun.
pub fn format_quantity(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

/// Display width of a string, counting each char as one cell.
pub fn display_width(text: &str) -> usize {
    text.chars().count()
}

/// Pad `text` on the right to `width` cells.
pub fn pad_right(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(display_width(text));
    format!("{}{}", text, " ".repeat(pad))
}
