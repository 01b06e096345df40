//! Grapheme cluster iteration and cell-boundary splitting.

use crate::unicode::width::{WidthMethod, grapheme_width};
use unicode_segmentation::UnicodeSegmentation;

/// Iterate over grapheme clusters paired with their cell width.
pub fn grapheme_widths(s: &str, method: WidthMethod) -> impl Iterator<Item = (&str, usize)> {
    s.graphemes(true)
        .map(move |g| (g, grapheme_width(g, method)))
}

/// Split `text` so that the left part is exactly `cut` cells wide.
///
/// Grapheme clusters are never broken. When a wide cluster straddles the cut,
/// it is replaced by blank cells on both sides so the widths still add up:
/// `width(left) == min(cut, width(text))` and
/// `width(left) + width(right) == width(text)`.
#[must_use]
pub fn split_at_cell(text: &str, cut: usize, method: WidthMethod) -> (String, String) {
    if cut == 0 {
        return (String::new(), text.to_string());
    }

    let mut pos = 0;
    for (byte_offset, grapheme) in text.grapheme_indices(true) {
        if pos == cut {
            return (
                text[..byte_offset].to_string(),
                text[byte_offset..].to_string(),
            );
        }
        let width = grapheme_width(grapheme, method);
        let end = pos + width;
        if end > cut {
            // Straddling glyph: blank it out on both sides of the cut.
            let rest = &text[byte_offset + grapheme.len()..];
            let mut left = text[..byte_offset].to_string();
            left.push_str(&" ".repeat(cut - pos));
            let mut right = " ".repeat(end - cut);
            right.push_str(rest);
            return (left, right);
        }
        pos = end;
    }

    (text.to_string(), String::new())
}
