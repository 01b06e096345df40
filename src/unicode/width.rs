//! Display width calculation for terminal cells.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Width calculation method for ambiguous-width characters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WidthMethod {
    /// POSIX-like wcwidth: ambiguous width = 1.
    #[default]
    WcWidth,
    /// Unicode East Asian Width: ambiguous width = 2.
    Unicode,
}

/// Get the display width of a string in terminal cells using a specific method.
///
/// The width is the sum of [`grapheme_width`] over the string's grapheme
/// clusters, so any split at a cluster boundary gives two parts whose widths
/// add up to the whole. ASCII-only strings take a fast path with the same
/// result: printable characters are one cell, control characters are zero.
#[must_use]
pub fn display_width_with_method(s: &str, method: WidthMethod) -> usize {
    if s.is_ascii() {
        return ascii_width(s);
    }
    s.graphemes(true).map(|g| grapheme_width(g, method)).sum()
}

/// Cell width of one grapheme cluster.
///
/// Control characters take no cells. Everything else is measured on its own,
/// so context-dependent shaping across clusters (such as a lam-alef ligature)
/// is not applied.
#[must_use]
pub fn grapheme_width(grapheme: &str, method: WidthMethod) -> usize {
    if grapheme.is_ascii() {
        return ascii_width(grapheme);
    }
    if grapheme.starts_with(char::is_control) {
        return 0;
    }
    match method {
        WidthMethod::WcWidth => UnicodeWidthStr::width(grapheme),
        WidthMethod::Unicode => UnicodeWidthStr::width_cjk(grapheme),
    }
}

fn ascii_width(s: &str) -> usize {
    s.bytes().filter(|b| (0x20..0x7f).contains(b)).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn display_width(s: &str) -> usize {
        display_width_with_method(s, WidthMethod::WcWidth)
    }

    #[test]
    fn test_ascii_width() {
        assert_eq!(display_width("hello"), 5);
        assert_eq!(display_width("tab\there"), 7);
        assert_eq!(grapheme_width("a", WidthMethod::WcWidth), 1);
    }

    #[test]
    fn test_cjk_width() {
        assert_eq!(display_width("漢字"), 4);
        assert_eq!(grapheme_width("漢", WidthMethod::WcWidth), 2);
    }

    #[test]
    fn test_emoji_width() {
        assert_eq!(display_width("😀"), 2);
    }

    #[test]
    fn test_combining_is_zero_width() {
        assert_eq!(grapheme_width("\u{0301}", WidthMethod::WcWidth), 0);
        assert_eq!(display_width("e\u{0301}"), 1);
    }

    #[test]
    fn test_control_chars_are_zero_width_everywhere() {
        assert_eq!(display_width("\u{1b}"), 0);
        assert_eq!(display_width("a\u{1b}漢"), 3);
        assert_eq!(display_width("\u{85}é"), 1);
    }

    #[test]
    fn test_width_is_additive_over_clusters() {
        for text in ["xلاy", "a\u{1b}漢", "e\u{0301}字\u{7}b"] {
            let summed: usize = text.graphemes(true).map(display_width).sum();
            assert_eq!(display_width(text), summed, "{text:?}");
        }
        assert_eq!(display_width("xلاy"), 4);
    }

    #[test]
    fn test_width_methods() {
        // Circled digit one is ambiguous width.
        assert_eq!(grapheme_width("①", WidthMethod::WcWidth), 1);
        assert_eq!(grapheme_width("①", WidthMethod::Unicode), 2);
    }
}
