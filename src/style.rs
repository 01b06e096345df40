//! Segment styles: optional colors plus attribute flags.
//!
//! A [`Style`] is attached to every [`Segment`](crate::Segment). Unset colors
//! mean "whatever the view paints underneath", so styles stack: later layers
//! override the colors they set and add their attributes.
//!
//! ```
//! use feathers::{Rgba, Style, TextAttributes};
//!
//! let row = Style::bg(Rgba::BLACK);
//! let label = Style::fg(Rgba::GREEN).with_bold();
//!
//! let combined = row.merge(label);
//! assert_eq!(combined.fg, Some(Rgba::GREEN));
//! assert_eq!(combined.bg, Some(Rgba::BLACK));
//! assert!(combined.attributes.contains(TextAttributes::BOLD));
//! assert_eq!(combined.to_string(), "bold fg=#00ff00 bg=#000000");
//! ```

use crate::color::Rgba;
use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Attribute flags a segment can carry.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct TextAttributes: u8 {
        const BOLD      = 1 << 0;
        const DIM       = 1 << 1;
        const ITALIC    = 1 << 2;
        const UNDERLINE = 1 << 3;
        /// Foreground and background swapped.
        const REVERSE   = 1 << 4;
        const STRIKE    = 1 << 5;
    }
}

/// Colors and attributes of one segment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Style {
    pub fg: Option<Rgba>,
    pub bg: Option<Rgba>,
    pub attributes: TextAttributes,
}

impl Style {
    /// No colors, no attributes. Merging it changes nothing.
    pub const NONE: Self = Self {
        fg: None,
        bg: None,
        attributes: TextAttributes::empty(),
    };

    #[must_use]
    pub const fn fg(color: Rgba) -> Self {
        Self::NONE.with_fg(color)
    }

    #[must_use]
    pub const fn bg(color: Rgba) -> Self {
        Self::NONE.with_bg(color)
    }

    #[must_use]
    pub const fn attrs(attributes: TextAttributes) -> Self {
        Self::NONE.with_attributes(attributes)
    }

    #[must_use]
    pub const fn bold() -> Self {
        Self::attrs(TextAttributes::BOLD)
    }

    #[must_use]
    pub const fn dim() -> Self {
        Self::attrs(TextAttributes::DIM)
    }

    #[must_use]
    pub const fn with_fg(self, color: Rgba) -> Self {
        Self {
            fg: Some(color),
            ..self
        }
    }

    #[must_use]
    pub const fn with_bg(self, color: Rgba) -> Self {
        Self {
            bg: Some(color),
            ..self
        }
    }

    /// Add `attributes` to the ones already set.
    #[must_use]
    pub const fn with_attributes(self, attributes: TextAttributes) -> Self {
        Self {
            attributes: self.attributes.union(attributes),
            ..self
        }
    }

    #[must_use]
    pub const fn without_attributes(self, attributes: TextAttributes) -> Self {
        Self {
            attributes: self.attributes.difference(attributes),
            ..self
        }
    }

    #[must_use]
    pub const fn with_bold(self) -> Self {
        self.with_attributes(TextAttributes::BOLD)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }

    /// Lay `other` over `self`: its colors win where set, attributes add up.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            fg: other.fg.or(self.fg),
            bg: other.bg.or(self.bg),
            attributes: self.attributes | other.attributes,
        }
    }

    /// Merge a stack of styles, bottom layer first.
    #[must_use]
    pub fn combine<I>(layers: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        layers.into_iter().fold(Self::NONE, Self::merge)
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        let mut parts: Vec<String> = self
            .attributes
            .iter_names()
            .map(|(name, _)| name.to_ascii_lowercase())
            .collect();
        if let Some(fg) = self.fg {
            parts.push(format!("fg={fg}"));
        }
        if let Some(bg) = self.bg {
            parts.push(format!("bg={bg}"));
        }
        f.write_str(&parts.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chained_construction() {
        let style = Style::fg(Rgba::RED)
            .with_bg(Rgba::BLACK)
            .with_attributes(TextAttributes::BOLD | TextAttributes::UNDERLINE);

        assert_eq!(style.fg, Some(Rgba::RED));
        assert_eq!(style.bg, Some(Rgba::BLACK));
        assert!(style.attributes.contains(TextAttributes::UNDERLINE));
        assert_eq!(
            style.without_attributes(TextAttributes::BOLD).attributes,
            TextAttributes::UNDERLINE
        );
    }

    #[test]
    fn test_merge_overlay_wins() {
        let base = Style::fg(Rgba::RED).with_bold();
        let overlay = Style::fg(Rgba::BLUE).with_attributes(TextAttributes::ITALIC);

        let merged = base.merge(overlay);

        assert_eq!(merged.fg, Some(Rgba::BLUE));
        assert_eq!(merged.bg, None);
        assert_eq!(
            merged.attributes,
            TextAttributes::BOLD | TextAttributes::ITALIC
        );
    }

    #[test]
    fn test_none_is_identity() {
        let style = Style::bg(Rgba::GREEN).with_bold();
        assert_eq!(style.merge(Style::NONE), style);
        assert_eq!(Style::NONE.merge(style), style);
        assert!(Style::NONE.is_empty());
        assert!(!style.is_empty());
    }

    #[test]
    fn test_combine_stacks_in_order() {
        let stacked = Style::combine([
            Style::bg(Rgba::BLACK),
            Style::fg(Rgba::RED),
            Style::fg(Rgba::WHITE).with_attributes(TextAttributes::DIM),
        ]);
        assert_eq!(stacked, Style::bg(Rgba::BLACK).with_fg(Rgba::WHITE).with_attributes(TextAttributes::DIM));
        assert_eq!(Style::combine([]), Style::NONE);
    }

    #[test]
    fn test_display() {
        assert_eq!(Style::NONE.to_string(), "none");
        assert_eq!(
            Style::bold()
                .with_attributes(TextAttributes::STRIKE)
                .with_fg(Rgba::RED)
                .to_string(),
            "bold strike fg=#ff0000"
        );
    }
}
