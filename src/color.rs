//! RGBA colors for segment styles.
//!
//! Colors are stored as 8-bit components so that styles, segments and strips
//! can be compared and hashed exactly. The cache never paints anything; colors
//! travel with the segments until the host view puts them on screen.
//!
//! # Examples
//!
//! ```
//! use feathers::Rgba;
//!
//! let accent = Rgba::from_hex("#1a1a2e").unwrap();
//! assert_eq!(accent.to_rgb_u8(), (0x1a, 0x1a, 0x2e));
//!
//! let faded = Rgba::RED.with_alpha(128);
//! assert!(!faded.is_opaque());
//! ```

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// RGBA color with 8-bit components.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Opaque red.
    pub const RED: Self = Self::rgb(255, 0, 0);
    /// Opaque green.
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    /// Opaque blue.
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    /// Opaque mid gray, used for divider lines.
    pub const GRAY: Self = Self::rgb(128, 128, 128);

    /// Create a color from all four components.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse a hex color string.
    ///
    /// Supported formats: `#RGB`, `#RRGGBB`, `#RRGGBBAA` (leading `#` optional).
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        // from_str_radix alone would accept a leading '+'.
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

        match hex.len() {
            3 => {
                let nibble = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok();
                Some(Self::rgb(nibble(0)? * 17, nibble(1)? * 17, nibble(2)? * 17))
            }
            6 => Some(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Self::new(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => None,
        }
    }

    /// Return the same color with a different alpha.
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// RGB components, alpha dropped.
    #[must_use]
    pub const fn to_rgb_u8(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    #[must_use]
    pub const fn is_opaque(self) -> bool {
        self.a == 255
    }

    #[must_use]
    pub const fn is_transparent(self) -> bool {
        self.a == 0
    }
}

impl FromStr for Rgba {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s).ok_or_else(|| Error::InvalidColor(s.to_string()))
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_formats() {
        assert_eq!(Rgba::from_hex("#fff"), Some(Rgba::WHITE));
        assert_eq!(Rgba::from_hex("ff0000"), Some(Rgba::RED));
        assert_eq!(
            Rgba::from_hex("#00ff0080"),
            Some(Rgba::new(0, 255, 0, 0x80))
        );
    }

    #[test]
    fn test_from_hex_rejects_garbage() {
        assert_eq!(Rgba::from_hex("#ggg"), None);
        assert_eq!(Rgba::from_hex("#12345"), None);
        assert_eq!(Rgba::from_hex("#é12"), None);
        assert_eq!(Rgba::from_hex("#+f+f+f"), None);
    }

    #[test]
    fn test_from_str_error() {
        let err = "nope".parse::<Rgba>().unwrap_err();
        assert_eq!(err, Error::InvalidColor("nope".to_string()));
    }

    #[test]
    fn test_display_roundtrip() {
        let c = Rgba::from_hex("#1a2b3c").unwrap();
        assert_eq!(c.to_string(), "#1a2b3c");
        assert_eq!(c.with_alpha(0).to_string(), "#1a2b3c00");
    }
}
