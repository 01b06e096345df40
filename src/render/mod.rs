//! The rendering service the cache draws on.
//!
//! A [`Renderable`] knows two things: how wide it would like to be
//! ([`Renderable::measure`]) and how to turn itself into styled segments at a
//! given width ([`Renderable::render`]). A `"\n"` inside the rendered segment
//! text is a hard line break; [`Strip::from_segments`](crate::Strip::from_segments)
//! turns the stream into lines.
//!
//! Key types:
//!
//! - [`RenderOptions`]: width, wrapping and measurement settings
//! - [`Measurement`]: minimum/maximum natural width in cells
//! - [`Text`], [`Pretty`], [`Divider`], [`Group`]: built-in renderables
//! - [`Content`]: what a content item holds, resolved once when it is added
//!
//! # Examples
//!
//! ```
//! use feathers::render::{Renderable, RenderOptions, Text};
//! use feathers::Strip;
//!
//! let text = Text::new("one two three");
//! let options = RenderOptions::default().with_width(7);
//! let lines = Strip::from_segments(text.render(&options));
//! let texts: Vec<String> = lines.iter().map(Strip::text).collect();
//! assert_eq!(texts, vec!["one two", "three"]);
//! ```

mod divider;
mod group;
mod pretty;
mod text;

pub use divider::{Divider, LabelAlign};
pub use group::Group;
pub use pretty::Pretty;
pub use text::{Span, Text};

use crate::segment::Segment;
use crate::unicode::WidthMethod;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Width used when nothing bounds the render.
pub const UNBOUNDED: usize = usize::MAX;

/// What to do with a word wider than the render width while wrapping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Overflow {
    /// Break the word across lines at cell boundaries.
    #[default]
    Fold,
    /// Keep the first line's worth of the word and drop the rest.
    Crop,
    /// Leave the word on its own over-long line.
    Ignore,
}

/// Settings passed to [`Renderable::measure`] and [`Renderable::render`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RenderOptions {
    /// Target width in cells, or [`UNBOUNDED`].
    pub max_width: usize,
    /// Soft-wrap long lines at `max_width`.
    pub wrap: bool,
    pub overflow: Overflow,
    /// Tab stop interval in cells.
    pub tab_width: u8,
    pub width_method: WidthMethod,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_width: UNBOUNDED,
            wrap: true,
            overflow: Overflow::Fold,
            tab_width: 4,
            width_method: WidthMethod::WcWidth,
        }
    }
}

impl RenderOptions {
    /// Set the target width.
    #[must_use]
    pub fn with_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }

    /// Disable soft wrapping and let lines overflow.
    #[must_use]
    pub fn no_wrap(mut self) -> Self {
        self.wrap = false;
        self.overflow = Overflow::Ignore;
        self
    }

    #[must_use]
    pub fn overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = overflow;
        self
    }

    #[must_use]
    pub fn tab_width(mut self, width: u8) -> Self {
        self.tab_width = width.max(1);
        self
    }

    #[must_use]
    pub fn width_method(mut self, method: WidthMethod) -> Self {
        self.width_method = method;
        self
    }

    /// Whether `max_width` is a real bound.
    #[must_use]
    pub fn is_bounded(&self) -> bool {
        self.max_width != UNBOUNDED
    }
}

/// Natural width range of a renderable, in cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Measurement {
    /// Narrowest width without breaking a word.
    pub minimum: usize,
    /// Width with no wrapping at all.
    pub maximum: usize,
}

impl Measurement {
    #[must_use]
    pub fn new(minimum: usize, maximum: usize) -> Self {
        Self {
            minimum: minimum.min(maximum),
            maximum,
        }
    }

    /// Both bounds limited to `width`.
    #[must_use]
    pub fn clamp(self, width: usize) -> Self {
        Self::new(self.minimum.min(width), self.maximum.min(width))
    }

    /// Widest of both bounds.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self::new(
            self.minimum.max(other.minimum),
            self.maximum.max(other.maximum),
        )
    }
}

/// Something that can be measured and rendered into styled segments.
pub trait Renderable: fmt::Debug + Send + Sync {
    /// Natural width range under `options` (clamped to `options.max_width`).
    fn measure(&self, options: &RenderOptions) -> Measurement;

    /// Segments for the whole renderable; `"\n"` in the text breaks lines.
    fn render(&self, options: &RenderOptions) -> Vec<Segment>;
}

/// The value held by a content item.
///
/// Which variant applies is decided once, when the content is built, and
/// never re-checked at render time.
#[derive(Clone, Debug)]
pub enum Content {
    Text(Text),
    Renderable(Arc<dyn Renderable>),
    /// Anything else, shown as its pretty-printed `Debug` output.
    Fallback(Pretty),
}

impl Content {
    #[must_use]
    pub fn text(text: impl Into<Text>) -> Self {
        Self::Text(text.into())
    }

    #[must_use]
    pub fn renderable(renderable: Arc<dyn Renderable>) -> Self {
        Self::Renderable(renderable)
    }

    /// Pretty-printed `Debug` output of `value`.
    #[must_use]
    pub fn debug<T: fmt::Debug + ?Sized>(value: &T) -> Self {
        Self::Fallback(Pretty::new(value))
    }

    /// Pick a variant for an arbitrary value.
    ///
    /// Strings and [`Text`] become text content; everything else falls back
    /// to its `Debug` representation.
    #[must_use]
    pub fn resolve<T: Any + fmt::Debug>(value: T) -> Self {
        let any: &dyn Any = &value;
        if let Some(s) = any.downcast_ref::<String>() {
            return Self::Text(Text::new(s.as_str()));
        }
        if let Some(s) = any.downcast_ref::<&'static str>() {
            return Self::Text(Text::new(*s));
        }
        if let Some(text) = any.downcast_ref::<Text>() {
            return Self::Text(text.clone());
        }
        Self::debug(&value)
    }

    /// Whether this is plain or styled text.
    #[must_use]
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    #[must_use]
    pub fn as_renderable(&self) -> &dyn Renderable {
        match self {
            Self::Text(text) => text,
            Self::Renderable(renderable) => renderable.as_ref(),
            Self::Fallback(pretty) => pretty,
        }
    }
}

impl From<&str> for Content {
    fn from(value: &str) -> Self {
        Self::Text(Text::new(value))
    }
}

impl From<String> for Content {
    fn from(value: String) -> Self {
        Self::Text(Text::new(value))
    }
}

impl From<Text> for Content {
    fn from(value: Text) -> Self {
        Self::Text(value)
    }
}

impl From<Arc<dyn Renderable>> for Content {
    fn from(value: Arc<dyn Renderable>) -> Self {
        Self::Renderable(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strip::Strip;

    #[test]
    fn test_options_builder() {
        let options = RenderOptions::default().with_width(20).no_wrap().tab_width(0);
        assert_eq!(options.max_width, 20);
        assert!(!options.wrap);
        assert_eq!(options.overflow, Overflow::Ignore);
        assert_eq!(options.tab_width, 1);
        assert!(options.is_bounded());
        assert!(!RenderOptions::default().is_bounded());
    }

    #[test]
    fn test_measurement_clamp_and_union() {
        let m = Measurement::new(4, 12).clamp(8);
        assert_eq!(m, Measurement::new(4, 8));
        let u = Measurement::new(2, 5).union(Measurement::new(3, 4));
        assert_eq!(u, Measurement::new(3, 5));
        assert_eq!(Measurement::new(9, 3).minimum, 3);
    }

    #[test]
    fn test_resolve_strings_are_text() {
        assert!(Content::resolve("hi").is_text());
        assert!(Content::resolve(String::from("hi")).is_text());
        assert!(Content::resolve(Text::new("hi")).is_text());
    }

    #[test]
    fn test_resolve_other_values_fall_back() {
        let content = Content::resolve(vec![1, 2]);
        assert!(matches!(content, Content::Fallback(_)));

        let options = RenderOptions::default();
        let lines = Strip::from_segments(content.as_renderable().render(&options));
        let texts: Vec<String> = lines.iter().map(Strip::text).collect();
        assert_eq!(texts, vec!["[", "    1,", "    2,", "]"]);
    }

    #[test]
    fn test_renderable_variant() {
        let divider: Arc<dyn Renderable> = Arc::new(Divider::new("x"));
        let content = Content::from(divider);
        assert!(!content.is_text());
        assert!(matches!(content, Content::Renderable(_)));
    }
}
