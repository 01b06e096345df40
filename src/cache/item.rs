//! Content items and their ids.

use crate::render::Content;
use std::fmt;

/// Stable identity of a content item inside one cache.
///
/// Ids are handed out by [`RenderablesCache::add`](super::RenderablesCache::add)
/// in increasing order and never reused by that cache, so comparing ids
/// compares insertion order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(u64);

impl ItemId {
    /// Build an id from its raw value.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A renderable plus the options that control how it is laid out.
///
/// Defaults follow a log view: natural width, shrink to fit, no expansion,
/// no soft wrapping.
#[derive(Clone, Debug)]
pub struct ContentItem {
    pub content: Content,
    /// Target width override; `None` uses the cache's content width.
    pub width: Option<usize>,
    /// Grow to the target width when narrower.
    pub expand: bool,
    /// Clip or wrap down to the target width when wider.
    pub shrink: bool,
    /// Soft-wrap long lines; otherwise lines overflow and get clipped.
    pub wrap: bool,
}

impl ContentItem {
    #[must_use]
    pub fn new(content: impl Into<Content>) -> Self {
        Self {
            content: content.into(),
            width: None,
            expand: false,
            shrink: true,
            wrap: false,
        }
    }

    #[must_use]
    pub fn width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    #[must_use]
    pub fn expand(mut self, expand: bool) -> Self {
        self.expand = expand;
        self
    }

    #[must_use]
    pub fn shrink(mut self, shrink: bool) -> Self {
        self.shrink = shrink;
        self
    }

    #[must_use]
    pub fn wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    /// Width to render at, given the natural width and the target.
    pub(crate) fn render_width(&self, natural: usize, target: usize) -> usize {
        if self.expand && natural < target {
            target
        } else if self.shrink && natural > target {
            target
        } else {
            natural
        }
    }
}

impl From<Content> for ContentItem {
    fn from(content: Content) -> Self {
        Self::new(content)
    }
}
