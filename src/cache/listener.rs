//! Update notifications from the cache to its view.

use std::fmt;

/// Logical size of all cached content, in cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: usize,
    pub height: usize,
}

impl Size {
    pub const ZERO: Self = Self::new(0, 0);

    #[must_use]
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// What a flush left behind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CacheUpdate {
    pub virtual_size: Size,
    pub line_count: usize,
}

/// Receives one call per flush that changed the cached lines.
///
/// The cache only calls back from inside `add`, `remove`, `refresh`,
/// `clear`, `set_content_width` or `set_fill_style`, never from anywhere else.
/// Any `FnMut(&CacheUpdate)` closure is a listener.
pub trait CacheListener {
    fn on_cache_update(&mut self, update: &CacheUpdate);
}

impl<F> CacheListener for F
where
    F: FnMut(&CacheUpdate),
{
    fn on_cache_update(&mut self, update: &CacheUpdate) {
        self(update);
    }
}
