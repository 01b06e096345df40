//! Incremental line-strip cache for scrollback-style views.
//!
//! [`RenderablesCache`] keeps an ordered set of content items and a flat index
//! of the lines they render to, so a view can ask for "line 1234" without
//! re-rendering anything. Mutations are recorded as pending work and applied
//! by a flush at the end of every mutating call:
//!
//! 1. Nothing renders until a content width is known.
//! 2. Pending adds render in insertion order and append to the index tail.
//! 3. Pending removals drop their lines in a single pass over the index.
//! 4. If the index changed, the listener hears about it once.
//!
//! A width change (or [`RenderablesCache::refresh`]) replays every live item.
//!
//! # Examples
//!
//! ```
//! use feathers::{ContentItem, RenderablesCache, Size};
//!
//! let mut cache = RenderablesCache::new();
//! let id = cache.add(ContentItem::new("hello").expand(true));
//! assert_eq!(cache.len(), 0); // no width yet
//!
//! cache.set_content_width(10);
//! assert_eq!(cache.virtual_size(), Size::new(10, 1));
//! assert_eq!(cache.strip_at(0).unwrap().text(), "hello     ");
//!
//! cache.remove(id).unwrap();
//! assert!(cache.is_empty());
//! ```

mod item;
mod listener;

pub use item::{ContentItem, ItemId};
pub use listener::{CacheListener, CacheUpdate, Size};

use crate::block::Block;
use crate::error::{Error, Result};
use crate::event::{LogLevel, emit_log};
use crate::render::RenderOptions;
use crate::strip::Strip;
use crate::style::Style;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

/// Cache-wide configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheOptions {
    /// Style of the blank cells used to pad lines to their render width.
    pub fill_style: Style,
    /// Base options for measuring and rendering every item.
    pub render: RenderOptions,
}

impl CacheOptions {
    #[must_use]
    pub fn fill_style(mut self, style: Style) -> Self {
        self.fill_style = style;
        self
    }

    #[must_use]
    pub fn render(mut self, render: RenderOptions) -> Self {
        self.render = render;
        self
    }
}

/// Ordered content items rendered into a flat, line-addressable strip index.
///
/// The cache is single-writer: it is meant to be owned by one view and driven
/// from that view's event handling. It holds no locks.
#[derive(Debug)]
pub struct RenderablesCache {
    options: CacheOptions,
    /// Live items. Ids grow monotonically, so key order is insertion order.
    items: BTreeMap<ItemId, ContentItem>,
    next_id: u64,
    pending_add: Vec<ItemId>,
    pending_remove: Vec<ItemId>,
    /// One entry per display line; an item's lines are contiguous.
    entries: Vec<(ItemId, Strip)>,
    virtual_size: Size,
    content_width: Option<usize>,
    /// Set when the index was reset while rendering was deferred.
    dirty: bool,
    listener: Option<Weak<RefCell<dyn CacheListener>>>,
}

impl Default for RenderablesCache {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderablesCache {
    /// Create an empty cache with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(CacheOptions::default())
    }

    #[must_use]
    pub fn with_options(options: CacheOptions) -> Self {
        Self {
            options,
            items: BTreeMap::new(),
            next_id: 1,
            pending_add: Vec::new(),
            pending_remove: Vec::new(),
            entries: Vec::new(),
            virtual_size: Size::ZERO,
            content_width: None,
            dirty: false,
            listener: None,
        }
    }

    /// Register the view to notify after each flush that changed something.
    ///
    /// Only a weak reference is kept. A listener that has been dropped, or
    /// that is already mutably borrowed when the flush runs, is skipped.
    pub fn set_listener<L: CacheListener + 'static>(&mut self, listener: &Rc<RefCell<L>>) {
        let listener: Rc<RefCell<dyn CacheListener>> = listener.clone();
        self.listener = Some(Rc::downgrade(&listener));
    }

    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    #[must_use]
    pub fn options(&self) -> &CacheOptions {
        &self.options
    }

    /// Logical size of the cached content: widest line by line count.
    #[must_use]
    pub fn virtual_size(&self) -> Size {
        self.virtual_size
    }

    #[must_use]
    pub fn content_width(&self) -> Option<usize> {
        self.content_width
    }

    /// Set the shared render width.
    ///
    /// A different width re-renders everything. A width of zero counts as
    /// "not known yet" and defers rendering.
    pub fn set_content_width(&mut self, width: usize) {
        if self.content_width != Some(width) {
            self.content_width = Some(width);
            self.refresh();
        }
    }

    /// Change the padding style; re-renders everything if it differs.
    pub fn set_fill_style(&mut self, style: Style) {
        if self.options.fill_style != style {
            self.options.fill_style = style;
            self.refresh();
        }
    }

    /// Register `item` after all existing items and return its id.
    pub fn add(&mut self, item: ContentItem) -> ItemId {
        let id = ItemId::from_raw(self.next_id);
        self.next_id += 1;
        self.items.insert(id, item);
        self.pending_add.push(id);
        self.update_cache();
        id
    }

    /// Unregister an item and drop its lines.
    ///
    /// Removing an id that is not registered is a caller bug: it returns
    /// [`Error::UnknownItem`] and leaves the cache untouched.
    pub fn remove(&mut self, id: ItemId) -> Result<()> {
        if self.items.remove(&id).is_none() {
            emit_log(LogLevel::Warn, &format!("remove of unknown item {id}"));
            return Err(Error::UnknownItem(id));
        }
        self.pending_remove.push(id);
        self.update_cache();
        Ok(())
    }

    /// Re-render every live item from scratch, in insertion order.
    pub fn refresh(&mut self) {
        if !self.entries.is_empty() || self.virtual_size != Size::ZERO {
            self.dirty = true;
        }
        self.entries.clear();
        self.pending_add.clear();
        self.pending_remove.clear();
        self.pending_add.extend(self.items.keys().copied());
        self.virtual_size = Size::ZERO;
        emit_log(
            LogLevel::Debug,
            &format!("cache refresh: {} live items", self.items.len()),
        );
        self.update_cache();
    }

    /// Drop every item.
    pub fn clear(&mut self) {
        self.items.clear();
        self.refresh();
    }

    /// The line at `index`, or `None` past the end.
    #[must_use]
    pub fn strip_at(&self, index: usize) -> Option<&Strip> {
        self.entries.get(index).map(|(_, strip)| strip)
    }

    /// Number of cached lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of live items, rendered or not.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn contains(&self, id: ItemId) -> bool {
        self.items.contains_key(&id)
    }

    /// Cell width of line `y`, 0 when there is no such line.
    #[must_use]
    pub fn line_width(&self, y: usize) -> usize {
        self.strip_at(y).map_or(0, Strip::cell_length)
    }

    /// Line `y` as seen through a viewport scrolled `scroll_x` cells right and
    /// `width` cells wide. Always exactly `width` cells.
    #[must_use]
    pub fn render_line(&self, y: usize, scroll_x: usize, width: usize) -> Strip {
        let fill = self.options.fill_style;
        match self.strip_at(y) {
            Some(strip) => strip
                .crop(scroll_x, scroll_x.saturating_add(width))
                .adjust_cell_length(width, fill),
            None => Strip::blank(width, fill),
        }
    }

    /// The current lines of item `id`, or `None` if it is not registered.
    #[must_use]
    pub fn block(&self, id: ItemId) -> Option<Block> {
        if !self.contains(id) {
            return None;
        }
        Some(
            self.entries
                .iter()
                .filter(|(owner, _)| *owner == id)
                .map(|(_, strip)| strip.clone())
                .collect(),
        )
    }

    /// Apply pending adds and removals, then notify once if anything changed.
    fn update_cache(&mut self) {
        let Some(width) = self.content_width.filter(|&w| w > 0) else {
            if !self.pending_add.is_empty() || !self.pending_remove.is_empty() {
                emit_log(LogLevel::Debug, "cache flush deferred: no content width");
            }
            return;
        };

        let mut appended = 0;
        for id in std::mem::take(&mut self.pending_add) {
            // Added and removed within the same batch.
            let Some(item) = self.items.get(&id) else {
                continue;
            };
            let strips = self.extract_lines(item, width);
            if strips.is_empty() {
                continue;
            }
            let widest = strips.iter().map(Strip::cell_length).max().unwrap_or(0);
            self.virtual_size = Size::new(
                self.virtual_size.width.max(widest),
                self.virtual_size.height + strips.len(),
            );
            appended += strips.len();
            self.entries.extend(strips.into_iter().map(|strip| (id, strip)));
        }

        let mut removed = 0;
        for id in std::mem::take(&mut self.pending_remove) {
            removed += self.remove_from_cache(id);
        }
        self.virtual_size.height = self.virtual_size.height.saturating_sub(removed);

        let changed = appended > 0 || removed > 0 || self.dirty;
        self.dirty = false;
        if !changed {
            return;
        }
        emit_log(
            LogLevel::Debug,
            &format!(
                "cache flush: +{appended} -{removed} lines, virtual size {}",
                self.virtual_size
            ),
        );
        self.notify();
    }

    /// Drop every line owned by `id` in one pass, keeping the order of the rest.
    fn remove_from_cache(&mut self, id: ItemId) -> usize {
        let before = self.entries.len();
        self.entries.retain(|(owner, _)| *owner != id);
        before - self.entries.len()
    }

    /// Render one item into lines padded to a common width.
    fn extract_lines(&self, item: &ContentItem, content_width: usize) -> Vec<Strip> {
        let mut options = self.options.render;
        if !item.wrap {
            options = options.no_wrap();
        }
        let renderable = item.content.as_renderable();

        let natural = renderable.measure(&options).maximum;
        let target = item.width.unwrap_or(content_width);
        let render_width = item.render_width(natural, target);

        let segments = renderable.render(&options.with_width(render_width));
        let fill = self.options.fill_style;
        Strip::from_segments(segments)
            .iter()
            .map(|strip| strip.adjust_cell_length(render_width, fill))
            .collect()
    }

    fn notify(&self) {
        let Some(listener) = self.listener.as_ref().and_then(Weak::upgrade) else {
            return;
        };
        let update = CacheUpdate {
            virtual_size: self.virtual_size,
            line_count: self.entries.len(),
        };
        match listener.try_borrow_mut() {
            Ok(mut listener) => listener.on_cache_update(&update),
            Err(_) => emit_log(
                LogLevel::Warn,
                "cache listener busy during flush; update skipped",
            ),
        }
    }
}
