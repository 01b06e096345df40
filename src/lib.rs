//! `feathers` - incremental line-strip cache for terminal views
//!
//! Turns an ordered collection of renderable content items into a flat,
//! line-addressable sequence of fixed-width [`Strip`]s. Appends and removals
//! are applied incrementally; only a width or style change re-renders
//! everything. Built for scrollback-style views such as logs and chats.

// Crate-level lint configuration
#![forbid(unsafe_code)]
#![allow(clippy::module_name_repetitions)] // Allow cache::CacheOptions etc
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::needless_pass_by_value)] // Allow pass by value for small Copy types
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer
#![allow(clippy::needless_range_loop)] // Index loops over glyph runs read better
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::redundant_clone)] // Clones in tests for clarity are fine

pub mod block;
pub mod cache;
pub mod color;
pub mod error;
pub mod event;
pub mod render;
pub mod segment;
pub mod strip;
pub mod style;
pub mod unicode;

// Re-export core types at crate root
pub use block::Block;
pub use cache::{
    CacheListener, CacheOptions, CacheUpdate, ContentItem, ItemId, RenderablesCache, Size,
};
pub use color::Rgba;
pub use error::{Error, Result};
pub use event::{LogLevel, clear_log_callback, emit_log, set_log_callback};
pub use render::{Content, Measurement, RenderOptions, Renderable};
pub use segment::Segment;
pub use strip::Strip;
pub use style::{Style, TextAttributes};
pub use unicode::WidthMethod;
