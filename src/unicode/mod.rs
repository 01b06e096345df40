//! Unicode utilities for cell widths and grapheme-safe splitting.
//!
//! Every width in the crate is a per-grapheme-cluster width, summed over the
//! clusters. Custom [`Renderable`](crate::Renderable)s should measure with
//! [`display_width_with_method`] so their segments agree with cropping.

mod grapheme;
mod width;

pub use grapheme::{grapheme_widths, split_at_cell};
pub use width::{WidthMethod, display_width_with_method};
