//! Fallback rendering for values that are not text.

use super::{Measurement, RenderOptions, Renderable, Text};
use crate::segment::Segment;
use crate::style::Style;
use std::fmt;

/// A value shown through its pretty-printed (`{:#?}`) `Debug` output.
///
/// The output is captured when the `Pretty` is built; later changes to the
/// original value are not seen. Long lines are never soft-wrapped, so nested
/// structure keeps its indentation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Pretty {
    text: Text,
}

impl Pretty {
    #[must_use]
    pub fn new<T: fmt::Debug + ?Sized>(value: &T) -> Self {
        Self::with_style(value, Style::NONE)
    }

    #[must_use]
    pub fn with_style<T: fmt::Debug + ?Sized>(value: &T, style: Style) -> Self {
        Self {
            text: Text::styled(format!("{value:#?}"), style),
        }
    }

    /// The captured representation.
    #[must_use]
    pub fn repr(&self) -> String {
        self.text.plain()
    }
}

impl Renderable for Pretty {
    fn measure(&self, options: &RenderOptions) -> Measurement {
        self.text.measure(options)
    }

    fn render(&self, options: &RenderOptions) -> Vec<Segment> {
        self.text.render(&options.no_wrap())
    }
}
