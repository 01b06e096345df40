//! One immutable line of styled segments.

use crate::segment::{
    Segment, adjust_line_length, divide_line, line_crop, line_length, split_lines,
};
use crate::style::Style;
use std::fmt;
use std::sync::Arc;

/// An immutable horizontal line of styled text with a known cell width.
///
/// Strips are cheap to clone (the segments are shared) and every operation
/// returns a new strip. After any of them,
/// `strip.segments().map(cell_length).sum() == strip.cell_length()`.
///
/// # Examples
///
/// ```
/// use feathers::{Segment, Strip, Style};
///
/// let strip = Strip::new(vec![Segment::plain("hello")]);
/// let padded = strip.adjust_cell_length(8, Style::NONE);
/// assert_eq!(padded.cell_length(), 8);
/// assert_eq!(padded.text(), "hello   ");
/// assert_eq!(padded.crop(1, 4).text(), "ell");
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Strip {
    segments: Arc<[Segment]>,
    cell_length: usize,
}

impl Strip {
    /// Create a strip from the segments of one line.
    #[must_use]
    pub fn new(segments: Vec<Segment>) -> Self {
        let cell_length = line_length(&segments);
        Self {
            segments: segments.into(),
            cell_length,
        }
    }

    /// A strip of `width` blank cells.
    #[must_use]
    pub fn blank(width: usize, style: Style) -> Self {
        if width == 0 {
            return Self::default();
        }
        Self::new(vec![Segment::blank(width, style)])
    }

    /// One strip per line.
    #[must_use]
    pub fn from_lines(lines: Vec<Vec<Segment>>) -> Vec<Self> {
        lines.into_iter().map(Self::new).collect()
    }

    /// Split a segment stream at hard line breaks, one strip per line.
    #[must_use]
    pub fn from_segments<I>(segments: I) -> Vec<Self>
    where
        I: IntoIterator<Item = Segment>,
    {
        Self::from_lines(split_lines(segments))
    }

    /// Concatenate strips left to right.
    #[must_use]
    pub fn join<'a, I>(strips: I) -> Self
    where
        I: IntoIterator<Item = &'a Strip>,
    {
        let segments: Vec<Segment> = strips
            .into_iter()
            .flat_map(|strip| strip.segments.iter().cloned())
            .collect();
        Self::new(segments)
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Width in terminal cells.
    #[must_use]
    pub fn cell_length(&self) -> usize {
        self.cell_length
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cell_length == 0
    }

    /// The visible text, styles dropped.
    #[must_use]
    pub fn text(&self) -> String {
        self.segments.iter().map(Segment::text).collect()
    }

    /// Crop to the cell range `[start, end)`.
    ///
    /// An inverted range (`start > end`) is clamped to an empty strip, as is a
    /// `start` at or past the end of the line.
    #[must_use]
    pub fn crop(&self, start: usize, end: usize) -> Self {
        if start >= end || start >= self.cell_length {
            return Self::default();
        }
        if start == 0 && end >= self.cell_length {
            return self.clone();
        }
        Self::new(line_crop(&self.segments, start, end, self.cell_length))
    }

    /// Pad with `style` blanks or crop so the strip is exactly `width` cells.
    #[must_use]
    pub fn adjust_cell_length(&self, width: usize, style: Style) -> Self {
        if width == self.cell_length {
            return self.clone();
        }
        Self::new(adjust_line_length(&self.segments, width, style))
    }

    /// Lay `style` over every segment. Widths are unchanged.
    #[must_use]
    pub fn apply_style(&self, style: Style) -> Self {
        if style.is_empty() {
            return self.clone();
        }
        Self {
            segments: self.segments.iter().map(|s| s.apply_style(style)).collect(),
            cell_length: self.cell_length,
        }
    }

    /// Split at ascending cell offsets, one strip per cut.
    #[must_use]
    pub fn divide(&self, cuts: &[usize]) -> Vec<Self> {
        divide_line(&self.segments, cuts)
            .into_iter()
            .map(Self::new)
            .collect()
    }
}

impl fmt::Debug for Strip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Strip")
            .field("text", &self.text())
            .field("cell_length", &self.cell_length)
            .field("segments", &self.segments.len())
            .finish()
    }
}
