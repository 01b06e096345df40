//! Styled text segments and the line helpers built on them.
//!
//! A [`Segment`] is a run of text sharing one [`Style`]. A *line* is a plain
//! `Vec<Segment>` with no hard line breaks in it. Everything here measures in
//! terminal cells, never in bytes or chars.

use crate::style::Style;
use crate::unicode::{WidthMethod, display_width_with_method, split_at_cell};

/// A run of text with a single style.
///
/// The cell width is measured once at construction.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Segment {
    text: String,
    style: Style,
    cells: usize,
    method: WidthMethod,
}

impl Segment {
    /// Create a segment measured with the default width method.
    #[must_use]
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self::with_method(text, style, WidthMethod::default())
    }

    /// Create a segment measured with a specific width method.
    #[must_use]
    pub fn with_method(text: impl Into<String>, style: Style, method: WidthMethod) -> Self {
        let text = text.into();
        let cells = display_width_with_method(&text, method);
        Self {
            text,
            style,
            cells,
            method,
        }
    }

    /// Create an unstyled segment.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Style::NONE)
    }

    /// A run of `width` blank cells.
    #[must_use]
    pub fn blank(width: usize, style: Style) -> Self {
        Self {
            text: " ".repeat(width),
            style,
            cells: width,
            method: WidthMethod::default(),
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn style(&self) -> Style {
        self.style
    }

    /// Width in terminal cells.
    #[must_use]
    pub fn cell_length(&self) -> usize {
        self.cells
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Return the same text with `style` laid over the current style.
    #[must_use]
    pub fn apply_style(&self, style: Style) -> Self {
        Self {
            style: self.style.merge(style),
            ..self.clone()
        }
    }

    /// Split into two segments at a cell offset.
    ///
    /// See [`split_at_cell`] for how a wide glyph on the cut is handled.
    #[must_use]
    pub fn split_cells(&self, cut: usize) -> (Self, Self) {
        let (left, right) = split_at_cell(&self.text, cut, self.method);
        (
            Self::with_method(left, self.style, self.method),
            Self::with_method(right, self.style, self.method),
        )
    }
}

/// Total cell width of a line.
#[must_use]
pub fn line_length(line: &[Segment]) -> usize {
    line.iter().map(Segment::cell_length).sum()
}

/// Split a segment stream into lines at `\n`.
///
/// A trailing newline does not produce an empty final line, and an empty
/// stream produces no lines at all.
#[must_use]
pub fn split_lines<I>(segments: I) -> Vec<Vec<Segment>>
where
    I: IntoIterator<Item = Segment>,
{
    let mut lines = Vec::new();
    let mut line: Vec<Segment> = Vec::new();

    for segment in segments {
        if !segment.text.contains('\n') {
            if !segment.is_empty() {
                line.push(segment);
            }
            continue;
        }
        let mut parts = segment.text.split('\n').peekable();
        while let Some(part) = parts.next() {
            if !part.is_empty() {
                line.push(Segment::with_method(part, segment.style, segment.method));
            }
            if parts.peek().is_some() {
                lines.push(std::mem::take(&mut line));
            }
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Crop a line to the cell range `[start, end)`.
///
/// `total` is the line's cell width, passed in because callers already have
/// it. When `end` reaches `total` the segments after the start split are
/// returned untouched. `start >= end` yields an empty line rather than a panic.
#[must_use]
pub fn line_crop(segments: &[Segment], start: usize, end: usize, total: usize) -> Vec<Segment> {
    if start >= end {
        return Vec::new();
    }

    let mut pos = 0;
    let mut iter = segments.iter();
    let mut first = None;
    for segment in iter.by_ref() {
        let end_pos = pos + segment.cell_length();
        if end_pos > start {
            first = Some(segment.split_cells(start - pos).1);
            break;
        }
        pos = end_pos;
    }
    let Some(mut segment) = first else {
        return Vec::new();
    };

    let mut output = Vec::new();
    if end >= total {
        if !segment.is_empty() {
            output.push(segment);
        }
        output.extend(iter.cloned());
        return output;
    }

    let mut pos = start;
    loop {
        let end_pos = pos + segment.cell_length();
        if end_pos < end {
            output.push(segment);
        } else {
            let (head, _) = segment.split_cells(end - pos);
            if !head.is_empty() {
                output.push(head);
            }
            break;
        }
        pos = end_pos;
        match iter.next() {
            Some(next) => segment = next.clone(),
            None => break,
        }
    }
    output
}

/// Pad with blank cells or crop so the line is exactly `length` cells wide.
#[must_use]
pub fn adjust_line_length(segments: &[Segment], length: usize, pad_style: Style) -> Vec<Segment> {
    let current = line_length(segments);
    match current.cmp(&length) {
        std::cmp::Ordering::Less => {
            let mut line = segments.to_vec();
            line.push(Segment::blank(length - current, pad_style));
            line
        }
        std::cmp::Ordering::Equal => segments.to_vec(),
        std::cmp::Ordering::Greater => line_crop(segments, 0, length, current),
    }
}

/// Divide a line at ascending cell offsets.
///
/// Produces `cuts.len()` pieces: the first spans `[0, cuts[0])`, each next one
/// continues from the previous cut. Cuts past the end give empty pieces.
#[must_use]
pub fn divide_line(segments: &[Segment], cuts: &[usize]) -> Vec<Vec<Segment>> {
    let total = line_length(segments);
    let mut start = 0;
    cuts.iter()
        .map(|&cut| {
            let cut = cut.max(start);
            let piece = line_crop(segments, start, cut, total);
            start = cut;
            piece
        })
        .collect()
}
