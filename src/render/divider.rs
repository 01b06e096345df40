//! Horizontal rule with an inline label.

use super::{Measurement, RenderOptions, Renderable};
use crate::segment::Segment;
use crate::style::Style;
use crate::unicode::display_width_with_method;

const LINE_CHAR: &str = "─";
/// Blank cells on each side of the label.
const LABEL_SPACING: usize = 1;

/// Where the label sits on the rule.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LabelAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// A one-line rule such as `── Alice ────────`.
///
/// The rule spans the fixed width if one is set, otherwise the render width.
/// When neither bounds it, the rule is just wide enough for the padded label.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Divider {
    label: String,
    label_style: Style,
    line_style: Style,
    label_padding: usize,
    align: LabelAlign,
    width: Option<usize>,
}

impl Divider {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            label_style: Style::NONE,
            line_style: Style::NONE,
            label_padding: 2,
            align: LabelAlign::Left,
            width: None,
        }
    }

    #[must_use]
    pub fn label_style(mut self, style: Style) -> Self {
        self.label_style = style;
        self
    }

    #[must_use]
    pub fn line_style(mut self, style: Style) -> Self {
        self.line_style = style;
        self
    }

    /// Rule cells kept before a left label or after a right one.
    #[must_use]
    pub fn label_padding(mut self, padding: usize) -> Self {
        self.label_padding = padding;
        self
    }

    #[must_use]
    pub fn align(mut self, align: LabelAlign) -> Self {
        self.align = align;
        self
    }

    #[must_use]
    pub fn width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    fn label_width(&self, options: &RenderOptions) -> usize {
        display_width_with_method(&self.label, options.width_method) + LABEL_SPACING * 2
    }

    fn content_width(&self, options: &RenderOptions) -> usize {
        if let Some(width) = self.width {
            return width;
        }
        if options.is_bounded() {
            options.max_width
        } else {
            self.label_width(options) + self.label_padding
        }
    }
}

impl Renderable for Divider {
    fn measure(&self, options: &RenderOptions) -> Measurement {
        let width = self.content_width(options);
        Measurement::new(width, width).clamp(options.max_width)
    }

    fn render(&self, options: &RenderOptions) -> Vec<Segment> {
        let width = self.content_width(options);
        let label_width = self.label_width(options);
        let free = width.saturating_sub(label_width);

        let (left, right) = match self.align {
            LabelAlign::Left => {
                let left = self.label_padding.min(free);
                (left, free - left)
            }
            LabelAlign::Right => {
                let right = self.label_padding.min(free);
                (free - right, right)
            }
            LabelAlign::Center => (free / 2, free - free / 2),
        };

        let spacing = " ".repeat(LABEL_SPACING);
        let method = options.width_method;
        let mut segments = Vec::with_capacity(4);
        if left > 0 {
            segments.push(Segment::with_method(
                LINE_CHAR.repeat(left),
                self.line_style,
                method,
            ));
        }
        segments.push(Segment::with_method(
            format!("{spacing}{}{spacing}", self.label),
            self.label_style,
            method,
        ));
        if right > 0 {
            segments.push(Segment::with_method(
                LINE_CHAR.repeat(right),
                self.line_style,
                method,
            ));
        }
        segments.push(Segment::with_method("\n", Style::NONE, method));
        segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use crate::strip::Strip;

    fn render_text(divider: &Divider, options: &RenderOptions) -> String {
        let lines = Strip::from_segments(divider.render(options));
        assert_eq!(lines.len(), 1);
        lines[0].text()
    }

    #[test]
    fn test_left_aligned() {
        let divider = Divider::new("Bob").width(12);
        assert_eq!(render_text(&divider, &RenderOptions::default()), "── Bob ─────");
    }

    #[test]
    fn test_right_aligned() {
        let divider = Divider::new("Bob").width(12).align(LabelAlign::Right);
        assert_eq!(render_text(&divider, &RenderOptions::default()), "───── Bob ──");
    }

    #[test]
    fn test_center_aligned_uses_render_width() {
        let divider = Divider::new("ab").align(LabelAlign::Center);
        let options = RenderOptions::default().with_width(10);
        assert_eq!(render_text(&divider, &options), "─── ab ───");
        assert_eq!(divider.measure(&options), Measurement::new(10, 10));
    }

    #[test]
    fn test_unbounded_fits_label() {
        let divider = Divider::new("Carol");
        let options = RenderOptions::default();
        assert_eq!(divider.measure(&options).maximum, 9);
        assert_eq!(render_text(&divider, &options), "── Carol ");
    }

    #[test]
    fn test_too_narrow_keeps_label() {
        let divider = Divider::new("Label").width(4);
        assert_eq!(render_text(&divider, &RenderOptions::default()), " Label ");
    }

    #[test]
    fn test_styles() {
        let divider = Divider::new("x")
            .width(6)
            .label_style(Style::bold())
            .line_style(Style::fg(Rgba::GRAY));
        let segments = divider.render(&RenderOptions::default());
        assert_eq!(segments[0].style(), Style::fg(Rgba::GRAY));
        assert_eq!(segments[1].style(), Style::bold());
    }
}
