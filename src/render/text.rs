//! Styled text with word wrapping.

use super::{Measurement, Overflow, RenderOptions, Renderable};
use crate::segment::Segment;
use crate::style::Style;
use crate::unicode::{WidthMethod, grapheme_widths};

/// A run of text with its own style.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Span {
    pub text: String,
    pub style: Style,
}

/// Styled text made of spans over a base style.
///
/// Hard line breaks (`\n`) are always honored. With wrapping enabled, lines
/// break at whitespace; whitespace at a break is dropped. Tabs expand to the
/// next tab stop.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Text {
    spans: Vec<Span>,
    style: Style,
}

/// One grapheme placed on a line.
#[derive(Clone, Copy, Debug)]
struct Glyph<'a> {
    text: &'a str,
    style: Style,
    width: usize,
}

impl Glyph<'_> {
    fn is_space(&self) -> bool {
        self.text.chars().all(char::is_whitespace)
    }
}

impl Text {
    /// Unstyled text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self::styled(text, Style::NONE)
    }

    /// Text with a base style.
    #[must_use]
    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        let text = text.into();
        let spans = if text.is_empty() {
            Vec::new()
        } else {
            vec![Span {
                text,
                style: Style::NONE,
            }]
        };
        Self { spans, style }
    }

    /// Build from `(text, style)` pieces.
    #[must_use]
    pub fn assemble<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = (S, Style)>,
        S: Into<String>,
    {
        let mut text = Self::default();
        for (part, style) in parts {
            text.push(part, style);
        }
        text
    }

    /// Append a span.
    pub fn push(&mut self, text: impl Into<String>, style: Style) {
        let text = text.into();
        if !text.is_empty() {
            self.spans.push(Span { text, style });
        }
    }

    /// Builder form of [`Text::push`].
    #[must_use]
    pub fn with(mut self, text: impl Into<String>, style: Style) -> Self {
        self.push(text, style);
        self
    }

    #[must_use]
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    #[must_use]
    pub fn style(&self) -> Style {
        self.style
    }

    /// The text with styles dropped.
    #[must_use]
    pub fn plain(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Split into hard lines of measured glyphs, tabs expanded.
    fn glyph_lines(&self, tab_width: u8, method: WidthMethod) -> Vec<Vec<Glyph<'_>>> {
        let tab_width = usize::from(tab_width.max(1));
        let mut lines = vec![Vec::new()];
        let mut col = 0;

        for span in &self.spans {
            let style = self.style.merge(span.style);
            for (grapheme, width) in grapheme_widths(&span.text, method) {
                if grapheme == "\n" || grapheme == "\r\n" {
                    lines.push(Vec::new());
                    col = 0;
                    continue;
                }
                let (text, width) = if grapheme == "\t" {
                    (TAB_FILL, tab_width - col % tab_width)
                } else {
                    (grapheme, width)
                };
                if let Some(line) = lines.last_mut() {
                    line.push(Glyph { text, style, width });
                }
                col += width;
            }
        }

        if lines.len() > 1 && lines.last().is_some_and(Vec::is_empty) {
            lines.pop();
        }
        lines
    }
}

/// Placeholder text for an expanded tab; only its width matters.
const TAB_FILL: &str = "\t";

/// Greedy word wrap of one hard line into glyph index runs.
fn wrap_line(glyphs: &[Glyph<'_>], width: usize, overflow: Overflow) -> Vec<Vec<usize>> {
    let width = width.max(1);
    let mut lines: Vec<Vec<usize>> = Vec::new();
    let mut current: Vec<usize> = Vec::new();
    let mut current_width = 0;
    let mut wrapped = false;

    let mut start = 0;
    while start < glyphs.len() {
        let space = glyphs[start].is_space();
        let mut end = start;
        while end < glyphs.len() && glyphs[end].is_space() == space {
            end += 1;
        }
        let token_width: usize = glyphs[start..end].iter().map(|g| g.width).sum();

        if space {
            if !(wrapped && current.is_empty()) {
                if current_width + token_width <= width {
                    current.extend(start..end);
                    current_width += token_width;
                } else {
                    flush_line(&mut lines, &mut current, glyphs);
                    current_width = 0;
                    wrapped = true;
                }
            }
        } else if current_width + token_width <= width {
            current.extend(start..end);
            current_width += token_width;
        } else {
            if !current.is_empty() {
                flush_line(&mut lines, &mut current, glyphs);
                wrapped = true;
            }
            current_width = 0;
            if token_width <= width {
                current.extend(start..end);
                current_width = token_width;
            } else {
                match overflow {
                    Overflow::Fold => {
                        for index in start..end {
                            let w = glyphs[index].width;
                            if current_width + w > width && !current.is_empty() {
                                lines.push(std::mem::take(&mut current));
                                current_width = 0;
                            }
                            current.push(index);
                            current_width += w;
                        }
                    }
                    Overflow::Crop => {
                        for index in start..end {
                            let w = glyphs[index].width;
                            if current_width + w > width && !current.is_empty() {
                                break;
                            }
                            current.push(index);
                            current_width += w;
                        }
                        lines.push(std::mem::take(&mut current));
                        current_width = 0;
                    }
                    Overflow::Ignore => {
                        current.extend(start..end);
                        lines.push(std::mem::take(&mut current));
                        current_width = 0;
                    }
                }
                wrapped = true;
            }
        }
        start = end;
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Push `current` as a finished line, minus trailing whitespace.
fn flush_line(lines: &mut Vec<Vec<usize>>, current: &mut Vec<usize>, glyphs: &[Glyph<'_>]) {
    while current.last().is_some_and(|&i| glyphs[i].is_space()) {
        current.pop();
    }
    lines.push(std::mem::take(current));
}

/// Merge consecutive same-style glyphs into segments.
fn push_segments<'a, 'b: 'a, I>(out: &mut Vec<Segment>, glyphs: I, method: WidthMethod)
where
    I: IntoIterator<Item = &'a Glyph<'b>>,
{
    let mut run = String::new();
    let mut run_style = None;
    for glyph in glyphs {
        if run_style != Some(glyph.style) && !run.is_empty() {
            if let Some(style) = run_style {
                out.push(Segment::with_method(std::mem::take(&mut run), style, method));
            }
        }
        run_style = Some(glyph.style);
        if glyph.text == TAB_FILL {
            run.push_str(&" ".repeat(glyph.width));
        } else {
            run.push_str(glyph.text);
        }
    }
    if let Some(style) = run_style {
        if !run.is_empty() {
            out.push(Segment::with_method(run, style, method));
        }
    }
}

impl Renderable for Text {
    fn measure(&self, options: &RenderOptions) -> Measurement {
        let lines = self.glyph_lines(options.tab_width, options.width_method);
        let mut maximum = 0;
        let mut minimum = 0;
        for line in &lines {
            maximum = maximum.max(line.iter().map(|g| g.width).sum());
            let mut word = 0;
            for glyph in line {
                if glyph.is_space() {
                    word = 0;
                } else {
                    word += glyph.width;
                    minimum = minimum.max(word);
                }
            }
        }
        Measurement::new(minimum, maximum).clamp(options.max_width)
    }

    fn render(&self, options: &RenderOptions) -> Vec<Segment> {
        if self.is_empty() {
            return Vec::new();
        }
        let method = options.width_method;
        let mut out = Vec::new();

        for line in self.glyph_lines(options.tab_width, method) {
            if options.wrap && options.is_bounded() {
                for run in wrap_line(&line, options.max_width, options.overflow) {
                    push_segments(&mut out, run.iter().map(|&i| &line[i]), method);
                    out.push(Segment::with_method("\n", self.style, method));
                }
            } else {
                push_segments(&mut out, line.iter(), method);
                out.push(Segment::with_method("\n", self.style, method));
            }
        }
        out
    }
}

impl From<&str> for Text {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Text {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use crate::strip::Strip;

    fn render_lines(text: &Text, options: &RenderOptions) -> Vec<String> {
        Strip::from_segments(text.render(options))
            .iter()
            .map(Strip::text)
            .collect()
    }

    #[test]
    fn test_empty_text_renders_nothing() {
        assert!(Text::new("").render(&RenderOptions::default()).is_empty());
        assert!(Text::default().is_empty());
    }

    #[test]
    fn test_newline_only_is_one_blank_line() {
        let lines = render_lines(&Text::new("\n"), &RenderOptions::default());
        assert_eq!(lines, vec![""]);
    }

    #[test]
    fn test_trailing_newline_adds_no_line() {
        let lines = render_lines(&Text::new("a\nb\n"), &RenderOptions::default());
        assert_eq!(lines, vec!["a", "b"]);
    }

    #[test]
    fn test_measure() {
        let text = Text::new("hello wide world\nhi");
        let m = text.measure(&RenderOptions::default());
        assert_eq!(m, Measurement::new(5, 16));
        let clamped = text.measure(&RenderOptions::default().with_width(10));
        assert_eq!(clamped.maximum, 10);
    }

    #[test]
    fn test_word_wrap() {
        let text = Text::new("the quick brown fox");
        let lines = render_lines(&text, &RenderOptions::default().with_width(10));
        assert_eq!(lines, vec!["the quick", "brown fox"]);
    }

    #[test]
    fn test_no_wrap_keeps_line_whole() {
        let text = Text::new("the quick brown fox");
        let lines = render_lines(&text, &RenderOptions::default().with_width(10).no_wrap());
        assert_eq!(lines, vec!["the quick brown fox"]);
    }

    #[test]
    fn test_fold_long_word() {
        let text = Text::new("abcdefghij xy");
        let lines = render_lines(&text, &RenderOptions::default().with_width(4));
        assert_eq!(lines, vec!["abcd", "efgh", "ij", "xy"]);
    }

    #[test]
    fn test_crop_long_word() {
        let text = Text::new("abcdefghij xy");
        let options = RenderOptions::default()
            .with_width(4)
            .overflow(Overflow::Crop);
        assert_eq!(render_lines(&text, &options), vec!["abcd", "xy"]);
    }

    #[test]
    fn test_fold_wide_glyphs() {
        let text = Text::new("漢字漢字漢");
        let lines = render_lines(&text, &RenderOptions::default().with_width(4));
        assert_eq!(lines, vec!["漢字", "漢字", "漢"]);
    }

    #[test]
    fn test_tabs_expand_to_stops() {
        let text = Text::new("a\tb");
        let lines = render_lines(&text, &RenderOptions::default().tab_width(4));
        assert_eq!(lines, vec!["a   b"]);
    }

    #[test]
    fn test_styles_are_merged_per_span() {
        let text = Text::styled("", Style::bg(Rgba::BLACK))
            .with("key", Style::fg(Rgba::RED))
            .with(": value", Style::NONE);
        let segments = text.render(&RenderOptions::default());
        assert_eq!(segments[0].text(), "key");
        assert_eq!(segments[0].style(), Style::bg(Rgba::BLACK).with_fg(Rgba::RED));
        assert_eq!(segments[1].text(), ": value");
        assert_eq!(segments[1].style(), Style::bg(Rgba::BLACK));
        assert_eq!(text.plain(), "key: value");
    }

    #[test]
    fn test_assemble() {
        let text = Text::assemble([("a", Style::bold()), ("b", Style::NONE)]);
        assert_eq!(text.spans().len(), 2);
        assert_eq!(text.plain(), "ab");
    }
}
