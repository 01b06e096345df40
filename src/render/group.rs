//! Several renderables stacked vertically.

use super::{Content, Measurement, RenderOptions, Renderable};
use crate::segment::Segment;
use crate::style::Style;

/// Renders each child in turn, every child starting on a fresh line.
///
/// Useful when one logical entry (a chat message, say) is a header, a body
/// and a blank separator that must be added and removed together.
#[derive(Clone, Debug, Default)]
pub struct Group {
    children: Vec<Content>,
}

impl Group {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Group::push`].
    #[must_use]
    pub fn with(mut self, child: impl Into<Content>) -> Self {
        self.push(child);
        self
    }

    pub fn push(&mut self, child: impl Into<Content>) {
        self.children.push(child.into());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<C: Into<Content>> FromIterator<C> for Group {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Self {
            children: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl Renderable for Group {
    fn measure(&self, options: &RenderOptions) -> Measurement {
        self.children
            .iter()
            .map(|child| child.as_renderable().measure(options))
            .fold(Measurement::default(), Measurement::union)
    }

    fn render(&self, options: &RenderOptions) -> Vec<Segment> {
        let mut out = Vec::new();
        for child in &self.children {
            let segments = child.as_renderable().render(options);
            let terminated = segments
                .iter()
                .rev()
                .find(|s| !s.is_empty())
                .is_none_or(|s| s.text().ends_with('\n'));
            out.extend(segments);
            if !terminated {
                out.push(Segment::with_method("\n", Style::NONE, options.width_method));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{Divider, Text};
    use crate::strip::Strip;
    use std::sync::Arc;

    #[test]
    fn test_children_stack() {
        let group = Group::new()
            .with(Arc::new(Divider::new("Ann").width(10)) as Arc<dyn Renderable>)
            .with("hello there")
            .with("\n");
        let lines = Strip::from_segments(group.render(&RenderOptions::default()));
        let texts: Vec<String> = lines.iter().map(Strip::text).collect();
        assert_eq!(texts, vec!["── Ann ───", "hello there", ""]);
    }

    #[test]
    fn test_unterminated_child_gets_newline() {
        #[derive(Debug)]
        struct Raw;
        impl Renderable for Raw {
            fn measure(&self, _: &RenderOptions) -> Measurement {
                Measurement::new(3, 3)
            }
            fn render(&self, _: &RenderOptions) -> Vec<Segment> {
                vec![Segment::plain("raw")]
            }
        }

        let group = Group::new()
            .with(Arc::new(Raw) as Arc<dyn Renderable>)
            .with(Text::new("next"));
        let lines = Strip::from_segments(group.render(&RenderOptions::default()));
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text(), "raw");
    }

    #[test]
    fn test_measure_is_widest_child() {
        let group: Group = ["ab cd", "abcdef"].into_iter().collect();
        assert_eq!(group.len(), 2);
        assert_eq!(
            group.measure(&RenderOptions::default()),
            Measurement::new(6, 6)
        );
    }
}
