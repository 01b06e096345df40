//! A group of strips rendered from one content item.

use crate::strip::Strip;
use std::sync::Arc;

/// An immutable, ordered run of [`Strip`]s.
///
/// Blocks compare structurally, so two renders of the same item at the same
/// width are equal. Merging never mutates; it builds a new block.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Block {
    strips: Arc<[Strip]>,
}

impl Block {
    #[must_use]
    pub fn new<I>(strips: I) -> Self
    where
        I: IntoIterator<Item = Strip>,
    {
        Self {
            strips: strips.into_iter().collect(),
        }
    }

    /// Number of lines.
    #[must_use]
    pub fn height(&self) -> usize {
        self.strips.len()
    }

    /// Widest strip, in cells.
    #[must_use]
    pub fn width(&self) -> usize {
        self.strips
            .iter()
            .map(Strip::cell_length)
            .max()
            .unwrap_or(0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strips.is_empty()
    }

    #[must_use]
    pub fn strips(&self) -> &[Strip] {
        &self.strips
    }

    #[must_use]
    pub fn get(&self, line: usize) -> Option<&Strip> {
        self.strips.get(line)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Strip> {
        self.strips.iter()
    }

    /// A new block with `other`'s lines after this one's.
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        if other.is_empty() {
            return self.clone();
        }
        if self.is_empty() {
            return other.clone();
        }
        Self::new(self.strips.iter().chain(other.strips.iter()).cloned())
    }
}

impl FromIterator<Strip> for Block {
    fn from_iter<I: IntoIterator<Item = Strip>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a Block {
    type Item = &'a Strip;
    type IntoIter = std::slice::Iter<'a, Strip>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::Segment;

    fn line(text: &str) -> Strip {
        Strip::new(vec![Segment::plain(text)])
    }

    #[test]
    fn test_height_and_width() {
        let block = Block::new(vec![line("ab"), line("abcd"), line("")]);
        assert_eq!(block.height(), 3);
        assert_eq!(block.width(), 4);
        assert_eq!(block.get(1).map(Strip::text), Some("abcd".to_string()));
        assert!(block.get(3).is_none());
    }

    #[test]
    fn test_structural_equality() {
        let a = Block::new(vec![line("x"), line("y")]);
        let b: Block = vec![line("x"), line("y")].into_iter().collect();
        assert_eq!(a, b);
        assert_ne!(a, Block::new(vec![line("y"), line("x")]));
    }

    #[test]
    fn test_merge_appends() {
        let a = Block::new(vec![line("1")]);
        let b = Block::new(vec![line("2"), line("3")]);
        let merged = a.merge(&b);
        assert_eq!(merged.height(), 3);
        let texts: Vec<String> = merged.iter().map(Strip::text).collect();
        assert_eq!(texts, vec!["1", "2", "3"]);
        assert_eq!(a.height(), 1);
    }

    #[test]
    fn test_merge_with_empty() {
        let a = Block::new(vec![line("1")]);
        assert_eq!(a.merge(&Block::default()), a);
        assert_eq!(Block::default().merge(&a), a);
        assert!(Block::default().is_empty());
    }
}
