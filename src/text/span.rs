//! Half-open offset ranges in the flattened text
//!
//! Every annotation record addresses the same coordinate space: zero-based
//! character indices into the flattened base text.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A range of the flattened text from start (inclusive) to end (exclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Check if this span is empty (start == end)
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if an offset lies inside this span
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.end
    }

    /// True when the two spans share at least one character
    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// The shared part of two spans, if any
    pub fn intersect(&self, other: &Span) -> Option<Span> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        (start < end).then(|| Span::new(start, end))
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_is_half_open() {
        let a = Span::new(0, 3);
        assert!(a.overlaps(&Span::new(2, 5)));
        assert!(!a.overlaps(&Span::new(3, 5)));
        assert!(!a.overlaps(&Span::new(1, 1)));
    }

    #[test]
    fn test_intersect() {
        assert_eq!(Span::new(0, 6).intersect(&Span::new(4, 9)), Some(Span::new(4, 6)));
        assert_eq!(Span::new(0, 4).intersect(&Span::new(4, 9)), None);
    }

    #[test]
    fn test_inverted_span_is_empty() {
        assert!(Span::new(5, 2).is_empty());
        assert_eq!(Span::new(5, 2).len(), 0);
    }
}
