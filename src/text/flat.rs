//! Base text normalizer
//!
//! Flattens the paragraph/leaf tree into one addressable string. Leaf texts
//! are concatenated within a paragraph and paragraphs are joined by a single
//! synthetic `\n`, which occupies one offset but belongs to no leaf.
//!
//! Offsets count `char`s, not bytes.

use super::span::Span;
use crate::error::{LayerError, LayerResult};
use crate::models::BaseText;
use serde::{Deserialize, Serialize};

/// A position inside the base text tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextPosition {
    pub paragraph: usize,
    pub leaf: usize,
    pub offset: usize,
}

impl TextPosition {
    pub fn new(paragraph: usize, leaf: usize, offset: usize) -> Self {
        Self {
            paragraph,
            leaf,
            offset,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ParagraphBounds {
    span: Span,
    /// Global span of every leaf, in order
    leaves: Vec<Span>,
}

/// Flattened base text plus the boundary map back to the tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatText {
    chars: Vec<char>,
    paragraphs: Vec<ParagraphBounds>,
}

impl FlatText {
    pub fn normalize(base: &BaseText) -> Self {
        let mut chars = Vec::new();
        let mut paragraphs = Vec::with_capacity(base.paragraphs.len().max(1));

        for (index, paragraph) in base.paragraphs.iter().enumerate() {
            if index > 0 {
                chars.push('\n');
            }
            let start = chars.len();
            let mut leaves = Vec::with_capacity(paragraph.leaves.len());
            for leaf in &paragraph.leaves {
                let leaf_start = chars.len();
                chars.extend(leaf.text.chars());
                leaves.push(Span::new(leaf_start, chars.len()));
            }
            paragraphs.push(ParagraphBounds {
                span: Span::new(start, chars.len()),
                leaves,
            });
        }

        // Empty base text is a single empty paragraph
        if paragraphs.is_empty() {
            paragraphs.push(ParagraphBounds {
                span: Span::new(0, 0),
                leaves: Vec::new(),
            });
        }

        log::debug!(
            "normalized base text: {} chars, {} paragraphs",
            chars.len(),
            paragraphs.len()
        );

        Self { chars, paragraphs }
    }

    /// Flatten a plain string directly (one paragraph per line)
    pub fn from_plain(text: &str) -> Self {
        Self::normalize(&BaseText::from_plain(text))
    }

    /// Length `N` of the offset domain `[0, N]`
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn as_string(&self) -> String {
        self.chars.iter().collect()
    }

    /// Text covered by `span`; the caller guarantees `span.end <= len()`
    pub fn slice(&self, span: Span) -> String {
        self.chars[span.start..span.end].iter().collect()
    }

    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    /// Global spans of every paragraph, excluding the separators
    pub fn paragraph_spans(&self) -> Vec<Span> {
        self.paragraphs.iter().map(|p| p.span).collect()
    }

    /// Map a tree position to its global offset.
    ///
    /// `offset` may equal the leaf length (the position just after the leaf).
    pub fn offset_of(&self, position: TextPosition) -> LayerResult<usize> {
        let invalid = || LayerError::InvalidPosition {
            paragraph: position.paragraph,
            leaf: position.leaf,
            offset: position.offset,
        };
        let paragraph = self.paragraphs.get(position.paragraph).ok_or_else(invalid)?;
        let leaf = paragraph.leaves.get(position.leaf).ok_or_else(invalid)?;
        if position.offset > leaf.len() {
            return Err(invalid());
        }
        Ok(leaf.start + position.offset)
    }

    /// Map a global offset back to the tree.
    ///
    /// Offsets on a leaf boundary resolve to the leaf that starts there; the
    /// offset of a paragraph separator resolves to the end of that paragraph's
    /// last leaf. Returns `None` outside `[0, N]` or inside a paragraph
    /// without leaves.
    pub fn position_of(&self, offset: usize) -> Option<TextPosition> {
        for (p, paragraph) in self.paragraphs.iter().enumerate() {
            if offset > paragraph.span.end {
                continue;
            }
            if offset < paragraph.span.start {
                return None;
            }
            if let Some(l) = paragraph.leaves.iter().position(|leaf| leaf.contains(offset)) {
                return Some(TextPosition::new(p, l, offset - paragraph.leaves[l].start));
            }
            let last = paragraph.leaves.len().checked_sub(1)?;
            let leaf = paragraph.leaves[last];
            return Some(TextPosition::new(p, last, offset - leaf.start));
        }
        None
    }
}
