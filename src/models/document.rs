//! Decorated document handed to the renderer
//!
//! Paragraphs of leaves. Each leaf is a rendered fragment: its offset range
//! in the flattened text, its text and its attributes. Comment placeholder
//! leaves carry the grouped comments and contribute zero length.

use super::annotations::Comment;
use super::fragment::Marks;
use crate::text::Span;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecoratedDocument {
    pub paragraphs: Vec<DecoratedParagraph>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecoratedParagraph {
    pub leaves: Vec<Leaf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leaf {
    pub text: String,
    pub start: usize,
    pub end: usize,
    #[serde(flatten)]
    pub marks: Marks,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<Comment>>,
}

impl Leaf {
    pub fn new(text: impl Into<String>, start: usize, end: usize, marks: Marks) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            marks,
            comments: None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.comments.is_some()
    }

    /// Number of base-text characters this leaf stands for
    pub fn effective_len(&self) -> usize {
        if self.is_placeholder() {
            0
        } else {
            self.text.chars().count()
        }
    }

    pub fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }
}

impl DecoratedParagraph {
    pub fn new(leaves: Vec<Leaf>) -> Self {
        Self { leaves }
    }

    /// Concatenated base text of the paragraph (placeholders skipped)
    pub fn plain_text(&self) -> String {
        self.leaves
            .iter()
            .filter(|leaf| !leaf.is_placeholder())
            .map(|leaf| leaf.text.as_str())
            .collect()
    }

    pub fn effective_len(&self) -> usize {
        self.leaves.iter().map(Leaf::effective_len).sum()
    }
}

impl DecoratedDocument {
    pub fn new(paragraphs: Vec<DecoratedParagraph>) -> Self {
        Self { paragraphs }
    }

    /// The flattened text this document renders, paragraphs joined by `\n`
    pub fn plain_text(&self) -> String {
        self.paragraphs
            .iter()
            .map(DecoratedParagraph::plain_text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn leaves(&self) -> impl Iterator<Item = &Leaf> {
        self.paragraphs.iter().flat_map(|p| p.leaves.iter())
    }

    pub fn placeholders(&self) -> impl Iterator<Item = &Leaf> {
        self.leaves().filter(|leaf| leaf.is_placeholder())
    }

    /// Recompute every leaf's offsets from effective lengths.
    ///
    /// Edits that split or retag leaves call this so offsets stay consistent
    /// with the running-counter addressing used by extraction.
    pub fn renumber(&mut self) {
        let mut offset = 0;
        for (index, paragraph) in self.paragraphs.iter_mut().enumerate() {
            if index > 0 {
                offset += 1;
            }
            for leaf in &mut paragraph.leaves {
                let len = leaf.effective_len();
                leaf.start = offset;
                leaf.end = offset + len;
                offset += len;
            }
        }
    }
}
