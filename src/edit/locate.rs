//! Offset lookup in a decorated document
//!
//! Offsets are computed the same way the extractor computes them: effective
//! leaf lengths plus one per paragraph break.

use crate::models::DecoratedDocument;
use serde::{Deserialize, Serialize};

/// Where a flattened offset lands in a decorated document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeafLocation {
    pub paragraph: usize,
    pub leaf: usize,
    /// Character offset inside the leaf text
    pub offset_in_leaf: usize,
}

/// Find the text leaf containing `offset`.
///
/// An offset at the end of a paragraph resolves to the end of its last text
/// leaf. Rendered documents always have a text leaf in every paragraph; an
/// edited paragraph left with only placeholders resolves to its first leaf.
/// `None` only when the offset is past the end of the document.
pub fn locate(doc: &DecoratedDocument, offset: usize) -> Option<LeafLocation> {
    let mut cursor = 0;

    for (p, paragraph) in doc.paragraphs.iter().enumerate() {
        if p > 0 {
            cursor += 1;
        }
        let mut last_text: Option<(usize, usize)> = None;
        for (l, leaf) in paragraph.leaves.iter().enumerate() {
            if leaf.is_placeholder() {
                continue;
            }
            let len = leaf.effective_len();
            if offset >= cursor && offset < cursor + len {
                return Some(LeafLocation {
                    paragraph: p,
                    leaf: l,
                    offset_in_leaf: offset - cursor,
                });
            }
            last_text = Some((l, len));
            cursor += len;
        }
        if offset == cursor {
            let (leaf, len) = last_text.unwrap_or((0, 0));
            return Some(LeafLocation {
                paragraph: p,
                leaf,
                offset_in_leaf: len,
            });
        }
    }

    None
}
