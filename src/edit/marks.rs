//! Mark and clear operations on a decorated document
//!
//! These are the user actions that happen between a render and the next
//! extraction. They never touch the input document; a new one is returned
//! with leaves split at the range boundaries and offsets renumbered.

use crate::error::{LayerError, LayerResult};
use crate::models::{DecoratedDocument, DecoratedParagraph, Layer, LayerKind, Leaf, Marks};
use crate::text::Span;

/// Tag every character in `span` with `layer`; a color replaces any other color
pub fn apply_mark(
    doc: &DecoratedDocument,
    span: Span,
    layer: &Layer,
) -> LayerResult<DecoratedDocument> {
    log::debug!("mark {} with {}", span, layer);
    retag(doc, span, |marks| marks.set(layer))
}

/// Remove a layer kind from every character in `span`
pub fn clear_mark(
    doc: &DecoratedDocument,
    span: Span,
    kind: LayerKind,
) -> LayerResult<DecoratedDocument> {
    log::debug!("clear {:?} on {}", kind, span);
    retag(doc, span, |marks| match kind {
        LayerKind::Color => marks.color = None,
        LayerKind::Underline => marks.underline = false,
        LayerKind::Bold => marks.bold = false,
        LayerKind::Italic => marks.italic = false,
        LayerKind::All => {
            *marks = Marks {
                is_diff: marks.is_diff,
                ..Marks::default()
            }
        }
    })
}

fn slice_leaf(leaf: &Leaf, from: usize, to: usize) -> Leaf {
    let text: String = leaf.text.chars().skip(from).take(to - from).collect();
    Leaf::new(text, 0, 0, leaf.marks.clone())
}

fn retag(
    doc: &DecoratedDocument,
    span: Span,
    apply: impl Fn(&mut Marks),
) -> LayerResult<DecoratedDocument> {
    let total = doc.paragraphs.iter().map(DecoratedParagraph::effective_len).sum::<usize>()
        + doc.paragraphs.len().saturating_sub(1);
    if span.end > total {
        return Err(LayerError::OutOfBounds {
            what: "mark range",
            start: span.start,
            end: span.end,
            len: total,
        });
    }
    if span.is_empty() {
        return Ok(doc.clone());
    }

    let mut offset = 0;
    let mut paragraphs = Vec::with_capacity(doc.paragraphs.len());
    for (index, paragraph) in doc.paragraphs.iter().enumerate() {
        if index > 0 {
            offset += 1;
        }
        let mut leaves = Vec::with_capacity(paragraph.leaves.len() + 2);
        for leaf in &paragraph.leaves {
            let len = leaf.effective_len();
            let leaf_span = Span::new(offset, offset + len);
            offset += len;

            if leaf.is_placeholder() {
                let mut marker = leaf.clone();
                if span.start < leaf_span.start && leaf_span.start < span.end {
                    apply(&mut marker.marks);
                }
                leaves.push(marker);
                continue;
            }

            let Some(hit) = leaf_span.intersect(&span) else {
                leaves.push(leaf.clone());
                continue;
            };
            let from = hit.start - leaf_span.start;
            let to = hit.end - leaf_span.start;
            if from > 0 {
                leaves.push(slice_leaf(leaf, 0, from));
            }
            let mut middle = slice_leaf(leaf, from, to);
            apply(&mut middle.marks);
            leaves.push(middle);
            if to < len {
                leaves.push(slice_leaf(leaf, to, len));
            }
        }
        paragraphs.push(DecoratedParagraph::new(leaves));
    }

    let mut out = DecoratedDocument::new(paragraphs);
    out.renumber();
    Ok(out)
}
