//! Input sanitization and per-stage invariant checks
//!
//! Empty or inverted spans are dropped quietly. Spans reaching past the text
//! and fragment streams that no longer reproduce the flattened text are
//! errors.

use crate::error::{LayerError, LayerResult};
use crate::models::{DecoratedDocument, Fragment};
use crate::text::{FlatText, Span};

/// Drop empty/inverted spans, reject spans past the end of the text
pub fn sanitize_spans(
    what: &'static str,
    spans: impl IntoIterator<Item = Span>,
    len: usize,
) -> LayerResult<Vec<Span>> {
    let mut kept = Vec::new();
    for span in spans {
        if span.is_empty() {
            log::debug!("dropping empty {} {}", what, span);
            continue;
        }
        if span.end > len {
            return Err(LayerError::OutOfBounds {
                what,
                start: span.start,
                end: span.end,
                len,
            });
        }
        kept.push(span);
    }
    Ok(kept)
}

/// Check that `fragments` cover `[0, N)` contiguously with matching text.
///
/// Placeholders may sit at any offset but never twice at the same one.
pub fn verify_fragments(
    stage: &'static str,
    fragments: &[Fragment],
    flat: &FlatText,
) -> LayerResult<()> {
    let mut cursor = 0;
    let mut last_placeholder: Option<usize> = None;

    for fragment in fragments {
        if fragment.is_placeholder() {
            if fragment.start != cursor || fragment.end != cursor {
                return Err(LayerError::invariant(
                    stage,
                    format!("placeholder {} is not at offset {}", fragment.span(), cursor),
                ));
            }
            if fragment.text.is_empty() {
                return Err(LayerError::invariant(
                    stage,
                    format!("placeholder at {} has no glyph", cursor),
                ));
            }
            if last_placeholder == Some(cursor) {
                return Err(LayerError::invariant(
                    stage,
                    format!("two placeholders at offset {}", cursor),
                ));
            }
            last_placeholder = Some(cursor);
            continue;
        }

        if fragment.start != cursor {
            return Err(LayerError::invariant(
                stage,
                format!("fragment {} does not start at offset {}", fragment.span(), cursor),
            ));
        }
        if fragment.end <= fragment.start || fragment.end > flat.len() {
            return Err(LayerError::invariant(
                stage,
                format!("fragment {} is empty or outside [0, {}]", fragment.span(), flat.len()),
            ));
        }
        let expected = &flat.chars()[fragment.start..fragment.end];
        if !fragment.text.chars().eq(expected.iter().copied()) {
            return Err(LayerError::invariant(
                stage,
                format!(
                    "fragment {} text {:?} does not match base text",
                    fragment.span(),
                    fragment.text
                ),
            ));
        }
        cursor = fragment.end;
    }

    if cursor != flat.len() {
        return Err(LayerError::invariant(
            stage,
            format!("fragments stop at {} of {}", cursor, flat.len()),
        ));
    }
    Ok(())
}

/// Check the assembled document against the base text
pub fn verify_document(doc: &DecoratedDocument, flat: &FlatText) -> LayerResult<()> {
    const STAGE: &str = "paragraph assembly";

    let mut offset = 0;
    for (index, paragraph) in doc.paragraphs.iter().enumerate() {
        if index > 0 {
            if flat.chars().get(offset) != Some(&'\n') {
                return Err(LayerError::invariant(
                    STAGE,
                    format!("paragraph break at {} is not a newline", offset),
                ));
            }
            offset += 1;
        }
        if paragraph.leaves.is_empty() {
            return Err(LayerError::invariant(
                STAGE,
                format!("paragraph {} has no leaves", index),
            ));
        }
        for leaf in &paragraph.leaves {
            let len = leaf.effective_len();
            if leaf.start != offset || leaf.end != offset + len {
                return Err(LayerError::invariant(
                    STAGE,
                    format!("leaf {} should start at {} with length {}", leaf.span(), offset, len),
                ));
            }
            offset += len;
        }
    }

    if offset != flat.len() {
        return Err(LayerError::invariant(
            STAGE,
            format!("document covers {} of {} characters", offset, flat.len()),
        ));
    }
    if doc.plain_text() != flat.as_string() {
        return Err(LayerError::invariant(STAGE, "document text differs from base text"));
    }
    Ok(())
}
