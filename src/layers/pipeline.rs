//! Forward pipeline: base text + annotation layers -> decorated document
//!
//! ```text
//! FlatText ──▶ color ──▶ underline ──▶ bold ──▶ italic ──▶ diff ──▶ comments ──▶ paragraphs
//! ```
//!
//! Each stage builds a fresh fragment vector from the previous one. With
//! `verify_stages` enabled the offset invariants are checked after every
//! stage and the first violation is returned as an error.

use super::checks::{verify_document, verify_fragments};
use super::color::{build_color_layer, resolve_colors};
use super::comments::{group_comments, split_comments};
use super::diff::{diff_spans, split_diffs};
use super::paragraphs::assemble_paragraphs;
use super::style::{composite_style, style_spans};
use crate::config::EngineConfig;
use crate::error::LayerResult;
use crate::models::{Comment, DecoratedDocument, DiffRange, Fragment, Highlight, STYLE_ORDER};
use crate::text::FlatText;

/// Everything the collaborators supply for one render
#[derive(Debug, Clone, Copy, Default)]
pub struct LayerInputs<'a> {
    pub highlights: &'a [Highlight],
    pub comments: &'a [Comment],
    pub diffs: &'a [DiffRange],
}

impl<'a> LayerInputs<'a> {
    pub fn new(
        highlights: &'a [Highlight],
        comments: &'a [Comment],
        diffs: &'a [DiffRange],
    ) -> Self {
        Self {
            highlights,
            comments,
            diffs,
        }
    }
}

/// Run stages 2-5 and return the flat fragment stream
pub fn layer_fragments(
    flat: &FlatText,
    inputs: LayerInputs<'_>,
    config: &EngineConfig,
) -> LayerResult<Vec<Fragment>> {
    let len = flat.len();
    let check = |stage: &'static str, fragments: &[Fragment]| -> LayerResult<()> {
        log::debug!("{}: {} fragments", stage, fragments.len());
        if config.verify_stages {
            verify_fragments(stage, fragments, flat)?;
        }
        Ok(())
    };

    let colors = resolve_colors(inputs.highlights, len, config.color_overlap)?;
    let mut fragments = build_color_layer(flat, &colors);
    check("color layer", &fragments)?;

    for layer in &STYLE_ORDER {
        let spans = style_spans(inputs.highlights, layer, len)?;
        if spans.is_empty() {
            continue;
        }
        fragments = composite_style(fragments, layer, &spans);
        check("style layer", &fragments)?;
    }

    let ranges = diff_spans(inputs.diffs, len)?;
    fragments = split_diffs(fragments, &ranges);
    check("diff split", &fragments)?;

    let groups = group_comments(inputs.comments, len, config.comment_offsets);
    fragments = split_comments(fragments, groups, &config.placeholder_glyph);
    check("comment split", &fragments)?;

    Ok(fragments)
}

/// Compose the base text and all annotation layers into a decorated document
pub fn apply_layers(
    flat: &FlatText,
    inputs: LayerInputs<'_>,
    config: &EngineConfig,
) -> LayerResult<DecoratedDocument> {
    let fragments = layer_fragments(flat, inputs, config)?;
    let doc = assemble_paragraphs(fragments);
    if config.verify_stages {
        verify_document(&doc, flat)?;
    }
    log::debug!(
        "decorated document: {} paragraphs, {} leaves",
        doc.paragraphs.len(),
        doc.leaves().count()
    );
    Ok(doc)
}
