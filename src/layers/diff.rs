//! Diff splitter
//!
//! Splits fragments at the boundaries of the externally computed
//! disagreement ranges and tags the pieces inside them. Purely additive: the
//! other attributes are copied to every piece.

use super::checks::sanitize_spans;
use crate::error::LayerResult;
use crate::models::{DiffRange, Fragment};
use crate::text::Span;
use std::collections::BTreeSet;

pub fn diff_spans(diffs: &[DiffRange], len: usize) -> LayerResult<Vec<Span>> {
    sanitize_spans("diff range", diffs.iter().map(DiffRange::span), len)
}

pub fn split_diffs(fragments: Vec<Fragment>, ranges: &[Span]) -> Vec<Fragment> {
    if ranges.is_empty() {
        return fragments;
    }

    let boundaries: BTreeSet<usize> = ranges.iter().flat_map(|r| [r.start, r.end]).collect();
    let mut out = Vec::with_capacity(fragments.len() + boundaries.len());

    for fragment in fragments {
        if fragment.is_placeholder() || fragment.start == fragment.end {
            out.push(fragment);
            continue;
        }

        let mut cuts: Vec<usize> = Vec::with_capacity(4);
        cuts.push(fragment.start);
        cuts.extend(boundaries.range(fragment.start + 1..fragment.end).copied());
        cuts.push(fragment.end);

        for pair in cuts.windows(2) {
            let mut piece = if cuts.len() == 2 {
                fragment.clone()
            } else {
                fragment.slice(pair[0], pair[1])
            };
            let span = piece.span();
            piece.marks.is_diff = piece.marks.is_diff || ranges.iter().any(|r| r.overlaps(&span));
            out.push(piece);
        }
    }

    out
}
