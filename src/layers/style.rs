//! Style layer compositor
//!
//! Run once per style layer, underline first, then bold, then italic, so a
//! fragment can accumulate several style flags on top of its color.

use super::checks::sanitize_spans;
use crate::error::LayerResult;
use crate::models::{Fragment, Highlight, Layer};
use crate::text::Span;

/// Sanitized spans of one style layer, sorted by start
pub fn style_spans(highlights: &[Highlight], layer: &Layer, len: usize) -> LayerResult<Vec<Span>> {
    let mut spans = sanitize_spans(
        "style highlight",
        highlights
            .iter()
            .filter(|h| &h.layer == layer)
            .map(Highlight::span),
        len,
    )?;
    spans.sort();
    Ok(spans)
}

/// Split fragments at the boundaries of `spans` and tag the covered parts.
///
/// `spans` must be sorted by start. Overlapping or abutting spans over the
/// same fragment are merged by the moving cursor instead of producing
/// duplicate sub-fragments. Placeholders pass through untouched.
pub fn composite_style(fragments: Vec<Fragment>, layer: &Layer, spans: &[Span]) -> Vec<Fragment> {
    let mut out = Vec::with_capacity(fragments.len());

    for fragment in fragments {
        if fragment.is_placeholder() || fragment.start == fragment.end {
            out.push(fragment);
            continue;
        }

        let mut cursor = fragment.start;
        let mut pieces = Vec::new();
        for span in spans.iter().take_while(|s| s.start < fragment.end) {
            let start = span.start.max(cursor);
            let end = span.end.min(fragment.end);
            if end <= start {
                continue;
            }
            if start > cursor {
                pieces.push(fragment.slice(cursor, start));
            }
            let mut tagged = fragment.slice(start, end);
            tagged.marks.set(layer);
            pieces.push(tagged);
            cursor = end;
        }

        if pieces.is_empty() {
            out.push(fragment);
            continue;
        }
        if cursor < fragment.end {
            pieces.push(fragment.slice(cursor, fragment.end));
        }
        out.extend(pieces);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Marks;

    fn whole(text: &str) -> Vec<Fragment> {
        vec![Fragment::new(text.to_string(), 0, text.chars().count(), Marks::with_color("red"))]
    }

    #[test]
    fn test_three_way_split_keeps_color() {
        let out = composite_style(whole("abcdef"), &Layer::Bold, &[Span::new(2, 4)]);
        let summary: Vec<_> = out.iter().map(|f| (f.text.as_str(), f.marks.bold)).collect();
        assert_eq!(summary, vec![("ab", false), ("cd", true), ("ef", false)]);
        assert!(out.iter().all(|f| f.marks.color.as_deref() == Some("red")));
    }

    #[test]
    fn test_overlapping_spans_do_not_duplicate() {
        let out = composite_style(
            whole("abcdefgh"),
            &Layer::Underline,
            &[Span::new(1, 4), Span::new(2, 6), Span::new(6, 7)],
        );
        let summary: Vec<_> = out.iter().map(|f| (f.span(), f.marks.underline)).collect();
        assert_eq!(
            summary,
            vec![
                (Span::new(0, 1), false),
                (Span::new(1, 4), true),
                (Span::new(4, 6), true),
                (Span::new(6, 7), true),
                (Span::new(7, 8), false),
            ]
        );
    }

    #[test]
    fn test_span_covering_fragment_tags_it_whole() {
        let fragments = vec![
            Fragment::new("ab".into(), 0, 2, Marks::default()),
            Fragment::new("cd".into(), 2, 4, Marks::with_color("red")),
        ];
        let out = composite_style(fragments, &Layer::Italic, &[Span::new(0, 4)]);
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|f| f.marks.italic));
        assert_eq!(out[1].marks.color.as_deref(), Some("red"));
    }

    #[test]
    fn test_style_spans_filter_by_layer() {
        let highlights = vec![
            Highlight::new(Layer::Bold, 4, 6),
            Highlight::new(Layer::Italic, 0, 2),
            Highlight::new(Layer::Bold, 0, 1),
            Highlight::new(Layer::Bold, 3, 3),
        ];
        let spans = style_spans(&highlights, &Layer::Bold, 10).unwrap();
        assert_eq!(spans, vec![Span::new(0, 1), Span::new(4, 6)]);
    }
}
