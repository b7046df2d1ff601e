//! Color layer builder
//!
//! Turns the color highlights into the first fragment stream: colored
//! fragments with uncolored gap fragments between them, covering the whole
//! text with no holes.

use super::checks::sanitize_spans;
use crate::config::ColorOverlapPolicy;
use crate::error::{LayerError, LayerResult};
use crate::models::{Fragment, Highlight, Layer, Marks};
use crate::text::{FlatText, Span};

/// A color span after sanitization and overlap resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorSpan {
    pub span: Span,
    pub code: String,
}

/// Sanitize the color highlights and make them mutually non-overlapping.
///
/// The result is sorted by start.
pub fn resolve_colors(
    highlights: &[Highlight],
    len: usize,
    policy: ColorOverlapPolicy,
) -> LayerResult<Vec<ColorSpan>> {
    let mut colors = Vec::new();
    for highlight in highlights {
        let Layer::Color(code) = &highlight.layer else {
            continue;
        };
        for span in sanitize_spans("color highlight", [highlight.span()], len)? {
            colors.push(ColorSpan {
                span,
                code: code.clone(),
            });
        }
    }

    let mut resolved = match policy {
        ColorOverlapPolicy::Reject => {
            colors.sort_by_key(|c| c.span);
            for pair in colors.windows(2) {
                if pair[0].span.overlaps(&pair[1].span) {
                    return Err(LayerError::OverlappingColors {
                        first_start: pair[0].span.start,
                        first_end: pair[0].span.end,
                        second_start: pair[1].span.start,
                        second_end: pair[1].span.end,
                    });
                }
            }
            colors
        }
        ColorOverlapPolicy::LastWriteWins => overwrite_in_order(colors),
    };
    resolved.sort_by_key(|c| c.span);
    Ok(resolved)
}

/// Later spans cut away the parts of earlier spans they cover
fn overwrite_in_order(colors: Vec<ColorSpan>) -> Vec<ColorSpan> {
    let mut painted: Vec<ColorSpan> = Vec::with_capacity(colors.len());
    for color in colors {
        let mut next = Vec::with_capacity(painted.len() + 2);
        for existing in painted {
            if !existing.span.overlaps(&color.span) {
                next.push(existing);
                continue;
            }
            log::warn!(
                "color {} {} overwritten by {} {}",
                existing.code,
                existing.span,
                color.code,
                color.span
            );
            if existing.span.start < color.span.start {
                next.push(ColorSpan {
                    span: Span::new(existing.span.start, color.span.start),
                    code: existing.code.clone(),
                });
            }
            if existing.span.end > color.span.end {
                next.push(ColorSpan {
                    span: Span::new(color.span.end, existing.span.end),
                    code: existing.code,
                });
            }
        }
        next.push(color);
        painted = next;
    }
    painted
}

/// Build the fragment stream for resolved, sorted, non-overlapping colors
pub fn build_color_layer(flat: &FlatText, colors: &[ColorSpan]) -> Vec<Fragment> {
    let mut fragments = Vec::with_capacity(colors.len() * 2 + 1);
    let mut cursor = 0;

    for color in colors {
        if color.span.start > cursor {
            let gap = Span::new(cursor, color.span.start);
            fragments.push(Fragment::new(flat.slice(gap), gap.start, gap.end, Marks::default()));
        }
        fragments.push(Fragment::new(
            flat.slice(color.span),
            color.span.start,
            color.span.end,
            Marks::with_color(color.code.clone()),
        ));
        cursor = color.span.end;
    }

    if cursor < flat.len() {
        let tail = Span::new(cursor, flat.len());
        fragments.push(Fragment::new(flat.slice(tail), tail.start, tail.end, Marks::default()));
    }

    fragments
}
