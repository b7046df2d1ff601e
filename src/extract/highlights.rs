//! Highlight extractor
//!
//! The inverse of the forward pipeline. Walks an edited decorated document
//! and merges contiguous same-layer leaves back into canonical highlight
//! records, one per maximal run, plus a count of runs per layer.
//!
//! Offsets are recomputed with a running counter (effective leaf lengths
//! plus one per paragraph break), so stale `start`/`end` values on edited
//! leaves do not matter. Placeholder and empty leaves are transparent: a run
//! continues across a comment marker.

use crate::models::{DecoratedDocument, Highlight, Layer, Leaf, STYLE_ORDER};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One persisted highlight record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalHighlight {
    pub layer: Layer,
    pub inner_text: String,
    pub start: usize,
    pub end: usize,
}

impl CanonicalHighlight {
    pub fn to_highlight(&self) -> Highlight {
        Highlight::new(self.layer.clone(), self.start, self.end)
    }
}

/// What a coder's copy stores on save, replacing the previous version
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedHighlights {
    pub highlights: Vec<CanonicalHighlight>,
    pub color_counts: BTreeMap<String, usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub highlights: Vec<CanonicalHighlight>,
    /// Runs per layer, keyed by color code or style name
    pub counts: BTreeMap<String, usize>,
}

impl Extraction {
    /// The records as forward-pipeline input for the next render
    pub fn to_highlights(&self) -> Vec<Highlight> {
        self.highlights.iter().map(CanonicalHighlight::to_highlight).collect()
    }

    pub fn count(&self, key: &str) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }

    pub fn to_persisted(&self) -> PersistedHighlights {
        PersistedHighlights {
            highlights: self.highlights.clone(),
            color_counts: self.counts.clone(),
        }
    }
}

struct OpenRun {
    layer: Layer,
    start: usize,
    text: String,
}

/// Tracks the open run of one layer slot (color, or a single style)
#[derive(Default)]
struct RunTracker {
    open: Option<OpenRun>,
}

impl RunTracker {
    fn step(&mut self, wanted: Option<Layer>, leaf: &Leaf, offset: usize, out: &mut Extraction) {
        let current = self.open.as_ref().map(|run| &run.layer);
        if current != wanted.as_ref() {
            self.close(offset, out);
            if let Some(layer) = wanted {
                self.open = Some(OpenRun {
                    layer,
                    start: offset,
                    text: String::new(),
                });
            }
        }
        if let Some(run) = self.open.as_mut() {
            run.text.push_str(&leaf.text);
        }
    }

    fn close(&mut self, offset: usize, out: &mut Extraction) {
        let Some(run) = self.open.take() else {
            return;
        };
        if offset <= run.start {
            return;
        }
        *out.counts.entry(run.layer.count_key().to_string()).or_insert(0) += 1;
        out.highlights.push(CanonicalHighlight {
            layer: run.layer,
            inner_text: run.text,
            start: run.start,
            end: offset,
        });
    }
}

/// Extract canonical highlights and per-layer counts from a document.
///
/// Runs never cross a paragraph break: a highlight rendered across `\n`
/// comes back as one record per paragraph, and each record adds one to the
/// count of its layer. The characters covered are the same either way.
pub fn extract_highlights(doc: &DecoratedDocument) -> Extraction {
    let mut out = Extraction::default();
    let mut offset = 0;

    for (index, paragraph) in doc.paragraphs.iter().enumerate() {
        if index > 0 {
            offset += 1;
        }

        let mut color = RunTracker::default();
        let mut styles: [RunTracker; 3] = Default::default();

        for leaf in &paragraph.leaves {
            let len = leaf.effective_len();
            if len == 0 {
                continue;
            }
            let wanted_color = leaf.marks.color.clone().map(Layer::Color);
            color.step(wanted_color, leaf, offset, &mut out);
            for (tracker, layer) in styles.iter_mut().zip(STYLE_ORDER.iter()) {
                let wanted = leaf.marks.style(layer).then(|| layer.clone());
                tracker.step(wanted, leaf, offset, &mut out);
            }
            offset += len;
        }

        color.close(offset, &mut out);
        for tracker in styles.iter_mut() {
            tracker.close(offset, &mut out);
        }
    }

    out.highlights
        .sort_by(|a, b| (a.start, a.layer.rank(), a.end).cmp(&(b.start, b.layer.rank(), b.end)));
    log::debug!(
        "extracted {} highlights across {} layers",
        out.highlights.len(),
        out.counts.len()
    );
    out
}
