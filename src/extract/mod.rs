//! Inverse pipeline: edited decorated document -> persisted highlights

pub mod highlights;

pub use highlights::{extract_highlights, CanonicalHighlight, Extraction, PersistedHighlights};
