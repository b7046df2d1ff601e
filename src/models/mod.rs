//! Models module for the annotation layering engine
//!
//! Input records (base text, highlights, diff ranges, comments), the
//! pipeline-internal fragment, and the decorated document handed to the
//! renderer.

pub mod annotations;
pub mod base_text;
pub mod document;
pub mod fragment;

// Re-export commonly used types
pub use annotations::*;
pub use base_text::*;
pub use document::*;
pub use fragment::*;
