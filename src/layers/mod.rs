//! Layer 1: annotation layering
//!
//! The forward transform, one module per stage:
//!
//! - `color`: color layer builder
//! - `style`: style layer compositor (underline, bold, italic)
//! - `diff`: diff splitter
//! - `comments`: comment splitter
//! - `paragraphs`: paragraph assembler
//! - `checks`: input sanitization and stage invariants
//! - `pipeline`: the composed transform

pub mod checks;
pub mod color;
pub mod comments;
pub mod diff;
pub mod paragraphs;
pub mod pipeline;
pub mod style;

pub use pipeline::{apply_layers, layer_fragments, LayerInputs};
