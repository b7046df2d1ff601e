//! Layer 0: the flattened offset space
//!
//! Every other component addresses text through the single coordinate space
//! defined here.
//!
//! ## Modules
//!
//! - `span`: half-open offset ranges
//! - `flat`: base text normalizer and tree <-> offset mapping

pub mod flat;
pub mod span;

// Re-exports for convenience
pub use flat::{FlatText, TextPosition};
pub use span::Span;
