//! Annotation layering WASM API
//!
//! The JavaScript-facing surface of the engine.
//!
//! # Module Structure
//!
//! - `helpers`: console logging, serialization, validation, error conversion
//! - `types`: request shapes accepted from JavaScript
//! - `layers`: stateless `applyLayers` / `extractHighlights`
//! - `session`: the `LayerSession` class, one per view

pub mod helpers;
pub mod layers;
pub mod session;
pub mod types;

pub use layers::{apply_layers_js, extract_highlights_js};
pub use session::LayerSession;
