//! Annotation Layering WASM Module
//!
//! Composes an immutable statement text with a coder's annotation layers
//! (color highlights, underline/bold/italic marks, disagreement ranges and
//! point comments) into a decorated paragraph/leaf document for the editor,
//! and turns an edited document back into canonical highlight records for
//! persistence.
//!
//! ```text
//! BaseText ─▶ text::FlatText ─▶ layers::apply_layers ─▶ DecoratedDocument
//!                                                            │ user edits
//! PersistedHighlights ◀── extract::extract_highlights ◀──────┘
//! ```

pub mod api;
pub mod config;
pub mod edit;
pub mod error;
pub mod extract;
pub mod layers;
pub mod models;
pub mod session;
pub mod text;

// Re-export commonly used types
pub use config::{ColorOverlapPolicy, CommentOffsetPolicy, EngineConfig};
pub use error::{LayerError, LayerResult};
pub use extract::{extract_highlights, CanonicalHighlight, Extraction, PersistedHighlights};
pub use layers::{apply_layers, LayerInputs};
pub use models::*;
pub use session::{AnnotationSession, Role, RoleChange, RoleWatcher};
pub use text::{FlatText, Span, TextPosition};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    init_logger();

    log::info!("Annotation layering WASM module initialized");
}

#[cfg(feature = "console_log")]
fn init_logger() {
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }
}

#[cfg(not(feature = "console_log"))]
fn init_logger() {}
