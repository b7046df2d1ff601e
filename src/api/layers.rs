//! Stateless layering API
//!
//! For callers that do not keep a session: every call normalizes the base
//! text again.

use wasm_bindgen::prelude::*;
use crate::api::helpers::{deserialize, engine_config, layer_error, serialize};
use crate::api::types::RenderRequest;
use crate::extract::extract_highlights;
use crate::layers::{apply_layers, LayerInputs};
use crate::models::{BaseText, DecoratedDocument};
use crate::text::FlatText;
use crate::{wasm_info, wasm_log};

/// Compose base text and annotation layers into a decorated document
///
/// # Parameters
/// - `base_js`: `{ paragraphs: [{ leaves: [{ text }] }] }`
/// - `request_js`: `{ highlights, comments, diffs }` (all optional)
/// - `config_js`: engine configuration object, or `undefined`
///
/// # Returns
/// `{ paragraphs: [{ leaves: [...] }] }`
#[wasm_bindgen(js_name = applyLayers)]
pub fn apply_layers_js(
    base_js: JsValue,
    request_js: JsValue,
    config_js: JsValue,
) -> Result<JsValue, JsValue> {
    let base: BaseText = deserialize(base_js, "Failed to deserialize base text")?;
    let request: RenderRequest = deserialize(request_js, "Failed to deserialize annotations")?;
    let config = engine_config(config_js)?;

    wasm_info!(
        "applyLayers called: {} highlights, {} comments, {} diffs",
        request.highlights.len(),
        request.comments.len(),
        request.diffs.len()
    );

    let flat = FlatText::normalize(&base);
    let inputs = LayerInputs::new(&request.highlights, &request.comments, &request.diffs);
    let doc = apply_layers(&flat, inputs, &config).map_err(layer_error)?;

    wasm_log!("  {} paragraphs, {} leaves", doc.paragraphs.len(), doc.leaves().count());
    serialize(&doc, "Failed to serialize document")
}

/// Extract persisted highlights from an edited decorated document
///
/// # Returns
/// `{ highlights: [{ layer, innerText, start, end }], colorCounts: { key: n } }`
#[wasm_bindgen(js_name = extractHighlights)]
pub fn extract_highlights_js(doc_js: JsValue) -> Result<JsValue, JsValue> {
    let doc: DecoratedDocument = deserialize(doc_js, "Failed to deserialize document")?;
    let extraction = extract_highlights(&doc);
    wasm_info!("extractHighlights: {} records", extraction.highlights.len());
    serialize(&extraction.to_persisted(), "Failed to serialize highlights")
}
