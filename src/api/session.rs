//! Session-scoped API
//!
//! A `LayerSession` object per view, created by the JavaScript side and
//! dropped with it. There is no module-level document or watcher state.

use wasm_bindgen::prelude::*;
use crate::api::helpers::{
    deserialize, deserialize_or_default, engine_config, layer_error, serialize,
    validate_selection_range, validation_error,
};
use crate::api::types::RenderRequest;
use crate::models::{BaseText, DecoratedDocument, Layer, LayerKind};
use crate::session::{AnnotationSession, Role};
use crate::text::Span;
use crate::{wasm_info, wasm_log, wasm_warn};

#[wasm_bindgen]
pub struct LayerSession {
    inner: AnnotationSession,
}

#[wasm_bindgen]
impl LayerSession {
    /// Load the base text once for this view
    #[wasm_bindgen(constructor)]
    pub fn new(base_js: JsValue, config_js: JsValue) -> Result<LayerSession, JsValue> {
        let base: BaseText = deserialize(base_js, "Failed to deserialize base text")?;
        let config = engine_config(config_js)?;
        let inner = AnnotationSession::new(&base, config).map_err(layer_error)?;
        wasm_info!("LayerSession created: {} chars", inner.flat_text().len());
        Ok(LayerSession { inner })
    }

    /// Length of the flattened text (the offset domain is `[0, length]`)
    #[wasm_bindgen(getter)]
    pub fn length(&self) -> usize {
        self.inner.flat_text().len()
    }

    #[wasm_bindgen(js_name = flatText)]
    pub fn flat_text(&self) -> String {
        self.inner.flat_text().as_string()
    }

    /// Run the forward pipeline with `{ highlights, comments, diffs }`
    pub fn render(&self, request_js: JsValue) -> Result<JsValue, JsValue> {
        let request: RenderRequest =
            deserialize_or_default(request_js, "Failed to deserialize annotations")?;
        let doc = self
            .inner
            .render(&request.highlights, &request.comments, &request.diffs)
            .map_err(layer_error)?;
        wasm_log!("render: {} paragraphs", doc.paragraphs.len());
        serialize(&doc, "Failed to serialize document")
    }

    /// Canonical highlights and counts for persistence
    pub fn extract(&self, doc_js: JsValue) -> Result<JsValue, JsValue> {
        let doc: DecoratedDocument = deserialize(doc_js, "Failed to deserialize document")?;
        let extraction = self.inner.extract(&doc);
        serialize(&extraction.to_persisted(), "Failed to serialize highlights")
    }

    /// Tag `[start, end)` with a layer (`"bold"`, `{ color: "#ffd400" }`, ...)
    #[wasm_bindgen(js_name = markRange)]
    pub fn mark_range(
        &self,
        doc_js: JsValue,
        start: usize,
        end: usize,
        layer_js: JsValue,
    ) -> Result<JsValue, JsValue> {
        validate_selection_range(start, end, self.length()).map_err(validation_error)?;
        let doc: DecoratedDocument = deserialize(doc_js, "Failed to deserialize document")?;
        let layer: Layer = deserialize(layer_js, "Failed to deserialize layer")?;
        wasm_info!("markRange called: start={}, end={}, layer={}", start, end, layer);
        let marked = self.inner.mark(&doc, Span::new(start, end), &layer).map_err(layer_error)?;
        serialize(&marked, "Failed to serialize document")
    }

    /// Remove a layer kind (`"color"`, `"bold"`, ..., `"all"`) from `[start, end)`
    #[wasm_bindgen(js_name = clearRange)]
    pub fn clear_range(
        &self,
        doc_js: JsValue,
        start: usize,
        end: usize,
        kind_js: JsValue,
    ) -> Result<JsValue, JsValue> {
        validate_selection_range(start, end, self.length()).map_err(validation_error)?;
        let doc: DecoratedDocument = deserialize(doc_js, "Failed to deserialize document")?;
        let kind: LayerKind = deserialize(kind_js, "Failed to deserialize layer kind")?;
        wasm_info!("clearRange called: start={}, end={}, kind={:?}", start, end, kind);
        let cleared = self.inner.clear(&doc, Span::new(start, end), kind).map_err(layer_error)?;
        serialize(&cleared, "Failed to serialize document")
    }

    /// Leaf under a flattened offset, or `null`
    pub fn locate(&self, doc_js: JsValue, offset: usize) -> Result<JsValue, JsValue> {
        let doc: DecoratedDocument = deserialize(doc_js, "Failed to deserialize document")?;
        match self.inner.locate(&doc, offset) {
            Some(location) => serialize(&location, "Failed to serialize location"),
            None => {
                wasm_warn!("locate: offset {} is outside the document", offset);
                Ok(JsValue::NULL)
            }
        }
    }

    #[wasm_bindgen(js_name = startRoleWatch)]
    pub fn start_role_watch(&mut self, role_js: JsValue) -> Result<(), JsValue> {
        let role: Role = deserialize(role_js, "Failed to deserialize role")?;
        self.inner.roles_mut().start(role);
        Ok(())
    }

    #[wasm_bindgen(js_name = stopRoleWatch)]
    pub fn stop_role_watch(&mut self) {
        self.inner.roles_mut().stop();
    }

    /// Report the role seen on a poll tick; returns `{ from, to }` or `null`
    #[wasm_bindgen(js_name = observeRole)]
    pub fn observe_role(&mut self, role_js: JsValue) -> Result<JsValue, JsValue> {
        let role: Role = deserialize(role_js, "Failed to deserialize role")?;
        match self.inner.roles_mut().observe(role) {
            Some(change) => serialize(&change, "Failed to serialize role change"),
            None => Ok(JsValue::NULL),
        }
    }
}
