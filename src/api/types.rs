//! Shared types for the WASM API
//!
//! Request shapes accepted from JavaScript.

use crate::models::{Comment, DiffRange, Highlight};
use serde::{Deserialize, Serialize};

/// Annotations fetched by the collaborators for one render
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct RenderRequest {
    pub highlights: Vec<Highlight>,
    pub comments: Vec<Comment>,
    pub diffs: Vec<DiffRange>,
}
