//! Annotation records supplied by collaborators
//!
//! Highlights, diff ranges and comments are all addressed in the flattened
//! offset space of the base text. None of them is mutated by the engine.

use crate::text::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which annotation layer a highlight belongs to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    /// Color highlight carrying the color code chosen by the coder
    Color(String),
    Underline,
    Bold,
    Italic,
}

/// The layer without its color code, used by clear operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerKind {
    Color,
    Underline,
    Bold,
    Italic,
    All,
}

/// Style layers in the order they are composited
pub const STYLE_ORDER: [Layer; 3] = [Layer::Underline, Layer::Bold, Layer::Italic];

impl Layer {
    /// Key in the per-layer count map: the color code or the style name
    pub fn count_key(&self) -> &str {
        match self {
            Layer::Color(code) => code,
            Layer::Underline => "underline",
            Layer::Bold => "bold",
            Layer::Italic => "italic",
        }
    }

    /// Stable ordering used when sorting records that start at the same offset
    pub(crate) fn rank(&self) -> u8 {
        match self {
            Layer::Color(_) => 0,
            Layer::Underline => 1,
            Layer::Bold => 2,
            Layer::Italic => 3,
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layer::Color(code) => write!(f, "color({})", code),
            other => f.write_str(other.count_key()),
        }
    }
}

/// A highlight as stored on a coder's copy
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Highlight {
    pub layer: Layer,
    pub start: usize,
    pub end: usize,
}

impl Highlight {
    pub fn new(layer: Layer, start: usize, end: usize) -> Self {
        Self { layer, start, end }
    }

    pub fn color(code: impl Into<String>, start: usize, end: usize) -> Self {
        Self::new(Layer::Color(code.into()), start, end)
    }

    pub fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }
}

/// Disagreement range computed by the pairwise comparison collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiffRange {
    pub start: usize,
    pub end: usize,
}

impl DiffRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }
}

/// A point comment anchored at one offset
///
/// The offset is signed so that values coming from JavaScript that fall
/// before the text can be represented and clamped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub offset: i64,
    #[serde(flatten)]
    pub payload: CommentPayload,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentPayload {
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Comment {
    pub fn new(id: impl Into<String>, offset: i64, payload: CommentPayload) -> Self {
        Self {
            id: id.into(),
            offset,
            payload,
        }
    }
}

impl CommentPayload {
    pub fn new(author: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            text: text.into(),
            created_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_serde_shape() {
        let json = serde_json::to_string(&Layer::Color("#ffd400".into())).unwrap();
        assert_eq!(json, r##"{"color":"#ffd400"}"##);
        let bold: Layer = serde_json::from_str(r#""bold""#).unwrap();
        assert_eq!(bold, Layer::Bold);
    }

    #[test]
    fn test_comment_payload_is_flattened() {
        let json = r#"{"id":"c1","offset":4,"author":"ana","text":"why?","createdAt":"2024-03-01"}"#;
        let comment: Comment = serde_json::from_str(json).unwrap();
        assert_eq!(comment.offset, 4);
        assert_eq!(comment.payload.author, "ana");
        assert_eq!(comment.payload.created_at.as_deref(), Some("2024-03-01"));
    }

    #[test]
    fn test_count_keys() {
        assert_eq!(Layer::Color("red".into()).count_key(), "red");
        assert_eq!(Layer::Italic.count_key(), "italic");
    }
}
