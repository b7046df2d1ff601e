//! Pipeline-internal fragments
//!
//! A fragment is an offset-addressed slice of the flattened text plus the
//! attributes accumulated so far. Every stage consumes a `Vec<Fragment>` and
//! builds a fresh one.

use super::annotations::{Comment, Layer};
use crate::text::Span;
use serde::{Deserialize, Serialize};

/// Attributes a fragment or leaf can carry
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Marks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub underline: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub bold: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub italic: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_diff: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl Marks {
    pub fn with_color(code: impl Into<String>) -> Self {
        Self {
            color: Some(code.into()),
            ..Self::default()
        }
    }

    /// Set a layer; a color replaces whatever color was there
    pub fn set(&mut self, layer: &Layer) {
        match layer {
            Layer::Color(code) => self.color = Some(code.clone()),
            Layer::Underline => self.underline = true,
            Layer::Bold => self.bold = true,
            Layer::Italic => self.italic = true,
        }
    }

    /// Style flag for a style layer (colors answer false)
    pub fn style(&self, layer: &Layer) -> bool {
        match layer {
            Layer::Color(_) => false,
            Layer::Underline => self.underline,
            Layer::Bold => self.bold,
            Layer::Italic => self.italic,
        }
    }

    /// Marks without the render-only `is_diff` flag
    pub fn persisted(&self) -> Marks {
        Marks {
            is_diff: false,
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub text: String,
    pub start: usize,
    pub end: usize,
    pub marks: Marks,
    /// Present only on comment placeholders
    pub comments: Option<Vec<Comment>>,
}

impl Fragment {
    pub fn new(text: String, start: usize, end: usize, marks: Marks) -> Self {
        Self {
            text,
            start,
            end,
            marks,
            comments: None,
        }
    }

    /// Zero-width placeholder holding every comment anchored at `offset`
    pub fn placeholder(glyph: &str, offset: usize, marks: Marks, comments: Vec<Comment>) -> Self {
        Self {
            text: glyph.to_string(),
            start: offset,
            end: offset,
            marks,
            comments: Some(comments),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.comments.is_some()
    }

    pub fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }

    /// A copy covering `[start, end)` of this fragment with the same marks.
    ///
    /// `start` and `end` are absolute offsets and must lie inside the fragment.
    pub fn slice(&self, start: usize, end: usize) -> Fragment {
        let text = self
            .text
            .chars()
            .skip(start - self.start)
            .take(end - start)
            .collect();
        Fragment::new(text, start, end, self.marks.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_keeps_marks() {
        let fragment = Fragment::new("héllo".into(), 10, 15, Marks::with_color("red"));
        let middle = fragment.slice(11, 13);
        assert_eq!(middle.text, "él");
        assert_eq!(middle.span(), Span::new(11, 13));
        assert_eq!(middle.marks.color.as_deref(), Some("red"));
    }

    #[test]
    fn test_marks_serialize_only_set_flags() {
        let marks = Marks {
            bold: true,
            is_diff: true,
            ..Marks::default()
        };
        let json = serde_json::to_string(&marks).unwrap();
        assert_eq!(json, r#"{"bold":true,"isDiff":true}"#);
    }
}
