//! Base text input tree
//!
//! The statement text as it arrives from storage: paragraphs of leaves.
//! It is loaded once per editing session and never mutated.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseText {
    #[serde(default)]
    pub paragraphs: Vec<BaseParagraph>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseParagraph {
    #[serde(default)]
    pub leaves: Vec<BaseLeaf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseLeaf {
    pub text: String,
}

impl BaseText {
    pub fn new(paragraphs: Vec<BaseParagraph>) -> Self {
        Self { paragraphs }
    }

    /// One single-leaf paragraph per `\n`-separated line
    pub fn from_plain(text: &str) -> Self {
        Self {
            paragraphs: text.split('\n').map(BaseParagraph::from_text).collect(),
        }
    }
}

impl BaseParagraph {
    pub fn new(leaves: Vec<BaseLeaf>) -> Self {
        Self { leaves }
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            leaves: vec![BaseLeaf::new(text)],
        }
    }
}

impl BaseLeaf {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
