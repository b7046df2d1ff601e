//! Engine configuration
//!
//! Policies for inputs the collaborators are not supposed to send (overlapping
//! colors, comment offsets outside the text) plus rendering details of the
//! comment placeholder. Read from YAML, or received from JavaScript as a plain
//! object. Unknown fields are ignored; missing fields take their defaults.

use crate::error::{LayerError, LayerResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// What to do when two color highlights overlap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorOverlapPolicy {
    /// Fail with `LayerError::OverlappingColors`
    Reject,
    /// Later highlights (input order) overwrite earlier ones where they overlap
    #[default]
    LastWriteWins,
}

/// What to do with a comment anchored outside `[0, N]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommentOffsetPolicy {
    /// Move it to the nearest valid offset
    #[default]
    Clamp,
    /// Leave it out of the document
    Drop,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct EngineConfig {
    pub color_overlap: ColorOverlapPolicy,
    pub comment_offsets: CommentOffsetPolicy,
    /// Text of the zero-width comment placeholder leaf
    pub placeholder_glyph: String,
    /// Check fragment invariants after every pipeline stage
    pub verify_stages: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            color_overlap: ColorOverlapPolicy::default(),
            comment_offsets: CommentOffsetPolicy::default(),
            placeholder_glyph: Self::DEFAULT_GLYPH.to_string(),
            verify_stages: true,
        }
    }
}

impl EngineConfig {
    pub const DEFAULT_GLYPH: &'static str = "💬";

    pub fn from_yaml(source: &str) -> LayerResult<Self> {
        let config: EngineConfig = serde_yaml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> LayerResult<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)?;
        log::info!("loading engine config from {}", path.display());
        Self::from_yaml(&source)
    }

    pub fn validate(&self) -> LayerResult<()> {
        if self.placeholder_glyph.is_empty() {
            return Err(LayerError::Config(
                "placeholder_glyph must not be empty".to_string(),
            ));
        }
        if self.placeholder_glyph.contains('\n') {
            return Err(LayerError::Config(
                "placeholder_glyph must not contain a newline".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.color_overlap, ColorOverlapPolicy::LastWriteWins);
        assert_eq!(config.comment_offsets, CommentOffsetPolicy::Clamp);
        assert!(config.verify_stages);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = EngineConfig::from_yaml("color_overlap: reject\n").unwrap();
        assert_eq!(config.color_overlap, ColorOverlapPolicy::Reject);
        assert_eq!(config.placeholder_glyph, EngineConfig::DEFAULT_GLYPH);
    }

    #[test]
    fn test_newline_glyph_rejected() {
        let err = EngineConfig::from_yaml("placeholder_glyph: \"a\\nb\"\n").unwrap_err();
        assert!(matches!(err, LayerError::Config(_)));
    }

    #[test]
    fn test_unknown_policy_rejected() {
        assert!(EngineConfig::from_yaml("comment_offsets: wrap\n").is_err());
    }
}
