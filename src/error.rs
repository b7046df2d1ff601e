//! Error types for the layering engine
//!
//! Input sanitization (empty or inverted spans) never produces an error.
//! Everything here is either a contract violation by a collaborator or an
//! internal invariant failure.

use thiserror::Error;

/// Result alias used across the engine
pub type LayerResult<T> = Result<T, LayerError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayerError {
    /// A highlight or diff range reaches past the end of the flattened text
    #[error("{what} [{start}, {end}) is outside the text (length {len})")]
    OutOfBounds {
        what: &'static str,
        start: usize,
        end: usize,
        len: usize,
    },

    /// Two color highlights overlap while the overlap policy is `reject`
    #[error("color highlights overlap: [{first_start}, {first_end}) and [{second_start}, {second_end})")]
    OverlappingColors {
        first_start: usize,
        first_end: usize,
        second_start: usize,
        second_end: usize,
    },

    /// A pipeline stage produced fragments that break the offset invariants
    #[error("invariant violated after {stage}: {detail}")]
    Invariant { stage: &'static str, detail: String },

    /// A (paragraph, leaf, offset) position does not exist in the base text
    #[error("no position at paragraph {paragraph}, leaf {leaf}, offset {offset}")]
    InvalidPosition {
        paragraph: usize,
        leaf: usize,
        offset: usize,
    },

    /// Engine configuration could not be read or is invalid
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl LayerError {
    pub(crate) fn invariant(stage: &'static str, detail: impl Into<String>) -> Self {
        LayerError::Invariant {
            stage,
            detail: detail.into(),
        }
    }
}

impl From<serde_yaml::Error> for LayerError {
    fn from(e: serde_yaml::Error) -> Self {
        LayerError::Config(e.to_string())
    }
}

impl From<std::io::Error> for LayerError {
    fn from(e: std::io::Error) -> Self {
        LayerError::Config(e.to_string())
    }
}
