//! Editing session
//!
//! One session per view. It owns the normalized base text (loaded once and
//! never changed), the engine configuration and the role watcher. Two views
//! compared side by side use two sessions; nothing is shared between them.

use crate::config::EngineConfig;
use crate::edit::{apply_mark, clear_mark, locate, LeafLocation};
use crate::error::LayerResult;
use crate::extract::{extract_highlights, Extraction};
use crate::layers::{apply_layers, LayerInputs};
use crate::models::{BaseText, Comment, DecoratedDocument, DiffRange, Highlight, Layer, LayerKind};
use crate::text::{FlatText, Span};
use serde::{Deserialize, Serialize};

/// Role of the signed-in user within the current experiment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Investigator,
    Coder,
    Viewer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleChange {
    pub from: Role,
    pub to: Role,
}

/// Detects role changes between poll ticks.
///
/// The caller owns the timer and reports the role it observes on each tick;
/// the watcher only remembers the last role and reports transitions while
/// it is running.
#[derive(Debug, Clone, Default)]
pub struct RoleWatcher {
    last: Option<Role>,
    running: bool,
}

impl RoleWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, initial: Role) {
        log::info!("role watcher started as {:?}", initial);
        self.last = Some(initial);
        self.running = true;
    }

    pub fn stop(&mut self) {
        if self.running {
            log::info!("role watcher stopped");
        }
        self.running = false;
        self.last = None;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn current(&self) -> Option<Role> {
        self.last
    }

    /// Record the role seen on this tick; returns the change, if any
    pub fn observe(&mut self, role: Role) -> Option<RoleChange> {
        if !self.running {
            return None;
        }
        let previous = self.last.replace(role)?;
        if previous == role {
            return None;
        }
        log::info!("role changed from {:?} to {:?}", previous, role);
        Some(RoleChange {
            from: previous,
            to: role,
        })
    }
}

pub struct AnnotationSession {
    flat: FlatText,
    config: EngineConfig,
    roles: RoleWatcher,
}

impl AnnotationSession {
    pub fn new(base: &BaseText, config: EngineConfig) -> LayerResult<Self> {
        config.validate()?;
        Ok(Self {
            flat: FlatText::normalize(base),
            config,
            roles: RoleWatcher::new(),
        })
    }

    pub fn flat_text(&self) -> &FlatText {
        &self.flat
    }

    /// Run the forward pipeline with freshly fetched annotations
    pub fn render(
        &self,
        highlights: &[Highlight],
        comments: &[Comment],
        diffs: &[DiffRange],
    ) -> LayerResult<DecoratedDocument> {
        apply_layers(
            &self.flat,
            LayerInputs::new(highlights, comments, diffs),
            &self.config,
        )
    }

    pub fn extract(&self, doc: &DecoratedDocument) -> Extraction {
        extract_highlights(doc)
    }

    pub fn mark(
        &self,
        doc: &DecoratedDocument,
        span: Span,
        layer: &Layer,
    ) -> LayerResult<DecoratedDocument> {
        apply_mark(doc, span, layer)
    }

    pub fn clear(
        &self,
        doc: &DecoratedDocument,
        span: Span,
        kind: LayerKind,
    ) -> LayerResult<DecoratedDocument> {
        clear_mark(doc, span, kind)
    }

    pub fn locate(&self, doc: &DecoratedDocument, offset: usize) -> Option<LeafLocation> {
        locate(doc, offset)
    }

    pub fn roles(&self) -> &RoleWatcher {
        &self.roles
    }

    pub fn roles_mut(&mut self) -> &mut RoleWatcher {
        &mut self.roles
    }
}
