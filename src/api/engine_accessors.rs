use crate::core::{DataPoint, TimeDomain, ValueDomain, ZoomTransform};
use crate::interaction::{BrushDragMode, BrushSelection, ZoomMode};
use crate::render::{CanvasKind, Renderer};

use super::invalidation::InvalidationTopics;
use super::sync_coordinator::SyncSource;
use super::{ChartEngine, ChartEngineConfig, ChartLayout};

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn config(&self) -> &ChartEngineConfig {
        &self.core.config
    }

    #[must_use]
    pub fn layout(&self) -> ChartLayout {
        self.core.layout
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.core.model.points
    }

    #[must_use]
    pub fn time_domain(&self) -> TimeDomain {
        self.core.model.time_domain
    }

    /// Value extent of the whole dataset; feeds the overview scale.
    #[must_use]
    pub fn global_value_domain(&self) -> ValueDomain {
        self.core.model.global_value_domain
    }

    #[must_use]
    pub fn transform(&self) -> ZoomTransform {
        self.core.zoom.transform()
    }

    #[must_use]
    pub fn brush_selection(&self) -> BrushSelection {
        self.core.brush.selection()
    }

    #[must_use]
    pub fn zoom_mode(&self) -> ZoomMode {
        self.core.zoom.mode()
    }

    #[must_use]
    pub fn brush_mode(&self) -> Option<BrushDragMode> {
        self.core.brush.mode()
    }

    #[must_use]
    pub fn last_sync_source(&self) -> Option<SyncSource> {
        self.core.last_sync_source
    }

    #[must_use]
    pub fn pending_invalidation(&self) -> InvalidationTopics {
        self.core.pending.topics()
    }

    #[must_use]
    pub fn needs_repaint(&self, canvas: CanvasKind) -> bool {
        self.core.pending.needs_repaint(canvas)
    }
}
