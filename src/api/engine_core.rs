use std::cell::RefCell;

use crate::interaction::{BrushController, ZoomController};

use super::{
    ChartEngineConfig, ChartLayout, DateLabelFormatter, RenderStyle, chart_model::ChartModel,
    derived_cache::DerivedCache, invalidation::PendingInvalidation,
    resize_coordinator::ResizeState, sync_coordinator::SyncSource,
};

/// Internal engine core state used by the public facade (`ChartEngine`).
pub(super) struct EngineCore {
    pub(super) config: ChartEngineConfig,
    pub(super) layout: ChartLayout,
    pub(super) model: ChartModel,
    pub(super) zoom: ZoomController,
    pub(super) brush: BrushController,
    pub(super) resize: ResizeState,
    pub(super) last_sync_source: Option<SyncSource>,
    pub(super) labels: DateLabelFormatter,
    pub(super) style: RenderStyle,
    pub(super) pending: PendingInvalidation,
    pub(super) derived: RefCell<DerivedCache>,
}
