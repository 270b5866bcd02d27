use std::cell::RefCell;

use tracing::debug;

use crate::error::ChartResult;
use crate::interaction::{BrushController, ZoomController};
use crate::render::Renderer;

use super::{
    ChartEngine, ChartEngineConfig, ChartLayout, DateLabelFormatter, RenderStyle,
    chart_model::ChartModel, derived_cache::DerivedCache, engine_core::EngineCore,
    invalidation::PendingInvalidation, resize_coordinator::ResizeState,
};

impl<R: Renderer> ChartEngine<R> {
    /// Creates an engine with an empty dataset.
    ///
    /// `main_renderer` draws the zoomable plot and `overview_renderer` the
    /// brush strip. A zero-sized container is accepted and renders nothing
    /// until [`ChartEngine::resize`] supplies a usable size.
    pub fn new(
        main_renderer: R,
        overview_renderer: R,
        config: ChartEngineConfig,
    ) -> ChartResult<Self> {
        let config = config.validate()?;

        let layout = ChartLayout::compute(config.container, &config);
        let zoom = ZoomController::new(
            config.zoom_scale_extent,
            layout.plot_x,
            config.wheel_sensitivity,
        );
        let brush = BrushController::new(layout.plot_x, config.brush_handle_width_px);
        debug!(
            width = config.container.width,
            height = config.container.height,
            "create chart engine"
        );

        Ok(Self {
            main_renderer,
            overview_renderer,
            core: EngineCore {
                config,
                layout,
                model: ChartModel::default(),
                zoom,
                brush,
                resize: ResizeState::default(),
                last_sync_source: None,
                labels: DateLabelFormatter::default(),
                style: RenderStyle::default(),
                pending: PendingInvalidation::full(),
                derived: RefCell::new(DerivedCache::default()),
            },
        })
    }
}
