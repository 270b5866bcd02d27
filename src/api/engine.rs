use crate::error::ChartResult;
use crate::render::Renderer;

use super::render_style::validate_render_style;
use super::{
    DateLabelFormatter, RenderOutcome, RenderStyle, engine_core::EngineCore,
    invalidation::InvalidationTopic, render_coordinator::RenderCoordinator,
};

#[cfg(feature = "cairo-backend")]
use crate::render::{CairoContextRenderer, CanvasKind};

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` owns one renderer per canvas (main plot and overview strip),
/// the dataset, both gesture controllers and the synchronization between
/// them. Hosts forward pointer, wheel and resize events and call
/// [`ChartEngine::render_if_invalidated`] once per paint tick.
pub struct ChartEngine<R: Renderer> {
    pub(super) main_renderer: R,
    pub(super) overview_renderer: R,
    pub(super) core: EngineCore,
}

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn render_style(&self) -> RenderStyle {
        self.core.style
    }

    pub fn set_render_style(&mut self, style: RenderStyle) -> ChartResult<()> {
        self.core.style = validate_render_style(style)?;
        self.core.pending.invalidate(InvalidationTopic::Style);
        Ok(())
    }

    #[must_use]
    pub fn date_labels(&self) -> &DateLabelFormatter {
        &self.core.labels
    }

    /// Replaces the injected date label functions.
    pub fn set_date_labels(&mut self, labels: DateLabelFormatter) {
        self.core.labels = labels;
        self.core.pending.invalidate(InvalidationTopic::Style);
    }

    /// Unconditionally repaints both canvases.
    pub fn render(&mut self) -> ChartResult<()> {
        RenderCoordinator::render(self)
    }

    /// Repaints only the canvases touched since the last render pass.
    pub fn render_if_invalidated(&mut self) -> ChartResult<RenderOutcome> {
        RenderCoordinator::render_if_invalidated(self)
    }

    /// Renders one canvas into an external cairo context.
    ///
    /// This path is used by host draw callbacks while keeping the renderer
    /// implementation decoupled from toolkit-specific APIs.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(
        &mut self,
        canvas: CanvasKind,
        context: &cairo::Context,
    ) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        RenderCoordinator::render_on_cairo_context(self, canvas, context)
    }

    #[must_use]
    pub fn main_renderer(&self) -> &R {
        &self.main_renderer
    }

    #[must_use]
    pub fn overview_renderer(&self) -> &R {
        &self.overview_renderer
    }

    /// Consumes the engine and returns `(main, overview)` renderers.
    #[must_use]
    pub fn into_renderers(self) -> (R, R) {
        (self.main_renderer, self.overview_renderer)
    }
}
