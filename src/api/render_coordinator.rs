use tracing::trace;

use crate::error::ChartResult;
use crate::render::{CanvasKind, Renderer};

use super::{ChartEngine, RenderOutcome};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

pub(super) struct RenderCoordinator;

impl RenderCoordinator {
    pub(super) fn render<R: Renderer>(engine: &mut ChartEngine<R>) -> ChartResult<()> {
        engine.flush_deferred();
        Self::render_canvas(engine, CanvasKind::Main)?;
        Self::render_canvas(engine, CanvasKind::Overview)?;
        engine.core.pending.clear();
        Ok(())
    }

    /// Deferred work is flushed before the dirty mask is read, so a pending
    /// resize re-seed lands in this pass.
    pub(super) fn render_if_invalidated<R: Renderer>(
        engine: &mut ChartEngine<R>,
    ) -> ChartResult<RenderOutcome> {
        engine.flush_deferred();
        let pending = engine.core.pending;
        let outcome = RenderOutcome {
            main: pending.needs_repaint(CanvasKind::Main),
            overview: pending.needs_repaint(CanvasKind::Overview),
        };

        if outcome.main {
            Self::render_canvas(engine, CanvasKind::Main)?;
        }
        if outcome.overview {
            Self::render_canvas(engine, CanvasKind::Overview)?;
        }
        engine.core.pending.clear();
        trace!(main = outcome.main, overview = outcome.overview, "render pass");
        Ok(outcome)
    }

    #[cfg(feature = "cairo-backend")]
    pub(super) fn render_on_cairo_context<R: Renderer + CairoContextRenderer>(
        engine: &mut ChartEngine<R>,
        canvas: CanvasKind,
        context: &cairo::Context,
    ) -> ChartResult<()> {
        engine.flush_deferred();
        match canvas {
            CanvasKind::Main => {
                let frame = engine.build_main_frame();
                engine
                    .main_renderer
                    .render_on_cairo_context(context, &frame)
            }
            CanvasKind::Overview => {
                let frame = engine.build_overview_frame();
                engine
                    .overview_renderer
                    .render_on_cairo_context(context, &frame)
            }
        }
    }

    fn render_canvas<R: Renderer>(
        engine: &mut ChartEngine<R>,
        canvas: CanvasKind,
    ) -> ChartResult<()> {
        match canvas {
            CanvasKind::Main => {
                let frame = engine.build_main_frame();
                engine.main_renderer.render(&frame)
            }
            CanvasKind::Overview => {
                let frame = engine.build_overview_frame();
                engine.overview_renderer.render(&frame)
            }
        }
    }
}
