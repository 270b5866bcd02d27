use tracing::{debug, trace};

use crate::core::Viewport;
use crate::render::Renderer;

use super::invalidation::InvalidationTopic;
use super::sync_coordinator::{ChartCommand, SyncCoordinator};
use super::{ChartEngine, ChartLayout};

/// Visible time window captured before a layout change, waiting for the
/// deferred re-seed.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(super) struct ResizeState {
    pending: Option<(f64, f64)>,
}

impl ResizeState {
    pub(super) fn clear(&mut self) {
        self.pending = None;
    }
}

impl<R: Renderer> ChartEngine<R> {
    /// Applies a new container size.
    ///
    /// The visible time window is captured first (unless an earlier capture
    /// is still pending), then layout and controller ranges are rebuilt
    /// immediately and any drag in progress ends. Transform and selection are
    /// re-seeded from the capture by [`ChartEngine::flush_deferred`], which
    /// every gesture entry point runs before applying itself.
    pub fn resize(&mut self, container: Viewport) {
        if self.core.resize.pending.is_none() {
            // A collapsed plot has no meaningful window; fall back to the full domain.
            let captured = if self.core.layout.plot_width() > 0.0 {
                self.visible_time_range()
            } else {
                self.core.model.time_domain.seconds()
            };
            trace!(start = captured.0, end = captured.1, "capture visible window");
            self.core.resize.pending = Some(captured);
        }

        let layout = ChartLayout::compute(container, &self.core.config);
        self.core.layout = layout;
        self.core.zoom.set_range(layout.plot_x);
        self.core.brush.set_range(layout.plot_x);
        debug!(
            width = container.width,
            height = container.height,
            plot_width = layout.plot_width(),
            "resize container"
        );
        self.core.pending.invalidate(InvalidationTopic::Layout);
    }

    /// Runs the deferred resize step. Returns `true` when a pending capture was
    /// applied.
    ///
    /// A layout without plot width keeps the capture pending until a usable
    /// size arrives.
    pub fn flush_deferred(&mut self) -> bool {
        let Some(preserved) = self.core.resize.pending else {
            return false;
        };
        if self.core.layout.plot_width() <= 0.0 {
            trace!("defer resize re-seed until plot has width");
            return false;
        }

        self.core.resize.pending = None;
        debug!(start = preserved.0, end = preserved.1, "re-seed preserved window");
        SyncCoordinator::dispatch(self, ChartCommand::Resized { preserved });
        true
    }

    #[must_use]
    pub fn has_pending_resize(&self) -> bool {
        self.core.resize.pending.is_some()
    }
}
