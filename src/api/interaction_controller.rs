use chrono::NaiveDate;
use tracing::trace;

use crate::core::primitives::date_to_unix_seconds;
use crate::interaction::BrushDragMode;
use crate::render::Renderer;

use super::ChartEngine;
use super::sync_bridge::SelectionAnchor;
use super::sync_coordinator::{ChartCommand, SyncCoordinator};

/// Every gesture and programmatic change first runs a pending resize step, so
/// it lands on top of the re-seeded window instead of being overwritten by it.
impl<R: Renderer> ChartEngine<R> {
    /// Starts a pan drag on the main plot. `x` is in main-canvas pixels.
    pub fn main_pointer_down(&mut self, x: f64) {
        self.flush_deferred();
        self.core.zoom.pointer_down(x);
    }

    /// Pans the active drag. Returns `true` when the transform changed.
    pub fn main_pointer_move(&mut self, x: f64) -> bool {
        self.flush_deferred();
        match self.core.zoom.pointer_move(x) {
            Some(transform) => {
                SyncCoordinator::dispatch(self, ChartCommand::UserZoomed(transform));
                true
            }
            None => false,
        }
    }

    /// Ends the pan drag. Returns `true` when a drag was active.
    pub fn main_pointer_up(&mut self) -> bool {
        self.core.zoom.pointer_up()
    }

    /// Zooms about the pointer. Positive `delta_y` zooms out.
    pub fn main_wheel(&mut self, x: f64, delta_y: f64) -> bool {
        self.flush_deferred();
        match self.core.zoom.wheel(x, delta_y) {
            Some(transform) => {
                SyncCoordinator::dispatch(self, ChartCommand::UserZoomed(transform));
                true
            }
            None => false,
        }
    }

    /// Zooms to scale `k` with `center` in the middle of the main plot.
    pub fn zoom_to(&mut self, k: f64, center: NaiveDate) -> bool {
        self.flush_deferred();
        let center_px = self.base_time_scale().date_to_pixel(center);
        match self.core.zoom.zoom_to(k, center_px) {
            Some(transform) => {
                SyncCoordinator::dispatch(self, ChartCommand::UserZoomed(transform));
                true
            }
            None => false,
        }
    }

    /// Returns both controllers to the full extent. A pending resize capture
    /// is dropped rather than re-applied over the reset.
    pub fn reset_zoom(&mut self) {
        self.core.resize.clear();
        SyncCoordinator::dispatch(self, ChartCommand::Reset);
    }

    /// Hit-tests the brush. `x` is in overview-canvas pixels.
    ///
    /// Returns the started drag mode, or `None` outside the selection.
    pub fn overview_pointer_down(&mut self, x: f64) -> Option<BrushDragMode> {
        self.flush_deferred();
        let mode = self.core.brush.pointer_down(x);
        trace!(x, mode = ?mode, "overview pointer down");
        mode
    }

    /// Drags the brush. Returns `true` when the selection changed.
    pub fn overview_pointer_move(&mut self, x: f64) -> bool {
        self.flush_deferred();
        let Some(selection) = self.core.brush.pointer_move(x) else {
            return false;
        };
        let anchor = SelectionAnchor::for_drag(self.core.brush.mode());
        SyncCoordinator::dispatch(self, ChartCommand::UserBrushed { selection, anchor });
        true
    }

    /// Ends the brush drag and returns the mode that was active.
    pub fn overview_pointer_up(&mut self) -> Option<BrushDragMode> {
        self.core.brush.pointer_up()
    }

    /// Programmatically selects `[x0, x1]` (overview pixels) and zooms the
    /// main plot to match.
    pub fn select_overview_range(&mut self, x0: f64, x1: f64) {
        self.flush_deferred();
        let selection = self.core.brush.set_selection(x0, x1);
        SyncCoordinator::dispatch(
            self,
            ChartCommand::UserBrushed {
                selection,
                anchor: SelectionAnchor::Left,
            },
        );
    }

    /// Shows the closed date range `[start, end]` in the main plot.
    pub fn show_date_range(&mut self, start: NaiveDate, end: NaiveDate) {
        let base = self.base_time_scale();
        self.select_overview_range(
            base.time_to_pixel(date_to_unix_seconds(start)),
            base.time_to_pixel(date_to_unix_seconds(end)),
        );
    }
}
