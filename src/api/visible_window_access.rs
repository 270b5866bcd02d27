use chrono::NaiveDate;

use crate::core::primitives::unix_seconds_to_date;
use crate::core::{DataPoint, TimeScale, ValueDomain, visible_slice_bounds};
use crate::render::Renderer;

use super::ChartEngine;
use super::derived_cache::{DerivedCacheStats, VisibleWindow, VisibleWindowKey};

/// Slack added to both window edges before bisection. Transform inversion
/// can land a hair inside a point that sits exactly on the edge.
const WINDOW_EDGE_EPSILON_SECONDS: f64 = 1e-3;

impl<R: Renderer> ChartEngine<R> {
    /// Unzoomed scale from the full time domain onto the shared plot range.
    #[must_use]
    pub fn base_time_scale(&self) -> TimeScale {
        self.core.model.base_time_scale(self.core.layout.plot_x)
    }

    #[must_use]
    pub fn zoomed_time_scale(&self) -> TimeScale {
        self.visible_window().time_scale
    }

    /// Visible time window in unix seconds.
    #[must_use]
    pub fn visible_time_range(&self) -> (f64, f64) {
        self.zoomed_time_scale().domain()
    }

    /// Visible time window floored to calendar dates.
    #[must_use]
    pub fn visible_date_range(&self) -> (NaiveDate, NaiveDate) {
        let (start, end) = self.visible_time_range();
        (unix_seconds_to_date(start), unix_seconds_to_date(end))
    }

    /// Points whose date falls inside the visible window (closed on both ends).
    #[must_use]
    pub fn visible_points(&self) -> &[DataPoint] {
        let (lower, upper) = self.visible_window().slice;
        &self.core.model.points[lower..upper]
    }

    /// Value extent of the visible points; feeds the main vertical scale.
    #[must_use]
    pub fn visible_value_domain(&self) -> ValueDomain {
        self.visible_window().value_domain
    }

    #[must_use]
    pub fn derived_cache_stats(&self) -> DerivedCacheStats {
        self.core.derived.borrow().stats()
    }

    /// Zoomed scale, visible slice and visible value extent, memoized on
    /// transform, plot range and data revision.
    #[must_use]
    pub fn visible_window(&self) -> VisibleWindow {
        let transform = self.core.zoom.transform();
        let plot_x = self.core.layout.plot_x;
        let key = VisibleWindowKey::new(transform, plot_x, self.core.model.data_revision);

        self.core.derived.borrow_mut().get_or_compute(key, || {
            let time_scale = self.base_time_scale().rescale(transform);
            let (start, end) = time_scale.domain();
            let points = &self.core.model.points;
            let slice = visible_slice_bounds(
                points,
                start.min(end) - WINDOW_EDGE_EPSILON_SECONDS,
                start.max(end) + WINDOW_EDGE_EPSILON_SECONDS,
            );
            VisibleWindow {
                time_scale,
                slice,
                value_domain: ValueDomain::from_points(&points[slice.0..slice.1]),
            }
        })
    }
}
