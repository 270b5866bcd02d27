use crate::core::{DataPoint, TimeDomain, TimeScale, ValueDomain};

/// Dataset plus the domains derived from it once per load.
#[derive(Debug, Clone, PartialEq, Default)]
pub(super) struct ChartModel {
    pub(super) points: Vec<DataPoint>,
    /// Bumped on every load; part of the derived-cache key.
    pub(super) data_revision: u64,
    pub(super) time_domain: TimeDomain,
    pub(super) global_value_domain: ValueDomain,
}

impl ChartModel {
    pub(super) fn replace_points(&mut self, points: Vec<DataPoint>) {
        self.time_domain = TimeDomain::from_points(&points);
        self.global_value_domain = ValueDomain::from_points(&points);
        self.points = points;
        self.data_revision = self.data_revision.wrapping_add(1);
    }

    /// Unzoomed scale from the full time domain onto `plot_x`.
    pub(super) fn base_time_scale(&self, plot_x: (f64, f64)) -> TimeScale {
        TimeScale::from_domain(self.time_domain, plot_x)
    }
}
