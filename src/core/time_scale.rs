use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{date_to_unix_seconds, unix_seconds_to_date};
use crate::core::time_ticks::time_ticks;
use crate::core::{LinearScale, TimeDomain, ZoomTransform};

/// Horizontal time axis: unix seconds mapped onto a pixel range.
///
/// The base scale spans the whole dataset; zoomed scales are derived with
/// [`TimeScale::rescale`] and never mutate the base.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeScale {
    linear: LinearScale,
}

impl TimeScale {
    #[must_use]
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            linear: LinearScale::new(domain, range),
        }
    }

    #[must_use]
    pub fn from_domain(domain: TimeDomain, range: (f64, f64)) -> Self {
        Self::new(domain.seconds(), range)
    }

    /// Visible time interval in unix seconds.
    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        self.linear.domain()
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        self.linear.range()
    }

    #[must_use]
    pub fn time_to_pixel(self, time: f64) -> f64 {
        self.linear.map(time)
    }

    #[must_use]
    pub fn pixel_to_time(self, pixel: f64) -> f64 {
        self.linear.invert(pixel)
    }

    #[must_use]
    pub fn date_to_pixel(self, date: NaiveDate) -> f64 {
        self.time_to_pixel(date_to_unix_seconds(date))
    }

    #[must_use]
    pub fn pixel_to_date(self, pixel: f64) -> NaiveDate {
        unix_seconds_to_date(self.pixel_to_time(pixel))
    }

    /// Applies a zoom transform: the displayed range is inverted through the
    /// transform and then through this scale to obtain the new domain.
    #[must_use]
    pub fn rescale(self, transform: ZoomTransform) -> Self {
        if transform.is_identity() {
            return self;
        }
        let (start_px, end_px) = self.range();
        let domain = (
            self.pixel_to_time(transform.invert_x(start_px)),
            self.pixel_to_time(transform.invert_x(end_px)),
        );
        Self {
            linear: self.linear.with_domain(domain),
        }
    }

    /// Calendar ticks inside the visible domain.
    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<NaiveDate> {
        let (start, end) = self.domain();
        time_ticks(start, end, count)
    }
}
