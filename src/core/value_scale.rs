use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::scale::evenly_spaced;
use crate::core::{LinearScale, ValueDomain};

/// Inline capacity for value ticks; the configured maximum is small.
pub type ValueTicks = SmallVec<[f64; 8]>;

/// Vertical value axis mapped to an inverted Y pixel range.
///
/// Larger values land closer to `plot_top`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueScale {
    linear: LinearScale,
}

impl ValueScale {
    #[must_use]
    pub fn new(domain: ValueDomain, plot_top: f64, plot_bottom: f64) -> Self {
        Self {
            linear: LinearScale::new((domain.min, domain.max), (plot_bottom, plot_top)),
        }
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        self.linear.domain()
    }

    #[must_use]
    pub fn value_to_pixel(self, value: f64) -> f64 {
        self.linear.map(value)
    }

    #[must_use]
    pub fn pixel_to_value(self, pixel: f64) -> f64 {
        self.linear.invert(pixel)
    }

    #[must_use]
    pub fn ticks(self, count: usize) -> ValueTicks {
        evenly_spaced(self.domain(), count).into_iter().collect()
    }
}

/// Number of value ticks for a plot of `plot_height` pixels: at most
/// `max_ticks`, at most one per `spacing_px`, never fewer than two.
#[must_use]
pub fn value_tick_count(plot_height: f64, spacing_px: f64, max_ticks: usize) -> usize {
    let by_height = if plot_height.is_finite() && plot_height > 0.0 && spacing_px > 0.0 {
        (plot_height / spacing_px).floor() as usize
    } else {
        0
    };
    by_height.min(max_ticks).max(2)
}

#[cfg(test)]
mod tests {
    use super::{ValueScale, value_tick_count};
    use crate::core::ValueDomain;

    #[test]
    fn larger_values_map_higher_on_screen() {
        let scale = ValueScale::new(ValueDomain { min: 0.0, max: 100.0 }, 20.0, 420.0);
        assert_eq!(scale.value_to_pixel(0.0), 420.0);
        assert_eq!(scale.value_to_pixel(100.0), 20.0);
        assert_eq!(scale.pixel_to_value(220.0), 50.0);
    }

    #[test]
    fn tick_count_respects_height_and_cap() {
        assert_eq!(value_tick_count(400.0, 40.0, 5), 5);
        assert_eq!(value_tick_count(130.0, 40.0, 5), 3);
        assert_eq!(value_tick_count(20.0, 40.0, 5), 2);
        assert_eq!(value_tick_count(0.0, 40.0, 5), 2);
    }

    #[test]
    fn ticks_span_domain() {
        let scale = ValueScale::new(ValueDomain { min: 10.0, max: 20.0 }, 0.0, 100.0);
        let ticks = scale.ticks(3);
        assert_eq!(ticks.as_slice(), &[10.0, 15.0, 20.0]);
    }
}
