use serde::{Deserialize, Serialize};

/// Continuous linear mapping from a domain interval to a pixel range.
///
/// Degenerate intervals never fail: a collapsed domain maps every value to the
/// middle of the range and a collapsed range inverts to the middle of the
/// domain. This keeps zero-sized layouts drawable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    #[must_use]
    pub const fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            domain_start: domain.0,
            domain_end: domain.1,
            range_start: range.0,
            range_end: range.1,
        }
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn with_domain(self, domain: (f64, f64)) -> Self {
        Self::new(domain, self.range())
    }

    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        if span == 0.0 || !span.is_finite() {
            return (self.range_start + self.range_end) * 0.5;
        }
        let normalized = (value - self.domain_start) / span;
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let span = self.range_end - self.range_start;
        if span == 0.0 || !span.is_finite() {
            return (self.domain_start + self.domain_end) * 0.5;
        }
        let normalized = (pixel - self.range_start) / span;
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }
}

/// Evenly spaced values spanning `range` inclusively.
#[must_use]
pub fn evenly_spaced(range: (f64, f64), count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![range.0],
        _ => {
            let span = range.1 - range.0;
            let denominator = (count - 1) as f64;
            (0..count)
                .map(|index| range.0 + span * (index as f64) / denominator)
                .collect()
        }
    }
}
