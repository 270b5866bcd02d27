use serde::{Deserialize, Serialize};

/// Horizontal affine zoom state applied to the base time scale.
///
/// A base pixel `p` is displayed at `p * k + tx`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomTransform {
    pub k: f64,
    pub tx: f64,
}

impl Default for ZoomTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ZoomTransform {
    pub const IDENTITY: Self = Self { k: 1.0, tx: 0.0 };

    #[must_use]
    pub const fn new(k: f64, tx: f64) -> Self {
        Self { k, tx }
    }

    #[must_use]
    pub fn is_identity(self) -> bool {
        self == Self::IDENTITY
    }

    /// Base pixel to displayed pixel.
    #[must_use]
    pub fn apply_x(self, base_px: f64) -> f64 {
        base_px * self.k + self.tx
    }

    /// Displayed pixel to base pixel.
    #[must_use]
    pub fn invert_x(self, px: f64) -> f64 {
        (px - self.tx) / self.k
    }

    /// Clamps `k` into `scale_extent` and `tx` so the displayed range
    /// `[range_start, range_end]` only shows base pixels inside that same range.
    #[must_use]
    pub fn constrained(self, scale_extent: (f64, f64), range: (f64, f64)) -> Self {
        let k = if self.k.is_finite() {
            self.k.clamp(scale_extent.0, scale_extent.1)
        } else {
            scale_extent.1
        };
        let (start, end) = range;
        // tx bounds follow from invert_x(start) >= start and invert_x(end) <= end.
        let tx_min = end * (1.0 - k);
        let tx_max = start * (1.0 - k);
        let tx = if self.tx.is_finite() {
            self.tx.clamp(tx_min.min(tx_max), tx_max.max(tx_min))
        } else {
            tx_max
        };
        Self { k, tx }
    }
}
