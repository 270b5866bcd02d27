use ordered_float::OrderedFloat;

use crate::core::{TimeScale, ValueDomain, ZoomTransform};

/// Everything derived from the current transform: the zoomed time scale, the
/// visible slice bounds and the visible value extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleWindow {
    pub time_scale: TimeScale,
    /// Half-open index range into the dataset.
    pub slice: (usize, usize),
    pub value_domain: ValueDomain,
}

impl VisibleWindow {
    #[must_use]
    pub fn len(&self) -> usize {
        self.slice.1 - self.slice.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(super) struct VisibleWindowKey {
    k: OrderedFloat<f64>,
    tx: OrderedFloat<f64>,
    plot_start: OrderedFloat<f64>,
    plot_end: OrderedFloat<f64>,
    data_revision: u64,
}

impl VisibleWindowKey {
    pub(super) fn new(transform: ZoomTransform, plot_x: (f64, f64), data_revision: u64) -> Self {
        Self {
            k: OrderedFloat(transform.k),
            tx: OrderedFloat(transform.tx),
            plot_start: OrderedFloat(plot_x.0),
            plot_end: OrderedFloat(plot_x.1),
            data_revision,
        }
    }
}

/// Runtime metrics exposed by the visible-window memo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DerivedCacheStats {
    pub hits: u64,
    pub misses: u64,
}

/// Single-entry memo keyed by the full input tuple of the derivation.
#[derive(Debug, Default)]
pub(super) struct DerivedCache {
    entry: Option<(VisibleWindowKey, VisibleWindow)>,
    stats: DerivedCacheStats,
}

impl DerivedCache {
    pub(super) fn get_or_compute(
        &mut self,
        key: VisibleWindowKey,
        compute: impl FnOnce() -> VisibleWindow,
    ) -> VisibleWindow {
        if let Some((cached_key, window)) = self.entry {
            if cached_key == key {
                self.stats.hits += 1;
                return window;
            }
        }

        self.stats.misses += 1;
        let window = compute();
        self.entry = Some((key, window));
        window
    }

    pub(super) fn stats(&self) -> DerivedCacheStats {
        self.stats
    }
}
