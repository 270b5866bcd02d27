use serde::{Deserialize, Serialize};

use crate::core::ZoomTransform;

/// Pointer state of the main-plot zoom controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoomMode {
    Idle,
    Dragging,
}

/// Drag session created on pointer-down and dropped on pointer-up.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ZoomGesture {
    last_x: f64,
}

/// Owns the zoom transform of the main plot.
///
/// Every candidate transform is constrained so the scale factor stays within
/// the configured extent and the visible window never pans past the plot
/// range (and therefore past the dataset extent). Gesture entry points return
/// the new transform only when it actually changed; `set_transform` is the
/// programmatic entry point used by synchronization and never reports a
/// gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoomController {
    transform: ZoomTransform,
    scale_extent: (f64, f64),
    range: (f64, f64),
    wheel_sensitivity: f64,
    gesture: Option<ZoomGesture>,
}

impl ZoomController {
    #[must_use]
    pub fn new(scale_extent: (f64, f64), range: (f64, f64), wheel_sensitivity: f64) -> Self {
        Self {
            transform: ZoomTransform::IDENTITY,
            scale_extent,
            range,
            wheel_sensitivity,
            gesture: None,
        }
    }

    #[must_use]
    pub fn transform(&self) -> ZoomTransform {
        self.transform
    }

    #[must_use]
    pub fn mode(&self) -> ZoomMode {
        if self.gesture.is_some() {
            ZoomMode::Dragging
        } else {
            ZoomMode::Idle
        }
    }

    #[must_use]
    pub fn scale_extent(&self) -> (f64, f64) {
        self.scale_extent
    }

    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Replaces the plot range after a layout change.
    ///
    /// A drag in progress is dropped: its last pointer position belongs to the
    /// old pixel space. When both ranges have width the visible fraction of
    /// the base range carries over, so the window holds until the resize step
    /// re-seeds it from the preserved time domain.
    pub fn set_range(&mut self, range: (f64, f64)) {
        let previous = self.range;
        self.gesture = None;
        self.range = range;

        let old_width = previous.1 - previous.0;
        let new_width = range.1 - range.0;
        let candidate = if old_width != 0.0 && new_width != 0.0 {
            let k = self.transform.k;
            let left = (self.transform.invert_x(previous.0) - previous.0) / old_width;
            ZoomTransform::new(k, range.0 - k * (range.0 + left * new_width))
        } else {
            self.transform
        };
        self.transform = self.constrain(candidate);
    }

    pub fn pointer_down(&mut self, x: f64) {
        self.gesture = Some(ZoomGesture { last_x: x });
    }

    /// Pans by the pointer delta since the previous event of the drag.
    pub fn pointer_move(&mut self, x: f64) -> Option<ZoomTransform> {
        let gesture = self.gesture.as_mut()?;
        let delta = x - gesture.last_x;
        gesture.last_x = x;
        if !delta.is_finite() || delta == 0.0 {
            return None;
        }
        let candidate = ZoomTransform::new(self.transform.k, self.transform.tx + delta);
        self.commit(candidate)
    }

    /// Ends the drag. Returns `true` when a drag was active.
    pub fn pointer_up(&mut self) -> bool {
        self.gesture.take().is_some()
    }

    /// Zooms around `pointer_x`, keeping the point under the pointer fixed.
    ///
    /// Positive `delta_y` (scrolling down) zooms out.
    pub fn wheel(&mut self, pointer_x: f64, delta_y: f64) -> Option<ZoomTransform> {
        if !delta_y.is_finite() || delta_y == 0.0 {
            return None;
        }
        let factor = 2f64.powf(-delta_y * self.wheel_sensitivity);
        self.zoom_around(self.transform.k * factor, pointer_x)
    }

    /// Zooms to scale `k` with the base pixel `center_base_px` shown at the
    /// middle of the plot.
    pub fn zoom_to(&mut self, k: f64, center_base_px: f64) -> Option<ZoomTransform> {
        if !k.is_finite() || !center_base_px.is_finite() {
            return None;
        }
        let k = k.clamp(self.scale_extent.0, self.scale_extent.1);
        let middle = (self.range.0 + self.range.1) * 0.5;
        self.commit(ZoomTransform::new(k, middle - center_base_px * k))
    }

    /// Programmatic update. Returns the constrained transform actually applied.
    pub fn set_transform(&mut self, transform: ZoomTransform) -> ZoomTransform {
        self.transform = self.constrain(transform);
        self.transform
    }

    pub fn reset(&mut self) -> ZoomTransform {
        self.gesture = None;
        self.set_transform(ZoomTransform::IDENTITY)
    }

    #[must_use]
    pub fn constrain(&self, transform: ZoomTransform) -> ZoomTransform {
        transform.constrained(self.scale_extent, self.range)
    }

    fn zoom_around(&mut self, k: f64, pointer_x: f64) -> Option<ZoomTransform> {
        if !k.is_finite() || !pointer_x.is_finite() {
            return None;
        }
        let anchor = pointer_x.clamp(
            self.range.0.min(self.range.1),
            self.range.1.max(self.range.0),
        );
        let k = k.clamp(self.scale_extent.0, self.scale_extent.1);
        let base = self.transform.invert_x(anchor);
        self.commit(ZoomTransform::new(k, anchor - base * k))
    }

    fn commit(&mut self, candidate: ZoomTransform) -> Option<ZoomTransform> {
        let next = self.constrain(candidate);
        if next == self.transform {
            return None;
        }
        self.transform = next;
        Some(next)
    }
}
