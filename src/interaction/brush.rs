use serde::{Deserialize, Serialize};

/// Selection over the overview strip in overview-canvas pixels.
///
/// Edges are kept in drag order while a gesture runs; consumers should read
/// through [`BrushSelection::left`] and [`BrushSelection::right`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrushSelection {
    pub x0: f64,
    pub x1: f64,
}

impl BrushSelection {
    #[must_use]
    pub const fn new(x0: f64, x1: f64) -> Self {
        Self { x0, x1 }
    }

    #[must_use]
    pub fn left(self) -> f64 {
        self.x0.min(self.x1)
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.x0.max(self.x1)
    }

    #[must_use]
    pub fn width(self) -> f64 {
        (self.x1 - self.x0).abs()
    }

    #[must_use]
    pub fn normalized(self) -> Self {
        Self::new(self.left(), self.right())
    }
}

/// Active drag role on the overview brush.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrushDragMode {
    Moving,
    ResizingLeft,
    ResizingRight,
}

impl BrushDragMode {
    fn swapped(self) -> Self {
        match self {
            Self::Moving => Self::Moving,
            Self::ResizingLeft => Self::ResizingRight,
            Self::ResizingRight => Self::ResizingLeft,
        }
    }
}

/// Drag session created on pointer-down and dropped on pointer-up.
///
/// `grab_offset` is the pointer distance from the grabbed edge (or from the
/// left edge when moving) at pointer-down.
#[derive(Debug, Clone, Copy, PartialEq)]
struct BrushGesture {
    mode: BrushDragMode,
    grab_offset: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BrushController {
    selection: BrushSelection,
    range: (f64, f64),
    handle_width: f64,
    gesture: Option<BrushGesture>,
}

impl BrushController {
    /// Creates a controller whose selection covers the whole `range`.
    #[must_use]
    pub fn new(range: (f64, f64), handle_width: f64) -> Self {
        Self {
            selection: BrushSelection::new(range.0, range.1),
            range,
            handle_width,
            gesture: None,
        }
    }

    #[must_use]
    pub fn selection(&self) -> BrushSelection {
        self.selection.normalized()
    }

    #[must_use]
    pub fn mode(&self) -> Option<BrushDragMode> {
        self.gesture.map(|gesture| gesture.mode)
    }

    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    #[must_use]
    pub fn handle_width(&self) -> f64 {
        self.handle_width
    }

    /// Replaces the overview plot range after a layout change.
    ///
    /// Drops any drag in progress and rescales the selection so it covers
    /// the same fraction of the range.
    pub fn set_range(&mut self, range: (f64, f64)) {
        let previous = self.range;
        self.gesture = None;
        self.range = range;

        let old_width = previous.1 - previous.0;
        let selection = self.selection.normalized();
        let selection = if old_width != 0.0 {
            let rescale =
                |x: f64| range.0 + (x - previous.0) / old_width * (range.1 - range.0);
            BrushSelection::new(rescale(selection.x0), rescale(selection.x1))
        } else {
            selection
        };
        self.selection = self.clamped(selection);
    }

    /// Programmatic update. Never starts, ends or reports a drag.
    pub fn set_selection(&mut self, x0: f64, x1: f64) -> BrushSelection {
        self.selection = self.clamped(BrushSelection::new(x0, x1).normalized());
        self.selection
    }

    /// Hit-tests the pointer against the handles and the body.
    ///
    /// Returns the started drag mode, or `None` when the pointer is outside
    /// the selection.
    pub fn pointer_down(&mut self, x: f64) -> Option<BrushDragMode> {
        if !x.is_finite() {
            return None;
        }
        self.selection = self.selection.normalized();
        let left = self.selection.left();
        let right = self.selection.right();
        let to_left = (x - left).abs();
        let to_right = (x - right).abs();

        let gesture = if to_left <= self.handle_width && to_left <= to_right {
            BrushGesture {
                mode: BrushDragMode::ResizingLeft,
                grab_offset: x - left,
            }
        } else if to_right <= self.handle_width {
            BrushGesture {
                mode: BrushDragMode::ResizingRight,
                grab_offset: x - right,
            }
        } else if x > left && x < right {
            BrushGesture {
                mode: BrushDragMode::Moving,
                grab_offset: x - left,
            }
        } else {
            return None;
        };

        self.gesture = Some(gesture);
        Some(gesture.mode)
    }

    /// Applies the pointer position to the active drag and returns the
    /// normalized selection when it changed.
    pub fn pointer_move(&mut self, x: f64) -> Option<BrushSelection> {
        let gesture = self.gesture.as_mut()?;
        if !x.is_finite() {
            return None;
        }
        let (min, max) = ordered(self.range);
        let target = x - gesture.grab_offset;
        let before = self.selection;
        let mut next = self.selection;

        match gesture.mode {
            BrushDragMode::Moving => {
                let width = next.width();
                let left = target.clamp(min, (max - width).max(min));
                next = BrushSelection::new(left, left + width);
            }
            BrushDragMode::ResizingLeft => {
                next.x0 = target.clamp(min, max);
                if next.x0 > next.x1 {
                    next = BrushSelection::new(next.x1, next.x0);
                    gesture.mode = gesture.mode.swapped();
                }
            }
            BrushDragMode::ResizingRight => {
                next.x1 = target.clamp(min, max);
                if next.x0 > next.x1 {
                    next = BrushSelection::new(next.x1, next.x0);
                    gesture.mode = gesture.mode.swapped();
                }
            }
        }

        self.selection = next;
        if next == before {
            return None;
        }
        Some(next.normalized())
    }

    /// Ends the drag. Returns the mode that was active.
    pub fn pointer_up(&mut self) -> Option<BrushDragMode> {
        self.gesture.take().map(|gesture| gesture.mode)
    }

    fn clamped(&self, selection: BrushSelection) -> BrushSelection {
        let (min, max) = ordered(self.range);
        BrushSelection::new(selection.x0.clamp(min, max), selection.x1.clamp(min, max))
    }
}

fn ordered(range: (f64, f64)) -> (f64, f64) {
    (range.0.min(range.1), range.0.max(range.1))
}
