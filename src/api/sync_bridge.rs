//! Pure conversions between the zoom transform and the brush selection.
//!
//! Both canvases share the plot range `[start, end]`, so the brush lives in
//! base-scale pixels and the transform maps base pixels to displayed pixels.

use serde::{Deserialize, Serialize};

use crate::core::ZoomTransform;
use crate::interaction::{BrushDragMode, BrushSelection};

/// Which selection edge stays pinned when the implied scale has to be clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SelectionAnchor {
    #[default]
    Left,
    Right,
}

impl SelectionAnchor {
    /// The fixed edge of a drag: resizing the left handle pins the right edge.
    #[must_use]
    pub fn for_drag(mode: Option<BrushDragMode>) -> Self {
        match mode {
            Some(BrushDragMode::ResizingLeft) => Self::Right,
            _ => Self::Left,
        }
    }
}

/// Transform that displays exactly `selection` across the plot range.
///
/// `k = plot_width / selection_width`, clamped to `scale_extent`; the
/// anchored edge lands on the matching plot edge.
#[must_use]
pub fn selection_to_transform(
    selection: BrushSelection,
    plot_x: (f64, f64),
    scale_extent: (f64, f64),
    anchor: SelectionAnchor,
) -> ZoomTransform {
    let (start, end) = plot_x;
    let width = selection.width();
    let raw_k = if width > 0.0 {
        (end - start) / width
    } else {
        f64::INFINITY
    };
    let k = if raw_k.is_nan() {
        scale_extent.0
    } else {
        raw_k.clamp(scale_extent.0, scale_extent.1)
    };

    let tx = match anchor {
        SelectionAnchor::Left => start - k * selection.left(),
        SelectionAnchor::Right => end - k * selection.right(),
    };
    ZoomTransform::new(k, tx)
}

/// Selection covering the base pixels currently displayed by `transform`.
#[must_use]
pub fn transform_to_selection(transform: ZoomTransform, plot_x: (f64, f64)) -> BrushSelection {
    BrushSelection::new(transform.invert_x(plot_x.0), transform.invert_x(plot_x.1))
}

#[cfg(test)]
mod tests {
    use super::{SelectionAnchor, selection_to_transform, transform_to_selection};
    use crate::interaction::BrushSelection;
    use approx::assert_abs_diff_eq;

    const PLOT: (f64, f64) = (40.0, 760.0);
    const EXTENT: (f64, f64) = (1.0, 30.0);

    #[test]
    fn selection_roundtrips_through_transform() {
        let selection = BrushSelection::new(220.0, 400.0);
        let transform = selection_to_transform(selection, PLOT, EXTENT, SelectionAnchor::Left);
        assert_abs_diff_eq!(transform.k, 4.0, epsilon = 1e-12);

        let back = transform_to_selection(transform, PLOT);
        assert_abs_diff_eq!(back.x0, 220.0, epsilon = 1e-9);
        assert_abs_diff_eq!(back.x1, 400.0, epsilon = 1e-9);
    }

    #[test]
    fn collapsed_selection_clamps_to_max_scale_around_anchor() {
        let selection = BrushSelection::new(300.0, 300.0);
        let left = selection_to_transform(selection, PLOT, EXTENT, SelectionAnchor::Left);
        assert_eq!(left.k, 30.0);
        assert_abs_diff_eq!(transform_to_selection(left, PLOT).x0, 300.0, epsilon = 1e-9);

        let right = selection_to_transform(selection, PLOT, EXTENT, SelectionAnchor::Right);
        assert_abs_diff_eq!(transform_to_selection(right, PLOT).x1, 300.0, epsilon = 1e-9);
    }
}
