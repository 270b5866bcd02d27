/// Target number of time ticks for an axis of `axis_span_px` pixels.
///
/// One tick per `density_px`, rounded, never below one.
pub(super) fn time_tick_target_count(axis_span_px: f64, density_px: f64) -> usize {
    if !axis_span_px.is_finite() || axis_span_px <= 0.0 {
        return 1;
    }
    if !density_px.is_finite() || density_px <= 0.0 {
        return 1;
    }

    ((axis_span_px / density_px).round() as usize).max(1)
}

/// Length of the outward tick marks drawn on both axes.
pub(super) const AXIS_TICK_MARK_PX: f64 = 5.0;
/// Gap between an axis tick mark and its label.
pub(super) const AXIS_LABEL_GAP_PX: f64 = 3.0;
