use crate::core::{DataPoint, TimeScale, ValueScale};

/// Projects points into pixel-space polyline vertices.
///
/// The function is deterministic and side-effect free so both rendering and
/// tests can consume the exact same geometry output.
#[must_use]
pub fn project_polyline(
    points: &[DataPoint],
    time_scale: TimeScale,
    value_scale: ValueScale,
) -> Vec<(f64, f64)> {
    points
        .iter()
        .map(|point| {
            (
                time_scale.time_to_pixel(point.time()),
                value_scale.value_to_pixel(point.value),
            )
        })
        .collect()
}
