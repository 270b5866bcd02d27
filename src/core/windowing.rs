use crate::core::DataPoint;

/// Locates the points whose time falls inside the closed window
/// `[start, end]` (unix seconds) and returns them as a half-open index pair.
///
/// Both bounds are found by binary search; the upper search starts at the
/// lower bound. `points` must be sorted ascending by date, otherwise the
/// result is unspecified. Windows entirely outside the data yield an empty
/// slice and windows covering it yield the full slice.
#[must_use]
pub fn visible_slice_bounds(points: &[DataPoint], start: f64, end: f64) -> (usize, usize) {
    let (min_t, max_t) = if start <= end {
        (start, end)
    } else {
        (end, start)
    };

    let lower = points.partition_point(|point| point.time() < min_t);
    let upper = lower + points[lower..].partition_point(|point| point.time() <= max_t);
    (lower, upper)
}

/// Borrowed view over [`visible_slice_bounds`].
#[must_use]
pub fn points_in_time_window(points: &[DataPoint], start: f64, end: f64) -> &[DataPoint] {
    let (lower, upper) = visible_slice_bounds(points, start, end);
    &points[lower..upper]
}

#[cfg(test)]
mod tests {
    use super::{points_in_time_window, visible_slice_bounds};
    use crate::core::DataPoint;
    use crate::core::primitives::date_to_unix_seconds;
    use chrono::{Duration, NaiveDate};

    fn series(len: i64) -> Vec<DataPoint> {
        let origin = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date");
        (0..len)
            .map(|i| DataPoint::new(origin + Duration::days(i), i as f64))
            .collect()
    }

    #[test]
    fn window_bounds_are_inclusive() {
        let points = series(10);
        let start = date_to_unix_seconds(points[2].date);
        let end = date_to_unix_seconds(points[5].date);
        assert_eq!(visible_slice_bounds(&points, start, end), (2, 6));
        assert_eq!(visible_slice_bounds(&points, end, start), (2, 6));
    }

    #[test]
    fn windows_outside_data_clamp() {
        let points = series(5);
        assert_eq!(visible_slice_bounds(&points, -1e12, -1e11), (0, 0));
        assert_eq!(visible_slice_bounds(&points, 1e12, 2e12), (5, 5));
        assert_eq!(points_in_time_window(&points, -1e12, 1e12).len(), 5);
        assert!(points_in_time_window(&[], 0.0, 1.0).is_empty());
    }
}
