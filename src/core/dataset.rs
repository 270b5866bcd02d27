use chrono::{Duration, NaiveDate};
use serde::Deserialize;
use tracing::warn;

use crate::core::DataPoint;
use crate::core::primitives::date_to_unix_seconds;
use crate::error::{ChartError, ChartResult};

#[derive(Debug, Deserialize)]
struct RawRecord {
    date: String,
    value: f64,
}

/// Parses a JSON array of `{ "date": "...", "value": n }` records.
///
/// Record order is preserved. Callers must supply ascending dates.
pub fn parse_dataset_json(json: &str) -> ChartResult<Vec<DataPoint>> {
    let records: Vec<RawRecord> = serde_json::from_str(json)?;
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            DataPoint::parse(&record.date, record.value).inspect_err(|err| {
                warn!(index, error = %err, "rejected dataset record");
            })
        })
        .collect()
}

/// Inclusive calendar extent of the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeDomain {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Default for TimeDomain {
    fn default() -> Self {
        Self::from_points(&[])
    }
}

impl TimeDomain {
    /// Derives the extent from the first and last point.
    ///
    /// An empty dataset yields the first day of the epoch and a single date is
    /// widened by one day on each side, so the base scale never collapses.
    #[must_use]
    pub fn from_points(points: &[DataPoint]) -> Self {
        let (Some(first), Some(last)) = (points.first(), points.last()) else {
            let epoch = NaiveDate::default();
            return Self {
                start: epoch,
                end: epoch + Duration::days(1),
            };
        };

        let (start, end) = if first.date <= last.date {
            (first.date, last.date)
        } else {
            (last.date, first.date)
        };
        if start == end {
            return Self {
                start: start - Duration::days(1),
                end: end + Duration::days(1),
            };
        }
        Self { start, end }
    }

    /// Domain endpoints on the continuous time axis (unix seconds).
    #[must_use]
    pub fn seconds(self) -> (f64, f64) {
        (
            date_to_unix_seconds(self.start),
            date_to_unix_seconds(self.end),
        )
    }
}

/// Value extent feeding a vertical scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueDomain {
    pub min: f64,
    pub max: f64,
}

impl Default for ValueDomain {
    fn default() -> Self {
        Self { min: 0.0, max: 1.0 }
    }
}

impl ValueDomain {
    pub fn new(min: f64, max: f64) -> ChartResult<Self> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(ChartError::InvalidData(
                "value domain must be finite with min <= max".to_owned(),
            ));
        }
        Ok(Self { min, max }.widened())
    }

    /// Extent of the given points.
    ///
    /// Empty input yields `[0, 1]`; a flat extent is widened to `[v - 1, v + 1]`.
    #[must_use]
    pub fn from_points(points: &[DataPoint]) -> Self {
        if points.is_empty() {
            return Self::default();
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for point in points {
            min = min.min(point.value);
            max = max.max(point.value);
        }
        if !min.is_finite() || !max.is_finite() {
            return Self::default();
        }

        Self { min, max }.widened()
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    fn widened(self) -> Self {
        if self.min == self.max {
            Self {
                min: self.min - 1.0,
                max: self.max + 1.0,
            }
        } else {
            self
        }
    }
}
