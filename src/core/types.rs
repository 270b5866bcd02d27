use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{date_to_unix_seconds, parse_iso_date};
use crate::error::{ChartError, ChartResult};

/// Pixel size of a canvas or of the host container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns `true` when the viewport has a non-zero drawable area.
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Fixed insets reserved around a plot area for axes and labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn validate(self) -> ChartResult<Self> {
        for (side, value) in [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "margin `{side}` must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }
}

/// One sample of the series: a calendar date and its value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataPoint {
    pub date: NaiveDate,
    pub value: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }

    /// Builds a point from an ISO-8601 date (or RFC 3339 date-time) string.
    pub fn parse(date: &str, value: f64) -> ChartResult<Self> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "value for `{date}` must be finite"
            )));
        }
        Ok(Self {
            date: parse_iso_date(date)?,
            value,
        })
    }

    /// Position of the point on the continuous time axis, in unix seconds.
    #[must_use]
    pub fn time(self) -> f64 {
        date_to_unix_seconds(self.date)
    }
}
