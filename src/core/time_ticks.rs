use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::core::primitives::{SECONDS_PER_DAY, date_to_unix_seconds, unix_seconds_to_date};

const MAX_GENERATED_TICKS: usize = 4_096;

/// Calendar interval between two adjacent time ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeTickInterval {
    /// Days whose day-of-month minus one is a multiple of the step.
    Days(u32),
    /// Sundays.
    Weeks,
    /// First day of months whose zero-based index is a multiple of the step.
    Months(u32),
    /// January 1st of years that are a multiple of the step.
    Years(u32),
}

impl TimeTickInterval {
    #[must_use]
    pub fn approx_seconds(self) -> f64 {
        let days = match self {
            Self::Days(step) => f64::from(step),
            Self::Weeks => 7.0,
            Self::Months(step) => 30.0 * f64::from(step),
            Self::Years(step) => 365.0 * f64::from(step),
        };
        days * SECONDS_PER_DAY
    }
}

const CANDIDATES: [TimeTickInterval; 6] = [
    TimeTickInterval::Days(1),
    TimeTickInterval::Days(2),
    TimeTickInterval::Weeks,
    TimeTickInterval::Months(1),
    TimeTickInterval::Months(3),
    TimeTickInterval::Years(1),
];

/// Picks the candidate interval whose duration is closest (by ratio) to the
/// ideal step `span / count`. Spans longer than the largest candidate step in
/// whole years.
#[must_use]
pub fn select_tick_interval(start: f64, end: f64, count: usize) -> TimeTickInterval {
    let count = count.max(1) as f64;
    let target = (end - start).abs() / count;
    if !target.is_finite() || target <= 0.0 {
        return TimeTickInterval::Days(1);
    }

    let index = CANDIDATES
        .iter()
        .take_while(|interval| interval.approx_seconds() <= target)
        .count();

    if index == CANDIDATES.len() {
        let years = target / TimeTickInterval::Years(1).approx_seconds();
        return TimeTickInterval::Years(nice_year_step(years));
    }
    if index == 0 {
        return CANDIDATES[0];
    }

    let lower = CANDIDATES[index - 1];
    let upper = CANDIDATES[index];
    if target / lower.approx_seconds() < upper.approx_seconds() / target {
        lower
    } else {
        upper
    }
}

fn nice_year_step(years: f64) -> u32 {
    if years <= 1.0 {
        return 1;
    }
    let magnitude = 10f64.powf(years.log10().floor());
    let residual = years / magnitude;
    let nice = if residual >= 7.07 {
        10.0
    } else if residual >= 3.16 {
        5.0
    } else if residual >= 1.41 {
        2.0
    } else {
        1.0
    };
    (nice * magnitude).clamp(1.0, f64::from(u32::MAX)) as u32
}

/// Generates calendar ticks inside the inclusive window `[start, end]`
/// (unix seconds) for roughly `count` ticks.
#[must_use]
pub fn time_ticks(start: f64, end: f64, count: usize) -> Vec<NaiveDate> {
    if !start.is_finite() || !end.is_finite() {
        return Vec::new();
    }
    let (start, end) = if start <= end {
        (start, end)
    } else {
        (end, start)
    };
    let interval = select_tick_interval(start, end, count);
    ticks_for_interval(start, end, interval)
}

#[must_use]
pub fn ticks_for_interval(start: f64, end: f64, interval: TimeTickInterval) -> Vec<NaiveDate> {
    let first = ceil_date(start);
    let last = unix_seconds_to_date(end);
    if first > last {
        return Vec::new();
    }

    let mut ticks = Vec::new();
    match interval {
        TimeTickInterval::Days(step) => {
            let step = step.max(1);
            let mut date = first;
            while date <= last && ticks.len() < MAX_GENERATED_TICKS {
                if (date.day() - 1) % step == 0 {
                    ticks.push(date);
                }
                date += Duration::days(1);
            }
        }
        TimeTickInterval::Weeks => {
            let offset = (7 - first.weekday().num_days_from_sunday()) % 7;
            let mut date = first + Duration::days(i64::from(offset));
            debug_assert_eq!(date.weekday(), Weekday::Sun);
            while date <= last && ticks.len() < MAX_GENERATED_TICKS {
                ticks.push(date);
                date += Duration::days(7);
            }
        }
        TimeTickInterval::Months(step) => {
            let step = step.max(1);
            let mut cursor = month_start_on_or_after(first);
            while let Some(date) = cursor {
                if date > last || ticks.len() >= MAX_GENERATED_TICKS {
                    break;
                }
                if date.month0() % step == 0 {
                    ticks.push(date);
                }
                cursor = date.checked_add_months(chrono::Months::new(1));
            }
        }
        TimeTickInterval::Years(step) => {
            let step = step.max(1) as i32;
            let mut year = if first.ordinal() == 1 {
                first.year()
            } else {
                first.year() + 1
            };
            let remainder = year.rem_euclid(step);
            if remainder != 0 {
                year += step - remainder;
            }
            while let Some(date) = NaiveDate::from_ymd_opt(year, 1, 1) {
                if date > last || ticks.len() >= MAX_GENERATED_TICKS {
                    break;
                }
                ticks.push(date);
                year += step;
            }
        }
    }
    ticks
}

fn ceil_date(seconds: f64) -> NaiveDate {
    let date = unix_seconds_to_date(seconds);
    if date_to_unix_seconds(date) < seconds {
        date.succ_opt().unwrap_or(date)
    } else {
        date
    }
}

fn month_start_on_or_after(date: NaiveDate) -> Option<NaiveDate> {
    if date.day() == 1 {
        return Some(date);
    }
    date.with_day(1)?
        .checked_add_months(chrono::Months::new(1))
}
