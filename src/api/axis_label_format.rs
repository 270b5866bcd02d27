use std::fmt;
use std::sync::Arc;

use chrono::{Datelike, NaiveDate};

pub type DateLabelFn = Arc<dyn Fn(NaiveDate) -> String + Send + Sync + 'static>;

/// Locale-specific date label functions injected by the host.
///
/// `day` labels every time tick; `month_year` adds a second line for ticks on
/// the first day of a month.
#[derive(Clone)]
pub struct DateLabelFormatter {
    day: DateLabelFn,
    month_year: DateLabelFn,
}

impl DateLabelFormatter {
    #[must_use]
    pub fn new(day: DateLabelFn, month_year: DateLabelFn) -> Self {
        Self { day, month_year }
    }

    /// Builds a formatter from two plain closures.
    #[must_use]
    pub fn from_fns<D, M>(day: D, month_year: M) -> Self
    where
        D: Fn(NaiveDate) -> String + Send + Sync + 'static,
        M: Fn(NaiveDate) -> String + Send + Sync + 'static,
    {
        Self::new(Arc::new(day), Arc::new(month_year))
    }

    #[must_use]
    pub fn day_label(&self, date: NaiveDate) -> String {
        (self.day)(date)
    }

    #[must_use]
    pub fn month_year_label(&self, date: NaiveDate) -> String {
        (self.month_year)(date)
    }

    /// Labels for one tick: the day, plus month/year on the 1st of a month.
    #[must_use]
    pub fn tick_labels(&self, date: NaiveDate) -> (String, Option<String>) {
        let secondary = (date.day() == 1).then(|| self.month_year_label(date));
        (self.day_label(date), secondary)
    }
}

impl Default for DateLabelFormatter {
    /// English labels: `5` and `Jan 2024`.
    fn default() -> Self {
        Self::from_fns(
            |date| date.format("%-d").to_string(),
            |date| date.format("%b %Y").to_string(),
        )
    }
}

impl fmt::Debug for DateLabelFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DateLabelFormatter").finish_non_exhaustive()
    }
}

/// Value-axis label with zero decimal places.
pub(super) fn format_value_label(value: f64) -> String {
    if !value.is_finite() {
        return "nan".to_owned();
    }
    let rounded = value.round();
    // Avoid printing "-0" for small negative values.
    if rounded == 0.0 {
        return "0".to_owned();
    }
    format!("{rounded:.0}")
}

#[cfg(test)]
mod tests {
    use super::{DateLabelFormatter, format_value_label};
    use chrono::NaiveDate;

    #[test]
    fn default_labels_add_month_year_on_first_of_month() {
        let labels = DateLabelFormatter::default();
        let first = NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date");
        let mid = NaiveDate::from_ymd_opt(2024, 3, 15).expect("valid date");

        assert_eq!(
            labels.tick_labels(first),
            ("1".to_owned(), Some("Mar 2024".to_owned()))
        );
        assert_eq!(labels.tick_labels(mid), ("15".to_owned(), None));
    }

    #[test]
    fn injected_functions_are_used() {
        let labels = DateLabelFormatter::from_fns(
            |date| date.format("%d.").to_string(),
            |date| date.format("%m/%Y").to_string(),
        );
        let first = NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date");
        assert_eq!(labels.day_label(first), "01.");
        assert_eq!(labels.month_year_label(first), "03/2024");
    }

    #[test]
    fn value_labels_have_no_decimals() {
        assert_eq!(format_value_label(107.6), "108");
        assert_eq!(format_value_label(-0.3), "0");
        assert_eq!(format_value_label(-12.5), "-13");
    }
}
