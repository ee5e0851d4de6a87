//! Business-day counting.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::{EngineError, EngineResult};

/// Returns true for Monday through Friday.
pub fn is_weekday(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Counts working days (Mon-Fri) between `from` and `to`, both inclusive.
///
/// Counted are the weekdays of the half-open `[from, to)` plus `to` itself
/// when it is a weekday, so a weekend `to` contributes nothing extra. With
/// `from == to` on a weekday the result is 1.
///
/// # Errors
///
/// [`EngineError::InvalidInterval`] if `from` is after `to`.
///
/// # Example
///
/// ```
/// use worktime_engine::calculation::business_days;
/// use chrono::NaiveDate;
///
/// let friday = NaiveDate::from_ymd_opt(2023, 5, 5).unwrap();
/// let monday = NaiveDate::from_ymd_opt(2023, 5, 8).unwrap();
/// assert_eq!(business_days(friday, monday).unwrap(), 2);
/// ```
pub fn business_days(from: NaiveDate, to: NaiveDate) -> EngineResult<u32> {
    if from > to {
        return Err(EngineError::InvalidInterval { from, to });
    }
    let mut count = from
        .iter_days()
        .take_while(|day| *day < to)
        .filter(|day| is_weekday(*day))
        .count() as u32;
    if is_weekday(to) {
        count += 1;
    }
    Ok(count)
}
