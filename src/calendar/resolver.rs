//! Free-day resolution with per-year caching.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, PoisonError};

use chrono::{Datelike, NaiveDate};
use tracing::{debug, warn};

use crate::error::{EngineError, EngineResult};

use super::provider::HolidayProvider;

/// Resolves public holidays ("free days") within a date range.
///
/// The underlying calendar is requested once per calendar year covered by a
/// range and cached per `(region, year)`, since day-level calculations hit
/// the same years over and over. The API takes `&self` throughout, so one
/// resolver can serve calculations for many persons in parallel.
///
/// A provider failure degrades instead of aborting: the affected year is
/// treated as having no public holidays, and the gap is logged at warn
/// level. A calendar availability gap is lower-severity than refusing to do
/// contract math at all, but it must never pass silently.
#[derive(Debug)]
pub struct FreeDayResolver<P> {
    provider: P,
    cache: Mutex<HashMap<(String, i32), BTreeMap<NaiveDate, String>>>,
}

impl<P: HolidayProvider> FreeDayResolver<P> {
    /// Creates a resolver over the given holiday-calendar source.
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Public holidays of `region` within `[from, to]`, both inclusive, as a
    /// date-to-name mapping. Spans crossing year boundaries are served by
    /// merging the per-year calendars and filtering back to the range.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidInterval`] if `from` is after `to`. Provider
    /// failures do not error here; see the type-level notes on degradation.
    pub fn free_days(
        &self,
        region: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> EngineResult<BTreeMap<NaiveDate, String>> {
        if from > to {
            return Err(EngineError::InvalidInterval { from, to });
        }
        let mut result = BTreeMap::new();
        for year in from.year()..=to.year() {
            let calendar = self.year_calendar(region, year);
            result.extend(
                calendar
                    .into_iter()
                    .filter(|(date, _)| *date >= from && *date <= to),
            );
        }
        Ok(result)
    }

    /// Returns true if `date` is a public holiday in `region`.
    pub fn is_free_day(&self, region: &str, date: NaiveDate) -> bool {
        self.year_calendar(region, date.year()).contains_key(&date)
    }

    fn year_calendar(&self, region: &str, year: i32) -> BTreeMap<NaiveDate, String> {
        let key = (region.to_string(), year);
        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(calendar) = cache.get(&key) {
            return calendar.clone();
        }
        match self.provider.holidays_in(region, &[year]) {
            Ok(calendar) => {
                debug!(region, year, holidays = calendar.len(), "Cached holiday calendar");
                cache.insert(key, calendar.clone());
                calendar
            }
            Err(error) => {
                // Not cached: the source may recover on a later call.
                warn!(
                    region,
                    year,
                    error = %error,
                    "Holiday calendar unavailable, treating year as free of public holidays"
                );
                BTreeMap::new()
            }
        }
    }
}
