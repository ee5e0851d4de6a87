//! Holiday-calendar sources.
//!
//! A [`HolidayProvider`] delivers the public holidays of a region for whole
//! calendar years. The built-in [`GermanPublicHolidays`] source computes the
//! nine nationwide German statutory holidays; an API-backed provider can be
//! plugged in through the same trait.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};

use crate::error::{EngineError, EngineResult};

/// A source of public-holiday calendars.
///
/// Implementations must be deterministic: the same `(region, year)` request
/// returns the same mapping every time, so results may be cached
/// indefinitely.
pub trait HolidayProvider {
    /// Returns every public holiday of `region` in the given years, as a
    /// date-to-holiday-name mapping.
    ///
    /// # Errors
    ///
    /// [`EngineError::RateLookupFailure`] when the calendar cannot be
    /// delivered (unknown region, unsupported year, source unavailable).
    fn holidays_in(
        &self,
        region: &str,
        years: &[i32],
    ) -> EngineResult<BTreeMap<NaiveDate, String>>;
}

/// The nine nationwide German statutory holidays.
///
/// Fixed dates plus the movable feasts derived from Easter:
/// * Neujahr (Jan 1)
/// * Karfreitag (Easter - 2)
/// * Ostermontag (Easter + 1)
/// * Tag der Arbeit (May 1)
/// * Christi Himmelfahrt (Easter + 39)
/// * Pfingstmontag (Easter + 50)
/// * Tag der Deutschen Einheit (Oct 3)
/// * Erster Weihnachtstag (Dec 25)
/// * Zweiter Weihnachtstag (Dec 26)
///
/// State-level holidays (Epiphany, Corpus Christi, Reformation Day, ...) are
/// not included; only the region code `DE` is recognized.
#[derive(Debug, Clone, Copy, Default)]
pub struct GermanPublicHolidays;

impl HolidayProvider for GermanPublicHolidays {
    fn holidays_in(
        &self,
        region: &str,
        years: &[i32],
    ) -> EngineResult<BTreeMap<NaiveDate, String>> {
        if !region.eq_ignore_ascii_case("DE") {
            return Err(EngineError::RateLookupFailure {
                region: region.to_string(),
                year: years.first().copied().unwrap_or_default(),
                message: "unknown region".to_string(),
            });
        }

        let mut holidays = BTreeMap::new();
        for &year in years {
            let easter = easter_sunday(year).ok_or_else(|| EngineError::RateLookupFailure {
                region: region.to_string(),
                year,
                message: "year not covered by the Gregorian calendar".to_string(),
            })?;

            let mut add = |date: NaiveDate, name: &str| {
                holidays.insert(date, name.to_string());
            };
            add(ymd(year, 1, 1), "Neujahr");
            add(easter - Duration::days(2), "Karfreitag");
            add(easter + Duration::days(1), "Ostermontag");
            add(ymd(year, 5, 1), "Tag der Arbeit");
            add(easter + Duration::days(39), "Christi Himmelfahrt");
            add(easter + Duration::days(50), "Pfingstmontag");
            add(ymd(year, 10, 3), "Tag der Deutschen Einheit");
            add(ymd(year, 12, 25), "Erster Weihnachtstag");
            add(ymd(year, 12, 26), "Zweiter Weihnachtstag");
        }
        Ok(holidays)
    }
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

/// Easter Sunday for a Gregorian year, via the anonymous Gregorian computus.
///
/// Returns `None` for years before the Gregorian reform (1583), where the
/// algorithm is not defined.
fn easter_sunday(year: i32) -> Option<NaiveDate> {
    if year < 1583 {
        return None;
    }
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}
