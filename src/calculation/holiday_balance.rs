//! Holiday entitlement and balance.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calendar::{FreeDayResolver, HolidayProvider};
use crate::config::EngineConfig;
use crate::error::EngineResult;
use crate::models::PersonSnapshot;

use super::business_days::business_days;
use super::employment_window::employment_window;

/// Days per accounting month of the entitlement formula.
const DAYS_PER_MONTH: i64 = 30;

/// The holiday account of one person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HolidayBalance {
    /// Holiday days accrued from contract durations in the window.
    pub entitlement: Decimal,
    /// Day-equivalents of holiday hours carried over from the last semester.
    pub not_taken: Decimal,
    /// Holiday days taken in the window, net of public holidays.
    pub taken_days: i64,
    /// `entitlement + not_taken - taken_days`.
    pub remaining: Decimal,
}

/// Computes the holiday account of a person as of `reference`.
///
/// Evaluated within `employment_window(snapshot, reference)`:
/// * every contract inside the window accrues `round(months x annual / 12)`
///   days, where `months = floor(duration_days / 30)` - entitlement is
///   day-based, so a 10-hour contract accrues the same days as a 5-hour one;
/// * carried-over holiday *hours* convert to day-equivalents at the owning
///   contract's weekly rate (a zero-rate contract contributes nothing);
/// * requests lying fully inside the window count as their business days
///   minus the public holidays they span, since those days would have been
///   free anyway.
///
/// Rounding is to the nearest whole day, ties to even (`Decimal::round`),
/// the one rounding rule used throughout this crate.
///
/// # Errors
///
/// [`crate::error::EngineError::NoActiveOrPastContract`] when the window
/// cannot be resolved.
pub fn holiday_balance<P: HolidayProvider>(
    snapshot: &PersonSnapshot,
    resolver: &FreeDayResolver<P>,
    config: &EngineConfig,
    reference: NaiveDate,
) -> EngineResult<HolidayBalance> {
    let (window_start, window_end) = employment_window(snapshot, reference)?;

    let mut entitlement = Decimal::ZERO;
    let mut not_taken = Decimal::ZERO;
    for contract in snapshot
        .contracts
        .iter()
        .filter(|c| c.start >= window_start && c.end <= window_end)
    {
        let months = contract.duration_days() / DAYS_PER_MONTH;
        entitlement += (Decimal::from(months) * Decimal::from(config.annual_entitlement_days)
            / Decimal::from(12))
        .round();
        if !contract.hours_per_week.is_zero() {
            not_taken +=
                contract.carry_over_holiday_hours / contract.hours_per_week * Decimal::from(5);
        }
    }

    let mut taken_days = 0i64;
    for request in snapshot
        .holiday_requests
        .iter()
        .filter(|r| r.contained_in(window_start, window_end))
    {
        let business = i64::from(business_days(request.from, request.to)?);
        let free = resolver
            .free_days(&config.region, request.from, request.to)?
            .len() as i64;
        taken_days += business - free;
    }

    let remaining = entitlement + not_taken - Decimal::from(taken_days);
    Ok(HolidayBalance {
        entitlement,
        not_taken,
        taken_days,
        remaining,
    })
}
