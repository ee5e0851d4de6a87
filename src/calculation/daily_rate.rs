//! Per-day schedule resolution.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::calendar::{FreeDayResolver, HolidayProvider};
use crate::config::EngineConfig;
use crate::models::PersonSnapshot;

use super::business_days::is_weekday;

/// Computes the hours a person is scheduled to work on one calendar day.
///
/// Weekends and public holidays are 0. Otherwise every contract active on
/// `date` contributes `hours_per_week / 5`, and every rate change of that
/// contract active on `date` contributes the difference between its rate
/// and the contract's base rate, also spread over five days. Concurrently
/// active contracts stack, so two 10-hour contracts schedule 4 hours a day.
pub fn rate_on_day<P: HolidayProvider>(
    snapshot: &PersonSnapshot,
    resolver: &FreeDayResolver<P>,
    config: &EngineConfig,
    date: NaiveDate,
) -> Decimal {
    if !is_weekday(date) || resolver.is_free_day(&config.region, date) {
        return Decimal::ZERO;
    }

    let mut rate = Decimal::ZERO;
    for contract in snapshot
        .contracts
        .iter()
        .filter(|contract| contract.is_active_on(date))
    {
        rate += contract.daily_hours();
        for change in snapshot.changes_for(contract.id) {
            if change.is_active_on(date, contract.end) {
                rate += change.daily_delta(contract.hours_per_week);
            }
        }
    }
    rate
}
