//! Working-time accounting.
//!
//! Integrates the per-day schedule over the employment window to get the
//! hours a person is expected to have worked, and nets them against the
//! hours actually worked and planned on their tasks.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calendar::{FreeDayResolver, HolidayProvider};
use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::PersonSnapshot;

use super::business_days::business_days;
use super::daily_rate::rate_on_day;
use super::employment_window::employment_window;

/// The aggregate working-time account of one person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkingTime {
    /// Hours the person is expected to have worked up to the reference date.
    pub hours_to_work: Decimal,
    /// Hours actually worked, summed over tasks due in the window.
    pub worked_hours: Decimal,
    /// Hours planned, summed over tasks due in the window.
    pub planned_hours: Decimal,
    /// `hours_to_work - worked_hours`: positive means hours still owed.
    pub excess_hours: Decimal,
}

/// Expected working days in `[from, min(reference, to)]`, net of public
/// holidays in that clipped range.
///
/// The clipping keeps expectation from extending past "now": days the
/// reference date has not reached yet are not owed. A range the reference
/// date has not entered at all contributes 0 days.
///
/// # Errors
///
/// [`EngineError::InvalidInterval`] if `from` is after `to`.
pub fn days_to_work<P: HolidayProvider>(
    from: NaiveDate,
    to: NaiveDate,
    reference: NaiveDate,
    resolver: &FreeDayResolver<P>,
    config: &EngineConfig,
) -> EngineResult<i64> {
    if from > to {
        return Err(EngineError::InvalidInterval { from, to });
    }
    let clipped = to.min(reference);
    if clipped < from {
        return Ok(0);
    }
    let business = i64::from(business_days(from, clipped)?);
    let free = resolver.free_days(&config.region, from, clipped)?.len() as i64;
    Ok(business - free)
}

/// Computes the working-time account of a person as of `reference`.
///
/// Evaluated within `employment_window(snapshot, reference)`:
/// * every contract inside the window contributes its expected days times
///   its daily base rate;
/// * every rate change of such a contract whose start lies in the window
///   contributes its expected days times the rate difference;
/// * holiday requests lying fully inside the window are credited day by day
///   at the schedule of each day taken, so leave on a changed-rate day
///   counts at the changed rate;
/// * tasks with a deadline inside the window supply worked and planned
///   hours.
///
/// # Errors
///
/// [`EngineError::NoActiveOrPastContract`] when the window cannot be
/// resolved.
pub fn working_time<P: HolidayProvider>(
    snapshot: &PersonSnapshot,
    resolver: &FreeDayResolver<P>,
    config: &EngineConfig,
    reference: NaiveDate,
) -> EngineResult<WorkingTime> {
    let (window_start, window_end) = employment_window(snapshot, reference)?;

    let mut hours_to_work = Decimal::ZERO;
    for contract in snapshot
        .contracts
        .iter()
        .filter(|c| c.start >= window_start && c.end <= window_end)
    {
        let days = days_to_work(contract.start, contract.end, reference, resolver, config)?;
        hours_to_work += Decimal::from(days) * contract.daily_hours();

        for change in snapshot.changes_for(contract.id) {
            if change.start < window_start || change.start > window_end {
                continue;
            }
            let days = days_to_work(
                change.start,
                change.effective_end(contract.end),
                reference,
                resolver,
                config,
            )?;
            hours_to_work += Decimal::from(days) * change.daily_delta(contract.hours_per_week);
        }
    }

    for request in snapshot
        .holiday_requests
        .iter()
        .filter(|r| r.contained_in(window_start, window_end))
    {
        for day in request.days() {
            hours_to_work -= rate_on_day(snapshot, resolver, config, day);
        }
    }

    let mut worked_hours = Decimal::ZERO;
    let mut planned_hours = Decimal::ZERO;
    for task in snapshot
        .tasks
        .iter()
        .filter(|t| t.due_within(window_start, window_end))
    {
        worked_hours += task.worked_hours;
        planned_hours += task.total_hours;
    }

    let excess_hours = hours_to_work - worked_hours;
    Ok(WorkingTime {
        hours_to_work,
        worked_hours,
        planned_hours,
        excess_hours,
    })
}
