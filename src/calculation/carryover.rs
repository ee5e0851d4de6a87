//! Semester carryover evaluation.
//!
//! At the boundary between employment periods, unused hours and unused
//! holiday balance move from the ending period onto the new period's
//! contract. The evaluation here is pure; applying the result to a contract
//! is the engine's job, inside the per-person critical section.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calendar::{FreeDayResolver, HolidayProvider};
use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::PersonSnapshot;

use super::daily_rate::rate_on_day;
use super::employment_window::employment_window;
use super::holiday_balance::holiday_balance;
use super::working_time::working_time;

/// The outcome of a semester carryover evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Carryover {
    /// The currently-active contract the carryover is applied to.
    pub target_contract: Uuid,
    /// Unused working hours moving into the new period.
    pub hours: Decimal,
    /// Unused holiday balance moving into the new period, in hours.
    pub holiday_hours: Decimal,
}

/// Evaluates the carryover from the last ended employment period.
///
/// The previous period is re-evaluated with "now" pinned to its end date:
/// `working_time`, `holiday_balance` and the employment window are all
/// computed as of `last_end`, the latest contract end before `reference`.
/// Contracts ending simultaneously on that date all contribute their prior
/// carryover. The leftover holiday entitlement converts to hours at the mean
/// daily rate over every calendar day of the pinned window.
///
/// Nothing is mutated here; the returned [`Carryover`] names the target
/// contract (the currently-active one with the longest duration) and the two
/// increments.
///
/// # Errors
///
/// [`EngineError::NoActiveOrPastContract`] when no contract ended before
/// `reference`, or no contract is active on `reference` to receive the
/// carryover.
pub fn evaluate_carryover<P: HolidayProvider>(
    snapshot: &PersonSnapshot,
    resolver: &FreeDayResolver<P>,
    config: &EngineConfig,
    reference: NaiveDate,
) -> EngineResult<Carryover> {
    let last_end = snapshot
        .contracts
        .iter()
        .filter(|c| c.end < reference)
        .map(|c| c.end)
        .max()
        .ok_or_else(|| EngineError::NoActiveOrPastContract {
            person: snapshot.person.clone(),
        })?;
    let last_contracts: Vec<_> = snapshot
        .contracts
        .iter()
        .filter(|c| c.end == last_end)
        .collect();

    let time = working_time(snapshot, resolver, config, last_end)?;
    let balance = holiday_balance(snapshot, resolver, config, last_end)?;
    let (window_start, window_end) = employment_window(snapshot, last_end)?;

    let mut rate_sum = Decimal::ZERO;
    let mut day_count = 0i64;
    for day in window_start.iter_days().take_while(|d| *d <= window_end) {
        rate_sum += rate_on_day(snapshot, resolver, config, day);
        day_count += 1;
    }
    let avg_daily_hours = if day_count == 0 {
        Decimal::ZERO
    } else {
        rate_sum / Decimal::from(day_count)
    };

    let hours = last_contracts
        .iter()
        .map(|c| c.carry_over_hours)
        .sum::<Decimal>()
        + time.excess_hours;
    let holiday_hours = last_contracts
        .iter()
        .map(|c| c.carry_over_holiday_hours)
        .sum::<Decimal>()
        + (balance.entitlement - Decimal::from(balance.taken_days)) * avg_daily_hours;

    let target = snapshot
        .contracts
        .iter()
        .filter(|c| c.is_active_on(reference))
        .max_by_key(|c| c.duration_days())
        .ok_or_else(|| EngineError::NoActiveOrPastContract {
            person: snapshot.person.clone(),
        })?;

    Ok(Carryover {
        target_contract: target.id,
        hours,
        holiday_hours,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::GermanPublicHolidays;
    use crate::models::{Contract, HolidayRequest, Task};

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn resolver() -> FreeDayResolver<GermanPublicHolidays> {
        FreeDayResolver::new(GermanPublicHolidays)
    }

    fn contract(start: &str, end: &str, hours_per_week: i64) -> Contract {
        Contract::new(
            "jdoe",
            make_date(start),
            make_date(end),
            Decimal::from(hours_per_week),
            "prof_mueller",
        )
    }

    fn finished_task(deadline: &str) -> Task {
        Task::new(
            "jdoe",
            "prof_mueller",
            "Grade exercise sheets",
            Decimal::from(2),
            Decimal::from(2),
            make_date(deadline),
        )
    }

    fn evaluate(snapshot: &PersonSnapshot, reference: &str) -> EngineResult<Carryover> {
        evaluate_carryover(
            snapshot,
            &resolver(),
            &EngineConfig::default(),
            make_date(reference),
        )
    }

    #[test]
    fn test_simple_carryover() {
        // One week worked 2 of 5 hours, next week's contract picks up 3.
        let mut snapshot = PersonSnapshot::empty("jdoe");
        snapshot.contracts.push(contract("2023-06-19", "2023-06-23", 5));
        snapshot.contracts.push(contract("2023-06-26", "2023-06-30", 10));
        snapshot.tasks.push(finished_task("2023-06-23"));

        let carryover = evaluate(&snapshot, "2023-06-26").unwrap();
        assert_eq!(carryover.hours, Decimal::from(3));
        assert_eq!(carryover.holiday_hours, Decimal::ZERO);
        assert_eq!(carryover.target_contract, snapshot.contracts[1].id);
    }

    #[test]
    fn test_only_the_latest_ended_period_counts() {
        // Chained weekly contracts: only the week ending last contributes,
        // together with the carryover already accumulated on it.
        let mut snapshot = PersonSnapshot::empty("jdoe");
        snapshot.contracts.push(contract("2023-06-05", "2023-06-11", 5));
        snapshot.tasks.push(finished_task("2023-06-11"));
        let mut second = contract("2023-06-12", "2023-06-18", 5);
        second.carry_over_hours = Decimal::from(3);
        snapshot.contracts.push(second);
        snapshot.tasks.push(finished_task("2023-06-18"));
        let mut third = contract("2023-06-19", "2023-06-25", 5);
        third.carry_over_hours = Decimal::from(6);
        snapshot.contracts.push(third);
        snapshot.tasks.push(finished_task("2023-06-25"));
        snapshot.contracts.push(contract("2023-06-26", "2023-07-02", 5));

        let carryover = evaluate(&snapshot, "2023-06-27").unwrap();
        assert_eq!(carryover.hours, Decimal::from(9));
        assert_eq!(carryover.holiday_hours, Decimal::ZERO);
    }

    #[test]
    fn test_simultaneously_ending_contracts_both_contribute() {
        let mut snapshot = PersonSnapshot::empty("jdoe");
        snapshot.contracts.push(contract("2023-06-19", "2023-06-23", 5));
        snapshot.contracts.push(contract("2023-06-19", "2023-06-23", 5));
        snapshot.tasks.push(finished_task("2023-06-23"));
        snapshot.contracts.push(contract("2023-06-26", "2023-06-30", 10));

        let carryover = evaluate(&snapshot, "2023-06-26").unwrap();
        // 5 + 5 expected, 2 worked
        assert_eq!(carryover.hours, Decimal::from(8));
    }

    #[test]
    fn test_prior_carryover_sums_across_ending_contracts() {
        let mut snapshot = PersonSnapshot::empty("jdoe");
        let mut first = contract("2023-06-19", "2023-06-23", 5);
        first.carry_over_hours = Decimal::from(1);
        snapshot.contracts.push(first);
        let mut second = contract("2023-06-19", "2023-06-23", 5);
        second.carry_over_hours = Decimal::from(2);
        snapshot.contracts.push(second);
        snapshot.tasks.push(finished_task("2023-06-23"));
        snapshot.contracts.push(contract("2023-06-26", "2023-06-30", 10));

        let carryover = evaluate(&snapshot, "2023-06-26").unwrap();
        assert_eq!(carryover.hours, Decimal::from(11));
    }

    #[test]
    fn test_holiday_hours_carry_over() {
        // Week-long contracts accrue no entitlement, so only the prior
        // holiday-hour carryovers move on.
        let mut snapshot = PersonSnapshot::empty("jdoe");
        let mut first = contract("2023-06-19", "2023-06-23", 5);
        first.carry_over_hours = Decimal::from(1);
        first.carry_over_holiday_hours = Decimal::from(4);
        snapshot.contracts.push(first);
        let mut second = contract("2023-06-19", "2023-06-23", 5);
        second.carry_over_hours = Decimal::from(2);
        second.carry_over_holiday_hours = Decimal::from(5);
        snapshot.contracts.push(second);
        snapshot.tasks.push(finished_task("2023-06-23"));
        snapshot.contracts.push(contract("2023-06-26", "2023-06-30", 10));

        let carryover = evaluate(&snapshot, "2023-06-26").unwrap();
        assert_eq!(carryover.hours, Decimal::from(11));
        assert_eq!(carryover.holiday_hours, Decimal::from(9));
    }

    #[test]
    fn test_taken_holiday_discounts_both_carryovers() {
        let mut snapshot = PersonSnapshot::empty("jdoe");
        let mut first = contract("2023-06-19", "2023-06-23", 5);
        first.carry_over_hours = Decimal::from(1);
        first.carry_over_holiday_hours = Decimal::from(4);
        snapshot.contracts.push(first);
        let mut second = contract("2023-06-19", "2023-06-23", 5);
        second.carry_over_hours = Decimal::from(2);
        second.carry_over_holiday_hours = Decimal::from(5);
        snapshot.contracts.push(second);
        snapshot.tasks.push(finished_task("2023-06-23"));
        snapshot.holiday_requests.push(HolidayRequest::new(
            "jdoe",
            make_date("2023-06-20"),
            make_date("2023-06-20"),
        ));
        snapshot.contracts.push(contract("2023-06-26", "2023-06-30", 10));

        let carryover = evaluate(&snapshot, "2023-06-26").unwrap();
        // Expected hours drop by the 2-hour day taken; the taken day is
        // charged against the (empty) entitlement at 2 hours per day.
        assert_eq!(carryover.hours, Decimal::from(9));
        assert_eq!(carryover.holiday_hours, Decimal::from(7));
    }

    #[test]
    fn test_longest_active_contract_is_the_target() {
        let mut snapshot = PersonSnapshot::empty("jdoe");
        snapshot.contracts.push(contract("2023-06-19", "2023-06-23", 5));
        snapshot.tasks.push(finished_task("2023-06-23"));
        snapshot.contracts.push(contract("2023-06-26", "2023-06-30", 5));
        snapshot.contracts.push(contract("2023-06-26", "2023-09-30", 5));

        let carryover = evaluate(&snapshot, "2023-06-26").unwrap();
        assert_eq!(carryover.target_contract, snapshot.contracts[2].id);
    }

    #[test]
    fn test_no_past_contract_is_error() {
        let mut snapshot = PersonSnapshot::empty("jdoe");
        snapshot.contracts.push(contract("2023-06-26", "2023-06-30", 5));

        let result = evaluate(&snapshot, "2023-06-26");
        assert!(matches!(
            result,
            Err(EngineError::NoActiveOrPastContract { .. })
        ));
    }

    #[test]
    fn test_no_active_target_is_error() {
        let mut snapshot = PersonSnapshot::empty("jdoe");
        snapshot.contracts.push(contract("2023-06-19", "2023-06-23", 5));

        let result = evaluate(&snapshot, "2023-06-26");
        assert!(matches!(
            result,
            Err(EngineError::NoActiveOrPastContract { .. })
        ));
    }
}
