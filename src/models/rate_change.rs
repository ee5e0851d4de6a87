//! Rate change model.
//!
//! A rate change temporarily or permanently overrides the weekly-hours rate
//! of one contract. Open-ended changes (no end date) stay in force until the
//! parent contract ends or a later change supersedes them.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A dated override of a contract's weekly-hours rate.
///
/// Invariant, maintained by [`close_latest_open_change`] on every insert: a
/// contract has at most one open-ended change, and it is the chronologically
/// latest one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateChange {
    /// Unique identifier of this change.
    pub id: Uuid,
    /// The contract this change overrides.
    pub contract_id: Uuid,
    /// First day the override applies (inclusive).
    pub start: NaiveDate,
    /// Last day the override applies (inclusive). `None` means open-ended:
    /// valid until the parent contract ends or a later change supersedes it.
    pub end: Option<NaiveDate>,
    /// The overriding weekly working hours.
    pub hours_per_week: Decimal,
}

impl RateChange {
    /// Creates a rate change with a fresh id.
    pub fn new(
        contract_id: Uuid,
        start: NaiveDate,
        end: Option<NaiveDate>,
        hours_per_week: Decimal,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            contract_id,
            start,
            end,
            hours_per_week,
        }
    }

    /// Returns true if this change has no end date of its own.
    pub fn is_open_ended(&self) -> bool {
        self.end.is_none()
    }

    /// The last day the override applies, resolving an open end against the
    /// parent contract's end date.
    pub fn effective_end(&self, contract_end: NaiveDate) -> NaiveDate {
        self.end.unwrap_or(contract_end)
    }

    /// Returns true if the override applies on `date`.
    pub fn is_active_on(&self, date: NaiveDate, contract_end: NaiveDate) -> bool {
        date >= self.start && date <= self.effective_end(contract_end)
    }

    /// The difference this override makes to one working day, relative to the
    /// contract's base weekly rate.
    pub fn daily_delta(&self, base_hours_per_week: Decimal) -> Decimal {
        (self.hours_per_week - base_hours_per_week) / Decimal::from(5)
    }
}

/// Closes the latest open-ended change of a contract ahead of a new change.
///
/// Among the existing changes of `contract_id`, the most recently *started*
/// one without an end date gets its end set to the day before `new_start`.
/// Earlier open-ended changes (which the invariant rules out anyway) are left
/// untouched. Returns the id of the change that was closed, if any.
///
/// This is invoked by the store whenever a rate change is inserted, keeping
/// the invariant "at most one open-ended change per contract, and it is the
/// chronologically latest" without any hidden persistence hook.
pub fn close_latest_open_change(
    changes: &mut [RateChange],
    contract_id: Uuid,
    new_start: NaiveDate,
) -> Option<Uuid> {
    let latest_open = changes
        .iter_mut()
        .filter(|c| c.contract_id == contract_id && c.is_open_ended())
        .max_by_key(|c| c.start)?;
    let closed_end = new_start.pred_opt()?;
    latest_open.end = Some(closed_end);
    Some(latest_open.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_effective_end_resolves_open_end_to_contract_end() {
        let change = RateChange::new(
            Uuid::new_v4(),
            make_date("2023-06-14"),
            None,
            Decimal::from(10),
        );
        assert_eq!(
            change.effective_end(make_date("2023-06-18")),
            make_date("2023-06-18")
        );
    }

    #[test]
    fn test_effective_end_prefers_own_end() {
        let change = RateChange::new(
            Uuid::new_v4(),
            make_date("2023-06-13"),
            Some(make_date("2023-06-13")),
            Decimal::from(10),
        );
        assert_eq!(
            change.effective_end(make_date("2023-06-18")),
            make_date("2023-06-13")
        );
    }

    #[test]
    fn test_is_active_on_bounds() {
        let change = RateChange::new(
            Uuid::new_v4(),
            make_date("2023-06-14"),
            None,
            Decimal::from(10),
        );
        let contract_end = make_date("2023-06-18");
        assert!(!change.is_active_on(make_date("2023-06-13"), contract_end));
        assert!(change.is_active_on(make_date("2023-06-14"), contract_end));
        assert!(change.is_active_on(make_date("2023-06-18"), contract_end));
        assert!(!change.is_active_on(make_date("2023-06-19"), contract_end));
    }

    #[test]
    fn test_daily_delta() {
        let change = RateChange::new(
            Uuid::new_v4(),
            make_date("2023-06-14"),
            None,
            Decimal::from(10),
        );
        assert_eq!(change.daily_delta(Decimal::from(5)), Decimal::from(1));
        assert_eq!(change.daily_delta(Decimal::from(20)), Decimal::from(-2));
    }

    #[test]
    fn test_close_latest_open_change_sets_day_before_new_start() {
        let contract_id = Uuid::new_v4();
        let mut changes = vec![RateChange::new(
            contract_id,
            make_date("2023-06-14"),
            None,
            Decimal::from(10),
        )];

        let closed = close_latest_open_change(&mut changes, contract_id, make_date("2023-06-15"));

        assert_eq!(closed, Some(changes[0].id));
        assert_eq!(changes[0].end, Some(make_date("2023-06-14")));
    }

    #[test]
    fn test_close_latest_open_change_picks_most_recently_started() {
        let contract_id = Uuid::new_v4();
        let mut changes = vec![
            RateChange::new(contract_id, make_date("2023-06-12"), None, Decimal::from(8)),
            RateChange::new(
                contract_id,
                make_date("2023-06-14"),
                None,
                Decimal::from(10),
            ),
        ];

        close_latest_open_change(&mut changes, contract_id, make_date("2023-06-16"));

        // Only the chronologically-latest open change is closed.
        assert_eq!(changes[0].end, None);
        assert_eq!(changes[1].end, Some(make_date("2023-06-15")));
    }

    #[test]
    fn test_close_latest_open_change_ignores_closed_changes() {
        let contract_id = Uuid::new_v4();
        let mut changes = vec![RateChange::new(
            contract_id,
            make_date("2023-06-13"),
            Some(make_date("2023-06-13")),
            Decimal::from(10),
        )];

        let closed = close_latest_open_change(&mut changes, contract_id, make_date("2023-06-15"));

        assert_eq!(closed, None);
        assert_eq!(changes[0].end, Some(make_date("2023-06-13")));
    }

    #[test]
    fn test_close_latest_open_change_ignores_other_contracts() {
        let contract_id = Uuid::new_v4();
        let other_contract = Uuid::new_v4();
        let mut changes = vec![RateChange::new(
            other_contract,
            make_date("2023-06-14"),
            None,
            Decimal::from(10),
        )];

        let closed = close_latest_open_change(&mut changes, contract_id, make_date("2023-06-15"));

        assert_eq!(closed, None);
        assert!(changes[0].is_open_ended());
    }
}
