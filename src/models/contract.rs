//! Contract model.
//!
//! This module defines the Contract struct representing a dated employment
//! agreement with a base weekly-hours rate.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A dated employment agreement fixing a base weekly-hours rate.
///
/// Both end dates are inclusive. One person may hold several contracts that
/// overlap in time (two part-time roles held at once); every calculation in
/// this crate sums across concurrently active contracts.
///
/// # Example
///
/// ```
/// use worktime_engine::models::Contract;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let contract = Contract::new(
///     "jdoe",
///     NaiveDate::from_ymd_opt(2023, 4, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2023, 9, 30).unwrap(),
///     Decimal::from(5),
///     "prof_mueller",
/// );
/// assert!(contract.is_active_on(NaiveDate::from_ymd_opt(2023, 7, 1).unwrap()));
/// assert_eq!(contract.daily_hours(), Decimal::from(1));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    /// Unique identifier of this contract.
    pub id: Uuid,
    /// The person this contract belongs to.
    pub person: String,
    /// First day of the contract (inclusive).
    pub start: NaiveDate,
    /// Last day of the contract (inclusive).
    pub end: NaiveDate,
    /// Base weekly working hours agreed in this contract.
    pub hours_per_week: Decimal,
    /// Unused working hours carried over from the previous semester.
    #[serde(default)]
    pub carry_over_hours: Decimal,
    /// Unused holiday balance carried over from the previous semester,
    /// expressed in hours.
    #[serde(default)]
    pub carry_over_holiday_hours: Decimal,
    /// The supervisor responsible for this contract.
    pub supervisor: String,
}

impl Contract {
    /// Creates a contract with a fresh id and zero carryover.
    ///
    /// Carryover fields start at zero; they are only ever written by the
    /// semester carryover transaction.
    pub fn new(
        person: impl Into<String>,
        start: NaiveDate,
        end: NaiveDate,
        hours_per_week: Decimal,
        supervisor: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            person: person.into(),
            start,
            end,
            hours_per_week,
            carry_over_hours: Decimal::ZERO,
            carry_over_holiday_hours: Decimal::ZERO,
            supervisor: supervisor.into(),
        }
    }

    /// Returns true if `date` falls within the contract period (inclusive).
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Contract duration as the day difference `end - start`.
    ///
    /// This is the difference of the two dates, not the inclusive day count;
    /// a one-week contract Monday through Sunday has a duration of 6.
    pub fn duration_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Scheduled hours per working day under the base rate.
    pub fn daily_hours(&self) -> Decimal {
        self.hours_per_week / Decimal::from(5)
    }
}
