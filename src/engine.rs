//! The engine facade.

use std::sync::PoisonError;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::info;

use crate::calculation::{
    Carryover, HolidayBalance, WorkingTime, evaluate_carryover, employment_window,
    holiday_balance, rate_on_day, working_time,
};
use crate::calendar::{FreeDayResolver, HolidayProvider};
use crate::config::EngineConfig;
use crate::error::EngineResult;
use crate::store::RecordStore;

/// Ties a record store, a holiday calendar and the configuration together
/// into the public calculation surface.
///
/// Every method takes the reference date ("now") as an explicit parameter.
/// Callers pass the current date for day-to-day queries; the carryover
/// transaction internally re-evaluates the same calculations pinned to the
/// end of the previous employment period.
///
/// # Example
///
/// ```
/// use worktime_engine::calendar::GermanPublicHolidays;
/// use worktime_engine::config::EngineConfig;
/// use worktime_engine::engine::Engine;
/// use worktime_engine::models::Contract;
/// use worktime_engine::store::MemoryStore;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let engine = Engine::new(MemoryStore::new(), GermanPublicHolidays, EngineConfig::default());
/// engine.store().add_contract(Contract::new(
///     "jdoe",
///     NaiveDate::from_ymd_opt(2023, 6, 12).unwrap(),
///     NaiveDate::from_ymd_opt(2023, 6, 18).unwrap(),
///     Decimal::from(5),
///     "prof_mueller",
/// )).unwrap();
///
/// let today = NaiveDate::from_ymd_opt(2023, 7, 13).unwrap();
/// let account = engine.working_time("jdoe", today).unwrap();
/// assert_eq!(account.hours_to_work, Decimal::from(5));
/// ```
pub struct Engine<S, P> {
    store: S,
    free_days: FreeDayResolver<P>,
    config: EngineConfig,
}

impl<S: RecordStore, P: HolidayProvider> Engine<S, P> {
    /// Creates an engine over a store and a holiday-calendar provider.
    pub fn new(store: S, provider: P, config: EngineConfig) -> Self {
        Self {
            store,
            free_days: FreeDayResolver::new(provider),
            config,
        }
    }

    /// The underlying record store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Resolves the employment window of a person as of `as_of`.
    pub fn employment_window(
        &self,
        person: &str,
        as_of: NaiveDate,
    ) -> EngineResult<(NaiveDate, NaiveDate)> {
        let snapshot = self.store.snapshot(person);
        employment_window(&snapshot, as_of)
    }

    /// The hours a person is scheduled to work on one calendar day.
    pub fn rate_on_day(&self, person: &str, date: NaiveDate) -> Decimal {
        let snapshot = self.store.snapshot(person);
        rate_on_day(&snapshot, &self.free_days, &self.config, date)
    }

    /// The working-time account of a person as of `reference`.
    pub fn working_time(&self, person: &str, reference: NaiveDate) -> EngineResult<WorkingTime> {
        let snapshot = self.store.snapshot(person);
        working_time(&snapshot, &self.free_days, &self.config, reference)
    }

    /// The holiday account of a person as of `reference`.
    pub fn holiday_balance(
        &self,
        person: &str,
        reference: NaiveDate,
    ) -> EngineResult<HolidayBalance> {
        let snapshot = self.store.snapshot(person);
        holiday_balance(&snapshot, &self.free_days, &self.config, reference)
    }

    /// Runs the semester carryover transaction for a person.
    ///
    /// Evaluates the carryover from the last ended employment period and
    /// applies it to the longest currently-active contract, all while
    /// holding the person's lock from the store. All-or-nothing: if any
    /// step fails, nothing is written.
    pub fn run_carryover(&self, person: &str, reference: NaiveDate) -> EngineResult<Carryover> {
        let lock = self.store.person_lock(person);
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);

        let snapshot = self.store.snapshot(person);
        let carryover = evaluate_carryover(&snapshot, &self.free_days, &self.config, reference)?;
        self.store.apply_carryover(
            carryover.target_contract,
            carryover.hours,
            carryover.holiday_hours,
        )?;
        info!(
            person,
            target_contract = %carryover.target_contract,
            hours = %carryover.hours,
            holiday_hours = %carryover.holiday_hours,
            "Applied semester carryover"
        );
        Ok(carryover)
    }
}
