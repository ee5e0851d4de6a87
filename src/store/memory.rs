//! In-memory record store.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    Contract, HolidayRequest, PersonSnapshot, RateChange, Task, close_latest_open_change,
};

use super::RecordStore;

#[derive(Debug, Default)]
struct Records {
    contracts: Vec<Contract>,
    rate_changes: Vec<RateChange>,
    holiday_requests: Vec<HolidayRequest>,
    tasks: Vec<Task>,
}

/// An in-memory implementation of [`RecordStore`].
///
/// Record creation goes through the explicit `add_*` methods, which enforce
/// the date-ordering invariants and the open-ended rate-change auto-close
/// rule at insert time. There are no implicit hooks: nothing is created or
/// modified unless a method here is called.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Records>,
    person_locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a contract and returns its id.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidInterval`] if the contract starts after it ends.
    pub fn add_contract(&self, contract: Contract) -> EngineResult<Uuid> {
        if contract.start > contract.end {
            return Err(EngineError::InvalidInterval {
                from: contract.start,
                to: contract.end,
            });
        }
        let id = contract.id;
        self.write().contracts.push(contract);
        Ok(id)
    }

    /// Inserts a rate change and returns its id.
    ///
    /// If the contract already has an open-ended change, the most recently
    /// started one is closed to the day before the new change's start, so at
    /// most one open-ended change stays active per contract.
    ///
    /// # Errors
    ///
    /// [`EngineError::UnknownContract`] for a change referencing no stored
    /// contract, [`EngineError::InvalidInterval`] for a change ending before
    /// it starts, and [`EngineError::InvalidRateChange`] for a change
    /// starting outside its contract period.
    pub fn add_rate_change(&self, change: RateChange) -> EngineResult<Uuid> {
        let mut records = self.write();
        let contract = records
            .contracts
            .iter()
            .find(|c| c.id == change.contract_id)
            .ok_or(EngineError::UnknownContract {
                contract_id: change.contract_id,
            })?;
        if let Some(end) = change.end {
            if change.start > end {
                return Err(EngineError::InvalidInterval {
                    from: change.start,
                    to: end,
                });
            }
        }
        if !contract.is_active_on(change.start) {
            return Err(EngineError::InvalidRateChange {
                contract_id: change.contract_id,
                message: format!(
                    "change starts {} outside the contract period {}..{}",
                    change.start, contract.start, contract.end
                ),
            });
        }

        close_latest_open_change(&mut records.rate_changes, change.contract_id, change.start);
        let id = change.id;
        records.rate_changes.push(change);
        Ok(id)
    }

    /// Inserts a holiday request.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidInterval`] if the request's dates are reversed.
    pub fn add_holiday_request(&self, request: HolidayRequest) -> EngineResult<Uuid> {
        if request.from > request.to {
            return Err(EngineError::InvalidInterval {
                from: request.from,
                to: request.to,
            });
        }
        let id = request.id;
        self.write().holiday_requests.push(request);
        Ok(id)
    }

    /// Inserts a task.
    pub fn add_task(&self, task: Task) -> Uuid {
        let id = task.id;
        self.write().tasks.push(task);
        id
    }

    /// Looks up a contract by id.
    pub fn contract(&self, contract_id: Uuid) -> Option<Contract> {
        self.read()
            .contracts
            .iter()
            .find(|c| c.id == contract_id)
            .cloned()
    }

    /// Looks up a rate change by id.
    pub fn rate_change(&self, change_id: Uuid) -> Option<RateChange> {
        self.read()
            .rate_changes
            .iter()
            .find(|c| c.id == change_id)
            .cloned()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Records> {
        self.records.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Records> {
        self.records.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl RecordStore for MemoryStore {
    fn snapshot(&self, person: &str) -> PersonSnapshot {
        let records = self.read();
        let contracts: Vec<Contract> = records
            .contracts
            .iter()
            .filter(|c| c.person == person)
            .cloned()
            .collect();
        let rate_changes = records
            .rate_changes
            .iter()
            .filter(|change| contracts.iter().any(|c| c.id == change.contract_id))
            .cloned()
            .collect();
        PersonSnapshot {
            person: person.to_string(),
            contracts,
            rate_changes,
            holiday_requests: records
                .holiday_requests
                .iter()
                .filter(|r| r.person == person)
                .cloned()
                .collect(),
            tasks: records
                .tasks
                .iter()
                .filter(|t| t.assigned_to == person)
                .cloned()
                .collect(),
        }
    }

    fn person_lock(&self, person: &str) -> Arc<Mutex<()>> {
        let mut locks = self
            .person_locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        Arc::clone(locks.entry(person.to_string()).or_default())
    }

    fn apply_carryover(
        &self,
        contract_id: Uuid,
        hours: Decimal,
        holiday_hours: Decimal,
    ) -> EngineResult<()> {
        let mut records = self.write();
        let contract = records
            .contracts
            .iter_mut()
            .find(|c| c.id == contract_id)
            .ok_or(EngineError::UnknownContract { contract_id })?;
        contract.carry_over_hours += hours;
        contract.carry_over_holiday_hours += holiday_hours;
        Ok(())
    }
}
