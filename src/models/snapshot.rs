//! Person snapshot: one person's records, fetched together.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Contract, HolidayRequest, RateChange, Task};

/// All records of one person, as handed to the calculation core.
///
/// The pure calculation functions take a snapshot rather than a store
/// handle, so they can be evaluated against any point-in-time view of the
/// data and never perform I/O themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonSnapshot {
    /// The person the snapshot belongs to.
    pub person: String,
    /// All contracts of the person, past, present and future.
    pub contracts: Vec<Contract>,
    /// All rate changes of all the person's contracts.
    pub rate_changes: Vec<RateChange>,
    /// All holiday requests of the person.
    pub holiday_requests: Vec<HolidayRequest>,
    /// All tasks assigned to the person.
    pub tasks: Vec<Task>,
}

impl PersonSnapshot {
    /// Creates an empty snapshot for a person.
    pub fn empty(person: impl Into<String>) -> Self {
        Self {
            person: person.into(),
            contracts: Vec::new(),
            rate_changes: Vec::new(),
            holiday_requests: Vec::new(),
            tasks: Vec::new(),
        }
    }

    /// The rate changes belonging to one contract.
    pub fn changes_for(&self, contract_id: Uuid) -> impl Iterator<Item = &RateChange> {
        self.rate_changes
            .iter()
            .filter(move |c| c.contract_id == contract_id)
    }
}
