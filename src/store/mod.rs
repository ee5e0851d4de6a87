//! Data access for person records.
//!
//! The engine reads records through the [`RecordStore`] trait and writes
//! exactly one thing through it: the carryover fields of a contract, during
//! the semester carryover transaction. [`MemoryStore`] is the shipped
//! reference implementation; a database-backed store implements the same
//! trait.

mod memory;

use std::sync::{Arc, Mutex};

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::PersonSnapshot;

pub use memory::MemoryStore;

/// Read access to one person's records, plus the single mutation the engine
/// performs.
pub trait RecordStore {
    /// All records of `person`: contracts, rate changes, holiday requests
    /// and tasks. A person without records yields an empty snapshot.
    fn snapshot(&self, person: &str) -> PersonSnapshot;

    /// The lock serializing carryover transactions for `person`.
    ///
    /// Two concurrent rollovers for the same person could double-apply the
    /// carryover; the engine holds this lock across the whole
    /// read-evaluate-write sequence.
    fn person_lock(&self, person: &str) -> Arc<Mutex<()>>;

    /// Increments the carryover fields of one contract.
    ///
    /// # Errors
    ///
    /// [`crate::error::EngineError::UnknownContract`] if the contract does
    /// not exist.
    fn apply_carryover(
        &self,
        contract_id: Uuid,
        hours: Decimal,
        holiday_hours: Decimal,
    ) -> EngineResult<()>;
}
