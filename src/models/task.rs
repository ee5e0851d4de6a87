//! Task model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A unit of work assigned to a person.
///
/// `worked_hours <= total_hours` is enforced by the surrounding application,
/// not here; the engine takes both values as given. Tasks are read-only for
/// the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier of this task.
    pub id: Uuid,
    /// The person the task is assigned to.
    pub assigned_to: String,
    /// The person who assigned the task.
    pub assigner: String,
    /// Free-text description of the task.
    pub description: String,
    /// Total planned hours for the task.
    pub total_hours: Decimal,
    /// Hours actually worked on the task so far.
    pub worked_hours: Decimal,
    /// The task deadline.
    pub deadline: NaiveDate,
}

impl Task {
    /// Creates a task with a fresh id.
    pub fn new(
        assigned_to: impl Into<String>,
        assigner: impl Into<String>,
        description: impl Into<String>,
        total_hours: Decimal,
        worked_hours: Decimal,
        deadline: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            assigned_to: assigned_to.into(),
            assigner: assigner.into(),
            description: description.into(),
            total_hours,
            worked_hours,
            deadline,
        }
    }

    /// Returns true if the deadline falls within `[start, end]`.
    pub fn due_within(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.deadline >= start && self.deadline <= end
    }
}
