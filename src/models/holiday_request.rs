//! Holiday request model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A contiguous block of requested leave.
///
/// Both endpoints are inclusive. The engine only ever reads holiday
/// requests; it never mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayRequest {
    /// Unique identifier of this request.
    pub id: Uuid,
    /// The person taking the leave.
    pub person: String,
    /// First day of leave (inclusive).
    pub from: NaiveDate,
    /// Last day of leave (inclusive).
    pub to: NaiveDate,
}

impl HolidayRequest {
    /// Creates a holiday request with a fresh id.
    pub fn new(person: impl Into<String>, from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            person: person.into(),
            from,
            to,
        }
    }

    /// Returns true if the whole request lies within `[start, end]`.
    pub fn contained_in(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.from >= start && self.to <= end
    }

    /// Iterates over every calendar day of the request, inclusive.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let to = self.to;
        self.from.iter_days().take_while(move |d| *d <= to)
    }
}
