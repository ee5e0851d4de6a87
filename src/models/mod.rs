//! Core data models for the worktime engine.
//!
//! This module contains all the domain records the calculations operate on.

mod contract;
mod holiday_request;
mod rate_change;
mod snapshot;
mod task;

pub use contract::Contract;
pub use holiday_request::HolidayRequest;
pub use rate_change::{RateChange, close_latest_open_change};
pub use snapshot::PersonSnapshot;
pub use task::Task;
