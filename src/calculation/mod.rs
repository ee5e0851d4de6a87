//! The temporal accounting core.
//!
//! This module contains the pure calculation functions of the engine:
//! business-day counting, employment-window resolution, per-day schedule
//! rates, working-time aggregation, holiday entitlement and balance, and
//! the semester carryover evaluation. Every function takes its reference
//! date as an explicit parameter; nothing in here reads a clock or performs
//! I/O beyond the injected holiday-calendar resolver.

mod business_days;
mod carryover;
mod daily_rate;
mod employment_window;
mod holiday_balance;
mod working_time;

pub use business_days::{business_days, is_weekday};
pub use carryover::{Carryover, evaluate_carryover};
pub use daily_rate::rate_on_day;
pub use employment_window::employment_window;
pub use holiday_balance::{HolidayBalance, holiday_balance};
pub use working_time::{WorkingTime, days_to_work, working_time};
