//! Error types for the worktime engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all failure conditions the engine surfaces to its callers.

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

/// The main error type for the worktime engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use worktime_engine::error::EngineError;
/// use chrono::NaiveDate;
///
/// let error = EngineError::InvalidInterval {
///     from: NaiveDate::from_ymd_opt(2023, 5, 2).unwrap(),
///     to: NaiveDate::from_ymd_opt(2023, 5, 1).unwrap(),
/// };
/// assert_eq!(error.to_string(), "Invalid interval: 2023-05-02 is after 2023-05-01");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A date pair was reversed: the start of an interval lies after its end.
    #[error("Invalid interval: {from} is after {to}")]
    InvalidInterval {
        /// The start of the rejected interval.
        from: NaiveDate,
        /// The end of the rejected interval.
        to: NaiveDate,
    },

    /// A person has no contract usable for the requested calculation: the
    /// employment window cannot be resolved, or a carryover lacks a past or
    /// target contract.
    #[error("No active or past contract for '{person}'")]
    NoActiveOrPastContract {
        /// The person whose contracts were searched.
        person: String,
    },

    /// The holiday-calendar source could not deliver a calendar.
    #[error("Holiday calendar lookup failed for region '{region}', year {year}: {message}")]
    RateLookupFailure {
        /// The region whose calendar was requested.
        region: String,
        /// The calendar year that failed.
        year: i32,
        /// A description of the lookup failure.
        message: String,
    },

    /// A rate change was inconsistent with its parent contract.
    #[error("Invalid rate change for contract {contract_id}: {message}")]
    InvalidRateChange {
        /// The parent contract of the rejected change.
        contract_id: Uuid,
        /// A description of what made the change invalid.
        message: String,
    },

    /// A referenced contract does not exist in the store.
    #[error("Unknown contract: {contract_id}")]
    UnknownContract {
        /// The contract id that could not be found.
        contract_id: Uuid,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_invalid_interval_displays_dates() {
        let error = EngineError::InvalidInterval {
            from: make_date("2023-09-30"),
            to: make_date("2023-04-01"),
        };
        assert_eq!(
            error.to_string(),
            "Invalid interval: 2023-09-30 is after 2023-04-01"
        );
    }

    #[test]
    fn test_no_active_or_past_contract_displays_person() {
        let error = EngineError::NoActiveOrPastContract {
            person: "jdoe".to_string(),
        };
        assert_eq!(error.to_string(), "No active or past contract for 'jdoe'");
    }

    #[test]
    fn test_rate_lookup_failure_displays_region_and_year() {
        let error = EngineError::RateLookupFailure {
            region: "XX".to_string(),
            year: 2023,
            message: "unknown region".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Holiday calendar lookup failed for region 'XX', year 2023: unknown region"
        );
    }

    #[test]
    fn test_invalid_rate_change_displays_contract_and_message() {
        let contract_id = Uuid::nil();
        let error = EngineError::InvalidRateChange {
            contract_id,
            message: "starts before the contract".to_string(),
        };
        assert_eq!(
            error.to_string(),
            format!("Invalid rate change for contract {contract_id}: starts before the contract")
        );
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/engine.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/engine.yaml"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_unknown_contract() -> EngineResult<()> {
            Err(EngineError::UnknownContract {
                contract_id: Uuid::nil(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_unknown_contract()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
