//! Engine configuration.
//!
//! The engine has exactly two knobs: the region whose public-holiday
//! calendar applies, and the annual holiday entitlement. Configuration is
//! loaded from a YAML file or falls back to defaults.
//!
//! # Example
//!
//! ```
//! use worktime_engine::config::EngineConfig;
//!
//! let config = EngineConfig::default();
//! assert_eq!(config.region, "DE");
//! assert_eq!(config.annual_entitlement_days, 20);
//! ```

mod loader;

pub use loader::EngineConfig;
