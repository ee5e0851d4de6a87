//! Configuration loading functionality.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Configuration for the worktime engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Region code passed to the holiday-calendar provider.
    #[serde(default = "default_region")]
    pub region: String,
    /// Holiday entitlement in days accrued over a full contract year.
    #[serde(default = "default_entitlement")]
    pub annual_entitlement_days: u32,
}

fn default_region() -> String {
    "DE".to_string()
}

fn default_entitlement() -> u32 {
    20
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            region: default_region(),
            annual_entitlement_days: default_entitlement(),
        }
    }
}

impl EngineConfig {
    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// [`EngineError::ConfigNotFound`] if the file cannot be read,
    /// [`EngineError::ConfigParseError`] if it is not valid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;
        Self::parse(&path_str, &content)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml(content: &str) -> EngineResult<Self> {
        Self::parse("<inline>", content)
    }

    fn parse(path: &str, content: &str) -> EngineResult<Self> {
        serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
            path: path.to_string(),
            message: e.to_string(),
        })
    }
}
