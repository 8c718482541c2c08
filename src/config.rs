//! Store configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::validation::Departments;

pub const DEFAULT_TOP_PAID: usize = 5;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to parse store config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("store config must list at least one department")]
    NoDepartments,

    #[error("default_top_paid must be at least 1")]
    ZeroTopPaid,
}

/// Settings fixed when a store is built.
///
/// ```ignore
/// let config = StoreConfig::from_json_str(r#"{ "departments": ["IT", "Ops"] }"#)?;
/// let store = EmployeeStore::with_config(config, NoopObserver)?;
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub departments: Departments,
    pub default_top_paid: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            departments: Departments::default(),
            default_top_paid: DEFAULT_TOP_PAID,
        }
    }
}

impl StoreConfig {
    /// Parse and validate a JSON config. Missing keys take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: StoreConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_departments<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.departments = Departments::new(names);
        self
    }

    pub fn with_default_top_paid(mut self, n: usize) -> Self {
        self.default_top_paid = n;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.departments.is_empty() {
            return Err(ConfigError::NoDepartments);
        }
        if self.default_top_paid == 0 {
            return Err(ConfigError::ZeroTopPaid);
        }
        Ok(())
    }
}
