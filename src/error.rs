use thiserror::Error;

use crate::employee::EmployeeId;

pub type StoreResult<T> = Result<T, StoreError>;

/// Every failure the store can report. Validation failures never mutate state.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("employee record is absent")]
    InvalidRecord,

    #[error("employee {0} already exists")]
    DuplicateKey(EmployeeId),

    #[error("employee {0} not found")]
    NotFound(EmployeeId),

    #[error("invalid department '{department}' (valid: {})", .valid.join(", "))]
    InvalidDepartment {
        department: String,
        valid: Vec<String>,
    },

    #[error("invalid salary {0}: must be a finite value >= 0")]
    InvalidSalary(f64),

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("unknown field '{0}'")]
    InvalidField(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid range: min {min} is greater than max {max}")]
    InvalidRange { min: f64, max: f64 },

    #[error("invalid percentage {0}: must be a finite value >= 0")]
    InvalidPercentage(f64),

    #[error("store lock poisoned during {0}")]
    LockPoisoned(&'static str),
}

impl StoreError {
    /// Stable label for sinks that group failures by kind.
    pub fn kind(&self) -> &'static str {
        match self {
            StoreError::InvalidRecord => "InvalidRecord",
            StoreError::DuplicateKey(_) => "DuplicateKey",
            StoreError::NotFound(_) => "NotFound",
            StoreError::InvalidDepartment { .. } => "InvalidDepartment",
            StoreError::InvalidSalary(_) => "InvalidSalary",
            StoreError::InvalidValue { .. } => "InvalidValue",
            StoreError::InvalidField(_) => "InvalidField",
            StoreError::InvalidInput(_) => "InvalidInput",
            StoreError::InvalidRange { .. } => "InvalidRange",
            StoreError::InvalidPercentage(_) => "InvalidPercentage",
            StoreError::LockPoisoned(_) => "LockPoisoned",
        }
    }
}
