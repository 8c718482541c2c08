//! Observers - write-only sinks notified of every store mutation and rejection.
//!
//! An observer is injected when the store is built and never feeds anything
//! back into it.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::{Arc, Mutex};
//! use employee_store::{EmployeeStore, LogObserver, StoreConfig};
//!
//! let lines = Arc::new(Mutex::new(Vec::new()));
//! let store = EmployeeStore::with_config(
//!     StoreConfig::default(),
//!     LogObserver::with_buffer(lines.clone()),
//! )?;
//! ```

#[cfg(feature = "emitter")]
mod emitter;
mod log;

use std::sync::Arc;

use serde::Serialize;

use crate::employee::{Employee, EmployeeId};
use crate::error::StoreError;

#[cfg(feature = "emitter")]
pub use emitter::EmitterObserver;
pub use log::LogObserver;

/// Something that happened to the store.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum StoreEvent {
    Created {
        employee: Employee,
    },
    Updated {
        field: &'static str,
        employee: Employee,
    },
    Deleted {
        employee: Employee,
    },
    SalaryRaised {
        ids: Vec<EmployeeId>,
        percentage: f64,
    },
    Rejected {
        operation: &'static str,
        kind: &'static str,
        message: String,
    },
}

impl StoreEvent {
    pub fn rejected(operation: &'static str, error: &StoreError) -> Self {
        StoreEvent::Rejected {
            operation,
            kind: error.kind(),
            message: error.to_string(),
        }
    }

    /// Event name used as the emitter channel and log prefix.
    pub fn event_type(&self) -> &'static str {
        match self {
            StoreEvent::Created { .. } => "EmployeeCreated",
            StoreEvent::Updated { .. } => "EmployeeUpdated",
            StoreEvent::Deleted { .. } => "EmployeeDeleted",
            StoreEvent::SalaryRaised { .. } => "SalaryRaised",
            StoreEvent::Rejected { .. } => "OperationRejected",
        }
    }

    pub fn is_rejection(&self) -> bool {
        matches!(self, StoreEvent::Rejected { .. })
    }

    /// JSON rendering of the event. Falls back to the event type if the
    /// payload cannot be encoded (non-finite salaries encode as `null`).
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.event_type().to_string())
    }
}

/// Sink for store events.
pub trait StoreObserver: Send + Sync {
    fn notify(&self, event: &StoreEvent);
}

/// Observer that ignores every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl StoreObserver for NoopObserver {
    fn notify(&self, _event: &StoreEvent) {}
}

impl<O: StoreObserver + ?Sized> StoreObserver for Arc<O> {
    fn notify(&self, event: &StoreEvent) {
        (**self).notify(event)
    }
}

impl<O: StoreObserver + ?Sized> StoreObserver for Box<O> {
    fn notify(&self, event: &StoreEvent) {
        (**self).notify(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_event_carries_kind_and_message() {
        let event = StoreEvent::rejected("create", &StoreError::DuplicateKey(3));
        assert!(event.is_rejection());
        assert_eq!(event.event_type(), "OperationRejected");

        let json: serde_json::Value = serde_json::from_str(&event.to_json()).unwrap();
        assert_eq!(json["event"], "rejected");
        assert_eq!(json["kind"], "DuplicateKey");
        assert_eq!(json["message"], "employee 3 already exists");
    }

    #[test]
    fn created_event_embeds_the_record() {
        let event = StoreEvent::Created {
            employee: Employee::new(1, "Ada", "IT", 10.0, 1.0, 0, true),
        };
        let json: serde_json::Value = serde_json::from_str(&event.to_json()).unwrap();
        assert_eq!(json["event"], "created");
        assert_eq!(json["employee"]["name"], "Ada");
    }
}
