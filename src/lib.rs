//! In-memory employee record store.
//!
//! [`EmployeeStore`] owns the records and validates every mutation. The read
//! engines are traits implemented for any [`Records`] source:
//!
//! - [`Search`] - attribute filters and grouping
//! - [`Sort`] - named total orders and top-K
//! - [`SalaryManagement`] - averages and the bulk raise
//! - [`Reports`] - department, performance and salary summaries
//!
//! Bring them into scope with `use employee_store::prelude::*`.

mod config;
mod employee;
mod error;
mod observer;
mod query;
mod report;
mod salary;
mod sort;
mod store;
mod validation;

pub use config::{ConfigError, StoreConfig, DEFAULT_TOP_PAID};
pub use employee::{Employee, EmployeeField, EmployeeId};
pub use error::{StoreError, StoreResult};
#[cfg(feature = "emitter")]
pub use observer::EmitterObserver;
pub use observer::{LogObserver, NoopObserver, StoreEvent, StoreObserver};
pub use query::Search;
pub use report::{
    BandCount, BandSummary, DepartmentSummary, PerformanceBand, Reports, SalaryBand,
};
pub use salary::SalaryManagement;
pub use sort::{top_k, Sort, SortKey};
pub use store::{EmployeeStore, Records};
pub use validation::{Departments, MAX_RATING, MIN_RATING};

// Re-export the EventEmitter so hosts can build an EmitterObserver without
// depending on event_emitter_rs directly.
#[cfg(feature = "emitter")]
pub use event_emitter_rs::EventEmitter;

pub mod prelude {
    pub use crate::{
        Employee, EmployeeField, EmployeeStore, Records, Reports, SalaryManagement, Search,
        Sort, SortKey, StoreError, StoreResult,
    };
}
