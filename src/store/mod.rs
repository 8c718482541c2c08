//! Store - the owning key → record table and the read capability every
//! engine is built on.
//!
//! Engines (`Search`, `Sort`, `SalaryManagement`, `Reports`) are traits with
//! default methods over [`Records`], so they work against any store that can
//! hand out a snapshot.

mod in_memory;

use crate::config::StoreConfig;
use crate::employee::Employee;
use crate::error::StoreResult;
use crate::validation::Departments;

pub use in_memory::EmployeeStore;

/// Read access to the store's current contents.
pub trait Records {
    /// Owned, point-in-time copy of every record in ascending key order.
    /// Later mutations of the store never show up in it.
    fn snapshot(&self) -> StoreResult<Vec<Employee>>;

    fn config(&self) -> &StoreConfig;

    fn departments(&self) -> &Departments {
        &self.config().departments
    }

    /// All records matching a predicate.
    fn find<F>(&self, predicate: F) -> StoreResult<Vec<Employee>>
    where
        F: Fn(&Employee) -> bool,
    {
        let mut records = self.snapshot()?;
        records.retain(|employee| predicate(employee));
        Ok(records)
    }

    /// The first record (by key) matching a predicate.
    fn find_one<F>(&self, predicate: F) -> StoreResult<Option<Employee>>
    where
        F: Fn(&Employee) -> bool,
    {
        Ok(self.snapshot()?.into_iter().find(|employee| predicate(employee)))
    }

    fn count<F>(&self, predicate: F) -> StoreResult<usize>
    where
        F: Fn(&Employee) -> bool,
    {
        Ok(self.snapshot()?.iter().filter(|employee| predicate(employee)).count())
    }

    fn exists<F>(&self, predicate: F) -> StoreResult<bool>
    where
        F: Fn(&Employee) -> bool,
    {
        Ok(self.snapshot()?.iter().any(|employee| predicate(employee)))
    }
}
