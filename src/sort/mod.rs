//! Sort - named total orders over the store and top-K selection.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::employee::Employee;
use crate::error::{StoreError, StoreResult};
use crate::store::Records;

/// A named order. Every order is total: ties on the primary attribute fall
/// back to ascending key, so output is deterministic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Highest salary first.
    Salary,
    /// Highest rating first.
    PerformanceRating,
    /// Most years of experience first.
    Experience,
    /// Ascending key.
    Id,
    /// Ascending name, ignoring case.
    Name,
    /// Ascending department name.
    Department,
}

impl SortKey {
    pub fn compare(self, a: &Employee, b: &Employee) -> Ordering {
        let primary = match self {
            SortKey::Salary => b.salary.total_cmp(&a.salary),
            SortKey::PerformanceRating => b.performance_rating.total_cmp(&a.performance_rating),
            SortKey::Experience => b.years_of_experience.cmp(&a.years_of_experience),
            SortKey::Id => Ordering::Equal,
            SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortKey::Department => a.department.cmp(&b.department),
        };
        primary.then_with(|| a.id.cmp(&b.id))
    }
}

/// Keep the first `n` records of `key`'s order, sorted.
///
/// Partitions around the n-th element first so only the kept prefix is
/// fully sorted.
pub fn top_k(records: &mut Vec<Employee>, n: usize, key: SortKey) {
    if n == 0 {
        records.clear();
        return;
    }
    if n < records.len() {
        records.select_nth_unstable_by(n - 1, |a, b| key.compare(a, b));
        records.truncate(n);
    }
    records.sort_by(|a, b| key.compare(a, b));
}

pub trait Sort: Records {
    fn sorted_by(&self, key: SortKey) -> StoreResult<Vec<Employee>> {
        let mut records = self.snapshot()?;
        records.sort_by(|a, b| key.compare(a, b));
        Ok(records)
    }

    fn sorted_by_salary(&self) -> StoreResult<Vec<Employee>> {
        self.sorted_by(SortKey::Salary)
    }

    fn sorted_by_performance(&self) -> StoreResult<Vec<Employee>> {
        self.sorted_by(SortKey::PerformanceRating)
    }

    fn sorted_by_experience(&self) -> StoreResult<Vec<Employee>> {
        self.sorted_by(SortKey::Experience)
    }

    /// The first `n` records of `key`'s order; all of them if `n` exceeds the count.
    fn top_by(&self, key: SortKey, n: usize) -> StoreResult<Vec<Employee>> {
        if n == 0 {
            return Err(StoreError::InvalidInput("n must be at least 1".into()));
        }
        let mut records = self.snapshot()?;
        top_k(&mut records, n, key);
        Ok(records)
    }

    fn top_paid(&self, n: usize) -> StoreResult<Vec<Employee>> {
        self.top_by(SortKey::Salary, n)
    }

    /// [`top_paid`](Sort::top_paid) with the configured default count.
    fn top_paid_default(&self) -> StoreResult<Vec<Employee>> {
        self.top_paid(self.config().default_top_paid)
    }
}

impl<T: Records> Sort for T {}
