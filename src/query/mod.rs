//! Search - attribute filters and grouping over a store snapshot.
//!
//! Every query validates its parameters before touching the store and
//! returns owned records, never references into the table.

use std::collections::BTreeMap;

use crate::employee::Employee;
use crate::error::{StoreError, StoreResult};
use crate::store::Records;
use crate::validation::check_rating_bound;

pub trait Search: Records {
    /// Records whose department equals `department` exactly.
    fn by_department(&self, department: &str) -> StoreResult<Vec<Employee>> {
        self.departments().check(department)?;
        self.find(|employee| employee.department == department)
    }

    /// Case-insensitive substring match on the name.
    fn by_name_contains(&self, fragment: &str) -> StoreResult<Vec<Employee>> {
        if fragment.trim().is_empty() {
            return Err(StoreError::InvalidInput(
                "name fragment must not be blank".into(),
            ));
        }
        let needle = fragment.to_lowercase();
        self.find(|employee| employee.name.to_lowercase().contains(&needle))
    }

    /// Records rated at least `min` (inclusive).
    fn by_rating_at_least(&self, min: f64) -> StoreResult<Vec<Employee>> {
        check_rating_bound(min)?;
        self.find(|employee| employee.performance_rating >= min)
    }

    /// Records with `min <= salary <= max`.
    fn by_salary_between(&self, min: f64, max: f64) -> StoreResult<Vec<Employee>> {
        for bound in [min, max] {
            if !bound.is_finite() || bound < 0.0 {
                return Err(StoreError::InvalidSalary(bound));
            }
        }
        if min > max {
            return Err(StoreError::InvalidRange { min, max });
        }
        self.find(|employee| (min..=max).contains(&employee.salary))
    }

    fn by_active(&self, active: bool) -> StoreResult<Vec<Employee>> {
        self.find(|employee| employee.active == active)
    }

    /// Partition every record by department, keeping snapshot order inside
    /// each group.
    fn group_by_department(&self) -> StoreResult<BTreeMap<String, Vec<Employee>>> {
        let mut groups: BTreeMap<String, Vec<Employee>> = BTreeMap::new();
        for employee in self.snapshot()? {
            groups
                .entry(employee.department.clone())
                .or_default()
                .push(employee);
        }
        Ok(groups)
    }
}

impl<T: Records> Search for T {}
