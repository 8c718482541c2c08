//! Salary management - per-department averages and the bulk raise.

use std::collections::BTreeMap;

use crate::employee::{Employee, EmployeeId};
use crate::error::{StoreError, StoreResult};
use crate::observer::StoreEvent;
use crate::query::Search;
use crate::store::EmployeeStore;
use crate::validation::{check_rating_bound, validate_salary};

pub trait SalaryManagement: Search {
    /// Multiply the salary of every record rated at least `min_rating` by
    /// `1 + percentage`, in place, and return the updated records.
    fn raise_salary_by_rating(&self, min_rating: f64, percentage: f64)
        -> StoreResult<Vec<Employee>>;

    /// Mean salary of a department's records, active or not. `0.0` when the
    /// department has none.
    fn average_salary(&self, department: &str) -> StoreResult<f64> {
        let salaries: Vec<f64> = self
            .by_department(department)?
            .iter()
            .map(|employee| employee.salary)
            .collect();
        Ok(mean(&salaries))
    }

    /// Mean salary for every department holding at least one record.
    fn average_salary_per_department(&self) -> StoreResult<BTreeMap<String, f64>> {
        Ok(self
            .group_by_department()?
            .into_iter()
            .map(|(department, records)| {
                let salaries: Vec<f64> = records.iter().map(|e| e.salary).collect();
                (department, mean(&salaries))
            })
            .collect())
    }
}

/// Arithmetic mean, `0.0` for an empty slice.
pub(crate) fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

impl SalaryManagement for EmployeeStore {
    fn raise_salary_by_rating(
        &self,
        min_rating: f64,
        percentage: f64,
    ) -> StoreResult<Vec<Employee>> {
        let raised = self
            .apply_raise(min_rating, percentage)
            .map_err(|err| self.rejected("raise_salary", err))?;
        self.applied(
            "raise_salary",
            StoreEvent::SalaryRaised {
                ids: raised.iter().map(|employee| employee.id).collect(),
                percentage,
            },
        );
        Ok(raised)
    }
}

impl EmployeeStore {
    fn apply_raise(&self, min_rating: f64, percentage: f64) -> StoreResult<Vec<Employee>> {
        check_rating_bound(min_rating)?;
        if !percentage.is_finite() || percentage < 0.0 {
            return Err(StoreError::InvalidPercentage(percentage));
        }

        let mut storage = self.write_storage("raise_salary")?;

        // Every new salary is computed and checked before any is written.
        let mut raises: Vec<(EmployeeId, f64)> = Vec::new();
        for employee in storage.values() {
            if employee.performance_rating >= min_rating {
                let salary = employee.salary * (1.0 + percentage);
                validate_salary(salary)?;
                raises.push((employee.id, salary));
            }
        }

        let mut raised = Vec::with_capacity(raises.len());
        for (id, salary) in raises {
            if let Some(employee) = storage.get_mut(&id) {
                employee.salary = salary;
                raised.push(employee.clone());
            }
        }
        Ok(raised)
    }
}
