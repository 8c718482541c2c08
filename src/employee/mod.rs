//! Employee - the record kept by the store.
//!
//! ## Example
//!
//! ```ignore
//! use employee_store::{Employee, EmployeeField, EmployeeStore};
//!
//! let store = EmployeeStore::new();
//! store.create(Employee::new(1, "Ada", "IT", 75000.0, 4.2, 5, true))?;
//! store.update(1, EmployeeField::Salary(80000.0))?;
//! ```

mod field;

use serde::{Deserialize, Serialize};

pub use field::EmployeeField;

/// Caller-supplied record key. Unsigned, so it can never be negative.
pub type EmployeeId = u64;

/// One employee's attributes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub department: String,
    pub salary: f64,
    pub performance_rating: f64,
    pub years_of_experience: i32,
    pub active: bool,
}

impl Employee {
    pub fn new(
        id: EmployeeId,
        name: impl Into<String>,
        department: impl Into<String>,
        salary: f64,
        performance_rating: f64,
        years_of_experience: i32,
        active: bool,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            department: department.into(),
            salary,
            performance_rating,
            years_of_experience,
            active,
        }
    }

    /// Overwrite the attribute named by `field`. Callers validate first.
    pub(crate) fn apply(&mut self, field: EmployeeField) {
        match field {
            EmployeeField::Name(name) => self.name = name,
            EmployeeField::Department(department) => self.department = department,
            EmployeeField::Salary(salary) => self.salary = salary,
            EmployeeField::PerformanceRating(rating) => self.performance_rating = rating,
            EmployeeField::YearsOfExperience(years) => self.years_of_experience = years,
            EmployeeField::Active(active) => self.active = active,
        }
    }
}
