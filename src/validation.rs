//! Validation rules applied before any record enters or changes in the store.

use serde::{Deserialize, Serialize};

use crate::employee::{Employee, EmployeeField};
use crate::error::{StoreError, StoreResult};

pub const MIN_RATING: f64 = 0.0;
pub const MAX_RATING: f64 = 5.0;

/// The fixed set of department names a record may belong to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Departments {
    names: Vec<String>,
}

impl Default for Departments {
    fn default() -> Self {
        Self::new(["IT", "HR", "Finance", "Marketing", "Sales"])
    }
}

impl Departments {
    /// Duplicates are dropped; first occurrence wins the position.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for name in names {
            let name = name.into();
            if !unique.contains(&name) {
                unique.push(name);
            }
        }
        Self { names: unique }
    }

    pub fn contains(&self, department: &str) -> bool {
        self.names.iter().any(|name| name == department)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Fails with [`StoreError::InvalidDepartment`] unless `department` is a member.
    pub fn check(&self, department: &str) -> StoreResult<()> {
        if department.trim().is_empty() || !self.contains(department) {
            return Err(StoreError::InvalidDepartment {
                department: department.to_string(),
                valid: self.names.clone(),
            });
        }
        Ok(())
    }
}

pub fn validate_name(name: &str) -> StoreResult<()> {
    if name.trim().is_empty() {
        return Err(StoreError::InvalidValue {
            field: "name",
            reason: "must not be blank".into(),
        });
    }
    Ok(())
}

pub fn validate_salary(salary: f64) -> StoreResult<()> {
    if !salary.is_finite() || salary < 0.0 {
        return Err(StoreError::InvalidSalary(salary));
    }
    Ok(())
}

pub fn validate_rating(rating: f64) -> StoreResult<()> {
    if !is_rating(rating) {
        return Err(StoreError::InvalidValue {
            field: "performance_rating",
            reason: format!("{} is outside [{}, {}]", rating, MIN_RATING, MAX_RATING),
        });
    }
    Ok(())
}

pub fn validate_experience(years: i32) -> StoreResult<()> {
    if years < 0 {
        return Err(StoreError::InvalidValue {
            field: "years_of_experience",
            reason: format!("{} is negative", years),
        });
    }
    Ok(())
}

/// Rating bound used by queries and the bulk raise, where a bad bound is a
/// malformed parameter rather than a bad record.
pub fn check_rating_bound(rating: f64) -> StoreResult<()> {
    if !is_rating(rating) {
        return Err(StoreError::InvalidInput(format!(
            "rating {} is outside [{}, {}]",
            rating, MIN_RATING, MAX_RATING
        )));
    }
    Ok(())
}

fn is_rating(rating: f64) -> bool {
    (MIN_RATING..=MAX_RATING).contains(&rating)
}

/// Check every attribute of a record about to be created.
pub fn validate_employee(employee: &Employee, departments: &Departments) -> StoreResult<()> {
    validate_name(&employee.name)?;
    departments.check(&employee.department)?;
    validate_salary(employee.salary)?;
    validate_rating(employee.performance_rating)?;
    validate_experience(employee.years_of_experience)
}

/// Check the new value carried by an update, with the same rules as create.
pub fn validate_field(field: &EmployeeField, departments: &Departments) -> StoreResult<()> {
    match field {
        EmployeeField::Name(name) => validate_name(name),
        EmployeeField::Department(department) => departments.check(department),
        EmployeeField::Salary(salary) => validate_salary(*salary),
        EmployeeField::PerformanceRating(rating) => validate_rating(*rating),
        EmployeeField::YearsOfExperience(years) => validate_experience(*years),
        EmployeeField::Active(_) => Ok(()),
    }
}
