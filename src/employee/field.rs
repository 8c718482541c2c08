use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{StoreError, StoreResult};

/// A single updatable attribute together with its new value.
///
/// The key is deliberately absent: an employee's id cannot be changed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum EmployeeField {
    Name(String),
    Department(String),
    Salary(f64),
    PerformanceRating(f64),
    YearsOfExperience(i32),
    Active(bool),
}

impl EmployeeField {
    /// Build a field from a name and an untyped value, as handed over by a
    /// form or command line.
    ///
    /// Names are matched case-insensitively with underscores ignored, so
    /// `performance_rating`, `performanceRating` and `PERFORMANCERATING` are
    /// the same field; `isActive` is accepted for `active`. An unknown name
    /// fails with [`StoreError::InvalidField`]; a value of the wrong shape
    /// fails with [`StoreError::InvalidValue`]. Ranges are not checked here.
    pub fn parse(name: &str, value: Value) -> StoreResult<Self> {
        let normalized: String = name
            .trim()
            .chars()
            .filter(|c| *c != '_')
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "name" => expect_string("name", value).map(EmployeeField::Name),
            "department" => expect_string("department", value).map(EmployeeField::Department),
            "salary" => expect_number("salary", &value).map(EmployeeField::Salary),
            "performancerating" => {
                expect_number("performance_rating", &value).map(EmployeeField::PerformanceRating)
            }
            "yearsofexperience" => {
                expect_integer("years_of_experience", &value).map(EmployeeField::YearsOfExperience)
            }
            "active" | "isactive" => match value {
                Value::Bool(active) => Ok(EmployeeField::Active(active)),
                other => Err(shape_error("active", "a boolean", &other)),
            },
            _ => Err(StoreError::InvalidField(name.to_string())),
        }
    }

    /// Canonical name of the attribute this field updates.
    pub fn name(&self) -> &'static str {
        match self {
            EmployeeField::Name(_) => "name",
            EmployeeField::Department(_) => "department",
            EmployeeField::Salary(_) => "salary",
            EmployeeField::PerformanceRating(_) => "performance_rating",
            EmployeeField::YearsOfExperience(_) => "years_of_experience",
            EmployeeField::Active(_) => "active",
        }
    }
}

fn expect_string(field: &'static str, value: Value) -> StoreResult<String> {
    match value {
        Value::String(text) => Ok(text),
        other => Err(shape_error(field, "a string", &other)),
    }
}

fn expect_number(field: &'static str, value: &Value) -> StoreResult<f64> {
    value
        .as_f64()
        .ok_or_else(|| shape_error(field, "a number", value))
}

fn expect_integer(field: &'static str, value: &Value) -> StoreResult<i32> {
    let whole = value
        .as_i64()
        .ok_or_else(|| shape_error(field, "an integer", value))?;
    i32::try_from(whole).map_err(|_| StoreError::InvalidValue {
        field,
        reason: format!("{} does not fit in a 32-bit integer", whole),
    })
}

fn shape_error(field: &'static str, expected: &str, actual: &Value) -> StoreError {
    StoreError::InvalidValue {
        field,
        reason: format!("expected {}, got {}", expected, actual),
    }
}
