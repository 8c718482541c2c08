//! Shared records for the integration suite.

use employee_store::{Employee, EmployeeId, EmployeeStore};

pub fn scenario_records() -> Vec<Employee> {
    vec![
        Employee::new(1, "A", "IT", 75000.0, 4.2, 5, true),
        Employee::new(2, "B", "HR", 65000.0, 4.5, 3, true),
        Employee::new(3, "C", "IT", 95000.0, 3.8, 7, true),
    ]
}

pub fn staff_records() -> Vec<Employee> {
    vec![
        Employee::new(1001, "John Smith", "IT", 75000.0, 4.2, 5, true),
        Employee::new(1002, "Sarah Johnson", "HR", 65000.0, 4.5, 3, true),
        Employee::new(1003, "Michael Chen", "Finance", 85000.0, 3.8, 7, true),
        Employee::new(1004, "Emily Davis", "IT", 95000.0, 4.8, 6, true),
        Employee::new(1005, "Robert Wilson", "Marketing", 72000.0, 3.5, 4, true),
    ]
}

pub fn store_with(records: Vec<Employee>) -> EmployeeStore {
    let store = EmployeeStore::new();
    for employee in records {
        store.create(employee).unwrap();
    }
    store
}

pub fn ids(records: &[Employee]) -> Vec<EmployeeId> {
    records.iter().map(|employee| employee.id).collect()
}
