//! Integration tests for the employee store and its engines.

mod fixtures;

use std::sync::{Arc, Mutex};

use employee_store::prelude::*;
use employee_store::{LogObserver, StoreConfig};
use fixtures::{ids, scenario_records, staff_records, store_with};
use serde_json::json;

#[test]
fn scenario_department_average_and_top_paid() {
    let store = store_with(scenario_records());

    assert_eq!(ids(&store.by_department("IT").unwrap()), vec![1, 3]);
    assert_eq!(store.average_salary("IT").unwrap(), 85000.0);
    assert_eq!(ids(&store.top_paid(2).unwrap()), vec![3, 1]);
}

#[test]
fn scenario_raise_applies_to_every_record_at_or_above_the_floor() {
    let store = store_with(scenario_records());

    let raised = store.raise_salary_by_rating(4.0, 0.10).unwrap();

    assert_eq!(ids(&raised), vec![1, 2]);
    assert!((store.read(1).unwrap().salary - 82500.0).abs() < 1e-6);
    assert!((store.read(2).unwrap().salary - 71500.0).abs() < 1e-6);
    assert_eq!(store.read(3).unwrap().salary, 95000.0);
}

#[test]
fn raise_above_the_top_rating_band_touches_only_that_record() {
    let store = store_with(scenario_records());

    let raised = store.raise_salary_by_rating(4.3, 0.10).unwrap();

    assert_eq!(ids(&raised), vec![2]);
    assert!((store.read(2).unwrap().salary - 71500.0).abs() < 1e-6);
    assert_eq!(store.read(1).unwrap().salary, 75000.0);
    assert_eq!(store.read(3).unwrap().salary, 95000.0);
}

#[test]
fn unknown_department_is_rejected_and_store_unchanged() {
    let store = store_with(scenario_records());

    let err = store
        .create(Employee::new(4, "D", "Unknown", 1000.0, 3.0, 1, true))
        .unwrap_err();

    match err {
        StoreError::InvalidDepartment { department, valid } => {
            assert_eq!(department, "Unknown");
            assert!(valid.contains(&"IT".to_string()));
        }
        other => panic!("expected InvalidDepartment, got {:?}", other),
    }
    assert_eq!(store.len().unwrap(), 3);
}

#[test]
fn inverted_salary_range_fails_regardless_of_contents() {
    for store in [EmployeeStore::new(), store_with(staff_records())] {
        assert_eq!(
            store.by_salary_between(90000.0, 70000.0).unwrap_err(),
            StoreError::InvalidRange {
                min: 90000.0,
                max: 70000.0
            }
        );
    }
}

#[test]
fn keys_stay_unique_across_creates() {
    let store = EmployeeStore::new();
    let mut attempts = staff_records();
    attempts.extend(staff_records());

    let mut failures = 0;
    for employee in attempts {
        if let Err(err) = store.create(employee) {
            assert!(matches!(err, StoreError::DuplicateKey(_)));
            failures += 1;
        }
    }

    assert_eq!(failures, 5);
    let keys = ids(&store.all().unwrap());
    assert_eq!(keys, vec![1001, 1002, 1003, 1004, 1005]);
}

#[test]
fn create_then_read_round_trips() {
    let store = EmployeeStore::new();
    for employee in staff_records() {
        let id = store.create(employee.clone()).unwrap();
        assert_eq!(store.read(id).unwrap(), employee);
    }
}

#[test]
fn failed_updates_leave_record_identical() {
    let store = store_with(staff_records());
    let before = store.read(1003).unwrap();

    let attempts = [
        ("salary", json!(-10)),
        ("salary", json!("ten")),
        ("performanceRating", json!(5.01)),
        ("yearsOfExperience", json!(-2)),
        ("department", json!("Legal")),
        ("name", json!("   ")),
        ("active", json!("yes")),
        ("employeeId", json!(1)),
    ];
    for (field, value) in attempts {
        assert!(store.update_by_name(1003, field, value).is_err());
        assert_eq!(store.read(1003).unwrap(), before);
    }

    let after = store
        .update(1003, EmployeeField::Department("Sales".into()))
        .unwrap();
    assert_eq!(after.department, "Sales");
    assert_eq!(after.salary, before.salary);
}

#[test]
fn update_errors_distinguish_shape_from_range() {
    let store = store_with(staff_records());

    let shape = store.update_by_name(1001, "salary", json!("lots")).unwrap_err();
    let range = store.update_by_name(1001, "salary", json!(-1)).unwrap_err();
    let unknown = store.update_by_name(1001, "bonus", json!(1)).unwrap_err();

    assert_eq!(shape.kind(), "InvalidValue");
    assert_eq!(range.kind(), "InvalidSalary");
    assert_eq!(unknown.kind(), "InvalidField");
}

#[test]
fn salary_order_is_non_increasing_with_key_tiebreak() {
    let mut records = staff_records();
    records.push(Employee::new(1000, "Tie", "Sales", 75000.0, 3.0, 1, true));
    let store = store_with(records);

    let sorted = store.sorted_by_salary().unwrap();
    for pair in sorted.windows(2) {
        assert!(pair[0].salary >= pair[1].salary);
        if pair[0].salary == pair[1].salary {
            assert!(pair[0].id < pair[1].id);
        }
    }
    assert_eq!(ids(&sorted), vec![1004, 1003, 1000, 1001, 1005, 1002]);
}

#[test]
fn top_paid_follows_salary_order_with_default_count() {
    let store = store_with(staff_records());

    assert_eq!(ids(&store.top_paid(3).unwrap()), vec![1004, 1003, 1001]);
    assert_eq!(
        ids(&store.top_paid_default().unwrap()),
        vec![1004, 1003, 1001, 1005, 1002]
    );
    assert_eq!(store.top_paid(50).unwrap().len(), 5);
}

#[test]
fn per_department_averages_agree_with_single_lookups() {
    let store = store_with(staff_records());

    let averages = store.average_salary_per_department().unwrap();
    assert_eq!(averages.len(), 4);
    for (department, average) in &averages {
        assert_eq!(*average, store.average_salary(department).unwrap());
    }
}

#[test]
fn query_results_are_detached_copies() {
    let store = store_with(staff_records());

    let mut it = store.by_department("IT").unwrap();
    it[0].salary = 1.0;

    assert_eq!(store.read(it[0].id).unwrap().salary, 75000.0);
}

#[test]
fn reports_cover_every_record() {
    let store = store_with(staff_records());

    let summary = store.department_summary().unwrap();
    assert_eq!(summary.values().map(|s| s.count).sum::<usize>(), 5);

    let performance = store.performance_report().unwrap();
    assert_eq!(performance.iter().map(|row| row.count).sum::<usize>(), 5);

    let distribution = store.salary_distribution().unwrap();
    assert_eq!(distribution.iter().map(|row| row.count).sum::<usize>(), 5);
}

#[test]
fn observer_receives_one_line_per_mutation_and_rejection() {
    let lines = Arc::new(Mutex::new(Vec::new()));
    let store = EmployeeStore::with_config(
        StoreConfig::default(),
        LogObserver::with_buffer(lines.clone()),
    )
    .unwrap();

    for employee in scenario_records() {
        store.create(employee).unwrap();
    }
    store.raise_salary_by_rating(4.0, 0.05).unwrap();
    store.delete(3).unwrap();
    store.delete(3).unwrap_err();
    store
        .create(Employee::new(9, "Z", "Nowhere", 1.0, 1.0, 1, true))
        .unwrap_err();

    let lines = lines.lock().unwrap();
    assert_eq!(lines.len(), 7);
    assert!(lines[3].contains("SalaryRaised"));
    assert!(lines[4].contains("EmployeeDeleted"));
    assert!(lines[5].contains("NotFound"));
    assert!(lines[6].contains("InvalidDepartment"));
}

#[test]
fn config_from_json_drives_departments_and_top_paid() {
    let config = StoreConfig::from_json_str(
        r#"{ "departments": ["Ops", "IT"], "default_top_paid": 2 }"#,
    )
    .unwrap();
    let store =
        EmployeeStore::with_config(config, employee_store::NoopObserver).unwrap();

    store
        .create(Employee::new(1, "A", "Ops", 10.0, 1.0, 1, true))
        .unwrap();
    store
        .create(Employee::new(2, "B", "IT", 30.0, 1.0, 1, true))
        .unwrap();
    store
        .create(Employee::new(3, "C", "IT", 20.0, 1.0, 1, true))
        .unwrap();

    assert!(store.by_department("HR").is_err());
    assert_eq!(ids(&store.top_paid_default().unwrap()), vec![2, 3]);
}
