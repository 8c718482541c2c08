//! Reports - department, performance and salary summaries as plain data.
//!
//! Rendering is left to the caller.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::employee::Employee;
use crate::error::StoreResult;
use crate::query::Search;
use crate::salary::mean;

/// Head count and averages for one department.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DepartmentSummary {
    pub count: usize,
    pub average_salary: f64,
    pub average_experience: f64,
    pub average_rating: f64,
}

impl DepartmentSummary {
    fn of(records: &[Employee]) -> Self {
        let salaries: Vec<f64> = records.iter().map(|e| e.salary).collect();
        let years: Vec<f64> = records
            .iter()
            .map(|e| f64::from(e.years_of_experience))
            .collect();
        let ratings: Vec<f64> = records.iter().map(|e| e.performance_rating).collect();
        Self {
            count: records.len(),
            average_salary: mean(&salaries),
            average_experience: mean(&years),
            average_rating: mean(&ratings),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceBand {
    /// 4.5 and above.
    Outstanding,
    /// [4.0, 4.5)
    Excellent,
    /// [3.5, 4.0)
    Good,
    /// [3.0, 3.5)
    Average,
    /// Below 3.0.
    BelowAverage,
}

impl PerformanceBand {
    pub const ALL: [PerformanceBand; 5] = [
        PerformanceBand::Outstanding,
        PerformanceBand::Excellent,
        PerformanceBand::Good,
        PerformanceBand::Average,
        PerformanceBand::BelowAverage,
    ];

    pub fn of(rating: f64) -> Self {
        if rating >= 4.5 {
            PerformanceBand::Outstanding
        } else if rating >= 4.0 {
            PerformanceBand::Excellent
        } else if rating >= 3.5 {
            PerformanceBand::Good
        } else if rating >= 3.0 {
            PerformanceBand::Average
        } else {
            PerformanceBand::BelowAverage
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SalaryBand {
    Below50k,
    From50kTo70k,
    From70kTo90k,
    From90kTo110k,
    From110k,
}

impl SalaryBand {
    pub const ALL: [SalaryBand; 5] = [
        SalaryBand::Below50k,
        SalaryBand::From50kTo70k,
        SalaryBand::From70kTo90k,
        SalaryBand::From90kTo110k,
        SalaryBand::From110k,
    ];

    pub fn of(salary: f64) -> Self {
        if salary < 50_000.0 {
            SalaryBand::Below50k
        } else if salary < 70_000.0 {
            SalaryBand::From50kTo70k
        } else if salary < 90_000.0 {
            SalaryBand::From70kTo90k
        } else if salary < 110_000.0 {
            SalaryBand::From90kTo110k
        } else {
            SalaryBand::From110k
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BandSummary<B> {
    pub band: B,
    pub count: usize,
    pub average_salary: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BandCount<B> {
    pub band: B,
    pub count: usize,
}

pub trait Reports: Search {
    fn department_summary(&self) -> StoreResult<BTreeMap<String, DepartmentSummary>> {
        Ok(self
            .group_by_department()?
            .into_iter()
            .map(|(department, records)| (department, DepartmentSummary::of(&records)))
            .collect())
    }

    /// One row per band, best first. Empty bands report zero.
    fn performance_report(&self) -> StoreResult<Vec<BandSummary<PerformanceBand>>> {
        let records = self.snapshot()?;
        Ok(PerformanceBand::ALL
            .iter()
            .map(|band| {
                let salaries: Vec<f64> = records
                    .iter()
                    .filter(|e| PerformanceBand::of(e.performance_rating) == *band)
                    .map(|e| e.salary)
                    .collect();
                BandSummary {
                    band: *band,
                    count: salaries.len(),
                    average_salary: mean(&salaries),
                }
            })
            .collect())
    }

    /// One row per band, lowest first. Empty bands report zero.
    fn salary_distribution(&self) -> StoreResult<Vec<BandCount<SalaryBand>>> {
        let records = self.snapshot()?;
        Ok(SalaryBand::ALL
            .iter()
            .map(|band| BandCount {
                band: *band,
                count: records
                    .iter()
                    .filter(|e| SalaryBand::of(e.salary) == *band)
                    .count(),
            })
            .collect())
    }
}

impl<T: Search> Reports for T {}
