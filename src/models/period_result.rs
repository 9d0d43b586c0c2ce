//! Period result models.
//!
//! This module contains the [`PeriodResult`] type produced by one
//! aggregation run, together with its per-role and per-department parts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Department;

/// Aggregated labor cost for one role within one department.
///
/// # Example
///
/// ```
/// use nonconformance_engine::models::{Department, RoleSummary};
/// use rust_decimal::Decimal;
///
/// let summary = RoleSummary {
///     role: "Cutting".to_string(),
///     department: Department::Production,
///     total_cost: Decimal::new(100, 0),
///     share_of_department_total: Decimal::new(5, 1),
///     incident_count: 2,
/// };
/// assert_eq!(summary.total_cost, Decimal::new(100, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleSummary {
    /// The role name.
    pub role: String,
    /// The department the role was attributed in.
    pub department: Department,
    /// Sum of every share attributed to this role and department.
    pub total_cost: Decimal,
    /// `total_cost` as a fraction of the department total (0 for an empty department).
    pub share_of_department_total: Decimal,
    /// Number of records that named this role.
    pub incident_count: u32,
}

/// Totals for one department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentTotals {
    /// The department these totals cover.
    pub department: Department,
    /// Sum of all role totals in the department.
    pub cost: Decimal,
    /// Sum of all role incident counts in the department.
    pub incident_count: u32,
}

impl DepartmentTotals {
    /// Zero-valued totals for a department.
    pub fn zero(department: Department) -> Self {
        Self {
            department,
            cost: Decimal::ZERO,
            incident_count: 0,
        }
    }
}

/// A non-fatal condition noticed during analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
}

/// Code of the warning attached when no usable records remain after normalization.
pub const EMPTY_INPUT_WARNING: &str = "EMPTY_INPUT";

impl AnalysisWarning {
    /// The warning for an analysis run with zero usable records.
    pub fn empty_input() -> Self {
        Self {
            code: EMPTY_INPUT_WARNING.to_string(),
            message: "No usable records after normalization".to_string(),
        }
    }
}

/// The complete output of one aggregation run.
///
/// Summaries are grouped by department (production first) and ranked by
/// descending total cost within each department, ties broken by role name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodResult {
    /// Ranked per-role summaries.
    pub summaries: Vec<RoleSummary>,
    /// Production department totals.
    pub production: DepartmentTotals,
    /// Office department totals.
    pub office: DepartmentTotals,
    /// Production plus office cost.
    pub grand_total: Decimal,
    /// Soft warnings raised while building the result.
    #[serde(default)]
    pub warnings: Vec<AnalysisWarning>,
}

impl PeriodResult {
    /// A zero-valued result with no summaries.
    ///
    /// # Example
    ///
    /// ```
    /// use nonconformance_engine::models::PeriodResult;
    /// use rust_decimal::Decimal;
    ///
    /// let result = PeriodResult::empty();
    /// assert!(result.is_empty());
    /// assert_eq!(result.grand_total, Decimal::ZERO);
    /// ```
    pub fn empty() -> Self {
        Self {
            summaries: Vec::new(),
            production: DepartmentTotals::zero(Department::Production),
            office: DepartmentTotals::zero(Department::Office),
            grand_total: Decimal::ZERO,
            warnings: Vec::new(),
        }
    }

    /// Returns true when no role received any share.
    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }

    /// Returns the totals for a department.
    pub fn department(&self, department: Department) -> &DepartmentTotals {
        match department {
            Department::Production => &self.production,
            Department::Office => &self.office,
        }
    }

    /// Iterates the ranked summaries of one department.
    pub fn summaries_for(&self, department: Department) -> impl Iterator<Item = &RoleSummary> {
        self.summaries
            .iter()
            .filter(move |s| s.department == department)
    }

    /// Looks up the summary for a role within a department.
    pub fn find(&self, role: &str, department: Department) -> Option<&RoleSummary> {
        self.summaries
            .iter()
            .find(|s| s.department == department && s.role == role)
    }

    /// Returns true if a warning with the given code was raised.
    pub fn has_warning(&self, code: &str) -> bool {
        self.warnings.iter().any(|w| w.code == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(role: &str, department: Department, cost: i64) -> RoleSummary {
        RoleSummary {
            role: role.to_string(),
            department,
            total_cost: Decimal::from(cost),
            share_of_department_total: Decimal::ZERO,
            incident_count: 1,
        }
    }

    #[test]
    fn test_empty_result_has_zero_totals() {
        let result = PeriodResult::empty();
        assert_eq!(result.production.cost, Decimal::ZERO);
        assert_eq!(result.office.cost, Decimal::ZERO);
        assert_eq!(result.office.incident_count, 0);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_find_matches_role_and_department() {
        let mut result = PeriodResult::empty();
        result.summaries = vec![
            summary("Cutting", Department::Production, 50),
            summary("Cutting", Department::Office, 10),
        ];

        assert_eq!(
            result.find("Cutting", Department::Office).unwrap().total_cost,
            Decimal::from(10)
        );
        assert!(result.find("Painting", Department::Production).is_none());
    }

    #[test]
    fn test_summaries_for_filters_department() {
        let mut result = PeriodResult::empty();
        result.summaries = vec![
            summary("Cutting", Department::Production, 50),
            summary("Bending", Department::Production, 20),
            summary("Manager", Department::Office, 10),
        ];

        let roles: Vec<&str> = result
            .summaries_for(Department::Production)
            .map(|s| s.role.as_str())
            .collect();
        assert_eq!(roles, vec!["Cutting", "Bending"]);
    }

    #[test]
    fn test_empty_input_warning_code() {
        let mut result = PeriodResult::empty();
        result.warnings.push(AnalysisWarning::empty_input());
        assert!(result.has_warning(EMPTY_INPUT_WARNING));
    }
}
