//! Period comparison models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Department;

/// The change in one role's cost between two periods.
///
/// A role absent from one side has that side's cost and count treated as zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleComparison {
    /// The role name.
    pub role: String,
    /// The department the role was attributed in.
    pub department: Department,
    /// Total cost in the current period.
    pub current_cost: Decimal,
    /// Total cost in the previous period.
    pub previous_cost: Decimal,
    /// `current_cost - previous_cost`.
    pub delta: Decimal,
    /// `delta` as a percentage of `previous_cost`; `None` when the previous cost is zero.
    pub delta_percent: Option<Decimal>,
    /// Incident count in the current period.
    pub current_count: u32,
    /// Incident count in the previous period.
    pub previous_count: u32,
    /// `current_count - previous_count`.
    pub count_delta: i64,
}

impl RoleComparison {
    /// Returns true if the role has no entry in the current period.
    pub fn is_discontinued(&self) -> bool {
        self.current_count == 0
    }
}

/// Per-role deltas between a current and a previous period.
///
/// Entries follow the period ranking policy: grouped by department, ranked
/// by current cost, with discontinued roles last in their department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// One entry per role present in either period.
    pub roles: Vec<RoleComparison>,
    /// Current grand total.
    pub current_total: Decimal,
    /// Previous grand total.
    pub previous_total: Decimal,
    /// `current_total - previous_total`.
    pub total_delta: Decimal,
}

impl ComparisonResult {
    /// Looks up the comparison for a role within a department.
    pub fn find(&self, role: &str, department: Department) -> Option<&RoleComparison> {
        self.roles
            .iter()
            .find(|r| r.department == department && r.role == role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discontinued_role() {
        let entry = RoleComparison {
            role: "Eve".to_string(),
            department: Department::Office,
            current_cost: Decimal::ZERO,
            previous_cost: Decimal::from(30),
            delta: Decimal::from(-30),
            delta_percent: Some(Decimal::from(-100)),
            current_count: 0,
            previous_count: 1,
            count_delta: -1,
        };
        assert!(entry.is_discontinued());
    }

    #[test]
    fn test_delta_percent_omitted_as_null() {
        let entry = RoleComparison {
            role: "New".to_string(),
            department: Department::Production,
            current_cost: Decimal::from(10),
            previous_cost: Decimal::ZERO,
            delta: Decimal::from(10),
            delta_percent: None,
            current_count: 1,
            previous_count: 0,
            count_delta: 1,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert!(json["delta_percent"].is_null());
        assert!(!entry.is_discontinued());
    }
}
