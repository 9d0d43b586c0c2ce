//! Presentation-neutral views of a period result.
//!
//! These feed the role table and the two-level (department, then role)
//! chart without tying the engine to any rendering toolkit.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::DepartmentStyles;
use crate::models::{Department, PeriodResult, RoleSummary};

use super::aggregator::compare_role_names;

/// One segment of a ring in the department/role chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSegment {
    /// The text shown on the segment.
    pub label: String,
    /// The department the segment belongs to.
    pub department: Department,
    /// Labor cost covered by the segment.
    pub value: Decimal,
    /// Incidents covered by the segment.
    pub incident_count: u32,
    /// Fill color, taken from the department style.
    pub color: String,
}

/// Data for the two-level chart: departments inside, roles outside.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartData {
    /// Inner ring, one segment per department with a non-zero cost.
    pub departments: Vec<ChartSegment>,
    /// Outer ring, one segment per role in period order.
    pub roles: Vec<ChartSegment>,
}

impl ChartData {
    /// Returns true when there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.departments.is_empty() && self.roles.is_empty()
    }
}

/// Builds chart data for a period.
///
/// Departments with a zero cost are left out of the inner ring. Role
/// segments keep the period's ranking, so each department's roles sit
/// next to each other.
///
/// # Examples
///
/// ```
/// use nonconformance_engine::analysis::{analyze, chart_data};
/// use nonconformance_engine::config::DepartmentStyles;
/// use nonconformance_engine::models::RawRecord;
///
/// let period = analyze(&[RawRecord::production("Cutting/Bending", 80)]).unwrap();
/// let chart = chart_data(&period, &DepartmentStyles::default());
///
/// assert_eq!(chart.departments.len(), 1);
/// assert_eq!(chart.departments[0].color, "royalblue");
/// assert_eq!(chart.roles.len(), 2);
/// ```
pub fn chart_data(period: &PeriodResult, styles: &DepartmentStyles) -> ChartData {
    let departments = Department::ALL
        .into_iter()
        .map(|department| period.department(department))
        .filter(|totals| !totals.cost.is_zero())
        .map(|totals| {
            let style = styles.get(totals.department);
            ChartSegment {
                label: style.label.clone(),
                department: totals.department,
                value: totals.cost,
                incident_count: totals.incident_count,
                color: style.color.clone(),
            }
        })
        .collect();

    let roles = period
        .summaries
        .iter()
        .map(|summary| ChartSegment {
            label: summary.role.clone(),
            department: summary.department,
            value: summary.total_cost,
            incident_count: summary.incident_count,
            color: styles.get(summary.department).color.clone(),
        })
        .collect();

    ChartData { departments, roles }
}

/// Ranks every role across both departments by total cost.
///
/// Ties break by role name (case-insensitive), then by department with
/// production first.
pub fn ranked_roles(period: &PeriodResult) -> Vec<&RoleSummary> {
    let mut ranked: Vec<&RoleSummary> = period.summaries.iter().collect();
    ranked.sort_by(|a, b| {
        b.total_cost
            .cmp(&a.total_cost)
            .then_with(|| compare_role_names(&a.role, &b.role))
            .then_with(|| a.department.cmp(&b.department))
    });
    ranked
}
