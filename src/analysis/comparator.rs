//! Comparison of a current period against a previous one.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use crate::models::{ComparisonResult, Department, PeriodResult, RoleComparison, RoleSummary};

use super::aggregator::compare_role_names;

/// Decimal places `delta_percent` is rounded to.
pub const DELTA_PERCENT_SCALE: u32 = 2;

/// Computes per-role deltas between two periods.
///
/// Every `(role, department)` key present in either period appears exactly
/// once. A role missing from one side contributes zero cost and zero
/// incidents for that side.
///
/// # Examples
///
/// ```
/// use nonconformance_engine::analysis::{aggregate, compare, normalize};
/// use nonconformance_engine::models::{Department, RawRecord};
/// use rust_decimal::Decimal;
///
/// let previous = aggregate(&normalize(&[RawRecord::office("Eve", 30)]).unwrap());
/// let current = aggregate(&normalize(&[RawRecord::office("Frank", 10)]).unwrap());
///
/// let comparison = compare(&current, &previous);
/// let eve = comparison.find("Eve", Department::Office).unwrap();
/// assert_eq!(eve.current_cost, Decimal::ZERO);
/// assert_eq!(eve.delta, Decimal::from(-30));
/// ```
pub fn compare(current: &PeriodResult, previous: &PeriodResult) -> ComparisonResult {
    let mut keys: BTreeMap<(Department, &str), (Option<&RoleSummary>, Option<&RoleSummary>)> =
        BTreeMap::new();
    for summary in &current.summaries {
        keys.entry((summary.department, summary.role.as_str()))
            .or_default()
            .0 = Some(summary);
    }
    for summary in &previous.summaries {
        keys.entry((summary.department, summary.role.as_str()))
            .or_default()
            .1 = Some(summary);
    }

    let mut roles: Vec<RoleComparison> = keys
        .into_iter()
        .map(|((department, role), (now, before))| {
            role_comparison(role, department, now, before)
        })
        .collect();
    roles.sort_by(comparison_order);

    let total_delta = current.grand_total - previous.grand_total;
    debug!(
        roles = roles.len(),
        total_delta = %total_delta,
        "Compared periods"
    );

    ComparisonResult {
        roles,
        current_total: current.grand_total,
        previous_total: previous.grand_total,
        total_delta,
    }
}

/// Compares against an optional previous period.
///
/// `None` means no comparison is available and yields `None`; choosing
/// the previous period is left to the caller.
pub fn compare_with_previous(
    current: &PeriodResult,
    previous: Option<&PeriodResult>,
) -> Option<ComparisonResult> {
    previous.map(|previous| compare(current, previous))
}

fn role_comparison(
    role: &str,
    department: Department,
    current: Option<&RoleSummary>,
    previous: Option<&RoleSummary>,
) -> RoleComparison {
    let current_cost = current.map_or(Decimal::ZERO, |s| s.total_cost);
    let previous_cost = previous.map_or(Decimal::ZERO, |s| s.total_cost);
    let current_count = current.map_or(0, |s| s.incident_count);
    let previous_count = previous.map_or(0, |s| s.incident_count);
    let delta = current_cost - previous_cost;

    RoleComparison {
        role: role.to_string(),
        department,
        current_cost,
        previous_cost,
        delta,
        delta_percent: delta_percent(delta, previous_cost),
        current_count,
        previous_count,
        count_delta: i64::from(current_count) - i64::from(previous_count),
    }
}

/// `delta` as a percentage of `previous`.
///
/// `None` when `previous` is 0, or when the percentage does not fit in a
/// `Decimal` (a tiny previous cost against a large delta).
pub fn delta_percent(delta: Decimal, previous: Decimal) -> Option<Decimal> {
    if previous.is_zero() {
        return None;
    }
    delta
        .checked_div(previous)?
        .checked_mul(Decimal::ONE_HUNDRED)
        .map(|percent| {
            percent.round_dp_with_strategy(
                DELTA_PERCENT_SCALE,
                RoundingStrategy::MidpointAwayFromZero,
            )
        })
}

/// Department, then present roles by current cost descending, then
/// discontinued roles by previous cost descending. Names break ties.
fn comparison_order(a: &RoleComparison, b: &RoleComparison) -> Ordering {
    a.department
        .cmp(&b.department)
        .then_with(|| a.is_discontinued().cmp(&b.is_discontinued()))
        .then_with(|| {
            if a.is_discontinued() {
                b.previous_cost.abs().cmp(&a.previous_cost.abs())
            } else {
                b.current_cost.cmp(&a.current_cost)
            }
        })
        .then_with(|| compare_role_names(&a.role, &b.role))
}
