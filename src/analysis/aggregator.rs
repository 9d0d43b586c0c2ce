//! Aggregation of role shares into a period result.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{debug, warn};

use crate::models::{
    AnalysisWarning, Department, DepartmentTotals, PeriodResult, RoleShare, RoleSummary,
};

use super::normalizer::{MAX_PERIOD_COST, SHARE_SCALE};

#[derive(Debug, Default)]
struct RoleAccumulator {
    total_cost: Decimal,
    incident_count: u32,
}

/// Folds role shares into per-role and per-department totals.
///
/// Shares are grouped by `(role, department)`. Each group becomes one
/// [`RoleSummary`] whose share of the department total is 0 when the
/// department total is 0. Summaries are ranked with [`rank_order`], so the
/// output does not depend on the order of `shares`.
///
/// An empty input is not an error: the result has zero totals and carries
/// an `EMPTY_INPUT` warning.
///
/// Sums saturate at `Decimal::MAX`. Shares produced by
/// [`normalize`](super::normalize) stay below [`MAX_PERIOD_COST`] and never
/// get there.
///
/// # Examples
///
/// ```
/// use nonconformance_engine::analysis::{aggregate, normalize};
/// use nonconformance_engine::models::{Department, RawRecord};
/// use rust_decimal::Decimal;
///
/// let rows = vec![RawRecord::office("Carol", 40), RawRecord::office("Carol", 60)];
/// let result = aggregate(&normalize(&rows).unwrap());
///
/// assert_eq!(result.summaries.len(), 1);
/// assert_eq!(result.office.cost, Decimal::from(100));
/// assert_eq!(result.find("Carol", Department::Office).unwrap().incident_count, 2);
/// ```
pub fn aggregate(shares: &[RoleShare]) -> PeriodResult {
    if shares.is_empty() {
        warn!("No usable records to aggregate");
        let mut result = PeriodResult::empty();
        result.warnings.push(AnalysisWarning::empty_input());
        return result;
    }

    let mut groups: BTreeMap<(Department, &str), RoleAccumulator> = BTreeMap::new();
    for share in shares {
        let acc = groups
            .entry((share.department, share.role.as_str()))
            .or_default();
        acc.total_cost = acc.total_cost.saturating_add(share.cost);
        acc.incident_count += 1;
    }

    let mut production = DepartmentTotals::zero(Department::Production);
    let mut office = DepartmentTotals::zero(Department::Office);
    for ((department, _), acc) in &groups {
        let totals = match department {
            Department::Production => &mut production,
            Department::Office => &mut office,
        };
        totals.cost = totals.cost.saturating_add(acc.total_cost);
        totals.incident_count += acc.incident_count;
    }

    let mut summaries: Vec<RoleSummary> = groups
        .into_iter()
        .map(|((department, role), acc)| {
            let department_total = match department {
                Department::Production => production.cost,
                Department::Office => office.cost,
            };
            RoleSummary {
                role: role.to_string(),
                department,
                total_cost: acc.total_cost,
                share_of_department_total: ratio(acc.total_cost, department_total),
                incident_count: acc.incident_count,
            }
        })
        .collect();
    summaries.sort_by(rank_order);

    let grand_total = production.cost.saturating_add(office.cost);
    debug!(
        roles = summaries.len(),
        production_total = %production.cost,
        office_total = %office.cost,
        "Aggregated role shares"
    );

    PeriodResult {
        summaries,
        production,
        office,
        grand_total,
        warnings: Vec::new(),
    }
}

/// `part / whole` at [`SHARE_SCALE`], or 0 when `whole` is 0 or the
/// quotient is out of range.
pub fn ratio(part: Decimal, whole: Decimal) -> Decimal {
    match part.checked_div(whole) {
        Some(value) => {
            value.round_dp_with_strategy(SHARE_SCALE, RoundingStrategy::MidpointNearestEven)
        }
        None => Decimal::ZERO,
    }
}

/// The ranking policy shared by period results and comparisons.
///
/// Department first (production before office), then total cost
/// descending, then role name compared case-insensitively, then the exact
/// role name so that roles differing only in case still order stably.
pub fn rank_order(a: &RoleSummary, b: &RoleSummary) -> Ordering {
    a.department
        .cmp(&b.department)
        .then_with(|| b.total_cost.cmp(&a.total_cost))
        .then_with(|| compare_role_names(&a.role, &b.role))
}

/// Case-insensitive role name ordering with an exact-name fallback.
pub fn compare_role_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
