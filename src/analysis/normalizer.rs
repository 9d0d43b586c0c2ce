//! Record normalization.
//!
//! Turns raw rows into flat [`RoleShare`] sequences by splitting each role
//! cell on the role delimiter and dividing the row's labor cost evenly
//! across the named roles.

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{Department, RawRecord, RoleShare};

/// The delimiter separating roles within one cell.
pub const DEFAULT_ROLE_DELIMITER: &str = "/";

/// Decimal places every share cost is rounded to.
///
/// Share costs are fixed-point at this scale, so summing them is exact and
/// independent of input order.
pub const SHARE_SCALE: u32 = 12;

/// Largest labor-cost total one period may attribute, `10^28`.
///
/// Each row's cost counts once per department it is attributed to. Keeping
/// the total under this bound leaves every later sum well inside the
/// `Decimal` range.
pub const MAX_PERIOD_COST: Decimal =
    Decimal::from_parts(0x1000_0000, 0x3E25_0261, 0x204F_CE5E, false, 0);

/// Normalizes rows using the default `/` delimiter.
///
/// # Errors
///
/// Returns [`EngineError::InvalidRecord`] for the first row whose labor cost
/// is missing, negative or non-numeric, or that pushes the attributed
/// total past [`MAX_PERIOD_COST`].
///
/// # Examples
///
/// ```
/// use nonconformance_engine::analysis::normalize;
/// use nonconformance_engine::models::{Department, RawRecord};
/// use rust_decimal::Decimal;
///
/// let shares = normalize(&[RawRecord::production("Alice/Bob", 100)]).unwrap();
/// assert_eq!(shares.len(), 2);
/// assert_eq!(shares[0].role, "Alice");
/// assert_eq!(shares[1].department, Department::Production);
/// assert_eq!(shares[1].cost, Decimal::from(50));
/// ```
pub fn normalize(rows: &[RawRecord]) -> EngineResult<Vec<RoleShare>> {
    normalize_with_delimiter(rows, DEFAULT_ROLE_DELIMITER)
}

/// Normalizes rows, splitting role cells on `delimiter`.
///
/// Each role cell is handled on its own: blank cells are skipped, tokens
/// are trimmed and empty tokens dropped, and the row's cost is divided by
/// the number of remaining tokens.
pub fn normalize_with_delimiter(
    rows: &[RawRecord],
    delimiter: &str,
) -> EngineResult<Vec<RoleShare>> {
    let mut shares = Vec::with_capacity(rows.len());
    let mut attributed = Decimal::ZERO;

    for (row, record) in rows.iter().enumerate() {
        let labor_cost = validated_cost(row, record)?;

        for department in Department::ALL {
            let Some(cell) = record.roles_for(department) else {
                continue;
            };
            if split_cell(row, cell, delimiter, department, labor_cost, &mut shares) {
                attributed = attributed
                    .checked_add(labor_cost)
                    .filter(|total| *total <= MAX_PERIOD_COST)
                    .ok_or_else(|| EngineError::InvalidRecord {
                        row,
                        message: format!(
                            "labor cost total exceeds the supported maximum of {}",
                            MAX_PERIOD_COST
                        ),
                    })?;
            }
        }
    }

    Ok(shares)
}

fn validated_cost(row: usize, record: &RawRecord) -> EngineResult<Decimal> {
    let cell = record
        .labor_cost
        .as_ref()
        .ok_or_else(|| EngineError::InvalidRecord {
            row,
            message: "labor cost is missing".to_string(),
        })?;

    cell.labor_cost()
        .map_err(|message| EngineError::InvalidRecord { row, message })
}

fn split_cell(
    row: usize,
    cell: &str,
    delimiter: &str,
    department: Department,
    labor_cost: Decimal,
    shares: &mut Vec<RoleShare>,
) -> bool {
    let tokens: Vec<&str> = cell.split(delimiter).map(str::trim).collect();
    let roles: Vec<&str> = tokens.iter().copied().filter(|t| !t.is_empty()).collect();

    if roles.len() < tokens.len() && !roles.is_empty() {
        debug!(
            row,
            department = %department,
            dropped = tokens.len() - roles.len(),
            "Dropped empty role tokens"
        );
    }

    if roles.is_empty() {
        return false;
    }

    let cost = share_cost(labor_cost, roles.len());
    shares.extend(
        roles
            .into_iter()
            .map(|role| RoleShare::new(role, department, cost)),
    );
    true
}

/// Splits `labor_cost` evenly across `count` roles at [`SHARE_SCALE`].
pub fn share_cost(labor_cost: Decimal, count: usize) -> Decimal {
    (labor_cost / Decimal::from(count))
        .round_dp_with_strategy(SHARE_SCALE, RoundingStrategy::MidpointNearestEven)
}
