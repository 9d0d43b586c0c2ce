//! Department and normalized role share models.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The department a role was attributed to.
///
/// Determined by which source column the role was read from. The derived
/// ordering places `Production` before `Office`, which is the order
/// departments appear in every result.
///
/// # Example
///
/// ```
/// use nonconformance_engine::models::Department;
///
/// assert_eq!(Department::Production.to_string(), "Production");
/// assert!(Department::Production < Department::Office);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Department {
    /// Roles read from the production responsibility column.
    Production,
    /// Roles read from the office responsibility column.
    Office,
}

impl Department {
    /// Both departments, in result order.
    pub const ALL: [Department; 2] = [Department::Production, Department::Office];
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Department::Production => write!(f, "Production"),
            Department::Office => write!(f, "Office"),
        }
    }
}

/// One role's share of a single record's labor cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleShare {
    /// Trimmed, non-empty role name.
    pub role: String,
    /// The department the role was read for.
    pub department: Department,
    /// The cost attributed to this role.
    pub cost: Decimal,
}

impl RoleShare {
    /// Creates a share, trimming the role name.
    pub fn new(role: impl AsRef<str>, department: Department, cost: Decimal) -> Self {
        Self {
            role: role.as_ref().trim().to_string(),
            department,
            cost,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_department_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&Department::Production).unwrap(),
            "\"production\""
        );
        assert_eq!(
            serde_json::from_str::<Department>("\"office\"").unwrap(),
            Department::Office
        );
    }

    #[test]
    fn test_all_lists_production_first() {
        assert_eq!(Department::ALL, [Department::Production, Department::Office]);
    }

    #[test]
    fn test_share_trims_role() {
        let share = RoleShare::new("  Welding ", Department::Production, Decimal::ONE);
        assert_eq!(share.role, "Welding");
    }
}
