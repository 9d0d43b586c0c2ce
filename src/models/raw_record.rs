//! Raw input record model.
//!
//! A [`RawRecord`] is one spreadsheet row as delivered by the loader: two
//! free-text responsibility cells and the labor cost cell, unvalidated.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Department;

/// The contents of a labor cost cell.
///
/// Loaders hand over whatever the cell held. Numeric values (including
/// numeric strings) land in [`CostCell::Number`], other strings in
/// [`CostCell::Text`], and any other value (a boolean, list or object) in
/// [`CostCell::Other`]. Nothing is rejected on load, so normalization can
/// report a bad cell against the offending row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CostCell {
    /// A numeric cell value.
    Number(Decimal),
    /// A text cell value that did not parse as a number on load.
    Text(String),
    /// Any other cell value.
    Other(serde_json::Value),
}

impl CostCell {
    /// Interprets the cell as a non-negative labor cost.
    ///
    /// Text cells are given a second chance after trimming surrounding
    /// whitespace. The error string describes why the cell was rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use nonconformance_engine::models::CostCell;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(CostCell::from(Decimal::new(125, 1)).labor_cost(), Ok(Decimal::new(125, 1)));
    /// assert!(CostCell::Text("n/a".to_string()).labor_cost().is_err());
    /// assert!(CostCell::from(Decimal::new(-5, 0)).labor_cost().is_err());
    /// ```
    pub fn labor_cost(&self) -> Result<Decimal, String> {
        let value = match self {
            CostCell::Number(value) => *value,
            CostCell::Text(text) => Decimal::from_str(text.trim())
                .map_err(|_| format!("labor cost is not numeric: '{}'", text))?,
            CostCell::Other(value) => {
                return Err(format!("labor cost is not numeric: {}", value));
            }
        };

        if value.is_sign_negative() && !value.is_zero() {
            return Err(format!("labor cost is negative: {}", value.normalize()));
        }

        Ok(value)
    }
}

impl From<Decimal> for CostCell {
    fn from(value: Decimal) -> Self {
        CostCell::Number(value)
    }
}

impl From<i32> for CostCell {
    fn from(value: i32) -> Self {
        CostCell::Number(Decimal::from(value))
    }
}

impl From<i64> for CostCell {
    fn from(value: i64) -> Self {
        CostCell::Number(Decimal::from(value))
    }
}

impl From<&str> for CostCell {
    fn from(value: &str) -> Self {
        CostCell::Text(value.to_string())
    }
}

/// One non-conformance row.
///
/// Both role cells are processed independently, so a row naming a
/// production role and an office role contributes to both departments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    /// Responsible production roles, `/`-separated.
    #[serde(default)]
    pub production_roles: Option<String>,
    /// Responsible office roles, `/`-separated.
    #[serde(default)]
    pub office_roles: Option<String>,
    /// Labor cost impact of the non-conformance.
    #[serde(default)]
    pub labor_cost: Option<CostCell>,
}

impl RawRecord {
    /// Creates a record from both role cells and a cost. Empty cells become `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use nonconformance_engine::models::RawRecord;
    ///
    /// let record = RawRecord::new("Alice/Bob", "", 100);
    /// assert_eq!(record.production_roles.as_deref(), Some("Alice/Bob"));
    /// assert_eq!(record.office_roles, None);
    /// ```
    pub fn new(
        production_roles: impl Into<String>,
        office_roles: impl Into<String>,
        labor_cost: impl Into<CostCell>,
    ) -> Self {
        Self {
            production_roles: non_empty(production_roles.into()),
            office_roles: non_empty(office_roles.into()),
            labor_cost: Some(labor_cost.into()),
        }
    }

    /// Creates a record attributed to production roles only.
    pub fn production(roles: impl Into<String>, labor_cost: impl Into<CostCell>) -> Self {
        Self::new(roles, "", labor_cost)
    }

    /// Creates a record attributed to office roles only.
    pub fn office(roles: impl Into<String>, labor_cost: impl Into<CostCell>) -> Self {
        Self::new("", roles, labor_cost)
    }

    /// Returns the role cell that feeds the given department.
    pub fn roles_for(&self, department: Department) -> Option<&str> {
        match department {
            Department::Production => self.production_roles.as_deref(),
            Department::Office => self.office_roles.as_deref(),
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_numeric_cell_is_accepted() {
        assert_eq!(CostCell::from(dec("40.50")).labor_cost(), Ok(dec("40.50")));
    }

    #[test]
    fn test_zero_cost_is_accepted() {
        assert_eq!(CostCell::from(0).labor_cost(), Ok(Decimal::ZERO));
    }

    #[test]
    fn test_padded_numeric_text_is_accepted() {
        let cell = CostCell::Text(" 75.25 ".to_string());
        assert_eq!(cell.labor_cost(), Ok(dec("75.25")));
    }

    #[test]
    fn test_negative_cost_is_rejected() {
        let err = CostCell::from(-5).labor_cost().unwrap_err();
        assert_eq!(err, "labor cost is negative: -5");
    }

    #[test]
    fn test_non_numeric_text_is_rejected() {
        let err = CostCell::from("unknown").labor_cost().unwrap_err();
        assert!(err.contains("not numeric"));
        assert!(err.contains("unknown"));
    }

    #[test]
    fn test_deserialize_number_and_text_cells() {
        let record: RawRecord = serde_json::from_str(
            r#"{"production_roles": "Cutting", "labor_cost": 120.5}"#,
        )
        .unwrap();
        assert_eq!(record.labor_cost, Some(CostCell::Number(dec("120.5"))));
        assert_eq!(record.office_roles, None);

        let record: RawRecord =
            serde_json::from_str(r#"{"office_roles": "Manager", "labor_cost": "1 000"}"#)
                .unwrap();
        assert_eq!(record.labor_cost, Some(CostCell::Text("1 000".to_string())));
    }

    #[test]
    fn test_deserialize_non_scalar_cells() {
        for cell in ["true", "[1, 2]", r#"{"amount": 10}"#] {
            let record: RawRecord =
                serde_json::from_str(&format!(r#"{{"labor_cost": {}}}"#, cell)).unwrap();
            let cost = record.labor_cost.unwrap();
            assert!(matches!(cost, CostCell::Other(_)), "{} should be kept raw", cell);
            assert!(cost.labor_cost().unwrap_err().contains("not numeric"));
        }
    }

    #[test]
    fn test_deserialize_missing_cost() {
        let record: RawRecord = serde_json::from_str(r#"{"office_roles": "Manager"}"#).unwrap();
        assert_eq!(record.labor_cost, None);
    }

    #[test]
    fn test_roles_for_department() {
        let record = RawRecord::new("Cutting", "Designer", 10);
        assert_eq!(record.roles_for(Department::Production), Some("Cutting"));
        assert_eq!(record.roles_for(Department::Office), Some("Designer"));
    }
}
