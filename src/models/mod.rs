//! Core data models for the non-conformance analysis engine.
//!
//! This module contains the value types that flow between the normalizer,
//! the aggregator and the period comparator.

mod comparison;
mod period_result;
mod raw_record;
mod role_share;

pub use comparison::{ComparisonResult, RoleComparison};
pub use period_result::{
    AnalysisWarning, DepartmentTotals, EMPTY_INPUT_WARNING, PeriodResult, RoleSummary,
};
pub use raw_record::{CostCell, RawRecord};
pub use role_share::{Department, RoleShare};
