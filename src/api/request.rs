//! Request types for the local analysis endpoint.
//!
//! This module defines the JSON request structure for `/analyze`.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::RawRecord;

/// Request body for the `/analyze` endpoint.
///
/// Rows are analyzed as one period. The previous period comes from
/// `previous_rows` when given, otherwise from the archived history when
/// `compare_with_history` is set and `recorded_at` is known.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// The rows of the current period.
    pub rows: Vec<RawRecord>,
    /// Rows of an explicit previous period.
    #[serde(default)]
    pub previous_rows: Option<Vec<RawRecord>>,
    /// When the current period was recorded. Enables archiving.
    #[serde(default)]
    pub recorded_at: Option<NaiveDateTime>,
    /// Compare against the latest archived period before `recorded_at`.
    #[serde(default)]
    pub compare_with_history: bool,
}

impl AnalysisRequest {
    /// A request analyzing `rows` on their own.
    pub fn new(rows: Vec<RawRecord>) -> Self {
        Self {
            rows,
            previous_rows: None,
            recorded_at: None,
            compare_with_history: false,
        }
    }
}
