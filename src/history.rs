//! History selection for period comparisons.
//!
//! The engine never decides on its own which earlier period to compare
//! against. A [`HistoryStore`] answers that question; [`InMemoryHistory`]
//! is the implementation used by the local endpoint.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use tracing::debug;

use crate::models::RawRecord;

/// A previously archived period's source rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistoricalPeriod<'a> {
    /// When the period was recorded.
    pub recorded_at: NaiveDateTime,
    /// The rows the period was analyzed from.
    pub rows: &'a [RawRecord],
}

/// Selects the period to compare a new one against.
pub trait HistoryStore {
    /// Returns the most recent period recorded strictly before `recorded_at`.
    fn latest_before(&self, recorded_at: NaiveDateTime) -> Option<HistoricalPeriod<'_>>;
}

/// Archived periods held in memory, keyed by recording time.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use nonconformance_engine::history::{HistoryStore, InMemoryHistory};
/// use nonconformance_engine::models::RawRecord;
///
/// let march = NaiveDate::from_ymd_opt(2026, 3, 31).unwrap().and_hms_opt(9, 0, 0).unwrap();
/// let april = NaiveDate::from_ymd_opt(2026, 4, 30).unwrap().and_hms_opt(9, 0, 0).unwrap();
///
/// let mut history = InMemoryHistory::new();
/// history.archive(march, vec![RawRecord::office("Manager", 10)]);
///
/// assert_eq!(history.latest_before(april).unwrap().recorded_at, march);
/// assert!(history.latest_before(march).is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryHistory {
    periods: BTreeMap<NaiveDateTime, Vec<RawRecord>>,
}

impl InMemoryHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a period's rows, replacing any period recorded at the same time.
    pub fn archive(&mut self, recorded_at: NaiveDateTime, rows: Vec<RawRecord>) {
        debug!(%recorded_at, rows = rows.len(), "Archived period");
        self.periods.insert(recorded_at, rows);
    }

    /// Number of archived periods.
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    /// Returns true if nothing has been archived.
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }
}

impl HistoryStore for InMemoryHistory {
    fn latest_before(&self, recorded_at: NaiveDateTime) -> Option<HistoricalPeriod<'_>> {
        self.periods
            .range(..recorded_at)
            .next_back()
            .map(|(recorded_at, rows)| HistoricalPeriod {
                recorded_at: *recorded_at,
                rows,
            })
    }
}
