//! Analysis logic for the non-conformance engine.
//!
//! Three pure stages: [`normalize`] turns raw rows into role shares,
//! [`aggregate`] folds shares into a ranked [`PeriodResult`], and
//! [`compare`] diffs a current period against a previous one. None of
//! them keep state between calls.

mod aggregator;
mod comparator;
mod normalizer;
mod views;

pub use aggregator::{aggregate, compare_role_names, rank_order, ratio};
pub use comparator::{DELTA_PERCENT_SCALE, compare, compare_with_previous, delta_percent};
pub use normalizer::{
    DEFAULT_ROLE_DELIMITER, MAX_PERIOD_COST, SHARE_SCALE, normalize, normalize_with_delimiter, share_cost,
};
pub use views::{ChartData, ChartSegment, chart_data, ranked_roles};

use chrono::NaiveDateTime;
use tracing::info;

use crate::error::EngineResult;
use crate::history::HistoryStore;
use crate::models::{ComparisonResult, PeriodResult, RawRecord};

/// Normalizes and aggregates rows with the default delimiter.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::InvalidRecord`] if any row's labor
/// cost is missing, negative or non-numeric.
pub fn analyze(rows: &[RawRecord]) -> EngineResult<PeriodResult> {
    analyze_with_delimiter(rows, DEFAULT_ROLE_DELIMITER)
}

/// Normalizes and aggregates rows, splitting role cells on `delimiter`.
pub fn analyze_with_delimiter(rows: &[RawRecord], delimiter: &str) -> EngineResult<PeriodResult> {
    let shares = normalize_with_delimiter(rows, delimiter)?;
    Ok(aggregate(&shares))
}

/// A period analysis together with its comparison, if one was possible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodAnalysis {
    /// The current period.
    pub period: PeriodResult,
    /// The previous period the current one was compared against.
    pub previous: Option<PeriodResult>,
    /// The comparison, present when history offered a previous period.
    pub comparison: Option<ComparisonResult>,
}

/// Analyzes rows and compares them against the latest earlier period in `history`.
///
/// The previous period is whatever the store reports as most recent
/// strictly before `recorded_at`; with no such period the comparison is
/// `None`. Archiving the current rows is left to the caller.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use nonconformance_engine::analysis::analyze_against_history;
/// use nonconformance_engine::history::InMemoryHistory;
/// use nonconformance_engine::models::RawRecord;
/// use rust_decimal::Decimal;
///
/// let march = NaiveDate::from_ymd_opt(2026, 3, 31).unwrap().and_hms_opt(9, 0, 0).unwrap();
/// let april = NaiveDate::from_ymd_opt(2026, 4, 30).unwrap().and_hms_opt(9, 0, 0).unwrap();
///
/// let mut history = InMemoryHistory::new();
/// history.archive(march, vec![RawRecord::office("Manager", 40)]);
///
/// let analysis =
///     analyze_against_history(&[RawRecord::office("Manager", 50)], april, &history, "/").unwrap();
/// let comparison = analysis.comparison.unwrap();
/// assert_eq!(comparison.roles[0].delta, Decimal::from(10));
/// ```
pub fn analyze_against_history<H: HistoryStore + ?Sized>(
    rows: &[RawRecord],
    recorded_at: NaiveDateTime,
    history: &H,
    delimiter: &str,
) -> EngineResult<PeriodAnalysis> {
    let period = analyze_with_delimiter(rows, delimiter)?;

    let previous = match history.latest_before(recorded_at) {
        Some(historical) => {
            info!(
                recorded_at = %recorded_at,
                previous_recorded_at = %historical.recorded_at,
                "Comparing against archived period"
            );
            Some(analyze_with_delimiter(historical.rows, delimiter)?)
        }
        None => {
            info!(recorded_at = %recorded_at, "No earlier period archived");
            None
        }
    };

    let comparison = compare_with_previous(&period, previous.as_ref());
    Ok(PeriodAnalysis {
        period,
        previous,
        comparison,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::history::InMemoryHistory;
    use crate::models::Department;
    use rust_decimal::Decimal;

    fn at(date_time: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(date_time, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    #[test]
    fn test_analyze_example_alice_bob() {
        let period = analyze(&[RawRecord::new("Alice/Bob", "", 100)]).unwrap();

        assert_eq!(period.summaries.len(), 2);
        assert_eq!(period.production.cost, Decimal::from(100));
        assert_eq!(
            period
                .find("Bob", Department::Production)
                .unwrap()
                .share_of_department_total,
            Decimal::new(5, 1)
        );
    }

    #[test]
    fn test_analyze_propagates_invalid_record() {
        let result = analyze(&[RawRecord::production("Cutting", -5)]);
        assert!(matches!(result, Err(EngineError::InvalidRecord { row: 0, .. })));
    }

    #[test]
    fn test_history_without_earlier_period_has_no_comparison() {
        let history = InMemoryHistory::new();
        let analysis = analyze_against_history(
            &[RawRecord::office("Carol", 10)],
            at("2026-04-30 09:00:00"),
            &history,
            DEFAULT_ROLE_DELIMITER,
        )
        .unwrap();

        assert!(analysis.previous.is_none());
        assert!(analysis.comparison.is_none());
        assert_eq!(analysis.period.office.cost, Decimal::from(10));
    }

    #[test]
    fn test_history_reports_discontinued_role() {
        let mut history = InMemoryHistory::new();
        history.archive(
            at("2026-03-31 09:00:00"),
            vec![RawRecord::office("Eve", 30), RawRecord::office("Carol", 5)],
        );

        let analysis = analyze_against_history(
            &[RawRecord::office("Carol", 10)],
            at("2026-04-30 09:00:00"),
            &history,
            DEFAULT_ROLE_DELIMITER,
        )
        .unwrap();

        let comparison = analysis.comparison.unwrap();
        let eve = comparison.find("Eve", Department::Office).unwrap();
        assert_eq!(eve.current_cost, Decimal::ZERO);
        assert_eq!(eve.previous_cost, Decimal::from(30));
        assert_eq!(eve.delta, Decimal::from(-30));
        assert_eq!(comparison.roles.last().unwrap().role, "Eve");
    }

    #[test]
    fn test_invalid_archived_rows_are_reported() {
        let mut history = InMemoryHistory::new();
        history.archive(
            at("2026-03-31 09:00:00"),
            vec![RawRecord::office("Eve", "lots")],
        );

        let result = analyze_against_history(
            &[RawRecord::office("Carol", 10)],
            at("2026-04-30 09:00:00"),
            &history,
            DEFAULT_ROLE_DELIMITER,
        );
        assert!(matches!(result, Err(EngineError::InvalidRecord { .. })));
    }
}
