//! Range-bounded filtering of the reading store.
//!
//! Ranges are fixed literal day counts relative to a reference date. The
//! `6m` and `1y` tokens deliberately use 183 and 365 days rather than
//! calendar-month arithmetic; this preserves the dashboard's established
//! filtering behavior.

use crate::{Error, Reading, ReadingStore, Result};
use chrono::{Duration, NaiveDate};

/// Recognized history ranges and their day offsets
///
/// The token set `{30d, 90d, 6m, 1y, all}` is the stable vocabulary every
/// caller uses to request a filtered view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryRange {
    Days30,
    Days90,
    Months6,
    Year1,
    All,
}

impl HistoryRange {
    /// Canonical token for this range
    pub fn as_str(&self) -> &'static str {
        match self {
            HistoryRange::Days30 => "30d",
            HistoryRange::Days90 => "90d",
            HistoryRange::Months6 => "6m",
            HistoryRange::Year1 => "1y",
            HistoryRange::All => "all",
        }
    }

    /// Earliest included date relative to a reference date
    ///
    /// `None` means unbounded: every reading is included.
    pub fn cutoff(&self, reference: NaiveDate) -> Option<NaiveDate> {
        let days = match self {
            HistoryRange::Days30 => 30,
            HistoryRange::Days90 => 90,
            HistoryRange::Months6 => 183,
            HistoryRange::Year1 => 365,
            HistoryRange::All => return None,
        };
        Some(reference - Duration::days(days))
    }
}

impl std::str::FromStr for HistoryRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "30d" => Ok(HistoryRange::Days30),
            "90d" => Ok(HistoryRange::Days90),
            "6m" => Ok(HistoryRange::Months6),
            "1y" => Ok(HistoryRange::Year1),
            "all" => Ok(HistoryRange::All),
            other => Err(Error::InvalidRange {
                token: other.to_string(),
            }),
        }
    }
}

/// Readings on or after the range's cutoff date
///
/// This is a predicate-based subsequence, not a resort: the store's
/// original relative order is preserved.
pub fn filter_since(
    store: &ReadingStore,
    reference: NaiveDate,
    range: HistoryRange,
) -> Vec<Reading> {
    let rows: Vec<Reading> = match range.cutoff(reference) {
        None => store.all().to_vec(),
        Some(cutoff) => store
            .all()
            .iter()
            .filter(|r| r.date >= cutoff)
            .cloned()
            .collect(),
    };

    tracing::debug!(
        "Range {} from {} kept {} of {} readings",
        range.as_str(),
        reference,
        rows.len(),
        store.len()
    );
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn reading(day: &str) -> Reading {
        Reading {
            date: date(day),
            vitamin_d: 40.0,
            calcium: 9.5,
            thiamine: 110.0,
            notes: None,
        }
    }

    fn test_store() -> ReadingStore {
        ReadingStore::from_readings(vec![
            reading("2025-11-12"),
            reading("2025-12-10"),
            reading("2026-01-11"),
            reading("2026-02-08"),
        ])
        .unwrap()
    }

    #[test]
    fn test_all_returns_entire_store_in_order() {
        let store = test_store();
        let rows = filter_since(&store, date("2026-02-08"), HistoryRange::All);

        assert_eq!(rows, store.all().to_vec());
    }

    #[test]
    fn test_30d_cutoff() {
        let store = test_store();
        let rows = filter_since(&store, date("2026-02-08"), HistoryRange::Days30);

        // Cutoff is 2026-01-09, so 2026-01-11 and 2026-02-08 are included
        let dates: Vec<_> = rows.iter().map(|r| r.date).collect();
        assert_eq!(dates, vec![date("2026-01-11"), date("2026-02-08")]);
    }

    #[test]
    fn test_cutoff_is_inclusive() {
        let store = test_store();
        // Cutoff lands exactly on the 2025-12-10 reading, which must be kept
        let rows = filter_since(&store, date("2026-01-09"), HistoryRange::Days30);

        let dates: Vec<_> = rows.iter().map(|r| r.date).collect();
        assert_eq!(dates, vec![date("2025-12-10"), date("2026-01-11"), date("2026-02-08")]);
    }

    #[test]
    fn test_fixed_day_offsets() {
        let reference = date("2026-02-08");

        assert_eq!(
            HistoryRange::Days90.cutoff(reference),
            Some(date("2025-11-10"))
        );
        // 6m is a literal 183 days, not calendar months
        assert_eq!(
            HistoryRange::Months6.cutoff(reference),
            Some(date("2025-08-09"))
        );
        assert_eq!(
            HistoryRange::Year1.cutoff(reference),
            Some(date("2025-02-08"))
        );
        assert_eq!(HistoryRange::All.cutoff(reference), None);
    }

    #[test]
    fn test_token_parsing_round_trips() {
        for token in ["30d", "90d", "6m", "1y", "all"] {
            let range: HistoryRange = token.parse().unwrap();
            assert_eq!(range.as_str(), token);
        }
    }

    #[test]
    fn test_unrecognized_tokens_rejected() {
        for token in ["7d", "1m", "", "All", "365d"] {
            match token.parse::<HistoryRange>() {
                Err(Error::InvalidRange { token: t }) => assert_eq!(t, token),
                other => panic!("Expected InvalidRange for {:?}, got {:?}", token, other),
            }
        }
    }
}
