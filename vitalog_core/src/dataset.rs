//! Bundled reading dataset.
//!
//! The dashboard ships with a fixed year of monthly lab results. The store
//! is populated once from this batch at startup; nothing else writes to it.

use crate::{Reading, ReadingStore, Result};

/// Build the bundled dataset: thirteen monthly readings from February 2025
/// through February 2026
pub fn build_default_dataset() -> Vec<Reading> {
    vec![
        reading("2025-02-12", 22.0, 9.1, 82.0, Some("Baseline panel; started 2000 IU D3")),
        reading("2025-03-12", 24.5, 9.3, 85.0, None),
        reading("2025-04-09", 26.0, 9.2, 88.0, Some("Increased D3 to 5000 IU")),
        reading("2025-05-14", 29.5, 9.4, 92.0, None),
        reading("2025-06-11", 31.0, 9.3, 95.0, None),
        reading("2025-07-09", 34.5, 9.5, 101.0, Some("Daily walks at lunch")),
        reading("2025-08-13", 36.0, 9.4, 104.0, None),
        reading("2025-09-10", 38.0, 9.6, 110.0, Some("Travel, lower sun exposure")),
        reading("2025-10-08", 37.5, 9.5, 113.0, None),
        reading("2025-11-12", 40.0, 9.4, 118.0, None),
        reading("2025-12-10", 42.5, 9.6, 121.0, Some("Added B-complex supplement")),
        reading("2026-01-11", 45.0, 9.5, 124.0, None),
        reading("2026-02-08", 48.0, 9.6, 127.0, None),
    ]
}

/// The reading store loaded with the bundled dataset
pub fn default_store() -> Result<ReadingStore> {
    ReadingStore::from_readings(build_default_dataset())
}

fn reading(
    date: &str,
    vitamin_d: f64,
    calcium: f64,
    thiamine: f64,
    notes: Option<&str>,
) -> Reading {
    Reading {
        // Dataset literals are fixed ISO dates
        date: date.parse().expect("valid dataset date"),
        vitamin_d,
        calcium,
        thiamine,
        notes: notes.map(String::from),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{filter_since, summarize, HistoryRange, MetricKey, Status};
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_dataset_loads() {
        let store = default_store().unwrap();
        assert_eq!(store.len(), 13);
    }

    #[test]
    fn test_dataset_span() {
        let store = default_store().unwrap();

        assert_eq!(store.all().first().unwrap().date, date("2025-02-12"));
        assert_eq!(store.latest().unwrap().date, date("2026-02-08"));
    }

    #[test]
    fn test_dataset_dates_strictly_increase() {
        let store = default_store().unwrap();

        for pair in store.all().windows(2) {
            assert!(pair[0].date < pair[1].date);
        }
    }

    #[test]
    fn test_30d_window_from_latest_reading() {
        let store = default_store().unwrap();
        let rows = filter_since(&store, date("2026-02-08"), HistoryRange::Days30);

        // Cutoff is 2026-01-09; the 2026-01-11 check falls inside the window
        let dates: Vec<_> = rows.iter().map(|r| r.date).collect();
        assert_eq!(dates, vec![date("2026-01-11"), date("2026-02-08")]);
    }

    #[test]
    fn test_latest_vitamin_d_summary() {
        let store = default_store().unwrap();
        let summary = summarize(&store, MetricKey::VitaminD).unwrap();

        assert_eq!(summary.latest, 48.0);
        assert_eq!(summary.delta, 3.0);
        assert_eq!(summary.status, Status::InRange);
    }

    #[test]
    fn test_travel_note_present() {
        let store = default_store().unwrap();
        let noted = store
            .all()
            .iter()
            .find(|r| r.date == date("2025-09-10"))
            .unwrap();

        assert_eq!(
            noted.notes.as_deref(),
            Some("Travel, lower sun exposure")
        );
    }
}
