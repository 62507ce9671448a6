//! Period-over-period change between chronologically adjacent readings.

use crate::{MetricKey, Reading};

/// Signed change in a metric between two readings
///
/// Computes `current[key] - previous[key]`, unrounded. The caller supplies
/// the readings (typically the store's `latest()` and `previous()`); no
/// store access happens here and there is no failure mode.
pub fn delta(key: MetricKey, current: &Reading, previous: &Reading) -> f64 {
    key.value(current) - key.value(previous)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(day: &str, vitamin_d: f64, calcium: f64) -> Reading {
        Reading {
            date: day.parse().unwrap(),
            vitamin_d,
            calcium,
            thiamine: 110.0,
            notes: None,
        }
    }

    #[test]
    fn test_positive_delta() {
        let previous = reading("2026-01-11", 45.0, 9.5);
        let current = reading("2026-02-08", 48.0, 9.6);

        assert_eq!(delta(MetricKey::VitaminD, &current, &previous), 3.0);
    }

    #[test]
    fn test_negative_delta() {
        let previous = reading("2025-09-10", 38.0, 9.6);
        let current = reading("2025-10-08", 37.5, 9.5);

        assert_eq!(delta(MetricKey::VitaminD, &current, &previous), -0.5);
    }

    #[test]
    fn test_delta_dispatches_on_key() {
        let previous = reading("2026-01-11", 45.0, 9.2);
        let current = reading("2026-02-08", 48.0, 9.6);

        let change = delta(MetricKey::Calcium, &current, &previous);
        assert!((change - 0.4).abs() < 1e-9);
    }
}
