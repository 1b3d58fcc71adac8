//! Historical-series validation and helpers.

use chrono::Duration;

use horizon_core::constants::MIN_HISTORY;
use horizon_core::models::TimeSeriesPoint;
use horizon_core::{ForecastError, ForecastResult};

/// Sort a series ascending by timestamp and check the minimum history length.
///
/// Unordered input is accepted and sorted rather than rejected; too little
/// history fails with `InsufficientHistory`.
pub fn prepare(points: &[TimeSeriesPoint]) -> ForecastResult<Vec<TimeSeriesPoint>> {
    if points.len() < MIN_HISTORY {
        return Err(ForecastError::InsufficientHistory {
            required: MIN_HISTORY,
            actual: points.len(),
        });
    }
    let mut sorted = points.to_vec();
    sorted.sort_by_key(|p| p.timestamp);
    Ok(sorted)
}

/// Just the values, in series order.
pub fn values(points: &[TimeSeriesPoint]) -> Vec<f64> {
    points.iter().map(|p| p.value).collect()
}

/// The cadence future timestamps continue on: the last inter-point spacing,
/// falling back to 30 days when the series has no positive spacing.
pub fn cadence(points: &[TimeSeriesPoint]) -> Duration {
    let fallback = Duration::days(30);
    match points {
        [.., prev, last] => {
            let delta = last.timestamp - prev.timestamp;
            if delta > Duration::zero() {
                delta
            } else {
                fallback
            }
        }
        _ => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn point(day: u32, value: f64) -> TimeSeriesPoint {
        TimeSeriesPoint::new(Utc.with_ymd_and_hms(2025, 1, day, 0, 0, 0).unwrap(), value)
    }

    #[test]
    fn test_too_short_is_insufficient() {
        let result = prepare(&[point(1, 10.0), point(2, 11.0)]);
        assert!(matches!(
            result,
            Err(ForecastError::InsufficientHistory {
                required: 3,
                actual: 2
            })
        ));
    }

    #[test]
    fn test_unordered_input_is_sorted() {
        let sorted = prepare(&[point(3, 3.0), point(1, 1.0), point(2, 2.0)]).unwrap();
        assert_eq!(values(&sorted), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_cadence_uses_last_spacing() {
        let sorted = prepare(&[point(1, 1.0), point(2, 2.0), point(9, 3.0)]).unwrap();
        assert_eq!(cadence(&sorted), Duration::days(7));
    }
}
