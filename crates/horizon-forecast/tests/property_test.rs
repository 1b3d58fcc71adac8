use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use horizon_core::models::TimeSeriesPoint;
use horizon_core::ForecastConfig;
use horizon_forecast::ForecastEngine;

fn monthly_series(values: &[f64]) -> Vec<TimeSeriesPoint> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let year = 2024 + (i / 12) as i32;
            let month = (i % 12) as u32 + 1;
            TimeSeriesPoint::new(Utc.with_ymd_and_hms(year, month, 1, 0, 0, 0).unwrap(), v)
        })
        .collect()
}

proptest! {
    // Bound width never shrinks with the horizon, for any model and any
    // admissible history.
    #[test]
    fn bound_width_monotone_in_step(
        values in prop::collection::vec(0.0f64..100.0, 3..36),
        model_index in 0usize..4,
        periods in 1usize..16,
    ) {
        let model = ["linear", "polynomial", "exponential", "arima"][model_index];
        let engine = ForecastEngine::new(ForecastConfig {
            model: model.to_string(),
            periods,
        });
        let result = engine.forecast(&monthly_series(&values), None).unwrap();

        let widths: Vec<f64> = result
            .predictions
            .iter()
            .map(|p| p.upper_bound - p.lower_bound)
            .collect();
        prop_assert_eq!(widths.len(), periods);
        for pair in widths.windows(2) {
            prop_assert!(pair[1] >= pair[0] - 1e-12);
        }
    }

    // Projected values are always clamped to the score range; confidence is
    // floored and never exceeds the model's base confidence.
    #[test]
    fn projection_stays_in_range_with_floored_confidence(
        values in prop::collection::vec(0.0f64..100.0, 3..36),
        periods in 1usize..24,
    ) {
        let engine = ForecastEngine::new(ForecastConfig {
            model: "exponential".to_string(),
            periods,
        });
        let result = engine.forecast(&monthly_series(&values), None).unwrap();

        for point in &result.predictions {
            prop_assert!((0.0..=100.0).contains(&point.value));
            prop_assert!((0.1..=1.0).contains(&point.confidence));
        }
    }
}
