//! Calendar-month seasonality detection via variance-ratio analysis.

use statrs::statistics::Statistics;

use horizon_core::constants::{MIN_SEASONAL_HISTORY, SEASONAL_PERIOD};
use horizon_core::models::{SeasonalityAnalysis, TimeSeriesPoint};

use chrono::Datelike;

/// Variance ratio above which seasonality counts as detected.
const DETECTION_THRESHOLD: f64 = 0.1;

/// Detect a monthly seasonal component.
///
/// Requires at least 12 points; shorter series report no seasonality. Values
/// are bucketed by calendar month, and strength is the variance of the
/// monthly means over the total sample variance (0 when the series is flat).
/// The period is fixed at 12.
pub fn analyze(points: &[TimeSeriesPoint]) -> SeasonalityAnalysis {
    if points.len() < MIN_SEASONAL_HISTORY {
        return SeasonalityAnalysis::none();
    }

    let mut buckets: [Vec<f64>; SEASONAL_PERIOD] = Default::default();
    for point in points {
        buckets[point.timestamp.month0() as usize].push(point.value);
    }

    let all_values: Vec<f64> = points.iter().map(|p| p.value).collect();
    let overall_mean = all_values.iter().mean();
    let total_variance = all_values.iter().population_variance();

    let monthly_means: Vec<f64> = buckets
        .iter()
        .filter(|bucket| !bucket.is_empty())
        .map(|bucket| bucket.iter().mean())
        .collect();
    let seasonal_variance = monthly_means.iter().population_variance();

    let strength = if total_variance > 0.0 {
        seasonal_variance / total_variance
    } else {
        0.0
    };

    let mut monthly_profile = [0.0; SEASONAL_PERIOD];
    for (month, bucket) in buckets.iter().enumerate() {
        if !bucket.is_empty() {
            monthly_profile[month] = bucket.iter().mean() - overall_mean;
        }
    }

    SeasonalityAnalysis {
        detected: strength > DETECTION_THRESHOLD,
        period: SEASONAL_PERIOD,
        strength,
        monthly_profile,
    }
}
