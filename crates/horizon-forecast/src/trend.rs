//! Linear trend detection: OLS slope, direction, strength, change points.

use horizon_core::models::{TrendAnalysis, TrendDirection};

/// Slope magnitude below which the series counts as stable.
const STABLE_SLOPE_THRESHOLD: f64 = 0.1;

/// Level shift (in score points) both neighbor averages must exceed for a
/// change point.
const CHANGE_POINT_THRESHOLD: f64 = 10.0;

/// Fit an ordinary-least-squares line of value vs. index and classify it.
///
/// Callers guarantee at least 3 points. Strength is `|slope| / (max − min)`
/// clamped to [0, 1], 0 for a flat series.
pub fn analyze(values: &[f64]) -> TrendAnalysis {
    let slope = ols_slope(values);
    let direction = if slope > STABLE_SLOPE_THRESHOLD {
        TrendDirection::Up
    } else if slope < -STABLE_SLOPE_THRESHOLD {
        TrendDirection::Down
    } else {
        TrendDirection::Stable
    };

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;
    let strength = if range > 0.0 {
        (slope.abs() / range).clamp(0.0, 1.0)
    } else {
        0.0
    };

    TrendAnalysis {
        direction,
        slope,
        strength,
        change_points: change_points(values),
    }
}

/// OLS slope of value against index.
fn ols_slope(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let mean_x = (n - 1.0) / 2.0;
    let mean_y = values.iter().sum::<f64>() / n;

    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for (i, &y) in values.iter().enumerate() {
        let dx = i as f64 - mean_x;
        numerator += dx * (y - mean_y);
        denominator += dx * dx;
    }
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Interior indices where the level shifts abruptly: the 2-point averages on
/// both sides each differ from the point by more than the threshold.
fn change_points(values: &[f64]) -> Vec<usize> {
    let n = values.len();
    let mut points = Vec::new();
    if n < 5 {
        return points;
    }
    for i in 2..=(n - 3) {
        let before = (values[i - 2] + values[i - 1]) / 2.0;
        let after = (values[i + 1] + values[i + 2]) / 2.0;
        if (before - values[i]).abs() > CHANGE_POINT_THRESHOLD
            && (after - values[i]).abs() > CHANGE_POINT_THRESHOLD
        {
            points.push(i);
        }
    }
    points
}
