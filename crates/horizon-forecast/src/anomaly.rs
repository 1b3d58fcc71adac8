//! Z-score anomaly flagging over a historical series.

use statrs::statistics::Statistics;

use horizon_core::constants::{ANOMALY_Z_THRESHOLD, MIN_ANOMALY_HISTORY};
use horizon_core::models::{Anomaly, TimeSeriesPoint};

/// Flag points whose z-score exceeds the threshold.
///
/// Requires at least 5 points; fewer (or a zero-variance series) yields no
/// anomalies. Severity maps the z-score onto [0, 1] as `min(1, z / 3)`.
pub fn detect(points: &[TimeSeriesPoint]) -> Vec<Anomaly> {
    if points.len() < MIN_ANOMALY_HISTORY {
        return Vec::new();
    }

    let values: Vec<f64> = points.iter().map(|p| p.value).collect();
    let mean = values.iter().mean();
    let std_dev = values.iter().population_std_dev();
    if std_dev <= 0.0 || !std_dev.is_finite() {
        return Vec::new();
    }

    points
        .iter()
        .enumerate()
        .filter_map(|(index, point)| {
            let z = (point.value - mean).abs() / std_dev;
            (z > ANOMALY_Z_THRESHOLD).then(|| Anomaly {
                index,
                timestamp: point.timestamp,
                value: point.value,
                z_score: z,
                severity: (z / 3.0).min(1.0),
            })
        })
        .collect()
}
