//! Rule-based recommendation synthesis.
//!
//! A deterministic rule engine, not a learned model: each rule is
//! independently evaluable against the Monte Carlo and sensitivity outputs and
//! produces zero or more items. Generation never fails; degenerate input
//! (empty metrics, all-zero sensitivity) yields an empty list.

use std::collections::BTreeMap;

use horizon_core::constants::OPPORTUNITY_GAP_THRESHOLD;
use horizon_core::models::{Priority, Recommendation, RecommendationCategory, RiskMetrics};
use horizon_core::{Axis, AxisScores};

/// Evaluate all rules and return the findings ranked by priority.
///
/// Rules, in declaration order:
/// 1. risk-mitigation — each axis with volatility above `risk_threshold`;
/// 2. optimization — the single variable with the largest summed absolute
///    sensitivity across axes;
/// 3. opportunity — each axis whose best case exceeds the projection by more
///    than 20 points.
///
/// The final list is sorted by priority descending; ties keep rule order.
pub fn generate_recommendations(
    projected: &AxisScores,
    risk_metrics: &BTreeMap<Axis, RiskMetrics>,
    sensitivity: &BTreeMap<String, BTreeMap<Axis, f64>>,
    risk_threshold: f64,
) -> Vec<Recommendation> {
    let mut items = Vec::new();

    // Rule 1: risk mitigation.
    for axis in Axis::ALL {
        let Some(metrics) = risk_metrics.get(&axis) else {
            continue;
        };
        if metrics.volatility > risk_threshold {
            items.push(Recommendation {
                category: RecommendationCategory::RiskMitigation,
                priority: Priority::High,
                title: format!("Stabilize the {axis} axis"),
                detail: format!(
                    "Simulated volatility on {axis} is {:.1} (threshold {:.1}); outcomes range \
                     from {:.1} to {:.1}. Consider reducing exposure on the levers driving it.",
                    metrics.volatility, risk_threshold, metrics.worst_case, metrics.best_case
                ),
            });
        }
    }

    // Rule 2: optimization — the most influential lever.
    if let Some((key, total)) = most_influential(sensitivity) {
        items.push(Recommendation {
            category: RecommendationCategory::Optimization,
            priority: Priority::High,
            title: format!("'{key}' is the highest-leverage variable"),
            detail: format!(
                "Summed absolute sensitivity across axes is {total:.4} per unit; small changes \
                 to '{key}' move the projection more than any other lever."
            ),
        });
    }

    // Rule 3: unrealized upside.
    for axis in Axis::ALL {
        let Some(metrics) = risk_metrics.get(&axis) else {
            continue;
        };
        let gap = metrics.best_case - projected.get(axis);
        if gap > OPPORTUNITY_GAP_THRESHOLD {
            items.push(Recommendation {
                category: RecommendationCategory::Opportunity,
                priority: Priority::Medium,
                title: format!("Unrealized upside on the {axis} axis"),
                detail: format!(
                    "The best simulated case exceeds the projection by {gap:.1} points \
                     ({:.1} vs {:.1}).",
                    metrics.best_case,
                    projected.get(axis)
                ),
            });
        }
    }

    // Stable sort: priority descending, rule order preserved within ties.
    items.sort_by(|a, b| b.priority.cmp(&a.priority));
    items
}

/// The variable with the largest summed absolute sensitivity, if any is
/// non-zero.
fn most_influential(
    sensitivity: &BTreeMap<String, BTreeMap<Axis, f64>>,
) -> Option<(&str, f64)> {
    let mut best: Option<(&str, f64)> = None;
    for (key, per_axis) in sensitivity {
        let total: f64 = per_axis.values().map(|v| v.abs()).sum();
        if total > 0.0 && best.map_or(true, |(_, t)| total > t) {
            best = Some((key, total));
        }
    }
    best
}
