//! Deterministic base-impact calculation.
//!
//! Pure function from a variable assignment to per-axis scores. No clamping
//! to [0, 100] happens here; that is applied only at the end of a full
//! evaluation.

use tracing::debug;

use horizon_core::{AxisScores, ScenarioVariable, VariableAssignment, VariableKind, VariableValue};

use crate::registry::VariableRegistry;

/// Compute per-axis scores from the baseline plus every variable's base
/// contribution.
///
/// Contribution rules (coefficients are calibrated against a 0–100 input
/// range):
/// - continuous: `coefficient × (value / 100)`, value clamped to the declared
///   range first;
/// - boolean: full coefficient when true, zero when false;
/// - categorical: `coefficient × position`, where position maps the first
///   category to −1, the last to +1, the midpoint to 0 (single category ⇒ 1).
///
/// Unknown assignment keys and value/kind mismatches are skipped silently
/// (traced at debug level); this permissive policy is deliberate for an
/// exploratory what-if tool.
pub fn compute_base_impact(
    registry: &VariableRegistry,
    baseline: &AxisScores,
    assignment: &VariableAssignment,
) -> AxisScores {
    let mut scores = *baseline;

    for (key, value) in assignment {
        let Some(variable) = registry.variable(key) else {
            debug!(key = %key, "skipping unknown variable in assignment");
            continue;
        };
        let Some(factor) = contribution_factor(variable, *value) else {
            debug!(key = %key, "skipping value that does not match variable kind");
            continue;
        };
        for (&axis, &coefficient) in &variable.impact {
            scores.add(axis, coefficient * factor);
        }
    }

    scores
}

/// The scaling factor a value contributes against each impact coefficient.
///
/// Returns `None` when the value's shape does not match the variable's kind.
pub fn contribution_factor(variable: &ScenarioVariable, value: VariableValue) -> Option<f64> {
    match (&variable.kind, value) {
        (VariableKind::Continuous { min, max, .. }, VariableValue::Continuous(v)) => {
            Some(clamp_to_range(&variable.key, v, *min, *max) / 100.0)
        }
        (VariableKind::Boolean, VariableValue::Boolean(b)) => Some(if b { 1.0 } else { 0.0 }),
        (VariableKind::Categorical { categories }, VariableValue::Categorical(index)) => {
            let len = categories.len();
            if len <= 1 {
                return Some(1.0);
            }
            let index = index.min(len - 1);
            Some((index as f64 / (len - 1) as f64) * 2.0 - 1.0)
        }
        _ => None,
    }
}

/// Clamp a continuous value into its declared range, tracing when it was out
/// of range so the caller can observe the silent-clamp policy.
pub fn clamp_to_range(key: &str, value: f64, min: f64, max: f64) -> f64 {
    let clamped = value.clamp(min, max);
    if clamped != value {
        debug!(key = %key, value, min, max, "clamped out-of-range variable value");
    }
    clamped
}

#[cfg(test)]
mod tests {
    use super::*;
    use horizon_core::Axis;

    fn baseline() -> AxisScores {
        [
            (Axis::Financial, 75.0),
            (Axis::Operational, 45.0),
            (Axis::Market, 85.0),
            (Axis::Team, 60.0),
            (Axis::Innovation, 65.0),
        ]
        .into_iter()
        .collect()
    }

    fn team_expansion_registry() -> VariableRegistry {
        let mut registry = VariableRegistry::new();
        registry.insert_variable(
            ScenarioVariable::continuous("team_expansion", -30.0, 100.0, 5.0)
                .with_impact(Axis::Market, 0.4)
                .with_impact(Axis::Innovation, 0.3)
                .with_impact(Axis::Operational, -0.1),
        );
        registry
    }

    #[test]
    fn test_zero_value_leaves_baseline() {
        let registry = team_expansion_registry();
        let mut assignment = VariableAssignment::new();
        assignment.insert("team_expansion".into(), VariableValue::Continuous(0.0));
        let scores = compute_base_impact(&registry, &baseline(), &assignment);
        assert_eq!(scores, baseline());
    }

    #[test]
    fn test_half_value_contributes_half_coefficient() {
        let registry = team_expansion_registry();
        let mut assignment = VariableAssignment::new();
        assignment.insert("team_expansion".into(), VariableValue::Continuous(50.0));
        let scores = compute_base_impact(&registry, &baseline(), &assignment);
        assert!((scores.get(Axis::Market) - 85.2).abs() < 1e-9);
        assert!((scores.get(Axis::Innovation) - 65.15).abs() < 1e-9);
        assert!((scores.get(Axis::Operational) - 44.95).abs() < 1e-9);
        assert_eq!(scores.get(Axis::Financial), 75.0);
    }

    #[test]
    fn test_boolean_full_or_nothing() {
        let mut registry = VariableRegistry::new();
        registry
            .insert_variable(ScenarioVariable::boolean("launch").with_impact(Axis::Market, 5.0));
        let mut assignment = VariableAssignment::new();

        assignment.insert("launch".into(), VariableValue::Boolean(true));
        let on = compute_base_impact(&registry, &baseline(), &assignment);
        assert!((on.get(Axis::Market) - 90.0).abs() < 1e-9);

        assignment.insert("launch".into(), VariableValue::Boolean(false));
        let off = compute_base_impact(&registry, &baseline(), &assignment);
        assert_eq!(off.get(Axis::Market), 85.0);
    }

    #[test]
    fn test_categorical_position_mapping() {
        let variable = ScenarioVariable::categorical("pace", ["slow", "steady", "fast"]);
        assert_eq!(
            contribution_factor(&variable, VariableValue::Categorical(0)),
            Some(-1.0)
        );
        assert_eq!(
            contribution_factor(&variable, VariableValue::Categorical(1)),
            Some(0.0)
        );
        assert_eq!(
            contribution_factor(&variable, VariableValue::Categorical(2)),
            Some(1.0)
        );
        // Out-of-range index clamps to the last category.
        assert_eq!(
            contribution_factor(&variable, VariableValue::Categorical(9)),
            Some(1.0)
        );
    }

    #[test]
    fn test_single_category_is_full_weight() {
        let variable = ScenarioVariable::categorical("only", ["one"]);
        assert_eq!(
            contribution_factor(&variable, VariableValue::Categorical(0)),
            Some(1.0)
        );
    }

    #[test]
    fn test_unknown_key_skipped() {
        let registry = team_expansion_registry();
        let mut assignment = VariableAssignment::new();
        assignment.insert("not_registered".into(), VariableValue::Continuous(80.0));
        let scores = compute_base_impact(&registry, &baseline(), &assignment);
        assert_eq!(scores, baseline());
    }

    #[test]
    fn test_out_of_range_value_clamped() {
        let registry = team_expansion_registry();
        let mut assignment = VariableAssignment::new();
        assignment.insert("team_expansion".into(), VariableValue::Continuous(500.0));
        let scores = compute_base_impact(&registry, &baseline(), &assignment);
        // Clamped to max 100 → full coefficient.
        assert!((scores.get(Axis::Market) - 85.4).abs() < 1e-9);
    }
}
