use std::sync::Arc;

use horizon_core::{
    Axis, AxisScores, InteractionEffect, InteractionKind, ScenarioVariable, SimulationConfig,
    SimulationError, VariableAssignment, VariableValue,
};
use horizon_scenario::{CancelToken, ScenarioEngine, VariableRegistry};

// ── Fixtures ──────────────────────────────────────────────────────────────

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

fn seeded_config(seed: u64) -> SimulationConfig {
    SimulationConfig {
        iterations: 200,
        seed: Some(seed),
        ..Default::default()
    }
}

fn build_registry() -> VariableRegistry {
    let mut registry = VariableRegistry::new();
    registry.insert_variable(
        ScenarioVariable::continuous("team_expansion", -30.0, 100.0, 5.0)
            .with_label("Team expansion")
            .with_impact(Axis::Market, 0.4)
            .with_impact(Axis::Innovation, 0.3)
            .with_impact(Axis::Operational, -0.1),
    );
    registry.insert_variable(
        ScenarioVariable::continuous("marketing_spend", 0.0, 100.0, 1.0)
            .with_impact(Axis::Market, 0.25)
            .with_impact(Axis::Financial, -0.15),
    );
    registry.insert_variable(
        ScenarioVariable::boolean("product_launch").with_impact(Axis::Innovation, 4.0),
    );
    registry
}

fn assignment(team: f64, marketing: f64, launch: bool) -> VariableAssignment {
    let mut map = VariableAssignment::new();
    map.insert("team_expansion".into(), VariableValue::Continuous(team));
    map.insert("marketing_spend".into(), VariableValue::Continuous(marketing));
    map.insert("product_launch".into(), VariableValue::Boolean(launch));
    map
}

// ── Properties from the evaluation pipeline ───────────────────────────────

#[test]
fn baseline_identity_with_neutral_values() {
    let engine = ScenarioEngine::with_default_config(build_registry());
    let projected = engine.evaluate(&baseline(), &assignment(0.0, 0.0, false));
    for axis in Axis::ALL {
        assert!(
            (projected.get(axis) - baseline().get(axis)).abs() < 1e-9,
            "axis {axis} moved without any lever engaged"
        );
    }
}

#[test]
fn scenario_example_team_expansion_at_fifty() {
    let engine = ScenarioEngine::with_default_config(build_registry());
    let mut map = VariableAssignment::new();
    map.insert("team_expansion".into(), VariableValue::Continuous(50.0));
    let projected = engine.evaluate(&baseline(), &map);
    assert!((projected.get(Axis::Market) - 85.2).abs() < 1e-9);
    assert!((projected.get(Axis::Innovation) - 65.15).abs() < 1e-9);
    assert!((projected.get(Axis::Operational) - 44.95).abs() < 1e-9);
}

#[test]
fn confidence_bounds_bracket_point_projection() {
    let mut engine = ScenarioEngine::new(build_registry(), seeded_config(7));
    engine.add_effect(
        InteractionEffect::new(
            "launch_team",
            ["product_launch", "team_expansion"],
            InteractionKind::Synergy,
            1.1,
            [Axis::Innovation],
            Arc::new(|a: &VariableAssignment| {
                matches!(a.get("product_launch"), Some(VariableValue::Boolean(true)))
            }),
        )
        .unwrap(),
    );

    let values = assignment(40.0, 60.0, true);
    let result = engine.run(&baseline(), &values).unwrap();
    let projected = result.projected_scores;

    for axis in Axis::ALL {
        let ci = &result.confidence_intervals[&axis];
        assert!(
            ci.lower <= projected.get(axis) + 1e-9 && projected.get(axis) <= ci.upper + 1e-9,
            "axis {axis}: {} <= {} <= {} violated",
            ci.lower,
            projected.get(axis),
            ci.upper
        );
        let risk = &result.risk_metrics[&axis];
        assert!(risk.worst_case <= risk.best_case);
        assert!(risk.volatility >= 0.0);
        assert!((0.0..=1.0).contains(&risk.probability));
    }
}

#[test]
fn fixed_seed_is_bit_reproducible() {
    let engine = ScenarioEngine::new(build_registry(), seeded_config(1234));
    let values = assignment(35.0, 20.0, false);
    let first = engine.run(&baseline(), &values).unwrap();
    let second = engine.run(&baseline(), &values).unwrap();
    assert_eq!(first.confidence_intervals, second.confidence_intervals);
    assert_eq!(first.risk_metrics, second.risk_metrics);
}

#[test]
fn different_seeds_differ() {
    let values = assignment(35.0, 20.0, false);
    let a = ScenarioEngine::new(build_registry(), seeded_config(1))
        .run(&baseline(), &values)
        .unwrap();
    let b = ScenarioEngine::new(build_registry(), seeded_config(2))
        .run(&baseline(), &values)
        .unwrap();
    assert_ne!(a.risk_metrics, b.risk_metrics);
}

#[test]
fn sensitivity_sign_matches_declared_coefficients() {
    let engine = ScenarioEngine::new(build_registry(), seeded_config(5));
    let result = engine.run(&baseline(), &assignment(40.0, 40.0, false)).unwrap();

    let marketing = &result.sensitivity["marketing_spend"];
    assert!(marketing[&Axis::Market] > 0.0);
    assert!(marketing[&Axis::Financial] < 0.0);
    // Boolean variable never appears in the sensitivity map.
    assert!(!result.sensitivity.contains_key("product_launch"));
}

// ── Error handling ────────────────────────────────────────────────────────

#[test]
fn zero_iterations_is_invalid_config() {
    let config = SimulationConfig {
        iterations: 0,
        ..Default::default()
    };
    let engine = ScenarioEngine::new(build_registry(), config);
    let result = engine.run(&baseline(), &assignment(10.0, 10.0, false));
    assert!(matches!(result, Err(SimulationError::InvalidConfig { .. })));
}

#[test]
fn cancelled_run_returns_no_partial_result() {
    let engine = ScenarioEngine::new(build_registry(), seeded_config(3));
    let token = CancelToken::new();
    token.cancel();
    let result = engine.run_with_cancel(&baseline(), &assignment(10.0, 10.0, false), &token);
    assert!(matches!(result, Err(SimulationError::Cancelled)));
}

// ── Interaction bookkeeping ───────────────────────────────────────────────

#[test]
fn active_effects_are_reported_with_multipliers() {
    let mut engine = ScenarioEngine::new(build_registry(), seeded_config(11));
    engine.add_effect(
        InteractionEffect::new(
            "spend_conflict",
            ["marketing_spend", "team_expansion"],
            InteractionKind::Conflict,
            0.9,
            [Axis::Financial],
            Arc::new(|a: &VariableAssignment| {
                matches!(a.get("marketing_spend"),
                    Some(VariableValue::Continuous(v)) if *v > 50.0)
            }),
        )
        .unwrap(),
    );

    let inactive = engine.run(&baseline(), &assignment(0.0, 30.0, false)).unwrap();
    assert!(inactive.interaction_effects.is_empty());

    let active = engine.run(&baseline(), &assignment(0.0, 80.0, false)).unwrap();
    assert_eq!(active.interaction_effects.len(), 1);
    assert_eq!(active.interaction_effects[0].id, "spend_conflict");
    assert!((active.interaction_multipliers.get(Axis::Financial) - 0.9).abs() < 1e-9);
    assert_eq!(active.interaction_multipliers.get(Axis::Market), 1.0);
}

#[test]
fn result_serializes_to_json() {
    let engine = ScenarioEngine::new(build_registry(), seeded_config(21));
    let result = engine.run(&baseline(), &assignment(25.0, 25.0, true)).unwrap();
    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("projected_scores"));
    assert!(json.contains("\"FN\""));
}
