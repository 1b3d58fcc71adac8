//! Interaction effects: conditional cross-variable rules that multiply axis scores.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::axis::Axis;
use crate::errors::{SimulationError, SimulationResult};
use crate::variable::VariableAssignment;

/// Advisory classification of an interaction effect.
///
/// `Synergy`/`Amplifying` effects typically carry a magnitude above 1 and
/// `Conflict`/`Diminishing` below 1, but the engine applies the literal
/// magnitude regardless of kind — the kind exists for the recommendation and
/// presentation layers, not for validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionKind {
    Synergy,
    Conflict,
    Amplifying,
    Diminishing,
}

/// Activation predicate, evaluated against the full current assignment.
///
/// Deliberately given read access to every variable value, not just the
/// effect's own `variables` set, so cross-variable conditions are expressible.
pub type ActivationFn = Arc<dyn Fn(&VariableAssignment) -> bool + Send + Sync>;

/// A conditional rule that multiplies one or more axes' scores when its
/// activation predicate holds.
#[derive(Clone)]
pub struct InteractionEffect {
    /// Stable identifier, unique within a registry.
    pub id: String,
    /// Human-readable label.
    pub label: String,
    /// Keys of the variables this effect conceptually links (at least 2).
    pub variables: BTreeSet<String>,
    pub kind: InteractionKind,
    /// Multiplier applied to every affected axis while active.
    pub magnitude: f64,
    pub affected_axes: BTreeSet<Axis>,
    pub activation: ActivationFn,
}

impl InteractionEffect {
    /// Build an effect. Fails with `InvalidEffect` when fewer than two
    /// variables are referenced.
    pub fn new<V, A>(
        id: impl Into<String>,
        variables: V,
        kind: InteractionKind,
        magnitude: f64,
        affected_axes: A,
        activation: ActivationFn,
    ) -> SimulationResult<Self>
    where
        V: IntoIterator,
        V::Item: Into<String>,
        A: IntoIterator<Item = Axis>,
    {
        let id = id.into();
        let variables: BTreeSet<String> = variables.into_iter().map(Into::into).collect();
        if variables.len() < 2 {
            return Err(SimulationError::InvalidEffect {
                reason: format!("effect '{id}' must reference at least 2 variables"),
            });
        }
        Ok(Self {
            label: id.clone(),
            id,
            variables,
            kind,
            magnitude,
            affected_axes: affected_axes.into_iter().collect(),
            activation,
        })
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Whether this effect is active under the given assignment.
    pub fn is_active(&self, assignment: &VariableAssignment) -> bool {
        (self.activation)(assignment)
    }
}

impl fmt::Debug for InteractionEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InteractionEffect")
            .field("id", &self.id)
            .field("variables", &self.variables)
            .field("kind", &self.kind)
            .field("magnitude", &self.magnitude)
            .field("affected_axes", &self.affected_axes)
            .finish_non_exhaustive()
    }
}
