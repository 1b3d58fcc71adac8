//! Owned registry of variable and interaction-effect definitions.
//!
//! Explicit engine-instance state, injected into every component that needs
//! it. Written only via the update operations below; read-only during any
//! simulation run.

use horizon_core::{
    InteractionEffect, ScenarioVariable, SimulationError, SimulationResult, VariableAssignment,
};

/// Holds `ScenarioVariable` and `InteractionEffect` definitions.
///
/// Variables keep insertion order; effects keep declaration order, which is
/// also their application order when active.
#[derive(Debug, Clone, Default)]
pub struct VariableRegistry {
    variables: Vec<ScenarioVariable>,
    effects: Vec<InteractionEffect>,
}

impl VariableRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a variable definition by key.
    pub fn insert_variable(&mut self, variable: ScenarioVariable) {
        match self.variables.iter_mut().find(|v| v.key == variable.key) {
            Some(existing) => *existing = variable,
            None => self.variables.push(variable),
        }
    }

    /// Replace an existing variable. Fails with `UnknownVariable` when no
    /// definition with that key exists.
    pub fn update_variable(&mut self, variable: ScenarioVariable) -> SimulationResult<()> {
        match self.variables.iter_mut().find(|v| v.key == variable.key) {
            Some(existing) => {
                *existing = variable;
                Ok(())
            }
            None => Err(SimulationError::UnknownVariable {
                key: variable.key,
            }),
        }
    }

    /// Remove a variable definition. Returns the removed definition, if any.
    pub fn remove_variable(&mut self, key: &str) -> Option<ScenarioVariable> {
        let index = self.variables.iter().position(|v| v.key == key)?;
        Some(self.variables.remove(index))
    }

    /// Append or replace an interaction effect by id.
    pub fn insert_effect(&mut self, effect: InteractionEffect) {
        match self.effects.iter_mut().find(|e| e.id == effect.id) {
            Some(existing) => *existing = effect,
            None => self.effects.push(effect),
        }
    }

    pub fn variable(&self, key: &str) -> Option<&ScenarioVariable> {
        self.variables.iter().find(|v| v.key == key)
    }

    pub fn variables(&self) -> &[ScenarioVariable] {
        &self.variables
    }

    pub fn effects(&self) -> &[InteractionEffect] {
        &self.effects
    }

    /// Assignment with every registered variable at its default value.
    pub fn default_assignment(&self) -> VariableAssignment {
        self.variables
            .iter()
            .map(|v| (v.key.clone(), v.default_value))
            .collect()
    }
}
