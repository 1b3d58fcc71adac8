//! Scenario variables: the adjustable input levers of a simulation.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::axis::Axis;

/// The shape of a variable's value space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum VariableKind {
    /// Real-valued lever on a declared `[min, max]` range with a UI step hint.
    Continuous { min: f64, max: f64, step: f64 },
    /// On/off lever.
    Boolean,
    /// Ordered choice among named categories.
    Categorical { categories: Vec<String> },
}

/// A concrete value for one variable in one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VariableValue {
    Boolean(bool),
    Continuous(f64),
    /// Index into the variable's ordered category list.
    Categorical(usize),
}

/// An adjustable input lever with a declared impact on one or more axes.
///
/// Definitions are created at engine construction (or via explicit update
/// operations) and are never mutated inside a simulation run. Impact keys are
/// `Axis` values, so axis validity holds by construction; coefficients are
/// unrestricted reals and the engine does not validate their magnitude.
/// `dependencies` is declarative metadata for the presentation layer only —
/// variables are always evaluated independently per trial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioVariable {
    /// Unique key referencing this variable in assignments and effects.
    pub key: String,
    /// Human-readable label.
    pub label: String,
    pub kind: VariableKind,
    /// Neutral/default value for this lever.
    pub default_value: VariableValue,
    /// Per-axis impact coefficients, calibrated against a 0–100 input range.
    pub impact: BTreeMap<Axis, f64>,
    /// Keys of variables this one depends on. Metadata only.
    #[serde(default)]
    pub dependencies: BTreeSet<String>,
}

impl ScenarioVariable {
    /// A continuous variable with the given range. Default value 0.
    pub fn continuous(key: impl Into<String>, min: f64, max: f64, step: f64) -> Self {
        Self {
            key: key.into(),
            label: String::new(),
            kind: VariableKind::Continuous { min, max, step },
            default_value: VariableValue::Continuous(0.0),
            impact: BTreeMap::new(),
            dependencies: BTreeSet::new(),
        }
    }

    /// A boolean variable, default off.
    pub fn boolean(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: String::new(),
            kind: VariableKind::Boolean,
            default_value: VariableValue::Boolean(false),
            impact: BTreeMap::new(),
            dependencies: BTreeSet::new(),
        }
    }

    /// A categorical variable over the given ordered categories, defaulting to
    /// the first category.
    pub fn categorical<I, S>(key: impl Into<String>, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            key: key.into(),
            label: String::new(),
            kind: VariableKind::Categorical {
                categories: categories.into_iter().map(Into::into).collect(),
            },
            default_value: VariableValue::Categorical(0),
            impact: BTreeMap::new(),
            dependencies: BTreeSet::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_default(mut self, value: VariableValue) -> Self {
        self.default_value = value;
        self
    }

    /// Add an impact coefficient for one axis.
    pub fn with_impact(mut self, axis: Axis, coefficient: f64) -> Self {
        self.impact.insert(axis, coefficient);
        self
    }

    pub fn with_dependency(mut self, key: impl Into<String>) -> Self {
        self.dependencies.insert(key.into());
        self
    }
}

/// Variable key → chosen value for one evaluation.
///
/// Keys that do not match a registered variable are silently skipped during
/// evaluation (documented permissive policy); registered variables absent from
/// the assignment contribute nothing.
pub type VariableAssignment = BTreeMap<String, VariableValue>;
