//! The five fixed outcome axes and dense per-axis score storage.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{AXIS_COUNT, SCORE_MAX, SCORE_MIN};

/// One of the five fixed outcome dimensions.
///
/// The set is closed: every score map in the engine is dense over these five
/// axes, and `Axis::ALL` is the canonical iteration order everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Financial health ("FN").
    #[serde(rename = "FN")]
    Financial,
    /// Operational efficiency ("OP").
    #[serde(rename = "OP")]
    Operational,
    /// Market position ("MK").
    #[serde(rename = "MK")]
    Market,
    /// Team strength ("TM").
    #[serde(rename = "TM")]
    Team,
    /// Innovation capacity ("IN").
    #[serde(rename = "IN")]
    Innovation,
}

impl Axis {
    /// All axes in canonical order.
    pub const ALL: [Axis; AXIS_COUNT] = [
        Axis::Financial,
        Axis::Operational,
        Axis::Market,
        Axis::Team,
        Axis::Innovation,
    ];

    /// Stable two-letter code used in serialized output.
    pub fn code(self) -> &'static str {
        match self {
            Axis::Financial => "FN",
            Axis::Operational => "OP",
            Axis::Market => "MK",
            Axis::Team => "TM",
            Axis::Innovation => "IN",
        }
    }

    /// Parse a two-letter code. Returns `None` for unknown codes.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "FN" => Some(Axis::Financial),
            "OP" => Some(Axis::Operational),
            "MK" => Some(Axis::Market),
            "TM" => Some(Axis::Team),
            "IN" => Some(Axis::Innovation),
            _ => None,
        }
    }

    /// Position of this axis in `Axis::ALL`.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Dense per-axis score map.
///
/// Serialized as a `{ "FN": 75.0, ... }` object; stored as a fixed array
/// indexed by `Axis::index`. Scores are free reals during evaluation and are
/// clamped into [0, 100] only at the end of a full evaluation via [`AxisScores::clamped`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "AxisScoreMap", into = "AxisScoreMap")]
pub struct AxisScores([f64; AXIS_COUNT]);

impl AxisScores {
    /// All-zero scores.
    pub fn zero() -> Self {
        Self([0.0; AXIS_COUNT])
    }

    /// Uniform scores.
    pub fn uniform(value: f64) -> Self {
        Self([value; AXIS_COUNT])
    }

    pub fn get(&self, axis: Axis) -> f64 {
        self.0[axis.index()]
    }

    pub fn set(&mut self, axis: Axis, value: f64) {
        self.0[axis.index()] = value;
    }

    /// Add a delta to one axis.
    pub fn add(&mut self, axis: Axis, delta: f64) {
        self.0[axis.index()] += delta;
    }

    /// Multiply one axis by a factor.
    pub fn scale(&mut self, axis: Axis, factor: f64) {
        self.0[axis.index()] *= factor;
    }

    /// A copy with every score clamped into [0, 100].
    pub fn clamped(&self) -> Self {
        let mut out = *self;
        for v in out.0.iter_mut() {
            *v = v.clamp(SCORE_MIN, SCORE_MAX);
        }
        out
    }

    /// Iterate `(axis, score)` in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Axis, f64)> + '_ {
        Axis::ALL.iter().map(move |&a| (a, self.get(a)))
    }
}

impl FromIterator<(Axis, f64)> for AxisScores {
    fn from_iter<T: IntoIterator<Item = (Axis, f64)>>(iter: T) -> Self {
        let mut scores = Self::zero();
        for (axis, value) in iter {
            scores.set(axis, value);
        }
        scores
    }
}

/// Serde surrogate so `AxisScores` round-trips as a code-keyed object.
#[derive(Serialize, Deserialize)]
struct AxisScoreMap(std::collections::BTreeMap<Axis, f64>);

impl From<AxisScoreMap> for AxisScores {
    fn from(map: AxisScoreMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl From<AxisScores> for AxisScoreMap {
    fn from(scores: AxisScores) -> Self {
        AxisScoreMap(scores.iter().collect())
    }
}
