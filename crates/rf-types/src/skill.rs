use serde::{Deserialize, Serialize};
use std::fmt;

/// Tolerance for time-boundary and damage-tie comparisons.
///
/// Cast-end times are sums of f64 cast times and scaled cooldowns, so exact
/// comparison against the window would accept or reject casts on rounding
/// noise alone. Every component compares through this one value.
pub const TIME_EPSILON: f64 = 1e-9;

/// A repeatable timed skill: fixed cast time, base cooldown and flat damage,
/// plus the discrete cooldown-gear percents available for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Seconds the cast occupies on the timeline.
    pub cast_time: f64,
    /// Base seconds between the end of a cast and the next availability.
    pub cooldown: f64,
    /// Damage dealt per completed cast.
    pub damage: f64,
    /// Candidate cooldown-reduction percents, each in `[0, 100)`.
    pub gear_options: Vec<f64>,
}

impl Skill {
    /// Creates a skill with the ungeared option (`0.0`) only.
    pub fn new(name: &str, cast_time: f64, cooldown: f64, damage: f64) -> Self {
        Self {
            name: name.to_string(),
            cast_time,
            cooldown,
            damage,
            gear_options: vec![0.0],
        }
    }

    pub fn with_gear_options(mut self, options: Vec<f64>) -> Self {
        self.gear_options = options;
        self
    }

    /// Cooldown after applying a gear percent: `cooldown * (1 - pct/100)`.
    ///
    /// Non-negative for any validated percent; a negative result indicates a
    /// validation gap upstream, not a runtime condition.
    pub fn effective_cooldown(&self, gear_percent: f64) -> f64 {
        let effective = self.cooldown * (1.0 - gear_percent / 100.0);
        debug_assert!(
            effective >= 0.0,
            "negative effective cooldown for '{}' at {gear_percent}%",
            self.name
        );
        effective
    }
}

/// One chosen gear percent per roster index. Immutable once enumerated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GearAssignment {
    pub percents: Vec<f64>,
}

impl GearAssignment {
    pub fn new(percents: Vec<f64>) -> Self {
        Self { percents }
    }

    pub fn len(&self) -> usize {
        self.percents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.percents.is_empty()
    }

    /// Summed gear percents, the investment cost used to break damage ties.
    pub fn cost(&self) -> f64 {
        self.percents.iter().sum()
    }
}

impl fmt::Display for GearAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, pct) in self.percents.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{pct}")?;
        }
        write!(f, "]")
    }
}
