use serde::{Deserialize, Serialize};

/// A concrete cast ordering with its accumulated damage.
///
/// `sequence` holds skill names in cast order; `total_damage` is the sum of
/// the damage of every cast in the sequence. Search strategies return plans,
/// the replay checker verifies them against roster timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RotationPlan {
    pub sequence: Vec<String>,
    pub total_damage: f64,
}

impl RotationPlan {
    pub fn new(sequence: Vec<String>, total_damage: f64) -> Self {
        Self {
            sequence,
            total_damage,
        }
    }

    /// The zero-damage plan with no casts. Legal in any window.
    pub fn empty() -> Self {
        Self {
            sequence: Vec::new(),
            total_damage: 0.0,
        }
    }

    pub fn cast_count(&self) -> usize {
        self.sequence.len()
    }
}

impl Default for RotationPlan {
    fn default() -> Self {
        Self::empty()
    }
}
