//! Sweep result reporting.

use chrono::{DateTime, Utc};
use rf_types::{GearAssignment, RotationPlan};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The winning loadout: a gear assignment, its best rotation, and the
/// damage per time unit it achieves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadoutResult {
    pub gear: GearAssignment,
    pub plan: RotationPlan,
    pub dps: f64,
}

impl LoadoutResult {
    pub fn new(gear: GearAssignment, plan: RotationPlan, time_limit: f64) -> Self {
        let dps = plan.total_damage / time_limit;
        Self { gear, plan, dps }
    }
}

/// Record of one complete sweep over every gear combination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepOutcome {
    pub id: Uuid,
    /// Name of the schedule-search strategy used for every combination.
    pub strategy: String,
    pub time_limit: f64,
    pub combos_evaluated: usize,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub best: LoadoutResult,
}

impl SweepOutcome {
    pub fn duration(&self) -> chrono::Duration {
        self.finished_at - self.started_at
    }
}
