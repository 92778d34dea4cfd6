//! # rf-engine
//!
//! Rotation schedule search for RotaForge.
//!
//! Given a validated skill roster, one gear assignment and a time limit, a
//! [`ScheduleSearch`] finds a high-damage cast ordering. Two strategies are
//! provided: [`ExhaustiveSearch`] (exact branch-and-bound, exponential cost)
//! and [`BoundedFrontierSearch`] (approximate, capacity-bounded frontier).
//! [`replay`] re-derives cast timings for a finished plan so callers can
//! display or verify it.

mod exhaustive;
mod frontier;
mod replay;
mod retention;

pub use exhaustive::ExhaustiveSearch;
pub use frontier::BoundedFrontierSearch;
pub use replay::{replay, CastEvent, Timeline};
pub use retention::RetentionHeap;

use rf_types::{GearAssignment, RfResult, RotationPlan, Skill};

/// Common contract for schedule search strategies.
///
/// Implementations are deterministic for fixed inputs and have no side
/// effects beyond the returned plan. Inputs are validated on entry; invalid
/// rosters, assignments or time limits fail fast instead of producing a
/// zero-damage plan.
pub trait ScheduleSearch: Send + Sync {
    /// Find the best cast ordering for one gear assignment within the window.
    fn plan(
        &self,
        skills: &[Skill],
        gear: &GearAssignment,
        time_limit: f64,
    ) -> RfResult<RotationPlan>;

    /// Human-readable strategy name.
    fn name(&self) -> &'static str;
}
