//! # rf-optimizer
//!
//! Loadout optimization for RotaForge.
//!
//! Enumerates every gear assignment for a skill roster (one cooldown percent
//! per skill, full Cartesian product), runs a schedule search for each, and
//! keeps the best loadout: highest total damage, with damage ties broken by
//! the cheaper gear investment.

mod enumerator;
mod optimizer;
mod report;

pub use enumerator::{combo_count, GearComboIter};
pub use optimizer::LoadoutOptimizer;
pub use report::{LoadoutResult, SweepOutcome};
