//! Loadout sweep: one schedule search per gear combination, best kept.

use crate::enumerator::{combo_count, GearComboIter};
use crate::report::{LoadoutResult, SweepOutcome};
use chrono::Utc;
use rayon::prelude::*;
use rf_engine::ScheduleSearch;
use rf_types::{
    config_error, validate_roster, validate_time_limit, GearAssignment, RfResult, RotationPlan,
    Skill, TIME_EPSILON,
};
use tracing::{debug, info};
use uuid::Uuid;

/// Running best across combinations. Replaced on strictly higher damage; a
/// damage tie within [`TIME_EPSILON`] goes to the cheaper gear investment,
/// and the earlier combination wins otherwise.
struct Champion {
    gear: GearAssignment,
    plan: RotationPlan,
    cost: f64,
}

impl Champion {
    fn new(gear: GearAssignment, plan: RotationPlan) -> Self {
        Self {
            cost: gear.cost(),
            gear,
            plan,
        }
    }

    fn challenge(&mut self, gear: GearAssignment, plan: RotationPlan) {
        let cost = gear.cost();
        if plan.total_damage > self.plan.total_damage
            || ((plan.total_damage - self.plan.total_damage).abs() < TIME_EPSILON
                && cost < self.cost)
        {
            self.gear = gear;
            self.plan = plan;
            self.cost = cost;
        }
    }
}

fn crown(champion: &mut Option<Champion>, gear: GearAssignment, plan: RotationPlan) {
    match champion {
        Some(current) => current.challenge(gear, plan),
        None => *champion = Some(Champion::new(gear, plan)),
    }
}

/// Sweeps every gear assignment with one schedule-search strategy and keeps
/// the best loadout.
///
/// Each combination's search is independent; runtime is the combination
/// count times the cost of one search, so check [`combo_count`] before
/// sweeping a large roster with an expensive strategy.
pub struct LoadoutOptimizer {
    strategy: Box<dyn ScheduleSearch>,
}

impl LoadoutOptimizer {
    pub fn new(strategy: Box<dyn ScheduleSearch>) -> Self {
        Self { strategy }
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// Evaluates every combination in enumeration order.
    pub fn optimize(&self, skills: &[Skill], time_limit: f64) -> RfResult<SweepOutcome> {
        validate_roster(skills)?;
        validate_time_limit(time_limit)?;
        let started_at = Utc::now();
        let total = combo_count(skills).map_or_else(|| "?".to_string(), |n| n.to_string());

        let mut champion: Option<Champion> = None;
        let mut combos_evaluated = 0usize;
        for gear in GearComboIter::new(skills) {
            let plan = self.strategy.plan(skills, &gear, time_limit)?;
            combos_evaluated += 1;
            debug!(
                "combo {}/{}: gear {} -> damage {}",
                combos_evaluated, total, gear, plan.total_damage
            );
            crown(&mut champion, gear, plan);
        }

        self.finish(champion, time_limit, combos_evaluated, started_at)
    }

    /// Evaluates combinations on a rayon pool. Purely a performance option:
    /// results are folded in enumeration order afterwards, so the outcome
    /// matches [`optimize`](Self::optimize) exactly.
    pub fn optimize_parallel(&self, skills: &[Skill], time_limit: f64) -> RfResult<SweepOutcome> {
        validate_roster(skills)?;
        validate_time_limit(time_limit)?;
        let started_at = Utc::now();

        let combos: Vec<GearAssignment> = GearComboIter::new(skills).collect();
        let combos_evaluated = combos.len();
        let plans: Vec<(GearAssignment, RotationPlan)> = combos
            .into_par_iter()
            .map(|gear| {
                self.strategy
                    .plan(skills, &gear, time_limit)
                    .map(|plan| (gear, plan))
            })
            .collect::<RfResult<_>>()?;

        let mut champion: Option<Champion> = None;
        for (gear, plan) in plans {
            crown(&mut champion, gear, plan);
        }

        self.finish(champion, time_limit, combos_evaluated, started_at)
    }

    fn finish(
        &self,
        champion: Option<Champion>,
        time_limit: f64,
        combos_evaluated: usize,
        started_at: chrono::DateTime<Utc>,
    ) -> RfResult<SweepOutcome> {
        let champion =
            champion.ok_or_else(|| config_error!("roster admits no gear combination"))?;
        info!(
            "sweep done: {} combos, best damage {} with gear {}",
            combos_evaluated, champion.plan.total_damage, champion.gear
        );
        Ok(SweepOutcome {
            id: Uuid::new_v4(),
            strategy: self.strategy.name().to_string(),
            time_limit,
            combos_evaluated,
            started_at,
            finished_at: Utc::now(),
            best: LoadoutResult::new(champion.gear, champion.plan, time_limit),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use rf_engine::{BoundedFrontierSearch, ExhaustiveSearch};
    use rf_types::{RfError, RosterError};

    fn exhaustive() -> LoadoutOptimizer {
        LoadoutOptimizer::new(Box::new(ExhaustiveSearch::new()))
    }

    #[test]
    fn picks_the_gear_that_fits_more_casts() {
        // Ungeared, two casts fit by t=13 (damage 20); at 50% cooldown
        // reduction a third cast lands at 12-13 (damage 30).
        let skills = vec![Skill::new("Bolt", 1.0, 10.0, 10.0).with_gear_options(vec![0.0, 50.0])];
        let outcome = exhaustive().optimize(&skills, 13.0).unwrap();

        assert_eq!(outcome.combos_evaluated, 2);
        assert_eq!(outcome.best.gear.percents, vec![50.0]);
        assert_eq!(outcome.best.plan.total_damage, 30.0);
        assert!((outcome.best.dps - 30.0 / 13.0).abs() < 1e-12);
    }

    #[test]
    fn damage_tie_goes_to_the_cheaper_gear() {
        // Only one cast fits either way, so both options deal 100 and the
        // free one must win.
        let skills =
            vec![Skill::new("Strike", 1.0, 10.0, 100.0).with_gear_options(vec![0.0, 50.0])];
        let outcome = exhaustive().optimize(&skills, 5.0).unwrap();
        assert_eq!(outcome.best.plan.total_damage, 100.0);
        assert_eq!(outcome.best.gear.percents, vec![0.0]);
    }

    #[test]
    fn tie_break_is_independent_of_option_order() {
        let skills =
            vec![Skill::new("Strike", 1.0, 10.0, 100.0).with_gear_options(vec![50.0, 0.0])];
        let outcome = exhaustive().optimize(&skills, 5.0).unwrap();
        assert_eq!(outcome.best.gear.percents, vec![0.0]);
    }

    #[test]
    fn evaluates_every_combination() {
        let skills = vec![
            Skill::new("A", 1.0, 4.0, 10.0).with_gear_options(vec![0.0, 15.0]),
            Skill::new("B", 1.0, 4.0, 8.0).with_gear_options(vec![0.0, 15.0, 30.0]),
        ];
        let outcome = exhaustive().optimize(&skills, 3.0).unwrap();
        assert_eq!(outcome.combos_evaluated, 6);
        assert_eq!(combo_count(&skills), Some(6));
    }

    #[test]
    fn empty_roster_sweeps_to_an_empty_loadout() {
        let outcome = exhaustive().optimize(&[], 10.0).unwrap();
        assert_eq!(outcome.combos_evaluated, 1);
        assert_eq!(outcome.best.plan, RotationPlan::empty());
        assert_eq!(outcome.best.dps, 0.0);
        assert!(outcome.best.gear.is_empty());
    }

    #[test]
    fn parallel_sweep_matches_sequential() {
        let mut rng = StdRng::seed_from_u64(11);
        let skills: Vec<Skill> = (0..3)
            .map(|ix| {
                Skill::new(
                    &format!("skill-{ix}"),
                    rng.random_range(0.8..2.0),
                    rng.random_range(1.0..6.0),
                    rng.random_range(1..100) as f64,
                )
                .with_gear_options(vec![0.0, 15.0, 30.0])
            })
            .collect();

        let optimizer = exhaustive();
        let sequential = optimizer.optimize(&skills, 5.0).unwrap();
        let parallel = optimizer.optimize_parallel(&skills, 5.0).unwrap();

        assert_eq!(parallel.best, sequential.best);
        assert_eq!(parallel.combos_evaluated, sequential.combos_evaluated);
    }

    #[test]
    fn frontier_strategy_drives_the_same_sweep() {
        let skills = vec![Skill::new("Bolt", 1.0, 10.0, 10.0).with_gear_options(vec![0.0, 50.0])];
        let optimizer = LoadoutOptimizer::new(Box::new(BoundedFrontierSearch::new()));
        assert_eq!(optimizer.strategy_name(), "bounded-frontier");

        // A single-skill cast chain has one state per depth, well under the
        // default retention, so the frontier sweep is exact here too.
        let outcome = optimizer.optimize(&skills, 13.0).unwrap();
        assert_eq!(outcome.strategy, "bounded-frontier");
        assert_eq!(outcome.best.plan.total_damage, 30.0);
        assert_eq!(outcome.best.gear.percents, vec![50.0]);
    }

    #[test]
    fn invalid_roster_is_rejected_before_the_sweep() {
        let skills = vec![Skill::new("Broken", -1.0, 5.0, 10.0)];
        let err = exhaustive().optimize(&skills, 10.0).unwrap_err();
        assert!(matches!(
            err,
            RfError::Roster(RosterError::InvalidCastTime { .. })
        ));

        let skills = vec![Skill::new("Bolt", 1.0, 5.0, 10.0)];
        let err = exhaustive().optimize(&skills, -2.0).unwrap_err();
        assert!(matches!(
            err,
            RfError::Roster(RosterError::InvalidTimeLimit { .. })
        ));
    }

    #[test]
    fn strategy_config_errors_propagate_from_the_sweep() {
        let skills = vec![Skill::new("Bolt", 1.0, 5.0, 10.0)];
        let optimizer =
            LoadoutOptimizer::new(Box::new(BoundedFrontierSearch::new().with_retention(0)));
        assert!(matches!(
            optimizer.optimize(&skills, 10.0).unwrap_err(),
            RfError::Config(_)
        ));
        assert!(matches!(
            optimizer.optimize_parallel(&skills, 10.0).unwrap_err(),
            RfError::Config(_)
        ));
    }

    #[test]
    fn repeated_sweeps_pick_the_same_loadout() {
        let skills = vec![
            Skill::new("A", 1.0, 4.0, 10.0).with_gear_options(vec![0.0, 15.0]),
            Skill::new("B", 1.0, 4.0, 8.0).with_gear_options(vec![0.0, 30.0]),
        ];
        let optimizer = exhaustive();
        let first = optimizer.optimize(&skills, 4.0).unwrap();
        let second = optimizer.optimize(&skills, 4.0).unwrap();
        assert_eq!(first.best, second.best);
    }
}
