//! Exact branch-and-bound schedule search.

use crate::ScheduleSearch;
use rf_types::{validate_plan_inputs, GearAssignment, RfResult, RotationPlan, Skill, TIME_EPSILON};
use tracing::debug;

/// Depth-first branch-and-bound over every legal cast ordering.
///
/// Exact: the returned plan carries the maximum achievable damage for the
/// given gear assignment. The cost is exponential in window length, with the
/// roster size as branching factor at every depth, so this is only tractable
/// for small rosters or short windows.
/// [`with_node_budget`](Self::with_node_budget) caps the traversal when a
/// hard stop matters more than exactness.
#[derive(Debug, Clone, Default)]
pub struct ExhaustiveSearch {
    node_budget: Option<u64>,
}

impl ExhaustiveSearch {
    pub fn new() -> Self {
        Self { node_budget: None }
    }

    /// Stops the traversal after visiting `nodes` states and returns the
    /// best plan found so far. Exactness holds only when no budget is set.
    pub fn with_node_budget(mut self, nodes: u64) -> Self {
        self.node_budget = Some(nodes);
        self
    }
}

impl ScheduleSearch for ExhaustiveSearch {
    fn plan(
        &self,
        skills: &[Skill],
        gear: &GearAssignment,
        time_limit: f64,
    ) -> RfResult<RotationPlan> {
        validate_plan_inputs(skills, gear, time_limit)?;

        let effective_cooldowns: Vec<f64> = skills
            .iter()
            .zip(&gear.percents)
            .map(|(skill, &pct)| skill.effective_cooldown(pct))
            .collect();

        let mut traversal = Traversal {
            skills,
            effective_cooldowns,
            time_limit,
            node_budget: self.node_budget,
            nodes_visited: 0,
            next_free: vec![0.0; skills.len()],
            sequence: Vec::new(),
            best_damage: 0.0,
            best_sequence: Vec::new(),
        };
        traversal.descend(0.0, 0.0);

        debug!(
            "exhaustive search done: {} nodes, best damage {}",
            traversal.nodes_visited, traversal.best_damage
        );

        let sequence = traversal
            .best_sequence
            .iter()
            .map(|&ix| skills[ix].name.clone())
            .collect();
        Ok(RotationPlan::new(sequence, traversal.best_damage))
    }

    fn name(&self) -> &'static str {
        "exhaustive"
    }
}

/// One search run. `next_free` and `sequence` are mutated on the way down a
/// branch and restored before trying the next sibling, so sibling branches
/// never observe each other's casts.
struct Traversal<'a> {
    skills: &'a [Skill],
    effective_cooldowns: Vec<f64>,
    time_limit: f64,
    node_budget: Option<u64>,
    nodes_visited: u64,
    next_free: Vec<f64>,
    sequence: Vec<usize>,
    best_damage: f64,
    best_sequence: Vec<usize>,
}

impl Traversal<'_> {
    fn budget_exhausted(&self) -> bool {
        self.node_budget
            .is_some_and(|budget| self.nodes_visited >= budget)
    }

    fn descend(&mut self, now: f64, damage: f64) {
        self.nodes_visited += 1;
        if damage > self.best_damage {
            self.best_damage = damage;
            self.best_sequence = self.sequence.clone();
        }

        for ix in 0..self.skills.len() {
            if self.budget_exhausted() {
                return;
            }

            let earliest = self.next_free[ix];
            if earliest > self.time_limit {
                continue;
            }
            let start = now.max(earliest);
            let end = start + self.skills[ix].cast_time;
            if end > self.time_limit + TIME_EPSILON {
                continue;
            }

            self.next_free[ix] = end + self.effective_cooldowns[ix];
            self.sequence.push(ix);
            self.descend(end, damage + self.skills[ix].damage);
            self.sequence.pop();
            self.next_free[ix] = earliest;
        }
    }
}
