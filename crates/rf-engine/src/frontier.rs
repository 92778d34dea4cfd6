//! Approximate breadth-first schedule search with bounded retention.
//!
//! States are expanded in FIFO order. Every generated successor is bucketed
//! into a time checkpoint of `floor(cast_end / checkpoint_width)`; each
//! checkpoint keeps at most `retain_per_checkpoint` states ranked by damage,
//! and only retained successors are enqueued. Everything else is pruned
//! unexpanded, which turns the exponential exact search into a bounded one.
//!
//! Knobs:
//! - `retain_per_checkpoint` (K): states kept per time bucket.
//! - `checkpoint_width` (W): bucket width in time units.
//!
//! Both trade result quality against time and memory and carry no accuracy
//! guarantee. Memory is O(frontier + checkpoints * K).

use crate::retention::RetentionHeap;
use crate::ScheduleSearch;
use rf_types::{
    config_error, validate_plan_inputs, GearAssignment, RfResult, RotationPlan, Skill,
    TIME_EPSILON,
};
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tracing::debug;

const DEFAULT_RETAIN_PER_CHECKPOINT: usize = 256;
const DEFAULT_CHECKPOINT_WIDTH: f64 = 5.0;

/// Capacity-bounded approximate search. Not exact for finite retention: the
/// reported damage is a lower bound on what [`ExhaustiveSearch`] would find.
///
/// [`ExhaustiveSearch`]: crate::ExhaustiveSearch
#[derive(Debug, Clone)]
pub struct BoundedFrontierSearch {
    retain_per_checkpoint: usize,
    checkpoint_width: f64,
}

impl BoundedFrontierSearch {
    pub fn new() -> Self {
        Self {
            retain_per_checkpoint: DEFAULT_RETAIN_PER_CHECKPOINT,
            checkpoint_width: DEFAULT_CHECKPOINT_WIDTH,
        }
    }

    /// Sets how many states each checkpoint retains. Larger values explore
    /// more of the state space at higher cost; must be at least 1.
    pub fn with_retention(mut self, capacity: usize) -> Self {
        self.retain_per_checkpoint = capacity;
        self
    }

    /// Sets the checkpoint bucket width in time units; must be finite and
    /// positive.
    pub fn with_checkpoint_width(mut self, width: f64) -> Self {
        self.checkpoint_width = width;
        self
    }
}

impl Default for BoundedFrontierSearch {
    fn default() -> Self {
        Self::new()
    }
}

/// Cast history as a shared cons list. Retained states coexist, so each
/// holds an immutable chain instead of mutating one shared buffer.
struct HistoryNode {
    skill: usize,
    prev: Option<Arc<HistoryNode>>,
}

struct FrontierState {
    time: f64,
    damage: f64,
    next_free: Vec<f64>,
    history: Option<Arc<HistoryNode>>,
}

fn materialize(history: &Option<Arc<HistoryNode>>, skills: &[Skill]) -> Vec<String> {
    let mut indices = Vec::new();
    let mut cursor = history.as_ref();
    while let Some(node) = cursor {
        indices.push(node.skill);
        cursor = node.prev.as_ref();
    }
    indices.reverse();
    indices.into_iter().map(|ix| skills[ix].name.clone()).collect()
}

impl ScheduleSearch for BoundedFrontierSearch {
    fn plan(
        &self,
        skills: &[Skill],
        gear: &GearAssignment,
        time_limit: f64,
    ) -> RfResult<RotationPlan> {
        if self.retain_per_checkpoint == 0 {
            return Err(config_error!("retain_per_checkpoint must be at least 1"));
        }
        if !self.checkpoint_width.is_finite() || self.checkpoint_width <= 0.0 {
            return Err(config_error!(
                "checkpoint_width must be finite and positive, got {}",
                self.checkpoint_width
            ));
        }
        validate_plan_inputs(skills, gear, time_limit)?;

        let effective_cooldowns: Vec<f64> = skills
            .iter()
            .zip(&gear.percents)
            .map(|(skill, &pct)| skill.effective_cooldown(pct))
            .collect();

        let mut queue: VecDeque<FrontierState> = VecDeque::new();
        queue.push_back(FrontierState {
            time: 0.0,
            damage: 0.0,
            next_free: vec![0.0; skills.len()],
            history: None,
        });
        let mut retention: HashMap<u64, RetentionHeap> = HashMap::new();

        let mut best_damage = 0.0;
        let mut best_history: Option<Arc<HistoryNode>> = None;
        let mut expanded: u64 = 0;
        let mut admitted: u64 = 0;

        while let Some(state) = queue.pop_front() {
            expanded += 1;
            if state.damage > best_damage {
                best_damage = state.damage;
                best_history = state.history.clone();
            }

            for ix in 0..skills.len() {
                let earliest = state.next_free[ix];
                if earliest > time_limit {
                    continue;
                }
                let start = state.time.max(earliest);
                let end = start + skills[ix].cast_time;
                if end > time_limit + TIME_EPSILON {
                    continue;
                }

                let damage = state.damage + skills[ix].damage;
                let checkpoint = (end / self.checkpoint_width).floor() as u64;
                let slot = retention
                    .entry(checkpoint)
                    .or_insert_with(|| RetentionHeap::new(self.retain_per_checkpoint));
                // Admission is decided once, here. A state later displaced
                // from its retention slot stays queued and is still expanded.
                if !slot.offer(damage) {
                    continue;
                }

                let mut next_free = state.next_free.clone();
                next_free[ix] = end + effective_cooldowns[ix];
                queue.push_back(FrontierState {
                    time: end,
                    damage,
                    next_free,
                    history: Some(Arc::new(HistoryNode {
                        skill: ix,
                        prev: state.history.clone(),
                    })),
                });
                admitted += 1;
            }
        }

        debug!(
            "frontier search done: {} expanded, {} admitted, best damage {}",
            expanded, admitted, best_damage
        );

        Ok(RotationPlan::new(
            materialize(&best_history, skills),
            best_damage,
        ))
    }

    fn name(&self) -> &'static str {
        "bounded-frontier"
    }
}
