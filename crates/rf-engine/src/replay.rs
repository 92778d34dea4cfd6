//! Deterministic replay of a named cast sequence.
//!
//! Re-derives start/end times and per-skill availability under the same
//! rules the search strategies use, so a returned plan can be printed as a
//! timeline or verified to be legal and worth its reported damage.

use rf_types::{
    validate_plan_inputs, GearAssignment, RfResult, ScheduleError, Skill, TIME_EPSILON,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One cast placed on the timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastEvent {
    pub skill: String,
    pub start: f64,
    pub end: f64,
}

/// A fully timed rotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    pub events: Vec<CastEvent>,
    pub total_damage: f64,
}

impl Timeline {
    /// End of the last cast, or zero for an empty rotation.
    pub fn duration(&self) -> f64 {
        self.events.last().map_or(0.0, |event| event.end)
    }
}

/// Replays `sequence` against the roster and gear assignment.
///
/// Fails on a name not in the roster and on any cast that would end past
/// `time_limit` (same epsilon rule as the searches), identifying the
/// offending position in both cases.
pub fn replay(
    skills: &[Skill],
    gear: &GearAssignment,
    sequence: &[String],
    time_limit: f64,
) -> RfResult<Timeline> {
    validate_plan_inputs(skills, gear, time_limit)?;

    let index_by_name: HashMap<&str, usize> = skills
        .iter()
        .enumerate()
        .map(|(ix, skill)| (skill.name.as_str(), ix))
        .collect();

    let mut next_free = vec![0.0; skills.len()];
    let mut now = 0.0_f64;
    let mut total_damage = 0.0;
    let mut events = Vec::with_capacity(sequence.len());

    for (position, name) in sequence.iter().enumerate() {
        let &ix = index_by_name
            .get(name.as_str())
            .ok_or_else(|| ScheduleError::UnknownSkill {
                position,
                skill: name.clone(),
            })?;
        let skill = &skills[ix];

        let start = now.max(next_free[ix]);
        let end = start + skill.cast_time;
        if end > time_limit + TIME_EPSILON {
            return Err(ScheduleError::CastPastTimeLimit {
                position,
                skill: name.clone(),
                cast_end: end,
                time_limit,
            }
            .into());
        }

        next_free[ix] = end + skill.effective_cooldown(gear.percents[ix]);
        now = end;
        total_damage += skill.damage;
        events.push(CastEvent {
            skill: name.clone(),
            start,
            end,
        });
    }

    Ok(Timeline {
        events,
        total_damage,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rf_types::RfError;

    fn roster() -> Vec<Skill> {
        vec![
            Skill::new("Bolt", 1.0, 5.0, 10.0),
            Skill::new("Jab", 2.0, 1.0, 4.0),
        ]
    }

    fn cast_names(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn replays_a_cooldown_chain() {
        let skills = roster();
        let gear = GearAssignment::new(vec![0.0, 0.0]);
        let timeline = replay(&skills, &gear, &cast_names(&["Bolt", "Bolt"]), 11.0).unwrap();

        assert_eq!(timeline.total_damage, 20.0);
        assert_eq!(timeline.events.len(), 2);
        // Second cast waits for the cooldown, not just the current time.
        assert_eq!(timeline.events[0].start, 0.0);
        assert_eq!(timeline.events[0].end, 1.0);
        assert_eq!(timeline.events[1].start, 6.0);
        assert_eq!(timeline.events[1].end, 7.0);
        assert_eq!(timeline.duration(), 7.0);
    }

    #[test]
    fn interleaved_casts_advance_the_clock() {
        let skills = roster();
        let gear = GearAssignment::new(vec![0.0, 0.0]);
        let timeline = replay(&skills, &gear, &cast_names(&["Bolt", "Jab", "Jab"]), 11.0).unwrap();

        // Bolt 0-1, Jab 1-3, Jab waits for its own cooldown until 4.
        assert_eq!(timeline.events[1].start, 1.0);
        assert_eq!(timeline.events[1].end, 3.0);
        assert_eq!(timeline.events[2].start, 4.0);
        assert_eq!(timeline.events[2].end, 6.0);
        assert_eq!(timeline.total_damage, 18.0);
    }

    #[test]
    fn gear_shortens_the_replayed_cooldown() {
        let skills = vec![Skill::new("Bolt", 1.0, 10.0, 10.0).with_gear_options(vec![0.0, 50.0])];
        let gear = GearAssignment::new(vec![50.0]);
        let timeline = replay(&skills, &gear, &cast_names(&["Bolt", "Bolt"]), 13.0).unwrap();
        assert_eq!(timeline.events[1].start, 6.0);
    }

    #[test]
    fn unknown_skill_is_reported_with_its_position() {
        let skills = roster();
        let gear = GearAssignment::new(vec![0.0, 0.0]);
        let err = replay(&skills, &gear, &cast_names(&["Bolt", "Meteor"]), 11.0).unwrap_err();
        assert!(matches!(
            err,
            RfError::Schedule(ScheduleError::UnknownSkill { position: 1, .. })
        ));
    }

    #[test]
    fn cast_past_the_limit_is_rejected() {
        let skills = roster();
        let gear = GearAssignment::new(vec![0.0, 0.0]);
        let err = replay(&skills, &gear, &cast_names(&["Bolt", "Bolt", "Bolt"]), 11.0).unwrap_err();
        // Third Bolt would run 12-13, past the 11 second window.
        assert!(matches!(
            err,
            RfError::Schedule(ScheduleError::CastPastTimeLimit { position: 2, .. })
        ));
    }

    #[test]
    fn cast_ending_on_the_limit_is_legal() {
        let skills = roster();
        let gear = GearAssignment::new(vec![0.0, 0.0]);
        let timeline = replay(&skills, &gear, &cast_names(&["Bolt", "Bolt"]), 7.0).unwrap();
        assert_eq!(timeline.duration(), 7.0);
    }

    #[test]
    fn empty_sequence_is_a_zero_damage_timeline() {
        let skills = roster();
        let gear = GearAssignment::new(vec![0.0, 0.0]);
        let timeline = replay(&skills, &gear, &[], 11.0).unwrap();
        assert!(timeline.events.is_empty());
        assert_eq!(timeline.total_damage, 0.0);
        assert_eq!(timeline.duration(), 0.0);
    }

    #[test]
    fn mismatched_gear_is_rejected() {
        let skills = roster();
        let gear = GearAssignment::new(vec![0.0]);
        assert!(replay(&skills, &gear, &[], 11.0).is_err());
    }
}
