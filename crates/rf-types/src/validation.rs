//! Input validation for loadout planning.
//!
//! Checks rosters, time limits and gear assignments before any search runs.
//! Every search entry point calls [`validate_plan_inputs`]; bad input fails
//! fast with a [`RosterError`] naming the offending skill and value instead
//! of degrading to a zero-damage plan.

use crate::errors::RosterError;
use crate::skill::{GearAssignment, Skill};
use std::collections::HashSet;

/// Validates a single skill's timing, damage and gear options.
pub fn validate_skill(skill: &Skill) -> Result<(), RosterError> {
    if !skill.cast_time.is_finite() || skill.cast_time < 0.0 {
        return Err(RosterError::InvalidCastTime {
            skill: skill.name.clone(),
            value: skill.cast_time,
        });
    }
    if !skill.cooldown.is_finite() || skill.cooldown < 0.0 {
        return Err(RosterError::InvalidCooldown {
            skill: skill.name.clone(),
            value: skill.cooldown,
        });
    }
    if !skill.damage.is_finite() || skill.damage < 0.0 {
        return Err(RosterError::InvalidDamage {
            skill: skill.name.clone(),
            value: skill.damage,
        });
    }
    if skill.gear_options.is_empty() {
        return Err(RosterError::EmptyGearOptions {
            skill: skill.name.clone(),
        });
    }
    for &pct in &skill.gear_options {
        if !pct.is_finite() || !(0.0..100.0).contains(&pct) {
            return Err(RosterError::GearPercentOutOfRange {
                skill: skill.name.clone(),
                value: pct,
            });
        }
    }
    Ok(())
}

/// Validates every skill and rejects duplicate names.
///
/// An empty roster is legal: it admits exactly one (empty) gear assignment
/// and the empty rotation.
pub fn validate_roster(skills: &[Skill]) -> Result<(), RosterError> {
    let mut seen = HashSet::new();
    for skill in skills {
        validate_skill(skill)?;
        if !seen.insert(skill.name.as_str()) {
            return Err(RosterError::DuplicateSkillName {
                skill: skill.name.clone(),
            });
        }
    }
    Ok(())
}

/// Time limits must be finite and positive.
pub fn validate_time_limit(time_limit: f64) -> Result<(), RosterError> {
    if !time_limit.is_finite() || time_limit <= 0.0 {
        return Err(RosterError::InvalidTimeLimit { value: time_limit });
    }
    Ok(())
}

/// A gear assignment must carry exactly one in-range percent per roster
/// skill. Range-checking here keeps `effective_cooldown` non-negative for
/// every assignment a search can see, enumerated or hand-built.
pub fn validate_assignment(skills: &[Skill], gear: &GearAssignment) -> Result<(), RosterError> {
    if gear.len() != skills.len() {
        return Err(RosterError::AssignmentLengthMismatch {
            expected: skills.len(),
            actual: gear.len(),
        });
    }
    for (skill, &pct) in skills.iter().zip(&gear.percents) {
        if !pct.is_finite() || !(0.0..100.0).contains(&pct) {
            return Err(RosterError::GearPercentOutOfRange {
                skill: skill.name.clone(),
                value: pct,
            });
        }
    }
    Ok(())
}

/// Combined check used at every search entry point.
pub fn validate_plan_inputs(
    skills: &[Skill],
    gear: &GearAssignment,
    time_limit: f64,
) -> Result<(), RosterError> {
    validate_roster(skills)?;
    validate_assignment(skills, gear)?;
    validate_time_limit(time_limit)?;
    Ok(())
}
