//! Gear-combination enumeration.

use rf_types::{GearAssignment, Skill};

/// Number of gear assignments the roster admits, `None` on overflow.
///
/// This is the product of every skill's option count, and the sweep's outer
/// loop runs exactly this many schedule searches, so callers should treat it
/// as the dominant cost factor.
pub fn combo_count(skills: &[Skill]) -> Option<usize> {
    let mut total: usize = 1;
    for skill in skills {
        total = total.checked_mul(skill.gear_options.len())?;
    }
    Some(total)
}

/// Iterator over the full Cartesian product of gear options.
///
/// Enumeration order is fixed: the first skill is the outermost digit and
/// the last skill varies fastest, each skill stepping through its own
/// option order. An empty roster yields exactly one empty assignment. No
/// pruning happens here; this is the outer search dimension.
#[derive(Debug, Clone)]
pub struct GearComboIter {
    options: Vec<Vec<f64>>,
    cursor: Vec<usize>,
    done: bool,
}

impl GearComboIter {
    pub fn new(skills: &[Skill]) -> Self {
        let options: Vec<Vec<f64>> = skills.iter().map(|s| s.gear_options.clone()).collect();
        // A skill with no options admits no assignment at all.
        let done = options.iter().any(|opts| opts.is_empty());
        Self {
            cursor: vec![0; options.len()],
            options,
            done,
        }
    }
}

impl Iterator for GearComboIter {
    type Item = GearAssignment;

    fn next(&mut self) -> Option<GearAssignment> {
        if self.done {
            return None;
        }

        let current = GearAssignment::new(
            self.options
                .iter()
                .zip(&self.cursor)
                .map(|(opts, &pick)| opts[pick])
                .collect(),
        );

        // Odometer step, rightmost digit first.
        let mut position = self.options.len();
        loop {
            if position == 0 {
                self.done = true;
                break;
            }
            position -= 1;
            self.cursor[position] += 1;
            if self.cursor[position] < self.options[position].len() {
                break;
            }
            self.cursor[position] = 0;
        }

        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enumerates_the_full_product_in_order() {
        let skills = vec![
            Skill::new("A", 1.0, 5.0, 10.0).with_gear_options(vec![0.0, 10.0]),
            Skill::new("B", 1.0, 5.0, 10.0).with_gear_options(vec![0.0, 5.0]),
        ];
        let combos: Vec<Vec<f64>> = GearComboIter::new(&skills)
            .map(|gear| gear.percents)
            .collect();
        assert_eq!(
            combos,
            vec![
                vec![0.0, 0.0],
                vec![0.0, 5.0],
                vec![10.0, 0.0],
                vec![10.0, 5.0],
            ]
        );
    }

    #[test]
    fn count_is_the_product_of_option_counts() {
        let skills = vec![
            Skill::new("A", 1.0, 5.0, 10.0).with_gear_options(vec![0.0, 10.0]),
            Skill::new("B", 1.0, 5.0, 10.0).with_gear_options(vec![0.0, 15.0, 30.0]),
            Skill::new("C", 1.0, 5.0, 10.0),
        ];
        assert_eq!(combo_count(&skills), Some(6));
        assert_eq!(GearComboIter::new(&skills).count(), 6);
    }

    #[test]
    fn empty_roster_yields_one_empty_assignment() {
        let combos: Vec<GearAssignment> = GearComboIter::new(&[]).collect();
        assert_eq!(combos, vec![GearAssignment::new(vec![])]);
        assert_eq!(combo_count(&[]), Some(1));
    }

    #[test]
    fn single_option_skills_yield_one_assignment() {
        let skills = vec![
            Skill::new("A", 1.0, 5.0, 10.0).with_gear_options(vec![15.0]),
            Skill::new("B", 1.0, 5.0, 10.0),
        ];
        let combos: Vec<GearAssignment> = GearComboIter::new(&skills).collect();
        assert_eq!(combos, vec![GearAssignment::new(vec![15.0, 0.0])]);
    }

    #[test]
    fn optionless_skill_yields_nothing() {
        // Validation rejects this roster upstream; the iterator still
        // reports the true (empty) product instead of panicking.
        let skills = vec![Skill::new("A", 1.0, 5.0, 10.0).with_gear_options(vec![])];
        assert_eq!(GearComboIter::new(&skills).count(), 0);
        assert_eq!(combo_count(&skills), Some(0));
    }

    #[test]
    fn count_overflow_reports_none() {
        let skills: Vec<Skill> = (0..70)
            .map(|ix| {
                Skill::new(&format!("s{ix}"), 1.0, 5.0, 10.0).with_gear_options(vec![0.0, 10.0])
            })
            .collect();
        assert_eq!(combo_count(&skills), None);
    }
}
