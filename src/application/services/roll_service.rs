//! Roll Service - improvement checks and their modifier bookkeeping
//!
//! Per (character, stat) an improvement history moves from "no rolls yet" to
//! "rolls recorded". Every successful check contributes its d10 to the stat's
//! single "Improvement Check" modifier, so stripping that modifier undoes the
//! whole batch at once.

use tracing::{debug, info};

use super::DiceService;
use crate::domain::entities::Character;
use crate::domain::value_objects::{
    AgeRange, ImprovementCheckOutcome, ImprovementRoll, ModifierSource, Stat,
};

#[derive(Clone)]
pub struct RollService {
    dice: DiceService,
}

impl RollService {
    pub fn new(dice: DiceService) -> Self {
        Self { dice }
    }

    /// Undo every prior improvement on `stat` and forget its history
    pub fn clear_improvements(&self, character: &mut Character, stat: Stat) {
        let removed = character.remove_modifier(stat, &ModifierSource::ImprovementCheck);
        character.improvement_rolls.remove(&stat);
        if removed != 0 {
            debug!(stat = %stat, removed, "Cleared improvement modifiers");
        }
    }

    /// Roll `times` fresh improvement checks for `stat`, replacing any before
    pub fn make_improvement_check(
        &self,
        character: &mut Character,
        stat: Stat,
        times: u32,
    ) -> ImprovementCheckOutcome {
        self.clear_improvements(character, stat);

        let mut outcome = ImprovementCheckOutcome::default();
        for _ in 0..times {
            let target = character.stat(stat);
            let check = self.dice.roll_1d100();
            let success = check > target;

            let improvement = if success {
                let gain = self.dice.roll_1d10();
                character.add_modifier(stat, ModifierSource::ImprovementCheck, gain);
                Some(gain)
            } else {
                None
            };

            let roll = ImprovementRoll {
                check,
                target,
                success,
                improvement,
            };
            outcome.total_improvement += roll.gained();
            outcome.rolls.push(roll);
        }

        character
            .improvement_rolls
            .insert(stat, outcome.rolls.clone());

        info!(
            stat = %stat,
            checks = times,
            total_improvement = outcome.total_improvement,
            "Improvement checks rolled"
        );
        outcome
    }

    /// Redo the bracket-determined number of checks for the current age
    pub fn reroll_all_improvement_checks(
        &self,
        character: &mut Character,
        stat: Stat,
    ) -> ImprovementCheckOutcome {
        let times = AgeRange::improvement_checks_for(character.age);
        if times == 0 {
            debug!(age = character.age, "No improvement checks for this age");
            return ImprovementCheckOutcome::default();
        }
        self.make_improvement_check(character, stat, times)
    }

    /// Roll a new d10 for one successful check, keeping the check itself
    ///
    /// Returns the new improvement, or `None` when `index` is out of range or
    /// names a failed check.
    pub fn reroll_improvement_amount(
        &self,
        character: &mut Character,
        stat: Stat,
        index: usize,
    ) -> Option<i32> {
        let previous = match character
            .improvement_rolls
            .get(&stat)
            .and_then(|rolls| rolls.get(index))
        {
            Some(roll) if roll.success => roll.gained(),
            _ => {
                debug!(stat = %stat, index, "No successful check to reroll");
                return None;
            }
        };

        let gain = self.dice.roll_1d10();
        character.add_modifier(stat, ModifierSource::ImprovementCheck, gain - previous);

        if let Some(roll) = character
            .improvement_rolls
            .get_mut(&stat)
            .and_then(|rolls| rolls.get_mut(index))
        {
            roll.improvement = Some(gain);
        }

        info!(stat = %stat, index, previous, gain, "Improvement amount rerolled");
        Some(gain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::application::ports::outbound::FixedRandomPort;
    use crate::domain::value_objects::Stats;

    fn roller(values: Vec<i32>) -> RollService {
        RollService::new(DiceService::new(Arc::new(FixedRandomPort::new(values))))
    }

    fn character(education: i32) -> Character {
        Character::new(Stats::uniform(50).with(Stat::Education, education), Vec::new())
    }

    #[test]
    fn test_success_requires_roll_above_target() {
        // d100 = 60 equals target 60: fail. d100 = 61 beats 60: success, d10 = 4
        let rolls = roller(vec![60, 61, 4]);
        let mut c = character(60);

        let outcome = rolls.make_improvement_check(&mut c, Stat::Education, 2);

        assert_eq!(outcome.rolls.len(), 2);
        assert!(!outcome.rolls[0].success);
        assert_eq!(outcome.rolls[0].improvement, None);
        assert!(outcome.rolls[1].success);
        assert_eq!(outcome.rolls[1].improvement, Some(4));
        assert_eq!(outcome.total_improvement, 4);
        assert_eq!(c.stat(Stat::Education), 64);
    }

    #[test]
    fn test_later_checks_target_improved_value() {
        // First success lifts EDU 50 -> 60, so the second d100 of 55 fails
        let rolls = roller(vec![90, 10, 55]);
        let mut c = character(50);

        let outcome = rolls.make_improvement_check(&mut c, Stat::Education, 2);

        assert_eq!(outcome.rolls[1].target, 60);
        assert!(!outcome.rolls[1].success);
        assert_eq!(c.improvement_rolls_for(Stat::Education).len(), 2);
    }

    #[test]
    fn test_same_source_modifiers_accumulate() {
        let rolls = roller(vec![99, 3]);
        let mut c = character(40);

        rolls.make_improvement_check(&mut c, Stat::Education, 2);

        let mods = c.stat_modifiers.for_stat(Stat::Education);
        assert_eq!(mods.len(), 1);
        assert_eq!(mods[0].value, 6);
        assert_eq!(c.stat(Stat::Education), 46);
    }

    #[test]
    fn test_new_batch_replaces_old_one() {
        let rolls = roller(vec![99, 7]);
        let mut c = character(40);

        rolls.make_improvement_check(&mut c, Stat::Education, 1);
        rolls.make_improvement_check(&mut c, Stat::Education, 1);

        assert_eq!(c.stat(Stat::Education), 47);
        assert_eq!(c.improvement_rolls_for(Stat::Education).len(), 1);
    }

    #[test]
    fn test_reroll_all_follows_age_bracket() {
        let rolls = roller(vec![99, 5]);

        let mut adult = character(50).with_age(25);
        let outcome = rolls.reroll_all_improvement_checks(&mut adult, Stat::Education);
        assert_eq!(outcome.rolls.len(), 1);
        assert_eq!(adult.improvement_rolls_for(Stat::Education).len(), 1);

        let mut young = character(50).with_age(17);
        for _ in 0..3 {
            let outcome = rolls.reroll_all_improvement_checks(&mut young, Stat::Education);
            assert!(outcome.rolls.is_empty());
        }
        assert!(young.improvement_rolls_for(Stat::Education).is_empty());
    }

    #[test]
    fn test_reroll_amount_keeps_check() {
        let rolls = roller(vec![99, 2, 9]);
        let mut c = character(50);
        rolls.make_improvement_check(&mut c, Stat::Education, 1);
        assert_eq!(c.stat(Stat::Education), 52);

        let gain = rolls.reroll_improvement_amount(&mut c, Stat::Education, 0);

        assert_eq!(gain, Some(9));
        assert_eq!(c.stat(Stat::Education), 59);
        let roll = c.improvement_rolls_for(Stat::Education)[0];
        assert_eq!(roll.check, 99);
        assert_eq!(roll.target, 50);
        assert_eq!(roll.improvement, Some(9));
    }

    #[test]
    fn test_reroll_amount_rejects_failures_and_bad_index() {
        let rolls = roller(vec![10]);
        let mut c = character(50);
        rolls.make_improvement_check(&mut c, Stat::Education, 1);

        assert_eq!(rolls.reroll_improvement_amount(&mut c, Stat::Education, 0), None);
        assert_eq!(rolls.reroll_improvement_amount(&mut c, Stat::Education, 5), None);
        assert_eq!(rolls.reroll_improvement_amount(&mut c, Stat::Power, 0), None);
        assert_eq!(c.stat(Stat::Education), 50);
    }
}
