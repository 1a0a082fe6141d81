//! Age Effects Service - applies an age bracket to a character
//!
//! Applying an age always starts from the rolled base values: every "Age
//! Effect" modifier and all education improvement state are thrown away
//! before the bracket's effects are laid down again. Re-applying the same age
//! therefore never stacks modifiers.
//!
//! The bracket's stat deduction is not applied automatically. It becomes a
//! pending budget the player spends through [`AgeEffectsService::apply_stat_deduction`].

use tracing::{debug, info, instrument};

use super::{DerivedStatsService, DiceService, RollService};
use crate::domain::entities::Character;
use crate::domain::value_objects::{
    AgeRange, AgeSpecialEffect, ModifierSource, PendingDeduction, Stat, STAT_FLOOR,
};

/// Education penalty for investigators in the youngest bracket
pub const YOUNG_EDUCATION_PENALTY: i32 = 5;

#[derive(Clone)]
pub struct AgeEffectsService {
    dice: DiceService,
    rolls: RollService,
    derived: DerivedStatsService,
    pending: Option<PendingDeduction>,
}

impl AgeEffectsService {
    pub fn new(dice: DiceService, rolls: RollService, derived: DerivedStatsService) -> Self {
        Self {
            dice,
            rolls,
            derived,
            pending: None,
        }
    }

    /// The current bracket's deduction budget, if it has one
    pub fn deduction_info(&self) -> Option<&PendingDeduction> {
        self.pending.as_ref()
    }

    pub fn remaining_points(&self) -> i32 {
        self.pending.as_ref().map_or(0, PendingDeduction::remaining)
    }

    pub fn used_for_stat(&self, stat: Stat) -> i32 {
        self.pending.as_ref().map_or(0, |p| p.used_for(stat))
    }

    /// Forget the pending budget, e.g. when the character is replaced
    pub fn clear_pending(&mut self) {
        self.pending = None;
    }

    /// Rebuild the pending budget of a restored character
    ///
    /// Points already spent are read back from the "Age Effect" modifiers on
    /// the bracket's affected stats.
    pub fn restore_pending(&mut self, character: &Character) {
        self.pending = AgeRange::stat_deduction_for(character.age).map(|deduction| {
            let mut pending = PendingDeduction::from_bracket(&deduction);
            for stat in deduction.affected_stats {
                let spent = -character
                    .stat_modifiers
                    .value_of(*stat, &ModifierSource::AgeEffect);
                pending.record(*stat, spent.clamp(0, pending.remaining().max(0)));
            }
            pending
        });
    }

    /// Lay down every effect of the bracket containing `character.age`
    #[instrument(skip(self, character), fields(age = character.age))]
    pub fn apply_age_effects(&mut self, character: &mut Character) {
        character
            .stat_modifiers
            .remove_source(&ModifierSource::AgeEffect);
        character.recompute_all_stats();
        self.pending = None;
        self.rolls.clear_improvements(character, Stat::Education);

        let Some(bracket) = AgeRange::for_age(character.age) else {
            self.derived.update_all(character);
            debug!("Age outside every bracket, no effects applied");
            return;
        };

        if bracket.edu_improvement_checks > 0 {
            self.rolls.make_improvement_check(
                character,
                Stat::Education,
                bracket.edu_improvement_checks,
            );
        }

        if bracket.app_penalty > 0 {
            character.add_modifier(
                Stat::Appearance,
                ModifierSource::AgeEffect,
                -bracket.app_penalty,
            );
        }

        if bracket.has_special_effect(AgeSpecialEffect::EducationPenalty) {
            character.add_modifier(
                Stat::Education,
                ModifierSource::AgeEffect,
                -YOUNG_EDUCATION_PENALTY,
            );
        }

        if bracket.has_special_effect(AgeSpecialEffect::RerollLuck) {
            let first = self.dice.roll_statistic();
            let second = self.dice.roll_statistic();
            character.override_stat(Stat::Luck, first.max(second));
            debug!(first, second, "Luck rolled twice, keeping the higher");
        }

        if let Some(deduction) = &bracket.stat_deduction {
            self.pending = Some(PendingDeduction::from_bracket(deduction));
        }

        self.derived.update_all(character);

        info!(
            bracket = bracket.name,
            app_penalty = bracket.app_penalty,
            deduction_points = self.remaining_points(),
            "Age effects applied"
        );
    }

    /// Spend (positive) or return (negative) deduction points on `stat`
    ///
    /// Spending is capped by the remaining budget and by the common floor of 15;
    /// returning is capped by what was spent on that stat. Returns the amount
    /// actually applied, 0 when nothing changed.
    #[instrument(skip(self, character))]
    pub fn apply_stat_deduction(&mut self, character: &mut Character, stat: Stat, amount: i32) -> i32 {
        let Some(pending) = self.pending.as_mut() else {
            debug!("No pending deduction");
            return 0;
        };
        if amount == 0 || !pending.affects(stat) {
            debug!("Deduction ignored");
            return 0;
        }

        let actual = if amount < 0 {
            amount.max(-pending.used_for(stat))
        } else {
            let headroom = character.stat(stat) - STAT_FLOOR;
            amount.min(pending.remaining()).min(headroom).max(0)
        };
        if actual == 0 {
            debug!(remaining = pending.remaining(), "Nothing left to deduct");
            return 0;
        }

        character.add_modifier(stat, ModifierSource::AgeEffect, -actual);
        pending.record(stat, actual);
        self.derived.update_all(character);

        info!(
            actual,
            used = pending.used_for(stat),
            remaining = pending.remaining(),
            "Age deduction adjusted"
        );
        actual
    }
}
