//! Derived Stats Service - attributes that are pure functions of characteristics

use tracing::debug;

use crate::domain::entities::{Character, Occupation, DODGE, LANGUAGE_OWN};
use crate::domain::value_objects::{AgeRange, DamageBonus, Stats};

/// Lowest movement rate age penalties can reduce an investigator to
pub const MIN_MOVEMENT_RATE: i32 = 1;

#[derive(Debug, Clone, Copy, Default)]
pub struct DerivedStatsService;

impl DerivedStatsService {
    pub fn new() -> Self {
        Self
    }

    /// Recompute damage bonus, build, hit points and movement rate
    pub fn update_derived_attributes(&self, character: &mut Character) {
        let damage = Self::damage_bonus(&character.stats);
        character.derived.damage_bonus = damage.bonus;
        character.derived.build = damage.build;
        character.derived.hit_points = Self::hit_points(&character.stats);
        character.derived.movement_rate = Self::movement_rate(&character.stats, character.age);

        debug!(
            build = character.derived.build,
            hit_points = character.derived.hit_points,
            movement_rate = character.derived.movement_rate,
            "Derived attributes updated"
        );
    }

    /// Recompute the base values of Dodge and Language (Own)
    pub fn update_derived_skills(&self, character: &mut Character) {
        let dexterity = character.stats.dexterity;
        let education = character.stats.education;

        if let Some(dodge) = character.skill_mut(DODGE) {
            dodge.set_base_value(dexterity / 2);
        }
        if let Some(own_language) = character.skill_mut(LANGUAGE_OWN) {
            own_language.set_base_value(education);
        }
    }

    /// Both of the above
    pub fn update_all(&self, character: &mut Character) {
        self.update_derived_attributes(character);
        self.update_derived_skills(character);
    }

    /// Skill points the occupation's formula grants with current stats
    pub fn calculate_occupation_skill_points(
        &self,
        character: &Character,
        occupation: &Occupation,
    ) -> i32 {
        occupation.skill_points_for(&character.stats)
    }

    pub fn damage_bonus(stats: &Stats) -> DamageBonus {
        DamageBonus::from_sum(stats.strength + stats.size)
    }

    pub fn hit_points(stats: &Stats) -> i32 {
        (stats.constitution + stats.size) / 10
    }

    /// 9 when both STR and DEX exceed SIZ, 7 when both are below, else 8;
    /// then the age bracket's penalty, never below 1
    pub fn movement_rate(stats: &Stats, age: u32) -> i32 {
        let base = if stats.strength > stats.size && stats.dexterity > stats.size {
            9
        } else if stats.strength < stats.size && stats.dexterity < stats.size {
            7
        } else {
            8
        };
        (base - AgeRange::movement_penalty_for(age)).max(MIN_MOVEMENT_RATE)
    }
}
