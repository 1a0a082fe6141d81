//! Character entity - the investigator being built
//!
//! Current characteristic values are always `base + sum(modifiers)` clamped to
//! the stat's floor; every modifier mutation goes through this type so the
//! rule cannot drift.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Backstory, Occupation, Skill};
use crate::domain::value_objects::{
    ImprovementRoll, ModifierSource, Stat, StatModifiers, Stats,
};

/// Age a freshly rolled investigator starts at
pub const DEFAULT_AGE: u32 = 20;

/// Attributes computed from the current characteristics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedAttributes {
    pub damage_bonus: String,
    pub build: i32,
    pub hit_points: i32,
    pub movement_rate: i32,
}

impl Default for DerivedAttributes {
    fn default() -> Self {
        Self {
            damage_bonus: "None".to_string(),
            build: 0,
            hit_points: 0,
            movement_rate: 8,
        }
    }
}

/// An investigator under construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub name: String,
    pub age: u32,
    /// Current, modifier-adjusted values
    pub stats: Stats,
    /// Values as rolled, before any modifier
    pub base_stats: Stats,
    #[serde(default)]
    pub stat_modifiers: StatModifiers,
    pub derived: DerivedAttributes,
    pub occupation: Option<Occupation>,
    pub skills: Vec<Skill>,
    pub remaining_skill_points: i32,
    #[serde(default)]
    pub improvement_rolls: BTreeMap<Stat, Vec<ImprovementRoll>>,
    #[serde(flatten)]
    pub backstory: Backstory,
}

impl Character {
    pub fn new(base_stats: Stats, skills: Vec<Skill>) -> Self {
        Self {
            name: String::new(),
            age: DEFAULT_AGE,
            stats: base_stats,
            base_stats,
            stat_modifiers: StatModifiers::new(),
            derived: DerivedAttributes::default(),
            occupation: None,
            skills,
            remaining_skill_points: 0,
            improvement_rolls: BTreeMap::new(),
            backstory: Backstory::default(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = age;
        self
    }

    pub fn stat(&self, stat: Stat) -> i32 {
        self.stats.get(stat)
    }

    pub fn base_stat(&self, stat: Stat) -> i32 {
        self.base_stats.get(stat)
    }

    /// Overwrite a current value directly, bypassing the modifier ledger
    ///
    /// Only the young-age luck reroll does this; the next reset restores the
    /// base value.
    pub fn override_stat(&mut self, stat: Stat, value: i32) {
        self.stats.set(stat, value);
    }

    /// Replace one rolled base value and recompute its current value
    pub fn set_base_stat(&mut self, stat: Stat, value: i32) {
        self.base_stats.set(stat, value);
        self.recompute_stat(stat);
    }

    /// Keyed upsert of a modifier, then re-clamp the stat
    pub fn add_modifier(&mut self, stat: Stat, source: ModifierSource, value: i32) {
        self.stat_modifiers.add(stat, source, value);
        self.recompute_stat(stat);
    }

    /// Drop every `source` modifier from `stat`, returning the removed value
    pub fn remove_modifier(&mut self, stat: Stat, source: &ModifierSource) -> i32 {
        let removed = self.stat_modifiers.remove(stat, source);
        self.recompute_stat(stat);
        removed
    }

    /// Current value = base + modifiers, never below the stat's floor
    pub fn recompute_stat(&mut self, stat: Stat) {
        let value = self.base_stats.get(stat) + self.stat_modifiers.total(stat);
        self.stats.set(stat, value.max(stat.minimum()));
    }

    /// Discard all current-value drift and rebuild from base + modifiers
    pub fn recompute_all_stats(&mut self) {
        for stat in Stat::ALL {
            self.recompute_stat(stat);
        }
    }

    pub fn improvement_rolls_for(&self, stat: Stat) -> &[ImprovementRoll] {
        self.improvement_rolls
            .get(&stat)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn skill(&self, name: &str) -> Option<&Skill> {
        self.skills.iter().find(|s| s.name == name)
    }

    pub fn skill_mut(&mut self, name: &str) -> Option<&mut Skill> {
        self.skills.iter_mut().find(|s| s.name == name)
    }
}
