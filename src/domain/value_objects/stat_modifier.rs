//! Stat modifiers - named adjustments layered on top of rolled characteristics

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::Stat;

/// Where a modifier came from
///
/// Serialized as its plain tag ("Age Effect", "Improvement Check", ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ModifierSource {
    /// Automatic or player-allocated age penalties
    AgeEffect,
    /// Successful education (or other) improvement checks
    ImprovementCheck,
    Other(String),
}

impl ModifierSource {
    pub fn as_str(&self) -> &str {
        match self {
            Self::AgeEffect => "Age Effect",
            Self::ImprovementCheck => "Improvement Check",
            Self::Other(tag) => tag,
        }
    }
}

impl From<String> for ModifierSource {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "Age Effect" => Self::AgeEffect,
            "Improvement Check" => Self::ImprovementCheck,
            _ => Self::Other(tag),
        }
    }
}

impl From<ModifierSource> for String {
    fn from(source: ModifierSource) -> Self {
        source.as_str().to_string()
    }
}

impl fmt::Display for ModifierSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single signed adjustment to one characteristic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatModifier {
    pub source: ModifierSource,
    pub value: i32,
}

/// Modifiers for every characteristic, one entry per source
///
/// Adding a modifier whose source already exists on that stat sums into the
/// existing entry. Entries that net to zero are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatModifiers {
    entries: BTreeMap<Stat, Vec<StatModifier>>,
}

impl StatModifiers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Modifiers currently applied to `stat`, in insertion order
    pub fn for_stat(&self, stat: Stat) -> &[StatModifier] {
        self.entries.get(&stat).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Value of the `source` entry on `stat`, zero when absent
    pub fn value_of(&self, stat: Stat, source: &ModifierSource) -> i32 {
        self.for_stat(stat)
            .iter()
            .find(|m| &m.source == source)
            .map(|m| m.value)
            .unwrap_or(0)
    }

    /// Sum of every modifier on `stat`
    pub fn total(&self, stat: Stat) -> i32 {
        self.for_stat(stat).iter().map(|m| m.value).sum()
    }

    /// Keyed upsert: accumulate `value` into the `source` entry of `stat`
    pub fn add(&mut self, stat: Stat, source: ModifierSource, value: i32) {
        if value == 0 {
            return;
        }
        let list = self.entries.entry(stat).or_default();
        match list.iter_mut().find(|m| m.source == source) {
            Some(existing) => existing.value += value,
            None => list.push(StatModifier { source, value }),
        }
        list.retain(|m| m.value != 0);
        if list.is_empty() {
            self.entries.remove(&stat);
        }
    }

    /// Remove the `source` entry from `stat`, returning its value
    pub fn remove(&mut self, stat: Stat, source: &ModifierSource) -> i32 {
        let Some(list) = self.entries.get_mut(&stat) else {
            return 0;
        };
        let removed = list
            .iter()
            .filter(|m| &m.source == source)
            .map(|m| m.value)
            .sum();
        list.retain(|m| &m.source != source);
        if list.is_empty() {
            self.entries.remove(&stat);
        }
        removed
    }

    /// Remove the `source` entry from every stat
    pub fn remove_source(&mut self, source: &ModifierSource) {
        for stat in Stat::ALL {
            self.remove(stat, source);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_source_accumulates() {
        let mut mods = StatModifiers::new();
        mods.add(Stat::Education, ModifierSource::ImprovementCheck, 4);
        mods.add(Stat::Education, ModifierSource::ImprovementCheck, 7);
        mods.add(Stat::Education, ModifierSource::AgeEffect, -5);

        let edu = mods.for_stat(Stat::Education);
        assert_eq!(edu.len(), 2);
        assert_eq!(mods.value_of(Stat::Education, &ModifierSource::ImprovementCheck), 11);
        assert_eq!(mods.total(Stat::Education), 6);
    }

    #[test]
    fn test_entry_netting_to_zero_is_dropped() {
        let mut mods = StatModifiers::new();
        mods.add(Stat::Strength, ModifierSource::AgeEffect, -5);
        mods.add(Stat::Strength, ModifierSource::AgeEffect, 5);

        assert!(mods.for_stat(Stat::Strength).is_empty());
        assert!(mods.is_empty());
    }

    #[test]
    fn test_remove_source_across_stats() {
        let mut mods = StatModifiers::new();
        mods.add(Stat::Appearance, ModifierSource::AgeEffect, -10);
        mods.add(Stat::Strength, ModifierSource::AgeEffect, -3);
        mods.add(Stat::Education, ModifierSource::ImprovementCheck, 6);

        mods.remove_source(&ModifierSource::AgeEffect);

        assert_eq!(mods.total(Stat::Appearance), 0);
        assert_eq!(mods.total(Stat::Strength), 0);
        assert_eq!(mods.total(Stat::Education), 6);
    }

    #[test]
    fn test_source_serializes_as_tag() {
        let mut mods = StatModifiers::new();
        mods.add(Stat::Appearance, ModifierSource::AgeEffect, -5);
        let json = serde_json::to_value(&mods).unwrap();
        assert_eq!(json["app"][0]["source"], "Age Effect");
        assert_eq!(json["app"][0]["value"], -5);

        let back: StatModifiers = serde_json::from_value(json).unwrap();
        assert_eq!(back, mods);
    }
}
