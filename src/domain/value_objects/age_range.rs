//! Age brackets and the effects each one imposes on a new investigator

use serde::Serialize;

use super::Stat;

/// Special effects that only some brackets carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AgeSpecialEffect {
    /// Roll luck twice and keep the higher result
    RerollLuck,
    /// Apply a -5 education penalty
    EducationPenalty,
}

/// Points the player must remove from a set of characteristics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatDeduction {
    pub total_points: i32,
    pub affected_stats: &'static [Stat],
}

/// One row of the age table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeRange {
    pub id: u8,
    pub name: &'static str,
    pub selector_name: &'static str,
    pub min: u32,
    pub max: u32,
    pub edu_improvement_checks: u32,
    pub movement_penalty: i32,
    pub app_penalty: i32,
    pub stat_deduction: Option<StatDeduction>,
    pub special_effects: &'static [AgeSpecialEffect],
}

const STR_SIZ: &[Stat] = &[Stat::Strength, Stat::Size];
const STR_CON_DEX: &[Stat] = &[Stat::Strength, Stat::Constitution, Stat::Dexterity];

static AGE_RANGES: [AgeRange; 7] = [
    AgeRange {
        id: 1,
        name: "Young",
        selector_name: "Young (15-19)",
        min: 15,
        max: 19,
        edu_improvement_checks: 0,
        movement_penalty: 0,
        app_penalty: 0,
        stat_deduction: Some(StatDeduction { total_points: 5, affected_stats: STR_SIZ }),
        special_effects: &[AgeSpecialEffect::RerollLuck, AgeSpecialEffect::EducationPenalty],
    },
    AgeRange {
        id: 2,
        name: "Adult",
        selector_name: "Adult (20-39)",
        min: 20,
        max: 39,
        edu_improvement_checks: 1,
        movement_penalty: 0,
        app_penalty: 0,
        stat_deduction: None,
        special_effects: &[],
    },
    AgeRange {
        id: 3,
        name: "Middle-aged",
        selector_name: "Middle-aged (40-49)",
        min: 40,
        max: 49,
        edu_improvement_checks: 2,
        movement_penalty: 1,
        app_penalty: 5,
        stat_deduction: Some(StatDeduction { total_points: 5, affected_stats: STR_CON_DEX }),
        special_effects: &[],
    },
    AgeRange {
        id: 4,
        name: "Mature",
        selector_name: "Mature (50-59)",
        min: 50,
        max: 59,
        edu_improvement_checks: 3,
        movement_penalty: 2,
        app_penalty: 10,
        stat_deduction: Some(StatDeduction { total_points: 10, affected_stats: STR_CON_DEX }),
        special_effects: &[],
    },
    AgeRange {
        id: 5,
        name: "Elderly",
        selector_name: "Elderly (60-69)",
        min: 60,
        max: 69,
        edu_improvement_checks: 4,
        movement_penalty: 3,
        app_penalty: 15,
        stat_deduction: Some(StatDeduction { total_points: 20, affected_stats: STR_CON_DEX }),
        special_effects: &[],
    },
    AgeRange {
        id: 6,
        name: "Old",
        selector_name: "Old (70-79)",
        min: 70,
        max: 79,
        edu_improvement_checks: 4,
        movement_penalty: 4,
        app_penalty: 20,
        stat_deduction: Some(StatDeduction { total_points: 40, affected_stats: STR_CON_DEX }),
        special_effects: &[],
    },
    AgeRange {
        id: 7,
        name: "Venerable",
        selector_name: "Venerable (80-89)",
        min: 80,
        max: 89,
        edu_improvement_checks: 4,
        movement_penalty: 5,
        app_penalty: 25,
        stat_deduction: Some(StatDeduction { total_points: 80, affected_stats: STR_CON_DEX }),
        special_effects: &[],
    },
];

impl AgeRange {
    /// The whole table, youngest first
    pub fn all() -> &'static [AgeRange] {
        &AGE_RANGES
    }

    /// The bracket containing `age`, or `None` outside 15-89
    pub fn for_age(age: u32) -> Option<&'static AgeRange> {
        AGE_RANGES.iter().find(|r| r.contains(age))
    }

    pub fn contains(&self, age: u32) -> bool {
        (self.min..=self.max).contains(&age)
    }

    pub fn has_special_effect(&self, effect: AgeSpecialEffect) -> bool {
        self.special_effects.contains(&effect)
    }

    pub fn improvement_checks_for(age: u32) -> u32 {
        Self::for_age(age).map_or(0, |r| r.edu_improvement_checks)
    }

    pub fn movement_penalty_for(age: u32) -> i32 {
        Self::for_age(age).map_or(0, |r| r.movement_penalty)
    }

    pub fn appearance_penalty_for(age: u32) -> i32 {
        Self::for_age(age).map_or(0, |r| r.app_penalty)
    }

    pub fn stat_deduction_for(age: u32) -> Option<StatDeduction> {
        Self::for_age(age).and_then(|r| r.stat_deduction)
    }

    pub fn special_effect_for(age: u32, effect: AgeSpecialEffect) -> bool {
        Self::for_age(age).is_some_and(|r| r.has_special_effect(effect))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_ordered_and_contiguous() {
        let ranges = AgeRange::all();
        assert_eq!(ranges.first().unwrap().min, 15);
        assert_eq!(ranges.last().unwrap().max, 89);
        for pair in ranges.windows(2) {
            assert_eq!(pair[0].max + 1, pair[1].min);
        }
    }

    #[test]
    fn test_lookup_by_age() {
        assert_eq!(AgeRange::for_age(15).unwrap().name, "Young");
        assert_eq!(AgeRange::for_age(19).unwrap().name, "Young");
        assert_eq!(AgeRange::for_age(20).unwrap().name, "Adult");
        assert_eq!(AgeRange::for_age(45).unwrap().name, "Middle-aged");
        assert_eq!(AgeRange::for_age(89).unwrap().name, "Venerable");
        assert!(AgeRange::for_age(14).is_none());
        assert!(AgeRange::for_age(90).is_none());
    }

    #[test]
    fn test_bracket_effects() {
        let checks: Vec<u32> = AgeRange::all().iter().map(|r| r.edu_improvement_checks).collect();
        assert_eq!(checks, vec![0, 1, 2, 3, 4, 4, 4]);

        let movement: Vec<i32> = AgeRange::all().iter().map(|r| r.movement_penalty).collect();
        assert_eq!(movement, vec![0, 0, 1, 2, 3, 4, 5]);

        let appearance: Vec<i32> = AgeRange::all().iter().map(|r| r.app_penalty).collect();
        assert_eq!(appearance, vec![0, 0, 5, 10, 15, 20, 25]);

        let deductions: Vec<i32> = AgeRange::all()
            .iter()
            .map(|r| r.stat_deduction.map_or(0, |d| d.total_points))
            .collect();
        assert_eq!(deductions, vec![5, 0, 5, 10, 20, 40, 80]);
    }

    #[test]
    fn test_out_of_range_queries_are_zero() {
        assert_eq!(AgeRange::improvement_checks_for(12), 0);
        assert_eq!(AgeRange::movement_penalty_for(95), 0);
        assert_eq!(AgeRange::appearance_penalty_for(95), 0);
        assert!(AgeRange::stat_deduction_for(10).is_none());
        assert!(!AgeRange::special_effect_for(10, AgeSpecialEffect::RerollLuck));
    }

    #[test]
    fn test_only_young_has_special_effects() {
        assert!(AgeRange::special_effect_for(17, AgeSpecialEffect::RerollLuck));
        assert!(AgeRange::special_effect_for(17, AgeSpecialEffect::EducationPenalty));
        assert!(!AgeRange::special_effect_for(25, AgeSpecialEffect::RerollLuck));
        assert_eq!(
            AgeRange::stat_deduction_for(17).unwrap().affected_stats,
            &[Stat::Strength, Stat::Size]
        );
    }
}
