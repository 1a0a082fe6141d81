use serde::Serialize;

use crate::domain::entities::{Backstory, Character, DerivedAttributes, Skill};
use crate::domain::value_objects::Stat;

// ============================================================================
// Sheet lines
// ============================================================================

/// A characteristic with its hard and extreme thresholds
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatLineDto {
    pub stat: Stat,
    pub label: &'static str,
    pub value: i32,
    pub half: i32,
    pub fifth: i32,
}

impl StatLineDto {
    fn new(stat: Stat, value: i32) -> Self {
        Self {
            stat,
            label: stat.abbreviation(),
            value,
            half: value / 2,
            fifth: value / 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillLineDto {
    pub name: String,
    pub total: i32,
    pub half: i32,
    pub fifth: i32,
    pub occupational: bool,
}

impl From<&Skill> for SkillLineDto {
    fn from(skill: &Skill) -> Self {
        Self {
            name: skill.name.clone(),
            total: skill.total,
            half: skill.hard(),
            fifth: skill.extreme(),
            occupational: skill.occupational_skill,
        }
    }
}

// ============================================================================
// Sheet
// ============================================================================

/// Printable view of a finished investigator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterSheet {
    pub name: String,
    pub age: u32,
    pub occupation: Option<String>,
    pub stats: Vec<StatLineDto>,
    pub derived: DerivedAttributes,
    pub remaining_skill_points: i32,
    /// Skills sorted by name, split into three print columns
    pub skill_columns: [Vec<SkillLineDto>; 3],
    pub backstory: Backstory,
}

impl From<&Character> for CharacterSheet {
    fn from(character: &Character) -> Self {
        Self {
            name: character.name.clone(),
            age: character.age,
            occupation: character.occupation.as_ref().map(|o| o.name.clone()),
            stats: character
                .stats
                .iter()
                .map(|(stat, value)| StatLineDto::new(stat, value))
                .collect(),
            derived: character.derived.clone(),
            remaining_skill_points: character.remaining_skill_points,
            skill_columns: skill_columns(&character.skills),
            backstory: character.backstory.clone(),
        }
    }
}

/// Alphabetical columns cut at floor(n/3) and floor(2n/3)
pub fn skill_columns(skills: &[Skill]) -> [Vec<SkillLineDto>; 3] {
    let mut sorted: Vec<&Skill> = skills.iter().collect();
    sorted.sort_by_cached_key(|skill| skill.name.to_lowercase());

    let first = sorted.len() / 3;
    let second = 2 * sorted.len() / 3;
    let line = |slice: &[&Skill]| -> Vec<SkillLineDto> {
        slice.iter().map(|s| SkillLineDto::from(*s)).collect()
    };

    [
        line(&sorted[..first]),
        line(&sorted[first..second]),
        line(&sorted[second..]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::Stats;

    #[test]
    fn test_skill_columns_split() {
        let skills: Vec<Skill> = ["Throw", "accounting", "Climb", "Law", "Jump", "Dodge", "Ride"]
            .into_iter()
            .map(|name| Skill::new(name, 10))
            .collect();

        let [a, b, c] = skill_columns(&skills);

        let names = |col: &[SkillLineDto]| col.iter().map(|s| s.name.clone()).collect::<Vec<_>>();
        assert_eq!(names(&a), vec!["accounting", "Climb"]);
        assert_eq!(names(&b), vec!["Dodge", "Jump"]);
        assert_eq!(names(&c), vec!["Law", "Ride", "Throw"]);
    }

    #[test]
    fn test_sheet_from_character() {
        let c = Character::new(Stats::uniform(55), vec![Skill::new("Spot Hidden", 25)])
            .with_name("Harvey Walters");

        let sheet = CharacterSheet::from(&c);

        assert_eq!(sheet.name, "Harvey Walters");
        assert_eq!(sheet.stats.len(), 9);
        assert_eq!(sheet.stats[0].label, "STR");
        assert_eq!(sheet.stats[0].half, 27);
        assert_eq!(sheet.stats[0].fifth, 11);
        assert_eq!(sheet.skill_columns[2][0].half, 12);
        assert!(sheet.occupation.is_none());
    }
}
