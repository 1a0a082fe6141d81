//! Skill entity - percentile skills on the investigator sheet

use serde::{Deserialize, Serialize};

pub const DODGE: &str = "Dodge";
pub const LANGUAGE_OWN: &str = "Language (Own)";
pub const CREDIT_RATING: &str = "Credit Rating";

/// A skill and the points invested in it
///
/// `total == base_value + improvement_points` after every mutation made
/// through the methods below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub name: String,
    pub base_value: i32,
    pub occupational_skill: bool,
    pub improvement_points: i32,
    pub total: i32,
    /// Opted in as a personal interest
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_selected: Option<bool>,
}

impl Skill {
    pub fn new(name: impl Into<String>, base_value: i32) -> Self {
        Self {
            name: name.into(),
            base_value,
            occupational_skill: false,
            improvement_points: 0,
            total: base_value,
            is_selected: None,
        }
    }

    /// Dodge and Language (Own) follow a characteristic and are never set directly
    pub fn is_derived(&self) -> bool {
        self.name == DODGE || self.name == LANGUAGE_OWN
    }

    pub fn is_selected(&self) -> bool {
        self.is_selected.unwrap_or(false)
    }

    /// Occupational or opted in as a personal interest
    pub fn can_receive_points(&self) -> bool {
        self.occupational_skill || self.is_selected()
    }

    /// Whether an occupation's skill entry qualifies this skill
    ///
    /// "Firearms" qualifies "Firearms (Handgun)"; "Firearms (Handgun)" only
    /// qualifies itself.
    pub fn matches_occupation_entry(&self, entry: &str) -> bool {
        self.name == entry
            || self
                .name
                .strip_prefix(entry)
                .is_some_and(|rest| rest.starts_with(" ("))
    }

    pub fn set_base_value(&mut self, base_value: i32) {
        self.base_value = base_value;
        self.recompute_total();
    }

    pub fn add_improvement(&mut self, points: i32) {
        self.improvement_points += points;
        self.recompute_total();
    }

    fn recompute_total(&mut self) {
        self.total = self.base_value + self.improvement_points;
    }

    /// Half value, rounded down
    pub fn hard(&self) -> i32 {
        self.total / 2
    }

    /// Fifth value, rounded down
    pub fn extreme(&self) -> i32 {
        self.total / 5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_tracks_improvement() {
        let mut skill = Skill::new("Library Use", 20);
        skill.add_improvement(15);
        assert_eq!(skill.total, 35);
        skill.add_improvement(-5);
        assert_eq!(skill.total, 30);
        skill.set_base_value(25);
        assert_eq!(skill.total, 35);
        assert_eq!(skill.hard(), 17);
        assert_eq!(skill.extreme(), 7);
    }

    #[test]
    fn test_occupation_entry_matching() {
        let handgun = Skill::new("Firearms (Handgun)", 20);
        assert!(handgun.matches_occupation_entry("Firearms"));
        assert!(handgun.matches_occupation_entry("Firearms (Handgun)"));
        assert!(!handgun.matches_occupation_entry("Firearms (Rifle/Shotgun)"));
        assert!(!handgun.matches_occupation_entry("Fire"));
    }

    #[test]
    fn test_point_eligibility() {
        let mut skill = Skill::new("Occult", 5);
        assert!(!skill.can_receive_points());
        skill.is_selected = Some(true);
        assert!(skill.can_receive_points());
        assert!(Skill::new(DODGE, 0).is_derived());
    }
}
