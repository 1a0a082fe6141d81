//! Occupation entity - static profession templates

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{FormulaError, SkillPointFormula, Stats};

/// A profession an investigator can take
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Occupation {
    pub name: String,
    pub credit_rating_min: i32,
    pub credit_rating_max: i32,
    /// Qualifying skill names; a bare name also covers its "(Variant)" skills
    pub skills: Vec<String>,
    pub skill_points_formula: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills_description: Option<String>,
}

impl Occupation {
    pub fn new(
        name: impl Into<String>,
        credit_rating_min: i32,
        credit_rating_max: i32,
        skill_points_formula: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            credit_rating_min,
            credit_rating_max,
            skills: Vec::new(),
            skill_points_formula: skill_points_formula.into(),
            skills_description: None,
        }
    }

    pub fn with_skill(mut self, skill: impl Into<String>) -> Self {
        self.skills.push(skill.into());
        self
    }

    /// Strictly parsed formula
    pub fn formula(&self) -> Result<SkillPointFormula, FormulaError> {
        SkillPointFormula::parse(&self.skill_points_formula)
    }

    pub fn skill_points_for(&self, stats: &Stats) -> i32 {
        SkillPointFormula::evaluate_trusted(&self.skill_points_formula, stats)
    }

    pub fn credit_rating_range(&self) -> std::ops::RangeInclusive<i32> {
        self.credit_rating_min..=self.credit_rating_max
    }
}
