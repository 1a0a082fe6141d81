//! Static game data the engine reads but never changes

use super::BackstoryTables;
use crate::domain::entities::{Occupation, Skill};

/// Default skill list, occupation table and backstory tables
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceData {
    pub skills: Vec<Skill>,
    pub occupations: Vec<Occupation>,
    pub backstory: BackstoryTables,
}

impl ReferenceData {
    pub fn new(skills: Vec<Skill>, occupations: Vec<Occupation>, backstory: BackstoryTables) -> Self {
        Self {
            skills,
            occupations,
            backstory,
        }
    }

    /// A fresh copy of the default skills for a new character
    pub fn default_skills(&self) -> Vec<Skill> {
        self.skills.clone()
    }

    /// Case-insensitive occupation lookup
    pub fn find_occupation(&self, name: &str) -> Option<&Occupation> {
        let name = name.trim();
        self.occupations
            .iter()
            .find(|occupation| occupation.name.eq_ignore_ascii_case(name))
    }
}
