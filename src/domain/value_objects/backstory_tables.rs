//! Flavor tables that backstory elements are picked from

use serde::{Deserialize, Serialize};

use crate::domain::entities::BackstoryField;

/// One row of a backstory table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackstoryOption {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl BackstoryOption {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Read-only tables for every backstory element
///
/// The significant person is drawn from two tables: who they are and why they
/// matter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BackstoryTables {
    pub ideologies: Vec<BackstoryOption>,
    pub significant_people: Vec<BackstoryOption>,
    pub significant_reasons: Vec<BackstoryOption>,
    pub meaningful_locations: Vec<BackstoryOption>,
    pub treasured_possessions: Vec<BackstoryOption>,
    pub traits: Vec<BackstoryOption>,
}

impl BackstoryTables {
    /// The table a field picks its name from; "who" for the significant person
    pub fn options(&self, field: BackstoryField) -> &[BackstoryOption] {
        match field {
            BackstoryField::Ideology => &self.ideologies,
            BackstoryField::SignificantPerson => &self.significant_people,
            BackstoryField::MeaningfulLocation => &self.meaningful_locations,
            BackstoryField::TreasuredPossession => &self.treasured_possessions,
            BackstoryField::Trait => &self.traits,
        }
    }

    /// Case-insensitive lookup in the field's table
    pub fn find(&self, field: BackstoryField, name: &str) -> Option<&BackstoryOption> {
        self.options(field)
            .iter()
            .find(|option| option.name.eq_ignore_ascii_case(name.trim()))
    }
}
