//! Backstory - the personal details written on the back of the sheet

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which backstory element an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BackstoryField {
    Ideology,
    SignificantPerson,
    MeaningfulLocation,
    TreasuredPossession,
    Trait,
}

impl BackstoryField {
    pub const ALL: [BackstoryField; 5] = [
        BackstoryField::Ideology,
        BackstoryField::SignificantPerson,
        BackstoryField::MeaningfulLocation,
        BackstoryField::TreasuredPossession,
        BackstoryField::Trait,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Ideology => "Ideology/Beliefs",
            Self::SignificantPerson => "Significant People",
            Self::MeaningfulLocation => "Meaningful Locations",
            Self::TreasuredPossession => "Treasured Possessions",
            Self::Trait => "Traits",
        }
    }
}

impl fmt::Display for BackstoryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A chosen backstory value with optional free-text elaboration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackstoryEntry {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl BackstoryEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    pub fn is_set(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

/// Who matters to the investigator, and why
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignificantPerson {
    pub who: String,
    pub why: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SignificantPerson {
    pub fn is_set(&self) -> bool {
        !self.who.trim().is_empty() && !self.why.trim().is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Backstory {
    pub ideology: BackstoryEntry,
    pub significant_person: SignificantPerson,
    pub meaningful_location: BackstoryEntry,
    pub treasured_possession: BackstoryEntry,
    #[serde(rename = "trait")]
    pub trait_: BackstoryEntry,
}

impl Backstory {
    /// The single-valued entry for `field`; `None` for the significant person
    pub fn entry_mut(&mut self, field: BackstoryField) -> Option<&mut BackstoryEntry> {
        match field {
            BackstoryField::Ideology => Some(&mut self.ideology),
            BackstoryField::MeaningfulLocation => Some(&mut self.meaningful_location),
            BackstoryField::TreasuredPossession => Some(&mut self.treasured_possession),
            BackstoryField::Trait => Some(&mut self.trait_),
            BackstoryField::SignificantPerson => None,
        }
    }

    pub fn is_set(&self, field: BackstoryField) -> bool {
        match field {
            BackstoryField::Ideology => self.ideology.is_set(),
            BackstoryField::SignificantPerson => self.significant_person.is_set(),
            BackstoryField::MeaningfulLocation => self.meaningful_location.is_set(),
            BackstoryField::TreasuredPossession => self.treasured_possession.is_set(),
            BackstoryField::Trait => self.trait_.is_set(),
        }
    }

    pub fn set_description(&mut self, field: BackstoryField, description: Option<String>) {
        match self.entry_mut(field) {
            Some(entry) => entry.description = description,
            None => self.significant_person.description = description,
        }
    }

    /// Every element filled in, including both who and why
    pub fn is_complete(&self) -> bool {
        BackstoryField::ALL.iter().all(|f| self.is_set(*f))
    }
}
