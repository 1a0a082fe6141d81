//! Backstory Service - random and chosen backstory elements

use std::sync::Arc;

use tracing::debug;

use super::DiceService;
use crate::domain::entities::{BackstoryEntry, BackstoryField, Character};
use crate::domain::value_objects::{BackstoryOption, BackstoryTables};

#[derive(Clone)]
pub struct BackstoryService {
    dice: DiceService,
    tables: Arc<BackstoryTables>,
}

impl BackstoryService {
    pub fn new(dice: DiceService, tables: Arc<BackstoryTables>) -> Self {
        Self { dice, tables }
    }

    pub fn tables(&self) -> &BackstoryTables {
        &self.tables
    }

    fn pick<'a>(&self, options: &'a [BackstoryOption]) -> Option<&'a BackstoryOption> {
        self.dice.pick_index(options.len()).and_then(|i| options.get(i))
    }

    /// Fill `field` with a uniformly random table entry
    ///
    /// The significant person draws who and why independently. Returns false
    /// when the table is empty.
    pub fn randomize(&self, character: &mut Character, field: BackstoryField) -> bool {
        let Some(choice) = self.pick(self.tables.options(field)) else {
            debug!(field = %field, "Empty backstory table");
            return false;
        };

        match character.backstory.entry_mut(field) {
            Some(entry) => *entry = entry_from_option(choice),
            None => {
                let Some(reason) = self.pick(&self.tables.significant_reasons) else {
                    debug!(field = %field, "Empty backstory table");
                    return false;
                };
                let person = &mut character.backstory.significant_person;
                person.who = choice.name.clone();
                person.why = reason.name.clone();
                person.description = None;
            }
        }

        debug!(field = %field, choice = %choice.name, "Backstory randomized");
        true
    }

    /// Randomize every field; true when all of them were filled
    pub fn randomize_all(&self, character: &mut Character) -> bool {
        BackstoryField::ALL
            .iter()
            .fold(true, |filled, field| self.randomize(character, *field) && filled)
    }

    /// Set `field` by name, copying the table description when the name is a
    /// table entry and keeping it as free text otherwise
    ///
    /// For the significant person this sets who they are.
    pub fn select(&self, character: &mut Character, field: BackstoryField, name: &str) {
        let entry = match self.tables.find(field, name) {
            Some(option) => entry_from_option(option),
            None => BackstoryEntry::new(name.trim()),
        };

        match character.backstory.entry_mut(field) {
            Some(slot) => *slot = entry,
            None => character.backstory.significant_person.who = entry.name,
        }
        debug!(field = %field, name, "Backstory selected");
    }

    /// Set why the significant person matters
    pub fn select_significant_reason(&self, character: &mut Character, why: &str) {
        let why = self
            .tables
            .significant_reasons
            .iter()
            .find(|option| option.name.eq_ignore_ascii_case(why.trim()))
            .map_or_else(|| why.trim().to_string(), |option| option.name.clone());
        character.backstory.significant_person.why = why;
    }

    /// Replace the free-text elaboration of `field`; blank text clears it
    pub fn set_description(&self, character: &mut Character, field: BackstoryField, text: &str) {
        let text = text.trim();
        let description = (!text.is_empty()).then(|| text.to_string());
        character.backstory.set_description(field, description);
    }

    pub fn is_complete(&self, character: &Character) -> bool {
        character.backstory.is_complete()
    }
}

fn entry_from_option(option: &BackstoryOption) -> BackstoryEntry {
    BackstoryEntry {
        name: option.name.clone(),
        description: (!option.description.is_empty()).then(|| option.description.clone()),
    }
}
