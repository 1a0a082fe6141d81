//! Character Service - Application service owning the investigator being built
//!
//! This service is the single write entry point for the character: it
//! delegates each rule to its domain service, recomputes derived values,
//! and publishes the full snapshot to every subscriber after each mutation.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use super::{
    AgeEffectsService, BackstoryService, DerivedStatsService, DiceService, OccupationService,
    RollService,
};
use crate::application::dto::CharacterSheet;
use crate::application::ports::outbound::{CharacterStoragePort, RandomPort, StorageError};
use crate::domain::entities::{BackstoryField, Character, Occupation};
use crate::domain::events::{CharacterChange, CharacterEvent};
use crate::domain::value_objects::{
    ImprovementCheckOutcome, PendingDeduction, ReferenceData, Stat, STAT_CEILING,
};

/// Slot the character is saved under unless configured otherwise
pub const DEFAULT_SAVE_SLOT: &str = "savedCharacter";

/// Handle returned by [`CharacterService::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub type CharacterObserver = Box<dyn Fn(&CharacterEvent) + Send + Sync>;

/// Character service trait defining the application use cases
///
/// Operations on a missing character are silent no-ops that return `false`,
/// `None` or an empty result.
pub trait CharacterService {
    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Roll a fresh investigator, replacing the current one
    fn create_new_character(&mut self) -> &Character;

    /// The investigator being built, if any
    fn current(&self) -> Option<&Character>;

    /// Persist the current character; `false` when there is none
    fn save(&self) -> Result<bool, StorageError>;

    /// Restore the saved character; `false` when nothing was saved
    fn load(&mut self) -> Result<bool, StorageError>;

    /// Delete the saved character
    fn discard_saved(&self) -> Result<(), StorageError>;

    // ------------------------------------------------------------------
    // Identity and characteristics
    // ------------------------------------------------------------------

    fn set_name(&mut self, name: &str);

    /// Change age and apply the new bracket's effects
    fn set_age(&mut self, age: u32);

    /// Roll one base characteristic again
    fn reroll_stat(&mut self, stat: Stat) -> Option<i32>;

    /// Roll every base characteristic again
    fn reroll_all_stats(&mut self);

    /// Enter a base characteristic by hand, clamped into its legal range
    fn set_base_stat(&mut self, stat: Stat, value: i32) -> Option<i32>;

    /// Spend or return age deduction points; returns the amount applied
    fn apply_stat_deduction(&mut self, stat: Stat, amount: i32) -> i32;

    fn pending_deduction(&self) -> Option<&PendingDeduction>;

    /// Redo the education improvement checks of the current age bracket
    fn reroll_improvement_checks(&mut self) -> ImprovementCheckOutcome;

    /// Roll a new d10 for one successful education improvement check
    fn reroll_improvement_amount(&mut self, index: usize) -> Option<i32>;

    // ------------------------------------------------------------------
    // Occupation and skills
    // ------------------------------------------------------------------

    fn set_occupation(&mut self, occupation: Occupation);

    /// Look an occupation up by name and apply it; `false` if unknown
    fn select_occupation(&mut self, name: &str) -> bool;

    fn allocate_skill_points(&mut self, skill: &str, points: i32) -> bool;

    fn select_skill(&mut self, skill: &str) -> bool;

    fn deselect_skill(&mut self, skill: &str) -> bool;

    // ------------------------------------------------------------------
    // Backstory
    // ------------------------------------------------------------------

    fn randomize_backstory(&mut self, field: BackstoryField) -> bool;

    fn randomize_full_backstory(&mut self) -> bool;

    fn select_backstory(&mut self, field: BackstoryField, name: &str);

    fn select_significant_reason(&mut self, why: &str);

    fn set_backstory_description(&mut self, field: BackstoryField, text: &str);

    fn is_backstory_complete(&self) -> bool;

    // ------------------------------------------------------------------
    // Observation
    // ------------------------------------------------------------------

    fn subscribe(&mut self, observer: CharacterObserver) -> SubscriptionId;

    fn unsubscribe(&mut self, id: SubscriptionId) -> bool;

    fn character_sheet(&self) -> Option<CharacterSheet>;
}

/// Default implementation of CharacterService over the outbound ports
pub struct CharacterServiceImpl {
    dice: DiceService,
    derived: DerivedStatsService,
    rolls: RollService,
    ages: AgeEffectsService,
    occupations: OccupationService,
    backstory: BackstoryService,
    reference: Arc<ReferenceData>,
    storage: Arc<dyn CharacterStoragePort>,
    save_slot: String,
    character: Option<Character>,
    observers: Vec<(SubscriptionId, CharacterObserver)>,
    next_subscription: u64,
}

impl CharacterServiceImpl {
    pub fn new(
        rng: Arc<dyn RandomPort>,
        reference: Arc<ReferenceData>,
        storage: Arc<dyn CharacterStoragePort>,
    ) -> Self {
        let dice = DiceService::new(rng);
        let derived = DerivedStatsService::new();
        let rolls = RollService::new(dice.clone());
        let ages = AgeEffectsService::new(dice.clone(), rolls.clone(), derived);
        let backstory = BackstoryService::new(dice.clone(), Arc::new(reference.backstory.clone()));

        Self {
            dice,
            derived,
            rolls,
            ages,
            occupations: OccupationService::new(derived),
            backstory,
            reference,
            storage,
            save_slot: DEFAULT_SAVE_SLOT.to_string(),
            character: None,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn with_save_slot(mut self, slot: impl Into<String>) -> Self {
        self.save_slot = slot.into();
        self
    }

    pub fn reference_data(&self) -> &ReferenceData {
        &self.reference
    }

    /// Recompute derived values and notify observers
    fn commit(&mut self, change: CharacterChange) {
        if let Some(character) = self.character.as_mut() {
            publish(&self.derived, &self.observers, change, character);
        }
    }

    /// Re-apply age effects after the base snapshot changed
    fn rebase(&mut self, stats: Vec<Stat>) {
        let Some(character) = self.character.as_mut() else {
            return;
        };
        self.ages.apply_age_effects(character);
        self.commit(CharacterChange::BaseStatsChanged { stats });
    }
}

/// Recompute derived values on `character` and hand a snapshot to observers
fn publish(
    derived: &DerivedStatsService,
    observers: &[(SubscriptionId, CharacterObserver)],
    change: CharacterChange,
    character: &mut Character,
) {
    derived.update_all(character);

    let event = CharacterEvent::new(change, character.clone());
    debug!(
        event_type = event.event_type(),
        observers = observers.len(),
        "Publishing character"
    );
    for (_, observer) in observers {
        observer(&event);
    }
}

impl CharacterService for CharacterServiceImpl {
    #[instrument(skip(self))]
    fn create_new_character(&mut self) -> &Character {
        let base_stats = self.dice.generate_base_stats();
        self.ages.clear_pending();

        info!(
            strength = base_stats.strength,
            constitution = base_stats.constitution,
            size = base_stats.size,
            dexterity = base_stats.dexterity,
            appearance = base_stats.appearance,
            intelligence = base_stats.intelligence,
            power = base_stats.power,
            education = base_stats.education,
            luck = base_stats.luck,
            "New character rolled"
        );

        let character = self
            .character
            .insert(Character::new(base_stats, self.reference.default_skills()));
        publish(&self.derived, &self.observers, CharacterChange::Created, character);
        character
    }

    fn current(&self) -> Option<&Character> {
        self.character.as_ref()
    }

    #[instrument(skip(self), fields(slot = %self.save_slot))]
    fn save(&self) -> Result<bool, StorageError> {
        let Some(character) = &self.character else {
            debug!("No character to save");
            return Ok(false);
        };
        let json = serde_json::to_string(character)?;
        self.storage.write_slot(&self.save_slot, &json)?;
        info!(name = %character.name, bytes = json.len(), "Character saved");
        Ok(true)
    }

    #[instrument(skip(self), fields(slot = %self.save_slot))]
    fn load(&mut self) -> Result<bool, StorageError> {
        let Some(json) = self.storage.read_slot(&self.save_slot)? else {
            debug!("No saved character");
            return Ok(false);
        };
        let character: Character = serde_json::from_str(&json)?;
        self.ages.restore_pending(&character);
        info!(name = %character.name, age = character.age, "Character loaded");

        self.character = Some(character);
        self.commit(CharacterChange::Loaded);
        Ok(true)
    }

    #[instrument(skip(self), fields(slot = %self.save_slot))]
    fn discard_saved(&self) -> Result<(), StorageError> {
        self.storage.remove_slot(&self.save_slot)
    }

    #[instrument(skip(self))]
    fn set_name(&mut self, name: &str) {
        if let Some(character) = self.character.as_mut() {
            character.name = name.trim().to_string();
            self.commit(CharacterChange::IdentityUpdated);
        }
    }

    #[instrument(skip(self))]
    fn set_age(&mut self, age: u32) {
        if let Some(character) = self.character.as_mut() {
            character.age = age;
            self.ages.apply_age_effects(character);
            self.commit(CharacterChange::AgeApplied { age });
        }
    }

    #[instrument(skip(self))]
    fn reroll_stat(&mut self, stat: Stat) -> Option<i32> {
        let character = self.character.as_mut()?;
        let value = self.dice.roll_stat(stat);
        character.set_base_stat(stat, value);
        info!(stat = %stat, value, "Characteristic rerolled");
        self.rebase(vec![stat]);
        Some(value)
    }

    #[instrument(skip(self))]
    fn reroll_all_stats(&mut self) {
        let Some(character) = self.character.as_mut() else {
            return;
        };
        character.base_stats = self.dice.generate_base_stats();
        self.rebase(Stat::ALL.to_vec());
    }

    #[instrument(skip(self))]
    fn set_base_stat(&mut self, stat: Stat, value: i32) -> Option<i32> {
        let value = value.clamp(stat.minimum(), STAT_CEILING);
        self.character.as_mut()?.set_base_stat(stat, value);
        self.rebase(vec![stat]);
        Some(value)
    }

    fn apply_stat_deduction(&mut self, stat: Stat, amount: i32) -> i32 {
        let Some(character) = self.character.as_mut() else {
            return 0;
        };
        let applied = self.ages.apply_stat_deduction(character, stat, amount);
        if applied != 0 {
            self.commit(CharacterChange::StatDeducted {
                stat,
                amount: applied,
            });
        }
        applied
    }

    fn pending_deduction(&self) -> Option<&PendingDeduction> {
        self.ages.deduction_info()
    }

    #[instrument(skip(self))]
    fn reroll_improvement_checks(&mut self) -> ImprovementCheckOutcome {
        let Some(character) = self.character.as_mut() else {
            return ImprovementCheckOutcome::default();
        };
        let outcome = self
            .rolls
            .reroll_all_improvement_checks(character, Stat::Education);
        self.commit(CharacterChange::ImprovementRerolled {
            stat: Stat::Education,
        });
        outcome
    }

    #[instrument(skip(self))]
    fn reroll_improvement_amount(&mut self, index: usize) -> Option<i32> {
        let character = self.character.as_mut()?;
        let gain = self
            .rolls
            .reroll_improvement_amount(character, Stat::Education, index)?;
        self.commit(CharacterChange::ImprovementRerolled {
            stat: Stat::Education,
        });
        Some(gain)
    }

    #[instrument(skip(self, occupation), fields(occupation = %occupation.name))]
    fn set_occupation(&mut self, occupation: Occupation) {
        if let Some(character) = self.character.as_mut() {
            let name = occupation.name.clone();
            self.occupations.set_occupation(character, occupation);
            self.commit(CharacterChange::OccupationSet { occupation: name });
        }
    }

    fn select_occupation(&mut self, name: &str) -> bool {
        if self.character.is_none() {
            return false;
        }
        match self.reference.find_occupation(name).cloned() {
            Some(occupation) => {
                self.set_occupation(occupation);
                true
            }
            None => {
                debug!(name, "Unknown occupation");
                false
            }
        }
    }

    fn allocate_skill_points(&mut self, skill: &str, points: i32) -> bool {
        let Some(character) = self.character.as_mut() else {
            return false;
        };
        if !self.occupations.allocate_skill_points(character, skill, points) {
            return false;
        }
        self.commit(CharacterChange::SkillPointsAllocated {
            skill: skill.to_string(),
            points,
        });
        true
    }

    fn select_skill(&mut self, skill: &str) -> bool {
        let Some(character) = self.character.as_mut() else {
            return false;
        };
        if !self.occupations.select_skill(character, skill) {
            return false;
        }
        self.commit(CharacterChange::SkillSelectionChanged {
            skill: skill.to_string(),
            selected: true,
        });
        true
    }

    fn deselect_skill(&mut self, skill: &str) -> bool {
        let Some(character) = self.character.as_mut() else {
            return false;
        };
        if !self.occupations.deselect_skill(character, skill) {
            return false;
        }
        self.commit(CharacterChange::SkillSelectionChanged {
            skill: skill.to_string(),
            selected: false,
        });
        true
    }

    fn randomize_backstory(&mut self, field: BackstoryField) -> bool {
        let Some(character) = self.character.as_mut() else {
            return false;
        };
        let filled = self.backstory.randomize(character, field);
        if filled {
            self.commit(CharacterChange::BackstoryUpdated { field });
        }
        filled
    }

    fn randomize_full_backstory(&mut self) -> bool {
        let Some(character) = self.character.as_mut() else {
            return false;
        };
        let filled = self.backstory.randomize_all(character);
        self.commit(CharacterChange::BackstoryRandomized);
        filled
    }

    fn select_backstory(&mut self, field: BackstoryField, name: &str) {
        if let Some(character) = self.character.as_mut() {
            self.backstory.select(character, field, name);
            self.commit(CharacterChange::BackstoryUpdated { field });
        }
    }

    fn select_significant_reason(&mut self, why: &str) {
        if let Some(character) = self.character.as_mut() {
            self.backstory.select_significant_reason(character, why);
            self.commit(CharacterChange::BackstoryUpdated {
                field: BackstoryField::SignificantPerson,
            });
        }
    }

    fn set_backstory_description(&mut self, field: BackstoryField, text: &str) {
        if let Some(character) = self.character.as_mut() {
            self.backstory.set_description(character, field, text);
            self.commit(CharacterChange::BackstoryUpdated { field });
        }
    }

    fn is_backstory_complete(&self) -> bool {
        self.character
            .as_ref()
            .is_some_and(|c| self.backstory.is_complete(c))
    }

    fn subscribe(&mut self, observer: CharacterObserver) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, observer));
        id
    }

    fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    fn character_sheet(&self) -> Option<CharacterSheet> {
        self.character.as_ref().map(CharacterSheet::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use crate::application::ports::outbound::{FixedRandomPort, MockCharacterStoragePort};
    use crate::domain::entities::{Skill, CREDIT_RATING, DODGE, LANGUAGE_OWN};
    use crate::domain::value_objects::{BackstoryOption, BackstoryTables, ModifierSource};
    use crate::infrastructure::persistence::InMemoryStorage;

    fn reference() -> Arc<ReferenceData> {
        let skills = vec![
            Skill::new("Art/Craft", 5),
            Skill::new(CREDIT_RATING, 0),
            Skill::new(DODGE, 0),
            Skill::new("Firearms (Handgun)", 20),
            Skill::new(LANGUAGE_OWN, 0),
            Skill::new("Occult", 5),
        ];
        let occupations = vec![Occupation::new("DILETTANTE", 50, 99, "EDU × 2 + APP × 2")
            .with_skill("Art/Craft")
            .with_skill("Firearms")
            .with_skill(CREDIT_RATING)];
        let option = |name: &str| BackstoryOption::new(name, "");
        let backstory = BackstoryTables {
            ideologies: vec![option("Scientist")],
            significant_people: vec![option("Mentor")],
            significant_reasons: vec![option("Debt")],
            meaningful_locations: vec![option("Library")],
            treasured_possessions: vec![option("Diary")],
            traits: vec![option("Curious")],
        };
        Arc::new(ReferenceData::new(skills, occupations, backstory))
    }

    fn service_with(
        rng: FixedRandomPort,
        storage: Arc<dyn CharacterStoragePort>,
    ) -> CharacterServiceImpl {
        CharacterServiceImpl::new(Arc::new(rng), reference(), storage)
    }

    fn service(value: i32) -> CharacterServiceImpl {
        service_with(
            FixedRandomPort::constant(value),
            Arc::new(InMemoryStorage::new()),
        )
    }

    #[test]
    fn test_operations_without_character_are_noops() {
        let mut svc = service(3);

        svc.set_age(45);
        svc.set_name("Nobody");
        assert!(svc.current().is_none());
        assert!(!svc.allocate_skill_points("Occult", 5));
        assert!(!svc.select_occupation("DILETTANTE"));
        assert_eq!(svc.apply_stat_deduction(Stat::Strength, 5), 0);
        assert!(svc.reroll_improvement_checks().rolls.is_empty());
        assert_eq!(svc.reroll_stat(Stat::Power), None);
        assert!(!svc.is_backstory_complete());
        assert!(svc.character_sheet().is_none());
        assert!(!svc.save().unwrap());
    }

    #[test]
    fn test_create_new_character() {
        let mut svc = service(3);

        let c = svc.create_new_character().clone();

        // 3d6 of threes = 45; (2d6 of threes + 6) * 5 = 60
        assert_eq!(c.stat(Stat::Strength), 45);
        assert_eq!(c.stat(Stat::Education), 60);
        assert_eq!(c.age, 20);
        assert_eq!(c.skills.len(), 6);
        assert_eq!(c.skill(DODGE).unwrap().base_value, 22);
        assert_eq!(c.skill(LANGUAGE_OWN).unwrap().base_value, 60);
        assert_eq!(c.derived.hit_points, 10);
    }

    #[test]
    fn test_age_change_updates_derived_values() {
        let mut svc = service(3);
        svc.create_new_character();

        svc.set_age(45);

        let c = svc.current().unwrap();
        assert_eq!(c.stat(Stat::Appearance), 40);
        // STR 45 and DEX 45 are both below SIZ 60: 7, less 1 for age
        assert_eq!(c.derived.movement_rate, 6);
        assert_eq!(svc.pending_deduction().unwrap().total_points, 5);

        assert_eq!(svc.apply_stat_deduction(Stat::Dexterity, 5), 5);
        let c = svc.current().unwrap();
        assert_eq!(c.skill(DODGE).unwrap().base_value, 20);
        assert_eq!(svc.pending_deduction().unwrap().remaining(), 0);
    }

    #[test]
    fn test_set_base_stat_clamps_and_keeps_age_effects() {
        let mut svc = service(3);
        svc.create_new_character();
        svc.set_age(45);

        assert_eq!(svc.set_base_stat(Stat::Appearance, 95), Some(90));
        assert_eq!(svc.set_base_stat(Stat::Size, 10), Some(40));

        let c = svc.current().unwrap();
        assert_eq!(c.stat(Stat::Appearance), 85);
        assert_eq!(c.stat(Stat::Size), 40);
        assert_eq!(
            c.stat_modifiers.for_stat(Stat::Appearance)[0].source,
            ModifierSource::AgeEffect
        );
    }

    #[test]
    fn test_reroll_stat_updates_base() {
        // Base stats take 24 draws; the reroll then sees 6, 3, 3
        let mut values = vec![3; 24];
        values.push(6);
        let mut svc = service_with(FixedRandomPort::new(values), Arc::new(InMemoryStorage::new()));
        svc.create_new_character();

        assert_eq!(svc.reroll_stat(Stat::Power), Some(60));
        assert_eq!(svc.current().unwrap().base_stat(Stat::Power), 60);
        assert_eq!(svc.current().unwrap().stat(Stat::Power), 60);
    }

    #[test]
    fn test_occupation_and_allocation() {
        let mut svc = service(3);
        svc.create_new_character();

        assert!(!svc.select_occupation("Hermit"));
        assert!(svc.select_occupation("dilettante"));

        let c = svc.current().unwrap();
        // EDU 60 * 2 + APP 45 * 2 = 210, 50 of it spent on credit rating
        assert_eq!(c.remaining_skill_points, 160);
        assert_eq!(c.skill(CREDIT_RATING).unwrap().total, 50);

        assert!(svc.allocate_skill_points("Firearms (Handgun)", 30));
        assert!(!svc.allocate_skill_points("Occult", 30));
        assert!(svc.select_skill("Occult"));
        assert!(svc.allocate_skill_points("Occult", 30));
        assert!(!svc.deselect_skill("Occult"));
        assert_eq!(svc.current().unwrap().remaining_skill_points, 100);
    }

    #[test]
    fn test_observers_receive_snapshots() {
        let mut svc = service(3);
        let seen: Arc<Mutex<Vec<(String, String)>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let id = svc.subscribe(Box::new(move |event: &CharacterEvent| {
            sink.lock().unwrap().push((
                event.event_type().to_string(),
                event.character.name.clone(),
            ));
        }));

        svc.create_new_character();
        svc.set_name("  Harvey Walters ");
        assert!(svc.unsubscribe(id));
        assert!(!svc.unsubscribe(id));
        svc.set_age(30);

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].0, "CharacterCreated");
        assert_eq!(
            seen[1],
            ("IdentityUpdated".to_string(), "Harvey Walters".to_string())
        );
    }

    #[test]
    fn test_backstory_operations() {
        let mut svc = service(1);
        svc.create_new_character();
        assert!(!svc.is_backstory_complete());

        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = events.clone();
        svc.subscribe(Box::new(move |event: &CharacterEvent| {
            sink.lock().unwrap().push(event.change.clone());
        }));

        assert!(svc.randomize_full_backstory());
        assert!(svc.is_backstory_complete());
        assert_eq!(
            *events.lock().unwrap(),
            vec![CharacterChange::BackstoryRandomized]
        );

        svc.select_backstory(BackstoryField::Trait, "Stubborn");
        svc.set_backstory_description(BackstoryField::Trait, "Never admits defeat");
        let trait_ = &svc.current().unwrap().backstory.trait_;
        assert_eq!(trait_.name, "Stubborn");
        assert_eq!(trait_.description.as_deref(), Some("Never admits defeat"));
    }

    #[test]
    fn test_save_writes_configured_slot() {
        let mut storage = MockCharacterStoragePort::new();
        storage
            .expect_write_slot()
            .withf(|slot, contents| slot == "slot-a" && contents.contains("\"name\":\"Carl\""))
            .times(1)
            .returning(|_, _| Ok(()));

        let mut svc = service_with(FixedRandomPort::constant(3), Arc::new(storage))
            .with_save_slot("slot-a");
        svc.create_new_character();
        svc.set_name("Carl");

        assert!(svc.save().unwrap());
    }

    #[test]
    fn test_load_missing_slot() {
        let mut storage = MockCharacterStoragePort::new();
        storage.expect_read_slot().returning(|_| Ok(None));

        let mut svc = service_with(FixedRandomPort::constant(3), Arc::new(storage));
        assert!(!svc.load().unwrap());
        assert!(svc.current().is_none());
    }

    #[test]
    fn test_load_rejects_corrupt_json() {
        let mut storage = MockCharacterStoragePort::new();
        storage
            .expect_read_slot()
            .returning(|_| Ok(Some("{not json".to_string())));

        let mut svc = service_with(FixedRandomPort::constant(3), Arc::new(storage));
        assert!(matches!(svc.load(), Err(StorageError::Serialization(_))));
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let storage: Arc<dyn CharacterStoragePort> = Arc::new(InMemoryStorage::new());
        let mut first = service_with(FixedRandomPort::constant(3), storage.clone());
        first.create_new_character();
        first.set_name("Harvey Walters");
        first.set_age(55);
        first.apply_stat_deduction(Stat::Strength, 4);
        first.select_occupation("DILETTANTE");
        first.save().unwrap();

        let mut second = service_with(FixedRandomPort::constant(3), storage);
        assert!(second.load().unwrap());

        assert_eq!(second.current(), first.current());
        assert_eq!(second.pending_deduction(), first.pending_deduction());
    }
}
