//! Occupation Service - occupational skills, skill-point budget and allocation

use tracing::{debug, info, warn};

use super::DerivedStatsService;
use crate::domain::entities::{Character, Occupation, CREDIT_RATING};

#[derive(Debug, Clone, Copy, Default)]
pub struct OccupationService {
    derived: DerivedStatsService,
}

impl OccupationService {
    pub fn new(derived: DerivedStatsService) -> Self {
        Self { derived }
    }

    /// Adopt `occupation`: flag its skills, grant its budget, bound credit rating
    pub fn set_occupation(&self, character: &mut Character, occupation: Occupation) {
        for skill in &mut character.skills {
            skill.occupational_skill = occupation
                .skills
                .iter()
                .any(|entry| skill.matches_occupation_entry(entry));
        }

        character.remaining_skill_points = self
            .derived
            .calculate_occupation_skill_points(character, &occupation);

        info!(
            occupation = %occupation.name,
            formula = %occupation.skill_points_formula,
            skill_points = character.remaining_skill_points,
            "Occupation set"
        );

        character.occupation = Some(occupation);
        self.ensure_credit_rating_in_range(character);
    }

    /// Force Credit Rating into the occupation's range, paying from the pool
    ///
    /// Raising to the minimum is charged even when the pool cannot cover it.
    pub fn ensure_credit_rating_in_range(&self, character: &mut Character) {
        let Some(range) = character.occupation.as_ref().map(Occupation::credit_rating_range) else {
            return;
        };
        let Some(credit) = character.skill_mut(CREDIT_RATING) else {
            return;
        };

        let adjustment = if credit.total < *range.start() {
            range.start() - credit.total
        } else if credit.total > *range.end() {
            range.end() - credit.total
        } else {
            return;
        };

        credit.add_improvement(adjustment);
        let total = credit.total;
        character.remaining_skill_points -= adjustment;

        debug!(adjustment, credit_rating = total, "Credit rating forced into range");
        if character.remaining_skill_points < 0 {
            warn!(
                remaining = character.remaining_skill_points,
                "Credit rating minimum exceeds the occupation's skill points"
            );
        }
    }

    /// Move `points` between the pool and `skill_name`
    ///
    /// Negative points return allocated points to the pool. Positive points
    /// need enough pool and an occupational or selected skill.
    pub fn allocate_skill_points(&self, character: &mut Character, skill_name: &str, points: i32) -> bool {
        let remaining = character.remaining_skill_points;
        let Some(skill) = character.skill_mut(skill_name) else {
            debug!(skill = skill_name, "Unknown skill");
            return false;
        };

        if points < 0 {
            if -points > skill.improvement_points {
                debug!(skill = skill_name, points, "Cannot remove more than allocated");
                return false;
            }
        } else if points == 0 || points > remaining || !skill.can_receive_points() {
            debug!(skill = skill_name, points, remaining, "Allocation rejected");
            return false;
        }

        skill.add_improvement(points);
        let total = skill.total;
        character.remaining_skill_points -= points;

        debug!(
            skill = skill_name,
            points,
            total,
            remaining = character.remaining_skill_points,
            "Skill points allocated"
        );
        true
    }

    /// Opt a skill in as a personal interest
    pub fn select_skill(&self, character: &mut Character, skill_name: &str) -> bool {
        match character.skill_mut(skill_name) {
            Some(skill) => {
                skill.is_selected = Some(true);
                true
            }
            None => false,
        }
    }

    /// Opt a skill out again; refused while it still holds points
    pub fn deselect_skill(&self, character: &mut Character, skill_name: &str) -> bool {
        match character.skill_mut(skill_name) {
            Some(skill) if skill.improvement_points == 0 => {
                skill.is_selected = Some(false);
                true
            }
            _ => false,
        }
    }
}
