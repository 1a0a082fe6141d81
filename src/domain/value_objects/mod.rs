//! Value objects - Immutable objects defined by their attributes

mod age_range;
mod backstory_tables;
mod damage_bonus;
mod improvement_roll;
mod pending_deduction;
mod reference_data;
mod skill_point_formula;
mod stat;
mod stat_modifier;

pub use age_range::{AgeRange, AgeSpecialEffect, StatDeduction};
pub use backstory_tables::{BackstoryOption, BackstoryTables};
pub use damage_bonus::DamageBonus;
pub use improvement_roll::{ImprovementCheckOutcome, ImprovementRoll};
pub use pending_deduction::PendingDeduction;
pub use reference_data::ReferenceData;
pub use skill_point_formula::{FormulaError, FormulaTerm, SkillPointFormula};
pub use stat::{Stat, StatParseError, Stats, HIGH_STAT_FLOOR, STAT_CEILING, STAT_FLOOR};
pub use stat_modifier::{ModifierSource, StatModifier, StatModifiers};
