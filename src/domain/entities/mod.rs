//! Domain entities - Core business objects

mod backstory;
mod character;
mod occupation;
mod skill;

pub use backstory::{Backstory, BackstoryEntry, BackstoryField, SignificantPerson};
pub use character::{Character, DerivedAttributes, DEFAULT_AGE};
pub use occupation::Occupation;
pub use skill::{Skill, CREDIT_RATING, DODGE, LANGUAGE_OWN};
