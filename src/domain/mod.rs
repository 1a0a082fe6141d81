//! Domain layer - Core rules with no external dependencies
//!
//! This layer contains:
//! - Entities: Character, Skill, Occupation, Backstory
//! - Value Objects: Stats, modifiers, age brackets, formulas
//! - Domain Events: Character snapshots published on every change

pub mod entities;
pub mod events;
pub mod value_objects;
