//! Investigator Builder - Character creation rules engine
//!
//! The engine builds a 7th edition investigator step by step:
//! - Rolls characteristics and applies age-bracket effects
//! - Derives damage bonus, build, hit points and movement rate
//! - Spends occupation skill points within the credit rating range
//! - Fills in the backstory from flavor tables
//! - Saves and restores the character as a JSON document

pub mod application;
pub mod domain;
pub mod infrastructure;
