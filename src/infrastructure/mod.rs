//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - Config: Application configuration
//! - Persistence: JSON slot storage on disk or in memory
//! - Random: `rand`-backed dice source
//! - Reference data: Skill, occupation and backstory tables

pub mod config;
pub mod persistence;
pub mod random;
pub mod reference_data;
