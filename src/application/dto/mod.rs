//! Data Transfer Objects - For output boundaries
//!
//! DTOs live in the application layer so drivers can serialize a printable
//! view without reaching into the domain model.

pub mod character_sheet;

pub use character_sheet::*;
