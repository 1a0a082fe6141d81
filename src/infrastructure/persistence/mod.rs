//! Slot storage adapters
//!
//! Both adapters implement `CharacterStoragePort`: one keeps each slot as a
//! JSON file on disk, the other keeps slots in memory for tests and
//! throwaway sessions.

mod json_file_storage;
mod memory_storage;

pub use json_file_storage::JsonFileStorage;
pub use memory_storage::InMemoryStorage;
