//! In-memory slot storage

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::application::ports::outbound::{CharacterStoragePort, StorageError};

/// Slots kept in a map for the lifetime of the process
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    slots: Mutex<HashMap<String, String>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lock().map(|slots| slots.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, String>>, StorageError> {
        self.slots
            .lock()
            .map_err(|_| StorageError::Unavailable("storage lock poisoned".to_string()))
    }
}

impl CharacterStoragePort for InMemoryStorage {
    fn read_slot(&self, slot: &str) -> Result<Option<String>, StorageError> {
        Ok(self.lock()?.get(slot).cloned())
    }

    fn write_slot(&self, slot: &str, contents: &str) -> Result<(), StorageError> {
        self.lock()?.insert(slot.to_string(), contents.to_string());
        Ok(())
    }

    fn remove_slot(&self, slot: &str) -> Result<(), StorageError> {
        self.lock()?.remove(slot);
        Ok(())
    }
}
