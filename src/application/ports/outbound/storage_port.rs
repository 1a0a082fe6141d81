//! Storage port - local-storage style named slots holding JSON text

/// Errors raised by slot storage adapters
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// A key/value store of whole JSON documents
///
/// Reads and writes are wholesale: there is no partial update and no schema
/// versioning.
#[cfg_attr(test, mockall::automock)]
pub trait CharacterStoragePort: Send + Sync {
    /// Read the raw contents of `slot`, `None` when it was never written
    fn read_slot(&self, slot: &str) -> Result<Option<String>, StorageError>;

    /// Replace the contents of `slot`
    fn write_slot(&self, slot: &str, contents: &str) -> Result<(), StorageError>;

    /// Delete `slot`; removing a missing slot is not an error
    fn remove_slot(&self, slot: &str) -> Result<(), StorageError>;
}
