//! Outbound ports - Interfaces that the application requires from external systems

mod random_port;
mod storage_port;

#[cfg(test)]
pub use random_port::MockRandomPort;
pub use random_port::{FixedRandomPort, RandomPort};
#[cfg(test)]
pub use storage_port::MockCharacterStoragePort;
pub use storage_port::{CharacterStoragePort, StorageError};
