//! File-backed slot storage

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::application::ports::outbound::{CharacterStoragePort, StorageError};

/// Stores every slot as `<base_dir>/<slot>.json`
///
/// Writes go to a temp file first and are renamed into place, so a crash
/// never leaves a half-written save behind.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    base_dir: PathBuf,
}

impl JsonFileStorage {
    /// Open (and create if needed) the storage directory
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self, StorageError> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn slot_path(&self, slot: &str) -> Result<PathBuf, StorageError> {
        let valid = !slot.is_empty()
            && slot
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StorageError::Unavailable(format!(
                "invalid slot name {slot:?}"
            )));
        }
        Ok(self.base_dir.join(format!("{slot}.json")))
    }
}

impl CharacterStoragePort for JsonFileStorage {
    fn read_slot(&self, slot: &str) -> Result<Option<String>, StorageError> {
        let path = self.slot_path(slot)?;
        match fs::read_to_string(&path) {
            Ok(contents) => {
                debug!(path = %path.display(), bytes = contents.len(), "Read slot");
                Ok(Some(contents))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write_slot(&self, slot: &str, contents: &str) -> Result<(), StorageError> {
        let path = self.slot_path(slot)?;
        let temp_path = path.with_extension("json.tmp");

        fs::write(&temp_path, contents)?;
        if let Err(e) = fs::rename(&temp_path, &path) {
            let _ = fs::remove_file(&temp_path);
            return Err(e.into());
        }

        debug!(path = %path.display(), bytes = contents.len(), "Wrote slot");
        Ok(())
    }

    fn remove_slot(&self, slot: &str) -> Result<(), StorageError> {
        let path = self.slot_path(slot)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!(path = %path.display(), "Removed slot");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_then_read() {
        let dir = TempDir::new().unwrap();
        let storage = JsonFileStorage::new(dir.path()).unwrap();

        storage.write_slot("savedCharacter", "{\"name\":\"Carl\"}").unwrap();

        assert!(dir.path().join("savedCharacter.json").exists());
        assert_eq!(
            storage.read_slot("savedCharacter").unwrap().as_deref(),
            Some("{\"name\":\"Carl\"}")
        );
    }

    #[test]
    fn test_missing_slot_reads_none() {
        let dir = TempDir::new().unwrap();
        let storage = JsonFileStorage::new(dir.path()).unwrap();

        assert!(storage.read_slot("nothing").unwrap().is_none());
        storage.remove_slot("nothing").unwrap();
    }

    #[test]
    fn test_overwrite_and_remove() {
        let dir = TempDir::new().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("nested")).unwrap();

        storage.write_slot("a", "1").unwrap();
        storage.write_slot("a", "2").unwrap();
        assert_eq!(storage.read_slot("a").unwrap().as_deref(), Some("2"));
        assert!(!dir.path().join("nested").join("a.json.tmp").exists());

        storage.remove_slot("a").unwrap();
        assert!(storage.read_slot("a").unwrap().is_none());
    }

    #[test]
    fn test_failed_rename_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let storage = JsonFileStorage::new(dir.path()).unwrap();
        // A non-empty directory where the slot file should go blocks the rename
        fs::create_dir_all(dir.path().join("blocked.json").join("inner")).unwrap();

        assert!(matches!(
            storage.write_slot("blocked", "{}"),
            Err(StorageError::Io(_))
        ));
        assert!(!dir.path().join("blocked.json.tmp").exists());
    }

    #[test]
    fn test_rejects_path_like_slot_names() {
        let dir = TempDir::new().unwrap();
        let storage = JsonFileStorage::new(dir.path()).unwrap();

        assert!(matches!(
            storage.write_slot("../escape", "{}"),
            Err(StorageError::Unavailable(_))
        ));
        assert!(storage.read_slot("").is_err());
    }
}
