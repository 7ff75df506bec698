//! File-backed store: one `<key>.json` per record under the data directory.

use std::path::PathBuf;

use super::{data_dir, Storage};
use crate::error::PersistenceError;

/// Key-value store persisting each record as a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Open the store at the default data directory.
    ///
    /// # Errors
    /// Returns [`PersistenceError`] if the directory cannot be created.
    pub fn open() -> Result<Self, PersistenceError> {
        let dir = data_dir().map_err(|e| PersistenceError::LoadFailed {
            key: "data_dir".to_string(),
            message: e.to_string(),
        })?;
        Ok(Self { dir })
    }

    /// Open the store at an explicit directory.
    pub fn with_dir(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for JsonFileStore {
    fn load(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PersistenceError::LoadFailed {
                key: key.to_string(),
                message: e.to_string(),
            }),
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        std::fs::write(self.path_for(key), value).map_err(|e| PersistenceError::SaveFailed {
            key: key.to_string(),
            message: e.to_string(),
        })
    }
}
