use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use eduzoo_game::KeyValueStore;

#[derive(Debug, thiserror::Error)]
pub enum FileStoreError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path} is not a slot file: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Save slots kept in a JSON object on disk, one string value per key.
///
/// Every call re-reads the file, so several stores over the same path see
/// each other's writes the way tabs share `localStorage`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Delete the backing file; a missing file is fine.
    pub fn clear(&self) -> Result<(), FileStoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(self.io_error(source)),
        }
    }

    /// Overwrite the backing file with raw text, bypassing the slot layout.
    pub fn write_raw(&self, contents: &str) -> Result<(), FileStoreError> {
        std::fs::write(&self.path, contents).map_err(|source| self.io_error(source))
    }

    fn io_error(&self, source: std::io::Error) -> FileStoreError {
        FileStoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn load(&self) -> Result<BTreeMap<String, String>, FileStoreError> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(BTreeMap::new());
            }
            Err(source) => return Err(self.io_error(source)),
        };
        serde_json::from_str(&text).map_err(|source| FileStoreError::Json {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, slots: &BTreeMap<String, String>) -> Result<(), FileStoreError> {
        let text = serde_json::to_string_pretty(slots).map_err(|source| FileStoreError::Json {
            path: self.path.clone(),
            source,
        })?;
        std::fs::write(&self.path, text).map_err(|source| self.io_error(source))
    }
}

impl KeyValueStore for JsonFileStore {
    type Error = FileStoreError;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        let mut slots = self.load()?;
        slots.insert(key.to_string(), value.to_string());
        self.save(&slots)
    }

    fn remove(&self, key: &str) -> Result<(), Self::Error> {
        let mut slots = self.load()?;
        if slots.remove(key).is_some() {
            self.save(&slots)?;
        }
        Ok(())
    }
}
