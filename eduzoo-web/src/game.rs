//! Web-specific game storage
//!
//! Implements the eduzoo-game storage trait over `localStorage` and
//! re-exports the core game types.

use web_sys::Storage;

// Re-export all types from eduzoo-game
pub use eduzoo_game::*;

#[derive(Debug, thiserror::Error)]
pub enum WebStorageError {
    #[error("localStorage unavailable: {0}")]
    Unavailable(String),
    #[error("storage error: {0}")]
    Storage(String),
}

/// Save slots in the browser's `localStorage`.
pub struct LocalStorageStore {
    storage: Storage,
}

impl LocalStorageStore {
    /// # Errors
    ///
    /// Returns an error when the page has no usable `localStorage`
    /// (private mode, sandboxed iframe, non-browser host).
    pub fn open() -> Result<Self, WebStorageError> {
        crate::dom::local_storage()
            .map(|storage| Self { storage })
            .map_err(|err| WebStorageError::Unavailable(crate::dom::js_error_message(&err)))
    }
}

fn storage_error(err: &wasm_bindgen::JsValue) -> WebStorageError {
    WebStorageError::Storage(crate::dom::js_error_message(err))
}

impl KeyValueStore for LocalStorageStore {
    type Error = WebStorageError;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        self.storage.get_item(key).map_err(|e| storage_error(&e))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.storage.set_item(key, value).map_err(|e| storage_error(&e))
    }

    fn remove(&self, key: &str) -> Result<(), Self::Error> {
        self.storage.remove_item(key).map_err(|e| storage_error(&e))
    }
}

/// Open the player's progress from `localStorage`.
///
/// # Errors
///
/// Returns an error when `localStorage` is unavailable.
pub fn open_web_progress() -> Result<GameProgressStore<LocalStorageStore>, WebStorageError> {
    let storage = LocalStorageStore::open()?;
    Ok(GameProgressStore::open(
        storage,
        GameConfig::load_from_static(),
    ))
}
