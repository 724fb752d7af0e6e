use std::cell::RefCell;
use std::collections::HashMap;
use std::convert::Infallible;
use std::rc::Rc;

/// Persistent string slots, e.g. the browser's `localStorage`.
///
/// Platform crates provide the implementation; writes replace the whole value.
pub trait KeyValueStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Read a slot.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Overwrite a slot.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error>;

    /// Delete a slot; deleting an absent slot is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the delete.
    fn remove(&self, key: &str) -> Result<(), Self::Error>;
}

/// In-memory slots. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-seeded with one slot.
    #[must_use]
    pub fn with_slot(key: &str, value: &str) -> Self {
        let store = Self::default();
        store
            .slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    #[must_use]
    pub fn slot(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    type Error = Infallible;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.slot(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), Self::Error> {
        self.slots.borrow_mut().remove(key);
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    type Error = S::Error;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), Self::Error> {
        (**self).remove(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_slots() {
        let store = MemoryStore::new();
        let handle = store.clone();
        store.set("k", "v").unwrap();
        assert_eq!(handle.get("k").unwrap().as_deref(), Some("v"));
        handle.remove("k").unwrap();
        assert!(store.get("k").unwrap().is_none());
        handle.remove("k").unwrap();
    }
}
