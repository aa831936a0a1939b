//! In-memory persister for tests and ephemeral sessions.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::PersistError;

use super::Persister;

/// A [`Persister`] backed by an in-process map.
///
/// Nothing survives the process; useful for tests and for running the
/// stores without a data directory.
#[derive(Debug, Default)]
pub struct MemoryPersister {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryPersister {
    /// Create an empty in-memory persister.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Persister for MemoryPersister {
    fn load(&self, key: &str) -> Result<Option<String>, PersistError> {
        let entries = self.entries.lock().map_err(|_| PersistError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), PersistError> {
        let mut entries = self.entries.lock().map_err(|_| PersistError::Poisoned)?;
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), PersistError> {
        let mut entries = self.entries.lock().map_err(|_| PersistError::Poisoned)?;
        entries.remove(key);
        Ok(())
    }
}
