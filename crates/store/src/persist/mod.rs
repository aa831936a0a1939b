//! Durable key-value persistence for store snapshots.
//!
//! Each store keeps its full state in memory and writes a JSON snapshot
//! under its own namespaced key after every mutation. The [`Persister`]
//! trait abstracts the storage medium; [`FilePersister`] backs it with
//! one file per key, [`MemoryPersister`] keeps everything in a map for
//! tests and ephemeral sessions.
//!
//! Snapshots are deliberately human-readable JSON so they can be
//! inspected and edited outside the application.

mod file;
mod memory;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::PersistError;

pub use file::FilePersister;
pub use memory::MemoryPersister;

/// A key-value persistence medium for store snapshots.
///
/// All methods take `&self`; implementations use interior mutability so a
/// single persister instance can back several stores. Keys are opaque
/// strings chosen by the stores, values are serialized JSON.
pub trait Persister: Send + Sync {
    /// Retrieve the value stored under `key`.
    ///
    /// Returns `Ok(None)` if the key has never been written.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage medium cannot be read.
    fn load(&self, key: &str) -> Result<Option<String>, PersistError>;

    /// Overwrite the value stored under `key`.
    ///
    /// The write must be atomic from a reader's point of view: a
    /// subsequent [`load`](Persister::load) observes either the previous
    /// value or the new one, never a partial write.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage medium cannot be written.
    fn save(&self, key: &str, value: &str) -> Result<(), PersistError>;

    /// Remove the value stored under `key`, if any.
    ///
    /// Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage medium cannot be written.
    fn remove(&self, key: &str) -> Result<(), PersistError>;
}

/// Rehydrate a store's state from its persisted snapshot.
///
/// An absent key yields the default state. A snapshot that fails to parse
/// is treated the same way: corruption must never abort initialization,
/// so the corrupt value is logged, discarded, and overwritten by the next
/// mutation.
pub fn load_or_default<T>(persister: &dyn Persister, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    match persister.load(key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(state) => {
                debug!(key, "rehydrated persisted state");
                state
            }
            Err(error) => {
                warn!(key, %error, "discarding corrupt persisted snapshot");
                T::default()
            }
        },
        Ok(None) => T::default(),
        Err(error) => {
            warn!(key, %error, "failed to read persisted state, starting empty");
            T::default()
        }
    }
}

/// Write a store's full state under its key, swallowing failures.
///
/// Persistence is fire-and-forget: a failed write degrades durability but
/// must not abort the in-memory mutation that triggered it, so errors are
/// logged and dropped here rather than surfaced to the store's caller.
pub fn persist_state<T: Serialize>(persister: &dyn Persister, key: &str, state: &T) {
    let raw = match serde_json::to_string(state) {
        Ok(raw) => raw,
        Err(error) => {
            warn!(key, %error, "failed to serialize state for persistence");
            return;
        }
    };

    if let Err(error) = persister.save(key, &raw) {
        warn!(key, %error, "failed to persist state, in-memory state unaffected");
    }
}
