//! Root state container owned by the application's composition root.
//!
//! There is no module-level singleton: the application builds one
//! [`ClientState`] at startup and passes it (or individual stores) down
//! to the views that need it. Tests build isolated instances the same
//! way, usually over [`ClientState::in_memory`].

use std::sync::Arc;

use crate::cart::CartStore;
use crate::config::StorageConfig;
use crate::error::PersistError;
use crate::persist::{FilePersister, MemoryPersister, Persister};
use crate::session::SessionStore;
use crate::wishlist::WishlistStore;

/// All client-side stores, wired to a shared persister.
///
/// Each store rehydrates from its own key at construction; after that the
/// stores are independent and each persists on its own mutations.
pub struct ClientState {
    cart: CartStore,
    wishlist: WishlistStore,
    session: SessionStore,
}

impl ClientState {
    /// Open the stores over file-backed persistence.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created. Corrupt
    /// or absent snapshots are not errors; the affected store starts
    /// empty.
    pub fn open(config: &StorageConfig) -> Result<Self, PersistError> {
        let persister: Arc<dyn Persister> = Arc::new(FilePersister::open(&config.data_dir)?);
        Ok(Self::over(persister))
    }

    /// Build the stores over an in-memory persister. Nothing survives the
    /// process; intended for tests and ephemeral sessions.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::over(Arc::new(MemoryPersister::new()))
    }

    /// Build the stores over any persister.
    #[must_use]
    pub fn over(persister: Arc<dyn Persister>) -> Self {
        Self {
            cart: CartStore::new(Arc::clone(&persister)),
            wishlist: WishlistStore::new(Arc::clone(&persister)),
            session: SessionStore::new(persister),
        }
    }

    /// The cart store.
    #[must_use]
    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// The cart store, for mutation.
    pub fn cart_mut(&mut self) -> &mut CartStore {
        &mut self.cart
    }

    /// The wishlist store.
    #[must_use]
    pub fn wishlist(&self) -> &WishlistStore {
        &self.wishlist
    }

    /// The wishlist store, for mutation.
    pub fn wishlist_mut(&mut self) -> &mut WishlistStore {
        &mut self.wishlist
    }

    /// The session store.
    #[must_use]
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// The session store, for mutation.
    pub fn session_mut(&mut self) -> &mut SessionStore {
        &mut self.session
    }
}
