//! Session store: signed-in user and auth token.
//!
//! The token is opaque here. The backend issues it and enforces whatever
//! it means; this store only keeps it durable across reloads so the
//! client can replay it on requests.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use verdant_core::UserId;

use crate::Listener;
use crate::persist::{self, Persister};

/// Profile of the signed-in user, as supplied by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct SessionSnapshot {
    user: Option<UserProfile>,
    token: Option<String>,
}

/// Client-side session state backed by a durable snapshot.
///
/// User and token are independent: either can be set or cleared on its
/// own, and each change persists the whole snapshot under
/// [`Self::STORAGE_KEY`].
pub struct SessionStore {
    snapshot: SessionSnapshot,
    persister: Arc<dyn Persister>,
    subscribers: Vec<Listener>,
}

impl SessionStore {
    /// Key the session snapshot is persisted under.
    pub const STORAGE_KEY: &'static str = "user-store";

    /// Create a session store, rehydrating any persisted snapshot.
    #[must_use]
    pub fn new(persister: Arc<dyn Persister>) -> Self {
        let snapshot = persist::load_or_default(persister.as_ref(), Self::STORAGE_KEY);
        Self {
            snapshot,
            persister,
            subscribers: Vec::new(),
        }
    }

    /// The signed-in user, if any.
    #[must_use]
    pub fn user(&self) -> Option<&UserProfile> {
        self.snapshot.user.as_ref()
    }

    /// The stored auth token, if any.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.snapshot.token.as_deref()
    }

    /// Whether a token is present. Possession only; validity is the
    /// backend's call.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.snapshot.token.is_some()
    }

    /// Store the signed-in user's profile.
    pub fn set_user(&mut self, user: UserProfile) {
        self.snapshot.user = Some(user);
        self.commit();
    }

    /// Forget the signed-in user. No-op if none is set.
    pub fn clear_user(&mut self) {
        if self.snapshot.user.take().is_some() {
            self.commit();
        }
    }

    /// Store the auth token.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.snapshot.token = Some(token.into());
        self.commit();
    }

    /// Forget the auth token. No-op if none is set.
    pub fn clear_token(&mut self) {
        if self.snapshot.token.take().is_some() {
            self.commit();
        }
    }

    /// Register a listener invoked after each applied mutation.
    pub fn subscribe(&mut self, listener: impl Fn() + Send + 'static) {
        self.subscribers.push(Box::new(listener));
    }

    fn commit(&self) {
        persist::persist_state(self.persister.as_ref(), Self::STORAGE_KEY, &self.snapshot);
        for listener in &self.subscribers {
            listener();
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::persist::MemoryPersister;

    use super::*;

    fn profile() -> UserProfile {
        UserProfile {
            id: UserId::new("u1"),
            name: "Asha".to_owned(),
            email: "asha@example.com".to_owned(),
        }
    }

    #[test]
    fn test_starts_signed_out() {
        let session = SessionStore::new(Arc::new(MemoryPersister::new()));
        assert!(session.user().is_none());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_token_round_trip() {
        let mut session = SessionStore::new(Arc::new(MemoryPersister::new()));
        session.set_token("jwt-opaque-blob");

        assert!(session.is_authenticated());
        assert_eq!(session.token(), Some("jwt-opaque-blob"));

        session.clear_token();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_user_and_token_are_independent() {
        let mut session = SessionStore::new(Arc::new(MemoryPersister::new()));
        session.set_user(profile());
        session.set_token("t");
        session.clear_user();

        assert!(session.user().is_none());
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_session_survives_rehydration() {
        let persister: Arc<dyn Persister> = Arc::new(MemoryPersister::new());
        {
            let mut session = SessionStore::new(Arc::clone(&persister));
            session.set_user(profile());
            session.set_token("t");
        }

        let session = SessionStore::new(persister);
        assert_eq!(session.user(), Some(&profile()));
        assert_eq!(session.token(), Some("t"));
    }
}
