//! Verdant Store - client-side state for the storefront.
//!
//! This crate owns the cart, wishlist, and session state for a storefront
//! client. Each store is the single source of truth for its collection:
//! the UI layer reads snapshots and calls the mutation surface, and every
//! mutation writes a JSON snapshot through a [`persist::Persister`] so
//! state survives restarts.
//!
//! Stores are explicit values, not globals: build a [`state::ClientState`]
//! at the application root (or individual stores in tests) and pass it
//! down to whatever renders it.
//!
//! # Modules
//!
//! - [`persist`] - Durable key-value snapshot storage
//! - [`cart`] - Line items with quantities and totals
//! - [`wishlist`] - Saved-product set
//! - [`session`] - Signed-in user and opaque auth token
//! - [`config`] - Storage configuration from the environment
//! - [`state`] - Root container wiring the stores to one persister

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod config;
pub mod error;
pub mod persist;
pub mod session;
pub mod state;
pub mod wishlist;

pub use cart::{CartStore, LineItem};
pub use config::StorageConfig;
pub use error::PersistError;
pub use session::{SessionStore, UserProfile};
pub use state::ClientState;
pub use wishlist::WishlistStore;

/// A change listener registered with a store's `subscribe`.
///
/// Listeners run synchronously after each applied mutation, once the
/// persistence write has been attempted. They receive no payload; the
/// expected reaction is to re-read the store's snapshot.
pub(crate) type Listener = Box<dyn Fn() + Send>;
