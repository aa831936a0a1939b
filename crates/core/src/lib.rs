//! Verdant Core - Shared types library.
//!
//! This crate provides common types used across all Verdant components:
//! - `store` - Client-side state stores (cart, wishlist, session)
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no storage access,
//! no HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and the product value object

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
