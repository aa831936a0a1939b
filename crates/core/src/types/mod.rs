//! Core types for Verdant.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod product;

pub use id::*;
pub use product::Product;
