//! Error types for the persistence layer.
//!
//! Store operations themselves never fail: a persistence error degrades
//! durability, not correctness, so the stores log it and carry on with
//! their in-memory state. These types exist for [`Persister`]
//! implementations and for callers that drive a persister directly.
//!
//! [`Persister`]: crate::persist::Persister

use thiserror::Error;

/// Errors that can occur when reading or writing a persisted snapshot.
///
/// Parse failures are deliberately not represented: a snapshot that
/// loads but fails to parse is treated as absent, not as an error.
#[derive(Debug, Error)]
pub enum PersistError {
    /// The storage medium failed at the I/O level.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The in-memory storage lock was poisoned by a panicking writer.
    #[error("storage lock poisoned")]
    Poisoned,
}
