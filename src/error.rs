//! Error types for kvtable
//!
//! Most of the public surface absorbs bad input silently (a no-op `put`, a
//! `None` lookup, a zero count). The typed variants below exist for the
//! fallible companions such as [`KvTable::try_put`](crate::KvTable::try_put),
//! where callers want to distinguish "did nothing" from "did something".

use thiserror::Error;

/// Result type alias using KvError
pub type Result<T> = std::result::Result<T, KvError>;

/// Error type for kvtable operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KvError {
    /// Keys identify items; an empty key can never be stored or found.
    #[error("key must not be empty")]
    EmptyKey,
}
