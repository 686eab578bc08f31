//! Error types for collection operations

use crate::store::StoreError;
use thiserror::Error;

/// Error type for collection operations
#[derive(Error, Debug)]
pub enum Error {
    /// The key (or index slot) is not present.
    #[error("not found")]
    NotFound,
    /// The collection has no entries.
    #[error("collection is empty")]
    Empty,
    /// The index is outside the collection's occupied range.
    #[error("index out of bounds: {index} >= {length}")]
    IndexOutOfBounds { index: u64, length: u64 },
    /// The index region and value region disagree about a key's presence.
    ///
    /// Indicates a bug or external tampering; surfaced as-is, never repaired.
    #[error("index and value slots disagree at position {0}")]
    Inconsistent(u64),
    #[error("store: {0}")]
    Store(#[from] StoreError),
    #[error("codec: {0}")]
    Codec(#[from] stowage_codec::Error),
}
