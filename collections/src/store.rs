//! Traits for interacting with the host key-value store.

use thiserror::Error;

/// Failure reported by the host store.
///
/// The host surfaces failures as opaque messages; they are propagated
/// verbatim, with no retry at this layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("store operation failed: {0}")]
pub struct StoreError(String);

impl StoreError {
    /// Creates an error carrying the host's failure message.
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
}

/// A flat, byte-addressed key-value store supplied by the host.
///
/// All operations are synchronous host calls that complete or fail
/// immediately. The namespace is shared contract-wide: every collection
/// derives its storage keys from a caller-chosen prefix, and keeping those
/// prefixes distinct is the caller's obligation: a collision silently merges
/// two collections' data.
pub trait Store {
    /// Reads the value at `key`, if present.
    fn read(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError>;

    /// Writes `value` at `key`, overwriting any existing value.
    fn write(&mut self, key: &[u8], value: &[u8]) -> Result<(), StoreError>;

    /// Removes the value at `key`. Removing an absent key is not an error.
    fn remove(&mut self, key: &[u8]) -> Result<(), StoreError>;

    /// Returns whether any value exists at `key`.
    fn has(&self, key: &[u8]) -> Result<bool, StoreError>;
}
