//! An in-memory store for tests, examples, and host-less callers.

use crate::store::{Store, StoreError};
use std::collections::BTreeMap;

/// A [`Store`] backed by an in-memory B-tree.
///
/// Never fails; useful as a stand-in for the host store when exercising
/// collections outside the host environment.
#[derive(Debug, Default, Clone)]
pub struct MemStore {
    entries: BTreeMap<Vec<u8>, Vec<u8>>,
}

impl MemStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of occupied slots across every collection sharing this store.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether no slot is occupied.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Store for MemStore {
    fn read(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &[u8], value: &[u8]) -> Result<(), StoreError> {
        self.entries.insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    fn remove(&mut self, key: &[u8]) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }

    fn has(&self, key: &[u8]) -> Result<bool, StoreError> {
        Ok(self.entries.contains_key(key))
    }
}
