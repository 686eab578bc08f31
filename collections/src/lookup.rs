//! A map for storing and retrieving values by raw byte key.

use crate::{error::Error, store::Store};
use bytes::{Buf, BufMut, Bytes};
use std::{fmt, marker::PhantomData};
use stowage_codec::{Codec, Decode, Encode, EncodeSize, Read, Write};

/// An O(1) point-access map under a fixed byte prefix.
///
/// Storage keys are the raw concatenation of the prefix and the caller's key
/// bytes, with no separator; there is no ordering and no count tracking. The
/// handle carries only the prefix, so it can be reconstructed from its
/// serialized form with no other state.
pub struct LookupMap<V> {
    prefix: Bytes,
    _marker: PhantomData<V>,
}

impl<V: Codec> LookupMap<V> {
    /// Creates a handle over `prefix`.
    ///
    /// The caller must ensure no other collection shares the prefix.
    pub fn new(prefix: impl Into<Bytes>) -> Self {
        Self {
            prefix: prefix.into(),
            _marker: PhantomData,
        }
    }

    /// The byte prefix all of this map's storage keys start with.
    pub fn prefix(&self) -> &Bytes {
        &self.prefix
    }

    fn storage_key(&self, key: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.prefix.len() + key.len());
        out.extend_from_slice(&self.prefix);
        out.extend_from_slice(key);
        out
    }

    /// Returns whether `key` is present.
    pub fn contains_key(&self, store: &impl Store, key: &[u8]) -> Result<bool, Error> {
        Ok(store.has(&self.storage_key(key))?)
    }

    /// Returns the value at `key`.
    pub fn get(&self, store: &impl Store, key: &[u8]) -> Result<V, Error> {
        let Some(bytes) = store.read(&self.storage_key(key))? else {
            return Err(Error::NotFound);
        };
        Ok(V::decode(&bytes[..])?)
    }

    /// Writes `value` at `key`, silently overwriting any existing value.
    pub fn insert(&self, store: &mut impl Store, key: &[u8], value: &V) -> Result<(), Error> {
        store.write(&self.storage_key(key), &value.encode())?;
        Ok(())
    }

    /// Removes `key` and its value.
    ///
    /// Removing an absent key is a success: the host removal primitive does
    /// not distinguish the two outcomes.
    pub fn remove(&self, store: &mut impl Store, key: &[u8]) -> Result<(), Error> {
        store.remove(&self.storage_key(key))?;
        Ok(())
    }
}

impl<V> Clone for LookupMap<V> {
    fn clone(&self) -> Self {
        Self {
            prefix: self.prefix.clone(),
            _marker: PhantomData,
        }
    }
}

impl<V> fmt::Debug for LookupMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LookupMap")
            .field("prefix", &self.prefix)
            .finish()
    }
}

// The handle serializes to its prefix alone.
impl<V> Write for LookupMap<V> {
    fn write(&self, buf: &mut impl BufMut) {
        self.prefix.write(buf);
    }
}

impl<V> EncodeSize for LookupMap<V> {
    fn encode_size(&self) -> usize {
        self.prefix.encode_size()
    }
}

impl<V> Read for LookupMap<V> {
    fn read(buf: &mut impl Buf) -> Result<Self, stowage_codec::Error> {
        let prefix = Bytes::read(buf)?;
        Ok(Self {
            prefix,
            _marker: PhantomData,
        })
    }
}
