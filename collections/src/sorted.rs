//! An ordered map with a binary-searchable, persisted index.

use crate::{
    error::Error,
    key::{storage_key, Key, SEPARATOR},
    store::Store,
};
use bytes::{Buf, BufMut};
use std::{cmp::Ordering, fmt, marker::PhantomData};
use stowage_codec::{Codec, Decode, Encode, EncodeSize, Read, Write};
use tracing::{debug, trace};

/// Sub-prefix of the index region, holding one key per ordinal position.
const INDEX_REGION: &str = "idx";

/// A sorted, counted map over two parallel storage regions.
///
/// The index region maps each ordinal position in `0..len` to the key
/// occupying that position in ascending order; the value region maps each
/// key's encoding to its serialized value. Lookup binary-searches the index
/// region in O(log n) store reads; inserting or removing a key shifts O(n)
/// index slots to keep positions dense, a deliberate trade of per-operation
/// cost for a flat, two-region layout.
///
/// The handle persists only the prefix and the entry count; bulk data lives
/// in the store. The owner must re-persist the handle whenever the count
/// changes.
pub struct SortedMap<K, V> {
    prefix: String,
    length: u64,
    _marker: PhantomData<(K, V)>,
}

impl<K: Key, V: Codec> SortedMap<K, V> {
    /// Creates a handle over `prefix`.
    ///
    /// The caller must ensure no other collection shares the prefix.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            length: 0,
            _marker: PhantomData,
        }
    }

    /// The prefix all of this map's storage keys start with.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Number of entries.
    pub fn len(&self) -> u64 {
        self.length
    }

    /// Returns whether the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    fn index_key(&self, position: u64) -> Vec<u8> {
        let region = format!("{}{}{}", self.prefix, SEPARATOR as char, INDEX_REGION);
        storage_key(&region, &position)
    }

    fn value_key(&self, key: &K) -> Vec<u8> {
        storage_key(&self.prefix, key)
    }

    fn write_index_slot(
        &self,
        store: &mut impl Store,
        position: u64,
        key: &K,
    ) -> Result<(), Error> {
        store.write(&self.index_key(position), &key.encode())?;
        Ok(())
    }

    /// Returns the key at `position` in sorted order.
    ///
    /// A position at or past [`Self::len`], or an unoccupied slot beneath it,
    /// is [`Error::NotFound`].
    pub fn key_at(&self, store: &impl Store, position: u64) -> Result<K, Error> {
        if position >= self.length {
            return Err(Error::NotFound);
        }
        let Some(bytes) = store.read(&self.index_key(position))? else {
            return Err(Error::NotFound);
        };
        Ok(K::decode(&bytes[..])?)
    }

    /// Overwrites the key at `position` in the index region.
    ///
    /// Low-level primitive: the caller is responsible for keeping the region
    /// strictly ascending.
    pub fn set_key_at(&self, store: &mut impl Store, position: u64, key: &K) -> Result<(), Error> {
        if position >= self.length {
            return Err(Error::NotFound);
        }
        self.write_index_slot(store, position, key)
    }

    /// Binary-searches the index region for `key`.
    ///
    /// Returns the key's position and `true` when present; otherwise the
    /// position it would be inserted at and `false`.
    pub fn find_key_index(&self, store: &impl Store, key: &K) -> Result<(u64, bool), Error> {
        // Half-open bounds: a "less" result at mid == 0 narrows hi to 0 and
        // exits, so the lower bound never wraps below zero.
        let (mut lo, mut hi) = (0u64, self.length);
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            match key.cmp(&self.key_at(store, mid)?) {
                Ordering::Equal => return Ok((mid, true)),
                Ordering::Greater => lo = mid + 1,
                Ordering::Less => hi = mid,
            }
        }
        Ok((lo, false))
    }

    /// Inserts `key` with `value`.
    ///
    /// The value slot is always written, so re-inserting a present key
    /// overwrites its value in place and changes nothing else. A new key
    /// shifts every index slot in `[position, len)` one place up before
    /// landing, an O(n) sequence of store operations. A store failure partway
    /// through the shift is returned as-is; completed steps are not rolled back.
    pub fn insert(&mut self, store: &mut impl Store, key: &K, value: &V) -> Result<(), Error> {
        store.write(&self.value_key(key), &value.encode())?;

        let (position, found) = self.find_key_index(store, key)?;
        if found {
            trace!(prefix = %self.prefix, position, "overwrote value in place");
            return Ok(());
        }

        // Open the gap from the top so no key is overwritten before it moves.
        let mut slot = self.length;
        while slot > position {
            let shifted = self.key_at(store, slot - 1)?;
            self.write_index_slot(store, slot, &shifted)?;
            slot -= 1;
        }
        self.write_index_slot(store, position, key)?;
        self.length += 1;
        trace!(prefix = %self.prefix, position, length = self.length, "inserted key");
        Ok(())
    }

    /// Returns the value at `key`, or [`Error::NotFound`].
    ///
    /// Reads the value slot directly, independent of the index region.
    pub fn get(&self, store: &impl Store, key: &K) -> Result<V, Error> {
        let Some(bytes) = store.read(&self.value_key(key))? else {
            return Err(Error::NotFound);
        };
        Ok(V::decode(&bytes[..])?)
    }

    /// Returns whether `key` has a value slot.
    pub fn contains_key(&self, store: &impl Store, key: &K) -> Result<bool, Error> {
        Ok(store.has(&self.value_key(key))?)
    }

    /// Removes `key` and its value.
    ///
    /// Removing an absent key is a success and changes nothing. Otherwise the
    /// value slot is deleted, index slots above the key shift one place down,
    /// and the stale top slot is deleted. A store failure partway through the
    /// shift is returned as-is; completed steps are not rolled back.
    pub fn remove(&mut self, store: &mut impl Store, key: &K) -> Result<(), Error> {
        let (position, found) = self.find_key_index(store, key)?;
        if !found {
            return Ok(());
        }

        store.remove(&self.value_key(key))?;
        for slot in position..self.length - 1 {
            let shifted = self.key_at(store, slot + 1)?;
            self.write_index_slot(store, slot, &shifted)?;
        }
        store.remove(&self.index_key(self.length - 1))?;
        self.length -= 1;
        trace!(prefix = %self.prefix, position, length = self.length, "removed key");
        Ok(())
    }

    /// Returns the smallest key, or [`Error::Empty`].
    pub fn min_key(&self, store: &impl Store) -> Result<K, Error> {
        if self.length == 0 {
            return Err(Error::Empty);
        }
        self.key_at(store, 0)
    }

    /// Returns the largest key, or [`Error::Empty`].
    pub fn max_key(&self, store: &impl Store) -> Result<K, Error> {
        if self.length == 0 {
            return Err(Error::Empty);
        }
        self.key_at(store, self.length - 1)
    }

    /// Returns the greatest key less than or equal to `key`, or
    /// [`Error::NotFound`] when every key is greater.
    pub fn floor_key(&self, store: &impl Store, key: &K) -> Result<K, Error> {
        let (position, found) = self.find_key_index(store, key)?;
        if found {
            return self.key_at(store, position);
        }
        if position == 0 {
            return Err(Error::NotFound);
        }
        self.key_at(store, position - 1)
    }

    /// Returns the least key greater than or equal to `key`, or
    /// [`Error::NotFound`] when every key is smaller.
    pub fn ceiling_key(&self, store: &impl Store, key: &K) -> Result<K, Error> {
        let (position, _) = self.find_key_index(store, key)?;
        if position == self.length {
            return Err(Error::NotFound);
        }
        self.key_at(store, position)
    }

    /// Reads every key in ascending order: a snapshot of the index region at
    /// call time.
    pub fn keys(&self, store: &impl Store) -> Result<Vec<K>, Error> {
        let mut keys = Vec::with_capacity(self.length as usize);
        for position in 0..self.length {
            keys.push(self.key_at(store, position)?);
        }
        Ok(keys)
    }

    /// Reads every value in ascending key order.
    pub fn values(&self, store: &impl Store) -> Result<Vec<V>, Error> {
        Ok(self.entries(store)?.into_iter().map(|(_, v)| v).collect())
    }

    /// Reads every entry in ascending key order.
    ///
    /// A key present in the index region without a value slot is reported as
    /// [`Error::Inconsistent`], never repaired.
    pub fn entries(&self, store: &impl Store) -> Result<Vec<(K, V)>, Error> {
        let mut entries = Vec::with_capacity(self.length as usize);
        for position in 0..self.length {
            let key = self.key_at(store, position)?;
            let Some(bytes) = store.read(&self.value_key(&key))? else {
                return Err(Error::Inconsistent(position));
            };
            entries.push((key, V::decode(&bytes[..])?));
        }
        Ok(entries)
    }

    /// Deletes every value slot and index slot, then resets the count.
    pub fn clear(&mut self, store: &mut impl Store) -> Result<(), Error> {
        for position in 0..self.length {
            let key = self.key_at(store, position)?;
            store.remove(&self.value_key(&key))?;
            store.remove(&self.index_key(position))?;
        }
        debug!(prefix = %self.prefix, length = self.length, "cleared map");
        self.length = 0;
        Ok(())
    }
}

impl<K, V> Clone for SortedMap<K, V> {
    fn clone(&self) -> Self {
        Self {
            prefix: self.prefix.clone(),
            length: self.length,
            _marker: PhantomData,
        }
    }
}

impl<K, V> fmt::Debug for SortedMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortedMap")
            .field("prefix", &self.prefix)
            .field("length", &self.length)
            .finish()
    }
}

// The handle serializes to its prefix and entry count.
impl<K, V> Write for SortedMap<K, V> {
    fn write(&self, buf: &mut impl BufMut) {
        self.prefix.write(buf);
        self.length.write(buf);
    }
}

impl<K, V> EncodeSize for SortedMap<K, V> {
    fn encode_size(&self) -> usize {
        self.prefix.encode_size() + self.length.encode_size()
    }
}

impl<K, V> Read for SortedMap<K, V> {
    fn read(buf: &mut impl Buf) -> Result<Self, stowage_codec::Error> {
        let prefix = String::read(buf)?;
        let length = u64::read(buf)?;
        Ok(Self {
            prefix,
            length,
            _marker: PhantomData,
        })
    }
}
