//! A growable list with ordinal-addressed persistent slots.

use crate::{error::Error, key::storage_key, store::Store};
use bytes::{Buf, BufMut};
use std::{fmt, marker::PhantomData};
use stowage_codec::{Codec, Decode, Encode, EncodeSize, Read, Write};
use tracing::debug;

/// A list whose element at position `i` lives in the storage slot keyed by
/// `i`'s encoding under the list's prefix.
///
/// The handle persists only the prefix and the element count; the owner must
/// re-persist it whenever the count changes.
pub struct Vector<T> {
    prefix: String,
    length: u64,
    _marker: PhantomData<T>,
}

impl<T: Codec> Vector<T> {
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

    /// The prefix all of this list's storage keys start with.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Number of elements.
    pub fn len(&self) -> u64 {
        self.length
    }

    /// Returns whether the list has no elements.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    fn slot_key(&self, index: u64) -> Vec<u8> {
        storage_key(&self.prefix, &index)
    }

    /// Appends `value` at the end of the list.
    pub fn push(&mut self, store: &mut impl Store, value: &T) -> Result<(), Error> {
        store.write(&self.slot_key(self.length), &value.encode())?;
        self.length += 1;
        Ok(())
    }

    /// Returns the element at `index`.
    pub fn get(&self, store: &impl Store, index: u64) -> Result<T, Error> {
        if index >= self.length {
            return Err(Error::IndexOutOfBounds {
                index,
                length: self.length,
            });
        }
        let Some(bytes) = store.read(&self.slot_key(index))? else {
            return Err(Error::NotFound);
        };
        Ok(T::decode(&bytes[..])?)
    }

    /// Overwrites the element at `index`.
    pub fn set(&self, store: &mut impl Store, index: u64, value: &T) -> Result<(), Error> {
        if index >= self.length {
            return Err(Error::IndexOutOfBounds {
                index,
                length: self.length,
            });
        }
        store.write(&self.slot_key(index), &value.encode())?;
        Ok(())
    }

    /// Removes and returns the last element, or [`Error::Empty`].
    pub fn pop(&mut self, store: &mut impl Store) -> Result<T, Error> {
        if self.length == 0 {
            return Err(Error::Empty);
        }
        let index = self.length - 1;
        let value = self.get(store, index)?;
        store.remove(&self.slot_key(index))?;
        self.length -= 1;
        Ok(value)
    }

    /// Deletes every slot, then resets the count.
    pub fn clear(&mut self, store: &mut impl Store) -> Result<(), Error> {
        for index in 0..self.length {
            store.remove(&self.slot_key(index))?;
        }
        debug!(prefix = %self.prefix, length = self.length, "cleared vector");
        self.length = 0;
        Ok(())
    }

    /// Reads every element in order: a snapshot at call time.
    pub fn to_vec(&self, store: &impl Store) -> Result<Vec<T>, Error> {
        let mut items = Vec::with_capacity(self.length as usize);
        for index in 0..self.length {
            items.push(self.get(store, index)?);
        }
        Ok(items)
    }
}

impl<T> Clone for Vector<T> {
    fn clone(&self) -> Self {
        Self {
            prefix: self.prefix.clone(),
            length: self.length,
            _marker: PhantomData,
        }
    }
}

impl<T> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("prefix", &self.prefix)
            .field("length", &self.length)
            .finish()
    }
}

// The handle serializes to its prefix and element count.
impl<T> Write for Vector<T> {
    fn write(&self, buf: &mut impl BufMut) {
        self.prefix.write(buf);
        self.length.write(buf);
    }
}

impl<T> EncodeSize for Vector<T> {
    fn encode_size(&self) -> usize {
        self.prefix.encode_size() + self.length.encode_size()
    }
}

impl<T> Read for Vector<T> {
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
