//! Codec implementations for ordered maps.
//!
//! Maps are written as a `u32` little-endian length prefix followed by each
//! (key, value) pair in ascending key order. Only [`BTreeMap`] is supported:
//! its iteration order makes the encoding deterministic, which hash maps
//! cannot guarantee.

use crate::{EncodeSize, Error, FixedSize, Read, Write};
use bytes::{Buf, BufMut};
use std::collections::BTreeMap;

impl<K: Write + Ord, V: Write> Write for BTreeMap<K, V> {
    #[inline]
    fn write(&self, buf: &mut impl BufMut) {
        let len = u32::try_from(self.len()).expect("BTreeMap length exceeds u32");
        len.write(buf);
        for (key, value) in self {
            key.write(buf);
            value.write(buf);
        }
    }
}

impl<K: EncodeSize + Ord, V: EncodeSize> EncodeSize for BTreeMap<K, V> {
    #[inline]
    fn encode_size(&self) -> usize {
        u32::SIZE
            + self
                .iter()
                .map(|(k, v)| k.encode_size() + v.encode_size())
                .sum::<usize>()
    }
}

impl<K: Read + Ord, V: Read> Read for BTreeMap<K, V> {
    #[inline]
    fn read(buf: &mut impl Buf) -> Result<Self, Error> {
        let len = u32::read(buf)? as usize;
        let mut map = BTreeMap::new();
        for _ in 0..len {
            let key = K::read(buf)?;
            let value = V::read(buf)?;
            map.insert(key, value);
        }
        Ok(map)
    }
}
