//! Storage-key construction for prefixed collections.

use stowage_codec::{Codec, Encode};

/// Separator between a collection's prefix and the encoded key or ordinal.
pub const SEPARATOR: u8 = b':';

/// Keys usable in ordered collections.
///
/// A key contributes its canonical binary encoding to the storage key it
/// occupies, and a total order over decoded values. Ordering must be computed
/// over decoded values; the byte order of the encoded form need not match it
/// (signed integers, length-prefixed strings).
pub trait Key: Codec + Ord + Clone {}

impl<T: Codec + Ord + Clone> Key for T {}

/// Builds the storage key addressing `key` under `prefix`.
///
/// Injective per `(prefix, key)` pair: the prefix is fixed per collection and
/// every key kind's canonical encoding is self-delimiting beneath it.
pub fn storage_key(prefix: &str, key: &impl Encode) -> Vec<u8> {
    let mut out = Vec::with_capacity(prefix.len() + 1 + key.encode_size());
    out.extend_from_slice(prefix.as_bytes());
    out.push(SEPARATOR);
    out.extend_from_slice(&key.encode());
    out
}
