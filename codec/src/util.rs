//! Shared helpers for codec implementations

use crate::error::Error;
use bytes::Buf;

/// Returns an error if the buffer has fewer than `len` bytes remaining.
#[inline]
pub fn at_least(buf: &mut impl Buf, len: usize) -> Result<(), Error> {
    if buf.remaining() < len {
        return Err(Error::EndOfBuffer);
    }
    Ok(())
}
