//! Codec implementations for UTF-8 strings.
//!
//! Strings are written as a `u32` little-endian length prefix followed by the
//! raw UTF-8 bytes, with no terminator. For portability the byte length must
//! fit within a `u32`.

use crate::{util::at_least, EncodeSize, Error, FixedSize, Read, Write};
use bytes::{Buf, BufMut};

impl Write for String {
    #[inline]
    fn write(&self, buf: &mut impl BufMut) {
        self.as_str().write(buf);
    }
}

impl EncodeSize for String {
    #[inline]
    fn encode_size(&self) -> usize {
        self.as_str().encode_size()
    }
}

impl Read for String {
    #[inline]
    fn read(buf: &mut impl Buf) -> Result<Self, Error> {
        let len32 = u32::read(buf)?;
        let len = len32 as usize;
        at_least(buf, len)?;
        let mut bytes = vec![0u8; len];
        buf.copy_to_slice(&mut bytes);
        Ok(String::from_utf8(bytes)?)
    }
}

impl Write for &str {
    #[inline]
    fn write(&self, buf: &mut impl BufMut) {
        let len = u32::try_from(self.len()).expect("String length exceeds u32");
        len.write(buf);
        buf.put_slice(self.as_bytes());
    }
}

impl EncodeSize for &str {
    #[inline]
    fn encode_size(&self) -> usize {
        u32::SIZE + self.len()
    }
}
