//! Codec implementations for byte types.
//!
//! For portability and consistency between architectures, the length of a
//! [`Bytes`] value must fit within a `u32`.

use crate::{util::at_least, EncodeSize, Error, FixedSize, Read, Write};
use bytes::{Buf, BufMut, Bytes};

impl Write for Bytes {
    #[inline]
    fn write(&self, buf: &mut impl BufMut) {
        let len = u32::try_from(self.len()).expect("Bytes length exceeds u32");
        len.write(buf);
        buf.put_slice(self);
    }
}

impl EncodeSize for Bytes {
    #[inline]
    fn encode_size(&self) -> usize {
        u32::SIZE + self.len()
    }
}

impl Read for Bytes {
    #[inline]
    fn read(buf: &mut impl Buf) -> Result<Self, Error> {
        let len = u32::read(buf)? as usize;
        at_least(buf, len)?;
        Ok(buf.copy_to_bytes(len))
    }
}
