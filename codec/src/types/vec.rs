//! Codec implementations for vectors.
//!
//! Vectors are written as a `u32` little-endian length prefix followed by the
//! encoding of each element in order.

use crate::{EncodeSize, Error, FixedSize, Read, Write};
use bytes::{Buf, BufMut};

impl<T: Write> Write for Vec<T> {
    #[inline]
    fn write(&self, buf: &mut impl BufMut) {
        let len = u32::try_from(self.len()).expect("Vec length exceeds u32");
        len.write(buf);
        for item in self {
            item.write(buf);
        }
    }
}

impl<T: EncodeSize> EncodeSize for Vec<T> {
    #[inline]
    fn encode_size(&self) -> usize {
        u32::SIZE + self.iter().map(T::encode_size).sum::<usize>()
    }
}

impl<T: Read> Read for Vec<T> {
    #[inline]
    fn read(buf: &mut impl Buf) -> Result<Self, Error> {
        let len = u32::read(buf)? as usize;
        // The prefix is a claim until every element read succeeds.
        let mut vec = Vec::with_capacity(len.min(1024));
        for _ in 0..len {
            vec.push(T::read(buf)?);
        }
        Ok(vec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Decode, Encode};
    use bytes::Bytes;

    #[test]
    fn test_vec() {
        let values = [vec![], vec![1u8], vec![1u8, 2u8, 3u8]];
        for value in values {
            let encoded = value.encode();
            assert_eq!(encoded.len(), 4 + value.len());
            let decoded = Vec::<u8>::decode(encoded).unwrap();
            assert_eq!(value, decoded);
        }
    }

    #[test]
    fn test_vec_nested() {
        let value = vec![vec!["a".to_string()], vec![], vec!["b".to_string(), "c".to_string()]];
        let encoded = value.encode();
        let decoded = Vec::<Vec<String>>::decode(encoded).unwrap();
        assert_eq!(value, decoded);
    }

    #[test]
    fn test_conformity() {
        assert_eq!(
            vec![0x0102u16, 0x0304].encode(),
            &[0x02, 0x00, 0x00, 0x00, 0x02, 0x01, 0x04, 0x03][..]
        );
    }

    #[test]
    fn test_truncated() {
        // Claims four elements but carries one.
        let encoded = Bytes::from_static(&[0x04, 0x00, 0x00, 0x00, 0x01]);
        assert!(matches!(
            Vec::<u8>::decode(encoded),
            Err(Error::EndOfBuffer)
        ));
    }
}
