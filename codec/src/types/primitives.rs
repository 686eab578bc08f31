//! Codec implementations for Rust primitive types.
//!
//! # Fixed-size encoding
//!
//! Every primitive has a compile-time constant size and is written
//! little-endian. `usize` and `isize` always occupy 8 bytes on the wire so
//! the stored format is identical across 32-bit and 64-bit hosts; decoding a
//! value that does not fit the host word fails rather than truncating.
//!
//! 128-bit integers are written as 16 little-endian bytes: the low 8-byte
//! limb first, then the high limb.

use crate::{util::at_least, EncodeSize, Error, FixedSize, Read, Write};
use bytes::{Buf, BufMut};

// Numeric types implementation
macro_rules! impl_numeric {
    ($type:ty, $read_method:ident, $write_method:ident) => {
        impl Write for $type {
            #[inline]
            fn write(&self, buf: &mut impl BufMut) {
                buf.$write_method(*self);
            }
        }

        impl Read for $type {
            #[inline]
            fn read(buf: &mut impl Buf) -> Result<Self, Error> {
                at_least(buf, std::mem::size_of::<$type>())?;
                Ok(buf.$read_method())
            }
        }

        impl EncodeSize for $type {
            #[inline]
            fn encode_size(&self) -> usize {
                Self::SIZE
            }
        }

        impl FixedSize for $type {
            const SIZE: usize = std::mem::size_of::<$type>();
        }
    };
}

impl_numeric!(u8, get_u8, put_u8);
impl_numeric!(u16, get_u16_le, put_u16_le);
impl_numeric!(u32, get_u32_le, put_u32_le);
impl_numeric!(u64, get_u64_le, put_u64_le);
impl_numeric!(u128, get_u128_le, put_u128_le);
impl_numeric!(i8, get_i8, put_i8);
impl_numeric!(i16, get_i16_le, put_i16_le);
impl_numeric!(i32, get_i32_le, put_i32_le);
impl_numeric!(i64, get_i64_le, put_i64_le);
impl_numeric!(i128, get_i128_le, put_i128_le);
impl_numeric!(f32, get_f32_le, put_f32_le);
impl_numeric!(f64, get_f64_le, put_f64_le);

// Usize implementation
impl Write for usize {
    #[inline]
    fn write(&self, buf: &mut impl BufMut) {
        buf.put_u64_le(*self as u64);
    }
}

impl Read for usize {
    #[inline]
    fn read(buf: &mut impl Buf) -> Result<Self, Error> {
        let value = u64::read(buf)?;
        usize::try_from(value).map_err(|_| Error::InvalidUsize(value))
    }
}

impl EncodeSize for usize {
    #[inline]
    fn encode_size(&self) -> usize {
        Self::SIZE
    }
}

impl FixedSize for usize {
    const SIZE: usize = u64::SIZE;
}

// Isize implementation
impl Write for isize {
    #[inline]
    fn write(&self, buf: &mut impl BufMut) {
        buf.put_i64_le(*self as i64);
    }
}

impl Read for isize {
    #[inline]
    fn read(buf: &mut impl Buf) -> Result<Self, Error> {
        let value = i64::read(buf)?;
        isize::try_from(value).map_err(|_| Error::InvalidIsize(value))
    }
}

impl EncodeSize for isize {
    #[inline]
    fn encode_size(&self) -> usize {
        Self::SIZE
    }
}

impl FixedSize for isize {
    const SIZE: usize = i64::SIZE;
}

// Bool implementation
impl Write for bool {
    #[inline]
    fn write(&self, buf: &mut impl BufMut) {
        buf.put_u8(if *self { 1 } else { 0 });
    }
}

impl Read for bool {
    #[inline]
    fn read(buf: &mut impl Buf) -> Result<Self, Error> {
        match u8::read(buf)? {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(Error::InvalidBool),
        }
    }
}

impl EncodeSize for bool {
    #[inline]
    fn encode_size(&self) -> usize {
        Self::SIZE
    }
}

impl FixedSize for bool {
    const SIZE: usize = 1;
}

// Constant-size array implementation
impl<T: Write, const N: usize> Write for [T; N] {
    #[inline]
    fn write(&self, buf: &mut impl BufMut) {
        for item in self {
            item.write(buf);
        }
    }
}

impl<T: Read, const N: usize> Read for [T; N] {
    #[inline]
    fn read(buf: &mut impl Buf) -> Result<Self, Error> {
        let mut items = Vec::with_capacity(N);
        for _ in 0..N {
            items.push(T::read(buf)?);
        }
        match items.try_into() {
            Ok(array) => Ok(array),
            Err(_) => unreachable!(),
        }
    }
}

impl<T: EncodeSize, const N: usize> EncodeSize for [T; N] {
    #[inline]
    fn encode_size(&self) -> usize {
        self.iter().map(T::encode_size).sum()
    }
}

// Option implementation
impl<T: Write> Write for Option<T> {
    #[inline]
    fn write(&self, buf: &mut impl BufMut) {
        self.is_some().write(buf);
        if let Some(inner) = self {
            inner.write(buf);
        }
    }
}

impl<T: EncodeSize> EncodeSize for Option<T> {
    #[inline]
    fn encode_size(&self) -> usize {
        match self {
            Some(inner) => 1 + inner.encode_size(),
            None => 1,
        }
    }
}

impl<T: Read> Read for Option<T> {
    #[inline]
    fn read(buf: &mut impl Buf) -> Result<Self, Error> {
        if bool::read(buf)? {
            Ok(Some(T::read(buf)?))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Decode, Encode};
    use bytes::Bytes;
    use paste::paste;

    macro_rules! impl_num_test {
        ($type:ty) => {
            paste! {
                #[test]
                fn [<test_ $type>]() {
                    let expected_len = std::mem::size_of::<$type>();
                    let values: [$type; 5] =
                        [0 as $type, 1 as $type, 42 as $type, <$type>::MAX, <$type>::MIN];
                    for value in values.iter() {
                        let encoded = value.encode();
                        assert_eq!(encoded.len(), expected_len);
                        assert_eq!(value.encode_size(), expected_len);
                        let decoded = <$type>::decode(encoded).unwrap();
                        assert_eq!(*value, decoded);
                    }
                }
            }
        };
    }
    impl_num_test!(u8);
    impl_num_test!(u16);
    impl_num_test!(u32);
    impl_num_test!(u64);
    impl_num_test!(u128);
    impl_num_test!(i8);
    impl_num_test!(i16);
    impl_num_test!(i32);
    impl_num_test!(i64);
    impl_num_test!(i128);
    impl_num_test!(f32);
    impl_num_test!(f64);

    #[test]
    fn test_endianness() {
        // u16
        let encoded = 0x0102u16.encode();
        assert_eq!(encoded, Bytes::from_static(&[0x02, 0x01]));

        // u32
        let encoded = 0x01020304u32.encode();
        assert_eq!(encoded, Bytes::from_static(&[0x04, 0x03, 0x02, 0x01]));

        // f32
        let encoded = 1.0f32.encode();
        assert_eq!(encoded, Bytes::from_static(&[0x00, 0x00, 0x80, 0x3F])); // Little-endian IEEE 754
    }

    #[test]
    fn test_u128_limb_order() {
        // Low 8-byte limb first, then high limb, both little-endian.
        let value = 0x0123456789ABCDEF_FEDCBA9876543210u128;
        let encoded = value.encode();
        assert_eq!(
            encoded,
            Bytes::from_static(&[
                0x10, 0x32, 0x54, 0x76, 0x98, 0xBA, 0xDC, 0xFE, // low limb
                0xEF, 0xCD, 0xAB, 0x89, 0x67, 0x45, 0x23, 0x01, // high limb
            ])
        );
        assert_eq!(u128::decode(encoded).unwrap(), value);
    }

    #[test]
    fn test_bool() {
        let values = [true, false];
        for value in values.iter() {
            let encoded = value.encode();
            assert_eq!(encoded.len(), 1);
            let decoded = bool::decode(encoded).unwrap();
            assert_eq!(*value, decoded);
        }

        // Any tag other than 0 or 1 is rejected.
        let invalid = Bytes::from_static(&[0x02]);
        assert!(matches!(bool::decode(invalid), Err(Error::InvalidBool)));
    }

    #[test]
    fn test_usize_fixed_width() {
        let values = [0usize, 1, 42, u32::MAX as usize];
        for value in values.iter() {
            let encoded = value.encode();
            assert_eq!(encoded.len(), 8);
            let decoded = usize::decode(encoded).unwrap();
            assert_eq!(*value, decoded);
        }
    }

    #[test]
    fn test_isize_fixed_width() {
        let values = [isize::MIN, -1, 0, 1, isize::MAX];
        for value in values.iter() {
            let encoded = value.encode();
            assert_eq!(encoded.len(), 8);
            let decoded = isize::decode(encoded).unwrap();
            assert_eq!(*value, decoded);
        }
    }

    #[test]
    fn test_array() {
        let values = [1u8, 2, 3];
        let encoded = values.encode();
        assert_eq!(encoded, Bytes::from_static(&[0x01, 0x02, 0x03]));
        let decoded = <[u8; 3]>::decode(encoded).unwrap();
        assert_eq!(values, decoded);

        // Arrays of multi-byte elements encode element-wise.
        let values = [0x0102u16, 0x0304];
        let encoded = values.encode();
        assert_eq!(encoded, Bytes::from_static(&[0x02, 0x01, 0x04, 0x03]));
        let decoded = <[u16; 2]>::decode(encoded).unwrap();
        assert_eq!(values, decoded);
    }

    #[test]
    fn test_option() {
        let option_values = [Some(42u32), None];
        for value in option_values {
            let encoded = value.encode();
            let decoded = Option::<u32>::decode(encoded).unwrap();
            assert_eq!(value, decoded);
        }
    }

    #[test]
    fn test_option_length() {
        let some = Some(42u32);
        assert_eq!(some.encode_size(), 1 + 4);
        assert_eq!(some.encode().len(), 1 + 4);
        let none: Option<u32> = None;
        assert_eq!(none.encode_size(), 1);
        assert_eq!(none.encode().len(), 1);
    }

    #[test]
    fn test_conformity() {
        // Bool
        assert_eq!(true.encode(), &[0x01][..]);
        assert_eq!(false.encode(), &[0x00][..]);

        // 8-bit integers
        assert_eq!(0u8.encode(), &[0x00][..]);
        assert_eq!(255u8.encode(), &[0xFF][..]);
        assert_eq!((-1i8).encode(), &[0xFF][..]);
        assert_eq!((-128i8).encode(), &[0x80][..]);

        // 16-bit integers
        assert_eq!(0xABCDu16.encode(), &[0xCD, 0xAB][..]);
        assert_eq!((-1i16).encode(), &[0xFF, 0xFF][..]);
        assert_eq!(0x1234i16.encode(), &[0x34, 0x12][..]);

        // 32-bit integers
        assert_eq!(0xABCDEF01u32.encode(), &[0x01, 0xEF, 0xCD, 0xAB][..]);
        assert_eq!(u32::MAX.encode(), &[0xFF, 0xFF, 0xFF, 0xFF][..]);
        assert_eq!((-1i32).encode(), &[0xFF, 0xFF, 0xFF, 0xFF][..]);

        // 64-bit integers
        assert_eq!(
            0x0123456789ABCDEFu64.encode(),
            &[0xEF, 0xCD, 0xAB, 0x89, 0x67, 0x45, 0x23, 0x01][..]
        );
        assert_eq!(
            (-1i64).encode(),
            &[0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF][..]
        );

        // 128-bit integers
        assert_eq!(u128::MAX.encode(), &[0xFF; 16][..]);
        assert_eq!((-1i128).encode(), &[0xFF; 16][..]);

        // 32-bit floats
        assert_eq!(1.0f32.encode(), 1.0f32.to_le_bytes()[..]);
        assert_eq!((-1.0f32).encode(), (-1.0f32).to_le_bytes()[..]);

        // 64-bit floats
        assert_eq!(1.0f64.encode(), 1.0f64.to_le_bytes()[..]);
        assert_eq!(f64::NAN.encode(), f64::NAN.to_le_bytes()[..]);

        // Platform-width integers occupy 8 bytes regardless of host word size.
        assert_eq!(1usize.encode(), &[0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00][..]);
        assert_eq!(
            (-2isize).encode(),
            &[0xFE, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF][..]
        );

        // Option
        assert_eq!(Some(42u32).encode(), &[0x01, 0x2A, 0x00, 0x00, 0x00][..]);
        assert_eq!(None::<u32>.encode(), &[0x00][..]);
    }
}
