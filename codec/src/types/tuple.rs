//! Codec implementations for tuples.
//!
//! Tuples are the plain concatenation of their fields' encodings, in order.

use crate::{EncodeSize, Error, Read, Write};
use bytes::{Buf, BufMut};
use paste::paste;

macro_rules! impl_codec_for_tuple {
    ($($index:literal),*) => {
        paste! {
            impl<$( [<T $index>]: Write ),*> Write for ( $( [<T $index>], )* ) {
                #[inline]
                fn write(&self, buf: &mut impl BufMut) {
                    $( self.$index.write(buf); )*
                }
            }

            impl<$( [<T $index>]: EncodeSize ),*> EncodeSize for ( $( [<T $index>], )* ) {
                #[inline]
                fn encode_size(&self) -> usize {
                    0 $( + self.$index.encode_size() )*
                }
            }

            impl<$( [<T $index>]: Read ),*> Read for ( $( [<T $index>], )* ) {
                #[inline]
                fn read(buf: &mut impl Buf) -> Result<Self, Error> {
                    Ok(( $( [<T $index>]::read(buf)?, )* ))
                }
            }
        }
    };
}

// Generate implementations for tuple sizes 1 through 6
impl_codec_for_tuple!(0);
impl_codec_for_tuple!(0, 1);
impl_codec_for_tuple!(0, 1, 2);
impl_codec_for_tuple!(0, 1, 2, 3);
impl_codec_for_tuple!(0, 1, 2, 3, 4);
impl_codec_for_tuple!(0, 1, 2, 3, 4, 5);

#[cfg(test)]
mod tests {
    use crate::{Decode, Encode};

    #[test]
    fn test_tuple() {
        let values = [(1u16, None), (1u16, Some(2u32))];
        for value in values {
            let encoded = value.encode();
            let decoded = <(u16, Option<u32>)>::decode(encoded).unwrap();
            assert_eq!(value, decoded);
        }
    }

    #[test]
    fn test_tuple_concatenation() {
        let value = (0x01u8, 0x0203u16);
        assert_eq!(value.encode(), &[0x01, 0x03, 0x02][..]);
    }
}
