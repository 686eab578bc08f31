//! Serialize structured data.
//!
//! # Overview
//!
//! A binary serialization library for values that round-trip through a
//! byte-oriented host store:
//! - Serialize structured data into a deterministic little-endian format
//! - Deserialize stored bytes back into structured data, rejecting trailing input
//!
//! # Format
//!
//! All multi-byte integers are little-endian. Fixed-width types occupy their
//! natural width (`usize`/`isize` always occupy 8 bytes for portability across
//! host word sizes). Strings, byte strings, vectors, and maps carry a `u32`
//! little-endian length prefix; options carry a 1-byte presence tag; arrays,
//! tuples, and structs are the plain concatenation of their parts.
//!
//! # Supported Types
//!
//! Natively supports:
//! - Primitives: `u8`..`u128`, `i8`..`i128`, `usize`, `isize`, `f32`, `f64`, `bool`
//! - `String`, [`bytes::Bytes`], `Vec<T>`, `Option<T>`, `BTreeMap<K, V>`,
//!   fixed-size arrays, and tuples
//! - Recursive serialization of nested structs via trait implementations
//!
//! User-defined types are serialized by implementing the [`Write`], [`Read`],
//! and [`EncodeSize`] traits, each field delegating to its own implementation.
//!
//! # Example
//!
//! ```
//! use bytes::{Buf, BufMut};
//! use stowage_codec::{Decode, Encode, EncodeSize, Error, Read, Write};
//!
//! // Define a custom struct
//! #[derive(Debug, Clone, PartialEq)]
//! struct Grant {
//!     account: String,
//!     allowance: u128,
//!     frozen: bool,
//! }
//!
//! // Implement the `Write` trait
//! impl Write for Grant {
//!     fn write(&self, buf: &mut impl BufMut) {
//!         self.account.write(buf);
//!         self.allowance.write(buf);
//!         self.frozen.write(buf);
//!     }
//! }
//!
//! // Implement the `EncodeSize` trait
//! impl EncodeSize for Grant {
//!     fn encode_size(&self) -> usize {
//!         self.account.encode_size() + self.allowance.encode_size() + self.frozen.encode_size()
//!     }
//! }
//!
//! // Implement the `Read` trait
//! impl Read for Grant {
//!     fn read(buf: &mut impl Buf) -> Result<Self, Error> {
//!         let account = String::read(buf)?;
//!         let allowance = u128::read(buf)?;
//!         let frozen = bool::read(buf)?;
//!         Ok(Self {
//!             account,
//!             allowance,
//!             frozen,
//!         })
//!     }
//! }
//!
//! let grant = Grant {
//!     account: "alice".to_string(),
//!     allowance: 1_000,
//!     frozen: false,
//! };
//! let encoded = grant.encode();
//! let decoded = Grant::decode(encoded).unwrap();
//! assert_eq!(grant, decoded);
//! ```

pub mod codec;
pub mod error;
pub mod types;
pub mod util;

// Re-export main types and traits
pub use codec::{Codec, Decode, Encode, EncodeSize, FixedSize, Read, Write};
pub use error::Error;
