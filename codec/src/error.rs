//! Error types for codec operations

use thiserror::Error;

/// Error type for codec operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("unexpected end of buffer")]
    EndOfBuffer,
    #[error("extra data found: {0} bytes")]
    ExtraData(usize),
    #[error("invalid bool")]
    InvalidBool,
    #[error("invalid utf-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
    #[error("platform integer out of range: {0}")]
    InvalidUsize(u64),
    #[error("platform integer out of range: {0}")]
    InvalidIsize(i64),
}
