//! ABI decoding errors.
use thiserror::Error;
use walletkit_core::error::HexError;

/// Reasons a buffer is rejected by the decoder.
///
/// Every variant is a bounds or shape violation detected before any byte
/// outside the input is touched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AbiError {
    #[error("truncated data: need {needed} bytes, have {available}")] Truncated { needed: usize, available: usize },
    #[error("offset {offset} outside {available} bytes of data")] OffsetOutOfBounds { offset: usize, available: usize },
    #[error("length {length} exceeds {available} remaining bytes")] LengthOutOfBounds { length: usize, available: usize },
    #[error("word value does not fit a byte count")] ValueTooLarge,
    #[error("string payload is not valid UTF-8")] InvalidUtf8,
    #[error("invalid hex: {0}")] InvalidHex(#[from] HexError),
    #[error("invalid swap path length: {0} bytes")] InvalidPathLength(usize),
}
