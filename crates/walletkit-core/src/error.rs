//! Error types for hex and address helpers.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HexError {
    #[error("missing 0x prefix")] MissingPrefix,
    #[error("empty hex digits")] Empty,
    #[error("invalid hex digit: {0}")] InvalidDigit(char),
    #[error("value wider than 256 bits")] Overflow,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EthAddressError {
    #[error("invalid length: expected {expected} bytes, got {got}")] InvalidLength { expected: usize, got: usize },
    #[error("non-zero padding above the low 20 bytes")] DirtyPadding,
}
