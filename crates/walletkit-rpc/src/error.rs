//! Response parsing errors.
use thiserror::Error;
use walletkit_abi::AbiError;
use walletkit_core::error::{EthAddressError, HexError};

/// Why a response body did not yield the expected value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Body is not valid JSON.
    #[error("invalid json: {0}")]
    InvalidJson(String),

    /// Body is valid JSON but not an object.
    #[error("response is not a json object")]
    NotAnObject,

    /// No `result` member (typically an error response).
    #[error("response has no result")]
    MissingResult,

    /// A member is absent or has the wrong JSON type.
    #[error("{field}: expected {expected}")]
    UnexpectedType {
        field: &'static str,
        expected: &'static str,
    },

    /// An integer member does not fit the target width.
    #[error("{0}: value out of range")]
    OutOfRange(&'static str),

    /// A boolean word other than 0 or 1, or not exactly 32 bytes.
    #[error("not a 32-byte boolean word")]
    InvalidBool,

    #[error(transparent)]
    Hex(#[from] HexError),

    #[error(transparent)]
    Abi(#[from] AbiError),

    #[error(transparent)]
    Address(#[from] EthAddressError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_unexpected_type() {
        let e = ParseError::UnexpectedType {
            field: "value",
            expected: "unsigned integer",
        };
        assert_eq!(e.to_string(), "value: expected unsigned integer");
    }

    #[test]
    fn wrapped_errors_are_transparent() {
        let e: ParseError = HexError::MissingPrefix.into();
        assert_eq!(e.to_string(), "missing 0x prefix");
        let e: ParseError = EthAddressError::DirtyPadding.into();
        assert_eq!(e.to_string(), "non-zero padding above the low 20 bytes");
    }
}
