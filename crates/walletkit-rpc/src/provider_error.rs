//! Chain-specific error taxonomies.
//!
//! Numeric codes reported by a server's `error.code` member are mapped to
//! an enumerated kind. Codes outside the table are preserved in `Other`.

use std::fmt;

/// An enumerated error kind that can be built from a JSON-RPC error code.
pub trait ErrorKind: Copy + fmt::Debug + PartialEq {
    /// Kind reported when the response itself could not be understood.
    const PARSING_ERROR: Self;

    fn from_code(code: i64) -> Self;

    fn code(self) -> i64;
}

/// EVM provider errors: EIP-1193 codes plus JSON-RPC 2.0 and EIP-1474 codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProviderError {
    Success,
    UserRejectedRequest,
    Unauthorized,
    UnsupportedMethod,
    Disconnected,
    ChainDisconnected,
    UnknownChain,
    InvalidRequest,
    MethodNotFound,
    InvalidParams,
    InternalError,
    ParsingError,
    ResourceNotFound,
    ResourceUnavailable,
    TransactionRejected,
    MethodNotSupported,
    LimitExceeded,
    Other(i64),
}

impl ErrorKind for ProviderError {
    const PARSING_ERROR: Self = ProviderError::ParsingError;

    fn from_code(code: i64) -> Self {
        match code {
            0 => Self::Success,
            4001 => Self::UserRejectedRequest,
            4100 => Self::Unauthorized,
            4200 => Self::UnsupportedMethod,
            4900 => Self::Disconnected,
            4901 => Self::ChainDisconnected,
            4902 => Self::UnknownChain,
            -32600 => Self::InvalidRequest,
            -32601 => Self::MethodNotFound,
            -32602 => Self::InvalidParams,
            -32603 => Self::InternalError,
            -32700 => Self::ParsingError,
            -32001 => Self::ResourceNotFound,
            -32002 => Self::ResourceUnavailable,
            -32003 => Self::TransactionRejected,
            -32004 => Self::MethodNotSupported,
            -32005 => Self::LimitExceeded,
            other => Self::Other(other),
        }
    }

    fn code(self) -> i64 {
        match self {
            Self::Success => 0,
            Self::UserRejectedRequest => 4001,
            Self::Unauthorized => 4100,
            Self::UnsupportedMethod => 4200,
            Self::Disconnected => 4900,
            Self::ChainDisconnected => 4901,
            Self::UnknownChain => 4902,
            Self::InvalidRequest => -32600,
            Self::MethodNotFound => -32601,
            Self::InvalidParams => -32602,
            Self::InternalError => -32603,
            Self::ParsingError => -32700,
            Self::ResourceNotFound => -32001,
            Self::ResourceUnavailable => -32002,
            Self::TransactionRejected => -32003,
            Self::MethodNotSupported => -32004,
            Self::LimitExceeded => -32005,
            Self::Other(code) => code,
        }
    }
}

/// Solana provider errors. No chain-switching or EIP-1474 codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SolanaProviderError {
    Success,
    UserRejectedRequest,
    Unauthorized,
    UnsupportedMethod,
    Disconnected,
    ChainDisconnected,
    InvalidRequest,
    MethodNotFound,
    InvalidParams,
    InternalError,
    ParsingError,
    Other(i64),
}

impl ErrorKind for SolanaProviderError {
    const PARSING_ERROR: Self = SolanaProviderError::ParsingError;

    fn from_code(code: i64) -> Self {
        match code {
            0 => Self::Success,
            4001 => Self::UserRejectedRequest,
            4100 => Self::Unauthorized,
            4200 => Self::UnsupportedMethod,
            4900 => Self::Disconnected,
            4901 => Self::ChainDisconnected,
            -32600 => Self::InvalidRequest,
            -32601 => Self::MethodNotFound,
            -32602 => Self::InvalidParams,
            -32603 => Self::InternalError,
            -32700 => Self::ParsingError,
            other => Self::Other(other),
        }
    }

    fn code(self) -> i64 {
        match self {
            Self::Success => 0,
            Self::UserRejectedRequest => 4001,
            Self::Unauthorized => 4100,
            Self::UnsupportedMethod => 4200,
            Self::Disconnected => 4900,
            Self::ChainDisconnected => 4901,
            Self::InvalidRequest => -32600,
            Self::MethodNotFound => -32601,
            Self::InvalidParams => -32602,
            Self::InternalError => -32603,
            Self::ParsingError => -32700,
            Self::Other(code) => code,
        }
    }
}
