//! # walletkit-rpc — JSON-RPC response parsing.
//!
//! Turns raw response bodies from EVM and Solana endpoints into typed
//! values, or into a chain-specific [`RpcError`] when the server reports a
//! failure. Bodies are untrusted: anything malformed is a [`ParseError`]
//! (for value extraction) or a parsing-error kind (for error extraction),
//! never a panic.
//!
//! # Modules
//!
//! - [`error`] — `ParseError` enum
//! - [`provider_error`] — `ProviderError`, `SolanaProviderError` and the `ErrorKind` trait
//! - [`envelope`] — `result` / `error` envelope accessors
//! - [`eth`] — EVM extractors (`eth_*`, ENS, Unstoppable Domains)
//! - [`solana`] — Solana extractors

pub mod envelope;
pub mod error;
pub mod eth;
pub mod provider_error;
pub mod solana;

pub use envelope::{PARSING_ERROR_MESSAGE, RpcError, parse_error_result, parse_or_error, parse_result};
pub use error::ParseError;
pub use provider_error::{ErrorKind, ProviderError, SolanaProviderError};
