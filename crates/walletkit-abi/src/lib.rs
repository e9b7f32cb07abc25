//! # walletkit-abi — strict decoder for ABI-encoded contract data.
//!
//! Decodes 32-byte word aligned call results into `(type, value)` string
//! pairs. Offsets and lengths read from the input are bounds-checked before
//! use, so truncated or adversarial buffers are rejected with an
//! [`AbiError`] rather than read past.
//!
//! # Modules
//!
//! - [`error`] — `AbiError` enum
//! - [`types`] — `ParamType` and `DecodedTuple`
//! - [`decoder`] — `abi_decode` and the dynamic-array walker
//! - [`scanner`] — balance-scanner `(bool, bytes)[]` results
//! - [`path`] — packed Uniswap V3 swap paths

pub mod decoder;
pub mod error;
pub mod path;
pub mod scanner;
pub mod types;

pub use decoder::{abi_decode, abi_decode_string_array};
pub use error::AbiError;
pub use path::uniswap_encoded_path_decode;
pub use scanner::abi_decode_balance_scanner_result;
pub use types::{DecodedTuple, ParamType};
