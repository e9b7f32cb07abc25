//! Encoding constants shared across walletkit crates.

/// Size of one ABI word in bytes.
pub const WORD_SIZE: usize = 32;

/// Size of an EVM account address in bytes.
pub const ADDRESS_SIZE: usize = 20;

/// Number of hex digits in one ABI word.
pub const WORD_HEX_DIGITS: usize = WORD_SIZE * 2;

/// Prefix carried by every hex string exchanged with JSON-RPC endpoints.
pub const HEX_PREFIX: &str = "0x";
