//! # walletkit-core
//! Hex and address helpers shared by the keyring, ABI and RPC crates.

pub mod address;
pub mod constants;
pub mod error;
pub mod hex_utils;

pub use alloy_primitives::U256;
