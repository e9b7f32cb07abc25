//! # walletkit-keyring — Filecoin secp256k1 keyring.
//!
//! Holds BIP-32 derived accounts and imported private keys, and renders
//! their Filecoin `t1…`/`f1…` addresses. Malformed or duplicate imports are
//! rejected with a [`KeyringError`]; nothing in this crate panics on
//! untrusted input.
//!
//! # Modules
//!
//! - [`error`] — `KeyringError` and `AddressError` enums
//! - [`config`] — `KeyringConfig` (network and account derivation path)
//! - [`address`] — Filecoin address encoding with Blake2b checksum
//! - [`hd_key`] — secp256k1 key handle, from seed or raw private key
//! - [`export`] — `{"Type", "PrivateKey"}` key export documents
//! - [`keyring`] — `FilecoinKeyring`

pub mod address;
pub mod config;
pub mod error;
pub mod export;
pub mod hd_key;
pub mod keyring;

pub use address::{FilecoinAddress, Network, Protocol};
pub use config::KeyringConfig;
pub use error::{AddressError, KeyringError};
pub use hd_key::HdKey;
pub use keyring::FilecoinKeyring;
