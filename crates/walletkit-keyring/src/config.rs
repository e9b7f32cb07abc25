//! Keyring configuration.
//!
//! The network tag used in rendered addresses and the BIP-32 path under
//! which accounts are derived are passed in explicitly, never read from
//! process-wide state.

use serde::{Deserialize, Serialize};

use crate::address::{Network, Protocol};

/// BIP-44 account path for Filecoin (coin type 461), external chain.
pub const DEFAULT_ACCOUNT_PATH: &str = "m/44'/461'/0'/0";

/// Configuration for a [`FilecoinKeyring`](crate::FilecoinKeyring).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyringConfig {
    /// Network whose prefix is used for rendered addresses.
    pub network: Network,
    /// Parent path; account `i` is derived at `<account_path>/i`.
    pub account_path: String,
}

impl Default for KeyringConfig {
    fn default() -> Self {
        Self {
            network: Network::Testnet,
            account_path: DEFAULT_ACCOUNT_PATH.to_string(),
        }
    }
}

impl KeyringConfig {
    /// Testnet preset: `t1` addresses.
    pub fn testnet() -> Self {
        Self::default()
    }

    /// Mainnet preset: `f1` addresses.
    pub fn mainnet() -> Self {
        Self {
            network: Network::Mainnet,
            ..Self::default()
        }
    }

    /// Two-character tag every address of this keyring starts with.
    pub fn address_prefix(&self) -> String {
        format!("{}{}", self.network.prefix(), Protocol::Secp256k1.digit())
    }
}
