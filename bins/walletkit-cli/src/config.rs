//! Environment configuration for the `walletkit` binary.

use anyhow::{Context, Result};
use walletkit_keyring::Network;

pub struct Config {
    pub network: Network,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let network = match lookup("WALLETKIT_NETWORK") {
            Some(name) => name
                .to_lowercase()
                .parse()
                .map_err(anyhow::Error::msg)
                .context("WALLETKIT_NETWORK must be 'mainnet' or 'testnet'")?,
            None => Network::default(),
        };
        Ok(Self {
            network,
            log_level: lookup("WALLETKIT_LOG").unwrap_or_else(|| "info".into()),
            log_format: lookup("WALLETKIT_LOG_FORMAT").unwrap_or_else(|| "text".into()),
        })
    }
}
