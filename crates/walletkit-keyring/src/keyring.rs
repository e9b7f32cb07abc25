//! Filecoin keyring: derived accounts plus imported keys.
//!
//! Derived accounts live at `<account_path>/i` under the keyring's seed and
//! are addressed by index. Imported keys are addressed by their Filecoin
//! address. An address is held in at most one of the two sets.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use bip32::{ChildNumber, DerivationPath, XPrv};
use bip39::Mnemonic;
use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::address::Network;
use crate::config::KeyringConfig;
use crate::error::KeyringError;
use crate::export::KeyExport;
use crate::hd_key::HdKey;

/// Accounts are non-hardened children, so indices stop below 2^31.
pub const MAX_ACCOUNTS: usize = 1 << 31;

/// A secp256k1 Filecoin keyring.
pub struct FilecoinKeyring {
    config: KeyringConfig,
    /// Extended key at `config.account_path`; `None` for import-only keyrings.
    account_root: Option<XPrv>,
    accounts: Vec<HdKey>,
    /// Encoded address of `accounts[i]`.
    account_addresses: Vec<String>,
    imported_accounts: BTreeMap<String, HdKey>,
}

impl FilecoinKeyring {
    /// An import-only keyring with no seed.
    pub fn new(config: KeyringConfig) -> Self {
        Self {
            config,
            account_root: None,
            accounts: Vec::new(),
            account_addresses: Vec::new(),
            imported_accounts: BTreeMap::new(),
        }
    }

    /// A keyring deriving accounts from a BIP-32 seed.
    pub fn from_seed(seed: &[u8], config: KeyringConfig) -> Result<Self, KeyringError> {
        let path = DerivationPath::from_str(&config.account_path)
            .map_err(|e| KeyringError::KeyDerivation(e.to_string()))?;
        let root = XPrv::derive_from_path(seed, &path)
            .map_err(|e| KeyringError::KeyDerivation(e.to_string()))?;
        let mut keyring = Self::new(config);
        keyring.account_root = Some(root);
        Ok(keyring)
    }

    /// A keyring seeded from a BIP-39 phrase and optional passphrase.
    pub fn from_mnemonic(
        phrase: &str,
        passphrase: &str,
        config: KeyringConfig,
    ) -> Result<Self, KeyringError> {
        let normalized = phrase.split_whitespace().collect::<Vec<_>>().join(" ");
        let mnemonic = Mnemonic::parse(&normalized)
            .map_err(|e| KeyringError::InvalidMnemonic(e.to_string()))?;
        let seed = Zeroizing::new(mnemonic.to_seed(passphrase));
        Self::from_seed(&seed[..], config)
    }

    pub fn config(&self) -> &KeyringConfig {
        &self.config
    }

    pub fn network(&self) -> Network {
        self.config.network
    }

    /// Derive the next `count` accounts and return their addresses.
    ///
    /// An imported key whose address is derived here is dropped from the
    /// imported set.
    pub fn add_accounts(&mut self, count: usize) -> Result<Vec<String>, KeyringError> {
        let root = self.account_root.as_ref().ok_or(KeyringError::NoSeed)?;
        let start = self.accounts.len();
        let end = start
            .checked_add(count)
            .filter(|&end| end <= MAX_ACCOUNTS)
            .ok_or_else(|| {
                KeyringError::KeyDerivation(format!("cannot derive {count} accounts after {start}"))
            })?;
        let mut derived = Vec::with_capacity(end - start);
        for index in start..end {
            let index = u32::try_from(index)
                .map_err(|_| KeyringError::KeyDerivation(format!("index {index} out of range")))?;
            let child = ChildNumber::new(index, false)
                .and_then(|n| root.derive_child(n))
                .map_err(|e| KeyringError::KeyDerivation(e.to_string()))?;
            derived.push(HdKey::from_xprv(&child));
        }

        let mut addresses = Vec::with_capacity(derived.len());
        for key in derived {
            let address = self.address_for_key(&key);
            if self.imported_accounts.remove(&address).is_some() {
                warn!(%address, "derived account replaces imported key");
            }
            self.accounts.push(key);
            self.account_addresses.push(address.clone());
            addresses.push(address);
        }
        debug!(added = addresses.len(), total = self.accounts.len(), "derived accounts");
        Ok(addresses)
    }

    /// Address of the derived account at `index`.
    pub fn address(&self, index: usize) -> Option<&str> {
        self.account_addresses.get(index).map(String::as_str)
    }

    /// Every address held: derived accounts in index order, then imported keys.
    pub fn accounts(&self) -> Vec<String> {
        self.account_addresses
            .iter()
            .chain(self.imported_accounts.keys())
            .cloned()
            .collect()
    }

    /// Addresses of all imported keys, sorted.
    pub fn imported_addresses(&self) -> impl Iterator<Item = &str> {
        self.imported_accounts.keys().map(String::as_str)
    }

    /// Import a `{"Type":"secp256k1","PrivateKey":…}` document and return
    /// the new account's address.
    pub fn import_account(&mut self, payload: &[u8]) -> Result<String, KeyringError> {
        let key = KeyExport::into_key(payload).inspect_err(|e| {
            debug!(error = %e, "rejected key import");
        })?;
        let address = self.address_for_key(&key);
        if self.imported_accounts.contains_key(&address)
            || self.account_addresses.contains(&address)
        {
            warn!(%address, "duplicate key import");
            return Err(KeyringError::DuplicateAccount(address));
        }
        debug!(%address, "imported account");
        self.imported_accounts.insert(address.clone(), key);
        Ok(address)
    }

    pub fn imported_accounts_number(&self) -> usize {
        self.imported_accounts.len()
    }

    /// Remove an imported key. Derived accounts are never removed.
    pub fn remove_imported_account(&mut self, address: &str) -> bool {
        self.imported_accounts.remove(address).is_some()
    }

    /// Key owning `address`, looking at imported keys first.
    pub fn hd_key_from_address(&self, address: &str) -> Option<&HdKey> {
        if let Some(key) = self.imported_accounts.get(address) {
            return Some(key);
        }
        self.account_addresses
            .iter()
            .position(|a| a == address)
            .map(|i| &self.accounts[i])
    }

    /// Export the key owning `address` as a JSON document.
    pub fn export_account(&self, address: &str) -> Result<Zeroizing<String>, KeyringError> {
        let key = self
            .hd_key_from_address(address)
            .ok_or_else(|| KeyringError::AccountNotFound(address.to_string()))?;
        KeyExport::from_key(key).to_json()
    }

    /// Encoded address of `key` on this keyring's network.
    pub fn address_for_key(&self, key: &HdKey) -> String {
        key.address(self.config.network).encode()
    }
}

impl fmt::Debug for FilecoinKeyring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilecoinKeyring")
            .field("network", &self.config.network)
            .field("seeded", &self.account_root.is_some())
            .field("accounts", &self.accounts.len())
            .field("imported", &self.imported_accounts.len())
            .finish()
    }
}
