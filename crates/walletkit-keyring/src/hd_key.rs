//! secp256k1 key handle.
//!
//! An [`HdKey`] wraps a single private key, either derived from a BIP-32
//! seed or imported from raw bytes. Chain codes are not retained: the
//! keyring keeps its own account root for further derivation.

use std::fmt;
use std::str::FromStr;

use bip32::{DerivationPath, XPrv};
use k256::ecdsa::SigningKey;
use zeroize::Zeroizing;

use crate::address::{FilecoinAddress, Network};
use crate::error::KeyringError;

/// Length of a raw secp256k1 private key.
pub const PRIVATE_KEY_SIZE: usize = 32;

/// Length of an uncompressed SEC1 public key (`0x04 || X || Y`).
pub const UNCOMPRESSED_PUBLIC_KEY_SIZE: usize = 65;

/// A secp256k1 private key. Zeroized on drop by the underlying signing key.
#[derive(Clone)]
pub struct HdKey {
    signing_key: SigningKey,
}

impl HdKey {
    /// Generate a random key from the OS cryptographic RNG.
    pub fn generate() -> Self {
        Self {
            signing_key: SigningKey::random(&mut rand::rngs::OsRng),
        }
    }

    /// Derive the key at `path` (e.g. `m/44'/461'/0'/0/0`) from a BIP-32 seed.
    pub fn generate_from_seed(seed: &[u8], path: &str) -> Result<Self, KeyringError> {
        let path = DerivationPath::from_str(path)
            .map_err(|e| KeyringError::KeyDerivation(e.to_string()))?;
        let xprv = XPrv::derive_from_path(seed, &path)
            .map_err(|e| KeyringError::KeyDerivation(e.to_string()))?;
        Ok(Self::from_xprv(&xprv))
    }

    /// Wrap a raw 32-byte private key. Zero and out-of-range scalars are rejected.
    pub fn generate_from_private_key(bytes: &[u8]) -> Result<Self, KeyringError> {
        if bytes.len() != PRIVATE_KEY_SIZE {
            return Err(KeyringError::InvalidPrivateKey);
        }
        let signing_key =
            SigningKey::from_slice(bytes).map_err(|_| KeyringError::InvalidPrivateKey)?;
        Ok(Self { signing_key })
    }

    pub(crate) fn from_xprv(xprv: &XPrv) -> Self {
        Self {
            signing_key: xprv.private_key().clone(),
        }
    }

    /// The 65-byte uncompressed public key.
    pub fn uncompressed_public_key(&self) -> [u8; UNCOMPRESSED_PUBLIC_KEY_SIZE] {
        let point = self.signing_key.verifying_key().to_encoded_point(false);
        let mut out = [0u8; UNCOMPRESSED_PUBLIC_KEY_SIZE];
        out.copy_from_slice(point.as_bytes());
        out
    }

    /// Raw private key bytes. Handle with care.
    pub fn private_key_bytes(&self) -> Zeroizing<[u8; PRIVATE_KEY_SIZE]> {
        let mut out = Zeroizing::new([0u8; PRIVATE_KEY_SIZE]);
        out.copy_from_slice(&self.signing_key.to_bytes());
        out
    }

    /// Filecoin address of this key on `network`.
    pub fn address(&self, network: Network) -> FilecoinAddress {
        FilecoinAddress::from_public_key(&self.uncompressed_public_key(), network)
    }
}

impl fmt::Debug for HdKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HdKey")
            .field("private_key", &"[REDACTED]")
            .finish()
    }
}
