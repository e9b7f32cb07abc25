//! Key export documents.
//!
//! Filecoin wallets exchange private keys as a small JSON object:
//!
//! ```json
//! {"Type":"secp256k1","PrivateKey":"<base64 of the 32 raw key bytes>"}
//! ```
//!
//! Only the `secp256k1` key type is accepted. Unknown extra fields are
//! ignored.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::error::KeyringError;
use crate::hd_key::HdKey;

/// The only key type this keyring holds.
pub const SECP256K1_KEY_TYPE: &str = "secp256k1";

/// Wire form of an exported key.
#[derive(Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct KeyExport {
    #[serde(rename = "Type", default)]
    key_type: Option<String>,
    #[serde(rename = "PrivateKey", default)]
    private_key: Option<String>,
}

impl KeyExport {
    /// Build the export document for `key`.
    pub fn from_key(key: &HdKey) -> Self {
        Self {
            key_type: Some(SECP256K1_KEY_TYPE.to_string()),
            private_key: Some(STANDARD.encode(&key.private_key_bytes()[..])),
        }
    }

    /// Parse an import payload. Validates shape and key type, not the key itself.
    pub fn parse(payload: &[u8]) -> Result<Self, KeyringError> {
        if payload.is_empty() {
            return Err(KeyringError::EmptyPayload);
        }
        // Derived struct deserialization also accepts a positional array.
        if payload.iter().find(|b| !b.is_ascii_whitespace()) != Some(&b'{') {
            return Err(KeyringError::InvalidJson("expected a json object".into()));
        }
        let export: KeyExport = serde_json::from_slice(payload)
            .map_err(|e| KeyringError::InvalidJson(e.to_string()))?;

        if export.private_key.as_deref().is_none_or(str::is_empty) {
            return Err(KeyringError::MissingField("PrivateKey"));
        }
        match export.key_type.as_deref() {
            None | Some("") => Err(KeyringError::MissingField("Type")),
            Some(SECP256K1_KEY_TYPE) => Ok(export),
            Some(other) => Err(KeyringError::UnsupportedKeyType(other.to_string())),
        }
    }

    /// Decoded raw private key bytes.
    pub fn private_key_bytes(&self) -> Result<Zeroizing<Vec<u8>>, KeyringError> {
        let encoded = self
            .private_key
            .as_deref()
            .ok_or(KeyringError::MissingField("PrivateKey"))?;
        STANDARD
            .decode(encoded)
            .map(Zeroizing::new)
            .map_err(|_| KeyringError::InvalidBase64)
    }

    /// Parse the payload and turn it into a key.
    pub fn into_key(payload: &[u8]) -> Result<HdKey, KeyringError> {
        let export = Self::parse(payload)?;
        let raw = export.private_key_bytes()?;
        HdKey::generate_from_private_key(&raw)
    }

    /// Serialize as the compact JSON document.
    pub fn to_json(&self) -> Result<Zeroizing<String>, KeyringError> {
        serde_json::to_string(self)
            .map(Zeroizing::new)
            .map_err(|e| KeyringError::Serialization(e.to_string()))
    }
}
