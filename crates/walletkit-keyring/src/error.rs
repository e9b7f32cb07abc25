//! Keyring error types.

use thiserror::Error;

/// Errors that can occur in keyring operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyringError {
    /// Import payload was empty.
    #[error("empty import payload")]
    EmptyPayload,

    /// Import payload is not a JSON object of the expected shape.
    #[error("invalid import json: {0}")]
    InvalidJson(String),

    /// A required field is missing or empty.
    #[error("missing field: {0}")]
    MissingField(&'static str),

    /// Key type other than `secp256k1`.
    #[error("unsupported key type: {0}")]
    UnsupportedKeyType(String),

    /// `PrivateKey` is not valid Base64.
    #[error("private key is not valid base64")]
    InvalidBase64,

    /// Decoded bytes are not a valid secp256k1 private key.
    #[error("invalid private key")]
    InvalidPrivateKey,

    /// The key's address already belongs to this keyring.
    #[error("account already exists: {0}")]
    DuplicateAccount(String),

    /// Derivation requested on a keyring created without a seed.
    #[error("keyring has no seed")]
    NoSeed,

    /// BIP-32 derivation failure.
    #[error("key derivation: {0}")]
    KeyDerivation(String),

    /// Invalid BIP-39 mnemonic phrase.
    #[error("invalid mnemonic: {0}")]
    InvalidMnemonic(String),

    /// No account with this address.
    #[error("account not found: {0}")]
    AccountNotFound(String),

    /// Export document could not be serialized.
    #[error("serialization: {0}")]
    Serialization(String),
}

/// Errors parsing a Filecoin address string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("invalid length: {0}")] InvalidLength(usize),
    #[error("unknown network prefix: {0}")] UnknownNetwork(char),
    #[error("unsupported protocol: {0}")] UnsupportedProtocol(char),
    #[error("invalid base32 payload")] InvalidEncoding,
    #[error("invalid checksum")] InvalidChecksum,
}
