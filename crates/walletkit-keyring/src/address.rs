//! Filecoin address encoding.
//!
//! A secp256k1 ("protocol 1") address is rendered as:
//!
//! ```text
//! <network char> '1' base32lower( payload || checksum )
//! payload  = blake2b-160(uncompressed public key)
//! checksum = blake2b-32(0x01 || payload)
//! ```
//!
//! Base32 is the RFC 4648 alphabet without padding. Every step is
//! load-bearing: a different digest size, protocol byte or case produces a
//! different, unverifiable address.

use std::fmt;
use std::str::FromStr;

use blake2::digest::consts::{U4, U20};
use blake2::{Blake2b, Digest};
use data_encoding::BASE32_NOPAD;
use serde::{Deserialize, Serialize};

use crate::error::AddressError;

type Blake2b160 = Blake2b<U20>;
type Blake2b32 = Blake2b<U4>;

/// Size of the public-key hash carried by a secp256k1 address.
pub const PAYLOAD_SIZE: usize = 20;

/// Size of the trailing checksum.
pub const CHECKSUM_SIZE: usize = 4;

/// Length of an encoded secp256k1 address string (`t1` + 39 base32 chars).
pub const ENCODED_LEN: usize = 41;

/// Network identifier determining the first address character.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// Mainnet (addresses start with `f`).
    Mainnet,
    /// Testnet (addresses start with `t`).
    #[default]
    Testnet,
}

impl Network {
    pub fn prefix(&self) -> char {
        match self {
            Network::Mainnet => 'f',
            Network::Testnet => 't',
        }
    }

    pub fn from_prefix(c: char) -> Result<Self, AddressError> {
        match c {
            'f' => Ok(Network::Mainnet),
            't' => Ok(Network::Testnet),
            other => Err(AddressError::UnknownNetwork(other)),
        }
    }
}

impl FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mainnet" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            other => Err(format!("unknown network: {other}")),
        }
    }
}

/// Filecoin address protocol. Only secp256k1 keys are held by the keyring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Protocol {
    Secp256k1 = 1,
}

impl Protocol {
    pub fn byte(self) -> u8 {
        self as u8
    }

    pub fn digit(self) -> char {
        char::from(b'0' + self.byte())
    }
}

/// A Filecoin secp256k1 address.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FilecoinAddress {
    network: Network,
    payload: [u8; PAYLOAD_SIZE],
}

impl FilecoinAddress {
    /// Address for an uncompressed (65-byte) secp256k1 public key.
    pub fn from_public_key(uncompressed: &[u8], network: Network) -> Self {
        let mut payload = [0u8; PAYLOAD_SIZE];
        payload.copy_from_slice(&Blake2b160::digest(uncompressed));
        Self { network, payload }
    }

    pub fn network(&self) -> Network {
        self.network
    }

    pub fn protocol(&self) -> Protocol {
        Protocol::Secp256k1
    }

    /// The Blake2b-160 public-key hash.
    pub fn payload(&self) -> &[u8; PAYLOAD_SIZE] {
        &self.payload
    }

    /// Encode as `t1…` / `f1…`.
    pub fn encode(&self) -> String {
        let checksum = checksum(self.protocol(), &self.payload);
        let mut body = Vec::with_capacity(PAYLOAD_SIZE + CHECKSUM_SIZE);
        body.extend_from_slice(&self.payload);
        body.extend_from_slice(&checksum);

        let mut out = String::with_capacity(ENCODED_LEN);
        out.push(self.network.prefix());
        out.push(self.protocol().digit());
        out.push_str(&BASE32_NOPAD.encode(&body).to_ascii_lowercase());
        out
    }

    /// Parse and checksum-verify an encoded address.
    pub fn decode(s: &str) -> Result<Self, AddressError> {
        if s.len() != ENCODED_LEN || !s.is_ascii() {
            return Err(AddressError::InvalidLength(s.len()));
        }
        let mut chars = s.chars();
        let network = Network::from_prefix(chars.next().unwrap_or_default())?;
        let protocol = chars.next().unwrap_or_default();
        if protocol != Protocol::Secp256k1.digit() {
            return Err(AddressError::UnsupportedProtocol(protocol));
        }

        let body = &s[2..];
        if body.bytes().any(|b| b.is_ascii_uppercase()) {
            return Err(AddressError::InvalidEncoding);
        }
        let decoded = BASE32_NOPAD
            .decode(body.to_ascii_uppercase().as_bytes())
            .map_err(|_| AddressError::InvalidEncoding)?;
        if decoded.len() != PAYLOAD_SIZE + CHECKSUM_SIZE {
            return Err(AddressError::InvalidLength(s.len()));
        }

        let mut payload = [0u8; PAYLOAD_SIZE];
        payload.copy_from_slice(&decoded[..PAYLOAD_SIZE]);
        if checksum(Protocol::Secp256k1, &payload)[..] != decoded[PAYLOAD_SIZE..] {
            return Err(AddressError::InvalidChecksum);
        }
        Ok(Self { network, payload })
    }
}

impl fmt::Display for FilecoinAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl FromStr for FilecoinAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

/// Blake2b-32 over the protocol byte followed by the payload.
fn checksum(protocol: Protocol, payload: &[u8; PAYLOAD_SIZE]) -> [u8; CHECKSUM_SIZE] {
    let mut hasher = Blake2b32::new();
    hasher.update([protocol.byte()]);
    hasher.update(payload);
    let mut out = [0u8; CHECKSUM_SIZE];
    out.copy_from_slice(&hasher.finalize());
    out
}
