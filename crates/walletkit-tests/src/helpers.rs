//! Shared builders for ABI payloads, RPC bodies and key imports.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Standard BIP-39 test phrase (all-zero entropy).
pub const TEST_MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon \
                                 abandon abandon abandon abandon abandon about";

/// One 32-byte big-endian word holding `value`.
pub fn word(value: u64) -> [u8; 32] {
    let mut w = [0u8; 32];
    w[24..].copy_from_slice(&value.to_be_bytes());
    w
}

/// A 20-byte address left-padded to a word.
pub fn address_word(address: &[u8; 20]) -> [u8; 32] {
    let mut w = [0u8; 32];
    w[12..].copy_from_slice(address);
    w
}

/// `bytes` payload padded up to a whole number of words.
pub fn padded(payload: &[u8]) -> Vec<u8> {
    let mut out = payload.to_vec();
    out.resize(payload.len().div_ceil(32) * 32, 0);
    out
}

/// A single dynamic `bytes`/`string` parameter: offset, length, payload.
pub fn encode_single_bytes(payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&word(32));
    out.extend_from_slice(&word(payload.len() as u64));
    out.extend_from_slice(&padded(payload));
    out
}

/// A single `address[]` parameter.
pub fn encode_address_array(addresses: &[[u8; 20]]) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&word(32));
    out.extend_from_slice(&word(addresses.len() as u64));
    for a in addresses {
        out.extend_from_slice(&address_word(a));
    }
    out
}

/// A JSON-RPC success body whose `result` is the hex encoding of `data`.
pub fn hex_result_body(data: &[u8]) -> String {
    format!(
        r#"{{"jsonrpc":"2.0","id":1,"result":"0x{}"}}"#,
        hex::encode(data)
    )
}

/// A JSON-RPC error body.
pub fn error_body(code: i64, message: &str) -> String {
    format!(r#"{{"jsonrpc":"2.0","id":1,"error":{{"code":{code},"message":"{message}"}}}}"#)
}

/// A secp256k1 key export document for raw key bytes.
pub fn import_payload(private_key: &[u8]) -> String {
    format!(
        r#"{{"Type":"secp256k1","PrivateKey":"{}"}}"#,
        STANDARD.encode(private_key)
    )
}
