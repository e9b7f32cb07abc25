//! `0x`-prefixed hex helpers.
//!
//! JSON-RPC endpoints exchange quantities and data as `0x`-prefixed hex
//! strings. These helpers validate, pad, concatenate and convert such strings
//! without ever silently truncating a value: anything that does not fit is an
//! error.

use alloy_primitives::U256;

use crate::constants::{HEX_PREFIX, WORD_HEX_DIGITS};
use crate::error::HexError;

/// Encode bytes as a lowercase `0x`-prefixed hex string.
///
/// An empty buffer encodes as `"0x0"`, the canonical zero quantity.
pub fn to_hex(data: &[u8]) -> String {
    if data.is_empty() {
        return "0x0".to_string();
    }
    format!("{HEX_PREFIX}{}", hex::encode(data))
}

/// Whether `input` is `0x` followed by at least one hex digit.
pub fn is_valid_hex_string(input: &str) -> bool {
    match input.strip_prefix(HEX_PREFIX) {
        Some(digits) => !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_hexdigit()),
        None => false,
    }
}

/// Strip the `0x` prefix and check every remaining character is a hex digit.
///
/// Unlike [`is_valid_hex_string`], an empty digit string is accepted.
fn digits(input: &str) -> Result<&str, HexError> {
    let digits = input.strip_prefix(HEX_PREFIX).ok_or(HexError::MissingPrefix)?;
    if let Some(c) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(HexError::InvalidDigit(c));
    }
    Ok(digits)
}

/// Left-pad a hex parameter with zeros to a full 32-byte word.
///
/// Inputs that already have 64 or more digits are returned unchanged.
pub fn pad_hex_encoded_parameter(input: &str) -> Result<String, HexError> {
    if !is_valid_hex_string(input) {
        return Err(digits(input).err().unwrap_or(HexError::Empty));
    }
    let digits = &input[HEX_PREFIX.len()..];
    if digits.len() >= WORD_HEX_DIGITS {
        return Ok(input.to_string());
    }
    Ok(format!("{HEX_PREFIX}{digits:0>WORD_HEX_DIGITS$}"))
}

/// Join two `0x`-prefixed strings under a single prefix (`0x1` + `0x2` = `0x12`).
pub fn concat_hex_strings(first: &str, second: &str) -> Result<String, HexError> {
    concat_hex_strings_all(&[first, second])
}

/// Join any number of `0x`-prefixed strings under a single prefix.
pub fn concat_hex_strings_all<S: AsRef<str>>(inputs: &[S]) -> Result<String, HexError> {
    if inputs.is_empty() {
        return Err(HexError::Empty);
    }
    let mut out = String::from(HEX_PREFIX);
    for input in inputs {
        let input = input.as_ref();
        if !is_valid_hex_string(input) {
            return Err(digits(input).err().unwrap_or(HexError::Empty));
        }
        out.push_str(&input[HEX_PREFIX.len()..]);
    }
    Ok(out)
}

/// Decode a `0x`-prefixed hex string into bytes.
///
/// An odd number of digits is treated as if it carried one leading zero, and
/// `"0x"` alone decodes to an empty buffer.
pub fn prefixed_hex_string_to_bytes(input: &str) -> Result<Vec<u8>, HexError> {
    let digits = digits(input)?;
    if digits.len() % 2 == 1 {
        let padded = format!("0{digits}");
        return hex::decode(padded).map_err(|_| HexError::Empty);
    }
    hex::decode(digits).map_err(|_| HexError::Empty)
}

/// Parse a `0x`-prefixed hex quantity into a 256-bit integer.
///
/// Leading zeros are accepted; more than 256 significant bits is an error.
pub fn hex_value_to_u256(input: &str) -> Result<U256, HexError> {
    if !is_valid_hex_string(input) {
        return Err(digits(input).err().unwrap_or(HexError::Empty));
    }
    let significant = input[HEX_PREFIX.len()..].trim_start_matches('0');
    if significant.is_empty() {
        return Ok(U256::ZERO);
    }
    U256::from_str_radix(significant, 16).map_err(|_| HexError::Overflow)
}

/// Render a 256-bit integer as a minimal `0x`-prefixed hex quantity.
pub fn u256_to_hex(value: U256) -> String {
    let encoded = hex::encode(value.to_be_bytes::<32>());
    let trimmed = encoded.trim_start_matches('0');
    if trimmed.is_empty() {
        return "0x0".to_string();
    }
    format!("{HEX_PREFIX}{trimmed}")
}
