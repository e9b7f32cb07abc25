//! EVM account address helpers.
//!
//! Addresses arrive from contracts left-padded to a 32-byte word. They are
//! rendered either as plain lowercase hex (ABI decoding) or in the EIP-55
//! mixed-case checksum form (values handed back to callers).

use alloy_primitives::Address;

use crate::constants::{ADDRESS_SIZE, WORD_SIZE};
use crate::error::EthAddressError;

/// Render a 20-byte address in EIP-55 checksum form (`0x4976fb03C32e…`).
pub fn to_checksum_address(bytes: &[u8; ADDRESS_SIZE]) -> String {
    Address::from(*bytes).to_checksum(None)
}

/// Render a 20-byte address as lowercase `0x`-prefixed hex.
pub fn to_lower_address(bytes: &[u8; ADDRESS_SIZE]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// The low 20 bytes of the first word in `word`, or `None` if fewer than 32
/// bytes are available. Padding bytes are not inspected.
pub fn low_address_bytes(word: &[u8]) -> Option<[u8; ADDRESS_SIZE]> {
    let low = word.get(WORD_SIZE - ADDRESS_SIZE..WORD_SIZE)?;
    let mut out = [0u8; ADDRESS_SIZE];
    out.copy_from_slice(low);
    Some(out)
}

/// Extract an address from a word that must be exactly 32 bytes with zero
/// padding above the low 20 bytes.
pub fn address_from_padded_word(word: &[u8]) -> Result<[u8; ADDRESS_SIZE], EthAddressError> {
    if word.len() != WORD_SIZE {
        return Err(EthAddressError::InvalidLength {
            expected: WORD_SIZE,
            got: word.len(),
        });
    }
    if word[..WORD_SIZE - ADDRESS_SIZE].iter().any(|&b| b != 0) {
        return Err(EthAddressError::DirtyPadding);
    }
    low_address_bytes(word).ok_or(EthAddressError::InvalidLength {
        expected: WORD_SIZE,
        got: word.len(),
    })
}
