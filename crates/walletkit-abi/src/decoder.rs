//! Word-aligned ABI decoding.
//!
//! Static parameters occupy one head word each. Dynamic parameters store a
//! byte offset in their head word; the offset is relative to the start of the
//! region being decoded and points at a length word followed by the payload.
//!
//! Scalars tolerate extra bytes after the words they consume, so a buffer
//! holding several concatenated results still decodes its first one.

use tracing::debug;
use walletkit_core::U256;
use walletkit_core::address::{low_address_bytes, to_lower_address};
use walletkit_core::constants::{ADDRESS_SIZE, WORD_SIZE};
use walletkit_core::hex_utils::u256_to_hex;

use crate::error::AbiError;
use crate::types::{DecodedTuple, ParamType};

/// Decode `data` against a list of parameter type names.
///
/// Fails as a whole if any single parameter is malformed.
pub fn abi_decode<S: AsRef<str>>(types: &[S], data: &[u8]) -> Result<DecodedTuple, AbiError> {
    let mut decoded = DecodedTuple::with_capacity(types.len());
    for (index, name) in types.iter().enumerate() {
        let ty = ParamType::from(name.as_ref());
        let head = index.checked_mul(WORD_SIZE).ok_or(AbiError::ValueTooLarge)?;
        let value = decode_param(&ty, data, head).inspect_err(|e| {
            debug!(param = %ty, index, error = %e, "abi: parameter rejected");
        })?;
        decoded.push(&ty, value);
    }
    Ok(decoded)
}

/// Decode a `string[]` result: an offset word, a count, one offset per
/// element (relative to the first byte after the count), then each string.
pub fn abi_decode_string_array(data: &[u8]) -> Result<Vec<String>, AbiError> {
    decode_dynamic_array(data, 0, decode_string_tail)
}

fn decode_param(ty: &ParamType, data: &[u8], head: usize) -> Result<String, AbiError> {
    match ty {
        ParamType::Address => {
            let word = word_at(data, head)?;
            let bytes = low_address_bytes(word).ok_or(AbiError::Truncated {
                needed: WORD_SIZE,
                available: word.len(),
            })?;
            Ok(to_lower_address(&bytes))
        }
        ParamType::Uint256 => {
            let word = word_at(data, head)?;
            Ok(u256_to_hex(U256::from_be_bytes(*word)))
        }
        ParamType::Bool => {
            let word = word_at(data, head)?;
            Ok(word.iter().any(|&b| b != 0).to_string())
        }
        ParamType::Bytes => {
            let (start, length) = tail_at(data, head)?;
            let payload = take(data, start, length)?;
            Ok(format!("0x{}", hex::encode(payload)))
        }
        ParamType::String => {
            let (start, length) = tail_at(data, head)?;
            utf8(take(data, start, length)?)
        }
        ParamType::AddressArray => {
            let (start, count) = tail_at(data, head)?;
            let byte_len = count.checked_mul(WORD_SIZE).ok_or(AbiError::ValueTooLarge)?;
            let payload = take(data, start, byte_len)?;
            let mut out = String::with_capacity(2 + count * ADDRESS_SIZE * 2);
            out.push_str("0x");
            for element in payload.chunks_exact(WORD_SIZE) {
                out.push_str(&hex::encode(&element[WORD_SIZE - ADDRESS_SIZE..]));
            }
            Ok(out)
        }
        ParamType::Unknown(_) => Ok(hex::encode(word_at(data, head)?)),
    }
}

/// Walk a dynamic array whose offset word sits at `head`.
///
/// Each element's offset is relative to the first byte after the count word;
/// `decode_element` receives the buffer starting at that element.
pub(crate) fn decode_dynamic_array<T>(
    data: &[u8],
    head: usize,
    mut decode_element: impl FnMut(&[u8]) -> Result<T, AbiError>,
) -> Result<Vec<T>, AbiError> {
    let (elements_start, count) = tail_at(data, head)?;
    let elements = data.get(elements_start..).ok_or(AbiError::OffsetOutOfBounds {
        offset: elements_start,
        available: data.len(),
    })?;
    let heads_len = count.checked_mul(WORD_SIZE).ok_or(AbiError::ValueTooLarge)?;
    if heads_len > elements.len() {
        return Err(AbiError::LengthOutOfBounds {
            length: heads_len,
            available: elements.len(),
        });
    }

    let mut out = Vec::with_capacity(count);
    for i in 0..count {
        let offset = usize_at(elements, i * WORD_SIZE)?;
        let element = elements.get(offset..).ok_or(AbiError::OffsetOutOfBounds {
            offset,
            available: elements.len(),
        })?;
        out.push(decode_element(element)?);
    }
    Ok(out)
}

/// A length-prefixed UTF-8 string starting at the first byte of `data`.
fn decode_string_tail(data: &[u8]) -> Result<String, AbiError> {
    let length = usize_at(data, 0)?;
    utf8(take(data, WORD_SIZE, length)?)
}

fn utf8(payload: &[u8]) -> Result<String, AbiError> {
    String::from_utf8(payload.to_vec()).map_err(|_| AbiError::InvalidUtf8)
}

/// The 32-byte word starting at `pos`.
pub(crate) fn word_at(data: &[u8], pos: usize) -> Result<&[u8; WORD_SIZE], AbiError> {
    let end = pos.checked_add(WORD_SIZE).ok_or(AbiError::ValueTooLarge)?;
    data.get(pos..end)
        .and_then(|w| <&[u8; WORD_SIZE]>::try_from(w).ok())
        .ok_or(AbiError::Truncated {
            needed: end,
            available: data.len(),
        })
}

/// The word at `pos` read as a byte count or offset.
///
/// Values above `u64::MAX` (or the platform's `usize`) are rejected outright.
pub(crate) fn usize_at(data: &[u8], pos: usize) -> Result<usize, AbiError> {
    let word = word_at(data, pos)?;
    let (high, low) = word.split_at(WORD_SIZE - 8);
    if high.iter().any(|&b| b != 0) {
        return Err(AbiError::ValueTooLarge);
    }
    let mut buf = [0u8; 8];
    buf.copy_from_slice(low);
    usize::try_from(u64::from_be_bytes(buf)).map_err(|_| AbiError::ValueTooLarge)
}

/// Follow the offset word at `head` to a tail region.
///
/// Returns the payload start and the value of the tail's length word. The
/// length itself is not yet checked against the remaining data.
fn tail_at(data: &[u8], head: usize) -> Result<(usize, usize), AbiError> {
    let offset = usize_at(data, head)?;
    if offset >= data.len() {
        return Err(AbiError::OffsetOutOfBounds {
            offset,
            available: data.len(),
        });
    }
    let length = usize_at(data, offset)?;
    Ok((offset + WORD_SIZE, length))
}

/// Exactly `length` bytes starting at `start`.
fn take(data: &[u8], start: usize, length: usize) -> Result<&[u8], AbiError> {
    let available = data.len().saturating_sub(start);
    let end = start.checked_add(length).ok_or(AbiError::LengthOutOfBounds { length, available })?;
    data.get(start..end)
        .ok_or(AbiError::LengthOutOfBounds { length, available })
}
