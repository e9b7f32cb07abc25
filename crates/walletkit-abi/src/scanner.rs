//! Balance-scanner results.
//!
//! The balance-scanner helper contract answers a batch of token balance
//! queries with one `(bool success, bytes data)[]` value. Each tuple is
//! decoded with the ordinary scalar rules; tuple offsets are relative to the
//! tuple's own start.

use crate::decoder::{abi_decode, decode_dynamic_array};
use crate::error::AbiError;
use crate::types::DecodedTuple;

const RESULT_TYPES: [&str; 2] = ["bool", "bytes"];

/// Decode a `(bool, bytes)[]` balance-scanner result, one tuple per element.
///
/// Fails as a whole if any element is malformed.
pub fn abi_decode_balance_scanner_result(data: &[u8]) -> Result<Vec<DecodedTuple>, AbiError> {
    decode_dynamic_array(data, 0, |element| abi_decode(&RESULT_TYPES, element))
}
