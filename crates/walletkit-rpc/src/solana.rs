//! Solana response extractors.
//!
//! Context-wrapped results (`{"context":{…},"value":…}`) are unwrapped to
//! their `value`. Integer fields must be JSON integers in range.

use serde_json::Value;

use crate::envelope::{self, RpcError, as_u64, member, result_str, result_u64, str_member};
use crate::error::ParseError;
use crate::provider_error::SolanaProviderError;

/// `getTokenAccountBalance` value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenAccountBalance {
    /// Raw amount in base units, as a decimal string.
    pub amount: String,
    pub decimals: u8,
    /// Amount scaled by `decimals`, as a decimal string.
    pub ui_amount_string: String,
}

/// `getLatestBlockhash` value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LatestBlockhash {
    pub blockhash: String,
    pub last_valid_block_height: u64,
}

pub fn parse_error_result(json: &str) -> RpcError<SolanaProviderError> {
    envelope::parse_error_result(json)
}

/// Lamport balance.
pub fn parse_get_balance(json: &str) -> Result<u64, ParseError> {
    as_u64(member(&context_value(json)?, "value")?, "value")
}

pub fn parse_get_token_account_balance(json: &str) -> Result<TokenAccountBalance, ParseError> {
    let result = context_value(json)?;
    let value = member(&result, "value")?;
    let decimals = as_u64(member(value, "decimals")?, "decimals")?;
    Ok(TokenAccountBalance {
        amount: str_member(value, "amount")?.to_string(),
        decimals: u8::try_from(decimals).map_err(|_| ParseError::OutOfRange("decimals"))?,
        ui_amount_string: str_member(value, "uiAmountString")?.to_string(),
    })
}

pub fn parse_get_latest_blockhash(json: &str) -> Result<LatestBlockhash, ParseError> {
    let result = context_value(json)?;
    let value = member(&result, "value")?;
    Ok(LatestBlockhash {
        blockhash: str_member(value, "blockhash")?.to_string(),
        last_valid_block_height: as_u64(
            member(value, "lastValidBlockHeight")?,
            "lastValidBlockHeight",
        )?,
    })
}

pub fn parse_get_block_height(json: &str) -> Result<u64, ParseError> {
    result_u64(json)
}

/// Transaction signature (base58).
pub fn parse_send_transaction(json: &str) -> Result<String, ParseError> {
    result_str(json)
}

fn context_value(json: &str) -> Result<Value, ParseError> {
    let result = envelope::parse_result(json)?;
    if !result.is_object() {
        return Err(ParseError::UnexpectedType {
            field: "result",
            expected: "object",
        });
    }
    Ok(result)
}
