//! EVM response extractors.
//!
//! Quantities that callers only display (balances, gas prices, call data)
//! are returned verbatim as hex strings. Counters (block numbers, nonces,
//! receipt fields) are parsed into 256-bit integers.

use serde_json::Value;
use tracing::debug;
use walletkit_abi::{abi_decode, abi_decode_string_array};
use walletkit_core::U256;
use walletkit_core::address::{address_from_padded_word, to_checksum_address};
use walletkit_core::constants::WORD_SIZE;
use walletkit_core::hex_utils::{hex_value_to_u256, prefixed_hex_string_to_bytes};

use crate::envelope::{self, RpcError, member, result_str, str_member};
use crate::error::ParseError;
use crate::provider_error::ProviderError;

/// Fields of `eth_getTransactionReceipt` the wallet tracks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransactionReceipt {
    pub transaction_hash: String,
    pub transaction_index: U256,
    pub block_hash: String,
    pub block_number: U256,
    pub cumulative_gas_used: U256,
    pub gas_used: U256,
    /// Empty unless the transaction created a contract.
    pub contract_address: String,
    pub logs_bloom: String,
    pub status: bool,
}

pub fn parse_error_result(json: &str) -> RpcError<ProviderError> {
    envelope::parse_error_result(json)
}

/// A `bool` returned by `eth_call`: exactly one word holding 0 or 1.
pub fn parse_bool_result(json: &str) -> Result<bool, ParseError> {
    let word = result_bytes(json)?;
    if word.len() != WORD_SIZE || word[..WORD_SIZE - 1].iter().any(|&b| b != 0) {
        return Err(ParseError::InvalidBool);
    }
    match word[WORD_SIZE - 1] {
        0 => Ok(false),
        1 => Ok(true),
        _ => Err(ParseError::InvalidBool),
    }
}

/// An `address` returned by `eth_call`, in checksum form.
pub fn parse_address_result(json: &str) -> Result<String, ParseError> {
    let word = result_bytes(json)?;
    let address = address_from_padded_word(&word).inspect_err(|e| {
        debug!(error = %e, "rpc: address result rejected");
    })?;
    Ok(to_checksum_address(&address))
}

pub fn parse_eth_get_block_number(json: &str) -> Result<U256, ParseError> {
    Ok(hex_value_to_u256(&result_str(json)?)?)
}

/// Balance as the server's hex string.
pub fn parse_eth_get_balance(json: &str) -> Result<String, ParseError> {
    result_str(json)
}

pub fn parse_eth_get_transaction_count(json: &str) -> Result<U256, ParseError> {
    Ok(hex_value_to_u256(&result_str(json)?)?)
}

pub fn parse_eth_get_transaction_receipt(json: &str) -> Result<TransactionReceipt, ParseError> {
    let result = envelope::parse_result(json)?;
    if !result.is_object() {
        return Err(ParseError::UnexpectedType {
            field: "result",
            expected: "object",
        });
    }
    let quantity = |field: &'static str| -> Result<U256, ParseError> {
        Ok(hex_value_to_u256(str_member(&result, field)?)?)
    };

    Ok(TransactionReceipt {
        transaction_hash: str_member(&result, "transactionHash")?.to_string(),
        transaction_index: quantity("transactionIndex")?,
        block_hash: str_member(&result, "blockHash")?.to_string(),
        block_number: quantity("blockNumber")?,
        cumulative_gas_used: quantity("cumulativeGasUsed")?,
        gas_used: quantity("gasUsed")?,
        contract_address: result
            .get("contractAddress")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        logs_bloom: str_member(&result, "logsBloom")?.to_string(),
        status: member(&result, "status")?.as_str() == Some("0x1"),
    })
}

/// Transaction hash.
pub fn parse_eth_send_raw_transaction(json: &str) -> Result<String, ParseError> {
    result_str(json)
}

/// Raw call output as the server's hex string.
pub fn parse_eth_call(json: &str) -> Result<String, ParseError> {
    result_str(json)
}

pub fn parse_eth_estimate_gas(json: &str) -> Result<String, ParseError> {
    result_str(json)
}

pub fn parse_eth_gas_price(json: &str) -> Result<String, ParseError> {
    result_str(json)
}

/// Raw content hash bytes from an ENS resolver `contenthash(bytes32)` call.
pub fn parse_ens_resolver_content_hash(json: &str) -> Result<Vec<u8>, ParseError> {
    let data = result_bytes(json)?;
    let decoded = abi_decode(&["bytes"], &data)?;
    let (_, value) = decoded.get(0).ok_or(ParseError::UnexpectedType {
        field: "result",
        expected: "bytes",
    })?;
    Ok(prefixed_hex_string_to_bytes(value)?)
}

/// Record values from an Unstoppable Domains `ProxyReader.getMany` call.
pub fn parse_unstoppable_domains_proxy_reader_get_many(
    json: &str,
) -> Result<Vec<String>, ParseError> {
    let data = result_bytes(json)?;
    Ok(abi_decode_string_array(&data)?)
}

/// A single record value from `ProxyReader.get`.
pub fn parse_unstoppable_domains_proxy_reader_get(json: &str) -> Result<String, ParseError> {
    let data = result_bytes(json)?;
    let (_, mut values) = abi_decode(&["string"], &data)?.into_parts();
    values.pop().ok_or(ParseError::UnexpectedType {
        field: "result",
        expected: "string",
    })
}

fn result_bytes(json: &str) -> Result<Vec<u8>, ParseError> {
    Ok(prefixed_hex_string_to_bytes(&result_str(json)?)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(result: &str) -> String {
        format!(r#"{{"jsonrpc":"2.0","id":1,"result":"{result}"}}"#)
    }

    const RECEIPT: &str = r#"{
      "id": 1,
      "jsonrpc": "2.0",
      "result": {
        "transactionHash": "0xb903239f8543d04b5dc1ba6579132b143087c68db1b2168786408fcbce568238",
        "transactionIndex":  "0x1",
        "blockNumber": "0xb",
        "blockHash": "0xc6ef2fc5426d6ad6fd9e2a26abeab0aa2411b7ab17f30a99d3cb96aed1d1055b",
        "cumulativeGasUsed": "0x33bc",
        "gasUsed": "0x4dc",
        "contractAddress": CONTRACT,
        "logs": [],
        "logsBloom": "0x00...0",
        "status": "0x1"
      }
    }"#;

    #[test]
    fn balance_passed_through() {
        let hex = "0xe670ec64341771606e55d6b4ca35a1a6b75ee3d5145a99d05921026d1527331";
        assert_eq!(parse_eth_get_balance(&body(hex)).unwrap(), hex);
        assert!(parse_eth_get_balance("invalid JSON").is_err());
        assert!(parse_eth_get_balance("{ code: 3, message: 'Error', data: [] }").is_err());
    }

    #[test]
    fn call_passed_through() {
        assert_eq!(parse_eth_call(&body("0x0")).unwrap(), "0x0");
        assert_eq!(parse_eth_estimate_gas(&body("0x5208")).unwrap(), "0x5208");
        assert_eq!(parse_eth_gas_price(&body("0x3b9aca00")).unwrap(), "0x3b9aca00");
        assert_eq!(parse_eth_send_raw_transaction(&body("0xabc")).unwrap(), "0xabc");
    }

    #[test]
    fn block_number_and_nonce() {
        assert_eq!(parse_eth_get_block_number(&body("0x4b7")).unwrap(), U256::from(1207u64));
        assert_eq!(parse_eth_get_transaction_count(&body("0x0")).unwrap(), U256::ZERO);
        assert!(parse_eth_get_block_number(&body("4b7")).is_err());
        assert!(parse_eth_get_block_number(r#"{"result":1207}"#).is_err());
    }

    #[test]
    fn receipt_fields() {
        let json = RECEIPT.replace("CONTRACT", r#""0xb60e8dd61c5d32be8058bb8eb970870f07233155""#);
        let receipt = parse_eth_get_transaction_receipt(&json).unwrap();
        assert_eq!(
            receipt.transaction_hash,
            "0xb903239f8543d04b5dc1ba6579132b143087c68db1b2168786408fcbce568238"
        );
        assert_eq!(receipt.transaction_index, U256::from(1u64));
        assert_eq!(receipt.block_number, U256::from(11u64));
        assert_eq!(
            receipt.block_hash,
            "0xc6ef2fc5426d6ad6fd9e2a26abeab0aa2411b7ab17f30a99d3cb96aed1d1055b"
        );
        assert_eq!(receipt.cumulative_gas_used, U256::from(13244u64));
        assert_eq!(receipt.gas_used, U256::from(1244u64));
        assert_eq!(receipt.contract_address, "0xb60e8dd61c5d32be8058bb8eb970870f07233155");
        assert_eq!(receipt.logs_bloom, "0x00...0");
        assert!(receipt.status);
    }

    #[test]
    fn receipt_null_contract_address() {
        let json = RECEIPT.replace("CONTRACT", "null");
        let receipt = parse_eth_get_transaction_receipt(&json).unwrap();
        assert_eq!(receipt.contract_address, "");
        assert!(receipt.status);
    }

    #[test]
    fn receipt_failed_status_and_pending() {
        let json = RECEIPT
            .replace("CONTRACT", "null")
            .replace(r#""status": "0x1""#, r#""status": "0x0""#);
        assert!(!parse_eth_get_transaction_receipt(&json).unwrap().status);
        assert!(parse_eth_get_transaction_receipt(r#"{"result":null}"#).is_err());
    }

    #[test]
    fn address_result_checksummed() {
        let json = body("0x0000000000000000000000004976fb03c32e5b8cfe2b6ccb31c09ba78ebaba41");
        assert_eq!(
            parse_address_result(&json).unwrap(),
            "0x4976fb03C32e5B8cfe2b6cCB31c09Ba78EBaBa41"
        );
        let short = body("0x0000000000000000000000004976fb03c32e5b8cfe2b6ccb31c09ba78eba");
        assert!(parse_address_result(&short).is_err());
    }

    #[test]
    fn bool_result() {
        let one = format!("0x{}1", "0".repeat(63));
        let zero = format!("0x{}", "0".repeat(64));
        assert!(parse_bool_result(&body(&one)).unwrap());
        assert!(!parse_bool_result(&body(&zero)).unwrap());
        assert!(parse_bool_result(&body(&format!("0x{}", "0".repeat(41)))).is_err());
        assert!(parse_bool_result(&body("0")).is_err());
        assert_eq!(
            parse_bool_result(&body(&format!("0x{}2", "0".repeat(63)))),
            Err(ParseError::InvalidBool)
        );
    }

    #[test]
    fn ens_content_hash() {
        let json = body(concat!(
            "0x0000000000000000000000000000000000000000000000000000000000000020",
            "0000000000000000000000000000000000000000000000000000000000000026",
            "e3010170122023e0160eec32d7875c19c5ac7c03bc1f306dc260080d621454bc",
            "5f631e7310a70000000000000000000000000000000000000000000000000000"
        ));
        assert_eq!(
            hex::encode(parse_ens_resolver_content_hash(&json).unwrap()),
            "e3010170122023e0160eec32d7875c19c5ac7c03bc1f306dc260080d621454bc5f631e7310a7"
        );
        let truncated = r#"{"jsonrpc":"2.0","id":1,"result":"0x000000000000000000000000000000000000000000000000000000000000002000"#;
        assert!(parse_ens_resolver_content_hash(truncated).is_err());
        let short = body("0x0000000000000000000000000000000000000000000000000000000000000020");
        assert!(parse_ens_resolver_content_hash(&short).is_err());
    }

    #[test]
    fn unstoppable_domains_get_many() {
        let json = body(concat!(
            "0x0000000000000000000000000000000000000000000000000000000000000020",
            "0000000000000000000000000000000000000000000000000000000000000006",
            "00000000000000000000000000000000000000000000000000000000000000c0",
            "0000000000000000000000000000000000000000000000000000000000000120",
            "0000000000000000000000000000000000000000000000000000000000000180",
            "00000000000000000000000000000000000000000000000000000000000001a0",
            "00000000000000000000000000000000000000000000000000000000000001c0",
            "0000000000000000000000000000000000000000000000000000000000000200",
            "000000000000000000000000000000000000000000000000000000000000002e",
            "516d5772644e4a574d62765278787a4c686f6a564b614244737753344b4e564d",
            "374c766a734e3751624472766b61000000000000000000000000000000000000",
            "000000000000000000000000000000000000000000000000000000000000002e",
            "516d6257717842454b433350387471734b633938786d574e7a727a4474524c4d",
            "694d504c387742755447734d6e52000000000000000000000000000000000000",
            "0000000000000000000000000000000000000000000000000000000000000000",
            "0000000000000000000000000000000000000000000000000000000000000000",
            "000000000000000000000000000000000000000000000000000000000000001a",
            "68747470733a2f2f66616c6c6261636b312e746573742e636f6d000000000000",
            "000000000000000000000000000000000000000000000000000000000000001a",
            "68747470733a2f2f66616c6c6261636b322e746573742e636f6d000000000000"
        ));
        assert_eq!(
            parse_unstoppable_domains_proxy_reader_get_many(&json).unwrap(),
            vec![
                "QmWrdNJWMbvRxxzLhojVKaBDswS4KNVM7LvjsN7QbDrvka",
                "QmbWqxBEKC3P8tqsKc98xmWNzrzDtRLMiMPL8wBuTGsMnR",
                "",
                "",
                "https://fallback1.test.com",
                "https://fallback2.test.com",
            ]
        );
        let truncated = r#"{"jsonrpc":"2.0","id":1,"result":"0x000000000000000000000000000000000000000000000000000000000000002000"#;
        assert!(parse_unstoppable_domains_proxy_reader_get_many(truncated).is_err());
    }

    #[test]
    fn unstoppable_domains_get() {
        let json = body(concat!(
            "0x0000000000000000000000000000000000000000000000000000000000000020",
            "000000000000000000000000000000000000000000000000000000000000002a",
            "3078386161443434333231413836623137303837396437413234346331653864",
            "3336306339394464413800000000000000000000000000000000000000000000"
        ));
        assert_eq!(
            parse_unstoppable_domains_proxy_reader_get(&json).unwrap(),
            "0x8aaD44321A86b170879d7A244c1e8d360c99DdA8"
        );
        let truncated = r#"{"jsonrpc":"2.0","id":1,"result":"0x000000000000000000000000000000000000000000000000000000000000002000"#;
        assert!(parse_unstoppable_domains_proxy_reader_get(truncated).is_err());
    }

    #[test]
    fn error_kind_for_evm() {
        let json = r#"{"error":{"code":4902,"message":"Unrecognized chain ID"}}"#;
        let err = parse_error_result(json);
        assert_eq!(err.kind, ProviderError::UnknownChain);
        assert_eq!(err.message, "Unrecognized chain ID");
    }
}
