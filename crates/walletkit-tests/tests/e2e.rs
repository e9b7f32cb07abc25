//! End-to-end flows across the keyring, ABI decoder and RPC parser.
//!
//! Each test drives the public APIs the way a wallet service would: raw
//! response bodies in, typed values out; mnemonic in, exportable accounts
//! out.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use walletkit_abi::{abi_decode, abi_decode_balance_scanner_result};
use walletkit_core::U256;
use walletkit_core::hex_utils::prefixed_hex_string_to_bytes;
use walletkit_keyring::{FilecoinKeyring, HdKey, KeyringConfig, KeyringError, Network};
use walletkit_rpc::{ProviderError, RpcError, eth, parse_or_error, solana};
use walletkit_tests::helpers::*;

const TESTNET_ACCOUNTS: [&str; 3] = [
    "t1qode47ievxlxzk6z2viuovedabmn3tq6t57uqhq",
    "t12nzdrhfh6caurft7gwy6d3uazvgy3lhl7rfzvpq",
    "t1ulkj6hjjssczzoyjrnw2dsu7xsw3hd2nsh2vf5i",
];

// ---------------------------------------------------------------------------
// Keyring lifecycle
// ---------------------------------------------------------------------------

#[test]
fn mnemonic_accounts_export_and_reimport() {
    let mut wallet = FilecoinKeyring::from_mnemonic(TEST_MNEMONIC, "", KeyringConfig::testnet())
        .unwrap();
    let derived = wallet.add_accounts(3).unwrap();
    assert_eq!(derived, TESTNET_ACCOUNTS);

    // Move every account into a fresh import-only keyring.
    let mut restored = FilecoinKeyring::new(KeyringConfig::testnet());
    for address in &derived {
        let exported = wallet.export_account(address).unwrap();
        assert_eq!(restored.import_account(exported.as_bytes()).unwrap(), *address);
    }
    assert_eq!(restored.imported_accounts_number(), 3);
    assert_eq!(restored.accounts().len(), 3);

    // A re-derived keyring absorbs matching imports instead of duplicating them.
    let mut merged = FilecoinKeyring::from_mnemonic(TEST_MNEMONIC, "", KeyringConfig::testnet())
        .unwrap();
    let exported = wallet.export_account(TESTNET_ACCOUNTS[2]).unwrap();
    merged.import_account(exported.as_bytes()).unwrap();
    merged.add_accounts(3).unwrap();
    assert_eq!(merged.imported_accounts_number(), 0);
    assert_eq!(merged.accounts(), TESTNET_ACCOUNTS);
}

#[test]
fn mainnet_config_changes_prefix_only() {
    let mut testnet = FilecoinKeyring::from_mnemonic(TEST_MNEMONIC, "", KeyringConfig::testnet())
        .unwrap();
    let mut mainnet = FilecoinKeyring::from_mnemonic(TEST_MNEMONIC, "", KeyringConfig::mainnet())
        .unwrap();
    let t = testnet.add_accounts(2).unwrap();
    let f = mainnet.add_accounts(2).unwrap();
    for (t, f) in t.iter().zip(&f) {
        assert_eq!(&t[1..], &f[1..]);
        assert!(f.starts_with("f1"));
    }
    assert_eq!(mainnet.network(), Network::Mainnet);
}

#[test]
fn random_keys_import_once() {
    let mut keyring = FilecoinKeyring::new(KeyringConfig::default());
    let mut imported = Vec::new();
    for _ in 0..8 {
        let key = HdKey::generate();
        let payload = import_payload(&key.private_key_bytes()[..]);
        imported.push(keyring.import_account(payload.as_bytes()).unwrap());
        assert!(matches!(
            keyring.import_account(payload.as_bytes()),
            Err(KeyringError::DuplicateAccount(_))
        ));
    }
    assert_eq!(keyring.imported_accounts_number(), imported.len());
    for address in &imported {
        assert!(keyring.remove_imported_account(address));
    }
    assert_eq!(keyring.imported_accounts_number(), 0);
}

#[test]
fn import_agrees_with_key_construction() {
    for _ in 0..32 {
        let raw: [u8; 32] = rand::random();
        let mut keyring = FilecoinKeyring::new(KeyringConfig::default());
        let imported = keyring.import_account(import_payload(&raw).as_bytes());
        assert_eq!(imported.is_ok(), HdKey::generate_from_private_key(&raw).is_ok());
    }
    let exported = STANDARD.encode([0u8; 32]);
    let mut keyring = FilecoinKeyring::new(KeyringConfig::default());
    let payload = format!(r#"{{"Type":"secp256k1","PrivateKey":"{exported}"}}"#);
    assert_eq!(
        keyring.import_account(payload.as_bytes()),
        Err(KeyringError::InvalidPrivateKey)
    );
}

// ---------------------------------------------------------------------------
// RPC body -> ABI payload -> typed value
// ---------------------------------------------------------------------------

#[test]
fn eth_call_result_through_abi_decoder() {
    let owner = [0x49u8; 20];
    let mut data = Vec::new();
    data.extend_from_slice(&address_word(&owner));
    data.extend_from_slice(&word(1_000_000));
    data.extend_from_slice(&word(1));
    let body = hex_result_body(&data);

    let raw = eth::parse_eth_call(&body).unwrap();
    let decoded = abi_decode(&["address", "uint256", "bool"], &prefixed_hex_string_to_bytes(&raw).unwrap())
        .unwrap();
    assert_eq!(decoded.get(0), Some(("address", format!("0x{}", "49".repeat(20)).as_str())));
    assert_eq!(decoded.get(1), Some(("uint256", "0xf4240")));
    assert_eq!(decoded.get(2), Some(("bool", "true")));
}

#[test]
fn balance_scanner_result_from_rpc_body() {
    // Two (bool, bytes) results: (true, 0x01f4) and (false, 0x).
    let mut data = Vec::new();
    data.extend_from_slice(&word(32));
    data.extend_from_slice(&word(2));
    data.extend_from_slice(&word(64));
    data.extend_from_slice(&word(192));
    // element 0 at 64: bool, offset 64 (tuple-relative), len 2, payload
    data.extend_from_slice(&word(1));
    data.extend_from_slice(&word(64));
    data.extend_from_slice(&word(2));
    data.extend_from_slice(&padded(&[0x01, 0xf4]));
    // element 1 at 192: bool, offset 64, len 0
    data.extend_from_slice(&word(0));
    data.extend_from_slice(&word(64));
    data.extend_from_slice(&word(0));

    let raw = eth::parse_eth_call(&hex_result_body(&data)).unwrap();
    let results = abi_decode_balance_scanner_result(&prefixed_hex_string_to_bytes(&raw).unwrap())
        .unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].values(), ["true", "0x01f4"]);
    assert_eq!(results[1].values(), ["false", "0x"]);
}

#[test]
fn ens_and_ud_parsers_share_abi_rules() {
    let content = [0xe3u8, 0x01, 0x01, 0x70];
    let body = hex_result_body(&encode_single_bytes(&content));
    assert_eq!(eth::parse_ens_resolver_content_hash(&body).unwrap(), content);

    let body = hex_result_body(&encode_single_bytes(b"ipfs://example"));
    assert_eq!(
        eth::parse_unstoppable_domains_proxy_reader_get(&body).unwrap(),
        "ipfs://example"
    );

    let body = hex_result_body(&encode_single_bytes(&[0xff, 0xfe]));
    assert!(eth::parse_unstoppable_domains_proxy_reader_get(&body).is_err());
}

#[test]
fn value_or_server_error() {
    let ok: Result<U256, RpcError<ProviderError>> =
        parse_or_error(r#"{"jsonrpc":"2.0","id":1,"result":"0x4b7"}"#, eth::parse_eth_get_block_number);
    assert_eq!(ok.unwrap(), U256::from(1207u64));

    let err: Result<U256, RpcError<ProviderError>> =
        parse_or_error(&error_body(-32005, "limit exceeded"), eth::parse_eth_get_block_number);
    let err = err.unwrap_err();
    assert_eq!(err.kind, ProviderError::LimitExceeded);
    assert_eq!(err.message, "limit exceeded");

    let err: Result<u64, RpcError<walletkit_rpc::SolanaProviderError>> =
        parse_or_error(&error_body(-32005, "limit exceeded"), solana::parse_get_balance);
    assert_eq!(
        err.unwrap_err().kind,
        walletkit_rpc::SolanaProviderError::Other(-32005)
    );
}
