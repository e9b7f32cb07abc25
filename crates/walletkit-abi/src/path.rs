//! Packed Uniswap V3 swap paths.
//!
//! A path is not word-aligned ABI data but a tight packing of
//! `address (20) | fee (3) | address (20) | fee (3) | … | address (20)`.

use tracing::debug;
use walletkit_core::constants::ADDRESS_SIZE;
use walletkit_core::hex_utils::prefixed_hex_string_to_bytes;

use crate::error::AbiError;

/// Size of the pool fee field between two hops.
pub const POOL_FEE_SIZE: usize = 3;

const HOP_SIZE: usize = ADDRESS_SIZE + POOL_FEE_SIZE;

/// Decode a `0x`-prefixed packed path into its token addresses, in order.
///
/// The input must hold at least two addresses and no trailing partial hop.
pub fn uniswap_encoded_path_decode(encoded_path: &str) -> Result<Vec<String>, AbiError> {
    let digits = encoded_path.strip_prefix("0x").unwrap_or(encoded_path);
    if digits.len() % 2 == 1 {
        return Err(AbiError::InvalidPathLength(digits.len() / 2));
    }
    let data = prefixed_hex_string_to_bytes(encoded_path)?;
    if data.len() < ADDRESS_SIZE + HOP_SIZE || (data.len() - ADDRESS_SIZE) % HOP_SIZE != 0 {
        debug!(len = data.len(), "abi: swap path has invalid length");
        return Err(AbiError::InvalidPathLength(data.len()));
    }

    let hops = (data.len() - ADDRESS_SIZE) / HOP_SIZE;
    let mut path = Vec::with_capacity(hops + 1);
    for hop in 0..=hops {
        let start = hop * HOP_SIZE;
        path.push(format!("0x{}", hex::encode(&data[start..start + ADDRESS_SIZE])));
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WETH: &str = "c02aaa39b223fe8d0a0e5c4f27ead9083c756cc2";
    const STG: &str = "af5191b0de278c7286d6c7cc6ab6bb8a73ba2cd6";

    #[test]
    fn single_hop() {
        let path = uniswap_encoded_path_decode(&format!("0x{WETH}002710{STG}")).unwrap();
        assert_eq!(path, vec![format!("0x{WETH}"), format!("0x{STG}")]);
    }

    #[test]
    fn multi_hop() {
        let path = uniswap_encoded_path_decode(
            "0xc98d64da73a6616c42117b582e832812e7b8d57f\
             000bb8\
             a0b86991c6218b36c1d19d4a2e9eb0ce3606eb48\
             0001f4\
             c02aaa39b223fe8d0a0e5c4f27ead9083c756cc2",
        )
        .unwrap();
        assert_eq!(
            path,
            vec![
                "0xc98d64da73a6616c42117b582e832812e7b8d57f",
                "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48",
                "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2",
            ]
        );
    }

    #[test]
    fn mixed_case_input_is_lowercased() {
        let path = uniswap_encoded_path_decode(&format!(
            "0x{}002710{STG}",
            WETH.to_uppercase()
        ))
        .unwrap();
        assert_eq!(path[0], format!("0x{WETH}"));
    }

    #[test]
    fn invalid_paths() {
        for bad in [
            String::new(),
            "0x".to_string(),
            format!("0x{WETH}002710"),
            format!("0x002710{STG}"),
            format!("0x{WETH}{STG}"),
            format!("0x{WETH}002710{STG}deadbeef"),
            format!("0x{WETH}002710{STG}0"),
            format!("{WETH}002710{STG}"),
            format!("0x{WETH}002710{}", &STG[..38]) + "zz",
        ] {
            assert!(uniswap_encoded_path_decode(&bad).is_err(), "accepted {bad:?}");
        }
    }
}
