//! walletkit — offline command-line front-end for the walletkit crates.
//!
//! Imports and derives Filecoin accounts, decodes ABI payloads and runs
//! saved JSON-RPC response bodies through the typed parsers. Nothing here
//! touches the network.

mod config;

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde_json::{Value, json};
use tracing::debug;
use walletkit_abi::{abi_decode, abi_decode_balance_scanner_result, uniswap_encoded_path_decode};
use walletkit_core::hex_utils::prefixed_hex_string_to_bytes;
use walletkit_keyring::config::DEFAULT_ACCOUNT_PATH;
use walletkit_keyring::export::KeyExport;
use walletkit_keyring::{FilecoinKeyring, HdKey, KeyringConfig, Network};
use walletkit_rpc::{ErrorKind, ParseError, ProviderError, SolanaProviderError, eth, parse_or_error, solana};

use crate::config::Config;

/// Filecoin keyring, ABI decoder and JSON-RPC parser toolbox.
#[derive(Parser)]
#[command(name = "walletkit", version, about)]
struct Cli {
    /// Network for rendered addresses (overrides WALLETKIT_NETWORK).
    #[arg(long, global = true)]
    network: Option<Network>,

    /// Log level (overrides WALLETKIT_LOG).
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Log output format, "text" or "json" (overrides WALLETKIT_LOG_FORMAT).
    #[arg(long, global = true)]
    log_format: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import a key export file and print its address.
    Import(ImportArgs),
    /// Generate a fresh key and print its address and export document.
    Keygen,
    /// Derive accounts from a mnemonic read on stdin.
    Derive(DeriveArgs),
    /// ABI decoding subcommands.
    Abi {
        #[command(subcommand)]
        action: AbiAction,
    },
    /// Parse a saved JSON-RPC response body.
    Rpc(RpcArgs),
}

#[derive(Args)]
struct ImportArgs {
    /// Path to a `{"Type":"secp256k1","PrivateKey":"…"}` document.
    file: PathBuf,
}

#[derive(Args)]
struct DeriveArgs {
    /// Number of accounts to derive.
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// BIP-32 parent path for accounts.
    #[arg(long, default_value = DEFAULT_ACCOUNT_PATH)]
    path: String,

    /// Also print each account's export document.
    #[arg(long)]
    export: bool,
}

#[derive(Subcommand)]
enum AbiAction {
    /// Decode a hex payload against a comma-separated type list.
    Decode {
        #[arg(short, long, value_delimiter = ',', required = true)]
        types: Vec<String>,
        /// `0x`-prefixed payload.
        data: String,
    },
    /// Decode a packed Uniswap V3 swap path.
    Path {
        /// `0x`-prefixed packed path.
        path: String,
    },
    /// Decode a balance-scanner `(bool, bytes)[]` result.
    Balances {
        /// `0x`-prefixed payload.
        data: String,
    },
}

#[derive(Args)]
struct RpcArgs {
    /// Which result shape to extract.
    #[arg(value_enum)]
    method: RpcMethod,

    /// File holding the raw response body ("-" for stdin).
    file: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum RpcMethod {
    EthBlockNumber,
    EthGetBalance,
    EthGetTransactionCount,
    EthGetTransactionReceipt,
    EthSendRawTransaction,
    EthCall,
    EthEstimateGas,
    EthGasPrice,
    EthBool,
    EthAddress,
    EnsContentHash,
    UdGetMany,
    UdGet,
    SolGetBalance,
    SolGetTokenAccountBalance,
    SolGetLatestBlockhash,
    SolGetBlockHeight,
    SolSendTransaction,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let env = Config::from_env()?;
    init_logging(
        cli.log_level.as_deref().unwrap_or(&env.log_level),
        cli.log_format.as_deref().unwrap_or(&env.log_format),
    );
    let network = cli.network.unwrap_or(env.network);

    match cli.command {
        Commands::Import(args) => cmd_import(args, network),
        Commands::Keygen => cmd_keygen(network),
        Commands::Derive(args) => cmd_derive(args, network),
        Commands::Abi { action } => cmd_abi(action),
        Commands::Rpc(args) => cmd_rpc(args),
    }
}

// ---------------------------------------------------------------------------
// Keyring commands
// ---------------------------------------------------------------------------

fn cmd_import(args: ImportArgs, network: Network) -> Result<()> {
    let payload = fs::read(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;
    let mut keyring = FilecoinKeyring::new(KeyringConfig {
        network,
        ..KeyringConfig::default()
    });
    let address = keyring
        .import_account(&payload)
        .context("Failed to import key")?;
    println!("{address}");
    Ok(())
}

fn cmd_keygen(network: Network) -> Result<()> {
    let key = HdKey::generate();
    let export = KeyExport::from_key(&key).to_json()?;
    println!("Address: {}", key.address(network));
    println!("Export:  {}", export.as_str());
    Ok(())
}

fn cmd_derive(args: DeriveArgs, network: Network) -> Result<()> {
    if args.count == 0 {
        bail!("--count must be at least 1");
    }
    let mut phrase = String::new();
    io::stdin()
        .read_to_string(&mut phrase)
        .context("Failed to read mnemonic from stdin")?;
    let config = KeyringConfig {
        network,
        account_path: args.path,
    };
    let mut keyring = FilecoinKeyring::from_mnemonic(&phrase, "", config)
        .context("Failed to open keyring")?;
    let addresses = keyring.add_accounts(args.count)?;
    debug!(count = addresses.len(), "derived accounts");
    for (index, address) in addresses.iter().enumerate() {
        println!("{index}: {address}");
        if args.export {
            println!("   {}", keyring.export_account(address)?.as_str());
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// ABI commands
// ---------------------------------------------------------------------------

fn cmd_abi(action: AbiAction) -> Result<()> {
    match action {
        AbiAction::Decode { types, data } => {
            let bytes = prefixed_hex_string_to_bytes(&data).context("Invalid payload hex")?;
            let decoded = abi_decode(&types[..], &bytes).context("Failed to decode payload")?;
            for (ty, value) in decoded.iter() {
                println!("{ty}: {value}");
            }
        }
        AbiAction::Path { path } => {
            let tokens = uniswap_encoded_path_decode(&path).context("Failed to decode path")?;
            for token in tokens {
                println!("{token}");
            }
        }
        AbiAction::Balances { data } => {
            let bytes = prefixed_hex_string_to_bytes(&data).context("Invalid payload hex")?;
            let results =
                abi_decode_balance_scanner_result(&bytes).context("Failed to decode balances")?;
            for (index, tuple) in results.iter().enumerate() {
                let values = tuple.values();
                println!("{index}: success={} data={}", values[0], values[1]);
            }
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// RPC command
// ---------------------------------------------------------------------------

fn cmd_rpc(args: RpcArgs) -> Result<()> {
    let body = if args.file.as_os_str() == "-" {
        let mut body = String::new();
        io::stdin().read_to_string(&mut body)?;
        body
    } else {
        fs::read_to_string(&args.file)
            .with_context(|| format!("Failed to read {}", args.file.display()))?
    };
    let value = parse_body(args.method, &body)?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

fn parse_body(method: RpcMethod, body: &str) -> Result<Value> {
    use RpcMethod::*;

    let value = match method {
        EthBlockNumber => json!(evm(body, eth::parse_eth_get_block_number)?.to_string()),
        EthGetBalance => json!(evm(body, eth::parse_eth_get_balance)?),
        EthGetTransactionCount => json!(evm(body, eth::parse_eth_get_transaction_count)?.to_string()),
        EthGetTransactionReceipt => {
            let r = evm(body, eth::parse_eth_get_transaction_receipt)?;
            json!({
                "transactionHash": r.transaction_hash,
                "transactionIndex": r.transaction_index.to_string(),
                "blockHash": r.block_hash,
                "blockNumber": r.block_number.to_string(),
                "cumulativeGasUsed": r.cumulative_gas_used.to_string(),
                "gasUsed": r.gas_used.to_string(),
                "contractAddress": r.contract_address,
                "logsBloom": r.logs_bloom,
                "status": r.status,
            })
        }
        EthSendRawTransaction => json!(evm(body, eth::parse_eth_send_raw_transaction)?),
        EthCall => json!(evm(body, eth::parse_eth_call)?),
        EthEstimateGas => json!(evm(body, eth::parse_eth_estimate_gas)?),
        EthGasPrice => json!(evm(body, eth::parse_eth_gas_price)?),
        EthBool => json!(evm(body, eth::parse_bool_result)?),
        EthAddress => json!(evm(body, eth::parse_address_result)?),
        EnsContentHash => {
            let hash = evm(body, eth::parse_ens_resolver_content_hash)?;
            json!(walletkit_core::hex_utils::to_hex(&hash))
        }
        UdGetMany => json!(evm(body, eth::parse_unstoppable_domains_proxy_reader_get_many)?),
        UdGet => json!(evm(body, eth::parse_unstoppable_domains_proxy_reader_get)?),
        SolGetBalance => json!(sol(body, solana::parse_get_balance)?),
        SolGetTokenAccountBalance => {
            let b = sol(body, solana::parse_get_token_account_balance)?;
            json!({
                "amount": b.amount,
                "decimals": b.decimals,
                "uiAmountString": b.ui_amount_string,
            })
        }
        SolGetLatestBlockhash => {
            let b = sol(body, solana::parse_get_latest_blockhash)?;
            json!({
                "blockhash": b.blockhash,
                "lastValidBlockHeight": b.last_valid_block_height,
            })
        }
        SolGetBlockHeight => json!(sol(body, solana::parse_get_block_height)?),
        SolSendTransaction => json!(sol(body, solana::parse_send_transaction)?),
    };
    Ok(value)
}

fn evm<T>(body: &str, parse: impl FnOnce(&str) -> Result<T, ParseError>) -> Result<T> {
    extract::<T, ProviderError>(body, parse)
}

fn sol<T>(body: &str, parse: impl FnOnce(&str) -> Result<T, ParseError>) -> Result<T> {
    extract::<T, SolanaProviderError>(body, parse)
}

fn extract<T, K>(body: &str, parse: impl FnOnce(&str) -> Result<T, ParseError>) -> Result<T>
where
    K: ErrorKind + Send + Sync + 'static,
{
    parse_or_error::<T, K>(body, parse).context("RPC response carried no usable result")
}

/// Initialize tracing subscriber with the given log level and output format.
///
/// Logs go to stderr so command output on stdout stays machine-readable.
fn init_logging(level_str: &str, format: &str) {
    use tracing_subscriber::filter::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_str));

    if format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_level(true).with_writer(io::stderr))
            .init();
    }
}
