//! CashAddr round-trip harness
//!
//! Decodes one address, prints its fields, re-encodes them and prints the
//! result. Exits 0 on success and 1 on any failure.

use anyhow::{Context, Result};
use cashaddr_core::config::HarnessConfig;
use cashaddr_core::constants::SEPARATOR;
use cashaddr_core::{decode_with, encode, DecodedAddress, Network};
use clap::Parser;
use serde::Serialize;
use std::process::ExitCode;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "cashaddr", version, about = "Decode a CashAddr address and re-encode it")]
struct Cli {
    /// Address to decode, e.g. bitcoincash:qr6m7j9njldwwzlg9v7v53unlr4jkmx6eylep8ekg2
    address: String,

    /// Prefix to assume when the address has no `prefix:` part
    #[arg(long, conflicts_with = "network")]
    default_prefix: Option<String>,

    /// Assume the prefix of a known network (mainnet, testnet, regtest)
    #[arg(long)]
    network: Option<Network>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

/// JSON report printed with `--json`
#[derive(Debug, Serialize)]
struct Report<'a> {
    decoded: &'a DecodedAddress,
    reencoded: &'a str,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            if let Err(io_err) = e.print() {
                eprintln!("Failed to print usage: {}", io_err);
            }
            return if is_usage_failure(&e) {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let mut config = HarnessConfig::from_env();
    if let Some(prefix) = cli.default_prefix {
        config.default_prefix = Some(prefix);
    }
    if let Some(network) = cli.network {
        config.default_prefix = Some(network.prefix().to_string());
    }
    config.json_output |= cli.json;

    // init tracing from CASHADDR_LOG or RUST_LOG; stdout is reserved for the report
    let env_filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli.address, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(address = %cli.address, "{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(address: &str, config: &HarnessConfig) -> Result<()> {
    debug!(address, default_prefix = ?config.default_prefix, "Decoding");
    let decoded = decode_with(address, &config.decode_options())
        .with_context(|| format!("Failed to decode address {}", address))?;

    let reencoded = encode(&decoded.prefix, decoded.version_type(), &decoded.hash)
        .context("Failed to encode address")?;
    info!(prefix = %decoded.prefix, kind = %decoded.kind, "Round trip complete");

    if !same_payload(address, &reencoded) {
        warn!(input = address, reencoded = %reencoded, "Re-encoded address differs from input");
    }

    if config.json_output {
        let report = Report {
            decoded: &decoded,
            reencoded: &reencoded,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("====================================");
    println!("Decoded:");
    println!("  Prefix:  {}", decoded.prefix);
    println!("  Version: {}", decoded.version);
    println!("  Type:    {}", decoded.kind);
    println!("  Hash:    {}", decoded.hash_hex());
    if let Some(network) = decoded.network() {
        println!("  Network: {}", network);
    }
    println!();
    println!("Re-encoded:");
    println!("  {}", reencoded);
    println!("====================================");

    Ok(())
}

/// --help and --version end parsing too, but are not failures
fn is_usage_failure(err: &clap::Error) -> bool {
    err.use_stderr()
}

/// Whether two addresses carry the same payload, ignoring its case.
///
/// The prefix is left out so an assumed default prefix does not count as a
/// difference.
fn same_payload(input: &str, reencoded: &str) -> bool {
    let payload = |address: &str| -> String {
        let tail = address
            .split_once(SEPARATOR)
            .map_or(address, |(_, payload)| payload);
        tail.to_ascii_lowercase()
    };
    payload(input) == payload(reencoded)
}
