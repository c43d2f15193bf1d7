//! # CLI Interface
//!
//! Defines the command-line argument structure for `hoosat-keygen` using
//! `clap` derive. Supports three subcommands: `generate`, `validate`, and
//! `import`.

use clap::{Parser, Subcommand, ValueEnum};
use hoosat_keys::Network;
use std::path::PathBuf;

/// Offline Hoosat address and key generator.
///
/// Generates secp256k1 keypairs with their Hoosat addresses and WIF
/// exports, validates existing addresses, and imports WIF strings.
/// Everything runs locally; no network access, no files touched unless
/// you ask for an output file.
#[derive(Parser, Debug)]
#[command(
    name = "hoosat-keygen",
    about = "Offline Hoosat address and key generator",
    version,
    propagate_version = true
)]
pub struct HoosatKeygenCli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Log output format: "pretty" or "json".
    #[arg(long, global = true, env = "HOOSAT_LOG_FORMAT", default_value = "pretty")]
    pub log_format: String,
}

/// Top-level subcommands for the `hoosat-keygen` binary.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate fresh keypairs and print their addresses and WIF exports.
    Generate(GenerateArgs),
    /// Decode and validate an existing address.
    Validate(ValidateArgs),
    /// Import a WIF string and re-derive its address.
    Import(ImportArgs),
}

/// Output rendering for generated keys and reports.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text.
    Text,
    /// One JSON document on stdout.
    Json,
}

/// Arguments for the `generate` subcommand.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Network to generate for: mainnet or testnet.
    #[arg(long, short = 'n', env = "HOOSAT_NETWORK", default_value = "mainnet")]
    pub network: Network,

    /// Number of keypairs to generate.
    #[arg(long, short = 'c', default_value_t = 1)]
    pub count: u32,

    /// Derive addresses from uncompressed public keys.
    ///
    /// Compressed is the default and what every modern wallet expects;
    /// the same secret produces a different address and WIF either way.
    #[arg(long, short = 'u')]
    pub uncompressed: bool,

    /// Output format.
    #[arg(long, short = 'f', value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Write the results to this file instead of stdout.
    ///
    /// Parent directories are created as needed. The file will contain
    /// secret key material; mind the permissions on wherever it lands.
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

/// Arguments for the `validate` subcommand.
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// The address string to validate.
    pub address: String,

    /// Require the address to belong to this network.
    ///
    /// Without this flag, any known network is accepted and reported.
    #[arg(long, short = 'n')]
    pub network: Option<Network>,

    /// Output format.
    #[arg(long, short = 'f', value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the `import` subcommand.
#[derive(Parser, Debug)]
pub struct ImportArgs {
    /// The WIF string to import. Network and compression are read from
    /// the WIF itself.
    pub wif: String,

    /// Output format.
    #[arg(long, short = 'f', value_enum, default_value = "text")]
    pub format: OutputFormat,
}
