// Copyright (c) 2026 Hoosat Oy. MIT License.
// See LICENSE for details.

//! # Hoosat Keygen
//!
//! Entry point for the `hoosat-keygen` binary. Parses CLI arguments,
//! initializes logging, and calls into `hoosat-keys` for the actual work.
//!
//! The binary supports three subcommands:
//!
//! - `generate` — create fresh keypairs with addresses and WIF exports
//! - `validate` — decode and check an existing address
//! - `import`   — decode a WIF string and re-derive its address
//!
//! Everything happens offline: the only I/O in this binary is reading
//! arguments and writing results.

mod cli;
mod logging;
mod output;

use anyhow::{Context, Result};
use clap::Parser;

use hoosat_keys::{wif, Address, SecretKey};

use cli::{Commands, GenerateArgs, HoosatKeygenCli, ImportArgs, OutputFormat, ValidateArgs};
use logging::LogFormat;
use output::{AddressReport, GeneratedKey, ImportReport};

fn main() -> Result<()> {
    let cli = HoosatKeygenCli::parse();
    logging::init_logging(
        "hoosat_keygen=info,hoosat_keys=info",
        LogFormat::from_str_lossy(&cli.log_format),
    );

    match cli.command {
        Commands::Generate(args) => generate(args),
        Commands::Validate(args) => validate(args),
        Commands::Import(args) => import(args),
    }
}

/// Generate `count` fresh keypairs and deliver them in the requested format.
fn generate(args: GenerateArgs) -> Result<()> {
    let compressed = !args.uncompressed;
    tracing::info!(
        network = %args.network,
        count = args.count,
        compressed,
        "generating keypairs"
    );

    let keys: Vec<GeneratedKey> = (1..=args.count)
        .map(|index| {
            let secret = SecretKey::generate();
            GeneratedKey {
                index,
                address: secret.derive_address(args.network, compressed),
                private_key_wif: wif::encode(&secret, args.network, compressed),
                private_key_hex: secret.to_hex(),
                network: args.network,
                compressed,
            }
        })
        .collect();

    let rendered = match args.format {
        OutputFormat::Text => output::render_keys_text(&keys),
        OutputFormat::Json => output::render_json(&keys)?,
    };
    output::deliver(&rendered, args.output.as_deref())
}

/// Decode an address, optionally pinning it to an expected network.
fn validate(args: ValidateArgs) -> Result<()> {
    let address = match args.network {
        Some(network) => Address::parse_expecting(&args.address, network),
        None => Address::parse(&args.address),
    }
    .with_context(|| format!("'{}' is not a valid address", args.address))?;

    let report = AddressReport::new(address);
    let rendered = match args.format {
        OutputFormat::Text => output::render_report_text(&report),
        OutputFormat::Json => output::render_json(&report)?,
    };
    output::deliver(&rendered, None)
}

/// Import a WIF string and re-derive the address it controls.
fn import(args: ImportArgs) -> Result<()> {
    let decoded = wif::decode(&args.wif).context("not a valid WIF string")?;

    let report = ImportReport {
        address: decoded.secret.derive_address(decoded.network, decoded.compressed),
        network: decoded.network,
        compressed: decoded.compressed,
    };
    let rendered = match args.format {
        OutputFormat::Text => output::render_import_text(&report),
        OutputFormat::Json => output::render_json(&report)?,
    };
    output::deliver(&rendered, None)
}
