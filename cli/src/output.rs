//! # Output Rendering
//!
//! Turns library results into the text and JSON the user asked for, and
//! routes them to stdout or a file. The structs here are the stable shape
//! of the JSON output; renaming a field is a breaking change for anyone
//! scripting against this binary.

use anyhow::{Context, Result};
use hoosat_keys::{Address, Network};
use serde::Serialize;
use std::path::Path;

/// One generated keypair, as reported to the user.
///
/// Carries the secret in both WIF and hex because the user explicitly
/// asked for a key to be generated; this is the one place secrets are
/// allowed to surface.
#[derive(Debug, Serialize)]
pub struct GeneratedKey {
    /// 1-based position in the generated batch.
    pub index: u32,
    /// The derived address.
    pub address: Address,
    /// The secret in Wallet Import Format.
    pub private_key_wif: String,
    /// The secret as raw hex.
    pub private_key_hex: String,
    /// Network the address and WIF were issued for.
    pub network: Network,
    /// Whether the address derives from the compressed public key.
    pub compressed: bool,
}

/// The verdict on a validated address.
#[derive(Debug, Serialize)]
pub struct AddressReport {
    /// The canonical (lowercase) form of the address.
    pub address: Address,
    /// Network resolved from the prefix.
    pub network: Network,
    /// The prefix as decoded.
    pub prefix: String,
    /// Hex of the 20-byte payload.
    pub payload: String,
    /// The version byte.
    pub version: u8,
}

/// The result of importing a WIF string.
#[derive(Debug, Serialize)]
pub struct ImportReport {
    /// Address re-derived from the imported secret, using the compression
    /// and network recorded in the WIF itself.
    pub address: Address,
    /// Network named by the WIF version byte.
    pub network: Network,
    /// Whether the WIF carried the compression marker.
    pub compressed: bool,
}

impl AddressReport {
    /// Build a report from a validated address.
    pub fn new(address: Address) -> Self {
        Self {
            network: address.network(),
            prefix: address.network().prefix().to_string(),
            payload: hex::encode(address.payload()),
            version: address.version(),
            address,
        }
    }
}

/// Render a batch of generated keys as human-readable text.
pub fn render_keys_text(keys: &[GeneratedKey]) -> String {
    let mut out = String::new();
    for key in keys {
        out.push_str(&format!("Address {}:\n", key.index));
        out.push_str(&format!("  Address:     {}\n", key.address));
        out.push_str(&format!("  Private Key: {}\n", key.private_key_wif));
        out.push_str(&format!("  Hex:         {}\n", key.private_key_hex));
        out.push('\n');
    }
    out.push_str("WARNING: keep these private keys secure and never share them.\n");
    out.push_str("They were generated locally and are not stored anywhere.\n");
    out
}

/// Render an address report as human-readable text.
pub fn render_report_text(report: &AddressReport) -> String {
    format!(
        "Valid {} address\n  Address: {}\n  Prefix:  {}\n  Payload: {}\n  Version: {}\n",
        report.network, report.address, report.prefix, report.payload, report.version
    )
}

/// Render an import report as human-readable text.
pub fn render_import_text(report: &ImportReport) -> String {
    format!(
        "Imported {} secret ({})\n  Address: {}\n",
        report.network,
        if report.compressed { "compressed" } else { "uncompressed" },
        report.address
    )
}

/// Serialize anything reportable as pretty JSON.
pub fn render_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("failed to serialize report to JSON")
}

/// Deliver rendered output to stdout or, if a path was given, to a file.
///
/// Parent directories are created as needed, matching what users expect
/// from `--output results/keys.json`.
pub fn deliver(rendered: &str, output: Option<&Path>) -> Result<()> {
    match output {
        None => {
            print!("{}", rendered);
            Ok(())
        }
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).with_context(|| {
                        format!("failed to create output directory {}", parent.display())
                    })?;
                }
            }
            std::fs::write(path, rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "results written");
            Ok(())
        }
    }
}
