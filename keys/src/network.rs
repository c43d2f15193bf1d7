//! # Network Table
//!
//! The single source of truth for everything that differs between mainnet
//! and testnet: the address prefix and the WIF version byte. Both codecs
//! are parameterized by [`Network`] so the two chains can never drift apart
//! behaviorally.

use crate::config::{MAINNET_PREFIX, TESTNET_PREFIX, WIF_VERSION_MAINNET, WIF_VERSION_TESTNET};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a string names no known network.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown network '{0}' (expected 'mainnet' or 'testnet')")]
pub struct UnknownNetworkError(pub String);

/// The Hoosat networks this crate knows how to address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// The real chain. Addresses start with `hoosat:`.
    Mainnet,
    /// The test chain. Addresses start with `hoosattest:`.
    Testnet,
}

impl Network {
    /// All known networks, in display order. Handy for prefix lookups and
    /// exhaustive tests.
    pub const ALL: [Network; 2] = [Network::Mainnet, Network::Testnet];

    /// The human-readable prefix that precedes the `:` separator in an
    /// address on this network.
    pub fn prefix(self) -> &'static str {
        match self {
            Network::Mainnet => MAINNET_PREFIX,
            Network::Testnet => TESTNET_PREFIX,
        }
    }

    /// The version byte prepended to a secret key in WIF exports.
    pub fn wif_version(self) -> u8 {
        match self {
            Network::Mainnet => WIF_VERSION_MAINNET,
            Network::Testnet => WIF_VERSION_TESTNET,
        }
    }

    /// Resolve an address prefix to its network.
    ///
    /// Returns `None` for anything not in the table. Callers decide whether
    /// that's an error; the codec itself never trusts a prefix silently.
    pub fn from_prefix(prefix: &str) -> Option<Network> {
        Network::ALL.into_iter().find(|n| n.prefix() == prefix)
    }

    /// Resolve a WIF version byte to its network.
    pub fn from_wif_version(version: u8) -> Option<Network> {
        Network::ALL.into_iter().find(|n| n.wif_version() == version)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Mainnet => write!(f, "mainnet"),
            Network::Testnet => write!(f, "testnet"),
        }
    }
}

impl FromStr for Network {
    type Err = UnknownNetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mainnet" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            other => Err(UnknownNetworkError(other.to_string())),
        }
    }
}
