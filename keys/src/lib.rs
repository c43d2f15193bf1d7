// Copyright (c) 2026 Hoosat Oy. MIT License.
// See LICENSE for details.

//! # Hoosat Keys — Address Codec & Key Pipeline
//!
//! Everything between a 32-byte secret and a typed `hoosat:...` address
//! string, and nothing else. This crate is deliberately small and
//! deliberately boring: pure synchronous functions over fixed-size
//! buffers, no I/O, no global state, no async. Call it from as many
//! threads as you like.
//!
//! ## Architecture
//!
//! The modules mirror the layers of the encoding, leaves first:
//!
//! - **config** — Wire-format constants. The append-only file.
//! - **network** — The mainnet/testnet parameter table.
//! - **bits** — 8↔5 bit regrouping under the base32 alphabet.
//! - **checksum** — The rolling polymod checksum. Do not touch.
//! - **address** — The codec proper, plus the typed [`Address`].
//! - **keys** — secp256k1 secrets, public keys, and address derivation.
//! - **wif** — The independent base58 export format for raw secrets.
//!
//! ## Design Philosophy
//!
//! 1. One codec, parameterized by [`Network`]. Mainnet and testnet cannot
//!    drift apart because there is only one implementation to drift.
//! 2. Decoders return typed errors, encoders don't fail. User input is
//!    hostile; our own fixed-length buffers are not.
//! 3. No partial results. A decode either proves the whole string or
//!    reports the first thing wrong with it.
//! 4. Curve math belongs to `k256`. We wrap, we never reimplement.
//!
//! ## Example
//!
//! ```
//! use hoosat_keys::{Address, Network, SecretKey};
//!
//! let secret = SecretKey::generate();
//! let address = secret.derive_address(Network::Mainnet, true);
//!
//! // The string form round-trips through the validating parser.
//! let parsed = Address::parse(&address.to_string()).unwrap();
//! assert_eq!(parsed, address);
//!
//! // The secret travels separately, as WIF.
//! let wif = hoosat_keys::wif::encode(&secret, Network::Mainnet, true);
//! let imported = hoosat_keys::wif::decode(&wif).unwrap();
//! assert_eq!(imported.secret, secret);
//! ```

pub mod address;
pub mod bits;
pub mod checksum;
pub mod config;
pub mod keys;
pub mod network;
pub mod wif;

// Re-export the things people actually need so they don't have to memorize
// the module hierarchy.
pub use address::{Address, AddressError};
pub use keys::{KeyError, PublicKey, SecretKey};
pub use network::Network;
pub use wif::{DecodedWif, WifError};
