//! # Address Codec
//!
//! Hoosat addresses are cashaddr-family strings: a human-readable network
//! prefix, a `:` separator, and a base32 data part carrying a version byte,
//! a 20-byte payload, and an 8-symbol checksum.
//!
//! ```text
//! secret key -> public key -> BLAKE3 -> first 20 bytes
//!     -> [version || payload] -> regroup 8->5 -> append checksum
//!     -> base32 -> "hoosat:qyq..."
//! ```
//!
//! Two layers live here. The free functions [`encode`] and [`decode`] are
//! the raw codec: they work on any prefix and any payload length, and
//! decoding hands back the prefix exactly as parsed, with no opinion about
//! whether it names a real network. The [`Address`] type on top is the
//! opinionated layer: it resolves the prefix against the [`Network`] table
//! and pins the payload to its canonical 20 bytes, which is what everything
//! outside this crate should use.
//!
//! Input is case-insensitive; output is always lowercase. Mixed-case input
//! is normalized before any other processing, so `HOOSAT:QYQ...` and
//! `hoosat:qyq...` decode identically.

use crate::bits::regroup;
use crate::checksum;
use crate::config::{ADDRESS_CHARSET, CHECKSUM_LENGTH, MIN_ADDRESS_LENGTH, PAYLOAD_LENGTH};
use crate::network::Network;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Failures while decoding an address string.
///
/// Every variant is a deterministic verdict about the input. Validators
/// call [`decode`] and [`Address::parse`] on untrusted user strings, so
/// these are returned, never panicked.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    /// The input's length cannot form a valid address.
    #[error("unexpected input length {got}")]
    InputLength { got: usize },

    /// No `:` separator, an empty prefix, or too few symbols after it.
    #[error("missing or misplaced ':' separator")]
    BadSeparator,

    /// A data-part character outside the base32 alphabet.
    #[error("character {0:?} is not in the address alphabet")]
    BadCharacter(char),

    /// The trailing checksum does not match the rest of the string.
    #[error("checksum verification failed")]
    ChecksumMismatch,

    /// The data part's padding bits were malformed.
    #[error("invalid padding in data part")]
    BadPadding,

    /// The prefix decoded fine but names no known network.
    #[error("prefix '{0}' does not belong to a known network")]
    UnknownNetwork(String),
}

/// Encode a payload into an address string.
///
/// The version byte is prepended to the payload before regrouping; the
/// checksum covers the prefix, the separator position, and every data
/// symbol. Infallible for well-formed fixed-length inputs, which is the
/// only kind the key pipeline produces.
pub fn encode(prefix: &str, payload: &[u8], version: u8) -> String {
    let mut data = Vec::with_capacity(payload.len() + 1);
    data.push(version);
    data.extend_from_slice(payload);

    let mut symbols =
        regroup(&data, 8, 5, true).expect("8-bit input symbols always fit in 8 bits");
    symbols.extend_from_slice(&checksum::checksum(prefix, &symbols));

    let mut out = String::with_capacity(prefix.len() + 1 + symbols.len());
    out.push_str(prefix);
    out.push(':');
    for symbol in symbols {
        out.push(ADDRESS_CHARSET[symbol as usize] as char);
    }
    out
}

/// Decode an address string into its raw parts: `(prefix, version, payload)`.
///
/// The prefix is returned exactly as parsed (lowercased) and is *not*
/// checked against the network table; that separate membership decision
/// belongs to the caller, via [`Network::from_prefix`] or [`Address::parse`].
pub fn decode(address: &str) -> Result<(String, u8, Vec<u8>), AddressError> {
    if address.len() < MIN_ADDRESS_LENGTH {
        return Err(AddressError::InputLength { got: address.len() });
    }

    let normalized = address.to_lowercase();

    let colon = normalized.rfind(':').ok_or(AddressError::BadSeparator)?;
    if colon < 1 || colon + CHECKSUM_LENGTH + 1 > normalized.len() {
        return Err(AddressError::BadSeparator);
    }
    let (prefix, data) = normalized.split_at(colon);
    let data = &data[1..];

    let mut symbols = Vec::with_capacity(data.len());
    for ch in data.chars() {
        if !ch.is_ascii() {
            return Err(AddressError::BadCharacter(ch));
        }
        match ADDRESS_CHARSET.iter().position(|&c| c == ch as u8) {
            Some(index) => symbols.push(index as u8),
            None => return Err(AddressError::BadCharacter(ch)),
        }
    }

    if !checksum::verify(prefix, &symbols) {
        return Err(AddressError::ChecksumMismatch);
    }

    let bytes = regroup(&symbols[..symbols.len() - CHECKSUM_LENGTH], 5, 8, false)
        .map_err(|_| AddressError::BadPadding)?;
    let (&version, payload) = bytes
        .split_first()
        .ok_or(AddressError::InputLength { got: 0 })?;

    Ok((prefix.to_string(), version, payload.to_vec()))
}

/// A fully validated Hoosat address: network, version, and 20-byte payload.
///
/// This is the type the rest of the system passes around. Constructing one
/// from a string runs the whole gauntlet (separator, alphabet, checksum,
/// padding, network membership, payload length), so holding an `Address`
/// means holding something provably well-formed. The string form is
/// recomputed on demand; the canonical representation is the parts.
///
/// # Examples
///
/// ```
/// use hoosat_keys::{Address, Network};
///
/// let addr = Address::new(Network::Mainnet, 1, [0u8; 20]);
/// let text = addr.to_string();
/// assert!(text.starts_with("hoosat:"));
/// assert_eq!(text.parse::<Address>().unwrap(), addr);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address {
    network: Network,
    version: u8,
    payload: [u8; PAYLOAD_LENGTH],
}

impl Address {
    /// Assemble an address from already-validated parts.
    pub fn new(network: Network, version: u8, payload: [u8; PAYLOAD_LENGTH]) -> Self {
        Self { network, version, payload }
    }

    /// Parse and validate an address string.
    ///
    /// On top of the raw codec checks, the prefix must resolve to a known
    /// network and the payload must be exactly the canonical 20 bytes.
    pub fn parse(address: &str) -> Result<Self, AddressError> {
        let (prefix, version, payload) = decode(address)?;
        let network =
            Network::from_prefix(&prefix).ok_or(AddressError::UnknownNetwork(prefix))?;
        let payload: [u8; PAYLOAD_LENGTH] = payload
            .as_slice()
            .try_into()
            .map_err(|_| AddressError::InputLength { got: payload.len() })?;
        Ok(Self { network, version, payload })
    }

    /// Parse an address and require it to belong to `expected`.
    ///
    /// A well-formed address on the wrong network is reported as
    /// [`AddressError::UnknownNetwork`]: from the caller's point of view
    /// the prefix is not in the set of acceptable ones.
    pub fn parse_expecting(address: &str, expected: Network) -> Result<Self, AddressError> {
        let parsed = Self::parse(address)?;
        if parsed.network != expected {
            return Err(AddressError::UnknownNetwork(parsed.network.prefix().to_string()));
        }
        Ok(parsed)
    }

    /// The network this address belongs to.
    pub fn network(&self) -> Network {
        self.network
    }

    /// The version byte carried ahead of the payload.
    pub fn version(&self) -> u8 {
        self.version
    }

    /// The raw 20-byte payload.
    pub fn payload(&self) -> &[u8; PAYLOAD_LENGTH] {
        &self.payload
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode(self.network.prefix(), &self.payload, self.version))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self)
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Address::parse(s)
    }
}

impl Serialize for Address {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Address::parse(&s).map_err(serde::de::Error::custom)
    }
}
