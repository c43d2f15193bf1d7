//! # Protocol Constants
//!
//! Every magic number in this crate lives here. If you're hardcoding a
//! constant somewhere else, you're doing it wrong and you owe the team
//! coffee.
//!
//! Most of these values are wire-format facts. Changing any of them breaks
//! compatibility with every address and WIF string ever issued, so treat
//! this file as append-only.

// ---------------------------------------------------------------------------
// Network Identifiers
// ---------------------------------------------------------------------------

/// Human-readable prefix for mainnet addresses. Mistakes here cost real money.
pub const MAINNET_PREFIX: &str = "hoosat";

/// Human-readable prefix for testnet addresses, where we break things on
/// purpose and call it "testing."
pub const TESTNET_PREFIX: &str = "hoosattest";

// ---------------------------------------------------------------------------
// Address Format
// ---------------------------------------------------------------------------

/// The 32-character base32 alphabet shared with the wider cashaddr family.
/// Chosen (upstream, long ago) to avoid visually ambiguous characters:
/// no `1`, no `b`, no `i`, no `o`.
pub const ADDRESS_CHARSET: &[u8; 32] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// Number of trailing 5-bit checksum symbols in an address.
pub const CHECKSUM_LENGTH: usize = 8;

/// Address payload length in bytes: the truncated hash of a public key.
pub const PAYLOAD_LENGTH: usize = 20;

/// Version byte identifying the ECDSA signature scheme. Prepended to the
/// payload before bit regrouping. Not related to [`WIF_COMPRESSED_MARKER`],
/// which happens to share the value.
pub const ADDRESS_VERSION_ECDSA: u8 = 0x01;

/// The shortest string that could possibly be an address: something before
/// the separator plus the checksum symbols. Anything shorter is rejected
/// before we bother parsing.
pub const MIN_ADDRESS_LENGTH: usize = CHECKSUM_LENGTH + 2;

// ---------------------------------------------------------------------------
// Key Material
// ---------------------------------------------------------------------------

/// Secret key length in bytes. A secp256k1 scalar.
pub const SECRET_KEY_LENGTH: usize = 32;

/// Compressed SEC1 public key length: parity prefix (0x02/0x03) + x.
pub const PUBLIC_KEY_COMPRESSED_LENGTH: usize = 33;

/// Uncompressed SEC1 public key length: 0x04 sentinel + x + y.
pub const PUBLIC_KEY_UNCOMPRESSED_LENGTH: usize = 65;

// ---------------------------------------------------------------------------
// WIF (Wallet Import Format)
// ---------------------------------------------------------------------------

/// WIF version byte for mainnet secrets.
pub const WIF_VERSION_MAINNET: u8 = 0x80;

/// WIF version byte for testnet secrets.
pub const WIF_VERSION_TESTNET: u8 = 0xEF;

/// Trailing marker byte indicating the secret derives a compressed public
/// key. Coincidentally equal to [`ADDRESS_VERSION_ECDSA`]; nothing couples
/// the two and they evolve independently.
pub const WIF_COMPRESSED_MARKER: u8 = 0x01;

/// Number of double-SHA256 checksum bytes appended before base58 encoding.
pub const WIF_CHECKSUM_LENGTH: usize = 4;
