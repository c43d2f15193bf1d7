//! # Key Management
//!
//! secp256k1 secret and public keys, and the pipeline that turns them into
//! addresses.
//!
//! The derivation is a straight line with no branching:
//!
//! ```text
//! SecretKey (32 bytes, OsRng or imported)
//!     -> scalar multiplication on secp256k1 (k256)
//!     -> SEC1 serialization (33 bytes compressed / 65 uncompressed)
//!     -> BLAKE3, truncated to 20 bytes
//!     -> Address
//! ```
//!
//! ## Security considerations
//!
//! - Scalar validation (nonzero, below the curve order) is delegated to
//!   `k256`; we never hand-check curve math.
//! - Secret key bytes are zeroized on drop inside `k256`, and every
//!   intermediate buffer this module creates is zeroized before release.
//! - Key bytes are never logged. If you add logging to this module, you
//!   will be asked to leave.

use crate::address::Address;
use crate::config::{ADDRESS_VERSION_ECDSA, PAYLOAD_LENGTH, SECRET_KEY_LENGTH};
use crate::network::Network;
use k256::elliptic_curve::sec1::ToEncodedPoint;
use rand::rngs::OsRng;
use std::fmt;
use thiserror::Error;
use zeroize::Zeroize;

/// Errors that can occur during key operations.
///
/// Intentionally vague about *why* material was rejected; leaking details
/// about key bytes through error messages is a classic footgun.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyError {
    /// The secret is not a usable scalar: zero, not below the curve order,
    /// or simply not 32 bytes of hex when parsed from text.
    #[error("invalid secret key")]
    InvalidSecret,

    /// The bytes do not encode a point on the curve.
    #[error("invalid public key")]
    InvalidPublicKey,
}

/// A secp256k1 secret key, the sole root of everything derivable.
///
/// The wrapped `k256::SecretKey` zeroizes itself on drop. Cloning is
/// allowed but should make you uncomfortable; every copy of a secret is
/// another thing to protect.
#[derive(Clone)]
pub struct SecretKey {
    inner: k256::SecretKey,
}

/// A secp256k1 public key. Safe to share, log, print on a T-shirt.
///
/// Serialization is SEC1: callers pick compressed (parity prefix + x) or
/// uncompressed (0x04 sentinel + x + y) per call, because the choice
/// changes the derived address and the original key material doesn't
/// remember it.
#[derive(Clone, PartialEq, Eq)]
pub struct PublicKey {
    inner: k256::PublicKey,
}

impl SecretKey {
    /// Generate a fresh secret key from the OS cryptographic RNG.
    ///
    /// `OsRng` pulls from `/dev/urandom` on Unix and `BCryptGenRandom` on
    /// Windows. If either of those is compromised, Hoosat keys are the
    /// least of your worries.
    pub fn generate() -> Self {
        Self { inner: k256::SecretKey::random(&mut OsRng) }
    }

    /// Construct a secret key from raw bytes.
    ///
    /// Rejects zero and anything at or above the curve order; that
    /// validation lives in `k256`, not here.
    pub fn from_bytes(bytes: &[u8; SECRET_KEY_LENGTH]) -> Result<Self, KeyError> {
        let inner =
            k256::SecretKey::from_bytes(bytes.into()).map_err(|_| KeyError::InvalidSecret)?;
        Ok(Self { inner })
    }

    /// Construct a secret key from a hex string.
    ///
    /// Convenience for importing keys typed or pasted by a user. The
    /// intermediate buffers are zeroized before this returns.
    pub fn from_hex(hex_str: &str) -> Result<Self, KeyError> {
        let mut bytes = hex::decode(hex_str).map_err(|_| KeyError::InvalidSecret)?;
        if bytes.len() != SECRET_KEY_LENGTH {
            bytes.zeroize();
            return Err(KeyError::InvalidSecret);
        }
        let mut arr = [0u8; SECRET_KEY_LENGTH];
        arr.copy_from_slice(&bytes);
        let result = Self::from_bytes(&arr);
        bytes.zeroize();
        arr.zeroize();
        result
    }

    /// Export the raw 32-byte secret.
    ///
    /// **Handle with extreme care.** This is the only secret standing
    /// between an attacker and the funds on every derived address. The
    /// caller owns the returned buffer and its zeroization.
    pub fn to_bytes(&self) -> [u8; SECRET_KEY_LENGTH] {
        self.inner.to_bytes().into()
    }

    /// Export the secret as lowercase hex. Same warning as
    /// [`to_bytes`](Self::to_bytes), amplified by being a `String`.
    pub fn to_hex(&self) -> String {
        let mut bytes = self.to_bytes();
        let encoded = hex::encode(&bytes);
        bytes.zeroize();
        encoded
    }

    /// The public key for this secret.
    pub fn public_key(&self) -> PublicKey {
        PublicKey { inner: self.inner.public_key() }
    }

    /// Derive the address for this secret on the given network.
    ///
    /// `compressed` selects the public key serialization that gets hashed;
    /// the two settings produce unrelated addresses from the same secret.
    pub fn derive_address(&self, network: Network, compressed: bool) -> Address {
        self.public_key().address(network, compressed)
    }
}

impl PartialEq for SecretKey {
    /// Compares public keys, not secret bytes. Comparing secret material
    /// non-constant-time is a bad habit, and for identity purposes the
    /// public key is what matters.
    fn eq(&self, other: &Self) -> bool {
        self.public_key() == other.public_key()
    }
}

impl Eq for SecretKey {}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never print secret material in debug output. Not even "partially."
        write!(f, "SecretKey(pub={})", self.public_key().to_hex(true))
    }
}

impl PublicKey {
    /// Parse a SEC1-encoded public key (33-byte compressed or 65-byte
    /// uncompressed).
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self, KeyError> {
        let inner =
            k256::PublicKey::from_sec1_bytes(bytes).map_err(|_| KeyError::InvalidPublicKey)?;
        Ok(Self { inner })
    }

    /// SEC1 serialization: 33 bytes (0x02/0x03 parity prefix + x) when
    /// compressed, 65 bytes (0x04 + x + y) otherwise.
    pub fn to_bytes(&self, compressed: bool) -> Vec<u8> {
        self.inner.to_encoded_point(compressed).as_bytes().to_vec()
    }

    /// Hex form of the SEC1 serialization.
    pub fn to_hex(&self, compressed: bool) -> String {
        hex::encode(self.to_bytes(compressed))
    }

    /// The 20-byte address payload: BLAKE3 of the serialized key,
    /// truncated.
    pub fn payload(&self, compressed: bool) -> [u8; PAYLOAD_LENGTH] {
        payload_from_public_key(&self.to_bytes(compressed))
    }

    /// The address for this key on the given network, with the fixed ECDSA
    /// version byte.
    pub fn address(&self, network: Network, compressed: bool) -> Address {
        Address::new(network, ADDRESS_VERSION_ECDSA, self.payload(compressed))
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", self.to_hex(true))
    }
}

/// Truncate the BLAKE3 digest of serialized public key bytes to the
/// address payload width.
pub fn payload_from_public_key(public_key_bytes: &[u8]) -> [u8; PAYLOAD_LENGTH] {
    let digest = blake3::hash(public_key_bytes);
    let mut payload = [0u8; PAYLOAD_LENGTH];
    payload.copy_from_slice(&digest.as_bytes()[..PAYLOAD_LENGTH]);
    payload
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The fixed test secret: 0x01 repeated. Valid (nonzero, far below the
    /// curve order) and deterministic.
    fn fixed_secret() -> SecretKey {
        SecretKey::from_bytes(&[1u8; SECRET_KEY_LENGTH]).unwrap()
    }

    #[test]
    fn generate_produces_distinct_keys() {
        // If this fails, your RNG is broken and you should panic (the
        // emotion, not the macro).
        let a = SecretKey::generate();
        let b = SecretKey::generate();
        assert_ne!(a.to_bytes(), b.to_bytes());
    }

    #[test]
    fn zero_secret_rejected() {
        assert_eq!(
            SecretKey::from_bytes(&[0u8; SECRET_KEY_LENGTH]),
            Err(KeyError::InvalidSecret)
        );
    }

    #[test]
    fn secret_at_curve_order_rejected() {
        // The secp256k1 group order, big-endian. Scalars must be below it.
        let order: [u8; 32] = [
            0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
            0xFF, 0xFE, 0xBA, 0xAE, 0xDC, 0xE6, 0xAF, 0x48, 0xA0, 0x3B, 0xBF, 0xD2, 0x5E, 0x8C,
            0xD0, 0x36, 0x41, 0x41,
        ];
        assert_eq!(SecretKey::from_bytes(&order), Err(KeyError::InvalidSecret));
        // All-ones is above the order too.
        assert_eq!(
            SecretKey::from_bytes(&[0xFF; SECRET_KEY_LENGTH]),
            Err(KeyError::InvalidSecret)
        );
    }

    #[test]
    fn bytes_roundtrip() {
        let secret = fixed_secret();
        let restored = SecretKey::from_bytes(&secret.to_bytes()).unwrap();
        assert_eq!(secret, restored);
    }

    #[test]
    fn hex_roundtrip() {
        let secret = fixed_secret();
        let restored = SecretKey::from_hex(&secret.to_hex()).unwrap();
        assert_eq!(secret, restored);
    }

    #[test]
    fn test_invalid_hex_rejected() {
        assert_eq!(SecretKey::from_hex("deadbeef"), Err(KeyError::InvalidSecret));
        assert_eq!(SecretKey::from_hex("not-hex-at-all"), Err(KeyError::InvalidSecret));
    }

    #[test]
    fn known_compressed_public_key() {
        // Computed with an independent secp256k1 implementation.
        let secret = fixed_secret();
        assert_eq!(
            secret.public_key().to_hex(true),
            "031b84c5567b126440995d3ed5aaba0565d71e1834604819ff9c17f5e9d5dd078f"
        );
    }

    #[test]
    fn known_public_key_textbook_secret() {
        // The worked example from Mastering Bitcoin; its public key is
        // printed in the book, which makes it a free cross-check against
        // an entirely independent implementation.
        let mut bytes = [0u8; SECRET_KEY_LENGTH];
        hex::decode_to_slice(
            "18e14a7b6a307f426a94f8114701e7c8e774e7f9a47e2c2035db29a206321725",
            &mut bytes,
        )
        .unwrap();
        let secret = SecretKey::from_bytes(&bytes).unwrap();
        assert_eq!(
            secret.public_key().to_hex(true),
            "0250863ad64a87ae8a2fe83c1af1a8403cb53f53e486d8511dad8a04887e5b2352"
        );
    }

    #[test]
    fn uncompressed_form_has_sentinel_and_matching_x() {
        let public = fixed_secret().public_key();
        let compressed = public.to_bytes(true);
        let uncompressed = public.to_bytes(false);
        assert_eq!(compressed.len(), 33);
        assert_eq!(uncompressed.len(), 65);
        assert_eq!(uncompressed[0], 0x04);
        assert!(compressed[0] == 0x02 || compressed[0] == 0x03);
        // Same x-coordinate either way.
        assert_eq!(compressed[1..33], uncompressed[1..33]);
    }

    #[test]
    fn sec1_roundtrip() {
        let public = fixed_secret().public_key();
        for compressed in [true, false] {
            let bytes = public.to_bytes(compressed);
            let restored = PublicKey::from_sec1_bytes(&bytes).unwrap();
            assert_eq!(restored, public);
        }
    }

    #[test]
    fn invalid_sec1_rejected() {
        assert_eq!(PublicKey::from_sec1_bytes(&[0u8; 33]), Err(KeyError::InvalidPublicKey));
        assert_eq!(PublicKey::from_sec1_bytes(&[]), Err(KeyError::InvalidPublicKey));
    }

    #[test]
    fn compression_changes_payload() {
        // Different serializations hash to unrelated payloads; compression
        // is part of a key's address identity.
        let public = fixed_secret().public_key();
        assert_ne!(public.payload(true), public.payload(false));
    }

    #[test]
    fn known_address_payload() {
        let public = fixed_secret().public_key();
        assert_eq!(
            hex::encode(public.payload(true)),
            "d061d916c314badce7f47264f792500a255c0e0c"
        );
    }

    #[test]
    fn derive_address_golden_vectors() {
        let secret = fixed_secret();
        assert_eq!(
            secret.derive_address(Network::Mainnet, true).to_string(),
            "hoosat:q8gxrkgkcv2t4h8873exfauj2q9z2hqwps9asp55hd"
        );
        assert_eq!(
            secret.derive_address(Network::Testnet, true).to_string(),
            "hoosattest:q8gxrkgkcv2t4h8873exfauj2q9z2hqwpsas36a56q"
        );
    }

    #[test]
    fn derived_address_carries_ecdsa_version() {
        let addr = fixed_secret().derive_address(Network::Mainnet, false);
        assert_eq!(addr.version(), ADDRESS_VERSION_ECDSA);
    }

    #[test]
    fn derivation_is_deterministic() {
        let a = fixed_secret().derive_address(Network::Mainnet, false);
        let b = fixed_secret().derive_address(Network::Mainnet, false);
        assert_eq!(a, b);
    }

    #[test]
    fn debug_does_not_leak_secret() {
        let secret = fixed_secret();
        let debug = format!("{:?}", secret);
        assert!(debug.starts_with("SecretKey(pub="));
        assert!(!debug.contains(&secret.to_hex()));
    }
}
