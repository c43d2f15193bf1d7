//! # Wallet Import Format
//!
//! The export/import codec for raw secret keys, entirely independent of
//! the address codec: different checksum (double SHA-256, 4 bytes),
//! different alphabet (base58), no separator, and it carries the secret
//! itself rather than a hash.
//!
//! Layout before base58:
//!
//! ```text
//! version (1) || secret (32) || marker (0 or 1) || checksum (4)
//! ```
//!
//! The version byte selects the network (0x80 mainnet, 0xEF testnet). The
//! optional trailing 0x01 marker records that the secret is meant to derive
//! a compressed public key; its presence is recovered from the decoded
//! length alone (33 bytes without, 34 with).

use crate::config::{SECRET_KEY_LENGTH, WIF_CHECKSUM_LENGTH, WIF_COMPRESSED_MARKER};
use crate::keys::SecretKey;
use crate::network::Network;
use sha2::{Digest, Sha256};
use thiserror::Error;
use zeroize::Zeroize;

/// Decoded payload length without the compression marker.
const PAYLOAD_LEN_UNCOMPRESSED: usize = 1 + SECRET_KEY_LENGTH;

/// Decoded payload length with the compression marker.
const PAYLOAD_LEN_COMPRESSED: usize = PAYLOAD_LEN_UNCOMPRESSED + 1;

/// Failures while decoding a WIF string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WifError {
    /// The text is not valid base58.
    #[error("not a valid base58 string")]
    Base58,

    /// The trailing 4 checksum bytes do not match the payload.
    #[error("checksum verification failed")]
    ChecksumMismatch,

    /// The decoded payload is neither 33 nor 34 bytes.
    #[error("decoded length {got} is not a valid WIF payload")]
    BadLength { got: usize },

    /// The version byte selects no known network.
    #[error("version byte {0:#04x} does not belong to a known network")]
    UnknownNetwork(u8),

    /// The carried secret is not a usable scalar.
    #[error("invalid secret key")]
    InvalidSecret,
}

/// Everything a WIF string carries.
#[derive(Debug, PartialEq, Eq)]
pub struct DecodedWif {
    /// The imported secret key.
    pub secret: SecretKey,
    /// Whether the secret is meant to derive a compressed public key.
    pub compressed: bool,
    /// The network named by the version byte.
    pub network: Network,
}

/// `SHA-256(SHA-256(data))`, the checksum construction WIF inherited from
/// the wider Bitcoin lineage.
fn double_sha256(data: &[u8]) -> [u8; 32] {
    let first = Sha256::digest(data);
    Sha256::digest(first).into()
}

/// Export a secret key as a WIF string.
pub fn encode(secret: &SecretKey, network: Network, compressed: bool) -> String {
    let mut extended = Vec::with_capacity(PAYLOAD_LEN_COMPRESSED + WIF_CHECKSUM_LENGTH);
    extended.push(network.wif_version());
    let mut secret_bytes = secret.to_bytes();
    extended.extend_from_slice(&secret_bytes);
    secret_bytes.zeroize();
    if compressed {
        extended.push(WIF_COMPRESSED_MARKER);
    }

    let checksum = double_sha256(&extended);
    extended.extend_from_slice(&checksum[..WIF_CHECKSUM_LENGTH]);

    let encoded = bs58::encode(&extended).into_string();
    extended.zeroize();
    encoded
}

/// Import a WIF string.
///
/// Checksum first, then length, then network, then scalar validity; the
/// first failure wins and nothing partial is ever returned.
pub fn decode(wif: &str) -> Result<DecodedWif, WifError> {
    let mut data = bs58::decode(wif).into_vec().map_err(|_| WifError::Base58)?;

    if data.len() < WIF_CHECKSUM_LENGTH + 1 {
        let got = data.len().saturating_sub(WIF_CHECKSUM_LENGTH);
        data.zeroize();
        return Err(WifError::BadLength { got });
    }

    let payload_len = data.len() - WIF_CHECKSUM_LENGTH;
    let (payload, claimed) = data.split_at(payload_len);
    if double_sha256(payload)[..WIF_CHECKSUM_LENGTH] != *claimed {
        data.zeroize();
        return Err(WifError::ChecksumMismatch);
    }

    let compressed = match payload_len {
        PAYLOAD_LEN_UNCOMPRESSED => false,
        PAYLOAD_LEN_COMPRESSED => true,
        got => {
            data.zeroize();
            return Err(WifError::BadLength { got });
        }
    };

    let version = payload[0];
    let Some(network) = Network::from_wif_version(version) else {
        data.zeroize();
        return Err(WifError::UnknownNetwork(version));
    };

    let mut secret_bytes = [0u8; SECRET_KEY_LENGTH];
    secret_bytes.copy_from_slice(&payload[1..1 + SECRET_KEY_LENGTH]);
    let secret = SecretKey::from_bytes(&secret_bytes).map_err(|_| WifError::InvalidSecret);
    secret_bytes.zeroize();
    data.zeroize();

    Ok(DecodedWif { secret: secret?, compressed, network })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_secret() -> SecretKey {
        SecretKey::from_bytes(&[1u8; SECRET_KEY_LENGTH]).unwrap()
    }

    // Vectors computed with the reference implementation.

    #[test]
    fn golden_vectors_fixed_secret() {
        let secret = fixed_secret();
        assert_eq!(
            encode(&secret, Network::Mainnet, true),
            "KwFfNUhSDaASSAwtG7ssQM1uVX8RgX5GHWnnLfhfiQDigjioWXHH"
        );
        assert_eq!(
            encode(&secret, Network::Mainnet, false),
            "5HpjE2Hs7vjU4SN3YyPQCdhzCu92WoEeuE6PWNuiPyTu3ESGnzn"
        );
        assert_eq!(
            encode(&secret, Network::Testnet, true),
            "cMceqPhHedrhbcR9eXgzmfWy7kRqLyAxMYwFT6ABDWsiwUp9Nsq9"
        );
        assert_eq!(
            encode(&secret, Network::Testnet, false),
            "91bMom7Qi9oc2VsLBKHK5EFwrZVjfxmrFAxLb1GDjiCwpGS6u85"
        );
    }

    #[test]
    fn golden_vector_textbook_secret() {
        let mut bytes = [0u8; SECRET_KEY_LENGTH];
        hex::decode_to_slice(
            "18e14a7b6a307f426a94f8114701e7c8e774e7f9a47e2c2035db29a206321725",
            &mut bytes,
        )
        .unwrap();
        let secret = SecretKey::from_bytes(&bytes).unwrap();
        assert_eq!(
            encode(&secret, Network::Mainnet, true),
            "Kx45GeUBSMPReYQwgXiKhG9FzNXrnCeutJp4yjTd5kKxCitadm3C"
        );
    }

    #[test]
    fn roundtrip_all_combinations() {
        let secret = fixed_secret();
        for network in Network::ALL {
            for compressed in [true, false] {
                let wif = encode(&secret, network, compressed);
                let decoded = decode(&wif).unwrap();
                assert_eq!(decoded.secret, secret);
                assert_eq!(decoded.compressed, compressed);
                assert_eq!(decoded.network, network);
            }
        }
    }

    #[test]
    fn mainnet_prefixes_match_convention() {
        // Base58 quirk inherited from Bitcoin: mainnet compressed WIFs
        // start with K or L, uncompressed with 5.
        let secret = fixed_secret();
        let compressed = encode(&secret, Network::Mainnet, true);
        let uncompressed = encode(&secret, Network::Mainnet, false);
        assert!(compressed.starts_with('K') || compressed.starts_with('L'));
        assert!(uncompressed.starts_with('5'));
    }

    #[test]
    fn corrupted_character_fails_checksum() {
        let wif = encode(&fixed_secret(), Network::Mainnet, true);
        let mut corrupted: Vec<u8> = wif.bytes().collect();
        let last = corrupted.len() - 1;
        corrupted[last] = if corrupted[last] == b'H' { b'J' } else { b'H' };
        let corrupted = String::from_utf8(corrupted).unwrap();
        assert_eq!(decode(&corrupted), Err(WifError::ChecksumMismatch));
    }

    #[test]
    fn non_base58_rejected() {
        // '0', 'O', 'I', 'l' are excluded from the base58 alphabet.
        assert_eq!(decode("0OIl"), Err(WifError::Base58));
    }

    #[test]
    fn bare_secret_without_version_rejected() {
        // A 32-byte payload with a valid checksum: correctly checksummed,
        // wrong shape.
        let mut buf = vec![2u8; 32];
        let checksum = double_sha256(&buf);
        buf.extend_from_slice(&checksum[..WIF_CHECKSUM_LENGTH]);
        let wif = bs58::encode(&buf).into_string();
        assert_eq!(decode(&wif), Err(WifError::BadLength { got: 32 }));
    }

    #[test]
    fn unknown_version_byte_rejected() {
        // Bitcoin's 0x90 never meant anything here.
        let mut buf = vec![0x90u8];
        buf.extend_from_slice(&[2u8; SECRET_KEY_LENGTH]);
        let checksum = double_sha256(&buf);
        buf.extend_from_slice(&checksum[..WIF_CHECKSUM_LENGTH]);
        let wif = bs58::encode(&buf).into_string();
        assert_eq!(decode(&wif), Err(WifError::UnknownNetwork(0x90)));
    }

    #[test]
    fn zero_secret_in_wif_rejected() {
        // Structurally perfect WIF carrying the zero scalar.
        let mut buf = vec![0x80u8];
        buf.extend_from_slice(&[0u8; SECRET_KEY_LENGTH]);
        let checksum = double_sha256(&buf);
        buf.extend_from_slice(&checksum[..WIF_CHECKSUM_LENGTH]);
        let wif = bs58::encode(&buf).into_string();
        assert_eq!(decode(&wif), Err(WifError::InvalidSecret));
    }

    #[test]
    fn test_empty_string_rejected() {
        assert_eq!(decode(""), Err(WifError::BadLength { got: 0 }));
    }
}
