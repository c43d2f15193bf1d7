//! # Address Checksum
//!
//! The rolling polynomial checksum ("polymod") that guards every address.
//! Structurally this is the cashaddr construction: a 40-bit accumulator
//! stepped once per 5-bit symbol, with five fixed generator constants
//! folded in according to the bits shifted off the top.
//!
//! The generator set, the step order (prefix characters, one zero
//! separator, payload symbols, eight zero placeholders), and the MSB-first
//! split of the final accumulator are all wire-format facts. Every existing
//! address was issued under exactly this arithmetic; a deviation of a
//! single XOR produces a codec that confidently rejects the entire
//! installed base, or worse, accepts corrupted strings. If you're tempted
//! to optimize these loops, please reconsider. Then reconsider again.

use crate::config::CHECKSUM_LENGTH;

/// The five 40-bit generator constants, indexed by the bit of the
/// accumulator's top five bits that selects them.
const GENERATOR: [u64; 5] = [
    0x98_f2bc_8e61,
    0x79_b76d_99e2,
    0xf3_3e5f_b3c4,
    0xae_2eab_e2a8,
    0x1e_4f43_e470,
];

/// One step of the rolling checksum: shift a 5-bit value into the
/// accumulator and fold in the generators selected by the bits that
/// fell off the top.
fn polymod_step(polymod: u64, value: u8) -> u64 {
    let top = polymod >> 35;
    let mut next = ((polymod & 0x07_ffff_ffff) << 5) ^ u64::from(value);
    for (i, generator) in GENERATOR.iter().enumerate() {
        if (top >> i) & 1 == 1 {
            next ^= generator;
        }
    }
    next
}

/// Compute the 8-symbol checksum for a prefix and a 5-bit payload.
///
/// The prefix participates as the low five bits of each character, followed
/// by a zero separator symbol, the payload, and eight zero placeholders
/// standing in for the checksum itself. The final accumulator's low 40 bits
/// become the checksum, most significant symbol first.
pub fn checksum(prefix: &str, payload: &[u8]) -> [u8; CHECKSUM_LENGTH] {
    debug_assert!(payload.iter().all(|&v| v < 32));

    let mut polymod: u64 = 1;
    for ch in prefix.bytes() {
        polymod = polymod_step(polymod, ch & 0x1f);
    }
    polymod = polymod_step(polymod, 0);
    for &value in payload {
        polymod = polymod_step(polymod, value);
    }
    for _ in 0..CHECKSUM_LENGTH {
        polymod = polymod_step(polymod, 0);
    }

    let mut out = [0u8; CHECKSUM_LENGTH];
    for (i, symbol) in out.iter_mut().enumerate() {
        *symbol = ((polymod >> (5 * (CHECKSUM_LENGTH - 1 - i))) & 0x1f) as u8;
    }
    out
}

/// Verify that a symbol sequence ends in a checksum matching everything
/// before it.
///
/// Returns `false` for any mismatch, including input too short to contain
/// a checksum at all. Validators feed untrusted strings through here, so
/// nothing in this path panics.
pub fn verify(prefix: &str, data: &[u8]) -> bool {
    if data.len() < CHECKSUM_LENGTH {
        return false;
    }
    let (payload, claimed) = data.split_at(data.len() - CHECKSUM_LENGTH);
    checksum(prefix, payload).as_slice() == claimed
}
