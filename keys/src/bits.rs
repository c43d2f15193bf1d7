//! # Bit Regrouping
//!
//! Lossless conversion between symbol widths, used to repack 8-bit bytes
//! into the 5-bit symbols the address alphabet can represent and back.
//!
//! Encoding goes 8→5 with padding (the leftover bits of the final byte are
//! left-shifted into one last symbol). Decoding goes 5→8 without padding,
//! which is where the strictness lives: the padding bits reconstructed on
//! the way back must be exactly the zeros the encoder produced, or the
//! input was not produced by a compliant encoder and is rejected.

use thiserror::Error;

/// Failures while regrouping a symbol sequence.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegroupError {
    /// An input symbol had bits set above the declared source width.
    /// This is a programmer error on the encoding side; on the decoding
    /// side it means the caller skipped alphabet validation.
    #[error("symbol {value:#04x} does not fit in {width} bits")]
    InvalidSymbol { value: u8, width: u32 },

    /// Unpadded conversion ended with a leftover group wide enough to have
    /// held a whole input symbol. The trailing symbol carried no data.
    #[error("incomplete symbol group in unpadded input")]
    IncompletePadding,

    /// Unpadded conversion ended with leftover bits that were not zero.
    #[error("padding bits must be zero")]
    NonZeroPadding,
}

/// Repack a sequence of `from_bits`-wide symbols into `to_bits`-wide ones.
///
/// Bits flow most-significant first through a rolling accumulator. With
/// `pad` set, leftover bits are left-shifted to fill one final output
/// symbol; without it, leftover bits must be the zero padding a padded
/// conversion in the opposite direction would have produced.
///
/// Both widths must be in `1..=8`; that invariant is on the caller (this
/// crate only ever uses 8→5 and 5→8).
pub fn regroup(data: &[u8], from_bits: u32, to_bits: u32, pad: bool) -> Result<Vec<u8>, RegroupError> {
    debug_assert!((1..=8).contains(&from_bits) && (1..=8).contains(&to_bits));

    let out_mask: u32 = (1 << to_bits) - 1;
    let mut out = Vec::with_capacity((data.len() * from_bits as usize) / to_bits as usize + 1);
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;

    for &value in data {
        if u32::from(value) >> from_bits != 0 {
            return Err(RegroupError::InvalidSymbol { value, width: from_bits });
        }
        acc = (acc << from_bits) | u32::from(value);
        bits += from_bits;
        while bits >= to_bits {
            bits -= to_bits;
            out.push(((acc >> bits) & out_mask) as u8);
        }
    }

    if pad {
        if bits > 0 {
            out.push(((acc << (to_bits - bits)) & out_mask) as u8);
        }
    } else if bits >= from_bits {
        return Err(RegroupError::IncompletePadding);
    } else if (acc << (to_bits - bits)) & out_mask != 0 {
        return Err(RegroupError::NonZeroPadding);
    }

    Ok(out)
}
