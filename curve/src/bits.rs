//! Little-endian bit decomposition of field elements.

use crate::{CurveError, Fr};

/// Decompose `value` into exactly `N` little-endian bits (`bits[0]` is the
/// least significant).
///
/// The bits are re-assembled with [`from_bits_le`] before being returned, and
/// the decomposition fails with [`CurveError::ValueTooWide`] unless they
/// reproduce `value` exactly.
pub fn to_bits_le<const N: usize>(value: &Fr) -> Result<[bool; N], CurveError> {
    let limbs = value.to_canonical_limbs();
    let mut bits = [false; N];

    for (i, bit) in bits.iter_mut().enumerate().take(Fr::NUM_BITS) {
        *bit = (limbs[i / 64] >> (i % 64)) & 1 == 1;
    }

    if from_bits_le(&bits) != *value {
        return Err(CurveError::ValueTooWide { bits: N });
    }
    Ok(bits)
}

/// Weighted sum `Σ bits[i] * 2^i` in the field.
pub fn from_bits_le(bits: &[bool]) -> Fr {
    let mut acc = Fr::ZERO;
    let mut weight = Fr::ONE;

    for &bit in bits {
        if bit {
            acc += weight;
        }
        weight = weight.double();
    }

    acc
}
