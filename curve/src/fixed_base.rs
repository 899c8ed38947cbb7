//! Windowed fixed-base scalar multiplication.

use std::sync::OnceLock;

use crate::bits::to_bits_le;
use crate::params::{BASE8_SCALAR_BITS, SUBORDER, SUBORDER_BITS};
use crate::{CurveError, CurvePoint, Fr, Verified};

/// Width of a window in bits.
pub const WINDOW_BITS: usize = 4;

const TABLE_SIZE: usize = 1 << WINDOW_BITS;

/// Precomputed multiples `0*B, 1*B, ..., 15*B` of a fixed base `B`, driven by
/// a fixed number of little-endian scalar bits.
#[derive(Clone, Debug)]
pub struct FixedBase {
    table: [CurvePoint<Verified>; TABLE_SIZE],
    num_bits: usize,
}

impl FixedBase {
    pub fn new(base: CurvePoint<Verified>, num_bits: usize) -> Result<Self, CurveError> {
        let mut table = [CurvePoint::IDENTITY; TABLE_SIZE];
        table[1] = base;

        for i in 2..TABLE_SIZE {
            table[i] = if i % 2 == 0 {
                table[i / 2].double()?
            } else {
                table[i - 1].add(&table[1])?
            };
        }

        Ok(Self { table, num_bits })
    }

    #[inline]
    pub fn base(&self) -> &CurvePoint<Verified> {
        &self.table[1]
    }

    #[inline]
    pub fn num_bits(&self) -> usize {
        self.num_bits
    }

    /// Compute `Σ bits[i] * 2^i * B`.
    ///
    /// Windows are consumed from the most significant end: the accumulator is
    /// doubled once per bit in the window, then the window's table entry is
    /// added.
    pub fn mul_bits(&self, bits: &[bool]) -> Result<CurvePoint<Verified>, CurveError> {
        if bits.len() != self.num_bits {
            return Err(CurveError::BitLengthMismatch {
                expected: self.num_bits,
                found: bits.len(),
            });
        }

        let mut result = CurvePoint::IDENTITY;

        for window in bits.chunks(WINDOW_BITS).rev() {
            for _ in 0..window.len() {
                result = result.double()?;
            }

            let index = window
                .iter()
                .rev()
                .fold(0usize, |acc, &bit| (acc << 1) | usize::from(bit));
            if index != 0 {
                result = result.add(&self.table[index])?;
            }
        }

        Ok(result)
    }
}

static BASE8_TABLE: OnceLock<Result<FixedBase, CurveError>> = OnceLock::new();

/// Shared table for `BASE8`, built on first use.
pub fn base8_table() -> Result<&'static FixedBase, CurveError> {
    let table = BASE8_TABLE.get_or_init(|| {
        log::trace!("building BASE8 window table");
        FixedBase::new(CurvePoint::BASE8, BASE8_SCALAR_BITS)
    });
    table.as_ref().map_err(|err| *err)
}

/// Multiply `BASE8` by the scalar whose 253 little-endian bits are given.
pub fn mul_base8(bits: &[bool]) -> Result<CurvePoint<Verified>, CurveError> {
    base8_table()?.mul_bits(bits)
}

impl CurvePoint<Verified> {
    /// Whether `r * P` is the identity, i.e. `P` lies in the subgroup
    /// generated by `BASE8`. The identity itself is a member.
    pub fn is_in_subgroup(&self) -> Result<bool, CurveError> {
        let order = Fr::from_canonical_limbs(SUBORDER).ok_or(CurveError::InvalidFieldElement)?;
        let bits = to_bits_le::<SUBORDER_BITS>(&order)?;
        let engine = FixedBase::new(*self, SUBORDER_BITS)?;
        Ok(engine.mul_bits(&bits)?.is_identity())
    }
}
