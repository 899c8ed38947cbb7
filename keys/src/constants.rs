//! Constants used by public-key derivation.

/// Number of little-endian bits a scalar is decomposed into before it drives
/// the fixed-base multiplication.
///
/// Scalars are below the 251-bit subgroup order, so the top bits are always
/// clear.
pub const SCALAR_BITS: usize = babyjub::params::BASE8_SCALAR_BITS;

/// Mask for the last byte of 32 random bytes, keeping 251 bits.
pub(crate) const RANDOM_TOP_BYTE_MASK: u8 = 0x07;
