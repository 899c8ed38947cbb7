//! Error types for curve arithmetic.

use thiserror::Error;

/// Errors that can occur during field and curve operations.
///
/// All of them are deterministic: the same inputs always fail the same way, so
/// none of them is worth retrying.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum CurveError {
    /// A coordinate pair does not satisfy `a*x^2 + y^2 = 1 + d*x^2*y^2`.
    #[error("point is not on the Baby Jubjub curve")]
    InvalidPoint,

    /// A verified division found `quotient * denominator != numerator`.
    ///
    /// This happens when a denominator is zero, which the addition law never
    /// produces for two curve points, so it points at corrupted input or an
    /// arithmetic bug.
    #[error("verified division failed: quotient * denominator != numerator")]
    ComputationFault,

    /// A bit decomposition did not reconstruct the input value.
    #[error("value does not fit in {bits} bits")]
    ValueTooWide { bits: usize },

    /// A fixed-base multiplication was driven with the wrong number of bits.
    #[error("expected {expected} scalar bits, found {found}")]
    BitLengthMismatch { expected: usize, found: usize },

    /// Text or integer input is not a canonical field element.
    #[error("not a canonical field element")]
    InvalidFieldElement,
}
