//! Error types for key derivation.

use babyjub::CurveError;
use thiserror::Error;

/// Errors that can occur while building scalars or deriving public keys.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    /// A declared scalar range falls outside `(0, r)`, or a value falls
    /// outside its declared range.
    ///
    /// Raised when the scalar is built, before any multiplication begins.
    #[error("scalar range violation: {reason}")]
    RangeViolation { reason: &'static str },

    /// A point offered as a public key is the identity or lies outside the
    /// subgroup generated by `BASE8`.
    #[error("invalid public key: {reason}")]
    InvalidPublicKey { reason: &'static str },

    /// The curve arithmetic rejected an intermediate value.
    #[error(transparent)]
    Curve(#[from] CurveError),
}
