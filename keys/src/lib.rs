//! Public-key derivation over the Baby Jubjub curve.
//!
//! A private key is a scalar declared within bounds `[min, max]` where
//! `0 < min` and `max < r`, `r` being the order of the subgroup generated by
//! `BASE8`. The public key is `scalar * BASE8`, computed with the fixed-base
//! engine from the `babyjub` crate.
//!
//! # Example
//!
//! ```
//! use babyjub::CurvePoint;
//! use babyjub_keys::{Scalar, derive_public_key};
//!
//! let one = Scalar::from_u64(1).expect("1 is in range");
//! let public_key = derive_public_key(&one).expect("derivation failed");
//! assert_eq!(public_key, CurvePoint::base8());
//! ```
//!
//! Scalar bounds are checked when the scalar is built, so an out-of-range
//! scalar never reaches the multiplication:
//!
//! ```
//! use babyjub_keys::{KeyError, Scalar};
//!
//! assert!(matches!(Scalar::from_u64(0), Err(KeyError::RangeViolation { .. })));
//! ```

mod constants;
mod errors;
mod keys;
mod scalar;


pub use constants::SCALAR_BITS;
pub use errors::KeyError;
pub use keys::{derive_public_key, PrivateKey, PublicKey};
pub use scalar::{Scalar, ScalarRange};
