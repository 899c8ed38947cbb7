//! Baby Jubjub twisted Edwards curve over the BN254 scalar field.
//!
//! This crate provides the base field, affine curve points that carry whether
//! they have been checked against the curve equation, the Edwards group law
//! with verified divisions, little-endian bit decomposition, and a windowed
//! fixed-base multiplication engine. The curve parameters and base points are
//! fixed to the values in the `params` module.

mod bits;
mod error;
mod field;
mod fixed_base;
pub mod params;
mod point;
mod random;

pub use bits::{from_bits_le, to_bits_le};
pub use error::CurveError;
pub use field::Fr;
pub use fixed_base::{base8_table, mul_base8, FixedBase, WINDOW_BITS};
pub use point::{CurvePoint, PointState, Unchecked, Verified};
pub use random::RandomField;
