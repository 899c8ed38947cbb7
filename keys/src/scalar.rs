//! Range-tagged private scalars.

use babyjub::params::suborder;
use babyjub::{CurveError, Fr};
use num_bigint::BigUint;
use rand::Rng;

use crate::constants::RANDOM_TOP_BYTE_MASK;
use crate::errors::KeyError;

/// Declared bounds `[min, max]` for a private scalar, with `0 < min <= max < r`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScalarRange {
    min: BigUint,
    max: BigUint,
}

impl ScalarRange {
    /// Check the bounds against the subgroup order once, up front.
    pub fn new(min: BigUint, max: BigUint) -> Result<Self, KeyError> {
        if min == BigUint::from(0u32) {
            return Err(range_violation("minimum must be greater than zero"));
        }
        if max >= suborder() {
            return Err(range_violation("maximum must be below the subgroup order"));
        }
        if min > max {
            return Err(range_violation("minimum exceeds maximum"));
        }
        Ok(Self { min, max })
    }

    /// The widest valid range, `[1, r - 1]`.
    pub fn full() -> Self {
        Self {
            min: BigUint::from(1u32),
            max: suborder() - BigUint::from(1u32),
        }
    }

    pub fn min(&self) -> &BigUint {
        &self.min
    }

    pub fn max(&self) -> &BigUint {
        &self.max
    }

    pub fn contains(&self, value: &BigUint) -> bool {
        self.min <= *value && *value <= self.max
    }
}

impl Default for ScalarRange {
    fn default() -> Self {
        Self::full()
    }
}

/// A private scalar together with the range it was declared in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scalar {
    value: BigUint,
    range: ScalarRange,
}

impl Scalar {
    pub fn new(value: BigUint, range: ScalarRange) -> Result<Self, KeyError> {
        if !range.contains(&value) {
            return Err(range_violation("value outside declared range"));
        }
        Ok(Self { value, range })
    }

    /// A scalar in the full range `[1, r - 1]`.
    pub fn from_biguint(value: BigUint) -> Result<Self, KeyError> {
        Self::new(value, ScalarRange::full())
    }

    pub fn from_u64(value: u64) -> Result<Self, KeyError> {
        Self::from_biguint(BigUint::from(value))
    }

    /// Samples uniformly from `[1, r - 1]` by rejection on 251-bit candidates.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let range = ScalarRange::full();
        loop {
            let mut bytes: [u8; 32] = rng.random();
            bytes[31] &= RANDOM_TOP_BYTE_MASK;

            let value = BigUint::from_bytes_le(&bytes);
            if range.contains(&value) {
                return Self { value, range };
            }
        }
    }

    pub fn value(&self) -> &BigUint {
        &self.value
    }

    pub fn range(&self) -> &ScalarRange {
        &self.range
    }

    /// The scalar as a base-field element; always succeeds since `r < p`.
    pub fn to_field(&self) -> Result<Fr, KeyError> {
        Fr::from_biguint(&self.value).ok_or(KeyError::Curve(CurveError::InvalidFieldElement))
    }
}

fn range_violation(reason: &'static str) -> KeyError {
    log::debug!("scalar range violation: {reason}");
    KeyError::RangeViolation { reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r() -> BigUint {
        suborder()
    }

    #[test]
    fn test_full_range_bounds() {
        let full = ScalarRange::full();
        assert_eq!(full.min(), &BigUint::from(1u32));
        assert_eq!(full.max(), &(r() - BigUint::from(1u32)));
        assert_eq!(
            ScalarRange::new(full.min().clone(), full.max().clone()),
            Ok(full)
        );
    }

    #[test]
    fn test_rejects_zero_minimum() {
        let err = ScalarRange::new(BigUint::from(0u32), BigUint::from(10u32));
        assert!(matches!(err, Err(KeyError::RangeViolation { .. })));
    }

    #[test]
    fn test_rejects_maximum_at_or_above_order() {
        let at = ScalarRange::new(BigUint::from(1u32), r());
        assert!(matches!(at, Err(KeyError::RangeViolation { .. })));

        let above = ScalarRange::new(BigUint::from(1u32), r() + BigUint::from(1u32));
        assert!(matches!(above, Err(KeyError::RangeViolation { .. })));
    }

    #[test]
    fn test_rejects_inverted_range() {
        let err = ScalarRange::new(BigUint::from(5u32), BigUint::from(4u32));
        assert!(matches!(err, Err(KeyError::RangeViolation { .. })));
    }

    #[test]
    fn test_value_must_lie_in_range() {
        let range = ScalarRange::new(BigUint::from(10u32), BigUint::from(20u32)).expect("range");
        assert!(Scalar::new(BigUint::from(10u32), range.clone()).is_ok());
        assert!(Scalar::new(BigUint::from(20u32), range.clone()).is_ok());
        assert!(matches!(
            Scalar::new(BigUint::from(21u32), range.clone()),
            Err(KeyError::RangeViolation { .. })
        ));
        assert!(matches!(
            Scalar::new(BigUint::from(9u32), range),
            Err(KeyError::RangeViolation { .. })
        ));
        assert!(Scalar::from_u64(0).is_err());
        assert!(Scalar::from_biguint(r()).is_err());
    }

    #[test]
    fn test_to_field() {
        let s = Scalar::from_u64(42).expect("scalar");
        assert_eq!(s.to_field(), Ok(Fr::from_u64(42)));
    }

    #[test]
    fn test_random_in_full_range() {
        use rand::SeedableRng;
        use rand::rngs::StdRng;

        let mut rng = StdRng::seed_from_u64(7);
        let full = ScalarRange::full();
        for _ in 0..64 {
            let s = Scalar::random(&mut rng);
            assert!(full.contains(s.value()));
            assert_eq!(s.range(), &full);
            assert!(s.value().bits() <= 251);
        }
    }
}
