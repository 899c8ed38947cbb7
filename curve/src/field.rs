//! Base field of Baby Jubjub: the BN254 scalar field.
//! p = 0x30644e72e131a029b85045b68181585d2833e84879b9709143e1f593f0000001
//!
//! This implementation uses Montgomery form for efficient modular arithmetic.
//! The field element is represented as [u64; 4] in little-endian order.

use core::fmt::{self, Debug, Display, Formatter};
use core::iter::{Product, Sum};
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use core::str::FromStr;
use num_bigint::BigUint;
use rand::distr::{Distribution, StandardUniform};
use rand::Rng;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::CurveError;

/// Element of GF(p), p = 21888242871839275222246405745257275088548364400416034343698204186575808495617.
/// Represented in Montgomery form with [u64; 4]
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Fr {
    /// Montgomery form: value * R mod p, where R = 2^256
    limbs: [u64; 4],
}

// Field modulus
pub(crate) const MODULUS: [u64; 4] = [
    0x43e1f593f0000001,
    0x2833e84879b97091,
    0xb85045b68181585d,
    0x30644e72e131a029,
];

// R = 2^256 mod p (Montgomery parameter)
const R: [u64; 4] = [
    0xac96341c4ffffffb,
    0x36fc76959f60cd29,
    0x666ea36f7879462e,
    0x0e0a77c19a07df2f,
];

// R^2 = 2^512 mod p (for Montgomery conversion)
const R2: [u64; 4] = [
    0x1bb8e645ae216da7,
    0x53fe3ab1e35c59e3,
    0x8c49833d53bb8085,
    0x0216d0b17f4e44a5,
];

// -p^{-1} mod 2^64 (Montgomery parameter mu)
const MU: u64 = 0xc2e1f593efffffff;

// Canonical values never exceed 254 bits.
const TOP_LIMB_MASK: u64 = 0x3fff_ffff_ffff_ffff;

impl Fr {
    /// Zero element (in Montgomery form)
    pub const ZERO: Self = Fr {
        limbs: [0, 0, 0, 0],
    };

    /// One element (in Montgomery form: R mod p)
    pub const ONE: Self = Fr { limbs: R };

    /// Number of bits needed to hold any canonical element.
    pub const NUM_BITS: usize = 254;

    /// Build an element from limbs already in Montgomery form.
    ///
    /// Only used for the curve constants in `params`, which are checked against
    /// their decimal values in tests.
    #[inline]
    pub(crate) const fn from_montgomery(limbs: [u64; 4]) -> Self {
        Fr { limbs }
    }

    /// Create a new field element from a u64 value
    #[inline]
    pub fn from_u64(val: u64) -> Self {
        // Convert to Montgomery form: val * R^2 * R^{-1} = val * R
        montgomery_mul(Fr { limbs: [val, 0, 0, 0] }, Fr { limbs: R2 })
    }

    /// Create an element from canonical little-endian limbs, rejecting values >= p.
    pub fn from_canonical_limbs(limbs: [u64; 4]) -> Option<Self> {
        if !is_canonical(limbs) {
            return None;
        }
        Some(montgomery_mul(Fr { limbs }, Fr { limbs: R2 }))
    }

    /// Convert from Montgomery form to canonical little-endian limbs
    #[inline]
    pub fn to_canonical_limbs(&self) -> [u64; 4] {
        // Multiply by 1 to get out of Montgomery form
        let one = Fr {
            limbs: [1, 0, 0, 0],
        };
        montgomery_mul(*self, one).limbs
    }

    /// Create an element from an integer, rejecting values >= p.
    pub fn from_biguint(value: &BigUint) -> Option<Self> {
        let digits = value.to_u64_digits();
        if digits.len() > 4 {
            return None;
        }
        let mut limbs = [0u64; 4];
        limbs[..digits.len()].copy_from_slice(&digits);
        Self::from_canonical_limbs(limbs)
    }

    /// Canonical integer value of this element.
    pub fn to_biguint(&self) -> BigUint {
        limbs_to_biguint(&self.to_canonical_limbs())
    }

    /// The field modulus as an integer.
    pub fn modulus() -> BigUint {
        limbs_to_biguint(&MODULUS)
    }

    /// Check if this field element is zero
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.limbs == [0, 0, 0, 0]
    }

    #[inline]
    pub fn double(&self) -> Self {
        Fr {
            limbs: add_mod(self.limbs, self.limbs),
        }
    }

    #[inline]
    pub fn square(&self) -> Self {
        montgomery_mul(*self, *self)
    }

    /// Multiplicative inverse via Fermat's little theorem: a^{-1} = a^{p-2}.
    ///
    /// Returns `None` for zero.
    pub fn inverse(&self) -> Option<Self> {
        if self.is_zero() {
            return None;
        }
        // p - 2 for Fermat's little theorem
        let exp = sub_mod(MODULUS, [2, 0, 0, 0]);
        Some(self.pow_vartime(exp))
    }

    /// Variable-time exponentiation by a 256-bit little-endian exponent.
    pub fn pow_vartime(&self, exp: [u64; 4]) -> Self {
        let mut result = Self::ONE;
        let mut base = *self;

        // Process bits from least significant to most significant
        for &limb in exp.iter() {
            let mut remaining = limb;
            for _ in 0..64 {
                if remaining & 1 == 1 {
                    result *= base;
                }
                base = base.square();
                remaining >>= 1;
            }
        }

        result
    }
}

pub(crate) fn limbs_to_biguint(limbs: &[u64; 4]) -> BigUint {
    let mut bytes = Vec::with_capacity(32);
    for &limb in limbs {
        bytes.extend_from_slice(&limb.to_le_bytes());
    }
    BigUint::from_bytes_le(&bytes)
}

/// a + b mod p, inputs canonical.
#[inline]
const fn add_mod(a: [u64; 4], b: [u64; 4]) -> [u64; 4] {
    let (r0, carry) = a[0].overflowing_add(b[0]);
    let (r1, carry) = carrying_add(a[1], b[1], carry);
    let (r2, carry) = carrying_add(a[2], b[2], carry);
    let (r3, carry) = carrying_add(a[3], b[3], carry);

    // Keep r - p unless it borrows, i.e. r < p
    let (s0, borrow) = r0.overflowing_sub(MODULUS[0]);
    let (s1, borrow) = borrowing_sub(r1, MODULUS[1], borrow);
    let (s2, borrow) = borrowing_sub(r2, MODULUS[2], borrow);
    let (s3, borrow) = borrowing_sub(r3, MODULUS[3], borrow);

    if carry || !borrow {
        [s0, s1, s2, s3]
    } else {
        [r0, r1, r2, r3]
    }
}

/// a - b mod p, inputs canonical.
#[inline]
const fn sub_mod(a: [u64; 4], b: [u64; 4]) -> [u64; 4] {
    let (r0, borrow) = a[0].overflowing_sub(b[0]);
    let (r1, borrow) = borrowing_sub(a[1], b[1], borrow);
    let (r2, borrow) = borrowing_sub(a[2], b[2], borrow);
    let (r3, borrow) = borrowing_sub(a[3], b[3], borrow);

    // Borrow out means a < b: wrap by adding p back
    if borrow {
        let (r0, carry) = r0.overflowing_add(MODULUS[0]);
        let (r1, carry) = carrying_add(r1, MODULUS[1], carry);
        let (r2, carry) = carrying_add(r2, MODULUS[2], carry);
        let (r3, _) = carrying_add(r3, MODULUS[3], carry);
        [r0, r1, r2, r3]
    } else {
        [r0, r1, r2, r3]
    }
}

/// -a mod p; zero stays zero.
#[inline]
const fn neg_mod(a: [u64; 4]) -> [u64; 4] {
    if a[0] == 0 && a[1] == 0 && a[2] == 0 && a[3] == 0 {
        return [0, 0, 0, 0];
    }
    sub_mod(MODULUS, a)
}

#[inline]
const fn is_canonical(limbs: [u64; 4]) -> bool {
    let (_, borrow) = limbs[0].overflowing_sub(MODULUS[0]);
    let (_, borrow) = borrowing_sub(limbs[1], MODULUS[1], borrow);
    let (_, borrow) = borrowing_sub(limbs[2], MODULUS[2], borrow);
    let (_, borrow) = borrowing_sub(limbs[3], MODULUS[3], borrow);
    borrow
}

#[inline]
const fn carrying_add(a: u64, b: u64, carry: bool) -> (u64, bool) {
    let (sum, overflow1) = a.overflowing_add(b);
    let (sum, overflow2) = sum.overflowing_add(carry as u64);
    (sum, overflow1 || overflow2)
}

#[inline]
const fn borrowing_sub(a: u64, b: u64, borrow: bool) -> (u64, bool) {
    let (diff, overflow1) = a.overflowing_sub(b);
    let (diff, overflow2) = diff.overflowing_sub(borrow as u64);
    (diff, overflow1 || overflow2)
}

/// Montgomery multiplication: (a * b * R^{-1}) mod p
#[inline]
fn montgomery_mul(a: Fr, b: Fr) -> Fr {
    // Schoolbook 4x4 limb product into t
    let mut t = [0u64; 8];

    for i in 0..4 {
        let mut carry = 0u128;
        for j in 0..4 {
            let product = (a.limbs[i] as u128) * (b.limbs[j] as u128) + (t[i + j] as u128) + carry;
            t[i + j] = product as u64;
            carry = product >> 64;
        }
        t[i + 4] = carry as u64;
    }

    // Clear one low limb per round by adding a multiple of p
    for i in 0..4 {
        let k = t[i].wrapping_mul(MU);
        let mut carry = 0u128;

        for j in 0..4 {
            let product = (k as u128) * (MODULUS[j] as u128) + (t[i + j] as u128) + carry;
            t[i + j] = product as u64;
            carry = product >> 64;
        }

        for j in 4..8 - i {
            let sum = (t[i + j] as u128) + carry;
            t[i + j] = sum as u64;
            carry = sum >> 64;
        }
    }

    // High half is below 2p; one conditional subtraction suffices
    let result = [t[4], t[5], t[6], t[7]];
    if is_canonical(result) {
        Fr { limbs: result }
    } else {
        Fr {
            limbs: sub_mod(result, MODULUS),
        }
    }
}

impl Add for Fr {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Fr {
            limbs: add_mod(self.limbs, rhs.limbs),
        }
    }
}

impl AddAssign for Fr {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Fr {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Fr {
            limbs: sub_mod(self.limbs, rhs.limbs),
        }
    }
}

impl SubAssign for Fr {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for Fr {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Fr {
            limbs: neg_mod(self.limbs),
        }
    }
}

impl Mul for Fr {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        montgomery_mul(self, rhs)
    }
}

impl MulAssign for Fr {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Sum for Fr {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

impl Product for Fr {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, x| acc * x)
    }
}

impl From<u64> for Fr {
    fn from(val: u64) -> Self {
        Self::from_u64(val)
    }
}

impl Distribution<Fr> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Fr {
        loop {
            let mut limbs: [u64; 4] = rng.random();
            limbs[3] &= TOP_LIMB_MASK;

            if let Some(value) = Fr::from_canonical_limbs(limbs) {
                return value;
            }
        }
    }
}

/// Parses a canonical decimal integer.
impl FromStr for Fr {
    type Err = CurveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = BigUint::parse_bytes(s.as_bytes(), 10).ok_or(CurveError::InvalidFieldElement)?;
        Fr::from_biguint(&value).ok_or(CurveError::InvalidFieldElement)
    }
}

impl Display for Fr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_biguint())
    }
}

impl Debug for Fr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let canonical = self.to_canonical_limbs();
        write!(
            f,
            "Fr(0x{:016x}{:016x}{:016x}{:016x})",
            canonical[3], canonical[2], canonical[1], canonical[0]
        )
    }
}

impl Serialize for Fr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Fr {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RandomField;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_zero_one() {
        assert_eq!(Fr::ZERO + Fr::ZERO, Fr::ZERO);
        assert_eq!(Fr::ONE * Fr::ONE, Fr::ONE);
        assert_eq!(Fr::ZERO * Fr::ONE, Fr::ZERO);
        assert_eq!(Fr::ONE + Fr::ZERO, Fr::ONE);
        assert_eq!(Fr::from_u64(1), Fr::ONE);
    }

    #[test]
    fn test_addition() {
        let a = Fr::from_u64(5);
        let b = Fr::from_u64(7);
        assert_eq!(a + b, Fr::from_u64(12));
    }

    #[test]
    fn test_subtraction_wraps() {
        let a = Fr::from_u64(3);
        let b = Fr::from_u64(10);
        assert_eq!(a - b, -Fr::from_u64(7));
        assert_eq!((a - b).to_biguint(), Fr::modulus() - BigUint::from(7u32));
    }

    #[test]
    fn test_multiplication() {
        let a = Fr::from_u64(6);
        let b = Fr::from_u64(7);
        assert_eq!(a * b, Fr::from_u64(42));

        let big = Fr::from_u64(u64::MAX);
        let expected = BigUint::from(u64::MAX) * BigUint::from(u64::MAX);
        assert_eq!((big * big).to_biguint(), expected);
    }

    #[test]
    fn test_negation() {
        let a = Fr::from_u64(5);
        assert_eq!(a + (-a), Fr::ZERO);
        assert_eq!(-Fr::ZERO, Fr::ZERO);
    }

    #[test]
    fn test_inverse() {
        let a = Fr::from_u64(5);
        let a_inv = a.inverse().expect("nonzero");
        assert_eq!(a * a_inv, Fr::ONE);
        assert_eq!(Fr::ZERO.inverse(), None);
    }

    #[test]
    fn test_random_inverse() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..16 {
            let a = Fr::random(&mut rng);
            if let Some(inv) = a.inverse() {
                assert_eq!(a * inv, Fr::ONE);
            }
        }
    }

    #[test]
    fn test_biguint_conversions() {
        let p = Fr::modulus();
        let max = &p - BigUint::from(1u32);
        let x = Fr::from_biguint(&max).expect("p - 1 is canonical");
        assert_eq!(x, -Fr::ONE);
        assert_eq!(x.to_biguint(), max);
        assert_eq!(Fr::from_biguint(&p), None);
        assert_eq!(Fr::from_canonical_limbs(MODULUS), None);
    }

    #[test]
    fn test_decimal_parse_and_display() {
        let s = "16950150798460657717958625567821834550301663161624707787222815936182638968203";
        let x: Fr = s.parse().expect("parse");
        assert_eq!(x.to_string(), s);
        assert_eq!("12".parse::<Fr>(), Ok(Fr::from_u64(12)));
        assert_eq!("abc".parse::<Fr>(), Err(CurveError::InvalidFieldElement));
        assert_eq!(
            "21888242871839275222246405745257275088548364400416034343698204186575808495617".parse::<Fr>(),
            Err(CurveError::InvalidFieldElement)
        );
    }

    #[test]
    fn test_sum_product() {
        let xs = [Fr::from_u64(2), Fr::from_u64(3), Fr::from_u64(4)];
        assert_eq!(xs.iter().copied().sum::<Fr>(), Fr::from_u64(9));
        assert_eq!(xs.iter().copied().product::<Fr>(), Fr::from_u64(24));
    }
}
