// Baby Jubjub, twisted Edwards form over the BN254 scalar field:
//   a*x^2 + y^2 = 1 + d*x^2*y^2,  a = 168700,  d = 168696
// Curve order: 8 * r
// Subgroup order r: 2736030358979909402780800718157159386076813972158567259200215660948447373041 (251 bits)
// a is a square and d is a non-square mod p, so the addition law is complete.
//
// Field constants below are stored in Montgomery form.

use num_bigint::BigUint;

use crate::field::limbs_to_biguint;
use crate::Fr;

/// Curve coefficient `a = 168700`.
pub const A: Fr = Fr::from_montgomery([
    0x95accf61fff261e0,
    0x24780d659df7d378,
    0xe0ac11b07e906ae8,
    0x0f35db2216d3def3,
]);

/// Curve coefficient `d = 168696`.
pub const D: Fr = Fr::from_montgomery([
    0x2735f484aff261f5,
    0x70ba1b579a2e0f63,
    0xff41c9a91e2caa8c,
    0x07704a8e8fe6025f,
]);

/// x-coordinate of the prime-order subgroup generator `BASE8`.
pub(crate) const BASE8_X: Fr = Fr::from_montgomery([
    0x0a8fc7bc1a89fa86,
    0xa7d9d786e9e48627,
    0xee6158b465bea369,
    0x14a0ff6d2f874519,
]);

/// y-coordinate of `BASE8`.
pub(crate) const BASE8_Y: Fr = Fr::from_montgomery([
    0xb83342d20d0201aa,
    0x2ffef2f7cdcfeac7,
    0xbfa79a9425a6e625,
    0x0dfb859dc3a44b70,
]);

/// x-coordinate of the full-group generator (`8 * GENERATOR = BASE8`).
pub(crate) const GENERATOR_X: Fr = Fr::from_montgomery([
    0x04b1094e6adddecd,
    0x055ba7d9099f7fa1,
    0x7bbf2870e518e5de,
    0x0981eab540ef8b9b,
]);

/// y-coordinate of the full-group generator.
pub(crate) const GENERATOR_Y: Fr = Fr::from_montgomery([
    0x345a1f442ffffffd,
    0x8764472692d3ae4c,
    0xd70f2edc7b7bf6e8,
    0x2ed314a75c6b1f82,
]);

/// Subgroup order `r`, canonical little-endian limbs.
pub const SUBORDER: [u64; 4] = [
    0x677297dc392126f1,
    0xab3eedb83920ee0a,
    0x370a08b6d0302b0b,
    0x060c89ce5c263405,
];

/// Bit length of `r`.
pub const SUBORDER_BITS: usize = 251;

/// Cofactor of the curve group.
pub const COFACTOR: u64 = 8;

/// Bits used to represent a scalar below `r` when multiplying `BASE8`.
pub const BASE8_SCALAR_BITS: usize = 253;

/// Subgroup order `r` as an integer.
pub fn suborder() -> BigUint {
    limbs_to_biguint(&SUBORDER)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fr(s: &str) -> Fr {
        s.parse().expect("canonical constant")
    }

    #[test]
    fn test_coefficients_match_decimal() {
        assert_eq!(A, Fr::from_u64(168700));
        assert_eq!(D, Fr::from_u64(168696));
    }

    #[test]
    fn test_base_points_match_decimal() {
        assert_eq!(
            BASE8_X,
            fr("5299619240641551281634865583518297030282874472190772894086521144482721001553")
        );
        assert_eq!(
            BASE8_Y,
            fr("16950150798460657717958625567821834550301663161624707787222815936182638968203")
        );
        assert_eq!(
            GENERATOR_X,
            fr("995203441582195749578291179787384436505546430278305826713579947235728471134")
        );
        assert_eq!(
            GENERATOR_Y,
            fr("5472060717959818805561601436314318772137091100104008585924551046643952123905")
        );
    }

    #[test]
    fn test_suborder() {
        let r = BigUint::parse_bytes(
            b"2736030358979909402780800718157159386076813972158567259200215660948447373041",
            10,
        )
        .expect("decimal");
        assert_eq!(suborder(), r);
        assert_eq!(r.bits(), SUBORDER_BITS as u64);
    }
}
