//! Private and public keys, and fixed-base public-key derivation.

use babyjub::{mul_base8, to_bits_le, CurvePoint, Verified};
use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::SCALAR_BITS;
use crate::errors::KeyError;
use crate::scalar::Scalar;

/// Derive the public key `A = scalar * BASE8`.
///
/// The scalar's range was checked when it was built. Its value is decomposed
/// into 253 little-endian bits (checked to reconstruct the value) which then
/// drive the shared `BASE8` window table, so the result is
/// `Σ bit[i] * 2^i * BASE8`.
pub fn derive_public_key(scalar: &Scalar) -> Result<CurvePoint<Verified>, KeyError> {
    let bits = to_bits_le::<SCALAR_BITS>(&scalar.to_field()?)?;
    let point = mul_base8(&bits)?;
    Ok(point)
}

/// A secret scalar in `[1, r - 1]`.
///
/// # Example
///
/// ```
/// use babyjub_keys::PrivateKey;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let private_key = PrivateKey::random(&mut rng);
/// let public_key = private_key.public_key().expect("derivation failed");
/// assert!(public_key.point().is_on_curve());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrivateKey {
    scalar: Scalar,
}

/// A public key: a point in the prime-order subgroup generated by `BASE8`,
/// other than the identity.
///
/// Deserializing a public key checks the curve equation, subgroup membership
/// and that the point is not the identity.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PublicKey {
    point: CurvePoint<Verified>,
}

impl PrivateKey {
    /// Samples a private key uniformly from `[1, r - 1]`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            scalar: Scalar::random(rng),
        }
    }

    pub fn from_scalar(scalar: Scalar) -> Self {
        Self { scalar }
    }

    pub fn scalar(&self) -> &Scalar {
        &self.scalar
    }

    /// Derives the public key `scalar * BASE8`.
    pub fn public_key(&self) -> Result<PublicKey, KeyError> {
        let point = derive_public_key(&self.scalar)?;
        Ok(PublicKey { point })
    }
}

impl PublicKey {
    /// Accepts `point` only if it is a non-identity member of the `BASE8`
    /// subgroup.
    pub fn from_point(point: CurvePoint<Verified>) -> Result<Self, KeyError> {
        if point.is_identity() {
            return Err(invalid_public_key("identity point"));
        }
        if !point.is_in_subgroup()? {
            return Err(invalid_public_key("point outside the prime-order subgroup"));
        }
        Ok(Self { point })
    }

    pub fn point(&self) -> &CurvePoint<Verified> {
        &self.point
    }
}

impl<'de> Deserialize<'de> for PublicKey {
    fn deserialize<De>(deserializer: De) -> Result<Self, De::Error>
    where
        De: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename = "PublicKey")]
        struct Encoded {
            point: CurvePoint<Verified>,
        }

        let encoded = Encoded::deserialize(deserializer)?;
        Self::from_point(encoded.point).map_err(serde::de::Error::custom)
    }
}

impl TryFrom<CurvePoint<Verified>> for PublicKey {
    type Error = KeyError;

    fn try_from(point: CurvePoint<Verified>) -> Result<Self, Self::Error> {
        Self::from_point(point)
    }
}

fn invalid_public_key(reason: &'static str) -> KeyError {
    log::debug!("rejected public key: {reason}");
    KeyError::InvalidPublicKey { reason }
}

impl From<PublicKey> for CurvePoint<Verified> {
    fn from(pk: PublicKey) -> Self {
        pk.point
    }
}

impl TryFrom<&PrivateKey> for PublicKey {
    type Error = KeyError;

    /// Equivalent to calling `private_key.public_key()`.
    fn try_from(sk: &PrivateKey) -> Result<Self, Self::Error> {
        sk.public_key()
    }
}
