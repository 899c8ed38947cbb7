use core::fmt;
use core::marker::PhantomData;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::params::{A, BASE8_X, BASE8_Y, D, GENERATOR_X, GENERATOR_Y};
use crate::{CurveError, Fr};

mod sealed {
    pub trait Sealed {}
}

/// Marks what is known about a point's coordinates.
pub trait PointState: sealed::Sealed + Copy + fmt::Debug + Eq + core::hash::Hash {}

/// Any pair of field elements; nothing is known about curve membership.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Unchecked {}

/// The pair satisfies the curve equation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Verified {}

impl sealed::Sealed for Unchecked {}
impl sealed::Sealed for Verified {}
impl PointState for Unchecked {}
impl PointState for Verified {}

/// Affine point on Baby Jubjub, tagged with what is known about it.
///
/// `CurvePoint<Unchecked>` can be built from any coordinates. The only ways to
/// get a `CurvePoint<Verified>` are [`CurvePoint::validate`], the curve
/// constants, and the group operations below, all of which preserve the curve
/// equation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CurvePoint<S: PointState> {
    x: Fr,
    y: Fr,
    state: PhantomData<S>,
}

impl<S: PointState> CurvePoint<S> {
    #[inline]
    const fn from_coords(x: Fr, y: Fr) -> Self {
        CurvePoint {
            x,
            y,
            state: PhantomData,
        }
    }

    #[inline]
    pub fn x(&self) -> Fr {
        self.x
    }

    #[inline]
    pub fn y(&self) -> Fr {
        self.y
    }

    /// Check if a point is on the curve: a*x^2 + y^2 = 1 + d*x^2*y^2.
    pub fn is_on_curve(&self) -> bool {
        let x2 = self.x.square();
        let y2 = self.y.square();
        let lhs = A * x2 + y2;
        let rhs = Fr::ONE + D * x2 * y2;

        lhs == rhs
    }
}

impl CurvePoint<Unchecked> {
    /// Create a new point with no guarantee that it lies on the curve.
    pub fn new(x: Fr, y: Fr) -> Self {
        Self::from_coords(x, y)
    }

    /// Check the curve equation and re-tag the same coordinates as verified.
    pub fn validate(self) -> Result<CurvePoint<Verified>, CurveError> {
        if !self.is_on_curve() {
            log::debug!("rejected off-curve point ({}, {})", self.x, self.y);
            return Err(CurveError::InvalidPoint);
        }
        Ok(CurvePoint::from_coords(self.x, self.y))
    }
}

impl CurvePoint<Verified> {
    /// The identity element (0, 1).
    pub const IDENTITY: Self = Self::from_coords(Fr::ZERO, Fr::ONE);

    /// Generator of the prime-order subgroup.
    pub const BASE8: Self = Self::from_coords(BASE8_X, BASE8_Y);

    /// Generator of the full curve group.
    pub const GENERATOR: Self = Self::from_coords(GENERATOR_X, GENERATOR_Y);

    #[inline]
    pub fn identity() -> Self {
        Self::IDENTITY
    }

    #[inline]
    pub fn base8() -> Self {
        Self::BASE8
    }

    #[inline]
    pub fn generator() -> Self {
        Self::GENERATOR
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Point addition with the twisted Edwards law:
    ///
    /// ```text
    /// beta  = x1*y2,  gamma = y1*x2
    /// delta = (-a*x1 + y1) * (x2 + y2)
    /// tau   = beta * gamma
    /// x3 = (beta + gamma) / (1 + d*tau)
    /// y3 = (delta + a*beta - gamma) / (1 - d*tau)
    /// ```
    ///
    /// Both divisions are verified; a failed check is a
    /// [`CurveError::ComputationFault`].
    pub fn add(&self, other: &Self) -> Result<Self, CurveError> {
        let beta = self.x * other.y;
        let gamma = self.y * other.x;
        let delta = (-(A * self.x) + self.y) * (other.x + other.y);
        let d_tau = D * (beta * gamma);

        let x = verified_div(beta + gamma, Fr::ONE + d_tau)?;
        let y = verified_div(delta + A * beta - gamma, Fr::ONE - d_tau)?;

        Ok(Self::from_coords(x, y))
    }

    /// Point doubling: 2*P, always through [`CurvePoint::add`].
    #[inline]
    pub fn double(&self) -> Result<Self, CurveError> {
        self.add(self)
    }

    /// Negate a point: (-x, y).
    pub fn negate(&self) -> Self {
        Self::from_coords(-self.x, self.y)
    }

    /// Multiply by the cofactor 8, mapping any curve point into the
    /// prime-order subgroup.
    pub fn clear_cofactor(&self) -> Result<Self, CurveError> {
        self.double()?.double()?.double()
    }
}

/// Computes `numerator / denominator` and accepts the quotient only after
/// checking `quotient * denominator == numerator`.
fn verified_div(numerator: Fr, denominator: Fr) -> Result<Fr, CurveError> {
    let Some(inv) = denominator.inverse() else {
        log::warn!("verified division by zero (numerator {numerator})");
        return Err(CurveError::ComputationFault);
    };
    let quotient = numerator * inv;
    if quotient * denominator != numerator {
        log::warn!("verified division check failed for {numerator} / {denominator}");
        return Err(CurveError::ComputationFault);
    }
    Ok(quotient)
}

impl From<CurvePoint<Verified>> for CurvePoint<Unchecked> {
    fn from(point: CurvePoint<Verified>) -> Self {
        Self::from_coords(point.x, point.y)
    }
}

impl TryFrom<CurvePoint<Unchecked>> for CurvePoint<Verified> {
    type Error = CurveError;

    fn try_from(point: CurvePoint<Unchecked>) -> Result<Self, Self::Error> {
        point.validate()
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename = "CurvePoint")]
struct Coordinates {
    x: Fr,
    y: Fr,
}

impl<S: PointState> Serialize for CurvePoint<S> {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        Coordinates {
            x: self.x,
            y: self.y,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CurvePoint<Unchecked> {
    fn deserialize<De: Deserializer<'de>>(deserializer: De) -> Result<Self, De::Error> {
        let Coordinates { x, y } = Coordinates::deserialize(deserializer)?;
        Ok(Self::new(x, y))
    }
}

/// Deserializing a verified point runs the curve check.
impl<'de> Deserialize<'de> for CurvePoint<Verified> {
    fn deserialize<De: Deserializer<'de>>(deserializer: De) -> Result<Self, De::Error> {
        CurvePoint::<Unchecked>::deserialize(deserializer)?
            .validate()
            .map_err(de::Error::custom)
    }
}
