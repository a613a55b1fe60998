use num_bigint::BigUint;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::errors::CurveError;
use crate::modular::neg_mod;
use crate::params::{field_from_slice, field_to_bytes, CurveParams, FIELD_BYTES};

/// Size of an uncompressed `x || y` point encoding.
pub const POINT_BYTES: usize = 2 * FIELD_BYTES;

/// Affine point on a short Weierstrass curve.
///
/// Coordinates are expected in `[0, p)`. The group identity has no affine
/// coordinates; by convention it is represented by the marker `(0, 0)`.
/// A value is only meaningful as a curve point once it has passed
/// [`Affine::is_on_curve`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Affine {
    /// The x-coordinate of the point
    pub x: BigUint,
    /// The y-coordinate of the point
    pub y: BigUint,
}

impl Affine {
    /// Create a new affine point.
    pub fn new(x: BigUint, y: BigUint) -> Self {
        Affine { x, y }
    }

    /// The identity marker `(0, 0)`.
    pub fn identity() -> Self {
        Affine {
            x: BigUint::zero(),
            y: BigUint::zero(),
        }
    }

    /// Check if this is the identity marker.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }

    /// Check if the point is on the curve: y^2 = x^3 + a*x + b, with both
    /// coordinates reduced.
    pub fn is_on_curve(&self, curve: &CurveParams) -> bool {
        curve.is_on_curve(&self.x, &self.y)
    }

    /// Negate a point: (x, -y).
    pub fn negate(&self, curve: &CurveParams) -> Self {
        if self.is_identity() {
            return self.clone();
        }
        Affine::new(self.x.clone(), neg_mod(&self.y, &curve.p))
    }

    /// Big-endian `x || y`, 32 bytes each.
    pub fn to_bytes(&self) -> [u8; POINT_BYTES] {
        let mut out = [0u8; POINT_BYTES];
        out[..FIELD_BYTES].copy_from_slice(&field_to_bytes(&self.x));
        out[FIELD_BYTES..].copy_from_slice(&field_to_bytes(&self.y));
        out
    }

    /// Parse a big-endian `x || y` buffer. No curve membership check.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CurveError> {
        if bytes.len() != POINT_BYTES {
            return Err(CurveError::InvalidLength {
                expected: POINT_BYTES,
                actual: bytes.len(),
            });
        }
        Ok(Affine {
            x: field_from_slice(&bytes[..FIELD_BYTES])?,
            y: field_from_slice(&bytes[FIELD_BYTES..])?,
        })
    }
}
