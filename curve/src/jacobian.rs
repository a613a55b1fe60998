use num_bigint::BigUint;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use crate::affine::Affine;
use crate::errors::CurveError;
use crate::group::{Group, ScalarBits};
use crate::modular::{mod_inverse, mul_mod, neg_mod, square_mod, sub_mod};
use crate::msm::{double_scalar_mul, mul_windowed};
use crate::params::CurveParams;
use crate::table::PrecomputedTable;

/// Point in Jacobian coordinates (X:Y:Z), where (x,y) = (X/Z^2, Y/Z^3).
///
/// Any point with Z = 0 is the point at infinity, whatever X and Y hold.
/// A single affine point has many Jacobian representatives, so equality is
/// [`Jacobian::equals`] and there is deliberately no `PartialEq`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Jacobian {
    pub x: BigUint,
    pub y: BigUint,
    pub z: BigUint,
}

impl Jacobian {
    /// Create a new Jacobian point.
    pub fn new(x: BigUint, y: BigUint, z: BigUint) -> Self {
        Jacobian { x, y, z }
    }

    /// The canonical point at infinity (0:1:0).
    pub fn infinity() -> Self {
        Jacobian {
            x: BigUint::zero(),
            y: BigUint::one(),
            z: BigUint::zero(),
        }
    }

    /// Check if this point is the point at infinity.
    #[inline]
    pub fn is_infinity(&self) -> bool {
        self.z.is_zero()
    }

    /// (x, y) -> (x, y, 1). The identity marker maps to infinity.
    pub fn from_affine(point: &Affine) -> Self {
        if point.is_identity() {
            return Self::infinity();
        }
        Jacobian::new(point.x.clone(), point.y.clone(), BigUint::one())
    }

    /// Convert to affine coordinates with a single inversion of Z.
    ///
    /// Infinity converts to the identity marker `(0, 0)`. This is the only
    /// step of a multiplication that needs a modular inverse.
    pub fn to_affine(&self, curve: &CurveParams) -> Result<Affine, CurveError> {
        if self.is_infinity() {
            return Ok(Affine::identity());
        }

        let p = &curve.p;
        let z_inv = mod_inverse(&self.z, p)?;
        let z_inv2 = square_mod(&z_inv, p);
        let z_inv3 = mul_mod(&z_inv2, &z_inv, p);

        Ok(Affine::new(
            mul_mod(&self.x, &z_inv2, p),
            mul_mod(&self.y, &z_inv3, p),
        ))
    }

    /// Affine equality without inverting: X1*Z2^2 == X2*Z1^2 and
    /// Y1*Z2^3 == Y2*Z1^3. Two infinities are equal.
    pub fn equals(&self, other: &Self, curve: &CurveParams) -> bool {
        match (self.is_infinity(), other.is_infinity()) {
            (true, true) => return true,
            (true, false) | (false, true) => return false,
            (false, false) => {}
        }

        let p = &curve.p;
        let z1z1 = square_mod(&self.z, p);
        let z2z2 = square_mod(&other.z, p);

        if mul_mod(&self.x, &z2z2, p) != mul_mod(&other.x, &z1z1, p) {
            return false;
        }

        let z1_cubed = mul_mod(&z1z1, &self.z, p);
        let z2_cubed = mul_mod(&z2z2, &other.z, p);
        mul_mod(&self.y, &z2_cubed, p) == mul_mod(&other.y, &z1_cubed, p)
    }

    /// Check Y^2 = X^3 + a*X*Z^4 + b*Z^6.
    pub fn is_on_curve(&self, curve: &CurveParams) -> bool {
        if self.is_infinity() {
            return true;
        }

        let p = &curve.p;
        let z2 = square_mod(&self.z, p);
        let z4 = square_mod(&z2, p);
        let z6 = mul_mod(&z4, &z2, p);

        let lhs = square_mod(&self.y, p);
        let x3 = mul_mod(&square_mod(&self.x, p), &self.x, p);
        let axz4 = mul_mod(&mul_mod(&curve.a, &self.x, p), &z4, p);
        let bz6 = mul_mod(&curve.b, &z6, p);

        lhs == (x3 + axz4 + bz6) % p
    }

    /// Point doubling, dbl-1998-cmo-2:
    ///
    /// ```text
    /// YY = Y^2, ZZ = Z^2, M = 3X^2 + a*ZZ^2, S = 4*X*YY
    /// X' = M^2 - 2S
    /// Y' = M*(S - X') - 8*YY^2
    /// Z' = 2*Y*Z
    /// ```
    pub fn double(&self, curve: &CurveParams) -> Self {
        if self.is_infinity() {
            return self.clone();
        }

        let p = &curve.p;
        let yy = square_mod(&self.y, p);
        let zz = square_mod(&self.z, p);
        let xx = square_mod(&self.x, p);

        let m = (&xx * 3u32 + mul_mod(&curve.a, &square_mod(&zz, p), p)) % p;
        let s = (mul_mod(&self.x, &yy, p) << 2u32) % p;

        let x3 = sub_mod(&square_mod(&m, p), &((&s << 1u32) % p), p);
        let yyyy8 = (square_mod(&yy, p) << 3u32) % p;
        let y3 = sub_mod(&mul_mod(&m, &sub_mod(&s, &x3, p), p), &yyyy8, p);
        let z3 = (mul_mod(&self.y, &self.z, p) << 1u32) % p;

        Jacobian::new(x3, y3, z3)
    }

    /// General addition, add-1998-cmo-2.
    ///
    /// When both inputs are the same affine point the addition formulas
    /// collapse (H = 0 and R = 0), so that case is routed to [`Self::double`].
    /// H = 0 with R != 0 means P + (-P) and falls out as Z3 = 0.
    pub fn add(&self, other: &Self, curve: &CurveParams) -> Self {
        if self.is_infinity() {
            return other.clone();
        }
        if other.is_infinity() {
            return self.clone();
        }

        let p = &curve.p;
        let zz1 = square_mod(&self.z, p);
        let zz2 = square_mod(&other.z, p);

        let s1 = mul_mod(&mul_mod(&self.y, &other.z, p), &zz2, p);
        let r = sub_mod(&mul_mod(&mul_mod(&other.y, &self.z, p), &zz1, p), &s1, p);
        let u1 = mul_mod(&self.x, &zz2, p);
        let h = sub_mod(&mul_mod(&other.x, &zz1, p), &u1, p);

        if h.is_zero() && r.is_zero() {
            return self.double(curve);
        }

        let hh = square_mod(&h, p);
        let hhh = mul_mod(&h, &hh, p);
        let u1hh = mul_mod(&u1, &hh, p);

        let x3 = sub_mod(
            &sub_mod(&square_mod(&r, p), &hhh, p),
            &((&u1hh << 1u32) % p),
            p,
        );
        let y3 = sub_mod(
            &mul_mod(&r, &sub_mod(&u1hh, &x3, p), p),
            &mul_mod(&s1, &hhh, p),
            p,
        );
        let z3 = mul_mod(&mul_mod(&h, &self.z, p), &other.z, p);

        Jacobian::new(x3, y3, z3)
    }

    /// Negate a point: (X, -Y, Z).
    pub fn negate(&self, curve: &CurveParams) -> Self {
        if self.is_infinity() {
            return self.clone();
        }
        Jacobian::new(self.x.clone(), neg_mod(&self.y, &curve.p), self.z.clone())
    }

    /// `scalar * self` through a 16-entry table and 4-bit windows.
    pub fn mul<S: ScalarBits>(&self, scalar: &S, curve: &CurveParams) -> Self {
        let table = PrecomputedTable::single(self, curve);
        mul_windowed(&table, scalar, curve)
    }

    /// `a * self + b * other` in a single Shamir pass.
    pub fn mul_add<S: ScalarBits>(&self, a: &S, other: &Self, b: &S, curve: &CurveParams) -> Self {
        double_scalar_mul(self, a, other, b, curve)
    }

    /// Normalize several points to affine form.
    pub fn batch_normalize(points: &[Self], curve: &CurveParams) -> Result<Vec<Affine>, CurveError> {
        points.iter().map(|p| p.to_affine(curve)).collect()
    }
}

impl Group for Jacobian {
    #[inline]
    fn identity() -> Self {
        Self::infinity()
    }

    #[inline]
    fn is_identity(&self) -> bool {
        self.is_infinity()
    }

    #[inline]
    fn generator(curve: &CurveParams) -> Self {
        curve.generator_jacobian()
    }

    #[inline]
    fn double(&self, curve: &CurveParams) -> Self {
        Jacobian::double(self, curve)
    }

    #[inline]
    fn add(&self, other: &Self, curve: &CurveParams) -> Self {
        Jacobian::add(self, other, curve)
    }

    #[inline]
    fn negate(&self, curve: &CurveParams) -> Self {
        Jacobian::negate(self, curve)
    }
}

impl From<Affine> for Jacobian {
    fn from(point: Affine) -> Self {
        Jacobian::from_affine(&point)
    }
}

impl From<&Affine> for Jacobian {
    fn from(point: &Affine) -> Self {
        Jacobian::from_affine(point)
    }
}
