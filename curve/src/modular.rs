//! Modular arithmetic over `BigUint` for an arbitrary odd prime modulus.
//!
//! All helpers expect their operands to already be reduced below the modulus,
//! which is how the point and signature code calls them. The same functions
//! serve both the base field (mod p) and the scalar field (mod n).

use num_bigint::BigUint;
use num_traits::Zero;

use crate::errors::CurveError;

/// `(a + b) mod m`
#[inline]
pub fn add_mod(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    (a + b) % m
}

/// `(a - b) mod m`, for `a, b < m`.
#[inline]
pub fn sub_mod(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    // BigUint cannot go negative, so lift a by m first.
    (a + m - b) % m
}

/// `(a * b) mod m`
#[inline]
pub fn mul_mod(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    (a * b) % m
}

/// `-a mod m`, for `a < m`.
#[inline]
pub fn neg_mod(a: &BigUint, m: &BigUint) -> BigUint {
    if a.is_zero() {
        return BigUint::zero();
    }
    m - a
}

/// Modular exponentiation `base^exponent mod modulus`.
///
/// This is the only primitive the inversion path depends on.
pub fn mod_exp(
    base: &BigUint,
    exponent: &BigUint,
    modulus: &BigUint,
) -> Result<BigUint, CurveError> {
    if modulus.is_zero() {
        return Err(CurveError::ModulusZero);
    }
    Ok(base.modpow(exponent, modulus))
}

/// Modular inverse through Fermat's little theorem: `x^(p-2) mod p`.
///
/// `p` must be prime and greater than 2. The zero residue has no inverse and
/// is reported as [`CurveError::NotInvertible`].
pub fn mod_inverse(x: &BigUint, p: &BigUint) -> Result<BigUint, CurveError> {
    if p.is_zero() {
        return Err(CurveError::ModulusZero);
    }
    let two = BigUint::from(2u32);
    if *p <= two {
        return Err(CurveError::InvalidModulus);
    }

    let reduced = x % p;
    if reduced.is_zero() {
        return Err(CurveError::NotInvertible);
    }

    mod_exp(&reduced, &(p - &two), p)
}

/// Check `x < p`, `y < p` and `y^2 = x^3 + a*x + b (mod p)`.
pub fn is_on_curve(x: &BigUint, y: &BigUint, a: &BigUint, b: &BigUint, p: &BigUint) -> bool {
    if p.is_zero() || x >= p || y >= p {
        return false;
    }

    let lhs = mul_mod(y, y, p);
    let x2 = mul_mod(x, x, p);
    let x3 = mul_mod(&x2, x, p);
    let ax = mul_mod(a, x, p);
    let rhs = (x3 + ax + b) % p;

    lhs == rhs
}

/// A scalar is valid iff it is strictly below the group order.
#[inline]
pub fn is_valid_scalar(k: &BigUint, n: &BigUint) -> bool {
    k < n
}

/// True iff `value` lies in the open interval `(0, bound)`.
#[inline]
pub fn in_open_range(value: &BigUint, bound: &BigUint) -> bool {
    !value.is_zero() && value < bound
}

/// `x^2` helper used by the group law.
#[inline]
pub(crate) fn square_mod(x: &BigUint, m: &BigUint) -> BigUint {
    mul_mod(x, x, m)
}
