//! ECDSA over an arbitrary 256-bit short Weierstrass curve, low-S only.

use curve::modular::{add_mod, in_open_range, mod_inverse, mul_mod};
use curve::{field_from_slice, field_to_bytes, Affine, BigUint, CurveParams, Jacobian, FIELD_BYTES};
use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::constants::{ECDSA_SIG_SIZE, HASH_SIZE};
use crate::errors::{check_length, SignatureError};

/// An ECDSA signature `(r, s)`.
///
/// Only signatures with `s <= n/2` verify, so every message/key pair has
/// exactly one valid encoding per nonce.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    pub r: BigUint,
    pub s: BigUint,
}

impl Signature {
    pub fn new(r: BigUint, s: BigUint) -> Self {
        Signature { r, s }
    }

    /// Parse a 64-byte `r || s` buffer. Range checks are left to verification.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SignatureError> {
        check_length(bytes, ECDSA_SIG_SIZE)?;
        Ok(Signature {
            r: field_from_slice(&bytes[..FIELD_BYTES])?,
            s: field_from_slice(&bytes[FIELD_BYTES..])?,
        })
    }

    pub fn to_bytes(&self) -> [u8; ECDSA_SIG_SIZE] {
        let mut out = [0u8; ECDSA_SIG_SIZE];
        out[..FIELD_BYTES].copy_from_slice(&field_to_bytes(&self.r));
        out[FIELD_BYTES..].copy_from_slice(&field_to_bytes(&self.s));
        out
    }

    /// Whether `s` lies in the lower half `(0, n/2]`.
    pub fn is_low_s(&self, curve: &CurveParams) -> bool {
        !self.s.is_zero() && self.s <= curve.half_order()
    }

    /// The same signature with `s` mapped into the lower half.
    pub fn normalize_s(&self, curve: &CurveParams) -> Self {
        if self.s > curve.half_order() {
            Signature::new(self.r.clone(), &curve.n - &self.s)
        } else {
            self.clone()
        }
    }
}

/// Verify an ECDSA signature given as raw buffers.
///
/// `sig` must be exactly 64 bytes (`r || s`) and `pk` exactly 64 bytes
/// (`x || y`); anything else is [`SignatureError::InvalidLength`]. A
/// well-formed signature that does not verify yields `Ok(false)`.
pub fn verify(
    curve: &CurveParams,
    hash: &[u8; HASH_SIZE],
    sig: &[u8],
    pk: &[u8],
) -> Result<bool, SignatureError> {
    let sig = Signature::from_bytes(sig)?;
    let pk = Affine::from_bytes(pk)?;
    verify_prehashed(curve, hash, &sig, &pk)
}

/// Verify a parsed signature against a digest and public key.
///
/// 1. reject unless `r` in `(0, n)`, `s` in `(0, n/2]` and `pk` on the curve
/// 2. `w = s^-1`, `u1 = h*w`, `u2 = r*w` (mod n)
/// 3. `R' = u1*G + u2*pk` in one Shamir pass
/// 4. accept iff `R'` is finite and `x(R') mod n == r`
pub fn verify_prehashed(
    curve: &CurveParams,
    hash: &[u8; HASH_SIZE],
    sig: &Signature,
    pk: &Affine,
) -> Result<bool, SignatureError> {
    let n = &curve.n;
    if !in_open_range(&sig.r, n) || !sig.is_low_s(curve) || !pk.is_on_curve(curve) {
        return Ok(false);
    }

    let z = hash_to_scalar(hash, n);
    let w = mod_inverse(&sig.s, n)?;
    let u1 = mul_mod(&z, &w, n);
    let u2 = mul_mod(&sig.r, &w, n);

    let point = curve.double_scalar_mul_basepoint(&u1, &u2, &Jacobian::from_affine(pk));
    if point.is_infinity() {
        return Ok(false);
    }

    let x = point.to_affine(curve)?.x;
    Ok(x % n == sig.r)
}

/// Sign a digest with secret key `d` and nonce `k`, both in `(0, n)`.
///
/// The returned signature is always low-S. A nonce that yields `r = 0` or
/// `s = 0` is reported as [`SignatureError::InvalidScalar`]; pick another.
pub fn sign_prehashed(
    curve: &CurveParams,
    d: &BigUint,
    hash: &[u8; HASH_SIZE],
    k: &BigUint,
) -> Result<Signature, SignatureError> {
    let n = &curve.n;
    if !in_open_range(d, n) || !in_open_range(k, n) {
        return Err(SignatureError::InvalidScalar);
    }

    let commitment = curve.mul_generator(k).to_affine(curve)?;
    let r = commitment.x % n;
    if r.is_zero() {
        return Err(SignatureError::InvalidScalar);
    }

    let z = hash_to_scalar(hash, n);
    let k_inv = mod_inverse(k, n)?;
    let s = mul_mod(&k_inv, &add_mod(&z, &mul_mod(&r, d, n), n), n);
    if s.is_zero() {
        return Err(SignatureError::InvalidScalar);
    }

    Ok(Signature::new(r, s).normalize_s(curve))
}

/// Interpret a 32-byte digest as a big-endian integer reduced mod n.
fn hash_to_scalar(hash: &[u8; HASH_SIZE], n: &BigUint) -> BigUint {
    BigUint::from_bytes_be(hash) % n
}
