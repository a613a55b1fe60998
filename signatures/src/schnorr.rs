//! Schnorr signatures, adaptor signatures and adaptor-secret extraction.
//!
//! A signature is `(R, e)` with `R = k*G` and `e = k + c*d mod n`, where the
//! challenge `c = H(P.x || P.y || R.x || R.y || m) mod n` binds the signer's
//! key `P = d*G`, the nonce commitment and the message digest.
//!
//! An adaptor signature `(R, e')` is made against an adaptor point `T = t*G`:
//! the challenge is taken over `R + T` while `e' = k + c*d` omits `t`. Adding
//! `t` yields the standard signature `(R + T, e' + t)`, and anyone holding
//! both can recover `t = e - e'`.

use curve::modular::{add_mod, in_open_range, is_valid_scalar, mul_mod, neg_mod, sub_mod};
use curve::{field_from_slice, field_to_bytes, Affine, BigUint, CurveParams, Jacobian, POINT_BYTES};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::constants::{HASH_SIZE, SCHNORR_SIG_SIZE};
use crate::errors::{check_length, SignatureError};

/// A Schnorr signature consisting of a curve point and a scalar.
///
/// The signature satisfies the verification equation `e*G == R + c*P`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    /// The commitment point R = k*G (or R + T once an adaptor is completed)
    pub r: Affine,
    /// The response scalar e = k + c*d
    pub e: BigUint,
}

impl Signature {
    pub fn new(r: Affine, e: BigUint) -> Self {
        Signature { r, e }
    }

    /// Parse a 96-byte `R.x || R.y || e` buffer. Range and curve checks are
    /// left to verification.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SignatureError> {
        check_length(bytes, SCHNORR_SIG_SIZE)?;
        Ok(Signature {
            r: Affine::from_bytes(&bytes[..POINT_BYTES])?,
            e: field_from_slice(&bytes[POINT_BYTES..])?,
        })
    }

    pub fn to_bytes(&self) -> [u8; SCHNORR_SIG_SIZE] {
        let mut out = [0u8; SCHNORR_SIG_SIZE];
        out[..POINT_BYTES].copy_from_slice(&self.r.to_bytes());
        out[POINT_BYTES..].copy_from_slice(&field_to_bytes(&self.e));
        out
    }
}

/// Computes the Fiat-Shamir challenge `c = H(P.x || P.y || R.x || R.y || m) mod n`.
///
/// Every value is hashed as a fixed 32-byte big-endian field, so the
/// encoding is unambiguous. `nonce` is `R` for plain signatures and `R + T`
/// for adaptor signatures.
pub fn hash_challenge(
    curve: &CurveParams,
    pk: &Affine,
    nonce: &Affine,
    hash: &[u8; HASH_SIZE],
) -> BigUint {
    let mut hasher = Sha256::new();
    hasher.update(field_to_bytes(&pk.x));
    hasher.update(field_to_bytes(&pk.y));
    hasher.update(field_to_bytes(&nonce.x));
    hasher.update(field_to_bytes(&nonce.y));
    hasher.update(hash);
    let digest = hasher.finalize();

    BigUint::from_bytes_be(&digest) % &curve.n
}

/// Check `e*G == R + c*P` as `e*G + (n - c)*P == R`, one Shamir pass.
fn check_equation(
    curve: &CurveParams,
    pk: &Affine,
    commitment: &Affine,
    challenge: &BigUint,
    response: &BigUint,
) -> bool {
    let minus_c = neg_mod(challenge, &curve.n);
    let lhs = curve.double_scalar_mul_basepoint(response, &minus_c, &Jacobian::from_affine(pk));
    lhs.equals(&Jacobian::from_affine(commitment), curve)
}

/// Verify a Schnorr signature given as raw buffers.
///
/// `sig` must be 96 bytes and `pk` 64 bytes, otherwise
/// [`SignatureError::InvalidLength`]. Cryptographic rejection is `Ok(false)`.
pub fn verify(
    curve: &CurveParams,
    hash: &[u8; HASH_SIZE],
    sig: &[u8],
    pk: &[u8],
) -> Result<bool, SignatureError> {
    let sig = Signature::from_bytes(sig)?;
    let pk = Affine::from_bytes(pk)?;
    Ok(verify_signature(curve, hash, &sig, &pk))
}

/// Verify a parsed Schnorr signature.
pub fn verify_signature(
    curve: &CurveParams,
    hash: &[u8; HASH_SIZE],
    sig: &Signature,
    pk: &Affine,
) -> bool {
    if !sig.r.is_on_curve(curve) || !pk.is_on_curve(curve) || !is_valid_scalar(&sig.e, &curve.n) {
        return false;
    }

    let c = hash_challenge(curve, pk, &sig.r, hash);
    check_equation(curve, pk, &sig.r, &c, &sig.e)
}

/// Verify an adaptor signature given as raw buffers against adaptor point `t`.
pub fn verify_adaptor(
    curve: &CurveParams,
    hash: &[u8; HASH_SIZE],
    adaptor_sig: &[u8],
    pk: &[u8],
    t: &Affine,
) -> Result<bool, SignatureError> {
    let adaptor_sig = Signature::from_bytes(adaptor_sig)?;
    let pk = Affine::from_bytes(pk)?;
    verify_adaptor_signature(curve, hash, &adaptor_sig, &pk, t)
}

/// Like [`verify_adaptor`], with the adaptor point as a 64-byte `x || y` buffer.
pub fn verify_adaptor_bytes(
    curve: &CurveParams,
    hash: &[u8; HASH_SIZE],
    adaptor_sig: &[u8],
    pk: &[u8],
    t: &[u8],
) -> Result<bool, SignatureError> {
    let t = Affine::from_bytes(t)?;
    verify_adaptor(curve, hash, adaptor_sig, pk, &t)
}

/// Verify a parsed adaptor signature `(R, e')`: the challenge is taken over
/// `R + T`, the equation is `e'*G == R + c*P`.
///
/// Errors only if converting `R + T` to affine fails, which requires
/// malformed curve parameters.
pub fn verify_adaptor_signature(
    curve: &CurveParams,
    hash: &[u8; HASH_SIZE],
    adaptor_sig: &Signature,
    pk: &Affine,
    t: &Affine,
) -> Result<bool, SignatureError> {
    if !adaptor_sig.r.is_on_curve(curve)
        || !pk.is_on_curve(curve)
        || !t.is_on_curve(curve)
        || !is_valid_scalar(&adaptor_sig.e, &curve.n)
    {
        return Ok(false);
    }

    let Some(offset) = offset_nonce(curve, &adaptor_sig.r, t)? else {
        return Ok(false);
    };

    let c = hash_challenge(curve, pk, &offset, hash);
    Ok(check_equation(curve, pk, &adaptor_sig.r, &c, &adaptor_sig.e))
}

/// `R + T` in affine form, or `None` when it is the point at infinity.
fn offset_nonce(
    curve: &CurveParams,
    r: &Affine,
    t: &Affine,
) -> Result<Option<Affine>, SignatureError> {
    let sum = Jacobian::from_affine(r).add(&Jacobian::from_affine(t), curve);
    if sum.is_infinity() {
        return Ok(None);
    }
    Ok(Some(sum.to_affine(curve)?))
}

/// Recover the adaptor secret `t` from a standard signature `(R + T, e)` and
/// the adaptor signature `(R, e')` it was completed from.
///
/// Both signatures are verified first, the standard nonce must equal `R + T`,
/// and the result must satisfy `t*G == T`. If any check fails the call is
/// refused with [`SignatureError::UnverifiedAdaptor`] instead of returning an
/// unrelated scalar.
pub fn extract_secret(
    curve: &CurveParams,
    hash: &[u8; HASH_SIZE],
    sig: &[u8],
    adaptor_sig: &[u8],
    pk: &[u8],
    t: &Affine,
) -> Result<BigUint, SignatureError> {
    let sig = Signature::from_bytes(sig)?;
    let adaptor_sig = Signature::from_bytes(adaptor_sig)?;
    let pk = Affine::from_bytes(pk)?;

    if !verify_signature(curve, hash, &sig, &pk)
        || !verify_adaptor_signature(curve, hash, &adaptor_sig, &pk, t)?
    {
        return Err(SignatureError::UnverifiedAdaptor);
    }

    let expected_nonce = Jacobian::from_affine(&adaptor_sig.r).add(&Jacobian::from_affine(t), curve);
    if !expected_nonce.equals(&Jacobian::from_affine(&sig.r), curve) {
        return Err(SignatureError::UnverifiedAdaptor);
    }

    let secret = sub_mod(&sig.e, &adaptor_sig.e, &curve.n);
    if !curve.mul_generator(&secret).equals(&Jacobian::from_affine(t), curve) {
        return Err(SignatureError::UnverifiedAdaptor);
    }

    Ok(secret)
}

/// `t = (e - e') mod n` with no verification at all.
///
/// Only for callers that have already verified both signatures; on
/// unrelated inputs the result is an arbitrary scalar.
pub fn extract_secret_unchecked(
    curve: &CurveParams,
    sig: &[u8],
    adaptor_sig: &[u8],
) -> Result<BigUint, SignatureError> {
    let sig = Signature::from_bytes(sig)?;
    let adaptor_sig = Signature::from_bytes(adaptor_sig)?;
    let n = &curve.n;
    if !is_valid_scalar(&sig.e, n) || !is_valid_scalar(&adaptor_sig.e, n) {
        return Err(SignatureError::InvalidScalar);
    }
    Ok(sub_mod(&sig.e, &adaptor_sig.e, n))
}

/// Sign a digest with secret key `d` and nonce `k`, both in `(0, n)`.
pub fn sign_prehashed(
    curve: &CurveParams,
    d: &BigUint,
    hash: &[u8; HASH_SIZE],
    k: &BigUint,
) -> Result<Signature, SignatureError> {
    let (pk, r) = key_and_commitment(curve, d, k)?;
    let c = hash_challenge(curve, &pk, &r, hash);
    let e = response(curve, d, k, &c);
    Ok(Signature::new(r, e))
}

/// Produce an adaptor signature `(R, e')` against adaptor point `t`.
///
/// The result does not verify as a plain signature; it verifies under
/// [`verify_adaptor_signature`] and turns into one with
/// [`complete_adaptor`].
pub fn sign_adaptor_prehashed(
    curve: &CurveParams,
    d: &BigUint,
    hash: &[u8; HASH_SIZE],
    k: &BigUint,
    t: &Affine,
) -> Result<Signature, SignatureError> {
    if !t.is_on_curve(curve) {
        return Err(SignatureError::InvalidPoint);
    }

    let (pk, r) = key_and_commitment(curve, d, k)?;
    let offset = offset_nonce(curve, &r, t)?.ok_or(SignatureError::InvalidPoint)?;
    let c = hash_challenge(curve, &pk, &offset, hash);
    let e = response(curve, d, k, &c);
    Ok(Signature::new(r, e))
}

/// Turn an adaptor signature `(R, e')` into the standard signature
/// `(R + t*G, e' + t)` using the adaptor secret `t`.
pub fn complete_adaptor(
    curve: &CurveParams,
    adaptor_sig: &Signature,
    t: &BigUint,
) -> Result<Signature, SignatureError> {
    let n = &curve.n;
    if !in_open_range(t, n) || !is_valid_scalar(&adaptor_sig.e, n) {
        return Err(SignatureError::InvalidScalar);
    }
    if !adaptor_sig.r.is_on_curve(curve) {
        return Err(SignatureError::InvalidPoint);
    }

    let t_point = curve.mul_generator(t).to_affine(curve)?;
    let r = offset_nonce(curve, &adaptor_sig.r, &t_point)?.ok_or(SignatureError::InvalidPoint)?;
    Ok(Signature::new(r, add_mod(&adaptor_sig.e, t, n)))
}

/// `(d*G, k*G)` after range-checking both scalars.
fn key_and_commitment(
    curve: &CurveParams,
    d: &BigUint,
    k: &BigUint,
) -> Result<(Affine, Affine), SignatureError> {
    let n = &curve.n;
    if !in_open_range(d, n) || !in_open_range(k, n) {
        return Err(SignatureError::InvalidScalar);
    }
    let pk = curve.mul_generator(d).to_affine(curve)?;
    let r = curve.mul_generator(k).to_affine(curve)?;
    Ok((pk, r))
}

/// `k + c*d mod n`
fn response(curve: &CurveParams, d: &BigUint, k: &BigUint, c: &BigUint) -> BigUint {
    let n = &curve.n;
    add_mod(k, &mul_mod(c, d, n), n)
}
