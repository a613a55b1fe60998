//! Signing and verifying keys shared by the ECDSA and Schnorr schemes.

use curve::modular::in_open_range;
use curve::{field_from_slice, field_to_bytes, random_scalar, Affine, BigUint, CurveParams};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{HASH_SIZE, PK_SIZE, SK_SIZE};
use crate::errors::SignatureError;
use crate::{ecdsa, schnorr};

/// A secret signing key: a scalar `d` in `(0, n)`.
///
/// The key does not carry its curve; every operation takes the same
/// [`CurveParams`] the key was generated for.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigningKey {
    scalar: BigUint,
}

/// A public verifying key: the curve point `d*G`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyingKey {
    point: Affine,
}

impl SigningKey {
    /// Generates a random signing key using the provided random number generator.
    ///
    /// # Example
    ///
    /// ```
    /// use curve::CurveParams;
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use signatures::SigningKey;
    ///
    /// let curve = CurveParams::secp256r1();
    /// let mut rng = StdRng::seed_from_u64(42);
    /// let signing_key = SigningKey::random(&mut rng, &curve);
    /// ```
    pub fn random<R: Rng + ?Sized>(rng: &mut R, curve: &CurveParams) -> Self {
        Self {
            scalar: random_scalar(rng, &curve.n),
        }
    }

    /// Wrap an existing scalar, which must lie in `(0, n)`.
    pub fn from_scalar(scalar: BigUint, curve: &CurveParams) -> Result<Self, SignatureError> {
        if !in_open_range(&scalar, &curve.n) {
            return Err(SignatureError::InvalidScalar);
        }
        Ok(Self { scalar })
    }

    /// Parse a 32-byte big-endian scalar.
    pub fn from_bytes(bytes: &[u8], curve: &CurveParams) -> Result<Self, SignatureError> {
        Self::from_scalar(field_from_slice(bytes)?, curve)
    }

    pub fn to_bytes(&self) -> [u8; SK_SIZE] {
        field_to_bytes(&self.scalar)
    }

    pub fn scalar(&self) -> &BigUint {
        &self.scalar
    }

    /// Derives the public verifying key `d*G`.
    pub fn verifying_key(&self, curve: &CurveParams) -> Result<VerifyingKey, SignatureError> {
        let point = curve.mul_generator(&self.scalar).to_affine(curve)?;
        Ok(VerifyingKey { point })
    }

    /// ECDSA-sign a digest with a fresh random nonce. The result is low-S.
    pub fn sign_ecdsa<R: Rng + ?Sized>(
        &self,
        curve: &CurveParams,
        rng: &mut R,
        hash: &[u8; HASH_SIZE],
    ) -> Result<ecdsa::Signature, SignatureError> {
        loop {
            let k = random_scalar(rng, &curve.n);
            match ecdsa::sign_prehashed(curve, &self.scalar, hash, &k) {
                // r = 0 or s = 0 for this nonce; draw another.
                Err(SignatureError::InvalidScalar) => continue,
                other => return other,
            }
        }
    }

    /// Schnorr-sign a digest with a fresh random nonce.
    ///
    /// 1. Generate a random nonce `k`
    /// 2. Compute `R = k*G`
    /// 3. Compute challenge `c = H(P || R || m)`
    /// 4. Compute `e = k + c*d`
    /// 5. Return signature `(R, e)`
    pub fn sign_schnorr<R: Rng + ?Sized>(
        &self,
        curve: &CurveParams,
        rng: &mut R,
        hash: &[u8; HASH_SIZE],
    ) -> Result<schnorr::Signature, SignatureError> {
        let nonce = random_scalar(rng, &curve.n);
        schnorr::sign_prehashed(curve, &self.scalar, hash, &nonce)
    }

    /// Produce an adaptor signature against adaptor point `t` with a fresh
    /// random nonce.
    pub fn sign_adaptor<R: Rng + ?Sized>(
        &self,
        curve: &CurveParams,
        rng: &mut R,
        hash: &[u8; HASH_SIZE],
        t: &Affine,
    ) -> Result<schnorr::Signature, SignatureError> {
        let nonce = random_scalar(rng, &curve.n);
        schnorr::sign_adaptor_prehashed(curve, &self.scalar, hash, &nonce, t)
    }
}

impl VerifyingKey {
    /// Wrap a point after checking it lies on the curve.
    pub fn from_affine(point: Affine, curve: &CurveParams) -> Result<Self, SignatureError> {
        if !point.is_on_curve(curve) {
            return Err(SignatureError::InvalidPoint);
        }
        Ok(Self { point })
    }

    /// Parse a 64-byte `x || y` buffer.
    pub fn from_bytes(bytes: &[u8], curve: &CurveParams) -> Result<Self, SignatureError> {
        Self::from_affine(Affine::from_bytes(bytes)?, curve)
    }

    pub fn to_bytes(&self) -> [u8; PK_SIZE] {
        self.point.to_bytes()
    }

    pub fn as_affine(&self) -> &Affine {
        &self.point
    }

    /// Verifies an ECDSA signature on a digest.
    ///
    /// Returns `Ok(false)` for any signature that does not verify, including
    /// high-S encodings.
    pub fn verify_ecdsa(
        &self,
        curve: &CurveParams,
        hash: &[u8; HASH_SIZE],
        sig: &ecdsa::Signature,
    ) -> Result<bool, SignatureError> {
        ecdsa::verify_prehashed(curve, hash, sig, &self.point)
    }

    /// Verifies a Schnorr signature on a digest: `e*G == R + c*P`.
    pub fn verify_schnorr(
        &self,
        curve: &CurveParams,
        hash: &[u8; HASH_SIZE],
        sig: &schnorr::Signature,
    ) -> bool {
        schnorr::verify_signature(curve, hash, sig, &self.point)
    }

    /// Verifies an adaptor signature against adaptor point `t`.
    pub fn verify_adaptor(
        &self,
        curve: &CurveParams,
        hash: &[u8; HASH_SIZE],
        adaptor_sig: &schnorr::Signature,
        t: &Affine,
    ) -> Result<bool, SignatureError> {
        schnorr::verify_adaptor_signature(curve, hash, adaptor_sig, &self.point, t)
    }
}
