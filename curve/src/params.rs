// secp256r1 (NIST P-256): y^2 = x^3 - 3x + b, cofactor 1
// secp256k1: y^2 = x^3 + 7, cofactor 1
// brainpoolP256r1: y^2 = x^3 + ax + b with a generic a, cofactor 1
// These are the 256-bit short Weierstrass curves the engine is exercised with;
// any other curve can be supplied through `CurveParams::new`.

use hex_literal::hex;
use num_bigint::BigUint;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::errors::CurveError;
use crate::modular::is_on_curve;
use crate::{Affine, Jacobian};

/// Byte width of a field element or scalar in the fixed-length encodings.
pub const FIELD_BYTES: usize = 32;

const P256_P: [u8; 32] = hex!("ffffffff00000001000000000000000000000000ffffffffffffffffffffffff");
const P256_A: [u8; 32] = hex!("ffffffff00000001000000000000000000000000fffffffffffffffffffffffc");
const P256_B: [u8; 32] = hex!("5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b");
const P256_N: [u8; 32] = hex!("ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551");
const P256_GX: [u8; 32] = hex!("6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296");
const P256_GY: [u8; 32] = hex!("4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5");

const K256_P: [u8; 32] = hex!("fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f");
const K256_N: [u8; 32] = hex!("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141");
const K256_GX: [u8; 32] = hex!("79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798");
const K256_GY: [u8; 32] = hex!("483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8");

const BP256_P: [u8; 32] = hex!("a9fb57dba1eea9bc3e660a909d838d726e3bf623d52620282013481d1f6e5377");
const BP256_A: [u8; 32] = hex!("7d5a0975fc2c3057eef67530417affe7fb8055c126dc5c6ce94a4b44f330b5d9");
const BP256_B: [u8; 32] = hex!("26dc5c6ce94a4b44f330b5d9bbd77cbf958416295cf7e1ce6bccdc18ff8c07b6");
const BP256_N: [u8; 32] = hex!("a9fb57dba1eea9bc3e660a909d838d718c397aa3b561a6f7901e0e82974856a7");
const BP256_GX: [u8; 32] = hex!("8bd2aeb9cb7e57cb2c4b482ffc81b7afb9de27e1e3bd23c23a4453bd9ace3262");
const BP256_GY: [u8; 32] = hex!("547ef835c3dac4fd97f8461a14611dc9c27745132ded8e545c1d54c72f046997");

/// Parameters of a short Weierstrass curve `y^2 = x^3 + a*x + b` over `F_p`
/// with a generator `(gx, gy)` of prime order `n`.
///
/// The value is immutable configuration: every arithmetic and verification
/// call borrows it, nothing caches or mutates it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurveParams {
    /// The `a` coefficient, reduced mod p
    pub a: BigUint,
    /// The `b` coefficient, reduced mod p
    pub b: BigUint,
    /// Field modulus
    pub p: BigUint,
    /// Order of the generator subgroup
    pub n: BigUint,
    /// Generator x-coordinate
    pub gx: BigUint,
    /// Generator y-coordinate
    pub gy: BigUint,
}

impl CurveParams {
    pub fn new(a: BigUint, b: BigUint, p: BigUint, n: BigUint, gx: BigUint, gy: BigUint) -> Self {
        CurveParams { a, b, p, n, gx, gy }
    }

    /// Build parameters from six 32-byte big-endian buffers.
    ///
    /// Only the buffer lengths are checked here; see [`CurveParams::validate`].
    pub fn from_be_bytes(
        a: &[u8],
        b: &[u8],
        p: &[u8],
        n: &[u8],
        gx: &[u8],
        gy: &[u8],
    ) -> Result<Self, CurveError> {
        Ok(CurveParams {
            a: field_from_slice(a)?,
            b: field_from_slice(b)?,
            p: field_from_slice(p)?,
            n: field_from_slice(n)?,
            gx: field_from_slice(gx)?,
            gy: field_from_slice(gy)?,
        })
    }

    /// NIST P-256.
    pub fn secp256r1() -> Self {
        CurveParams {
            a: BigUint::from_bytes_be(&P256_A),
            b: BigUint::from_bytes_be(&P256_B),
            p: BigUint::from_bytes_be(&P256_P),
            n: BigUint::from_bytes_be(&P256_N),
            gx: BigUint::from_bytes_be(&P256_GX),
            gy: BigUint::from_bytes_be(&P256_GY),
        }
    }

    /// The SEC2 Koblitz curve used by Bitcoin and Ethereum.
    pub fn secp256k1() -> Self {
        CurveParams {
            a: BigUint::zero(),
            b: BigUint::from(7u32),
            p: BigUint::from_bytes_be(&K256_P),
            n: BigUint::from_bytes_be(&K256_N),
            gx: BigUint::from_bytes_be(&K256_GX),
            gy: BigUint::from_bytes_be(&K256_GY),
        }
    }

    /// brainpoolP256r1 (RFC 5639).
    pub fn brainpool_p256r1() -> Self {
        CurveParams {
            a: BigUint::from_bytes_be(&BP256_A),
            b: BigUint::from_bytes_be(&BP256_B),
            p: BigUint::from_bytes_be(&BP256_P),
            n: BigUint::from_bytes_be(&BP256_N),
            gx: BigUint::from_bytes_be(&BP256_GX),
            gy: BigUint::from_bytes_be(&BP256_GY),
        }
    }

    /// Check the invariants that can be checked cheaply: coefficients and
    /// generator reduced mod p, generator on the curve, sane moduli.
    ///
    /// Primality of `p` and `n` is assumed, not tested.
    pub fn validate(&self) -> Result<(), CurveError> {
        let three = BigUint::from(3u32);
        if self.p <= three || self.n <= BigUint::from(1u32) {
            return Err(CurveError::InvalidParameters);
        }
        if self.a >= self.p || self.b >= self.p {
            return Err(CurveError::InvalidParameters);
        }
        if !is_on_curve(&self.gx, &self.gy, &self.a, &self.b, &self.p) {
            return Err(CurveError::InvalidParameters);
        }
        Ok(())
    }

    /// Whether `(x, y)` satisfies this curve's equation with reduced coordinates.
    #[inline]
    pub fn is_on_curve(&self, x: &BigUint, y: &BigUint) -> bool {
        is_on_curve(x, y, &self.a, &self.b, &self.p)
    }

    /// The generator in affine form.
    pub fn generator(&self) -> Affine {
        Affine::new(self.gx.clone(), self.gy.clone())
    }

    /// The generator in Jacobian form.
    pub fn generator_jacobian(&self) -> Jacobian {
        Jacobian::from_affine(&self.generator())
    }

    /// `floor(n / 2)`, the upper bound of a low-S signature component.
    pub fn half_order(&self) -> BigUint {
        &self.n >> 1u32
    }
}

/// Decode one fixed-width big-endian field element.
pub fn field_from_slice(bytes: &[u8]) -> Result<BigUint, CurveError> {
    if bytes.len() != FIELD_BYTES {
        return Err(CurveError::InvalidLength {
            expected: FIELD_BYTES,
            actual: bytes.len(),
        });
    }
    Ok(BigUint::from_bytes_be(bytes))
}

/// Encode a value as a fixed-width big-endian field element.
///
/// Values wider than 256 bits keep their low 32 bytes.
pub fn field_to_bytes(value: &BigUint) -> [u8; FIELD_BYTES] {
    let bytes = value.to_bytes_be();
    let mut out = [0u8; FIELD_BYTES];
    if bytes.len() >= FIELD_BYTES {
        out.copy_from_slice(&bytes[bytes.len() - FIELD_BYTES..]);
    } else {
        out[FIELD_BYTES - bytes.len()..].copy_from_slice(&bytes);
    }
    out
}
