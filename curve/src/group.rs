use num_bigint::BigUint;

use crate::params::{field_to_bytes, CurveParams, FIELD_BYTES};

/// Access to a scalar as a 256-bit big-endian bit string.
pub trait ScalarBits {
    fn to_be_bytes_256(&self) -> [u8; FIELD_BYTES];
}

impl ScalarBits for BigUint {
    #[inline]
    fn to_be_bytes_256(&self) -> [u8; FIELD_BYTES] {
        field_to_bytes(self)
    }
}

impl ScalarBits for [u8; FIELD_BYTES] {
    #[inline]
    fn to_be_bytes_256(&self) -> [u8; FIELD_BYTES] {
        *self
    }
}

/// Group law over a runtime-supplied curve.
///
/// Every operation borrows the curve parameters; implementors hold no curve
/// state of their own.
pub trait Group: Sized + Clone {
    fn identity() -> Self;
    fn is_identity(&self) -> bool;
    fn generator(curve: &CurveParams) -> Self;
    fn double(&self, curve: &CurveParams) -> Self;
    fn add(&self, other: &Self, curve: &CurveParams) -> Self;
    fn negate(&self, curve: &CurveParams) -> Self;

    #[inline]
    fn sub(&self, other: &Self, curve: &CurveParams) -> Self {
        self.add(&other.negate(curve), curve)
    }

    /// Plain double-and-add, least significant bit first.
    ///
    /// Slow but obviously correct; the windowed engine is checked against it.
    fn scalar_mul<S: ScalarBits>(&self, scalar: &S, curve: &CurveParams) -> Self {
        let bytes = scalar.to_be_bytes_256();
        let mut result = Self::identity();
        let mut temp = self.clone();

        for &byte in bytes.iter().rev() {
            let mut bits = byte;
            for _ in 0..8 {
                if bits & 1 == 1 {
                    result = result.add(&temp, curve);
                }
                temp = temp.double(curve);
                bits >>= 1;
            }
        }

        result
    }

    fn mul_u64(&self, n: u64, curve: &CurveParams) -> Self {
        if n == 0 {
            return Self::identity();
        }
        if n == 1 {
            return self.clone();
        }

        let mut result = Self::identity();
        let mut temp = self.clone();
        let mut bits = n;

        while bits > 0 {
            if bits & 1 == 1 {
                result = result.add(&temp, curve);
            }
            temp = temp.double(curve);
            bits >>= 1;
        }

        result
    }

    fn multi_scalar_mul<S: ScalarBits>(points: &[Self], scalars: &[S], curve: &CurveParams) -> Self {
        assert_eq!(
            points.len(),
            scalars.len(),
            "Points and scalars must have same length"
        );

        let mut result = Self::identity();
        for (point, scalar) in points.iter().zip(scalars.iter()) {
            result = result.add(&point.scalar_mul(scalar, curve), curve);
        }
        result
    }
}
