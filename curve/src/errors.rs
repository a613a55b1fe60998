//! Error types for curve arithmetic and parameter decoding.

use core::fmt::{self, Display};

/// Errors that can occur in modular arithmetic or while decoding curve data.
///
/// The group law itself never fails: these only surface from operations that
/// need a modular inverse or that parse fixed-width buffers.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CurveError {
    /// The modulus handed to the exponentiation primitive was zero.
    ModulusZero,
    /// The modulus is too small for Fermat inversion (it must be a prime > 2).
    InvalidModulus,
    /// The value has no inverse, i.e. it is congruent to zero.
    NotInvertible,
    /// A fixed-width buffer had the wrong number of bytes.
    InvalidLength { expected: usize, actual: usize },
    /// The curve parameters violate a checkable invariant.
    InvalidParameters,
}

impl Display for CurveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ModulusZero => f.write_str("modular exponentiation with zero modulus"),
            Self::InvalidModulus => f.write_str("modulus must be a prime greater than 2"),
            Self::NotInvertible => f.write_str("value is not invertible"),
            Self::InvalidLength { expected, actual } => {
                write!(f, "invalid length: expected {expected} bytes, got {actual}")
            }
            Self::InvalidParameters => f.write_str("invalid curve parameters"),
        }
    }
}

impl std::error::Error for CurveError {}
