//! Error types for signing and verification.
//!
//! A signature that simply does not verify is never an error: verification
//! returns `Ok(false)`. Errors are reserved for malformed input buffers,
//! arithmetic on malformed curve parameters, and misuse of the signing and
//! extraction helpers.

use core::fmt::{self, Display};

use curve::CurveError;

/// Errors that can occur during signing, verification or secret extraction.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SignatureError {
    /// An input buffer did not have the exact length its layout requires.
    InvalidLength { expected: usize, actual: usize },
    /// Modular arithmetic failed, which only happens for malformed curve
    /// parameters (e.g. a zero or non-prime modulus).
    Arithmetic(CurveError),
    /// A secret key or nonce handed to a signing routine is zero or not
    /// below the group order.
    InvalidScalar,
    /// A point handed to a signing routine is not on the curve, or a
    /// signing step produced the point at infinity.
    InvalidPoint,
    /// Secret extraction was refused because the standard signature, the
    /// adaptor signature, or their relation to the adaptor point did not
    /// verify.
    UnverifiedAdaptor,
}

impl Display for SignatureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { expected, actual } => {
                write!(f, "invalid buffer length: expected {expected} bytes, got {actual}")
            }
            Self::Arithmetic(err) => write!(f, "arithmetic error: {err}"),
            Self::InvalidScalar => f.write_str("scalar is zero or out of range"),
            Self::InvalidPoint => f.write_str("point is not a valid curve point"),
            Self::UnverifiedAdaptor => {
                f.write_str("adaptor secret extraction requires two verifying signatures")
            }
        }
    }
}

impl std::error::Error for SignatureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Arithmetic(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CurveError> for SignatureError {
    fn from(err: CurveError) -> Self {
        match err {
            CurveError::InvalidLength { expected, actual } => {
                SignatureError::InvalidLength { expected, actual }
            }
            other => SignatureError::Arithmetic(other),
        }
    }
}

/// Reject a buffer whose length differs from `expected`.
pub(crate) fn check_length(bytes: &[u8], expected: usize) -> Result<(), SignatureError> {
    if bytes.len() != expected {
        return Err(SignatureError::InvalidLength {
            expected,
            actual: bytes.len(),
        });
    }
    Ok(())
}
