//! Fixed byte layouts used by the signature schemes.

use curve::{FIELD_BYTES, POINT_BYTES};

/// Size of a message digest in bytes.
pub const HASH_SIZE: usize = FIELD_BYTES;

/// Size of a serialized public key in bytes.
///
/// A public key is an uncompressed affine point `x || y`, 32 bytes each.
pub const PK_SIZE: usize = POINT_BYTES;

/// Size of a serialized secret key in bytes.
pub const SK_SIZE: usize = FIELD_BYTES;

/// Size of a serialized ECDSA signature in bytes.
///
/// A signature consists of:
/// - the scalar r (32 bytes)
/// - the scalar s (32 bytes)
/// Total: 64 bytes
pub const ECDSA_SIG_SIZE: usize = 2 * FIELD_BYTES;

/// Size of a serialized Schnorr (or adaptor) signature in bytes.
///
/// A signature consists of:
/// - the nonce commitment R as `R.x || R.y` (64 bytes)
/// - the response scalar e (32 bytes)
/// Total: 96 bytes
pub const SCHNORR_SIG_SIZE: usize = POINT_BYTES + FIELD_BYTES;
