//! ECDSA and Schnorr signature verification over a runtime-supplied
//! short Weierstrass curve.
//!
//! This library implements:
//! - ECDSA verification restricted to low-S signatures
//! - Schnorr verification with a SHA-256 Fiat-Shamir challenge
//! - Schnorr adaptor signatures and adaptor-secret extraction
//!
//! Verification entry points take the curve parameters, a 32-byte digest and
//! fixed-length byte buffers. A buffer of the wrong length is an error; a
//! signature that does not verify is `Ok(false)`.
//!
//! # Example
//!
//! ```
//! use curve::CurveParams;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use signatures::{ecdsa, SigningKey};
//!
//! let curve = CurveParams::secp256r1();
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! let signing_key = SigningKey::random(&mut rng, &curve);
//! let verifying_key = signing_key.verifying_key(&curve).expect("key derivation");
//!
//! let digest = [0x5au8; 32];
//! let signature = signing_key.sign_ecdsa(&curve, &mut rng, &digest).expect("signing failed");
//!
//! let is_valid = ecdsa::verify(
//!     &curve,
//!     &digest,
//!     &signature.to_bytes(),
//!     &verifying_key.to_bytes(),
//! )
//! .expect("well-formed buffers");
//! assert!(is_valid);
//! ```
//!
//! # Security Considerations
//!
//! - Always use a cryptographically secure random number generator (CSRNG)
//! - Each signature must use a fresh random nonce
//! - Only trust an extracted adaptor secret from [`schnorr::extract_secret`],
//!   which verifies both signatures first

mod constants;
pub mod ecdsa;
mod errors;
mod keys;
pub mod schnorr;

#[cfg(test)]
mod tests;

pub use constants::{ECDSA_SIG_SIZE, HASH_SIZE, PK_SIZE, SCHNORR_SIG_SIZE, SK_SIZE};
pub use errors::SignatureError;
pub use keys::{SigningKey, VerifyingKey};
