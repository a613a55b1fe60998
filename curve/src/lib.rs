//! Short Weierstrass curve arithmetic over a runtime-supplied 256-bit prime field.
//!
//! This crate provides modular arithmetic helpers, affine and Jacobian
//! points, the Jacobian group law, per-call window tables, and windowed
//! single- and double-scalar multiplication (Shamir's trick). The curve
//! `y^2 = x^3 + a*x + b` is an immutable [`CurveParams`] value passed to every
//! operation; presets exist for secp256r1, secp256k1 and brainpoolP256r1.

mod affine;
mod errors;
mod group;
mod jacobian;
pub mod modular;
mod msm;
mod params;
mod random;
mod table;

pub use affine::{Affine, POINT_BYTES};
pub use errors::CurveError;
pub use group::{Group, ScalarBits};
pub use jacobian::Jacobian;
pub use msm::{double_scalar_mul, mul_shamir, mul_windowed, DOUBLE_WINDOWS, SINGLE_WINDOWS};
pub use num_bigint::BigUint;
pub use params::{field_from_slice, field_to_bytes, CurveParams, FIELD_BYTES};
pub use random::random_scalar;
pub use table::{PrecomputedTable, TABLE_SIZE};
