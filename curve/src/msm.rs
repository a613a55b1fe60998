use crate::group::ScalarBits;
use crate::jacobian::Jacobian;
use crate::params::CurveParams;
use crate::table::PrecomputedTable;

/// Number of 4-bit windows in a 256-bit scalar.
pub const SINGLE_WINDOWS: usize = 64;

/// Number of 2-bit windows in a 256-bit scalar.
pub const DOUBLE_WINDOWS: usize = 128;

/// `u * P` from a single-point table, scanning `u` in 4-bit windows from the
/// most significant end.
///
/// Always 64 iterations. While the accumulator is still infinity the four
/// doublings are skipped since they would not change it.
pub fn mul_windowed<S: ScalarBits>(table: &PrecomputedTable, u: &S, curve: &CurveParams) -> Jacobian {
    let bytes = u.to_be_bytes_256();
    let mut result = Jacobian::infinity();

    for step in 0..SINGLE_WINDOWS {
        if !result.is_infinity() {
            for _ in 0..4 {
                result = result.double(curve);
            }
        }

        let byte = bytes[step / 2];
        let window = if step % 2 == 0 { byte >> 4 } else { byte & 0x0f };
        result = result.add(&table[window as usize], curve);
    }

    result
}

/// `u1 * P1 + u2 * P2` from a pair table (Shamir's trick).
///
/// Both scalars are scanned in lockstep, 2 bits at a time, for 128
/// iterations: 256 doublings in total instead of 512 for two separate
/// multiplications.
pub fn mul_shamir<S: ScalarBits>(
    table: &PrecomputedTable,
    u1: &S,
    u2: &S,
    curve: &CurveParams,
) -> Jacobian {
    let bytes1 = u1.to_be_bytes_256();
    let bytes2 = u2.to_be_bytes_256();
    let mut result = Jacobian::infinity();

    for step in 0..DOUBLE_WINDOWS {
        result = result.double(curve);
        result = result.double(curve);

        let shift = 6 - 2 * (step % 4);
        let hi = (bytes1[step / 4] >> shift) & 0b11;
        let lo = (bytes2[step / 4] >> shift) & 0b11;
        let index = ((hi << 2) | lo) as usize;

        result = result.add(&table[index], curve);
    }

    result
}

/// Compute `a * P1 + b * P2` with a freshly built pair table.
pub fn double_scalar_mul<S: ScalarBits>(
    p1: &Jacobian,
    a: &S,
    p2: &Jacobian,
    b: &S,
    curve: &CurveParams,
) -> Jacobian {
    let table = PrecomputedTable::pair(p1, p2, curve);
    mul_shamir(&table, a, b, curve)
}

impl CurveParams {
    /// `u * G` for this curve's generator.
    pub fn mul_generator<S: ScalarBits>(&self, u: &S) -> Jacobian {
        self.generator_jacobian().mul(u, self)
    }

    /// `a * G + b * P`.
    pub fn double_scalar_mul_basepoint<S: ScalarBits>(&self, a: &S, b: &S, point: &Jacobian) -> Jacobian {
        double_scalar_mul(&self.generator_jacobian(), a, point, b, self)
    }
}
