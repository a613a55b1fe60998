use core::array;
use core::ops::Index;

use crate::jacobian::Jacobian;
use crate::params::CurveParams;

/// Number of entries in a window table: one per 4-bit index.
pub const TABLE_SIZE: usize = 16;

/// Per-call lookup table of 16 Jacobian points; entry 0 is always infinity.
///
/// Two layouts share this type:
/// - single: `T[k] = k*P` for `k` in `0..16`, indexed by a 4-bit window;
/// - pair: `T[4i + j] = i*P1 + j*P2` for `i, j` in `0..4`, indexed by two
///   2-bit windows with the `P1` bits on top.
///
/// Tables are built from the inputs of one multiplication and dropped with
/// it; nothing is cached across calls.
#[derive(Clone, Debug)]
pub struct PrecomputedTable {
    entries: [Jacobian; TABLE_SIZE],
}

impl PrecomputedTable {
    /// `T[k] = k*P`: even entries by doubling `T[k/2]`, odd ones by adding `P`
    /// to the even entry below.
    pub fn single(point: &Jacobian, curve: &CurveParams) -> Self {
        let mut entries: [Jacobian; TABLE_SIZE] = array::from_fn(|_| Jacobian::infinity());
        entries[1] = point.clone();

        for i in 2..TABLE_SIZE {
            entries[i] = if i % 2 == 0 {
                entries[i / 2].double(curve)
            } else {
                entries[i - 1].add(&entries[1], curve)
            };
        }

        PrecomputedTable { entries }
    }

    /// `T[4i + j] = i*P1 + j*P2`.
    ///
    /// The `i = 0` row and `j = 0` column hold the small multiples of each
    /// point; every other cell is the sum of its row head and column head.
    pub fn pair(p1: &Jacobian, p2: &Jacobian, curve: &CurveParams) -> Self {
        let mut entries: [Jacobian; TABLE_SIZE] = array::from_fn(|_| Jacobian::infinity());

        // Multiples of P2 at indices 1..4.
        entries[1] = p2.clone();
        entries[2] = p2.double(curve);
        entries[3] = entries[2].add(p2, curve);

        // Multiples of P1 at indices 4, 8, 12.
        entries[4] = p1.clone();
        entries[8] = p1.double(curve);
        entries[12] = entries[8].add(p1, curve);

        for i in 1..4 {
            for j in 1..4 {
                entries[i * 4 + j] = entries[i * 4].add(&entries[j], curve);
            }
        }

        PrecomputedTable { entries }
    }

    #[inline]
    pub fn entries(&self) -> &[Jacobian; TABLE_SIZE] {
        &self.entries
    }
}

impl Index<usize> for PrecomputedTable {
    type Output = Jacobian;

    #[inline]
    fn index(&self, index: usize) -> &Jacobian {
        &self.entries[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::Group;

    #[test]
    fn test_single_table_multiples() {
        let curve = CurveParams::secp256r1();
        let g = curve.generator_jacobian();
        let table = PrecomputedTable::single(&g, &curve);

        assert!(table[0].is_infinity());
        for k in 1..TABLE_SIZE {
            let expected = g.mul_u64(k as u64, &curve);
            assert!(table[k].equals(&expected, &curve), "entry {k}");
            assert!(table[k].is_on_curve(&curve));
        }
    }

    #[test]
    fn test_pair_table_combinations() {
        let curve = CurveParams::secp256k1();
        let g = curve.generator_jacobian();
        let h = g.mul_u64(1000, &curve);
        let table = PrecomputedTable::pair(&g, &h, &curve);

        assert!(table[0].is_infinity());
        for i in 0..4u64 {
            for j in 0..4u64 {
                let expected = g.mul_u64(i, &curve).add(&h.mul_u64(j, &curve), &curve);
                let index = (i * 4 + j) as usize;
                assert!(table[index].equals(&expected, &curve), "entry ({i}, {j})");
            }
        }
    }

    #[test]
    fn test_pair_table_with_equal_points() {
        // P1 == P2 forces the add-of-equal-points path inside construction.
        let curve = CurveParams::secp256r1();
        let g = curve.generator_jacobian();
        let table = PrecomputedTable::pair(&g, &g, &curve);

        for i in 0..4u64 {
            for j in 0..4u64 {
                let index = (i * 4 + j) as usize;
                assert!(table[index].equals(&g.mul_u64(i + j, &curve), &curve));
            }
        }
    }

    #[test]
    fn test_single_table_of_infinity() {
        let curve = CurveParams::secp256r1();
        let table = PrecomputedTable::single(&Jacobian::infinity(), &curve);
        assert!(table.entries().iter().all(Jacobian::is_infinity));
    }
}
