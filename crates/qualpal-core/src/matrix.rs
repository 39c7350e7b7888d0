//! Dense symmetric distance matrix.

/// A dense row-major N x N matrix of pairwise distances.
///
/// Invariants established at construction: zero diagonal and symmetry.
/// Diagonal and mirror cells are stored rather than optimized away; the
/// memory-budget arithmetic elsewhere assumes the full `8 * N * N` bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    n: usize,
    values: Vec<f64>,
}

impl DistanceMatrix {
    /// Build from a function producing the distance for each unique pair
    /// `(i, j)` with `i < j`. Each pair is evaluated exactly once.
    pub fn from_pairs<F>(n: usize, mut pair: F) -> Self
    where
        F: FnMut(usize, usize) -> f64,
    {
        let mut values = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = pair(i, j);
                values[i * n + j] = d;
                values[j * n + i] = d;
            }
        }
        Self { n, values }
    }

    /// Assemble from precomputed upper-triangle rows: `rows[i]` holds the
    /// distances from `i` to `i+1..n`. Used by the parallel builder, which
    /// computes the rows independently.
    pub fn from_upper_rows(n: usize, rows: Vec<Vec<f64>>) -> Self {
        debug_assert_eq!(rows.len(), n);
        let mut values = vec![0.0; n * n];
        for (i, row) in rows.iter().enumerate() {
            debug_assert_eq!(row.len(), n - i - 1);
            for (k, &d) in row.iter().enumerate() {
                let j = i + 1 + k;
                values[i * n + j] = d;
                values[j * n + i] = d;
            }
        }
        Self { n, values }
    }

    /// Number of rows (and columns).
    #[inline]
    pub fn nrow(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.n + j]
    }

    /// One full row as a slice.
    #[inline]
    pub fn row(&self, i: usize) -> &[f64] {
        &self.values[i * self.n..(i + 1) * self.n]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_pairs_is_symmetric_with_zero_diagonal() {
        let m = DistanceMatrix::from_pairs(4, |i, j| (i + j) as f64);
        for i in 0..4 {
            assert_eq!(m.get(i, i), 0.0);
            for j in 0..4 {
                assert_eq!(m.get(i, j), m.get(j, i));
            }
        }
        assert_eq!(m.get(1, 3), 4.0);
    }

    #[test]
    fn from_upper_rows_matches_from_pairs() {
        let n = 5;
        let pair = |i: usize, j: usize| (i * 10 + j) as f64;
        let rows: Vec<Vec<f64>> = (0..n)
            .map(|i| ((i + 1)..n).map(|j| pair(i, j)).collect())
            .collect();
        assert_eq!(
            DistanceMatrix::from_upper_rows(n, rows),
            DistanceMatrix::from_pairs(n, pair)
        );
    }

    #[test]
    fn empty_matrix_is_legal() {
        let m = DistanceMatrix::from_pairs(0, |_, _| unreachable!());
        assert_eq!(m.nrow(), 0);
    }
}
