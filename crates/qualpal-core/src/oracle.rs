//! Memory-bounded distance oracle.
//!
//! The farthest-point selector only needs two queries: a single pairwise
//! distance, and all distances from one color to the rest of the pool. The
//! [`DistanceOracle`] trait exposes exactly those, and a factory picks one of
//! two interchangeable implementations based on the caller's memory budget:
//!
//! - [`DenseOracle`]: materializes the full symmetric matrix up front,
//!   computing each unique pair exactly once with rows built in parallel.
//! - [`StreamingOracle`]: recomputes rows on demand, keeping resident memory
//!   at `O(N)` instead of `O(N^2)`.
//!
//! Both produce bit-identical distances; only peak memory and recomputation
//! cost differ. Exceeding the dense threshold is a mode switch, never an
//! error.

use rayon::prelude::*;
use tracing::debug;

use crate::difference::ColorViews;
use crate::matrix::DistanceMatrix;

/// Bytes per decimal gigabyte; memory budgets are given in GB.
const BYTES_PER_GB: f64 = 1e9;

/// Pairwise distance queries over a candidate pool.
///
/// Construction with an empty pool is legal and yields an oracle with no
/// valid queries; any out-of-range index panics.
pub trait DistanceOracle: Sync {
    /// Number of colors in the pool.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Distance between colors `i` and `j`.
    fn distance(&self, i: usize, j: usize) -> f64;

    /// Write the distances from color `i` to every color into `out`, which
    /// must have length `len()`. `out[i]` is set to zero.
    fn distances_from(&self, i: usize, out: &mut [f64]);
}

/// Estimated dense-matrix footprint in bytes for a pool of `n` colors.
pub fn dense_matrix_bytes(n: usize) -> f64 {
    8.0 * n as f64 * n as f64
}

/// True if a pool of `n` colors fits a dense matrix within `max_memory_gb`.
pub fn fits_in_memory(n: usize, max_memory_gb: f64) -> bool {
    dense_matrix_bytes(n) <= max_memory_gb * BYTES_PER_GB
}

/// Select the oracle implementation for the given views and memory budget.
pub fn build_oracle(views: ColorViews, max_memory_gb: f64) -> Box<dyn DistanceOracle> {
    let n = views.len();
    if fits_in_memory(n, max_memory_gb) {
        debug!(n, "distance oracle: dense matrix");
        Box::new(DenseOracle::new(&views))
    } else {
        debug!(n, max_memory_gb, "distance oracle: streaming rows");
        Box::new(StreamingOracle::new(views))
    }
}

/// Oracle backed by a fully materialized distance matrix.
pub struct DenseOracle {
    matrix: DistanceMatrix,
}

impl DenseOracle {
    /// Compute the full matrix. The upper-triangle rows are independent, so
    /// they are computed in parallel and mirrored afterwards; every unique
    /// pair is evaluated exactly once.
    pub fn new(views: &ColorViews) -> Self {
        let n = views.len();
        let rows: Vec<Vec<f64>> = (0..n)
            .into_par_iter()
            .map(|i| ((i + 1)..n).map(|j| views.distance(i, j)).collect())
            .collect();

        Self {
            matrix: DistanceMatrix::from_upper_rows(n, rows),
        }
    }
}

impl DistanceOracle for DenseOracle {
    fn len(&self) -> usize {
        self.matrix.nrow()
    }

    #[inline]
    fn distance(&self, i: usize, j: usize) -> f64 {
        self.matrix.get(i, j)
    }

    fn distances_from(&self, i: usize, out: &mut [f64]) {
        out.copy_from_slice(self.matrix.row(i));
    }
}

/// Oracle that recomputes distances on demand.
///
/// Holds only the precomputed per-view coordinates (`O(N)` per view); each
/// row query costs one pass over the pool.
pub struct StreamingOracle {
    views: ColorViews,
}

impl StreamingOracle {
    pub fn new(views: ColorViews) -> Self {
        Self { views }
    }
}

impl DistanceOracle for StreamingOracle {
    fn len(&self) -> usize {
        self.views.len()
    }

    #[inline]
    fn distance(&self, i: usize, j: usize) -> f64 {
        if i == j {
            0.0
        } else {
            self.views.distance(i, j)
        }
    }

    fn distances_from(&self, i: usize, out: &mut [f64]) {
        for (j, slot) in out.iter_mut().enumerate() {
            *slot = if i == j { 0.0 } else { self.views.distance(i, j) };
        }
    }
}

/// Materialize the full difference matrix for a pool, as `analyze` reports
/// it. Unlike generation, the matrix itself is the requested output here, so
/// a budget overflow cannot degrade to streaming; the caller turns `None`
/// into an error.
pub fn full_matrix(views: &ColorViews, max_memory_gb: f64) -> Option<DistanceMatrix> {
    let n = views.len();
    if !fits_in_memory(n, max_memory_gb) {
        return None;
    }
    let rows: Vec<Vec<f64>> = (0..n)
        .into_par_iter()
        .map(|i| ((i + 1)..n).map(|j| views.distance(i, j)).collect())
        .collect();
    Some(DistanceMatrix::from_upper_rows(n, rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use crate::cvd::CvdConfig;
    use crate::metrics::Metric;

    fn views(n: usize) -> ColorViews {
        // Deterministic spread of colors across the RGB cube.
        let colors: Vec<Rgb> = (0..n)
            .map(|i| {
                let t = i as f64 / n as f64;
                Rgb::new(t, (t * 7.0).fract(), (t * 13.0).fract())
            })
            .collect();
        ColorViews::new(&colors, Metric::default(), &CvdConfig::new())
    }

    #[test]
    fn dense_and_streaming_agree_exactly() {
        let n = 12;
        let dense = DenseOracle::new(&views(n));
        let streaming = StreamingOracle::new(views(n));

        let mut dense_row = vec![0.0; n];
        let mut streaming_row = vec![0.0; n];
        for i in 0..n {
            dense.distances_from(i, &mut dense_row);
            streaming.distances_from(i, &mut streaming_row);
            assert_eq!(dense_row, streaming_row, "row {} differs", i);
            for j in 0..n {
                assert_eq!(dense.distance(i, j), streaming.distance(i, j));
            }
        }
    }

    #[test]
    fn dense_matrix_properties() {
        let n = 8;
        let oracle = DenseOracle::new(&views(n));
        for i in 0..n {
            assert_eq!(oracle.distance(i, i), 0.0);
            for j in 0..n {
                assert_eq!(oracle.distance(i, j), oracle.distance(j, i));
                if i != j {
                    assert!(oracle.distance(i, j) > 0.0);
                }
            }
        }
    }

    #[test]
    fn factory_respects_memory_budget() {
        // 100 colors need 80 kB dense; a tiny budget forces streaming.
        assert!(fits_in_memory(100, 1.0));
        assert!(!fits_in_memory(100, 0.00001));

        let boxed = build_oracle(views(10), 0.000_000_1);
        let dense = DenseOracle::new(&views(10));
        for i in 0..10 {
            for j in 0..10 {
                assert_eq!(boxed.distance(i, j), dense.distance(i, j));
            }
        }
    }

    #[test]
    fn empty_pool_is_legal() {
        let oracle = build_oracle(views(0), 1.0);
        assert!(oracle.is_empty());
    }

    #[test]
    fn full_matrix_respects_budget() {
        assert!(full_matrix(&views(6), 1.0).is_some());
        assert!(full_matrix(&views(1000), 0.000_001).is_none());
    }
}
