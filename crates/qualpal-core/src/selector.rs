//! Greedy farthest-point selection.
//!
//! Chooses `n` candidates maximizing the minimum pairwise distance, a greedy
//! 2-approximation for the (NP-hard) max-min dispersion problem. Exactness
//! is explicitly not guaranteed; determinism is. The pool handed to the
//! oracle is laid out as `[candidates..., anchors...]`: anchors (fixed
//! palette members and/or a background) participate in every distance
//! comparison but are never themselves picked from.

use tracing::debug;

use crate::oracle::DistanceOracle;

/// How the tail of the oracle's pool is interpreted.
///
/// Anchors sit at indices `n_candidates..` in the order fixed colors first,
/// then the background (when present). Fixed anchors count toward the
/// output; the background never does.
#[derive(Debug, Clone, Copy, Default)]
pub struct Anchors {
    /// Fixed palette members that are part of the output, first and
    /// unmodified.
    pub n_fixed: usize,
    /// Whether a background color is appended after the fixed anchors.
    pub background: bool,
}

impl Anchors {
    fn total(&self) -> usize {
        self.n_fixed + usize::from(self.background)
    }
}

/// Select `n_new` candidate indices via greedy farthest-point growth.
///
/// The selected set starts from the anchors. With no anchors at all, it is
/// seeded with the globally farthest candidate pair (both members count
/// toward the output). Each subsequent step picks the candidate maximizing
/// its distance to the nearest already-selected color, breaking ties toward
/// the lowest index so results are reproducible.
///
/// Returns candidate indices in selection order. The caller is responsible
/// for having verified that `n_new` candidates are actually available.
pub fn farthest_points(
    oracle: &dyn DistanceOracle,
    n_candidates: usize,
    anchors: Anchors,
    n_new: usize,
) -> Vec<usize> {
    debug_assert_eq!(oracle.len(), n_candidates + anchors.total());
    debug_assert!(n_new <= n_candidates);

    let mut selection = Vec::with_capacity(n_new);
    if n_new == 0 {
        return selection;
    }

    // min_dist[c] is the distance from candidate c to its nearest neighbor
    // in the selected set. Updating it one row at a time keeps the whole
    // selection at O(n * N) oracle queries and O(N) resident memory.
    let mut min_dist = vec![f64::INFINITY; n_candidates];
    let mut taken = vec![false; n_candidates];
    let mut row = vec![0.0; oracle.len()];

    let absorb = |idx: usize,
                  row: &mut [f64],
                  min_dist: &mut [f64],
                  taken: &mut [bool]| {
        if idx < n_candidates {
            taken[idx] = true;
        }
        oracle.distances_from(idx, row);
        for (slot, &d) in min_dist.iter_mut().zip(row.iter()) {
            if d < *slot {
                *slot = d;
            }
        }
    };

    if anchors.total() == 0 {
        // Seed with the globally farthest pair, scanning unique pairs row by
        // row so streaming oracles never need more than one row resident.
        let (mut best_i, mut best_j, mut best_d) = (0, 1.min(n_candidates - 1), f64::NEG_INFINITY);
        for i in 0..n_candidates {
            oracle.distances_from(i, &mut row);
            for j in (i + 1)..n_candidates {
                if row[j] > best_d {
                    best_d = row[j];
                    best_i = i;
                    best_j = j;
                }
            }
        }
        debug!(best_i, best_j, distance = best_d, "seeded with farthest pair");

        absorb(best_i, &mut row, &mut min_dist, &mut taken);
        selection.push(best_i);
        if selection.len() < n_new {
            absorb(best_j, &mut row, &mut min_dist, &mut taken);
            selection.push(best_j);
        }
    } else {
        for a in n_candidates..oracle.len() {
            absorb(a, &mut row, &mut min_dist, &mut taken);
        }
    }

    while selection.len() < n_new {
        let mut best: Option<(usize, f64)> = None;
        for c in 0..n_candidates {
            if taken[c] {
                continue;
            }
            // Strict comparison keeps the lowest index on ties.
            match best {
                Some((_, score)) if min_dist[c] <= score => {}
                _ => best = Some((c, min_dist[c])),
            }
        }

        // Candidate exhaustion is ruled out by the caller's cardinality
        // check before selection starts.
        let (next, score) = best.expect("candidate pool exhausted mid-selection");
        debug!(index = next, score, "selected candidate");

        absorb(next, &mut row, &mut min_dist, &mut taken);
        selection.push(next);
    }

    selection
}
