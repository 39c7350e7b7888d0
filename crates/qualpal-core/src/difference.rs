//! Worst-case-safe pairwise color differences.
//!
//! [`ColorViews`] is the CVD aggregator: it precomputes, for every color in
//! the pool, its metric-space coordinates under normal vision and under each
//! configured deficiency. The effective distance between two colors is the
//! minimum metric distance over all of those views -- a palette is only as
//! distinguishable as its worst viewing condition, and taking the minimum
//! (rather than an average) guarantees every configured viewer class can
//! still tell the colors apart by at least that amount.

use crate::color::Rgb;
use crate::cvd::{simulate, CvdConfig};
use crate::metrics::Metric;

/// Per-view metric-space coordinates for a pool of colors.
///
/// View 0 is always the identity (normal vision); one further view exists
/// per configured deficiency with severity above zero. Minimum over an
/// unordered set, so the order views were configured in cannot change any
/// distance.
#[derive(Debug)]
pub struct ColorViews {
    metric: Metric,
    /// `views[v][i]` is color `i` in the metric's native space, as seen
    /// under view `v`.
    views: Vec<Vec<[f64; 3]>>,
}

impl ColorViews {
    /// Precompute all views for the given pool.
    ///
    /// Conversion happens once per color per view, so the per-pair cost in
    /// the oracle's hot loop is pure arithmetic.
    pub fn new(colors: &[Rgb], metric: Metric, cvd: &CvdConfig) -> Self {
        let mut views = Vec::with_capacity(1 + cvd.active().count());
        views.push(colors.iter().map(|&c| metric.point(c)).collect());

        for (cvd_type, severity) in cvd.active() {
            views.push(
                colors
                    .iter()
                    .map(|&c| metric.point(simulate(c, cvd_type, severity)))
                    .collect(),
            );
        }

        Self { metric, views }
    }

    /// Number of colors in the pool.
    pub fn len(&self) -> usize {
        self.views[0].len()
    }

    pub fn is_empty(&self) -> bool {
        self.views[0].is_empty()
    }

    /// Effective distance between colors `i` and `j`: the minimum metric
    /// distance over every view.
    ///
    /// Panics if either index is out of range; that is a programming error,
    /// not an input condition.
    #[inline]
    pub fn distance(&self, i: usize, j: usize) -> f64 {
        self.views
            .iter()
            .map(|view| self.metric.delta(&view[i], &view[j]))
            .fold(f64::INFINITY, f64::min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cvd::CvdType;

    fn pool() -> Vec<Rgb> {
        vec![
            Rgb::new(1.0, 0.0, 0.0),
            Rgb::new(0.0, 1.0, 0.0),
            Rgb::new(0.0, 0.0, 1.0),
            Rgb::new(0.3, 0.3, 0.3),
        ]
    }

    #[test]
    fn identity_view_matches_plain_metric() {
        let colors = pool();
        let metric = Metric::default();
        let views = ColorViews::new(&colors, metric, &CvdConfig::new());

        let expected = metric.delta(&metric.point(colors[0]), &metric.point(colors[1]));
        assert_eq!(views.distance(0, 1), expected);
    }

    #[test]
    fn distance_is_symmetric_with_zero_diagonal() {
        let cvd = CvdConfig::new().with(CvdType::Deutan, 1.0).unwrap();
        let views = ColorViews::new(&pool(), Metric::default(), &cvd);

        for i in 0..views.len() {
            assert_eq!(views.distance(i, i), 0.0);
            for j in 0..views.len() {
                assert_eq!(views.distance(i, j), views.distance(j, i));
            }
        }
    }

    #[test]
    fn cvd_view_never_increases_distance() {
        let colors = pool();
        let plain = ColorViews::new(&colors, Metric::default(), &CvdConfig::new());
        let cvd = CvdConfig::new().with(CvdType::Protan, 1.0).unwrap();
        let robust = ColorViews::new(&colors, Metric::default(), &cvd);

        for i in 0..colors.len() {
            for j in (i + 1)..colors.len() {
                assert!(robust.distance(i, j) <= plain.distance(i, j));
            }
        }
    }

    #[test]
    fn red_green_collapse_under_deutan() {
        // Red and green are far apart normally but nearly merge for a
        // fully deuteranopic viewer; the aggregated distance must reflect
        // the collapsed view.
        let colors = vec![Rgb::new(1.0, 0.0, 0.0), Rgb::new(0.0, 0.6, 0.0)];
        let plain = ColorViews::new(&colors, Metric::default(), &CvdConfig::new());
        let cvd = CvdConfig::new().with(CvdType::Deutan, 1.0).unwrap();
        let robust = ColorViews::new(&colors, Metric::default(), &cvd);

        assert!(robust.distance(0, 1) < 0.7 * plain.distance(0, 1));
    }

    #[test]
    fn view_order_does_not_change_distances() {
        let colors = pool();
        let a = CvdConfig::from_named(&[("protan", 1.0), ("deutan", 1.0)]).unwrap();
        let b = CvdConfig::from_named(&[("deutan", 1.0), ("protan", 1.0)]).unwrap();
        let va = ColorViews::new(&colors, Metric::default(), &a);
        let vb = ColorViews::new(&colors, Metric::default(), &b);

        for i in 0..colors.len() {
            for j in 0..colors.len() {
                assert_eq!(va.distance(i, j), vb.distance(i, j));
            }
        }
    }

    #[test]
    fn zero_severity_equals_no_cvd() {
        let colors = pool();
        let plain = ColorViews::new(&colors, Metric::default(), &CvdConfig::new());
        let zero = CvdConfig::new().with(CvdType::Tritan, 0.0).unwrap();
        let configured = ColorViews::new(&colors, Metric::default(), &zero);

        for i in 0..colors.len() {
            for j in 0..colors.len() {
                assert_eq!(plain.distance(i, j), configured.distance(i, j));
            }
        }
    }
}
