//! Palette analysis: difference matrices for an already-chosen palette.
//!
//! A diagnostic sibling of the selector. For a given palette it reports, per
//! viewing condition, the full pairwise difference matrix, each color's
//! distance to its nearest neighbor, and the closest approach to the
//! background. It is not on the generation hot path and always materializes
//! the matrices it reports.

use std::collections::BTreeMap;

use crate::color::Rgb;
use crate::cvd::{simulate, CvdConfig, CvdType};
use crate::difference::ColorViews;
use crate::error::Error;
use crate::matrix::DistanceMatrix;
use crate::metrics::Metric;
use crate::oracle;

/// Analysis of one palette under one viewing condition.
#[derive(Debug, Clone)]
pub struct PaletteAnalysis {
    /// Full symmetric pairwise difference matrix.
    pub difference_matrix: DistanceMatrix,
    /// For each color, the distance to its nearest other palette member.
    pub min_distances: Vec<f64>,
    /// Smallest distance from any palette member to the background, when a
    /// background was supplied.
    pub bg_min_distance: Option<f64>,
}

/// Analyze a palette under normal vision and each configured CVD condition.
///
/// Conditions are labeled `"normal"`, `"protan"`, `"deutan"`, `"tritan"`.
/// An empty CVD config analyzes all three deficiencies at full severity;
/// otherwise only the configured types (with severity above zero) are
/// simulated. Each condition's colors are simulated first, then compared
/// with the chosen metric -- no min-aggregation here, since the point is to
/// show each viewing condition separately.
pub fn analyze_palette(
    colors: &[Rgb],
    metric: Metric,
    cvd: &CvdConfig,
    background: Option<Rgb>,
    max_memory_gb: f64,
) -> Result<BTreeMap<&'static str, PaletteAnalysis>, Error> {
    let conditions: Vec<(&'static str, Option<(CvdType, f64)>)> = if cvd.is_empty() {
        std::iter::once(("normal", None))
            .chain(CvdType::ALL.iter().map(|&t| (t.name(), Some((t, 1.0)))))
            .collect()
    } else {
        std::iter::once(("normal", None))
            .chain(cvd.active().map(|(t, s)| (t.name(), Some((t, s)))))
            .collect()
    };

    let mut result = BTreeMap::new();
    for (label, condition) in conditions {
        let simulated: Vec<Rgb> = match condition {
            None => colors.to_vec(),
            Some((cvd_type, severity)) => colors
                .iter()
                .map(|&c| simulate(c, cvd_type, severity))
                .collect(),
        };
        let simulated_bg = background.map(|bg| match condition {
            None => bg,
            Some((cvd_type, severity)) => simulate(bg, cvd_type, severity),
        });

        result.insert(
            label,
            analyze_condition(&simulated, simulated_bg, metric, max_memory_gb)?,
        );
    }

    Ok(result)
}

fn analyze_condition(
    colors: &[Rgb],
    background: Option<Rgb>,
    metric: Metric,
    max_memory_gb: f64,
) -> Result<PaletteAnalysis, Error> {
    let views = ColorViews::new(colors, metric, &CvdConfig::new());
    let difference_matrix =
        oracle::full_matrix(&views, max_memory_gb).ok_or(Error::MemoryLimitExceeded {
            required_gb: oracle::dense_matrix_bytes(colors.len()) / 1e9,
            limit_gb: max_memory_gb,
        })?;

    let n = difference_matrix.nrow();
    let min_distances: Vec<f64> = (0..n)
        .map(|i| {
            (0..n)
                .filter(|&j| j != i)
                .map(|j| difference_matrix.get(i, j))
                .fold(f64::INFINITY, f64::min)
        })
        .collect();

    let bg_min_distance = background.map(|bg| {
        let bg_point = metric.point(bg);
        colors
            .iter()
            .map(|&c| metric.delta(&metric.point(c), &bg_point))
            .fold(f64::INFINITY, f64::min)
    });

    Ok(PaletteAnalysis {
        difference_matrix,
        min_distances,
        bg_min_distance,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cvd::CvdType;

    fn rgb_palette() -> Vec<Rgb> {
        vec![
            Rgb::new(1.0, 0.0, 0.0),
            Rgb::new(0.0, 1.0, 0.0),
            Rgb::new(0.0, 0.0, 1.0),
        ]
    }

    #[test]
    fn default_analysis_covers_all_conditions() {
        let result =
            analyze_palette(&rgb_palette(), Metric::default(), &CvdConfig::new(), None, 1.0)
                .unwrap();

        for label in ["normal", "deutan", "protan", "tritan"] {
            let analysis = &result[label];
            assert_eq!(analysis.difference_matrix.nrow(), 3);
            assert_eq!(analysis.min_distances.len(), 3);
            assert!(analysis.bg_min_distance.is_none());
        }
    }

    #[test]
    fn matrix_has_zero_diagonal_and_positive_off_diagonal() {
        let palette: Vec<Rgb> = ["#d16822", "#d0ec6a", "#42257e", "#8fa4d2", "#2c7547"]
            .iter()
            .map(|h| h.parse().unwrap())
            .collect();

        let result =
            analyze_palette(&palette, Metric::default(), &CvdConfig::new(), None, 1.0).unwrap();

        for analysis in result.values() {
            let m = &analysis.difference_matrix;
            for i in 0..m.nrow() {
                for j in 0..m.nrow() {
                    if i == j {
                        assert_eq!(m.get(i, j), 0.0);
                    } else {
                        assert!(m.get(i, j) > 0.0);
                    }
                }
            }
        }
    }

    #[test]
    fn configured_cvd_restricts_conditions() {
        let cvd = CvdConfig::new().with(CvdType::Deutan, 0.5).unwrap();
        let result =
            analyze_palette(&rgb_palette(), Metric::default(), &cvd, None, 1.0).unwrap();

        assert!(result.contains_key("normal"));
        assert!(result.contains_key("deutan"));
        assert!(!result.contains_key("protan"));
        assert!(!result.contains_key("tritan"));
    }

    #[test]
    fn background_distance_is_reported() {
        let bg = Rgb::new(0.0, 0.0, 0.0);
        let result =
            analyze_palette(&rgb_palette(), Metric::default(), &CvdConfig::new(), Some(bg), 1.0)
                .unwrap();

        for analysis in result.values() {
            let d = analysis.bg_min_distance.unwrap();
            assert!(d > 0.0);
        }
    }

    #[test]
    fn min_distances_match_matrix() {
        let result =
            analyze_palette(&rgb_palette(), Metric::default(), &CvdConfig::new(), None, 1.0)
                .unwrap();
        let analysis = &result["normal"];
        let m = &analysis.difference_matrix;

        for i in 0..3 {
            let expected = (0..3)
                .filter(|&j| j != i)
                .map(|j| m.get(i, j))
                .fold(f64::INFINITY, f64::min);
            assert_eq!(analysis.min_distances[i], expected);
        }
    }

    #[test]
    fn memory_limit_is_enforced() {
        let palette: Vec<Rgb> = (0..64)
            .map(|i| Rgb::new(i as f64 / 64.0, 0.5, 0.5))
            .collect();
        let err = analyze_palette(
            &palette,
            Metric::default(),
            &CvdConfig::new(),
            None,
            1e-9,
        )
        .unwrap_err();
        assert!(matches!(err, Error::MemoryLimitExceeded { .. }));
    }
}
