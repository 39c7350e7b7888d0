//! Candidate generation over an HSL colorspace region.
//!
//! Produces exactly `n` low-discrepancy samples of the requested hue,
//! saturation and lightness ranges using a Halton sequence (bases 2, 3, 5).
//! Quasi-random sampling covers the region far more evenly than a uniform
//! random draw and, unlike a rectangular grid, hits the requested count
//! exactly; it is also fully deterministic.

use crate::color::{Hsl, Rgb};
use crate::error::Error;

/// Inclusive bounds for a colorspace dimension.
pub type Range = [f64; 2];

/// Validated HSL sampling region.
///
/// Hue is in degrees within `[-360, 360]` and may wrap through zero (e.g.
/// `[-200, 120]`); the span must not exceed 360. Saturation and lightness
/// are within `[0, 1]`. Violations are rejected here, when the region is
/// configured, never later.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorspaceRegion {
    h: Range,
    s: Range,
    l: Range,
}

impl ColorspaceRegion {
    pub fn new(h: Range, s: Range, l: Range) -> Result<Self, Error> {
        for &(value, what) in &[(h[0], "hue"), (h[1], "hue")] {
            if !(-360.0..=360.0).contains(&value) {
                return Err(Error::InvalidRange {
                    what,
                    min: -360.0,
                    max: 360.0,
                    value,
                });
            }
        }
        if h[1] - h[0] > 360.0 {
            return Err(Error::InvalidRange {
                what: "hue range width",
                min: 0.0,
                max: 360.0,
                value: h[1] - h[0],
            });
        }
        for &(range, what) in &[(s, "saturation"), (l, "lightness")] {
            for &value in &range {
                if !(0.0..=1.0).contains(&value) {
                    return Err(Error::InvalidRange {
                        what,
                        min: 0.0,
                        max: 1.0,
                        value,
                    });
                }
            }
        }
        Ok(Self { h, s, l })
    }

    /// Sample `n` colors from the region.
    pub fn sample(&self, n: usize) -> Vec<Rgb> {
        (0..n)
            .map(|i| {
                // Index 0 of a Halton sequence is degenerate (all zeros);
                // start at 1.
                let h = self.h[0] + (self.h[1] - self.h[0]) * halton(i + 1, 2);
                let s = self.s[0] + (self.s[1] - self.s[0]) * halton(i + 1, 3);
                let l = self.l[0] + (self.l[1] - self.l[0]) * halton(i + 1, 5);
                Rgb::from(Hsl::new(h.rem_euclid(360.0), s, l))
            })
            .collect()
    }
}

/// The `index`-th element of the van der Corput sequence in the given base.
fn halton(mut index: usize, base: usize) -> f64 {
    let mut fraction = 1.0;
    let mut result = 0.0;
    while index > 0 {
        fraction /= base as f64;
        result += fraction * (index % base) as f64;
        index /= base;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Hsl;

    #[test]
    fn produces_exact_count() {
        let region = ColorspaceRegion::new([0.0, 360.0], [0.0, 1.0], [0.0, 1.0]).unwrap();
        assert_eq!(region.sample(1000).len(), 1000);
        assert_eq!(region.sample(1).len(), 1);
    }

    #[test]
    fn samples_stay_within_region() {
        let region = ColorspaceRegion::new([-200.0, 120.0], [0.3, 0.8], [0.4, 0.9]).unwrap();
        let eps = 1e-6;

        for color in region.sample(1000) {
            let hsl = Hsl::from(color);
            assert!(hsl.h() >= -eps && hsl.h() <= 360.0 + eps);
            // The wrapped range [-200, 120] excludes hues in (120, 160).
            assert!(
                hsl.h() <= 120.0 + eps || hsl.h() >= 160.0 - eps,
                "hue {} inside excluded band",
                hsl.h()
            );
            assert!(hsl.s() >= 0.3 - eps && hsl.s() <= 0.8 + eps);
            assert!(hsl.l() >= 0.4 - eps && hsl.l() <= 0.9 + eps);
        }
    }

    #[test]
    fn sampling_is_deterministic() {
        let region = ColorspaceRegion::new([0.0, 360.0], [0.2, 0.9], [0.3, 0.7]).unwrap();
        assert_eq!(region.sample(64), region.sample(64));
    }

    #[test]
    fn rejects_out_of_domain_ranges() {
        assert!(matches!(
            ColorspaceRegion::new([-400.0, 0.0], [0.0, 1.0], [0.0, 1.0]),
            Err(Error::InvalidRange { .. })
        ));
        assert!(matches!(
            ColorspaceRegion::new([-300.0, 300.0], [0.0, 1.0], [0.0, 1.0]),
            Err(Error::InvalidRange { .. })
        ));
        assert!(matches!(
            ColorspaceRegion::new([0.0, 360.0], [0.0, 1.2], [0.0, 1.0]),
            Err(Error::InvalidRange { .. })
        ));
        assert!(matches!(
            ColorspaceRegion::new([0.0, 360.0], [0.0, 1.0], [-0.1, 1.0]),
            Err(Error::InvalidRange { .. })
        ));
    }

    #[test]
    fn halton_is_low_discrepancy() {
        // The first few base-2 van der Corput values are well known.
        assert_eq!(halton(1, 2), 0.5);
        assert_eq!(halton(2, 2), 0.25);
        assert_eq!(halton(3, 2), 0.75);
        assert_eq!(halton(1, 3), 1.0 / 3.0);
    }
}
