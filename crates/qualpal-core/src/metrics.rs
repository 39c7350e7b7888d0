//! Color difference metrics.
//!
//! A [`Metric`] is a pure pairwise distance function selected once per
//! computation. Each variant works in its own native space; [`Metric::point`]
//! converts an sRGB color into that space up front so that the hot loop is a
//! plain arithmetic formula over two `[f64; 3]` points.

use crate::color::{Din99d, Lab, Rgb};

/// Distance metric for comparing colors.
///
/// Symmetric, non-negative, and zero for identical input points. Higher
/// values mean more distinguishable colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Metric {
    /// Euclidean distance in DIN99d space, with an optional power-law
    /// compression `d' = d^power * scale` that better matches perceived
    /// differences for large deltas. The ΔE scale of DIN99d is intentionally
    /// nonlinear at large separations, which is why this is the default.
    Din99d {
        power_transform: bool,
        power: f64,
        scale: f64,
    },
    /// The full CIEDE2000 formula. Most accurate, most expensive.
    Ciede2000,
    /// Plain Euclidean distance in Lab (ΔE*ab 1976). Cheapest, least
    /// perceptually accurate.
    Cie76,
}

impl Default for Metric {
    fn default() -> Self {
        Metric::Din99d {
            power_transform: true,
            power: 0.74,
            scale: 1.28,
        }
    }
}

impl Metric {
    /// Convert an sRGB color into this metric's native coordinates.
    pub fn point(&self, rgb: Rgb) -> [f64; 3] {
        match self {
            Metric::Din99d { .. } => {
                let d = Din99d::from(rgb);
                [d.l(), d.a(), d.b()]
            }
            Metric::Ciede2000 | Metric::Cie76 => {
                let l = Lab::from(rgb);
                [l.l(), l.a(), l.b()]
            }
        }
    }

    /// Distance between two points previously produced by [`Metric::point`].
    #[inline]
    pub fn delta(&self, a: &[f64; 3], b: &[f64; 3]) -> f64 {
        match *self {
            Metric::Din99d {
                power_transform,
                power,
                scale,
            } => {
                let d = euclidean(a, b);
                if power_transform {
                    d.powf(power) * scale
                } else {
                    d
                }
            }
            Metric::Ciede2000 => ciede2000(a, b),
            Metric::Cie76 => euclidean(a, b),
        }
    }
}

#[inline]
fn euclidean(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    let d0 = a[0] - b[0];
    let d1 = a[1] - b[1];
    let d2 = a[2] - b[2];
    (d0 * d0 + d1 * d1 + d2 * d2).sqrt()
}

/// CIEDE2000 on Lab coordinates, after Sharma, Wu & Dalal (2005).
fn ciede2000(lab1: &[f64; 3], lab2: &[f64; 3]) -> f64 {
    const POW7_25: f64 = 6_103_515_625.0; // 25^7

    let (l1, a1, b1) = (lab1[0], lab1[1], lab1[2]);
    let (l2, a2, b2) = (lab2[0], lab2[1], lab2[2]);

    let c1 = a1.hypot(b1);
    let c2 = a2.hypot(b2);
    let c_bar = 0.5 * (c1 + c2);

    let c_bar7 = c_bar.powi(7);
    let g = 0.5 * (1.0 - (c_bar7 / (c_bar7 + POW7_25)).sqrt());

    let a1p = (1.0 + g) * a1;
    let a2p = (1.0 + g) * a2;
    let c1p = a1p.hypot(b1);
    let c2p = a2p.hypot(b2);

    let h1p = hue_angle(b1, a1p);
    let h2p = hue_angle(b2, a2p);

    let dl = l2 - l1;
    let dc = c2p - c1p;

    let dh = if c1p * c2p == 0.0 {
        0.0
    } else {
        let diff = h2p - h1p;
        if diff.abs() <= 180.0 {
            diff
        } else if diff > 180.0 {
            diff - 360.0
        } else {
            diff + 360.0
        }
    };
    let dh_big = 2.0 * (c1p * c2p).sqrt() * (dh.to_radians() / 2.0).sin();

    let l_bar = 0.5 * (l1 + l2);
    let c_bar_p = 0.5 * (c1p + c2p);

    let h_bar = if c1p * c2p == 0.0 {
        h1p + h2p
    } else {
        let sum = h1p + h2p;
        if (h1p - h2p).abs() <= 180.0 {
            0.5 * sum
        } else if sum < 360.0 {
            0.5 * (sum + 360.0)
        } else {
            0.5 * (sum - 360.0)
        }
    };

    let t = 1.0 - 0.17 * (h_bar - 30.0).to_radians().cos()
        + 0.24 * (2.0 * h_bar).to_radians().cos()
        + 0.32 * (3.0 * h_bar + 6.0).to_radians().cos()
        - 0.20 * (4.0 * h_bar - 63.0).to_radians().cos();

    let d_theta = 30.0 * (-((h_bar - 275.0) / 25.0).powi(2)).exp();
    let c_bar_p7 = c_bar_p.powi(7);
    let r_c = 2.0 * (c_bar_p7 / (c_bar_p7 + POW7_25)).sqrt();
    let r_t = -(2.0 * d_theta.to_radians()).sin() * r_c;

    let l_bar50 = (l_bar - 50.0).powi(2);
    let s_l = 1.0 + 0.015 * l_bar50 / (20.0 + l_bar50).sqrt();
    let s_c = 1.0 + 0.045 * c_bar_p;
    let s_h = 1.0 + 0.015 * c_bar_p * t;

    let term_l = dl / s_l;
    let term_c = dc / s_c;
    let term_h = dh_big / s_h;

    (term_l * term_l + term_c * term_c + term_h * term_h + r_t * term_c * term_h).sqrt()
}

/// Hue angle in degrees, normalized to `[0, 360)`.
#[inline]
fn hue_angle(b: f64, a: f64) -> f64 {
    if a == 0.0 && b == 0.0 {
        0.0
    } else {
        b.atan2(a).to_degrees().rem_euclid(360.0)
    }
}
