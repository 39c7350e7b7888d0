//! CIE XYZ tristimulus values.

use super::lab::Lab;
use super::rgb::Rgb;
use super::D65;

/// A color in CIE 1931 XYZ space (D65 illuminant).
///
/// XYZ is the hub every other conversion goes through; it is rarely useful
/// on its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyz {
    x: f64,
    y: f64,
    z: f64,
}

impl Xyz {
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[inline]
    pub fn z(&self) -> f64 {
        self.z
    }
}

/// Inverse sRGB companding: gamma-encoded component to linear light.
#[inline]
fn inverse_compand(v: f64) -> f64 {
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

impl From<Rgb> for Xyz {
    fn from(rgb: Rgb) -> Self {
        const M: [[f64; 3]; 3] = [
            [0.4124564, 0.3575761, 0.1804375],
            [0.2126729, 0.7151522, 0.0721750],
            [0.0193339, 0.1191920, 0.9503041],
        ];

        let lin = [
            inverse_compand(rgb.r()),
            inverse_compand(rgb.g()),
            inverse_compand(rgb.b()),
        ];

        let dot = |row: &[f64; 3]| row[0] * lin[0] + row[1] * lin[1] + row[2] * lin[2];

        Xyz::new(dot(&M[0]), dot(&M[1]), dot(&M[2]))
    }
}

impl From<Lab> for Xyz {
    fn from(lab: Lab) -> Self {
        const EPSILON: f64 = 216.0 / 24389.0;
        const KAPPA: f64 = 24389.0 / 27.0;

        let (l, a, b) = (lab.l(), lab.a(), lab.b());

        let fy = (l + 16.0) / 116.0;
        let fx = a / 500.0 + fy;
        let fz = fy - b / 200.0;

        let xr = if fx.powi(3) > EPSILON {
            fx.powi(3)
        } else {
            (116.0 * fx - 16.0) / KAPPA
        };
        let yr = if l > KAPPA * EPSILON {
            ((l + 16.0) / 116.0).powi(3)
        } else {
            l / KAPPA
        };
        let zr = if fz.powi(3) > EPSILON {
            fz.powi(3)
        } else {
            (116.0 * fz - 16.0) / KAPPA
        };

        Xyz::new(xr * D65[0], yr * D65[1], zr * D65[2])
    }
}
