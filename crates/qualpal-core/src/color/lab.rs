//! CIE L*a*b* color type.

use super::rgb::Rgb;
use super::xyz::Xyz;
use super::D65;

/// A color in CIE L*a*b* space (D65 white point).
///
/// The CIE76 metric is plain Euclidean distance here, and CIEDE2000 is
/// defined in terms of these coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    l: f64,
    a: f64,
    b: f64,
}

impl Lab {
    #[inline]
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    #[inline]
    pub fn l(&self) -> f64 {
        self.l
    }

    #[inline]
    pub fn a(&self) -> f64 {
        self.a
    }

    #[inline]
    pub fn b(&self) -> f64 {
        self.b
    }
}

impl From<Xyz> for Lab {
    fn from(xyz: Xyz) -> Self {
        const EPSILON: f64 = 216.0 / 24389.0;
        const KAPPA: f64 = 24389.0 / 27.0;

        let f = |t: f64| {
            if t > EPSILON {
                t.cbrt()
            } else {
                (KAPPA * t + 16.0) / 116.0
            }
        };

        let fx = f(xyz.x() / D65[0]);
        let fy = f(xyz.y() / D65[1]);
        let fz = f(xyz.z() / D65[2]);

        Lab::new(116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz))
    }
}

impl From<Rgb> for Lab {
    #[inline]
    fn from(rgb: Rgb) -> Self {
        Lab::from(Xyz::from(rgb))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_has_lightness_100() {
        let white = Lab::from(Rgb::new(1.0, 1.0, 1.0));
        assert!((white.l() - 100.0).abs() < 1e-2);
        assert!(white.a().abs() < 1e-2);
        assert!(white.b().abs() < 1e-2);
    }

    #[test]
    fn black_has_lightness_0() {
        let black = Lab::from(Rgb::new(0.0, 0.0, 0.0));
        assert!(black.l().abs() < 1e-9);
    }

    #[test]
    fn red_is_warm() {
        // Red sits in the +a (red-green) and +b (yellow-blue) quadrant.
        let red = Lab::from(Rgb::new(1.0, 0.0, 0.0));
        assert!(red.a() > 0.0);
        assert!(red.b() > 0.0);
    }
}
