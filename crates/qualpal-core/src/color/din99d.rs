//! DIN99d uniform color space.

use std::f64::consts::PI;

use super::lab::Lab;
use super::rgb::Rgb;
use super::xyz::Xyz;

/// A color in the DIN99d uniform space.
///
/// DIN99d compresses Lab so that Euclidean distance tracks perceived
/// difference much more closely, particularly for saturated colors. It is
/// the native space of the default metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Din99d {
    l99: f64,
    a99: f64,
    b99: f64,
}

impl Din99d {
    #[inline]
    pub fn new(l99: f64, a99: f64, b99: f64) -> Self {
        Self { l99, a99, b99 }
    }

    #[inline]
    pub fn l(&self) -> f64 {
        self.l99
    }

    #[inline]
    pub fn a(&self) -> f64 {
        self.a99
    }

    #[inline]
    pub fn b(&self) -> f64 {
        self.b99
    }
}

impl From<Xyz> for Din99d {
    /// DIN99d transform: an X-axis correction against the blue-shift of the
    /// underlying Lab space, then a log compression of lightness and chroma
    /// around a 50-degree rotated hue axis.
    fn from(xyz: Xyz) -> Self {
        let x_prime = 1.12 * xyz.x() - 0.12 * xyz.z();
        let lab = Lab::from(Xyz::new(x_prime, xyz.y(), xyz.z()));

        let (l, a, b) = (lab.l(), lab.a(), lab.b());

        let u = 50.0 * PI / 180.0;
        let e = a * u.cos() + b * u.sin();
        let f = 1.14 * (b * u.cos() - a * u.sin());
        let g = e.hypot(f);

        let c99 = 22.5 * (1.0 + 0.06 * g).ln();
        let h99 = f.atan2(e) + u;

        Din99d::new(
            325.22 * (1.0 + 0.0036 * l).ln(),
            c99 * h99.cos(),
            c99 * h99.sin(),
        )
    }
}

impl From<Rgb> for Din99d {
    #[inline]
    fn from(rgb: Rgb) -> Self {
        Din99d::from(Xyz::from(rgb))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_is_origin() {
        let black = Din99d::from(Rgb::new(0.0, 0.0, 0.0));
        assert!(black.l().abs() < 1e-9);
        assert!(black.a().abs() < 1e-6);
        assert!(black.b().abs() < 1e-6);
    }

    #[test]
    fn white_lightness_near_100() {
        let white = Din99d::from(Rgb::new(1.0, 1.0, 1.0));
        assert!((white.l() - 100.0).abs() < 1.0);
    }

    #[test]
    fn distinct_colors_are_separated() {
        let red = Din99d::from(Rgb::new(1.0, 0.0, 0.0));
        let green = Din99d::from(Rgb::new(0.0, 1.0, 0.0));
        let dl = red.l() - green.l();
        let da = red.a() - green.a();
        let db = red.b() - green.b();
        assert!((dl * dl + da * da + db * db).sqrt() > 10.0);
    }
}
