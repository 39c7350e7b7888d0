//! HSL color type.

use super::rgb::Rgb;

/// A color in HSL space.
///
/// Hue is in degrees, saturation and lightness in `0.0..=1.0`. Used by the
/// colorspace input mode, which samples candidate colors over HSL ranges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    h: f64,
    s: f64,
    l: f64,
}

impl Hsl {
    #[inline]
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    #[inline]
    pub fn h(&self) -> f64 {
        self.h
    }

    #[inline]
    pub fn s(&self) -> f64 {
        self.s
    }

    #[inline]
    pub fn l(&self) -> f64 {
        self.l
    }
}

impl From<Rgb> for Hsl {
    fn from(rgb: Rgb) -> Self {
        let (r, g, b) = (rgb.r(), rgb.g(), rgb.b());

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let c = max - min;

        // Achromatic input has no meaningful hue; 0 keeps downstream
        // arithmetic finite.
        let h_prime = if c == 0.0 {
            0.0
        } else if max == r {
            ((g - b) / c).rem_euclid(6.0)
        } else if max == g {
            (b - r) / c + 2.0
        } else {
            (r - g) / c + 4.0
        };

        let l = 0.5 * (max + min);
        let s = if l == 0.0 || l == 1.0 {
            0.0
        } else {
            c / (1.0 - (2.0 * l - 1.0).abs())
        };

        Hsl::new(h_prime * 60.0, s, l)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primaries_have_expected_hue() {
        let red = Hsl::from(Rgb::new(1.0, 0.0, 0.0));
        assert!((red.h() - 0.0).abs() < 1e-9);
        let green = Hsl::from(Rgb::new(0.0, 1.0, 0.0));
        assert!((green.h() - 120.0).abs() < 1e-9);
        let blue = Hsl::from(Rgb::new(0.0, 0.0, 1.0));
        assert!((blue.h() - 240.0).abs() < 1e-9);
    }

    #[test]
    fn grey_is_achromatic() {
        let grey = Hsl::from(Rgb::new(0.5, 0.5, 0.5));
        assert_eq!(grey.h(), 0.0);
        assert_eq!(grey.s(), 0.0);
        assert!((grey.l() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn round_trips_through_rgb() {
        let orig = Rgb::new(0.23, 0.5, 0.95);
        let back = Rgb::from(Hsl::from(orig));
        assert!((orig.r() - back.r()).abs() < 1e-9);
        assert!((orig.g() - back.g()).abs() < 1e-9);
        assert!((orig.b() - back.b()).abs() < 1e-9);
    }
}
