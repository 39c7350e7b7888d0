//! sRGB color type and hex parsing.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use super::hsl::Hsl;
use super::xyz::Xyz;

/// A color in gamma-encoded sRGB.
///
/// Components are in `0.0..=1.0` (mapping to `0..=255` for 8-bit). This is
/// the space candidates arrive in and palettes are returned in; all metric
/// computations convert out of it first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    r: f64,
    g: f64,
    b: f64,
}

impl Rgb {
    /// Create an sRGB color from float components in `0.0..=1.0`.
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create an sRGB color from 8-bit components.
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
        }
    }

    #[inline]
    pub fn r(&self) -> f64 {
        self.r
    }

    #[inline]
    pub fn g(&self) -> f64 {
        self.g
    }

    #[inline]
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Render as a lowercase `#rrggbb` hex string.
    ///
    /// Components are rounded and clamped to the 8-bit range, so colors that
    /// came in as hex round-trip exactly.
    pub fn hex(&self) -> String {
        let to_byte = |v: f64| (v * 255.0).round().clamp(0.0, 255.0) as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            to_byte(self.r),
            to_byte(self.g),
            to_byte(self.b)
        )
    }
}

/// Error type for parsing hex color strings.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 digits after stripping '#')
    InvalidLength,
    /// Invalid hexadecimal character encountered
    InvalidHex(ParseIntError),
}

impl From<ParseIntError> for ParseColorError {
    fn from(err: ParseIntError) -> Self {
        ParseColorError::InvalidHex(err)
    }
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::InvalidLength => {
                write!(f, "invalid hex color length (expected 3 or 6 digits)")
            }
            ParseColorError::InvalidHex(err) => {
                write!(f, "invalid hex digit: {}", err)
            }
        }
    }
}

impl std::error::Error for ParseColorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseColorError::InvalidHex(err) => Some(err),
            _ => None,
        }
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse an sRGB color from a hex string.
    ///
    /// Accepts `#RRGGBB`, `RRGGBB`, `#RGB` and `RGB` (shorthand digits are
    /// doubled), case insensitive, surrounding whitespace trimmed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        // Hex digits are ASCII; the byte slicing below requires it. A
        // multibyte string can never have 3 or 6 hex digits.
        if !s.is_ascii() {
            return Err(ParseColorError::InvalidLength);
        }

        let (r, g, b) = match s.len() {
            6 => (
                u8::from_str_radix(&s[0..2], 16)?,
                u8::from_str_radix(&s[2..4], 16)?,
                u8::from_str_radix(&s[4..6], 16)?,
            ),
            3 => {
                let d = |i: usize| u8::from_str_radix(&s[i..i + 1], 16);
                let (r, g, b) = (d(0)?, d(1)?, d(2)?);
                (r * 17, g * 17, b * 17)
            }
            _ => return Err(ParseColorError::InvalidLength),
        };

        Ok(Rgb::from_u8(r, g, b))
    }
}

impl From<Hsl> for Rgb {
    /// HSL to RGB using the hexagonal chroma construction. Hue is
    /// normalized into `[0, 360)` first, so negative hues wrap.
    fn from(hsl: Hsl) -> Self {
        let h = hsl.h().rem_euclid(360.0);
        let s = hsl.s();
        let l = hsl.l();

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let h_prime = h / 60.0;
        let x = c * (1.0 - (h_prime.rem_euclid(2.0) - 1.0).abs());

        let (r1, g1, b1) = match h_prime {
            h if h < 1.0 => (c, x, 0.0),
            h if h < 2.0 => (x, c, 0.0),
            h if h < 3.0 => (0.0, c, x),
            h if h < 4.0 => (0.0, x, c),
            h if h < 5.0 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        let m = l - c / 2.0;

        Rgb::new(r1 + m, g1 + m, b1 + m)
    }
}

impl From<Xyz> for Rgb {
    /// XYZ to sRGB: the inverse of the sRGB matrix, then gamma companding.
    fn from(xyz: Xyz) -> Self {
        const M: [[f64; 3]; 3] = [
            [3.2404542, -1.5371385, -0.4985314],
            [-0.9692660, 1.8760108, 0.0415560],
            [0.0556434, -0.2040259, 1.0572252],
        ];

        let compand = |v: f64| {
            if v > 0.003_130_8 {
                1.055 * v.powf(1.0 / 2.4) - 0.055
            } else {
                12.92 * v
            }
        };

        let v = [xyz.x(), xyz.y(), xyz.z()];
        let lin: Vec<f64> = M
            .iter()
            .map(|row| row[0] * v[0] + row[1] * v[1] + row[2] * v[2])
            .collect();

        Rgb::new(compand(lin[0]), compand(lin[1]), compand(lin[2]))
    }
}
