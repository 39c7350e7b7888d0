//! Color vision deficiency simulation and configuration.
//!
//! [`simulate`] maps an sRGB color to what a viewer with the given
//! deficiency sees, using the Machado et al. (2009) matrices with linear
//! interpolation between the published severity steps. [`CvdConfig`] holds
//! the set of deficiency severities a palette must stay distinguishable
//! under; severities are validated when they are configured, not when the
//! distances are computed.

mod machado;

use std::str::FromStr;

use machado::{Mat3, DEUTAN, PROTAN, TRITAN};

use crate::color::Rgb;
use crate::error::Error;

/// The three simulated classes of color vision deficiency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CvdType {
    /// Red-deficient vision (protanomaly/protanopia).
    Protan,
    /// Green-deficient vision (deuteranomaly/deuteranopia).
    Deutan,
    /// Blue-deficient vision (tritanomaly/tritanopia).
    Tritan,
}

impl CvdType {
    /// All types, in the order analysis output reports them.
    pub const ALL: [CvdType; 3] = [CvdType::Protan, CvdType::Deutan, CvdType::Tritan];

    /// The lowercase name used by configuration maps and CLI flags.
    pub fn name(&self) -> &'static str {
        match self {
            CvdType::Protan => "protan",
            CvdType::Deutan => "deutan",
            CvdType::Tritan => "tritan",
        }
    }

    fn matrices(&self) -> &'static [Mat3; 11] {
        match self {
            CvdType::Protan => &PROTAN,
            CvdType::Deutan => &DEUTAN,
            CvdType::Tritan => &TRITAN,
        }
    }
}

impl FromStr for CvdType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "protan" => Ok(CvdType::Protan),
            "deutan" => Ok(CvdType::Deutan),
            "tritan" => Ok(CvdType::Tritan),
            _ => Err(Error::UnknownIdentifier {
                kind: "CVD type",
                name: s.to_string(),
            }),
        }
    }
}

/// Simulate color vision deficiency for a single color.
///
/// `severity` must already be validated to `[0, 1]`. Severity 0 is the
/// identity transform; intermediate severities interpolate linearly between
/// the two nearest published matrices. The transform itself is linear in the
/// sRGB components.
pub fn simulate(rgb: Rgb, cvd_type: CvdType, severity: f64) -> Rgb {
    debug_assert!((0.0..=1.0).contains(&severity));

    let table = cvd_type.matrices();

    let scaled = severity * 10.0;
    let lower = (scaled.floor() as usize).min(10);
    let upper = (scaled.ceil() as usize).min(10);
    let alpha = scaled - lower as f64;

    let lo = &table[lower];
    let hi = &table[upper];

    let v = [rgb.r(), rgb.g(), rgb.b()];
    let mut out = [0.0f64; 3];

    for (i, channel) in out.iter_mut().enumerate() {
        for j in 0..3 {
            let m = lo[i][j] + alpha * (hi[i][j] - lo[i][j]);
            *channel += m * v[j];
        }
    }

    Rgb::new(out[0], out[1], out[2])
}

/// Severity configuration for CVD-robust palette generation.
///
/// Maps each deficiency type to a severity in `[0, 1]`. A type at severity 0
/// is equivalent to leaving it out entirely, and the set is unordered: the
/// distance aggregation takes a minimum over views, so insertion order never
/// affects results.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CvdConfig {
    severities: Vec<(CvdType, f64)>,
}

impl CvdConfig {
    /// An empty configuration: only normal vision is considered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the severity for one deficiency type.
    ///
    /// Replaces any previous severity for the same type. Rejects severities
    /// outside `[0, 1]` immediately.
    pub fn with(mut self, cvd_type: CvdType, severity: f64) -> Result<Self, Error> {
        if !(0.0..=1.0).contains(&severity) {
            return Err(Error::InvalidRange {
                what: "CVD severity",
                min: 0.0,
                max: 1.0,
                value: severity,
            });
        }
        self.severities.retain(|(t, _)| *t != cvd_type);
        self.severities.push((cvd_type, severity));
        // Canonical order keeps the config equal regardless of call order.
        self.severities.sort_by_key(|(t, _)| *t);
        Ok(self)
    }

    /// Build a configuration from `(name, severity)` pairs, e.g. parsed CLI
    /// flags. Unknown names are rejected as [`Error::UnknownIdentifier`].
    pub fn from_named(pairs: &[(&str, f64)]) -> Result<Self, Error> {
        let mut config = Self::new();
        for (name, severity) in pairs {
            config = config.with(name.parse()?, *severity)?;
        }
        Ok(config)
    }

    /// The types that actually alter colors: severity strictly above zero.
    pub fn active(&self) -> impl Iterator<Item = (CvdType, f64)> + '_ {
        self.severities
            .iter()
            .copied()
            .filter(|(_, severity)| *severity > 0.0)
    }

    /// True if no active deficiency is configured.
    pub fn is_empty(&self) -> bool {
        self.active().next().is_none()
    }
}
