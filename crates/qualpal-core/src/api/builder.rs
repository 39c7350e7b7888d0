//! Qualpal builder -- the primary ergonomic entry point for the crate.

use tracing::debug;

use crate::color::Rgb;
use crate::cvd::CvdConfig;
use crate::difference::ColorViews;
use crate::error::Error;
use crate::grid::{ColorspaceRegion, Range};
use crate::metrics::Metric;
use crate::oracle::build_oracle;
use crate::palettes::get_palette;
use crate::selector::{farthest_points, Anchors};

/// Default number of candidates sampled for colorspace input.
const DEFAULT_COLORSPACE_POINTS: usize = 1000;

/// Default memory budget for the distance oracle, in gigabytes.
const DEFAULT_MAX_MEMORY_GB: f64 = 1.0;

#[derive(Debug, Clone, Default)]
enum Input {
    #[default]
    None,
    Colors(Vec<Rgb>),
    Colorspace(ColorspaceRegion),
}

/// Builder for qualitative palette generation.
///
/// Configuration is incremental and idempotent: fallible setters validate
/// their input immediately (fail fast, before any expensive computation) and
/// each setter replaces its previous value. A configured instance can run
/// [`generate`](Self::generate) or [`extend`](Self::extend) repeatedly; both
/// are deterministic functions of the configuration.
///
/// # Example
///
/// ```
/// use qualpal_core::{Qualpal, Rgb};
///
/// let palette = Qualpal::new()
///     .input_hex(&["#ff0000", "#00ff00", "#0000ff"])?
///     .generate(2)?;
///
/// assert_eq!(palette.len(), 2);
/// # Ok::<(), qualpal_core::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Qualpal {
    input: Input,
    background: Option<Rgb>,
    cvd: CvdConfig,
    metric: Metric,
    max_memory_gb: Option<f64>,
    n_points: Option<usize>,
}

impl Qualpal {
    /// Create an unconfigured builder. An input source must be set before
    /// `generate` or `extend` can find any candidates.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an explicit list of sRGB colors as the candidate pool.
    pub fn input_rgb(mut self, colors: Vec<Rgb>) -> Self {
        self.input = Input::Colors(colors);
        self
    }

    /// Use a list of hex color strings as the candidate pool.
    pub fn input_hex<S: AsRef<str>>(mut self, colors: &[S]) -> Result<Self, Error> {
        let parsed = colors
            .iter()
            .map(|s| s.as_ref().parse::<Rgb>().map_err(Error::from))
            .collect::<Result<Vec<_>, _>>()?;
        self.input = Input::Colors(parsed);
        Ok(self)
    }

    /// Use a built-in palette (`"Package:Palette"`) as the candidate pool.
    pub fn input_palette(mut self, name: &str) -> Result<Self, Error> {
        self.input = Input::Colors(get_palette(name)?);
        Ok(self)
    }

    /// Sample the candidate pool from an HSL colorspace region.
    ///
    /// Hue is in degrees within `[-360, 360]` (span at most 360, wrapping
    /// allowed); saturation and lightness within `[0, 1]`. The number of
    /// samples is set by [`colorspace_size`](Self::colorspace_size).
    pub fn input_colorspace(mut self, h: Range, s: Range, l: Range) -> Result<Self, Error> {
        self.input = Input::Colorspace(ColorspaceRegion::new(h, s, l)?);
        Ok(self)
    }

    /// Set a background color. It takes part in every distance comparison
    /// but is never part of the returned palette.
    pub fn background(mut self, bg: Rgb) -> Self {
        self.background = Some(bg);
        self
    }

    /// Set the color vision deficiency configuration.
    pub fn cvd(mut self, cvd: CvdConfig) -> Self {
        self.cvd = cvd;
        self
    }

    /// Set the color difference metric (default: DIN99d with power
    /// transform).
    pub fn metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    /// Set the distance-oracle memory budget in gigabytes (default: 1.0).
    ///
    /// Pools whose full difference matrix would exceed the budget are
    /// processed in streaming mode; the results are identical either way.
    pub fn max_memory_gb(mut self, gb: f64) -> Self {
        self.max_memory_gb = Some(gb);
        self
    }

    /// Set the number of candidates sampled for colorspace input
    /// (default: 1000). Ignored for explicit color lists.
    pub fn colorspace_size(mut self, n_points: usize) -> Self {
        self.n_points = Some(n_points);
        self
    }

    /// Generate a palette of exactly `n` maximally distinct colors.
    pub fn generate(&self, n: usize) -> Result<Vec<Rgb>, Error> {
        self.run(&[], n)
    }

    /// Extend a fixed palette to exactly `n` colors.
    ///
    /// The returned palette starts with `fixed` unchanged and in order; the
    /// remaining `n - fixed.len()` colors are drawn from the configured
    /// candidate pool, each maximally distant from everything already in the
    /// palette. Candidates duplicating a fixed color are tolerated; they
    /// simply score zero and lose to any distinguishable alternative.
    pub fn extend(&self, fixed: &[Rgb], n: usize) -> Result<Vec<Rgb>, Error> {
        if n < fixed.len() {
            return Err(Error::InvalidFixedSize {
                requested: n,
                fixed: fixed.len(),
            });
        }
        self.run(fixed, n)
    }

    fn run(&self, fixed: &[Rgb], n: usize) -> Result<Vec<Rgb>, Error> {
        let candidates = self.candidates();
        let n_new = n - fixed.len();

        if n_new > candidates.len() {
            return Err(Error::InsufficientCandidates {
                requested: n,
                available: candidates.len() + fixed.len(),
            });
        }

        debug!(
            candidates = candidates.len(),
            fixed = fixed.len(),
            n,
            "selecting palette"
        );

        // Pool layout: candidates, then fixed anchors, then the background.
        let mut pool = candidates.clone();
        pool.extend_from_slice(fixed);
        if let Some(bg) = self.background {
            pool.push(bg);
        }

        let views = ColorViews::new(&pool, self.metric, &self.cvd);
        let oracle = build_oracle(
            views,
            self.max_memory_gb.unwrap_or(DEFAULT_MAX_MEMORY_GB),
        );

        let anchors = Anchors {
            n_fixed: fixed.len(),
            background: self.background.is_some(),
        };
        let picked = farthest_points(oracle.as_ref(), candidates.len(), anchors, n_new);

        let mut palette = fixed.to_vec();
        palette.extend(picked.into_iter().map(|i| candidates[i]));
        Ok(palette)
    }

    fn candidates(&self) -> Vec<Rgb> {
        match &self.input {
            Input::None => Vec::new(),
            Input::Colors(colors) => colors.clone(),
            Input::Colorspace(region) => {
                region.sample(self.n_points.unwrap_or(DEFAULT_COLORSPACE_POINTS))
            }
        }
    }
}
