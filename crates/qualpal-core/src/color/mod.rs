//! Color types and conversions.
//!
//! Every type is an immutable 3-component point in one color space:
//!
//! - [`Rgb`]: gamma-encoded sRGB in `0.0..=1.0`, the input/output space
//! - [`Hsl`]: hue/saturation/lightness, used for colorspace sampling
//! - [`Xyz`]: CIE 1931 tristimulus values (D65), the conversion hub
//! - [`Lab`]: CIE L*a*b*, the space of the CIE76 and CIEDE2000 metrics
//! - [`Din99d`]: the DIN99d uniform space, where Euclidean distance
//!   approximates perceived difference well enough to be the default metric
//!
//! Conversions are plain `From` impls chained through [`Xyz`]. They are pure
//! formulas with no failure modes; hex parsing is the only fallible entry
//! point ([`Rgb::from_str`]).

mod din99d;
mod hsl;
mod lab;
mod rgb;
mod xyz;

pub use din99d::Din99d;
pub use hsl::Hsl;
pub use lab::Lab;
pub use rgb::{ParseColorError, Rgb};
pub use xyz::Xyz;

/// D65 reference white used by every Lab conversion in this crate.
pub(crate) const D65: [f64; 3] = [0.95047, 1.0, 1.08883];
