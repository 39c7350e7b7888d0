//! qualpal-core: perceptually distinct qualitative color palettes.
//!
//! This library selects a small set of N colors from a (possibly large)
//! candidate pool so that the colors are maximally mutually distinguishable
//! under human perception, including under simulated color vision
//! deficiency, optionally while respecting a fixed background color and/or
//! an existing palette that must be preserved.
//!
//! # Quick Start
//!
//! The [`Qualpal`] builder is the primary entry point:
//!
//! ```
//! use qualpal_core::Qualpal;
//!
//! let palette = Qualpal::new()
//!     .input_hex(&["#ff0000", "#00ff00", "#0000ff", "#ffff00"])?
//!     .generate(3)?;
//!
//! assert_eq!(palette.len(), 3);
//! # Ok::<(), qualpal_core::Error>(())
//! ```
//!
//! Candidate pools can also come from a built-in palette or from
//! low-discrepancy sampling of an HSL colorspace region:
//!
//! ```
//! use qualpal_core::Qualpal;
//!
//! let palette = Qualpal::new()
//!     .input_colorspace([0.0, 360.0], [0.4, 0.9], [0.3, 0.8])?
//!     .colorspace_size(500)
//!     .generate(8)?;
//! # Ok::<(), qualpal_core::Error>(())
//! ```
//!
//! # How selection works
//!
//! Distances between candidates are measured with a perceptual [`Metric`]
//! (DIN99d with a power transform by default). When a [`CvdConfig`] is set,
//! each pairwise distance is the *minimum* over normal vision and every
//! configured deficiency view -- a palette is only as good as its worst
//! viewing condition. The selection itself is a greedy farthest-point
//! sweep: starting from the globally farthest pair (or from the supplied
//! anchors), it repeatedly adds the candidate farthest from everything
//! chosen so far. This is a deterministic 2-approximation of the NP-hard
//! max-min dispersion problem, not an exact optimum.
//!
//! # Memory
//!
//! Pairwise distances come from an oracle that either materializes the full
//! N x N matrix (when it fits the configured budget, 1 GB by default) or
//! recomputes rows on demand in `O(N)` memory. Both modes return identical
//! results; a large pool is never an error, only a mode switch.

pub mod analyze;
pub mod api;
pub mod color;
pub mod cvd;
pub mod difference;
pub mod error;
pub mod grid;
pub mod matrix;
pub mod metrics;
pub mod oracle;
pub mod palettes;
pub mod selector;


pub use analyze::{analyze_palette, PaletteAnalysis};
pub use api::Qualpal;
pub use color::{Din99d, Hsl, Lab, ParseColorError, Rgb, Xyz};
pub use cvd::{simulate, CvdConfig, CvdType};
pub use error::Error;
pub use matrix::DistanceMatrix;
pub use metrics::Metric;
pub use palettes::{available_palettes, get_palette};
