//! Error type for the qualpal-core public API.

use thiserror::Error;

use crate::color::ParseColorError;

/// Errors surfaced by palette generation, extension and analysis.
///
/// Every variant is a caller input error detected before the expensive part
/// of a computation starts; nothing here is transient or worth retrying, and
/// no partial palette is ever returned alongside an error.
#[derive(Debug, Error)]
pub enum Error {
    /// A colorspace range or CVD severity lies outside its legal domain.
    #[error("{what} must be within [{min}, {max}], got {value}")]
    InvalidRange {
        what: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },

    /// More colors requested than the candidate pool can supply.
    #[error("requested {requested} colors but only {available} candidates are available")]
    InsufficientCandidates { requested: usize, available: usize },

    /// `extend` called with a target size smaller than the fixed palette.
    #[error("requested {requested} colors but the fixed palette already holds {fixed}")]
    InvalidFixedSize { requested: usize, fixed: usize },

    /// An unrecognized CVD type or built-in palette name.
    #[error("unknown {kind}: '{name}'")]
    UnknownIdentifier { kind: &'static str, name: String },

    /// A hex color string failed to parse.
    #[error("invalid color: {0}")]
    ParseColor(#[from] ParseColorError),

    /// A full difference matrix was required but does not fit the budget.
    /// Only `analyze` raises this; generation switches to streaming instead.
    #[error("difference matrix needs {required_gb:.2} GB but the limit is {limit_gb:.2} GB")]
    MemoryLimitExceeded { required_gb: f64, limit_gb: f64 },
}
