//! Public API for the qualpal-core crate.
//!
//! [`Qualpal`] is the builder-style entry point: configure an input source,
//! optional background, CVD severities, metric and memory budget, then run a
//! single blocking `generate` or `extend`.

mod builder;

pub use builder::Qualpal;
