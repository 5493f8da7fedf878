//! Scoring-value transformers for REINVENT-style scoring configurations.
//!
//! A scoring component (molecular weight, a similarity score, a QSAR
//! prediction) produces raw values on an arbitrary scale. A transform maps
//! each raw value to a desirability value in `[0, 1]` so that heterogeneous
//! components can be aggregated into one score. This crate implements the
//! seven transform kinds understood by the downstream generator, the
//! numerically-stable primitives they are built from, the config-field
//! emitter for TOML/JSON scoring sections, and a curve sampler for previews.

pub mod catalog;
pub mod emit;
pub mod params;
pub mod preview;
pub mod transform;

pub use crate::params::{ParamError, TransformParams};
pub use crate::transform::mapping::ValueMapping;
pub use crate::transform::{Transform, TransformKind};
