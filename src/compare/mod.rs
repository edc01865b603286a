//! Comparison normalizer for overlaying plans of different terms

mod normalize;

pub use normalize::{Comparison, NormalizedCurve, NormalizedPoint, ProgressSample};
