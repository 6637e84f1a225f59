//! Core distance computations.
//!
//! Each operation is a standalone function, and the composing layers accept
//! plain function parameters rather than trait objects: any closure that
//! meets the distance contract can be swapped in. A distance function must
//! return a non-negative, finite score where 0.0 means identical, and must
//! be pure with respect to its inputs.

pub mod levenshtein;
pub mod normalize;
pub mod relative;
pub mod sequence;

pub use levenshtein::{levenshtein, levenshtein_bounded, levenshtein_bytes, levenshtein_graphemes};
pub use normalize::{normalize, normalize_pair, Normalization};
pub use relative::{relative_distance, relative_distance_with, Denominator, DistanceError};
pub use sequence::{edit_distance, edit_distance_ignore_case};

/// Owned string-distance function, for configurations that store their
/// distance rather than pass it through a generic parameter.
pub type StringDistanceFn = Box<dyn Fn(&str, &str) -> f64 + Send + Sync>;

/// Owned token-list distance function over path segments.
pub type TokenDistanceFn = Box<dyn Fn(&[String], &[String]) -> f64 + Send + Sync>;
