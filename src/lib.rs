//! pathdist - Normalized dissimilarity scores for strings, token sequences,
//! and filesystem paths.
//!
//! Built for fuzzy matching tasks such as detecting renamed or moved files
//! between two directory listings: score every candidate pair, then pick the
//! pairing with the lowest total distance.
//!
//! # Features
//! - Character-level Levenshtein with a bit-parallel fast path, plus byte
//!   and grapheme-cluster variants
//! - Generic edit distance over any token sequence
//! - Length-normalized relative scores with a selectable denominator
//! - Structure-aware filename and path scores with tunable weights
//! - Every composing operation accepts an injected distance function
//!
//! # Example
//!
//! ```
//! use pathdist::{filename_distance, path_distance};
//!
//! // A sibling-directory move is cheap.
//! let moved = path_distance("src/io/reader.rs", "src/net/reader.rs").unwrap();
//! assert!(moved < 0.3);
//!
//! // A changed extension costs a flat penalty.
//! let converted = filename_distance("notes.md", "notes.txt").unwrap();
//! assert!((converted - 0.2).abs() < 1e-12);
//! ```
//!
//! Scores are dissimilarities: 0.0 means identical and larger means further
//! apart. The default relative score divides by the shorter input, so it is
//! not bounded by 1.0; see [`Denominator`] for the bounded alternative.

pub mod algorithms;
pub mod paths;

pub use algorithms::{
    edit_distance, edit_distance_ignore_case, levenshtein, levenshtein_bounded,
    levenshtein_bytes, levenshtein_graphemes, normalize, normalize_pair, relative_distance,
    relative_distance_with, Denominator, DistanceError, Normalization, StringDistanceFn,
    TokenDistanceFn,
};
pub use paths::{
    filename_distance, filename_distance_with, path_distance, path_distance_with,
    FilenameOptions, DEFAULT_DIRECTORY_WEIGHT, DEFAULT_EXTENSION_WEIGHT, DEFAULT_FILENAME_WEIGHT,
    DEFAULT_STEM_WEIGHT,
};
