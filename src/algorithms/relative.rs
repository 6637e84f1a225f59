//! Length-normalized edit distance.
//!
//! A raw edit distance of 3 means something different for 6-character names
//! than for 60-character names. Dividing by an input length turns the raw
//! count into a comparable score: 0.0 for identical inputs, larger for more
//! dissimilar ones.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::levenshtein::levenshtein;

/// Errors surfaced by the distance operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceError {
    /// The length chosen as the denominator is zero, so no normalized score
    /// exists for the pair.
    #[error("relative distance is undefined when the normalizing length is zero")]
    DegenerateInput,
}

/// Which input length divides the raw distance.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Denominator {
    /// Divide by the shorter input's length. Scores can exceed 1.0 when the
    /// raw distance is larger than the shorter input.
    #[default]
    Shorter,
    /// Divide by the longer input's length. True edit distances never exceed
    /// the longer length, so scores stay within `[0.0, 1.0]`.
    Longer,
}

/// Compute the relative edit distance between two strings.
///
/// The character-level Levenshtein distance divided by the shorter input's
/// length in characters. 0.0 means the strings are identical; the score is
/// deliberately not clamped, so values above 1.0 occur when the raw distance
/// exceeds the shorter length.
///
/// # Errors
///
/// Returns [`DistanceError::DegenerateInput`] when the shorter input is
/// empty, since no meaningful normalization exists for it.
///
/// # Examples
///
/// ```
/// use pathdist::relative_distance;
///
/// let score = relative_distance("kitten", "sitting").unwrap();
/// assert!((score - 0.5).abs() < 1e-12);
///
/// assert!(relative_distance("", "").is_err());
/// ```
pub fn relative_distance(a: &str, b: &str) -> Result<f64, DistanceError> {
    relative_distance_with(a, b, |x, y| levenshtein(x, y) as f64, Denominator::Shorter)
}

/// Compute a relative distance with a caller-supplied raw distance function
/// and denominator policy.
///
/// `distance_fn` must return a non-negative, finite value; any such function
/// works, including bounded or byte-level variants, or a constant for
/// testing. Lengths are counted in characters regardless of what the
/// function itself counts.
///
/// # Errors
///
/// Returns [`DistanceError::DegenerateInput`] when the input selected by
/// `denominator` has length zero. Note that under [`Denominator::Shorter`]
/// one empty input is enough to make the pair degenerate.
///
/// # Examples
///
/// ```
/// use pathdist::{levenshtein_bytes, relative_distance_with, Denominator};
///
/// let score = relative_distance_with(
///     "resume",
///     "resumes",
///     |a, b| levenshtein_bytes(a, b) as f64,
///     Denominator::Longer,
/// )
/// .unwrap();
/// assert!(score <= 1.0);
/// ```
pub fn relative_distance_with<F>(
    a: &str,
    b: &str,
    distance_fn: F,
    denominator: Denominator,
) -> Result<f64, DistanceError>
where
    F: Fn(&str, &str) -> f64,
{
    let len_a = a.chars().count();
    let len_b = b.chars().count();

    let normalizer = match denominator {
        Denominator::Shorter => len_a.min(len_b),
        Denominator::Longer => len_a.max(len_b),
    };
    if normalizer == 0 {
        return Err(DistanceError::DegenerateInput);
    }

    Ok(distance_fn(a, b) / normalizer as f64)
}
