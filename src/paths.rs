//! Filename and path dissimilarity.
//!
//! Composes the lower-level distances into scores for rename and move
//! detection. A filename is treated as a stem plus an extension; a path is a
//! directory token list plus a filename. Each part is scored on its own and
//! the parts are folded together with fixed weights, so a changed extension
//! or a moved directory contributes a controlled amount instead of drowning
//! out the name itself.
//!
//! Scores are dissimilarities: 0.0 means identical, larger means further
//! apart, and the default stem score is not clamped to 1.0.

use std::path::{Component, Path};

use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

use crate::algorithms::normalize::{normalize, Normalization};
use crate::algorithms::relative::{relative_distance, DistanceError};
use crate::algorithms::sequence::edit_distance_ignore_case;

// ============================================================================
// Weights and options
// ============================================================================

/// Default weight of the stem distance in a filename score.
pub const DEFAULT_STEM_WEIGHT: f64 = 1.0;

/// Default penalty for a differing extension.
pub const DEFAULT_EXTENSION_WEIGHT: f64 = 0.2;

/// Default weight of the directory distance in a path score.
pub const DEFAULT_DIRECTORY_WEIGHT: f64 = 0.2;

/// Default weight of the filename distance in a path score.
pub const DEFAULT_FILENAME_WEIGHT: f64 = 1.0;

/// Options controlling how two filenames are compared.
///
/// Weights are expected to be non-negative and are not validated; a weight
/// of 0.0 disables its component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilenameOptions {
    /// Split names into stem and extension and score the parts separately.
    /// When disabled the whole name goes through the stem distance at full
    /// weight.
    pub split_extension: bool,
    /// Scales the stem distance. Only applied when `split_extension` is on.
    pub stem_weight: f64,
    /// Flat penalty added when the extensions differ. Extensions are always
    /// compared case-insensitively and never graded by edit distance.
    pub extension_weight: f64,
    /// Lowercase the stems before scoring them.
    pub case_fold: bool,
}

impl Default for FilenameOptions {
    fn default() -> Self {
        Self {
            split_extension: true,
            stem_weight: DEFAULT_STEM_WEIGHT,
            extension_weight: DEFAULT_EXTENSION_WEIGHT,
            case_fold: true,
        }
    }
}

// ============================================================================
// Filename distance
// ============================================================================

/// Split a filename into stem and extension following the platform rules of
/// [`Path::file_stem`]: a name without a `.`, or with only a leading `.`,
/// has no extension; otherwise the split is at the last `.`. A missing
/// extension compares equal to an empty one.
fn stem_and_extension(name: &str) -> (&str, Option<&str>) {
    let path = Path::new(name);
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or(name);
    let extension = path.extension().and_then(|e| e.to_str());
    (stem, extension)
}

fn extensions_match(a: Option<&str>, b: Option<&str>) -> bool {
    a.unwrap_or("").to_lowercase() == b.unwrap_or("").to_lowercase()
}

/// Score the dissimilarity of two filenames with the default options and the
/// default relative stem distance.
///
/// Stems are lowercased and scored with [`relative_distance`]; a differing
/// extension adds a flat [`DEFAULT_EXTENSION_WEIGHT`] on top.
///
/// # Errors
///
/// Returns [`DistanceError::DegenerateInput`] when the stem comparison is
/// degenerate, e.g. for two empty names.
///
/// # Examples
///
/// ```
/// use pathdist::filename_distance;
///
/// // Same stem, same extension up to case.
/// assert_eq!(filename_distance("report.TXT", "report.txt").unwrap(), 0.0);
///
/// // Same stem, different extension: only the flat penalty.
/// let score = filename_distance("report.txt", "report.csv").unwrap();
/// assert!((score - 0.2).abs() < 1e-12);
/// ```
pub fn filename_distance(name1: &str, name2: &str) -> Result<f64, DistanceError> {
    filename_distance_with(name1, name2, FilenameOptions::default(), relative_distance)
}

/// Score the dissimilarity of two filenames with explicit options and a
/// caller-supplied stem distance.
///
/// `distance_fn` receives the stems after any case folding and returns the
/// stem score, which is then scaled by the stem weight. Any fallible string
/// distance fits here, including closures over [`relative_distance_with`]
/// with a different denominator policy.
///
/// [`relative_distance_with`]: crate::algorithms::relative::relative_distance_with
///
/// # Errors
///
/// Propagates whatever error `distance_fn` reports for the stem pair.
#[instrument(level = "trace", skip(distance_fn))]
pub fn filename_distance_with<F>(
    name1: &str,
    name2: &str,
    options: FilenameOptions,
    distance_fn: F,
) -> Result<f64, DistanceError>
where
    F: Fn(&str, &str) -> Result<f64, DistanceError>,
{
    let (stem1, stem2);
    let mut stem_weight = 1.0;
    let mut extension_penalty = 0.0;

    if options.split_extension {
        let (s1, e1) = stem_and_extension(name1);
        let (s2, e2) = stem_and_extension(name2);
        stem1 = s1;
        stem2 = s2;
        stem_weight = options.stem_weight;
        if !extensions_match(e1, e2) {
            extension_penalty = options.extension_weight;
        }
    } else {
        // The whole name is the stem and carries full weight.
        stem1 = name1;
        stem2 = name2;
    }

    let stem_score = if options.case_fold {
        let folded1 = normalize(stem1, Normalization::Lowercase);
        let folded2 = normalize(stem2, Normalization::Lowercase);
        distance_fn(&folded1, &folded2)?
    } else {
        distance_fn(stem1, stem2)?
    };

    Ok(stem_score * stem_weight + extension_penalty)
}

// ============================================================================
// Path distance
// ============================================================================

/// Break a path string into directory tokens and a final filename.
///
/// Tokens follow [`Path::components`]: the root and `..` survive as ordinary
/// tokens, interior `.` segments and trailing separators do not. No
/// filesystem access and no symlink or `..` resolution takes place.
fn decompose(path: &str) -> (Vec<String>, String) {
    let mut segments: Vec<String> = Path::new(path)
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    let filename = segments.pop().unwrap_or_default();
    (segments, filename)
}

/// Score the dissimilarity of two path strings with the default weights.
///
/// The directory lists are scored with a case-folded token-level edit
/// distance scaled by [`DEFAULT_DIRECTORY_WEIGHT`], the filenames with
/// [`filename_distance`] scaled by [`DEFAULT_FILENAME_WEIGHT`]. With the
/// defaults, moving a file one directory sideways costs 0.2 while renaming
/// it costs on the order of the stem change, so renames dominate moves.
///
/// # Errors
///
/// Returns [`DistanceError::DegenerateInput`] when the filename comparison
/// is degenerate, e.g. for two empty paths.
///
/// # Examples
///
/// ```
/// use pathdist::path_distance;
///
/// let score = path_distance("a/b/report.txt", "a/c/report.txt").unwrap();
/// assert!((score - 0.2).abs() < 1e-12);
/// ```
pub fn path_distance(path1: &str, path2: &str) -> Result<f64, DistanceError> {
    path_distance_with(
        path1,
        path2,
        DEFAULT_DIRECTORY_WEIGHT,
        DEFAULT_FILENAME_WEIGHT,
        |a, b| edit_distance_ignore_case(a, b) as f64,
        filename_distance,
    )
}

/// Score the dissimilarity of two path strings with explicit weights and
/// caller-supplied component distances.
///
/// `dir_distance_fn` receives the two directory token lists; it is skipped
/// entirely when neither path has a directory part. `file_distance_fn`
/// receives the two filenames.
///
/// # Errors
///
/// Propagates whatever error `file_distance_fn` reports for the filename
/// pair.
#[instrument(level = "trace", skip(dir_distance_fn, file_distance_fn))]
pub fn path_distance_with<D, F>(
    path1: &str,
    path2: &str,
    dir_weight: f64,
    filename_weight: f64,
    dir_distance_fn: D,
    file_distance_fn: F,
) -> Result<f64, DistanceError>
where
    D: Fn(&[String], &[String]) -> f64,
    F: Fn(&str, &str) -> Result<f64, DistanceError>,
{
    let (dirs1, file1) = decompose(path1);
    let (dirs2, file2) = decompose(path2);

    let dir_component = if dirs1.is_empty() && dirs2.is_empty() {
        0.0
    } else {
        dir_distance_fn(&dirs1, &dirs2) * dir_weight
    };

    let file_component = file_distance_fn(&file1, &file2)? * filename_weight;

    trace!(dir_component, file_component, "scored path pair");

    Ok(dir_component + file_component)
}
