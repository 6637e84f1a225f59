//! Generic edit distance over token sequences.
//!
//! One dynamic program serves every token granularity in the crate: path
//! segments, grapheme clusters, or any other slice of comparable values.
//! Plain character strings go through the specialized implementation in
//! [`levenshtein`](super::levenshtein) instead.
//!
//! # Performance
//!
//! - Time complexity: O(m*n) for sequences of m and n tokens
//! - Space complexity: O(n) using the two-row representation

use smallvec::SmallVec;

/// Compute the Levenshtein edit distance between two token slices.
///
/// Tokens are compared with `==`. Insertion, deletion, and substitution each
/// cost 1, so the result is the minimum number of single-token edits that
/// turns `a` into `b`. The result is symmetric in its arguments and is 0
/// exactly when the slices are equal element-wise.
///
/// # Examples
///
/// ```
/// use pathdist::algorithms::sequence::edit_distance;
///
/// let a = ["usr", "local", "bin"];
/// let b = ["usr", "bin"];
/// assert_eq!(edit_distance(&a, &b), 1);
///
/// // Works over any comparable token type.
/// assert_eq!(edit_distance(&[1, 2, 3], &[1, 9, 3]), 1);
/// ```
#[must_use]
pub fn edit_distance<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let m = a.len();
    let n = b.len();

    // An empty side costs one edit per token on the other side.
    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Two-row dynamic program. `prev` starts as the distance from the empty
    // prefix of `a` to each prefix of `b`.
    let mut prev: SmallVec<[usize; 64]> = (0..=n).collect();
    let mut curr: SmallVec<[usize; 64]> = SmallVec::with_capacity(n + 1);

    for i in 1..=m {
        curr.clear();
        curr.push(i);

        for j in 1..=n {
            let cost = if a[i - 1] == b[j - 1] {
                prev[j - 1]
            } else {
                1 + prev[j - 1] // substitution
                    .min(prev[j]) // deletion
                    .min(curr[j - 1]) // insertion
            };
            curr.push(cost);
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Edit distance between two string-token slices with tokens lower-cased
/// before comparison.
///
/// This is the folding mode used for directory segments, where `Src` and
/// `src` should count as the same token. Folding uses the full Unicode
/// lowercase mapping, not just ASCII.
///
/// # Examples
///
/// ```
/// use pathdist::algorithms::sequence::edit_distance_ignore_case;
///
/// assert_eq!(edit_distance_ignore_case(&["Cat", "dog"], &["cat", "DOG"]), 0);
/// ```
#[must_use]
pub fn edit_distance_ignore_case<S: AsRef<str>>(a: &[S], b: &[S]) -> usize {
    let a: Vec<String> = a.iter().map(|t| t.as_ref().to_lowercase()).collect();
    let b: Vec<String> = b.iter().map(|t| t.as_ref().to_lowercase()).collect();
    edit_distance(&a, &b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sequences() {
        let empty: [&str; 0] = [];
        assert_eq!(edit_distance(&empty, &empty), 0);
        assert_eq!(edit_distance(&empty, &["a", "b", "c"]), 3);
        assert_eq!(edit_distance(&["a", "b"], &empty), 2);
    }

    #[test]
    fn test_identical_sequences() {
        let segs = ["home", "user", "docs"];
        assert_eq!(edit_distance(&segs, &segs), 0);
    }

    #[test]
    fn test_single_substitution() {
        assert_eq!(edit_distance(&["a", "b"], &["a", "c"]), 1);
    }

    #[test]
    fn test_insert_and_remove() {
        assert_eq!(edit_distance(&["a", "b", "c"], &["a", "c"]), 1);
        assert_eq!(edit_distance(&["a", "c"], &["a", "b", "c"]), 1);
    }

    #[test]
    fn test_char_tokens_match_classic_results() {
        let kitten: Vec<char> = "kitten".chars().collect();
        let sitting: Vec<char> = "sitting".chars().collect();
        assert_eq!(edit_distance(&kitten, &sitting), 3);

        let saturday: Vec<char> = "saturday".chars().collect();
        let sunday: Vec<char> = "sunday".chars().collect();
        assert_eq!(edit_distance(&saturday, &sunday), 3);
    }

    #[test]
    fn test_integer_tokens() {
        assert_eq!(edit_distance(&[1, 2, 3, 4], &[1, 3, 4]), 1);
        assert_eq!(edit_distance(&[5, 5, 5], &[6, 6, 6]), 3);
    }

    #[test]
    fn test_symmetry() {
        let a = ["x", "y", "z"];
        let b = ["x", "q"];
        assert_eq!(edit_distance(&a, &b), edit_distance(&b, &a));
    }

    #[test]
    fn test_ignore_case_folds_tokens() {
        assert_eq!(edit_distance_ignore_case(&["Cat", "dog"], &["cat", "DOG"]), 0);
        assert_eq!(edit_distance_ignore_case(&["SRC"], &["lib"]), 1);
    }

    #[test]
    fn test_ignore_case_unicode_fold() {
        assert_eq!(edit_distance_ignore_case(&["Straße"], &["straße"]), 0);
    }

    #[test]
    fn test_all_different() {
        assert_eq!(edit_distance(&["a", "b"], &["c", "d"]), 2);
    }
}
