//! Character-level Levenshtein distance.
//!
//! This is the default string primitive behind the normalized scores. Inputs
//! are compared as Unicode scalar values (`char`), so a multi-byte character
//! counts as one edit like any other.
//!
//! # Performance
//!
//! Strings whose shorter side fits in a machine word (up to 64 characters)
//! use Myers' bit-parallel algorithm, which advances an entire dynamic
//! programming column per text character in a handful of word operations.
//! Longer inputs fall back to the generic two-row program in
//! [`sequence`](super::sequence). Byte-oriented and grapheme-oriented
//! variants are provided for callers that need a different unit of
//! comparison.

use ahash::AHashMap;
use smallvec::SmallVec;
use unicode_segmentation::UnicodeSegmentation;

use super::sequence::edit_distance;

/// Width of one bit-parallel block.
const MYERS_BLOCK: usize = 64;

// ============================================================================
// Core algorithm
// ============================================================================

/// Myers' bit-parallel edit distance for patterns of 1 to 64 characters.
///
/// The pattern is encoded as per-character bitmasks; each text character then
/// updates the vertical delta vectors `vp`/`vn` and the score carried at the
/// pattern's last row.
///
/// Myers, G. (1999), "A fast bit-vector algorithm for approximate string
/// matching based on dynamic programming".
fn myers_block(pattern: &[char], text: &[char]) -> usize {
    let m = pattern.len();
    debug_assert!(m >= 1 && m <= MYERS_BLOCK);

    let mut peq: AHashMap<char, u64> = AHashMap::with_capacity(m);
    for (i, &c) in pattern.iter().enumerate() {
        *peq.entry(c).or_insert(0) |= 1u64 << i;
    }

    let mut vp: u64 = !0 >> (MYERS_BLOCK - m);
    let mut vn: u64 = 0;
    let mut score = m;
    let last = 1u64 << (m - 1);

    for &tc in text {
        let eq = peq.get(&tc).copied().unwrap_or(0);

        let xv = eq | vn;
        let xh = (((eq & vp).wrapping_add(vp)) ^ vp) | eq;

        let mut hp = vn | !(xh | vp);
        let mut hn = vp & xh;

        // The horizontal delta at the last row adjusts the running distance.
        if hp & last != 0 {
            score += 1;
        } else if hn & last != 0 {
            score -= 1;
        }

        hp = (hp << 1) | 1;
        hn <<= 1;
        vp = hn | !(xv | hp);
        vn = hp & xv;
    }

    score
}

/// Two-row dynamic program with an early exit once every cell of a row
/// exceeds `max`. Serves bounded queries past the bit-parallel width.
fn dp_bounded(pattern: &[char], text: &[char], max: usize) -> Option<usize> {
    let n = pattern.len();

    let mut prev: SmallVec<[usize; 64]> = (0..=n).collect();
    let mut curr: SmallVec<[usize; 64]> = SmallVec::with_capacity(n + 1);

    for (i, &tc) in text.iter().enumerate() {
        curr.clear();
        curr.push(i + 1);
        let mut row_min = i + 1;

        for (j, &pc) in pattern.iter().enumerate() {
            let cost = if tc == pc {
                prev[j]
            } else {
                1 + prev[j].min(prev[j + 1]).min(curr[j])
            };
            row_min = row_min.min(cost);
            curr.push(cost);
        }

        // Values are non-decreasing along the diagonals, so once an entire
        // row sits above the bound the final cell does too.
        if row_min > max {
            return None;
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    let distance = prev[n];
    (distance <= max).then_some(distance)
}

// ============================================================================
// Public API
// ============================================================================

/// Compute the Levenshtein edit distance between two strings, counted in
/// characters.
///
/// # Examples
///
/// ```
/// use pathdist::levenshtein;
///
/// assert_eq!(levenshtein("kitten", "sitting"), 3);
/// assert_eq!(levenshtein("café", "cafe"), 1);
/// ```
#[must_use]
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let s: SmallVec<[char; 64]> = a.chars().collect();
    let t: SmallVec<[char; 64]> = b.chars().collect();

    // The shorter side becomes the pattern, so the bit-parallel path applies
    // as often as possible and the fallback keeps its rows small.
    let (pattern, text) = if s.len() <= t.len() { (&s, &t) } else { (&t, &s) };

    if pattern.is_empty() {
        return text.len();
    }

    if pattern.len() <= MYERS_BLOCK {
        myers_block(pattern, text)
    } else {
        edit_distance(text, pattern)
    }
}

/// Compute the Levenshtein distance only if it does not exceed `max`.
///
/// Returns `None` as soon as the bound is provably exceeded, which makes this
/// the right entry point for threshold filtering over large candidate sets.
///
/// # Examples
///
/// ```
/// use pathdist::levenshtein_bounded;
///
/// assert_eq!(levenshtein_bounded("kitten", "sitting", 3), Some(3));
/// assert_eq!(levenshtein_bounded("kitten", "sitting", 2), None);
/// ```
#[must_use]
pub fn levenshtein_bounded(a: &str, b: &str, max: usize) -> Option<usize> {
    if a == b {
        return Some(0);
    }

    let s: SmallVec<[char; 64]> = a.chars().collect();
    let t: SmallVec<[char; 64]> = b.chars().collect();

    // The length difference is a lower bound on the distance.
    if s.len().abs_diff(t.len()) > max {
        return None;
    }

    let (pattern, text) = if s.len() <= t.len() { (&s, &t) } else { (&t, &s) };

    if pattern.is_empty() {
        return (text.len() <= max).then_some(text.len());
    }

    if pattern.len() <= MYERS_BLOCK {
        let distance = myers_block(pattern, text);
        (distance <= max).then_some(distance)
    } else {
        dp_bounded(pattern, text, max)
    }
}

/// Byte-level Levenshtein distance using SIMD acceleration where the CPU
/// supports it.
///
/// Suitable for ASCII-dominant inputs such as source file paths. Multi-byte
/// characters weigh in at one edit per byte, so prefer [`levenshtein`] when
/// non-ASCII text should count per character.
#[inline]
#[must_use]
pub fn levenshtein_bytes(a: &str, b: &str) -> usize {
    triple_accel::levenshtein_exp(a.as_bytes(), b.as_bytes()) as usize
}

/// Levenshtein distance counted in extended grapheme clusters.
///
/// A user-perceived character such as a combining-mark sequence or a ZWJ
/// emoji counts as a single token. Slower than [`levenshtein`]; use it when
/// scores must track what a reader sees.
///
/// # Examples
///
/// ```
/// use pathdist::levenshtein_graphemes;
///
/// // The decomposed accent and its base letter form one cluster.
/// assert_eq!(levenshtein_graphemes("e\u{301}clair", "eclair"), 1);
/// ```
#[must_use]
pub fn levenshtein_graphemes(a: &str, b: &str) -> usize {
    let ga: Vec<&str> = a.graphemes(true).collect();
    let gb: Vec<&str> = b.graphemes(true).collect();
    edit_distance(&ga, &gb)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_pairs() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("saturday", "sunday"), 3);
        assert_eq!(levenshtein("flaw", "lawn"), 2);
    }

    #[test]
    fn test_empty_and_identical() {
        assert_eq!(levenshtein("", ""), 0);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("same", "same"), 0);
    }

    #[test]
    fn test_unicode_counts_characters_not_bytes() {
        assert_eq!(levenshtein("café", "cafe"), 1);
        assert_eq!(levenshtein("über", "uber"), 1);
        assert_eq!(levenshtein("日本語", "日本"), 1);
    }

    #[test]
    fn test_fallback_beyond_block_width() {
        let a = "x".repeat(70);
        let mut b = a.clone();
        b.replace_range(30..31, "y");
        assert_eq!(levenshtein(&a, &b), 1);

        let long_a: String = ('a'..='z').cycle().take(100).collect();
        let long_b: String = ('a'..='z').cycle().take(103).collect();
        assert_eq!(levenshtein(&long_a, &long_b), 3);
    }

    #[test]
    fn test_matches_generic_dp() {
        let pairs = [
            ("kitten", "sitting"),
            ("", "nonempty"),
            ("distance", "instance"),
            ("aaaa", "bbbb"),
            ("réservé", "reserve"),
        ];
        for (a, b) in pairs {
            let ca: Vec<char> = a.chars().collect();
            let cb: Vec<char> = b.chars().collect();
            assert_eq!(levenshtein(a, b), edit_distance(&ca, &cb), "{a} vs {b}");
        }
    }

    #[test]
    fn test_bounded_within_and_beyond() {
        assert_eq!(levenshtein_bounded("kitten", "sitting", 3), Some(3));
        assert_eq!(levenshtein_bounded("kitten", "sitting", 5), Some(3));
        assert_eq!(levenshtein_bounded("kitten", "sitting", 2), None);
        assert_eq!(levenshtein_bounded("abc", "abc", 0), Some(0));
    }

    #[test]
    fn test_bounded_length_difference_shortcut() {
        assert_eq!(levenshtein_bounded("ab", "abcdefgh", 3), None);
        assert_eq!(levenshtein_bounded("", "abcd", 2), None);
        assert_eq!(levenshtein_bounded("", "abcd", 4), Some(4));
    }

    #[test]
    fn test_bounded_long_inputs() {
        let a = "m".repeat(80);
        let mut b = a.clone();
        b.replace_range(10..12, "nn");
        assert_eq!(levenshtein_bounded(&a, &b, 2), Some(2));
        assert_eq!(levenshtein_bounded(&a, &b, 1), None);
    }

    #[test]
    fn test_bytes_variant_counts_bytes() {
        assert_eq!(levenshtein_bytes("kitten", "sitting"), 3);
        // 'é' is two bytes in UTF-8.
        assert_eq!(levenshtein_bytes("café", "cafe"), 2);
    }

    #[test]
    fn test_grapheme_variant_counts_clusters() {
        // NFC "é" against its NFD decomposition: two char edits, one
        // cluster edit.
        assert_eq!(levenshtein("caf\u{e9}", "cafe\u{301}"), 2);
        assert_eq!(levenshtein_graphemes("caf\u{e9}", "cafe\u{301}"), 1);

        let family = "👨\u{200d}👩\u{200d}👧";
        assert_eq!(levenshtein_graphemes(family, "x"), 1);
    }
}
