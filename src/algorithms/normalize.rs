//! Name folding applied before comparison.
//!
//! Filenames that refer to the same file often differ only in case or in
//! Unicode encoding form: HFS+ stores decomposed accents on disk while most
//! other filesystems keep them composed. Folding both sides through the same
//! mode removes these phantom edits before a distance is taken.

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

/// Folding mode for name preprocessing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Normalization {
    /// Convert to lowercase only.
    Lowercase,
    /// Recompose to Unicode NFC only.
    Nfc,
    /// Recompose to NFC, then lowercase.
    NfcLowercase,
}

/// Fold a name according to the given mode.
#[must_use]
pub fn normalize(s: &str, mode: Normalization) -> String {
    match mode {
        Normalization::Lowercase => s.to_lowercase(),
        Normalization::Nfc => s.nfc().collect(),
        Normalization::NfcLowercase => s.nfc().collect::<String>().to_lowercase(),
    }
}

/// Fold both sides of a comparison through the same mode.
#[must_use]
pub fn normalize_pair(a: &str, b: &str, mode: Normalization) -> (String, String) {
    (normalize(a, mode), normalize(b, mode))
}
