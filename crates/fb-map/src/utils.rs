//! Header normalization and similarity scoring.

use rapidfuzz::distance::indel;

/// Canonical comparison key for a column header.
///
/// Lowercases the input and keeps only alphanumeric characters, in order.
/// `"Serial Number"`, `"serial_number"` and `"SERIAL-NUMBER"` all become
/// `"serialnumber"`. Empty or punctuation-only input yields an empty key.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .flat_map(char::to_lowercase)
        .filter(|ch| ch.is_alphanumeric())
        .collect()
}

/// Similarity between two normalized keys, in `0.0..=1.0`.
///
/// Normalized Indel similarity: `2 * LCS(a, b) / (|a| + |b|)`, counted in
/// Unicode scalar values. Two empty keys are identical (1.0).
pub fn similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    indel::normalized_similarity(a.chars(), b.chars())
}
