use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Produces the canonical matching form of a text value: NFKD-decomposed
/// with combining marks removed, lowercased, and trimmed.
///
/// The same form is used as the address deduplication key and for the
/// org-unit filter, so `"Rua São João "` and `"rua sao joao"` compare equal.
/// The function is total and idempotent; empty input yields an empty string.
pub fn normalize_text(value: &str) -> String {
    let stripped: String = value
        .nfkd()
        .filter(|ch| !is_combining_mark(*ch))
        .collect();
    stripped.to_lowercase().trim().to_string()
}
