// crates/ubigeo-core/src/text.rs

/// Convert a place name into the folded key used by every lookup table.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Huánuco` -> `Huanuco`, `Cañete` -> `Canete`)
/// 2\) Trim surrounding whitespace
/// 3\) Normalize to uppercase
///
/// The implementation uses the `deunicode` crate to perform a best-effort
/// transliteration from Unicode to ASCII. That reaches further than dropping
/// combining marks: typographic quotes and dashes become their ASCII forms
/// and non-Latin scripts are romanized. Spanish place names fold the same
/// either way.
///
/// # Examples
///
/// ```rust
/// use ubigeo_core::text::fold_key;
///
/// assert_eq!(fold_key("  Huánuco "), "HUANUCO");
/// assert_eq!(fold_key("Cañete"), "CANETE");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).trim().to_uppercase()
}

/// Compares two names for equality after folding.
///
/// ```rust
/// use ubigeo_core::text::equals_folded;
///
/// assert!(equals_folded("San Martín", "SAN MARTIN"));
/// assert!(!equals_folded("Lima", "Callao"));
/// ```
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}

/// Upper-cases the first character and leaves the rest untouched.
///
/// Used by the `capitalize` error policy, so `"nacional"` becomes
/// `"Nacional"` while `"iNEI"` becomes `"INEI"`.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
