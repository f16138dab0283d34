//! Word normalization shared by every game
//!
//! All comparisons in the engines happen on normalized text: letters only,
//! single case. The bee and cryptic games work lowercase, the crossword and
//! the guessing game work uppercase.

/// Lowercase a string and strip everything that is not a letter
///
/// # Examples
/// ```
/// use lunamini::core::normalize;
///
/// assert_eq!(normalize("  Face "), "face");
/// assert_eq!(normalize("it's"), "its");
/// assert_eq!(normalize("1234"), "");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Uppercase variant of [`normalize`]
///
/// # Examples
/// ```
/// use lunamini::core::normalize_upper;
///
/// assert_eq!(normalize_upper("crane"), "CRANE");
/// assert_eq!(normalize_upper("odd one"), "ODDONE");
/// ```
#[must_use]
pub fn normalize_upper(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}
