//! Company name normalization.
//!
//! Normalized names are used only for comparison, never for display.

/// Canonicalizes a company name for comparison.
///
/// Lower-cases the name, trims it, then removes every whitespace
/// character, so names differing only in case or spacing normalize to the
/// same string. Punctuation is kept: `"DE.. Shaw"` and `"DE Shaw"` stay
/// distinct and are left for the fuzzy scorer to reconcile.
///
/// # Examples
///
/// ```
/// use internship_pay_filter::matching::normalize;
///
/// assert_eq!(normalize("  Jane   Street "), "janestreet");
/// assert_eq!(normalize("DE.. Shaw"), "de..shaw");
/// ```
pub fn normalize(name: &str) -> String {
    name.trim()
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}
