//! URL slugs derived from display names.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Any run of whitespace
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").expect("Invalid regex pattern");

    /// Anything outside the ASCII word characters and the hyphen
    static ref NON_WORD_RUN: Regex =
        Regex::new(r"[^A-Za-z0-9_-]+").expect("Invalid regex pattern");

    /// Two or more consecutive hyphens
    static ref HYPHEN_RUN: Regex = Regex::new(r"-{2,}").expect("Invalid regex pattern");

    /// Shape accepted by the category and product forms
    static ref SLUG_SHAPE: Regex = Regex::new(r"^[a-z0-9-]+$").expect("Invalid regex pattern");
}

/// Derives a URL slug from a display name.
///
/// Lowercases, turns whitespace runs into hyphens, drops everything that is not
/// an ASCII word character or hyphen, collapses repeated hyphens and trims one
/// hyphen from each end. Letters outside ASCII are dropped, not transliterated.
///
/// ```
/// use storefront_core::catalog::slugify;
///
/// assert_eq!(slugify("Men's Watches"), "mens-watches");
/// ```
pub fn slugify(name: &str) -> String {
    let lowered = name.to_lowercase();
    let hyphenated = WHITESPACE_RUN.replace_all(&lowered, "-");
    let word_only = NON_WORD_RUN.replace_all(&hyphenated, "");
    let collapsed = HYPHEN_RUN.replace_all(&word_only, "-");
    let collapsed: &str = collapsed.as_ref();

    let trimmed = collapsed.strip_prefix('-').unwrap_or(collapsed);
    let trimmed = trimmed.strip_suffix('-').unwrap_or(trimmed);
    trimmed.to_string()
}

/// Returns true if `slug` is non-empty and made only of `a-z`, `0-9` and `-`.
pub fn is_valid_slug(slug: &str) -> bool {
    SLUG_SHAPE.is_match(slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apostrophes_are_dropped() {
        assert_eq!(slugify("Men's Watches"), "mens-watches");
    }

    #[test]
    fn test_surrounding_and_repeated_whitespace() {
        assert_eq!(slugify("  Hello   World  "), "hello-world");
        assert_eq!(slugify("tab\tand\nnewline"), "tab-and-newline");
    }

    #[test]
    fn test_empty_and_punctuation_only() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("   "), "");
        assert_eq!(slugify("!!! ??? ..."), "");
        assert_eq!(slugify(" - - "), "");
    }

    #[test]
    fn test_existing_slug_is_unchanged() {
        assert_eq!(slugify("smart-watches-2024"), "smart-watches-2024");
    }

    #[test]
    fn test_hyphens_around_removed_characters_collapse() {
        assert_eq!(slugify("Bags & Wallets"), "bags-wallets");
        assert_eq!(slugify("a -!- b"), "a-b");
        assert_eq!(slugify("--Sale--"), "sale");
    }

    #[test]
    fn test_non_ascii_letters_are_removed() {
        assert_eq!(slugify("Café Crème"), "caf-crme");
        assert_eq!(slugify("घड़ी"), "");
    }

    #[test]
    fn test_underscore_counts_as_word_character() {
        assert_eq!(slugify("snake_case Name"), "snake_case-name");
    }

    #[test]
    fn test_is_valid_slug() {
        assert!(is_valid_slug("mens-watches"));
        assert!(is_valid_slug("2024"));
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("Mens-Watches"));
        assert!(!is_valid_slug("snake_case"));
        assert!(!is_valid_slug("with space"));
    }
}
