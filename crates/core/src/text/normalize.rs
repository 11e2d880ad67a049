//! Normalization helpers for user-entered text.
//!
//! These helpers clean up free-form text coming from imports and legacy
//! systems: folding accented characters to ASCII, stripping anything that
//! is not alphanumeric, and removing emojis.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static NON_ALPHANUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z0-9\s]").expect("valid pattern"));

/// Keeps space, dot, colon, and hyphen so light formatting survives.
static NON_ALPHANUMERIC_LIGHT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z0-9\s.:\-]").expect("valid pattern"));

/// Keeps the characters commonly found in product descriptions.
static NON_ALPHANUMERIC_PRODUCT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z0-9\s.,%/]").expect("valid pattern"));

static LINE_BREAKS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\n\r\t]").expect("valid pattern"));

static NON_NUMERIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9]").expect("valid pattern"));

/// Anything outside letters, marks, numbers, punctuation, separators, and
/// format characters. Surrogates cannot occur in Rust strings, so the
/// class does not need them.
static EMOJI: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\p{L}\p{M}\p{N}\p{P}\p{Z}\p{Cf}\s]").expect("valid pattern"));

fn strip(text: &str, pattern: &Regex) -> String {
    pattern.replace_all(text, "").into_owned()
}

/// Folds the text to its ASCII representation.
///
/// Decomposes accented characters (NFD) and drops everything outside the
/// ASCII range, so `"café"` becomes `"cafe"`.
#[must_use]
pub fn to_ascii(text: &str) -> String {
    text.nfd().filter(char::is_ascii).collect()
}

/// Removes every non-alphanumeric character from the text.
#[must_use]
pub fn strip_non_alphanumeric(text: &str) -> String {
    strip(&strip(&to_ascii(text), &NON_ALPHANUMERIC), &LINE_BREAKS)
        .trim()
        .to_owned()
}

/// Removes non-alphanumeric characters while preserving light formatting
/// (spaces, dots, colons, and hyphens are kept).
#[must_use]
pub fn light_strip_non_alphanumeric(text: &str) -> String {
    strip(&strip(&to_ascii(text), &NON_ALPHANUMERIC_LIGHT), &LINE_BREAKS)
        .trim()
        .to_owned()
}

/// Removes non-alphanumeric characters except those frequently used in
/// product information (spaces, dots, commas, percent, and slashes).
#[must_use]
pub fn strip_for_products(text: &str) -> String {
    strip(
        &strip(&to_ascii(text), &NON_ALPHANUMERIC_PRODUCT),
        &LINE_BREAKS,
    )
    .trim()
    .to_owned()
}

/// Removes every non-numeric character from the text.
#[must_use]
pub fn strip_non_numeric(text: &str) -> String {
    strip(text, &NON_NUMERIC)
}

/// Removes emojis from the text, collapsing the doubled spaces they leave
/// behind.
#[must_use]
pub fn remove_emojis(text: &str) -> String {
    strip(text, &EMOJI).replace("  ", " ")
}
