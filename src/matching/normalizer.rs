//! Name and number normalization.
//!
//! Spoken names come back from speech recognition with spacing, punctuation
//! and symbols that never appear the same way in the address book. Both sides
//! are reduced to the supported alphabet before any comparison.

use once_cell::sync::Lazy;
use regex::Regex;

/// Runs of characters outside Hangul syllables, ASCII letters and ASCII digits.
static UNSUPPORTED_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\x{AC00}-\x{D7A3}A-Za-z0-9]+").expect("static pattern compiles"));

/// Remove every character outside the supported alphabet.
///
/// Case and the order of the remaining characters are preserved, and the
/// function is idempotent.
///
/// # Example
///
/// ```
/// use contact_resolver::matching::normalize;
///
/// assert_eq!(normalize("Alice Kim"), "AliceKim");
/// assert_eq!(normalize("김 민수 (회사)"), "김민수회사");
/// assert_eq!(normalize("010-1111-2222"), "01011112222");
/// ```
pub fn normalize(input: &str) -> String {
    UNSUPPORTED_RUN.replace_all(input, "").into_owned()
}
