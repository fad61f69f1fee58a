//! Pattern section - scans for known-common substrings and wordlist hits.

use secrecy::{ExposeSecret, SecretString};

use super::SectionResult;
use crate::types::Weakness;
use crate::wordlist::Wordlist;

/// Substrings that mark a password as following a common pattern.
pub(crate) const COMMON_PATTERNS: [&str; 5] = ["1234", "password", "qwerty", "abcd", "letmein"];

/// Scans the lowercase-folded password for common patterns.
///
/// A hit is either one of [`COMMON_PATTERNS`] occurring anywhere as a
/// substring, or the whole password appearing in the optional wordlist.
///
/// # Returns
/// - `Some(Weakness::CommonPattern)` on a hit
/// - `None` otherwise
pub fn pattern_section(password: &SecretString, wordlist: Option<&Wordlist>) -> SectionResult {
    let folded = password.expose_secret().to_lowercase();

    if COMMON_PATTERNS.iter().any(|p| folded.contains(p)) {
        return Some(Weakness::CommonPattern);
    }
    if wordlist.is_some_and(|w| w.contains(&folded)) {
        return Some(Weakness::CommonPattern);
    }
    None
}
