//! Suggestion generation - repairs a password by randomized insertion.

use rand::Rng;
use secrecy::{ExposeSecret, SecretString};

use crate::charset::{is_special, DIGITS, FULL_ALPHABET, SPECIAL_CHARS, UPPERCASE};

/// Number of candidates produced per call.
pub const SUGGESTION_COUNT: usize = 8;

const MIN_SUGGESTION_LENGTH: usize = 8;

/// Inserts one character drawn uniformly from `alphabet` at a position
/// chosen uniformly over the sequence, both ends included.
fn insert_random<R: Rng>(rng: &mut R, chars: &mut Vec<char>, alphabet: &[u8]) {
    let position = rng.gen_range(0..=chars.len());
    let c = alphabet[rng.gen_range(0..alphabet.len())] as char;
    chars.insert(position, c);
}

/// Builds one repaired candidate. Existing characters are never removed or
/// reordered; every repair only inserts.
fn repair<R: Rng>(rng: &mut R, password: &str) -> String {
    let mut chars: Vec<char> = password.chars().collect();

    // Grow to the minimum length first; a length insertion may already
    // satisfy a variety requirement below.
    while chars.len() < MIN_SUGGESTION_LENGTH {
        insert_random(rng, &mut chars, FULL_ALPHABET);
    }

    // Single-shot variety repairs, fixed order
    if !chars.iter().any(|c| c.is_ascii_uppercase()) {
        insert_random(rng, &mut chars, UPPERCASE);
    }
    if !chars.iter().any(|c| c.is_ascii_digit()) {
        insert_random(rng, &mut chars, DIGITS);
    }
    if !chars.iter().any(|&c| is_special(c)) {
        insert_random(rng, &mut chars, SPECIAL_CHARS);
    }

    chars.into_iter().collect()
}

/// Generates [`SUGGESTION_COUNT`] independently repaired variants of the
/// password.
///
/// Every variant is at least 8 characters long and contains at least one
/// uppercase letter, one digit and one special character; the original
/// password survives in each variant as a subsequence.
pub fn generate_suggestions(password: &SecretString) -> Vec<String> {
    let mut rng = rand::thread_rng();
    let pwd = password.expose_secret();

    (0..SUGGESTION_COUNT).map(|_| repair(&mut rng, pwd)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    fn is_subsequence(needle: &str, haystack: &str) -> bool {
        let mut chars = haystack.chars();
        needle.chars().all(|n| chars.any(|h| h == n))
    }

    fn assert_repaired(suggestion: &str) {
        assert!(suggestion.chars().count() >= 8, "too short: {:?}", suggestion);
        assert!(
            suggestion.chars().any(|c| c.is_ascii_uppercase()),
            "no uppercase: {:?}",
            suggestion
        );
        assert!(
            suggestion.chars().any(|c| c.is_ascii_digit()),
            "no digit: {:?}",
            suggestion
        );
        assert!(
            suggestion.chars().any(is_special),
            "no special char: {:?}",
            suggestion
        );
    }

    #[test]
    fn test_generate_suggestions_count() {
        let suggestions = generate_suggestions(&secret("weak"));
        assert_eq!(suggestions.len(), SUGGESTION_COUNT);
    }

    #[test]
    fn test_generate_suggestions_guarantees() {
        for input in ["", "a", "weak", "aaaaaaa", "Password1!", "UPPER", "12345678"] {
            for _ in 0..15 {
                for suggestion in generate_suggestions(&secret(input)) {
                    assert_repaired(&suggestion);
                }
            }
        }
    }

    #[test]
    fn test_generate_suggestions_insertion_only() {
        for input in ["weak", "aaaaaaa", "Password1!", "pässwörd"] {
            for suggestion in generate_suggestions(&secret(input)) {
                assert!(
                    is_subsequence(input, &suggestion),
                    "{:?} is not a subsequence of {:?}",
                    input,
                    suggestion
                );
            }
        }
    }

    #[test]
    fn test_generate_suggestions_empty_input() {
        for suggestion in generate_suggestions(&secret("")) {
            assert_repaired(&suggestion);
            // length repair plus at most one insertion per variety check
            let len = suggestion.chars().count();
            assert!(len <= MIN_SUGGESTION_LENGTH + 3, "grew too much: {:?}", suggestion);
        }
    }

    #[test]
    fn test_generate_suggestions_long_input_untouched_length() {
        // already long and fully varied: nothing to repair
        let input = "AlreadyStrong42!AlreadyStrong42!";
        for suggestion in generate_suggestions(&secret(input)) {
            assert_eq!(suggestion, input);
        }
    }

    #[test]
    fn test_repair_uses_full_alphabet_chars_only() {
        let mut rng = rand::thread_rng();
        let repaired = repair(&mut rng, "");
        for c in repaired.chars() {
            assert!(
                c.is_ascii() && FULL_ALPHABET.contains(&(c as u8)),
                "unexpected char {:?}",
                c
            );
        }
    }
}
