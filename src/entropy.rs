//! Entropy estimation from character-class composition.

use secrecy::{ExposeSecret, SecretString};

use crate::charset::charset_size;

/// Estimates password strength as `length * log2(charset size)` bits.
///
/// The charset size counts whole classes by presence (lowercase, uppercase,
/// digits, special characters), not individual characters.
///
/// # Returns
/// Entropy in bits, unrounded. `0.0` when no character belongs to any
/// recognized class, including the empty password.
pub fn estimate_entropy(password: &SecretString) -> f64 {
    entropy_bits(password.expose_secret())
}

pub(crate) fn entropy_bits(pwd: &str) -> f64 {
    let size = charset_size(pwd);
    if size == 0 {
        return 0.0;
    }
    pwd.chars().count() as f64 * (size as f64).log2()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_estimate_empty_password() {
        assert_eq!(estimate_entropy(&secret("")), 0.0);
    }

    #[test]
    fn test_estimate_unrecognized_only() {
        assert_eq!(estimate_entropy(&secret("   ")), 0.0);
        assert_eq!(estimate_entropy(&secret("---___")), 0.0);
    }

    #[test]
    fn test_estimate_single_class() {
        let expected = 3.0 * 26f64.log2();
        assert!((estimate_entropy(&secret("abc")) - expected).abs() < 1e-9);

        let expected = 5.0 * 10f64.log2();
        assert!((estimate_entropy(&secret("13579")) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_estimate_all_classes() {
        let expected = 4.0 * 94f64.log2();
        assert!((estimate_entropy(&secret("aA1!")) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_estimate_length_scales_linearly() {
        let short = estimate_entropy(&secret("abcd"));
        let long = estimate_entropy(&secret("abcdabcd"));
        assert!((long - 2.0 * short).abs() < 1e-9);
    }

    #[test]
    fn test_estimate_is_deterministic() {
        let pwd = secret("Tr0ub4dor&3");
        assert_eq!(estimate_entropy(&pwd), estimate_entropy(&pwd));
    }

    #[test]
    fn test_estimate_very_long_input() {
        let pwd = secret(&"a".repeat(100_000));
        let expected = 100_000.0 * 26f64.log2();
        assert!((estimate_entropy(&pwd) - expected).abs() < 1e-6);
    }
}
