//! Character variety section - checks for lowercase, uppercase, digits,
//! special chars.

use secrecy::{ExposeSecret, SecretString};

use crate::charset::is_special;
use crate::types::Weakness;

/// Checks which character classes the password is missing.
///
/// # Returns
/// One finding per absent class, in fixed order: lowercase, uppercase,
/// digits, special characters. Empty when all four are present.
pub fn variety_section(password: &SecretString) -> Vec<Weakness> {
    let pwd = password.expose_secret();
    let has_lower = pwd.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = pwd.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = pwd.chars().any(|c| c.is_ascii_digit());
    let has_special = pwd.chars().any(is_special);

    let mut missing = Vec::new();
    if !has_lower {
        missing.push(Weakness::NoLowercase);
    }
    if !has_upper {
        missing.push(Weakness::NoUppercase);
    }
    if !has_digit {
        missing.push(Weakness::NoDigits);
    }
    if !has_special {
        missing.push(Weakness::NoSpecialChars);
    }
    missing
}
