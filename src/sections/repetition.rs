//! Repetition section - flags a single character dominating the password.

use std::collections::HashMap;

use secrecy::{ExposeSecret, SecretString};

use super::SectionResult;
use crate::types::Weakness;

/// Flags passwords where one character occurs more than `length / 2` times.
///
/// The threshold is real-valued: at length 7 a count of 4 trips the check
/// but a count of 3 does not. The empty password has no counts and never
/// trips.
///
/// # Returns
/// - `Some(Weakness::ExcessiveRepetition)` if one character dominates
/// - `None` otherwise
pub fn repetition_section(password: &SecretString) -> SectionResult {
    let mut counts: HashMap<char, usize> = HashMap::new();
    let mut length = 0usize;
    for c in password.expose_secret().chars() {
        *counts.entry(c).or_insert(0) += 1;
        length += 1;
    }

    let threshold = length as f64 / 2.0;
    if counts.values().any(|&count| count as f64 > threshold) {
        return Some(Weakness::ExcessiveRepetition);
    }
    None
}
