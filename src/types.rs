//! Result types shared by the analysis and generation entry points.

use std::fmt;

/// A single diagnostic finding about a password.
///
/// Variants are declared in detection order; `detect_weaknesses` reports
/// findings in exactly this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weakness {
    /// Shorter than 8 characters.
    TooShort,
    /// Contains a known-common substring, or matches a wordlist entry.
    CommonPattern,
    /// A single character occurs more than `length / 2` times.
    ExcessiveRepetition,
    NoLowercase,
    NoUppercase,
    NoDigits,
    /// No character from the recognized punctuation set.
    NoSpecialChars,
}

impl Weakness {
    /// Stable human-readable message for this finding.
    pub fn message(&self) -> &'static str {
        match self {
            Weakness::TooShort => "Too short (less than 8 characters)",
            Weakness::CommonPattern => "Contains common patterns or words",
            Weakness::ExcessiveRepetition => "Too many repeated characters",
            Weakness::NoLowercase => "No lowercase letters",
            Weakness::NoUppercase => "No uppercase letters",
            Weakness::NoDigits => "No digits",
            Weakness::NoSpecialChars => "No special characters",
        }
    }
}

impl fmt::Display for Weakness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Strength band derived from an entropy estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strength {
    VeryWeak,
    Weak,
    Reasonable,
    Strong,
    VeryStrong,
}

impl Strength {
    /// Maps entropy bits to a band: < 28 very weak, < 36 weak,
    /// < 60 reasonable, < 128 strong, otherwise very strong.
    pub fn from_bits(bits: f64) -> Self {
        if bits < 28.0 {
            Strength::VeryWeak
        } else if bits < 36.0 {
            Strength::Weak
        } else if bits < 60.0 {
            Strength::Reasonable
        } else if bits < 128.0 {
            Strength::Strong
        } else {
            Strength::VeryStrong
        }
    }
}

/// A generated candidate paired with its own entropy estimate.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSuggestion {
    pub password: String,
    pub entropy_bits: f64,
}

/// Full analysis of one password: its entropy, its weaknesses, and 8
/// repaired candidates each scored independently.
#[derive(Debug, Clone, PartialEq)]
pub struct PasswordReport {
    pub entropy_bits: f64,
    pub weaknesses: Vec<Weakness>,
    pub suggestions: Vec<ScoredSuggestion>,
}

impl PasswordReport {
    /// Strength band of the analyzed password.
    pub fn strength(&self) -> Strength {
        Strength::from_bits(self.entropy_bits)
    }
}
