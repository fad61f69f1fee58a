//! Password analysis and repair library
//!
//! This library estimates password strength in bits, detects weaknesses
//! against a fixed rule set, and generates repaired candidate passwords.
//!
//! # Features
//!
//! - `async` (default): Enables a debounced async analysis bridge with
//!   cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_WORDLIST_PATH`: Custom path to the optional wordlist file
//!   (default: `./assets/wordlist.txt`)
//!
//! # Example
//!
//! ```rust
//! use pwd_advisor::analyze_password;
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("MyP@ss".to_string().into());
//! let report = analyze_password(&password);
//!
//! println!("Entropy: {:.2} bits ({:?})", report.entropy_bits, report.strength());
//! for weakness in &report.weaknesses {
//!     println!("- {}", weakness);
//! }
//! for suggestion in &report.suggestions {
//!     println!("{} ({:.2} bits)", suggestion.password, suggestion.entropy_bits);
//! }
//! ```

// Internal modules
mod analyzer;
mod charset;
mod entropy;
mod generator;
mod sections;
mod types;
mod wordlist;

// Public API
pub use analyzer::{
    analyze_password, analyze_password_with, detect_weaknesses, detect_weaknesses_with,
};
pub use entropy::estimate_entropy;
pub use generator::{generate_suggestions, SUGGESTION_COUNT};
pub use types::{PasswordReport, ScoredSuggestion, Strength, Weakness};
pub use wordlist::{wordlist_path, Wordlist, WordlistError};

#[cfg(feature = "async")]
pub use analyzer::analyze_password_tx;
