//! Wordlist support
//!
//! Handles loading the optional list of known-common passwords that extends
//! the common-pattern check.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordlistError {
    #[error("Wordlist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read wordlist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Wordlist file is empty")]
    EmptyFile,
}

/// Returns the wordlist file path.
///
/// Priority:
/// 1. Environment variable `PWD_WORDLIST_PATH`
/// 2. Default path `./assets/wordlist.txt`
pub fn wordlist_path() -> PathBuf {
    std::env::var("PWD_WORDLIST_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets/wordlist.txt"))
}

/// A set of known-common passwords, matched case-insensitively against a
/// whole password.
///
/// The list is an explicit value passed to the `*_with` entry points; the
/// crate keeps no process-wide copy.
#[derive(Debug, Clone)]
pub struct Wordlist {
    words: HashSet<String>,
}

impl Wordlist {
    /// Loads a wordlist from a newline-delimited file. Entries are trimmed
    /// and lowercase-folded; blank lines are skipped.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File is empty
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, WordlistError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Wordlist load FAILED: FileNotFound {:?}", path);
            return Err(WordlistError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;

        if content.trim().is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Wordlist load FAILED: Empty file {:?}", path);
            return Err(WordlistError::EmptyFile);
        }

        let words: HashSet<String> = content
            .lines()
            .map(|l| l.trim().to_lowercase())
            .filter(|l| !l.is_empty())
            .collect();

        #[cfg(feature = "tracing")]
        tracing::info!("Wordlist loaded: {} passwords from {:?}", words.len(), path);

        Ok(Self { words })
    }

    /// Loads the wordlist from [`wordlist_path`].
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// // Custom path via environment
    /// unsafe { std::env::set_var("PWD_WORDLIST_PATH", "/etc/myapp/wordlist.txt"); }
    /// let wordlist = pwd_advisor::Wordlist::from_default_path()?;
    /// ```
    pub fn from_default_path() -> Result<Self, WordlistError> {
        Self::from_path(wordlist_path())
    }

    /// Checks whether the whole password is in the list (case-insensitive).
    pub fn contains(&self, password: &str) -> bool {
        self.words.contains(&password.to_lowercase())
    }

    /// Number of entries in the list.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
