//! Password analyzer - weakness orchestration and report assembly.

use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::entropy::{entropy_bits, estimate_entropy};
use crate::generator::generate_suggestions;
use crate::sections::{length_section, pattern_section, repetition_section, variety_section};
use crate::types::{PasswordReport, ScoredSuggestion, Weakness};
use crate::wordlist::Wordlist;

/// Detects weaknesses using the built-in rule set.
///
/// # Returns
/// Findings in fixed order: length, common pattern, repetition, then one
/// finding per missing character class. Empty when nothing tripped.
pub fn detect_weaknesses(password: &SecretString) -> Vec<Weakness> {
    detect_weaknesses_with(password, None)
}

/// Detects weaknesses, additionally matching the whole password against an
/// optional wordlist of known-common passwords.
///
/// Every check runs independently; a password can trigger several findings
/// at once. The wordlist only extends the common-pattern check.
pub fn detect_weaknesses_with(
    password: &SecretString,
    wordlist: Option<&Wordlist>,
) -> Vec<Weakness> {
    let mut findings = Vec::new();

    findings.extend(length_section(password));
    findings.extend(pattern_section(password, wordlist));
    findings.extend(repetition_section(password));
    findings.extend(variety_section(password));

    findings
}

/// Runs the full analysis: entropy, weaknesses, and 8 repaired candidates
/// each re-scored with its own entropy estimate.
pub fn analyze_password(password: &SecretString) -> PasswordReport {
    analyze_password_with(password, None)
}

/// Same as [`analyze_password`], with an optional wordlist extending the
/// common-pattern check.
pub fn analyze_password_with(
    password: &SecretString,
    wordlist: Option<&Wordlist>,
) -> PasswordReport {
    let entropy = estimate_entropy(password);
    let weaknesses = detect_weaknesses_with(password, wordlist);
    let suggestions = generate_suggestions(password)
        .into_iter()
        .map(|candidate| {
            let entropy_bits = entropy_bits(&candidate);
            ScoredSuggestion {
                password: candidate,
                entropy_bits,
            }
        })
        .collect();

    PasswordReport {
        entropy_bits: entropy,
        weaknesses,
        suggestions,
    }
}

/// Async version that runs the analysis after a short debounce and sends
/// the report via channel.
///
/// A token cancelled during the debounce aborts without sending; the
/// receiver observes a closed channel instead of a report.
#[cfg(feature = "async")]
pub async fn analyze_password_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordReport>,
) {
    use std::time::Duration;

    #[cfg(feature = "tracing")]
    tracing::info!("analysis is about to start...");

    tokio::time::sleep(Duration::from_millis(300)).await;

    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::info!("analysis cancelled before start");
        return;
    }

    let report = analyze_password(password);

    if let Err(e) = tx.send(report).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password report: {}", e);
    }
}
