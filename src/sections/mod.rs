//! Weakness detection sections
//!
//! Each section checks one rule group and reports its findings.

mod length;
mod pattern;
mod repetition;
mod variety;

pub use length::length_section;
pub use pattern::pattern_section;
pub use repetition::repetition_section;
pub use variety::variety_section;

use crate::types::Weakness;

/// Result type for single-finding sections.
/// - `Some(weakness)` - the check tripped
/// - `None` - the check passed
pub type SectionResult = Option<Weakness>;
