//! Per-line match outcome.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ReferenceEntry;

/// How a reference entry was found for an input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategy {
    /// The whole normalized company name scored at or above the threshold.
    FullName,
    /// Only the first word of the company name matched (opt-in fallback).
    FirstWord,
}

/// The outcome of matching one input line against the reference table.
///
/// Created fresh for every line and never mutated afterwards.
///
/// # Example
///
/// ```
/// use internship_pay_filter::models::{MatchResult, MatchStrategy, ReferenceEntry};
/// use rust_decimal::Decimal;
///
/// let result = MatchResult {
///     input: "Amazon - Quantitative Researcher".to_string(),
///     company: "Amazon".to_string(),
///     matched_entry: Some(ReferenceEntry::new("Amazon", Decimal::from(45))),
///     score: 100,
///     strategy: Some(MatchStrategy::FullName),
/// };
/// assert!(result.is_match());
/// assert_eq!(result.hourly_rate(), Some(Decimal::from(45)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// The raw input line.
    pub input: String,
    /// The company name extracted from the line.
    pub company: String,
    /// The selected reference entry, if any scored at or above the threshold.
    pub matched_entry: Option<ReferenceEntry>,
    /// Similarity score of the selected entry (0 when unmatched).
    pub score: u8,
    /// Which pass produced the match.
    pub strategy: Option<MatchStrategy>,
}

impl MatchResult {
    /// Creates a result for a line that matched nothing.
    pub fn unmatched(input: impl Into<String>, company: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            company: company.into(),
            matched_entry: None,
            score: 0,
            strategy: None,
        }
    }

    /// Returns true if a reference entry was selected.
    pub fn is_match(&self) -> bool {
        self.matched_entry.is_some()
    }

    /// Returns the hourly rate of the selected entry.
    pub fn hourly_rate(&self) -> Option<Decimal> {
        self.matched_entry.as_ref().map(|entry| entry.hourly_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unmatched_has_zero_score_and_no_rate() {
        let result = MatchResult::unmatched("Somos Inc. - SWE Intern", "Somos Inc.");
        assert!(!result.is_match());
        assert_eq!(result.score, 0);
        assert_eq!(result.hourly_rate(), None);
        assert_eq!(result.strategy, None);
    }

    #[test]
    fn test_strategy_serialization() {
        let json = serde_json::to_string(&MatchStrategy::FirstWord).unwrap();
        assert_eq!(json, "\"first_word\"");

        let strategy: MatchStrategy = serde_json::from_str("\"full_name\"").unwrap();
        assert_eq!(strategy, MatchStrategy::FullName);
    }
}
