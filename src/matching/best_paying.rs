//! Best-paying reference match selection.
//!
//! This module finds every reference entry whose name scores at or above
//! the fuzzy threshold against an input name, then picks the one with the
//! highest hourly rate. The highest-rate rule is deliberate: when a noisy
//! name plausibly matches several companies, the most optimistic pay
//! estimate wins over the closest spelling.

use crate::models::{MatchResult, MatchStrategy, ReferenceEntry, ReferenceTable};

use super::extract::extract_company_name;
use super::normalize::normalize;
use super::similarity::score;

/// A reference entry that scored at or above the fuzzy threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateMatch<'a> {
    /// The matching reference entry.
    pub entry: &'a ReferenceEntry,
    /// The similarity score of the entry against the input name.
    pub score: u8,
}

#[derive(Debug, Clone)]
struct IndexedEntry<'a> {
    entry: &'a ReferenceEntry,
    normalized: String,
    first_word: String,
}

/// A reference table with its company names normalized once up front.
///
/// Build one index per batch and share it (read-only) across every line.
#[derive(Debug, Clone)]
pub struct ReferenceIndex<'a> {
    entries: Vec<IndexedEntry<'a>>,
}

impl<'a> ReferenceIndex<'a> {
    /// Normalizes every company name in the table.
    pub fn new(table: &'a ReferenceTable) -> Self {
        let entries = table
            .iter()
            .map(|entry| IndexedEntry {
                entry,
                normalized: normalize(&entry.company),
                first_word: first_word(&entry.company),
            })
            .collect();
        Self { entries }
    }

    /// Returns true if the underlying table was empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns every entry scoring at or above `threshold`, in table order.
    ///
    /// A name that normalizes to nothing matches no entry, whatever the
    /// threshold.
    pub fn valid_matches(&self, input_name: &str, threshold: u8) -> Vec<CandidateMatch<'a>> {
        let normalized = normalize(input_name);
        if normalized.is_empty() {
            return Vec::new();
        }
        self.entries
            .iter()
            .filter_map(|indexed| {
                let score = score(&normalized, &indexed.normalized);
                (score >= threshold).then_some(CandidateMatch {
                    entry: indexed.entry,
                    score,
                })
            })
            .collect()
    }

    /// Returns the highest-paying valid match for `input_name`.
    pub fn best_paying(&self, input_name: &str, threshold: u8) -> Option<CandidateMatch<'a>> {
        highest_paying(self.valid_matches(input_name, threshold))
    }

    /// Returns the highest-paying entry whose first word matches the first
    /// word of `input_name`.
    pub fn best_paying_by_first_word(
        &self,
        input_name: &str,
        threshold: u8,
    ) -> Option<CandidateMatch<'a>> {
        let input_word = first_word(input_name);
        if input_word.is_empty() {
            return None;
        }
        let candidates = self.entries.iter().filter_map(|indexed| {
            let score = score(&input_word, &indexed.first_word);
            (score >= threshold).then_some(CandidateMatch {
                entry: indexed.entry,
                score,
            })
        });
        highest_paying(candidates)
    }

    /// Extracts the company from a posting line and matches it.
    ///
    /// The first-word pass only runs when the full-name pass found nothing
    /// and `first_word_fallback` is set.
    pub fn match_line(&self, line: &str, threshold: u8, first_word_fallback: bool) -> MatchResult {
        let company = extract_company_name(line);

        let found = self
            .best_paying(company, threshold)
            .map(|candidate| (candidate, MatchStrategy::FullName))
            .or_else(|| {
                first_word_fallback
                    .then(|| self.best_paying_by_first_word(company, threshold))
                    .flatten()
                    .map(|candidate| (candidate, MatchStrategy::FirstWord))
            });

        match found {
            Some((candidate, strategy)) => MatchResult {
                input: line.to_string(),
                company: company.to_string(),
                matched_entry: Some(candidate.entry.clone()),
                score: candidate.score,
                strategy: Some(strategy),
            },
            None => MatchResult::unmatched(line, company),
        }
    }
}

/// Returns every reference entry scoring at or above `threshold` against
/// `input_name`, in table order.
pub fn find_valid_matches<'a>(
    input_name: &str,
    table: &'a ReferenceTable,
    threshold: u8,
) -> Vec<CandidateMatch<'a>> {
    ReferenceIndex::new(table).valid_matches(input_name, threshold)
}

/// Finds the highest-paying reference entry that fuzzily matches
/// `input_name`.
///
/// Returns `None` when no entry scores at or above `threshold`, including
/// when the table is empty. Among valid matches the maximum hourly rate
/// wins; equal rates resolve to the earliest entry in table order.
///
/// # Examples
///
/// ```
/// use internship_pay_filter::matching::match_best_paying;
/// use internship_pay_filter::models::{ReferenceEntry, ReferenceTable};
/// use rust_decimal::Decimal;
///
/// let table = ReferenceTable::new(vec![
///     ReferenceEntry::new("Amazon", Decimal::from(40)),
///     ReferenceEntry::new("Amazon Inc", Decimal::from(70)),
/// ]);
///
/// let best = match_best_paying("Amazon", &table, 80).unwrap();
/// assert_eq!(best.entry.company, "Amazon Inc");
/// assert_eq!(best.entry.hourly_rate, Decimal::from(70));
/// ```
pub fn match_best_paying<'a>(
    input_name: &str,
    table: &'a ReferenceTable,
    threshold: u8,
) -> Option<CandidateMatch<'a>> {
    ReferenceIndex::new(table).best_paying(input_name, threshold)
}

fn highest_paying<'a>(
    candidates: impl IntoIterator<Item = CandidateMatch<'a>>,
) -> Option<CandidateMatch<'a>> {
    candidates
        .into_iter()
        .fold(None, |best: Option<CandidateMatch<'a>>, candidate| match best {
            Some(current) if current.entry.hourly_rate >= candidate.entry.hourly_rate => {
                Some(current)
            }
            _ => Some(candidate),
        })
}

fn first_word(name: &str) -> String {
    name.split_whitespace()
        .next()
        .unwrap_or_default()
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn table(rows: &[(&str, &str)]) -> ReferenceTable {
        rows.iter()
            .map(|(company, rate)| ReferenceEntry::new(*company, dec(rate)))
            .collect()
    }

    #[test]
    fn test_highest_rate_beats_closest_text() {
        let table = table(&[("Amazon", "40"), ("Amazon Inc", "70")]);

        let best = match_best_paying("Amazon", &table, 80).unwrap();

        assert_eq!(best.entry.company, "Amazon Inc");
        assert_eq!(best.entry.hourly_rate, dec("70"));
        assert_eq!(best.score, 90);
    }

    #[test]
    fn test_valid_matches_keep_table_order() {
        let table = table(&[("Amazon", "40"), ("Radix Trading", "96"), ("Amazon Inc", "70")]);

        let matches = find_valid_matches("amazon", &table, 80);

        let names: Vec<&str> = matches.iter().map(|m| m.entry.company.as_str()).collect();
        assert_eq!(names, vec!["Amazon", "Amazon Inc"]);
        assert_eq!(matches[0].score, 100);
    }

    #[test]
    fn test_higher_paying_entry_below_threshold_is_ignored() {
        let table = table(&[("Amazon", "40"), ("Amazing Co", "200")]);

        let best = match_best_paying("Amazon", &table, 80).unwrap();

        assert_eq!(best.entry.company, "Amazon");
    }

    #[test]
    fn test_duplicate_names_resolve_to_highest_rate() {
        let table = table(&[("Citadel", "110"), ("Citadel", "125"), ("citadel", "90")]);

        let best = match_best_paying("CITADEL", &table, 80).unwrap();

        assert_eq!(best.entry.hourly_rate, dec("125"));
    }

    #[test]
    fn test_equal_rates_resolve_to_first_entry() {
        let table = table(&[("Amazon", "50"), ("AMAZON", "50")]);

        let best = match_best_paying("amazon", &table, 80).unwrap();

        assert_eq!(best.entry.company, "Amazon");
    }

    #[test]
    fn test_no_valid_match_returns_none() {
        let table = table(&[("Amazon", "40")]);
        assert!(match_best_paying("Radix Trading", &table, 80).is_none());
    }

    #[test]
    fn test_empty_table_returns_none() {
        let table = ReferenceTable::default();
        assert!(match_best_paying("Amazon", &table, 80).is_none());
        assert!(ReferenceIndex::new(&table).is_empty());
    }

    #[test]
    fn test_spacing_and_case_do_not_matter() {
        let table = table(&[("Jane Street", "115")]);
        let best = match_best_paying("  JANESTREET ", &table, 100).unwrap();
        assert_eq!(best.score, 100);
    }

    #[test]
    fn test_match_line_extracts_company() {
        let table = table(&[("Virtu Financial", "62.5")]);
        let index = ReferenceIndex::new(&table);

        let result = index.match_line("Virtu Financial - Summer 2025 Internship", 80, false);

        assert_eq!(result.company, "Virtu Financial");
        assert_eq!(result.hourly_rate(), Some(dec("62.5")));
        assert_eq!(result.strategy, Some(MatchStrategy::FullName));
        assert_eq!(result.input, "Virtu Financial - Summer 2025 Internship");
    }

    #[test]
    fn test_first_word_fallback_is_opt_in() {
        let table = table(&[("Honeywell Aerospace", "38")]);
        let index = ReferenceIndex::new(&table);

        let strict = index.match_line("Honeywell QR - Intern", 80, false);
        assert!(!strict.is_match());

        let relaxed = index.match_line("Honeywell QR - Intern", 80, true);
        assert_eq!(relaxed.strategy, Some(MatchStrategy::FirstWord));
        assert_eq!(relaxed.hourly_rate(), Some(dec("38")));
        assert_eq!(relaxed.score, 100);
    }

    #[test]
    fn test_first_word_fallback_prefers_highest_rate() {
        let table = table(&[("Honeywell Aerospace", "38"), ("Honeywell Building", "55")]);
        let index = ReferenceIndex::new(&table);

        let result = index.match_line("Honeywell QR - Intern", 80, true);

        assert_eq!(result.strategy, Some(MatchStrategy::FirstWord));
        assert_eq!(result.matched_entry.unwrap().company, "Honeywell Building");
    }

    #[test]
    fn test_first_word_fallback_rate_tie_keeps_table_order() {
        let table = table(&[("Honeywell Aerospace", "55"), ("Honeywell Building", "55")]);
        let index = ReferenceIndex::new(&table);

        let best = index.best_paying_by_first_word("Honeywell QR", 80).unwrap();

        assert_eq!(best.entry.company, "Honeywell Aerospace");
        assert_eq!(best.score, 100);
    }

    #[test]
    fn test_blank_line_never_matches() {
        let table = table(&[("Amazon", "40")]);
        let index = ReferenceIndex::new(&table);

        let result = index.match_line("   ", 0, true);

        assert!(!result.is_match());
        assert_eq!(result.company, "");
    }
}
