//! Pay-threshold categorization of posting lines.
//!
//! Each line is matched independently against a shared, read-only
//! [`ReferenceIndex`], so [`match_lines`] fans the work out with `rayon`
//! and collects the results back in input order.

use rayon::prelude::*;
use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{
    CategorizedLine, CategorizedResult, MatchResult, NotFoundLine, ReferenceTable,
};

use super::best_paying::ReferenceIndex;

/// Formats an hourly rate for display, e.g. `$52.5/hr`.
///
/// # Examples
///
/// ```
/// use internship_pay_filter::matching::format_hourly_pay;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(format_hourly_pay(Decimal::from_str("52.50").unwrap()), "$52.5/hr");
/// assert_eq!(format_hourly_pay(Decimal::from(45)), "$45/hr");
/// ```
pub fn format_hourly_pay(rate: Decimal) -> String {
    format!("${}/hr", rate.normalize())
}

/// Matches every line against the index, returning results in input order.
pub fn match_lines<S>(
    lines: &[S],
    index: &ReferenceIndex<'_>,
    fuzzy_threshold: u8,
    first_word_fallback: bool,
) -> Vec<MatchResult>
where
    S: AsRef<str> + Sync,
{
    lines
        .par_iter()
        .map(|line| index.match_line(line.as_ref(), fuzzy_threshold, first_word_fallback))
        .collect()
}

/// Splits match results into above, below and not-found lists.
///
/// Matched lines with `rate >= pay_threshold` go above, the rest of the
/// matched lines below. Both lists are stably sorted by rate, highest
/// first; not-found lines keep their input order.
pub fn partition_matches(matches: &[MatchResult], pay_threshold: Decimal) -> CategorizedResult {
    let mut result = CategorizedResult::default();

    for matched in matches {
        let Some(entry) = &matched.matched_entry else {
            result.not_found.push(NotFoundLine {
                input: matched.input.clone(),
                company: matched.company.clone(),
            });
            continue;
        };

        let line = CategorizedLine {
            input: matched.input.clone(),
            company: matched.company.clone(),
            matched_company: entry.company.clone(),
            hourly_rate: entry.hourly_rate,
            score: matched.score,
            display_pay: format_hourly_pay(entry.hourly_rate),
        };

        if entry.hourly_rate >= pay_threshold {
            result.above.push(line);
        } else {
            result.below.push(line);
        }
    }

    // sort_by is stable: equal rates keep input order
    result.above.sort_by(|a, b| b.hourly_rate.cmp(&a.hourly_rate));
    result.below.sort_by(|a, b| b.hourly_rate.cmp(&a.hourly_rate));

    debug!(
        above = result.above.len(),
        below = result.below.len(),
        not_found = result.not_found.len(),
        "Partitioned match results"
    );

    result
}

/// Categorizes posting lines by the hourly rate of their best-paying match.
///
/// # Examples
///
/// ```
/// use internship_pay_filter::matching::categorize;
/// use internship_pay_filter::models::{ReferenceEntry, ReferenceTable};
/// use rust_decimal::Decimal;
///
/// let table = ReferenceTable::new(vec![
///     ReferenceEntry::new("Radix Trading", Decimal::from(96)),
///     ReferenceEntry::new("Honeywell", Decimal::from(32)),
/// ]);
/// let lines = ["Radix Trading", "Honeywell - Quantitative Researcher", "Somos Inc. - SWE Intern"];
///
/// let result = categorize(&lines, &table, Decimal::from(50), 80);
/// assert_eq!(result.above[0].display_pay, "$96/hr");
/// assert_eq!(result.below[0].company, "Honeywell");
/// assert_eq!(result.not_found[0].company, "Somos Inc.");
/// ```
pub fn categorize<S>(
    lines: &[S],
    table: &ReferenceTable,
    pay_threshold: Decimal,
    fuzzy_threshold: u8,
) -> CategorizedResult
where
    S: AsRef<str> + Sync,
{
    let index = ReferenceIndex::new(table);
    let matches = match_lines(lines, &index, fuzzy_threshold, false);
    partition_matches(&matches, pay_threshold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ReferenceEntry;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_table() -> ReferenceTable {
        vec![
            ReferenceEntry::new("Radix Trading", dec("96.15")),
            ReferenceEntry::new("Virtu Financial", dec("62.5")),
            ReferenceEntry::new("Amazon", dec("45")),
            ReferenceEntry::new("Amazon Inc", dec("70")),
            ReferenceEntry::new("Honeywell", dec("32")),
            ReferenceEntry::new("Spectrum", dec("25")),
            ReferenceEntry::new("Jane Street", dec("120")),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_lines_land_in_expected_categories() {
        let lines = [
            "Radix Trading",
            "Virtu Financial - Summer 2025 Internship",
            "Amazon - Quantitative Researcher",
            "Honeywell - Quantitative Researcher",
            "Spectrum - CEO - Intern",
            "Somos Inc. - Software Engineer Intern",
        ];

        let result = categorize(&lines, &sample_table(), dec("50"), 80);

        let above: Vec<&str> = result.above.iter().map(|l| l.company.as_str()).collect();
        assert_eq!(above, vec!["Radix Trading", "Amazon", "Virtu Financial"]);
        assert_eq!(result.above[1].matched_company, "Amazon Inc");
        assert_eq!(result.above[1].display_pay, "$70/hr");

        let below: Vec<&str> = result.below.iter().map(|l| l.company.as_str()).collect();
        assert_eq!(below, vec!["Honeywell", "Spectrum"]);

        assert_eq!(result.not_found.len(), 1);
        assert_eq!(result.not_found[0].input, "Somos Inc. - Software Engineer Intern");
    }

    #[test]
    fn test_rate_equal_to_threshold_is_above() {
        let table: ReferenceTable = vec![ReferenceEntry::new("Citadel", dec("50"))]
            .into_iter()
            .collect();

        let result = categorize(&["Citadel"], &table, dec("50"), 80);

        assert_eq!(result.above.len(), 1);
        assert!(result.below.is_empty());
    }

    #[test]
    fn test_equal_rates_keep_input_order() {
        let table: ReferenceTable = vec![
            ReferenceEntry::new("Two Sigma", dec("80")),
            ReferenceEntry::new("Hudson River Trading", dec("80")),
        ]
        .into_iter()
        .collect();

        let lines = ["Hudson River Trading - SWE", "Two Sigma - QR", "Two Sigma - SWE"];
        let result = categorize(&lines, &table, dec("50"), 80);

        let inputs: Vec<&str> = result.above.iter().map(|l| l.input.as_str()).collect();
        assert_eq!(inputs, lines.to_vec());
    }

    #[test]
    fn test_not_found_keeps_input_order() {
        let lines = ["Zeta", "Alpha Widgets", "Mystery Corp"];

        let result = categorize(&lines, &sample_table(), dec("50"), 80);

        let inputs: Vec<&str> = result.not_found.iter().map(|l| l.input.as_str()).collect();
        assert_eq!(inputs, lines.to_vec());
    }

    #[test]
    fn test_empty_table_reports_everything_not_found() {
        let lines = ["Radix Trading", "Amazon - SWE"];

        let result = categorize(&lines, &ReferenceTable::default(), dec("50"), 80);

        assert!(result.above.is_empty());
        assert!(result.below.is_empty());
        assert_eq!(result.not_found.len(), 2);
    }

    #[test]
    fn test_format_hourly_pay_drops_trailing_zeros() {
        assert_eq!(format_hourly_pay(dec("62.50")), "$62.5/hr");
        assert_eq!(format_hourly_pay(dec("120.00")), "$120/hr");
    }

    fn line_strategy() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("Radix Trading".to_string()),
            Just("Amazon - SWE".to_string()),
            Just("Honeywell - QR".to_string()),
            Just("Jane Street - Trader".to_string()),
            "[A-Za-z ]{0,15}( - [a-z ]{0,10})?",
        ]
    }

    proptest! {
        #[test]
        fn prop_partition_is_total_and_disjoint(
            lines in proptest::collection::vec(line_strategy(), 0..12),
            pay in 0u32..=200,
        ) {
            let result = categorize(&lines, &sample_table(), Decimal::from(pay), 80);

            prop_assert_eq!(result.total(), lines.len());

            // every input placed exactly once, as a multiset
            let mut placed: Vec<&String> = result
                .above
                .iter()
                .chain(result.below.iter())
                .map(|l| &l.input)
                .chain(result.not_found.iter().map(|l| &l.input))
                .collect();
            let mut given: Vec<&String> = lines.iter().collect();
            placed.sort();
            given.sort();
            prop_assert_eq!(placed, given);
        }

        #[test]
        fn prop_categories_are_sorted_by_rate(
            lines in proptest::collection::vec(line_strategy(), 0..12),
            pay in 0u32..=200,
        ) {
            let threshold = Decimal::from(pay);
            let result = categorize(&lines, &sample_table(), threshold, 80);

            for window in result.above.windows(2) {
                prop_assert!(window[0].hourly_rate >= window[1].hourly_rate);
            }
            for window in result.below.windows(2) {
                prop_assert!(window[0].hourly_rate >= window[1].hourly_rate);
            }
            prop_assert!(result.above.iter().all(|l| l.hourly_rate >= threshold));
            prop_assert!(result.below.iter().all(|l| l.hourly_rate < threshold));
        }
    }
}
