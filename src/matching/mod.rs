//! Matching logic for the internship pay filter.
//!
//! This module contains the name normalization and extraction helpers, the
//! fuzzy similarity scorer, best-paying match selection, pay-threshold
//! categorization, duplicate detection against already applied postings,
//! and the threshold percentage statistic over the reference table.

mod best_paying;
mod categorize;
mod duplicates;
mod extract;
mod normalize;
mod similarity;
mod threshold_stats;

pub use best_paying::{CandidateMatch, ReferenceIndex, find_valid_matches, match_best_paying};
pub use categorize::{categorize, format_hourly_pay, match_lines, partition_matches};
pub use duplicates::find_duplicates;
pub use extract::{COMPANY_DELIMITER, extract_company_name};
pub use normalize::normalize;
pub use similarity::{partial_ratio, ratio, score, token_set_ratio, token_sort_ratio};
pub use threshold_stats::threshold_percentage;
