//! Categorization result models.
//!
//! This module contains the three category lists produced for a batch of
//! input lines, the duplicate flags, and the [`CategorizationReport`] that
//! bundles them with an audit trace.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Thresholds;

/// An input line that matched a reference entry.
///
/// # Example
///
/// ```
/// use internship_pay_filter::models::CategorizedLine;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let line = CategorizedLine {
///     input: "Virtu Financial - Summer 2025 Internship".to_string(),
///     company: "Virtu Financial".to_string(),
///     matched_company: "Virtu Financial".to_string(),
///     hourly_rate: Decimal::from_str("62.5").unwrap(),
///     score: 100,
///     display_pay: "$62.5/hr".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorizedLine {
    /// The raw input line.
    pub input: String,
    /// The company name extracted from the line.
    pub company: String,
    /// The reference company it matched.
    pub matched_company: String,
    /// The matched hourly rate.
    pub hourly_rate: Decimal,
    /// Similarity score of the match.
    pub score: u8,
    /// Rate formatted for display, e.g. `$52.5/hr`.
    pub display_pay: String,
}

/// An input line with no reference entry at or above the fuzzy threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotFoundLine {
    /// The raw input line.
    pub input: String,
    /// The company name extracted from the line.
    pub company: String,
}

/// The three disjoint categories of a run.
///
/// Every input line appears in exactly one list. `above` and `below` are
/// ordered by rate descending; `not_found` keeps input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorizedResult {
    /// Lines whose matched rate is at or above the pay threshold.
    pub above: Vec<CategorizedLine>,
    /// Lines whose matched rate is below the pay threshold.
    pub below: Vec<CategorizedLine>,
    /// Lines with no valid match.
    pub not_found: Vec<NotFoundLine>,
}

impl CategorizedResult {
    /// Returns the number of lines across all three categories.
    pub fn total(&self) -> usize {
        self.above.len() + self.below.len() + self.not_found.len()
    }
}

/// A new input judged to be a near-duplicate of an already applied entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateFlag {
    /// The new input line.
    pub new_input: String,
    /// The closest already applied entry.
    pub matched_applied: String,
    /// Similarity score between the two.
    pub score: u8,
}

/// A single step in the audit trace recording a matching decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during a run.
///
/// Warnings never stop a run; they describe degraded conditions such as
/// missing reference data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of decision steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during the run.
    pub warnings: Vec<AuditWarning>,
    /// The total run duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of one categorization request.
///
/// # Example
///
/// ```
/// use internship_pay_filter::models::{AuditTrace, CategorizationReport, Thresholds};
/// use chrono::Utc;
/// use uuid::Uuid;
///
/// let report = CategorizationReport {
///     report_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     engine_version: "0.1.0".to_string(),
///     thresholds: Thresholds::default(),
///     reference_entries: 0,
///     above: vec![],
///     below: vec![],
///     not_found: vec![],
///     duplicates: vec![],
///     threshold_percentage: None,
///     audit_trace: AuditTrace::default(),
/// };
/// assert_eq!(report.total_lines(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorizationReport {
    /// Unique identifier for this run.
    pub report_id: Uuid,
    /// When the run was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that produced the report.
    pub engine_version: String,
    /// The thresholds the run used.
    pub thresholds: Thresholds,
    /// Size of the reference table the run matched against.
    pub reference_entries: usize,
    /// Lines at or above the pay threshold, highest rate first.
    pub above: Vec<CategorizedLine>,
    /// Lines below the pay threshold, highest rate first.
    pub below: Vec<CategorizedLine>,
    /// Lines without a valid match, in input order.
    pub not_found: Vec<NotFoundLine>,
    /// Inputs that look like entries already applied to.
    pub duplicates: Vec<DuplicateFlag>,
    /// Percentage of reference entries paying at least the pay threshold.
    /// Absent when the reference table is empty.
    pub threshold_percentage: Option<Decimal>,
    /// Complete audit trace of matching decisions.
    pub audit_trace: AuditTrace,
}

impl CategorizationReport {
    /// Returns the number of categorized input lines.
    pub fn total_lines(&self) -> usize {
        self.above.len() + self.below.len() + self.not_found.len()
    }
}
