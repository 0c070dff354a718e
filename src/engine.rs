//! Request orchestration.
//!
//! The [`Engine`] owns a read-only reference table and runs one
//! categorization request at a time through extraction, matching,
//! partitioning, duplicate detection and the threshold statistic, recording
//! each decision in an audit trace. It keeps no state between runs.

use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::{MatchingOptions, Settings};
use crate::error::EngineResult;
use crate::matching::{
    ReferenceIndex, find_duplicates, match_lines, partition_matches, threshold_percentage,
};
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, CategorizationReport, DuplicateFlag, MatchResult,
    MatchStrategy, ReferenceTable, Thresholds,
};

/// The version reported in every categorization report.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Runs categorization requests against a fixed reference table.
#[derive(Debug, Clone)]
pub struct Engine {
    reference: ReferenceTable,
    defaults: Thresholds,
    options: MatchingOptions,
}

impl Engine {
    /// Creates an engine over `reference`.
    ///
    /// `defaults` are the thresholds a caller gets when it does not supply
    /// its own.
    pub fn new(reference: ReferenceTable, defaults: Thresholds, options: MatchingOptions) -> Self {
        Self {
            reference,
            defaults,
            options,
        }
    }

    /// Creates an engine from loaded settings.
    pub fn from_settings(settings: &Settings, reference: ReferenceTable) -> Self {
        Self::new(reference, settings.thresholds, settings.matching)
    }

    /// Returns the reference table.
    pub fn reference(&self) -> &ReferenceTable {
        &self.reference
    }

    /// Returns the configured default thresholds.
    pub fn default_thresholds(&self) -> Thresholds {
        self.defaults
    }

    /// Percentage of reference entries paying at least `cutoff`.
    pub fn threshold_percentage(&self, cutoff: Decimal) -> EngineResult<Decimal> {
        threshold_percentage(&self.reference, cutoff)
    }

    /// Categorizes `lines` and checks them against `applied`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidThreshold` if any threshold is out of range. Nothing
    /// else fails: unmatched lines, an empty reference table, or an empty
    /// applied list all produce a (possibly sparse) report.
    ///
    /// # Example
    ///
    /// ```
    /// use internship_pay_filter::config::MatchingOptions;
    /// use internship_pay_filter::engine::Engine;
    /// use internship_pay_filter::models::{ReferenceEntry, ReferenceTable, Thresholds};
    /// use rust_decimal::Decimal;
    ///
    /// let table = ReferenceTable::new(vec![ReferenceEntry::new("Radix Trading", Decimal::from(96))]);
    /// let engine = Engine::new(table, Thresholds::default(), MatchingOptions::default());
    ///
    /// let report = engine.run(&["Radix Trading - QR"], &["Radix Trading - QR"], &Thresholds::default())?;
    /// assert_eq!(report.above.len(), 1);
    /// assert_eq!(report.duplicates.len(), 1);
    /// # Ok::<(), internship_pay_filter::error::EngineError>(())
    /// ```
    pub fn run<L, A>(
        &self,
        lines: &[L],
        applied: &[A],
        thresholds: &Thresholds,
    ) -> EngineResult<CategorizationReport>
    where
        L: AsRef<str> + Sync,
        A: AsRef<str>,
    {
        thresholds.validate()?;

        let start_time = Instant::now();
        let mut steps: Vec<AuditStep> = Vec::new();
        let mut warnings: Vec<AuditWarning> = Vec::new();
        let mut step_number: u32 = 1;

        if self.reference.is_empty() {
            warn!("Reference table is empty; every line will be reported as not found");
            warnings.push(AuditWarning {
                code: "EMPTY_REFERENCE_TABLE".to_string(),
                message: "No reference pay data is available".to_string(),
                severity: "high".to_string(),
            });
        }

        let index = ReferenceIndex::new(&self.reference);
        let matches = match_lines(
            lines,
            &index,
            thresholds.fuzzy_threshold,
            self.options.first_word_fallback,
        );

        for matched in &matches {
            steps.push(company_match_step(matched, thresholds.fuzzy_threshold, step_number));
            step_number += 1;

            if matched.strategy == Some(MatchStrategy::FirstWord) {
                warnings.push(AuditWarning {
                    code: "FIRST_WORD_MATCH".to_string(),
                    message: format!(
                        "'{}' matched only on its first word; the rate may belong to a different company",
                        matched.input
                    ),
                    severity: "low".to_string(),
                });
            }
        }

        let categorized = partition_matches(&matches, thresholds.pay_threshold);
        steps.push(AuditStep {
            step_number,
            rule_id: "pay_bucket".to_string(),
            rule_name: "Pay Threshold Categorization".to_string(),
            input: serde_json::json!({
                "lines": matches.len(),
                "pay_threshold": thresholds.pay_threshold.normalize().to_string()
            }),
            output: serde_json::json!({
                "above": categorized.above.len(),
                "below": categorized.below.len(),
                "not_found": categorized.not_found.len()
            }),
            reasoning: format!(
                "{} at or above ${}/hr, {} below, {} without reference data",
                categorized.above.len(),
                thresholds.pay_threshold.normalize(),
                categorized.below.len(),
                categorized.not_found.len()
            ),
        });
        step_number += 1;

        let duplicates = if applied.is_empty() {
            Vec::new()
        } else {
            let duplicates = find_duplicates(lines, applied, thresholds.duplicate_threshold);
            steps.push(duplicate_check_step(
                lines.len(),
                applied.len(),
                &duplicates,
                thresholds.duplicate_threshold,
                step_number,
            ));
            step_number += 1;
            duplicates
        };

        let percentage = threshold_percentage(&self.reference, thresholds.pay_threshold).ok();
        if let Some(percentage) = percentage {
            steps.push(AuditStep {
                step_number,
                rule_id: "threshold_percentage".to_string(),
                rule_name: "Threshold Percentage".to_string(),
                input: serde_json::json!({
                    "pay_threshold": thresholds.pay_threshold.normalize().to_string(),
                    "reference_entries": self.reference.len()
                }),
                output: serde_json::json!({
                    "percentage_at_or_above": percentage.round_dp(2).to_string()
                }),
                reasoning: format!(
                    "${}/hr is in the top {}% of reference pay rates",
                    thresholds.pay_threshold.normalize(),
                    percentage.round_dp(2)
                ),
            });
        }

        let duration = start_time.elapsed();
        info!(
            lines = matches.len(),
            above = categorized.above.len(),
            below = categorized.below.len(),
            not_found = categorized.not_found.len(),
            duplicates = duplicates.len(),
            duration_us = duration.as_micros(),
            "Categorization completed"
        );

        Ok(CategorizationReport {
            report_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: ENGINE_VERSION.to_string(),
            thresholds: *thresholds,
            reference_entries: self.reference.len(),
            above: categorized.above,
            below: categorized.below,
            not_found: categorized.not_found,
            duplicates,
            threshold_percentage: percentage,
            audit_trace: AuditTrace {
                steps,
                warnings,
                duration_us: u64::try_from(duration.as_micros()).unwrap_or(u64::MAX),
            },
        })
    }
}

fn company_match_step(matched: &MatchResult, fuzzy_threshold: u8, step_number: u32) -> AuditStep {
    let (output, reasoning) = match &matched.matched_entry {
        Some(entry) => (
            serde_json::json!({
                "matched_company": entry.company,
                "hourly_rate": entry.hourly_rate.normalize().to_string(),
                "score": matched.score,
                "strategy": matched.strategy
            }),
            format!(
                "'{}' matched '{}' (score {}) at ${}/hr",
                matched.company,
                entry.company,
                matched.score,
                entry.hourly_rate.normalize()
            ),
        ),
        None => (
            serde_json::json!({
                "matched_company": null,
                "score": matched.score
            }),
            format!(
                "No reference company scored {} or more against '{}'",
                fuzzy_threshold, matched.company
            ),
        ),
    };

    AuditStep {
        step_number,
        rule_id: "company_match".to_string(),
        rule_name: "Company Match".to_string(),
        input: serde_json::json!({
            "line": matched.input,
            "company": matched.company,
            "fuzzy_threshold": fuzzy_threshold
        }),
        output,
        reasoning,
    }
}

fn duplicate_check_step(
    new_inputs: usize,
    applied: usize,
    duplicates: &[DuplicateFlag],
    duplicate_threshold: u8,
    step_number: u32,
) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: "duplicate_check".to_string(),
        rule_name: "Already Applied Check".to_string(),
        input: serde_json::json!({
            "new_inputs": new_inputs,
            "applied": applied,
            "duplicate_threshold": duplicate_threshold
        }),
        output: serde_json::json!({
            "flagged": duplicates.len()
        }),
        reasoning: format!(
            "{} of {} lines scored {} or more against an already applied entry",
            duplicates.len(),
            new_inputs,
            duplicate_threshold
        ),
    }
}
