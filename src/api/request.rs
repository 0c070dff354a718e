//! Request types for the internship pay filter API.
//!
//! This module defines the JSON body for `/categorize` and the query
//! parameters for `/threshold-percentage`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{MAX_SCORE, Thresholds};

/// Request body for the `/categorize` endpoint.
///
/// Thresholds are optional; any that are omitted fall back to the
/// configured defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorizeRequest {
    /// One internship posting per entry, e.g. `"Amazon - SWE Intern"`.
    pub lines: Vec<String>,
    /// Postings already applied to, for duplicate detection.
    #[serde(default)]
    pub applied: Vec<String>,
    /// Hourly rate separating above from below.
    #[serde(default)]
    pub pay_threshold: Option<Decimal>,
    /// Minimum similarity score for a company match.
    #[serde(default)]
    pub fuzzy_threshold: Option<u32>,
    /// Minimum similarity score for an already-applied duplicate.
    #[serde(default)]
    pub duplicate_threshold: Option<u32>,
}

impl CategorizeRequest {
    /// Returns the lines that are not blank, as sent.
    pub fn non_blank_lines(&self) -> Vec<&str> {
        non_blank(&self.lines)
    }

    /// Returns the applied entries that are not blank, as sent.
    pub fn non_blank_applied(&self) -> Vec<&str> {
        non_blank(&self.applied)
    }

    /// Merges the requested thresholds over `defaults` and validates them.
    pub fn thresholds(&self, defaults: Thresholds) -> EngineResult<Thresholds> {
        let thresholds = Thresholds {
            pay_threshold: self.pay_threshold.unwrap_or(defaults.pay_threshold),
            fuzzy_threshold: score_threshold("fuzzy", self.fuzzy_threshold)?
                .unwrap_or(defaults.fuzzy_threshold),
            duplicate_threshold: score_threshold("duplicate", self.duplicate_threshold)?
                .unwrap_or(defaults.duplicate_threshold),
        };
        thresholds.validate()?;
        Ok(thresholds)
    }
}

/// Query parameters for the `/threshold-percentage` endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThresholdPercentageQuery {
    /// The cutoff to evaluate; defaults to the configured pay threshold.
    #[serde(default)]
    pub pay_threshold: Option<Decimal>,
}

fn non_blank(values: &[String]) -> Vec<&str> {
    values
        .iter()
        .map(String::as_str)
        .filter(|v| !v.trim().is_empty())
        .collect()
}

fn score_threshold(name: &str, value: Option<u32>) -> EngineResult<Option<u8>> {
    match value {
        None => Ok(None),
        Some(v) if v <= u32::from(MAX_SCORE) => Ok(u8::try_from(v).ok()),
        Some(v) => Err(EngineError::InvalidThreshold {
            name: name.to_string(),
            value: v.to_string(),
            min: 0,
            max: u32::from(MAX_SCORE),
        }),
    }
}
