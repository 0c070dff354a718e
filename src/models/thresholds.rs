//! Threshold settings shared by the engine, the settings file, and the API.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Default hourly pay cutoff in dollars.
pub const DEFAULT_PAY_THRESHOLD: u32 = 50;

/// Default minimum similarity score for a company match.
pub const DEFAULT_FUZZY_THRESHOLD: u8 = 80;

/// Default minimum similarity score for a duplicate flag.
pub const DEFAULT_DUPLICATE_THRESHOLD: u8 = 95;

/// Highest pay threshold a user may select.
pub const MAX_PAY_THRESHOLD: u32 = 200;

/// Highest possible similarity score.
pub const MAX_SCORE: u8 = 100;

/// The three user-tunable thresholds of a categorization run.
///
/// # Example
///
/// ```
/// use internship_pay_filter::models::Thresholds;
///
/// let thresholds = Thresholds::default();
/// assert_eq!(thresholds.pay_threshold.to_string(), "50");
/// assert_eq!(thresholds.fuzzy_threshold, 80);
/// assert_eq!(thresholds.duplicate_threshold, 95);
/// assert!(thresholds.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Hourly rate at or above which a match counts as "above".
    #[serde(default = "default_pay_threshold")]
    pub pay_threshold: Decimal,
    /// Minimum score for a reference entry to be a valid match.
    #[serde(default = "default_fuzzy_threshold")]
    pub fuzzy_threshold: u8,
    /// Minimum score for an input to be flagged as already applied.
    #[serde(default = "default_duplicate_threshold")]
    pub duplicate_threshold: u8,
}

fn default_pay_threshold() -> Decimal {
    Decimal::from(DEFAULT_PAY_THRESHOLD)
}

fn default_fuzzy_threshold() -> u8 {
    DEFAULT_FUZZY_THRESHOLD
}

fn default_duplicate_threshold() -> u8 {
    DEFAULT_DUPLICATE_THRESHOLD
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            pay_threshold: default_pay_threshold(),
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
            duplicate_threshold: DEFAULT_DUPLICATE_THRESHOLD,
        }
    }
}

impl Thresholds {
    /// Checks every threshold against its allowed range.
    ///
    /// The pay threshold must lie in `0..=200`; both score thresholds in
    /// `0..=100`.
    pub fn validate(&self) -> EngineResult<()> {
        if self.pay_threshold < Decimal::ZERO
            || self.pay_threshold > Decimal::from(MAX_PAY_THRESHOLD)
        {
            return Err(EngineError::InvalidThreshold {
                name: "pay".to_string(),
                value: self.pay_threshold.to_string(),
                min: 0,
                max: MAX_PAY_THRESHOLD,
            });
        }

        for (name, value) in [
            ("fuzzy", self.fuzzy_threshold),
            ("duplicate", self.duplicate_threshold),
        ] {
            if value > MAX_SCORE {
                return Err(EngineError::InvalidThreshold {
                    name: name.to_string(),
                    value: value.to_string(),
                    min: 0,
                    max: u32::from(MAX_SCORE),
                });
            }
        }

        Ok(())
    }
}
