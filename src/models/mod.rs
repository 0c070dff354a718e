//! Core data models for the internship pay filter.
//!
//! This module contains all the domain models used throughout the engine.

mod categorization_result;
mod match_result;
mod reference;
mod thresholds;

pub use categorization_result::{
    AuditStep, AuditTrace, AuditWarning, CategorizationReport, CategorizedLine, CategorizedResult,
    DuplicateFlag, NotFoundLine,
};
pub use match_result::{MatchResult, MatchStrategy};
pub use reference::{ReferenceEntry, ReferenceTable};
pub use thresholds::{
    DEFAULT_DUPLICATE_THRESHOLD, DEFAULT_FUZZY_THRESHOLD, DEFAULT_PAY_THRESHOLD,
    MAX_PAY_THRESHOLD, MAX_SCORE, Thresholds,
};
