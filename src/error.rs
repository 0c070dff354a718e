//! Error types for the internship pay filter.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the conditions that can stop a configuration load or a statistic.
//! Matching itself never fails: an unmatched line is a `None`, not an error.

use thiserror::Error;

/// The main error type for the internship pay filter.
///
/// # Example
///
/// ```
/// use internship_pay_filter::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/settings.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/settings.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The reference pay data could not be read or had an unexpected shape.
    #[error("Failed to load reference data '{path}': {message}")]
    ReferenceDataError {
        /// The path of the reference source.
        path: String,
        /// A description of what went wrong.
        message: String,
    },

    /// A threshold was outside its allowed range.
    #[error("Invalid {name} threshold {value}: must be between {min} and {max}")]
    InvalidThreshold {
        /// Which threshold was rejected (pay, fuzzy or duplicate).
        name: String,
        /// The rejected value, as given.
        value: String,
        /// Inclusive lower bound.
        min: u32,
        /// Inclusive upper bound.
        max: u32,
    },

    /// The reference table has no entries, so table statistics are undefined.
    #[error("Reference table is empty")]
    EmptyReferenceTable,
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
