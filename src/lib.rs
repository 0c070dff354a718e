//! Internship pay filter
//!
//! This crate matches free-text internship postings to a reference table of
//! company pay rates with fuzzy string matching, splits them into "above"
//! and "below" a pay threshold (plus "not found"), and flags postings that
//! were already applied to.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod matching;
pub mod models;
