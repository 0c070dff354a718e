//! Configuration types for the internship pay filter.
//!
//! This module contains the strongly-typed structures deserialized from
//! `settings.yaml` and from YAML reference files.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::models::{ReferenceEntry, Thresholds};

/// Matching behaviour switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchingOptions {
    /// Retry unmatched names on their first word only.
    #[serde(default)]
    pub first_word_fallback: bool,
}

/// Where the reference pay data lives.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReferenceSettings {
    /// Path to a spreadsheet or YAML file. Relative paths are resolved
    /// against the configuration directory.
    pub path: PathBuf,
}

/// Settings loaded from `settings.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Default thresholds for requests that do not supply their own.
    #[serde(default)]
    pub thresholds: Thresholds,
    /// Matching behaviour switches.
    #[serde(default)]
    pub matching: MatchingOptions,
    /// Reference data source.
    pub reference: ReferenceSettings,
}

/// Structure of a YAML reference file.
#[derive(Debug, Clone, Deserialize)]
pub struct ReferenceFile {
    /// Company pay rows, in file order.
    pub companies: Vec<ReferenceEntry>,
}
