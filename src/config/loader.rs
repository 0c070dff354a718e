//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading settings
//! from a configuration directory.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::{ReferenceTable, Thresholds};

use super::reference::load_reference_table;
use super::types::{MatchingOptions, Settings};

/// Name of the settings file inside a configuration directory.
pub const SETTINGS_FILE: &str = "settings.yaml";

/// Loads and provides access to the filter settings.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── settings.yaml    # thresholds, matching options, reference path
/// └── companies.yaml   # reference pay data (or a .xlsx workbook)
/// ```
///
/// # Example
///
/// ```no_run
/// use internship_pay_filter::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// let table = loader.load_reference_table();
/// println!("{} companies, pay threshold ${}", table.len(), loader.thresholds().pay_threshold);
/// # Ok::<(), internship_pay_filter::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    root: PathBuf,
    settings: Settings,
}

impl ConfigLoader {
    /// Loads `settings.yaml` from the specified directory.
    ///
    /// # Errors
    ///
    /// - `ConfigNotFound` if the settings file is missing
    /// - `ConfigParseError` if it is not valid YAML or lacks a field
    /// - `InvalidThreshold` if a default threshold is out of range
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let root = path.as_ref().to_path_buf();
        let settings_path = root.join(SETTINGS_FILE);
        let settings = Self::load_yaml::<Settings>(&settings_path)?;
        settings.thresholds.validate()?;

        info!(
            path = %settings_path.display(),
            pay_threshold = %settings.thresholds.pay_threshold,
            fuzzy_threshold = settings.thresholds.fuzzy_threshold,
            duplicate_threshold = settings.thresholds.duplicate_threshold,
            "Loaded settings"
        );

        Ok(Self { root, settings })
    }

    /// Loads and parses a YAML file.
    pub(crate) fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns the default thresholds.
    pub fn thresholds(&self) -> Thresholds {
        self.settings.thresholds
    }

    /// Returns the matching options.
    pub fn matching(&self) -> MatchingOptions {
        self.settings.matching
    }

    /// Returns the reference data path, resolved against the config
    /// directory when relative.
    pub fn reference_path(&self) -> PathBuf {
        let path = &self.settings.reference.path;
        if path.is_absolute() {
            path.clone()
        } else {
            self.root.join(path)
        }
    }

    /// Loads the reference table, falling back to an empty table on error.
    pub fn load_reference_table(&self) -> ReferenceTable {
        load_reference_table(self.reference_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/default"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn write_settings(dir: &Path, content: &str) {
        fs::write(dir.join(SETTINGS_FILE), content).unwrap();
    }

    #[test]
    fn test_load_default_configuration() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        assert_eq!(loader.thresholds(), Thresholds::default());
        assert!(!loader.matching().first_word_fallback);
        assert!(loader.reference_path().ends_with("companies.yaml"));
    }

    #[test]
    fn test_default_reference_table_loads() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let table = loader.load_reference_table();

        assert!(!table.is_empty());
        assert!(table.iter().any(|e| e.company == "Radix Trading"));
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("settings.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        write_settings(dir.path(), "thresholds: [unclosed");

        let result = ConfigLoader::load(dir.path());

        assert!(matches!(result, Err(EngineError::ConfigParseError { .. })));
    }

    #[test]
    fn test_missing_reference_section_returns_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        write_settings(dir.path(), "thresholds:\n  pay_threshold: 60\n");

        let result = ConfigLoader::load(dir.path());

        match result {
            Err(EngineError::ConfigParseError { message, .. }) => {
                assert!(message.contains("reference"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_out_of_range_threshold_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        write_settings(
            dir.path(),
            "thresholds:\n  fuzzy_threshold: 140\nreference:\n  path: companies.yaml\n",
        );

        let result = ConfigLoader::load(dir.path());

        assert!(matches!(result, Err(EngineError::InvalidThreshold { .. })));
    }

    #[test]
    fn test_partial_thresholds_fill_defaults() {
        let dir = tempfile::tempdir().unwrap();
        write_settings(
            dir.path(),
            "thresholds:\n  pay_threshold: 65\nmatching:\n  first_word_fallback: true\nreference:\n  path: /data/levels.xlsx\n",
        );

        let loader = ConfigLoader::load(dir.path()).unwrap();

        assert_eq!(loader.thresholds().pay_threshold, dec("65"));
        assert_eq!(loader.thresholds().fuzzy_threshold, 80);
        assert!(loader.matching().first_word_fallback);
        assert_eq!(loader.reference_path(), PathBuf::from("/data/levels.xlsx"));
    }
}
