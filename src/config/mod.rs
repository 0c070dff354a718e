//! Configuration and reference data loading.
//!
//! Settings come from a `settings.yaml` file in a configuration directory.
//! Reference pay data is loaded from the spreadsheet or YAML file the
//! settings point at.
//!
//! # Example
//!
//! ```no_run
//! use internship_pay_filter::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Reference data: {}", config.reference_path().display());
//! ```

mod loader;
mod reference;
mod types;

pub use loader::{ConfigLoader, SETTINGS_FILE};
pub use reference::{COMPANY_COLUMN, RATE_COLUMN, load_reference_table, try_load_reference_table};
pub use types::{MatchingOptions, ReferenceFile, ReferenceSettings, Settings};
