//! Reference pay data loading.
//!
//! Reference tables come from either a spreadsheet (first worksheet, with a
//! `Company` and an `Hourly Salary` header) or a YAML file with a
//! `companies` list. Rows that cannot be used are skipped with a warning.

use std::path::Path;
use std::str::FromStr;

use calamine::{Data, Reader, open_workbook_auto};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use tracing::{info, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::{ReferenceEntry, ReferenceTable};

use super::loader::ConfigLoader;
use super::types::ReferenceFile;

/// Header of the spreadsheet column holding company names.
pub const COMPANY_COLUMN: &str = "Company";

/// Header of the spreadsheet column holding hourly rates.
pub const RATE_COLUMN: &str = "Hourly Salary";

/// Loads a reference table, propagating any failure.
///
/// The format is chosen by file extension: `yaml`/`yml` for YAML, and
/// `xlsx`, `xlsm`, `xlsb`, `xls` or `ods` for spreadsheets.
///
/// # Errors
///
/// Returns [`EngineError::ReferenceDataError`] if the file is missing, has
/// an unsupported extension, or cannot be parsed, and
/// [`EngineError::ConfigParseError`] for malformed YAML.
pub fn try_load_reference_table<P: AsRef<Path>>(path: P) -> EngineResult<ReferenceTable> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(reference_error(path, "file not found"));
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    let table = match extension.as_str() {
        "yaml" | "yml" => load_yaml_reference(path)?,
        "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => load_spreadsheet_reference(path)?,
        other => {
            return Err(reference_error(
                path,
                format!("unsupported file extension '{}'", other),
            ));
        }
    };

    info!(
        path = %path.display(),
        entries = table.len(),
        "Loaded reference table"
    );

    Ok(table)
}

/// Loads a reference table, falling back to an empty table on failure.
///
/// An empty table is a valid state: every input line will simply be
/// reported as not found.
///
/// # Example
///
/// ```
/// use internship_pay_filter::config::load_reference_table;
///
/// let table = load_reference_table("/nonexistent/companies.xlsx");
/// assert!(table.is_empty());
/// ```
pub fn load_reference_table<P: AsRef<Path>>(path: P) -> ReferenceTable {
    let path = path.as_ref();
    match try_load_reference_table(path) {
        Ok(table) => table,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Using empty reference table");
            ReferenceTable::default()
        }
    }
}

fn load_yaml_reference(path: &Path) -> EngineResult<ReferenceTable> {
    let file = ConfigLoader::load_yaml::<ReferenceFile>(path)?;
    let total = file.companies.len();

    let table: ReferenceTable = file
        .companies
        .into_iter()
        .filter(|entry| !entry.company.trim().is_empty())
        .collect();

    log_skipped(path, total - table.len());
    Ok(table)
}

fn load_spreadsheet_reference(path: &Path) -> EngineResult<ReferenceTable> {
    let mut workbook = open_workbook_auto(path).map_err(|e| reference_error(path, e.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| reference_error(path, "workbook has no worksheets"))?
        .map_err(|e| reference_error(path, e.to_string()))?;

    let mut rows = range.rows();
    let header = rows
        .next()
        .ok_or_else(|| reference_error(path, "worksheet is empty"))?;

    let company_col = find_column(header, COMPANY_COLUMN)
        .ok_or_else(|| reference_error(path, format!("missing '{}' column", COMPANY_COLUMN)))?;
    let rate_col = find_column(header, RATE_COLUMN)
        .ok_or_else(|| reference_error(path, format!("missing '{}' column", RATE_COLUMN)))?;

    let mut entries = Vec::new();
    let mut skipped = 0;

    for row in rows {
        let company = row.get(company_col).and_then(cell_text);
        let rate = row.get(rate_col).and_then(cell_rate);

        match (company, rate) {
            (Some(company), Some(rate)) => entries.push(ReferenceEntry::new(company, rate)),
            _ => skipped += 1,
        }
    }

    log_skipped(path, skipped);
    Ok(ReferenceTable::new(entries))
}

fn find_column(header: &[Data], name: &str) -> Option<usize> {
    header.iter().position(|cell| {
        cell_text(cell).is_some_and(|text| text.eq_ignore_ascii_case(name))
    })
}

fn cell_text(cell: &Data) -> Option<String> {
    let text = match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => f.to_string(),
        _ => return None,
    };
    (!text.is_empty()).then_some(text)
}

fn cell_rate(cell: &Data) -> Option<Decimal> {
    let rate = match cell {
        Data::Float(f) => Decimal::from_f64(*f),
        Data::Int(i) => Some(Decimal::from(*i)),
        Data::String(s) => {
            let cleaned: String = s
                .trim()
                .trim_end_matches("/hr")
                .chars()
                .filter(|c| *c != '$' && *c != ',')
                .collect();
            Decimal::from_str(cleaned.trim()).ok()
        }
        _ => None,
    };
    rate.filter(|rate| !rate.is_sign_negative())
}

fn log_skipped(path: &Path, skipped: usize) {
    if skipped > 0 {
        warn!(
            path = %path.display(),
            skipped,
            "Skipped reference rows without a company or a numeric rate"
        );
    }
}

fn reference_error(path: &Path, message: impl Into<String>) -> EngineError {
    EngineError::ReferenceDataError {
        path: path.display().to_string(),
        message: message.into(),
    }
}
