//! Reference pay data models.
//!
//! This module defines [`ReferenceEntry`] and [`ReferenceTable`], the
//! read-only company pay data every match is checked against.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A known company and its hourly internship rate.
///
/// Company names are stored exactly as loaded; they are not guaranteed
/// to be unique or normalized.
///
/// # Example
///
/// ```
/// use internship_pay_filter::models::ReferenceEntry;
/// use rust_decimal::Decimal;
///
/// let entry = ReferenceEntry::new("Jane Street", Decimal::new(1025, 1));
/// assert_eq!(entry.company, "Jane Street");
/// assert_eq!(entry.hourly_rate.to_string(), "102.5");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceEntry {
    /// The company name as it appears in the reference source.
    pub company: String,
    /// The hourly rate paid to interns.
    pub hourly_rate: Decimal,
}

impl ReferenceEntry {
    /// Creates a new reference entry.
    pub fn new(company: impl Into<String>, hourly_rate: Decimal) -> Self {
        Self {
            company: company.into(),
            hourly_rate,
        }
    }
}

/// An ordered sequence of reference entries.
///
/// An empty table means "no data available": matching still runs but
/// every input ends up not found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferenceTable {
    entries: Vec<ReferenceEntry>,
}

impl ReferenceTable {
    /// Creates a table from entries, keeping their order.
    pub fn new(entries: Vec<ReferenceEntry>) -> Self {
        Self { entries }
    }

    /// Returns the entries in load order.
    pub fn entries(&self) -> &[ReferenceEntry] {
        &self.entries
    }

    /// Returns an iterator over the entries.
    pub fn iter(&self) -> std::slice::Iter<'_, ReferenceEntry> {
        self.entries.iter()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<ReferenceEntry> for ReferenceTable {
    fn from_iter<I: IntoIterator<Item = ReferenceEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ReferenceTable {
    type Item = &'a ReferenceEntry;
    type IntoIter = std::slice::Iter<'a, ReferenceEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
