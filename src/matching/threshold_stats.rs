//! Descriptive statistics over the reference table.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::ReferenceTable;

/// Returns the percentage of reference entries paying at least `cutoff`.
///
/// Computed as `100 - (entries below cutoff / all entries) * 100`, so it
/// describes how selective a pay threshold is relative to the whole table.
/// It does not depend on any user input lines.
///
/// # Errors
///
/// Returns [`EngineError::EmptyReferenceTable`] when the table has no
/// entries, where the percentage is undefined.
///
/// # Examples
///
/// ```
/// use internship_pay_filter::matching::threshold_percentage;
/// use internship_pay_filter::models::{ReferenceEntry, ReferenceTable};
/// use rust_decimal::Decimal;
///
/// let table: ReferenceTable = (1..=4)
///     .map(|i| ReferenceEntry::new(format!("Company {i}"), Decimal::from(i * 20)))
///     .collect();
///
/// // 20 and 40 are below 50
/// assert_eq!(threshold_percentage(&table, Decimal::from(50))?, Decimal::from(50));
/// # Ok::<(), internship_pay_filter::error::EngineError>(())
/// ```
pub fn threshold_percentage(table: &ReferenceTable, cutoff: Decimal) -> EngineResult<Decimal> {
    if table.is_empty() {
        return Err(EngineError::EmptyReferenceTable);
    }

    let total = Decimal::from(table.len());
    let below = Decimal::from(table.iter().filter(|e| e.hourly_rate < cutoff).count());
    let hundred = Decimal::ONE_HUNDRED;

    Ok(hundred - below / total * hundred)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ReferenceEntry;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn table_with_rates(rates: &[u32]) -> ReferenceTable {
        rates
            .iter()
            .enumerate()
            .map(|(i, rate)| ReferenceEntry::new(format!("Company {}", i), Decimal::from(*rate)))
            .collect()
    }

    #[test]
    fn test_three_of_ten_below_gives_seventy() {
        let table = table_with_rates(&[20, 30, 40, 50, 55, 60, 70, 80, 90, 100]);

        let percentage = threshold_percentage(&table, dec("50")).unwrap();

        assert_eq!(percentage, dec("70"));
    }

    #[test]
    fn test_cutoff_equal_to_rate_counts_as_at_or_above() {
        let table = table_with_rates(&[50, 50]);
        assert_eq!(threshold_percentage(&table, dec("50")).unwrap(), dec("100"));
    }

    #[test]
    fn test_cutoff_above_every_rate_gives_zero() {
        let table = table_with_rates(&[10, 20, 30]);
        assert_eq!(threshold_percentage(&table, dec("200")).unwrap(), dec("0"));
    }

    #[test]
    fn test_empty_table_is_guarded() {
        let result = threshold_percentage(&ReferenceTable::default(), dec("50"));
        assert!(matches!(result, Err(EngineError::EmptyReferenceTable)));
    }
}
