//! Company name extraction from free-text posting lines.

/// Separator between the company name and the rest of a posting line.
pub const COMPANY_DELIMITER: char = '-';

/// Pulls the company name out of a posting line.
///
/// Returns the trimmed text before the first `-`, or the whole trimmed
/// line when there is no delimiter. Company names that contain a hyphen
/// are cut short; callers needing those should pass the company alone.
///
/// # Examples
///
/// ```
/// use internship_pay_filter::matching::extract_company_name;
///
/// assert_eq!(extract_company_name("Amazon - Quantitative Researcher"), "Amazon");
/// assert_eq!(extract_company_name("Radix Trading"), "Radix Trading");
/// ```
pub fn extract_company_name(line: &str) -> &str {
    match line.split_once(COMPANY_DELIMITER) {
        Some((company, _)) => company.trim(),
        None => line.trim(),
    }
}
