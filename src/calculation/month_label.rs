//! Month and year labels printed on salary slips.

/// Mirrors the month and year inputs into the printable label.
///
/// Values are joined with a single space exactly as entered.
///
/// # Example
///
/// ```
/// use hr_document_engine::calculation::print_month_year;
///
/// assert_eq!(print_month_year("March", "2024"), "March 2024");
/// ```
pub fn print_month_year(month: &str, year: &str) -> String {
    format!("{} {}", month, year)
}

/// Capitalizes a month name: first letter upper, the rest lower.
pub fn normalize_month(month: &str) -> String {
    let trimmed = month.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Builds one label per selected month, e.g. `["march"]` → `["March 2024"]`.
///
/// Blank selections are skipped.
pub fn slip_month_labels<I, S>(months: I, year: &str) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    months
        .into_iter()
        .map(|m| normalize_month(m.as_ref()))
        .filter(|m| !m.is_empty())
        .map(|m| print_month_year(&m, year.trim()))
        .collect()
}
