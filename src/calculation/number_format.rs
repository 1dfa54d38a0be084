//! Display formatting for amounts written into the document form.
//!
//! Two formats are in use: whole numbers grouped the Indian way
//! (`12,34,567`) and plain fixed two-decimal strings (`1234.50`).

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats an amount as a whole number with en-IN digit grouping.
///
/// The last three digits form one group and every two digits before them
/// another. Halves round away from zero.
///
/// # Example
///
/// ```
/// use hr_document_engine::calculation::format_grouped_en_in;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_grouped_en_in(Decimal::from(1_234_567)), "12,34,567");
/// assert_eq!(format_grouped_en_in(Decimal::new(9995, 1)), "1,000");
/// ```
pub fn format_grouped_en_in(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = rounded.abs().trunc().to_string();

    let grouped = group_indian(&digits);
    if negative {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// Formats an amount with exactly two decimal places, halves away from zero.
///
/// # Example
///
/// ```
/// use hr_document_engine::calculation::format_fixed_two;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_fixed_two(Decimal::from(200)), "200.00");
/// assert_eq!(format_fixed_two(Decimal::new(41665, 3)), "41.67");
/// ```
pub fn format_fixed_two(value: Decimal) -> String {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded.to_string()
}
