//! Calculation logic for the HR document engine.
//!
//! This module contains the salary breakdown schemes (exact partition of
//! CTC and independent monthly percentages), salary slip figures,
//! employee ID generation, letter dates, month labels and the number
//! formats used when writing amounts into the form.

mod ctc_partition;
mod document_dates;
mod employee_id;
mod month_label;
mod monthly_allowances;
mod number_format;
mod payslip;
mod report;

pub use ctc_partition::{PartitionBreakdownResult, calculate_partition_breakdown};
pub use document_dates::{
    DocumentDates, FORM_DATE_FORMAT, parse_form_date, previous_working_day, relieving_date,
};
pub use employee_id::{derive_id_prefix, generate_employee_id, random_id_suffix};
pub use month_label::{normalize_month, print_month_year, slip_month_labels};
pub use monthly_allowances::{MonthlyBreakdownResult, calculate_monthly_breakdown};
pub use number_format::{format_fixed_two, format_grouped_en_in};
pub use payslip::calculate_payslip;
pub use report::build_breakdown_report;
