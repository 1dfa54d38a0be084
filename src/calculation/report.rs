//! Salary breakdown reports.
//!
//! Runs the configured breakdown scheme for a CTC and wraps the result with
//! an id, timestamp and audit trail.

use chrono::Utc;
use uuid::Uuid;

use crate::config::{BreakdownConfig, BreakdownScheme};
use crate::models::{Breakdown, BreakdownReport, Ctc};

use super::ctc_partition::calculate_partition_breakdown;
use super::monthly_allowances::calculate_monthly_breakdown;

/// Computes a breakdown report for `ctc` using the configured scheme.
///
/// # Example
///
/// ```
/// use hr_document_engine::calculation::build_breakdown_report;
/// use hr_document_engine::config::BreakdownConfig;
/// use hr_document_engine::models::{Breakdown, Ctc};
///
/// let report = build_breakdown_report(Ctc::parse("1200000").unwrap(), &BreakdownConfig::default());
/// assert!(matches!(report.breakdown, Breakdown::Partition(_)));
/// assert_eq!(report.audit_steps.len(), 5);
/// ```
pub fn build_breakdown_report(ctc: Ctc, config: &BreakdownConfig) -> BreakdownReport {
    let (breakdown, audit_steps) = match config.scheme {
        BreakdownScheme::Partition => {
            let result = calculate_partition_breakdown(ctc, &config.partition, 1);
            (Breakdown::Partition(result.breakdown), result.audit_steps)
        }
        BreakdownScheme::MonthlyPercentages => {
            let result =
                calculate_monthly_breakdown(ctc, &config.monthly, config.professional_tax, 1);
            (
                Breakdown::MonthlyPercentages(result.breakdown),
                result.audit_steps,
            )
        }
    };

    BreakdownReport {
        report_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        ctc: ctc.annual(),
        breakdown,
        audit_steps,
    }
}
