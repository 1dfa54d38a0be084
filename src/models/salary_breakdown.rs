//! Salary breakdown models.
//!
//! This module contains the component types produced by the breakdown and
//! payslip calculations, along with the audit trail recorded while
//! producing them.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::BreakdownScheme;

use super::compensation::MONTHS_PER_YEAR;

/// A named salary component.
///
/// # Example
///
/// ```
/// use hr_document_engine::models::ComponentKind;
///
/// assert_eq!(ComponentKind::ProvidentFund.id(), "pf");
/// assert_eq!(ComponentKind::ProvidentFund.to_string(), "Provident Fund");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    /// Basic salary.
    Basic,
    /// House rent allowance.
    Hra,
    /// Provident fund contribution.
    ProvidentFund,
    /// Gratuity provision.
    Gratuity,
    /// Dearness allowance.
    DearnessAllowance,
    /// Conveyance allowance.
    Conveyance,
    /// Medical allowance.
    Medical,
    /// Telephone allowance.
    Telephone,
    /// Professional tax deduction.
    ProfessionalTax,
    /// Special allowance.
    SpecialAllowance,
}

impl ComponentKind {
    /// Short identifier used for form fields and audit rule ids.
    pub fn id(&self) -> &'static str {
        match self {
            ComponentKind::Basic => "basic",
            ComponentKind::Hra => "hra",
            ComponentKind::ProvidentFund => "pf",
            ComponentKind::Gratuity => "gratuity",
            ComponentKind::DearnessAllowance => "da",
            ComponentKind::Conveyance => "conveyance",
            ComponentKind::Medical => "medical",
            ComponentKind::Telephone => "telephone",
            ComponentKind::ProfessionalTax => "professional_tax",
            ComponentKind::SpecialAllowance => "special_allowance",
        }
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ComponentKind::Basic => "Basic",
            ComponentKind::Hra => "House Rent Allowance",
            ComponentKind::ProvidentFund => "Provident Fund",
            ComponentKind::Gratuity => "Gratuity",
            ComponentKind::DearnessAllowance => "Dearness Allowance",
            ComponentKind::Conveyance => "Conveyance",
            ComponentKind::Medical => "Medical",
            ComponentKind::Telephone => "Telephone",
            ComponentKind::ProfessionalTax => "Professional Tax",
            ComponentKind::SpecialAllowance => "Special Allowance",
        };
        write!(f, "{}", name)
    }
}

/// An annual figure and its monthly share.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentAmount {
    /// The annual amount.
    pub annual: Decimal,
    /// The annual amount divided by twelve.
    pub monthly: Decimal,
}

impl ComponentAmount {
    /// Builds a component from its annual amount.
    pub fn from_annual(annual: Decimal) -> Self {
        Self {
            annual,
            monthly: annual / Decimal::from(MONTHS_PER_YEAR),
        }
    }
}

/// Annual breakdown that partitions CTC exactly.
///
/// Special allowance is the residual, so the five annual amounts always
/// sum to `ctc`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    /// The annual CTC being partitioned.
    pub ctc: Decimal,
    /// Basic salary.
    pub basic: ComponentAmount,
    /// House rent allowance.
    pub hra: ComponentAmount,
    /// Provident fund.
    pub pf: ComponentAmount,
    /// Gratuity.
    pub gratuity: ComponentAmount,
    /// Special allowance (the residual).
    pub special: ComponentAmount,
}

impl SalaryBreakdown {
    /// Returns the components in display order.
    pub fn components(&self) -> [(ComponentKind, ComponentAmount); 5] {
        [
            (ComponentKind::Basic, self.basic),
            (ComponentKind::Hra, self.hra),
            (ComponentKind::ProvidentFund, self.pf),
            (ComponentKind::Gratuity, self.gratuity),
            (ComponentKind::SpecialAllowance, self.special),
        ]
    }

    /// Sum of the annual components.
    pub fn annual_total(&self) -> Decimal {
        self.components().iter().map(|(_, c)| c.annual).sum()
    }
}

/// Monthly breakdown where each component is an independent share of
/// monthly CTC.
///
/// The shares are not a partition: with the default rates they total 112%
/// of monthly CTC before professional tax.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyAllowanceBreakdown {
    /// Annual CTC divided by twelve.
    pub monthly_ctc: Decimal,
    /// Basic salary.
    pub basic: Decimal,
    /// House rent allowance.
    pub hra: Decimal,
    /// Dearness allowance.
    pub da: Decimal,
    /// Conveyance allowance.
    pub conveyance: Decimal,
    /// Medical allowance.
    pub medical: Decimal,
    /// Special allowance.
    pub special_allowance: Decimal,
    /// Provident fund.
    pub pf: Decimal,
    /// Fixed professional tax.
    pub professional_tax: Decimal,
}

impl MonthlyAllowanceBreakdown {
    /// Returns the components in display order.
    pub fn components(&self) -> [(ComponentKind, Decimal); 8] {
        [
            (ComponentKind::Basic, self.basic),
            (ComponentKind::Hra, self.hra),
            (ComponentKind::DearnessAllowance, self.da),
            (ComponentKind::Conveyance, self.conveyance),
            (ComponentKind::Medical, self.medical),
            (ComponentKind::SpecialAllowance, self.special_allowance),
            (ComponentKind::ProvidentFund, self.pf),
            (ComponentKind::ProfessionalTax, self.professional_tax),
        ]
    }
}

/// Monthly figures printed on a salary slip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payslip {
    /// Annual CTC divided by twelve, rounded to whole currency units.
    pub monthly_ctc: Decimal,
    /// Monthly increment added on top of monthly CTC.
    pub increment_per_month: Decimal,
    /// Monthly CTC plus increment; every component derives from this.
    pub monthly_ctc_after_increment: Decimal,
    /// Basic salary.
    pub basic: Decimal,
    /// House rent allowance.
    pub hra: Decimal,
    /// Conveyance allowance.
    pub conveyance: Decimal,
    /// Medical allowance.
    pub medical: Decimal,
    /// Telephone allowance.
    pub telephone: Decimal,
    /// Residual after the other earnings.
    pub special_allowance: Decimal,
    /// Fixed professional tax deduction.
    pub professional_tax: Decimal,
    /// Sum of all earnings.
    pub gross_salary: Decimal,
    /// Gross salary less professional tax.
    pub net_salary: Decimal,
}

/// A single step in the audit trace recording a calculation decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// What the component is a share of (e.g. "40% of CTC").
    pub basis: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The breakdown a report carries, one per scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "scheme", rename_all = "snake_case")]
pub enum Breakdown {
    /// Exact annual partition of CTC.
    Partition(SalaryBreakdown),
    /// Independent monthly percentages.
    MonthlyPercentages(MonthlyAllowanceBreakdown),
}

impl Breakdown {
    /// The scheme that produced this breakdown.
    pub fn scheme(&self) -> BreakdownScheme {
        match self {
            Breakdown::Partition(_) => BreakdownScheme::Partition,
            Breakdown::MonthlyPercentages(_) => BreakdownScheme::MonthlyPercentages,
        }
    }
}

/// The complete result of one salary breakdown request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownReport {
    /// Unique id, also used as the log correlation id.
    pub report_id: Uuid,
    /// When the breakdown was computed.
    pub timestamp: DateTime<Utc>,
    /// Crate version that produced the report.
    pub engine_version: String,
    /// The annual CTC the breakdown started from.
    pub ctc: Decimal,
    /// The computed breakdown.
    pub breakdown: Breakdown,
    /// Every rule applied, in order.
    pub audit_steps: Vec<AuditStep>,
}
