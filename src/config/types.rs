//! Configuration types for the document engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. Every structure has a
//! `Default` carrying the built-in figures, so calculations can run
//! without a configuration directory.

use chrono::format::{Item, StrftimeItems};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Which salary breakdown the document form renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BreakdownScheme {
    /// Annual components that partition CTC exactly, special allowance as the residual.
    #[default]
    Partition,
    /// Independent percentages of monthly CTC plus a fixed professional tax.
    MonthlyPercentages,
}

/// Rates for the partition breakdown.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PartitionRates {
    /// Basic as a fraction of annual CTC.
    pub basic_of_ctc: Decimal,
    /// HRA as a fraction of basic.
    pub hra_of_basic: Decimal,
    /// Provident fund as a fraction of basic.
    pub pf_of_basic: Decimal,
    /// Gratuity as a fraction of basic.
    pub gratuity_of_basic: Decimal,
}

impl Default for PartitionRates {
    fn default() -> Self {
        Self {
            basic_of_ctc: Decimal::new(40, 2),
            hra_of_basic: Decimal::new(20, 2),
            pf_of_basic: Decimal::new(12, 2),
            gratuity_of_basic: Decimal::new(481, 4),
        }
    }
}

/// Rates for the monthly percentages breakdown, all fractions of monthly CTC.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MonthlyRates {
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
    /// Provident fund (of monthly CTC, not of basic).
    pub pf: Decimal,
}

impl Default for MonthlyRates {
    fn default() -> Self {
        Self {
            basic: Decimal::new(40, 2),
            hra: Decimal::new(20, 2),
            da: Decimal::new(10, 2),
            conveyance: Decimal::new(5, 2),
            medical: Decimal::new(5, 2),
            special_allowance: Decimal::new(20, 2),
            pf: Decimal::new(12, 2),
        }
    }
}

/// Rates for the printed salary slip.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PayslipRates {
    /// Basic as a fraction of monthly CTC after increment.
    pub basic: Decimal,
    /// HRA as a fraction of basic.
    pub hra_of_basic: Decimal,
    /// Conveyance as a fraction of monthly CTC after increment.
    pub conveyance: Decimal,
    /// Medical as a fraction of monthly CTC after increment.
    pub medical: Decimal,
    /// Telephone as a fraction of monthly CTC after increment.
    pub telephone: Decimal,
}

impl Default for PayslipRates {
    fn default() -> Self {
        Self {
            basic: Decimal::new(50, 2),
            hra_of_basic: Decimal::new(50, 2),
            conveyance: Decimal::new(5, 2),
            medical: Decimal::new(14, 3),
            telephone: Decimal::new(2, 2),
        }
    }
}

/// Contents of `breakdown.yaml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BreakdownConfig {
    /// The scheme the form renders.
    #[serde(default)]
    pub scheme: BreakdownScheme,
    /// Partition breakdown rates.
    #[serde(default)]
    pub partition: PartitionRates,
    /// Monthly percentages breakdown rates.
    #[serde(default)]
    pub monthly: MonthlyRates,
    /// Salary slip rates.
    #[serde(default)]
    pub payslip: PayslipRates,
    /// Fixed monthly professional tax.
    #[serde(default = "default_professional_tax")]
    pub professional_tax: Decimal,
}

fn default_professional_tax() -> Decimal {
    Decimal::from(200)
}

impl Default for BreakdownConfig {
    fn default() -> Self {
        Self {
            scheme: BreakdownScheme::default(),
            partition: PartitionRates::default(),
            monthly: MonthlyRates::default(),
            payslip: PayslipRates::default(),
            professional_tax: default_professional_tax(),
        }
    }
}

/// Inclusive range for the numeric employee ID suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct EmployeeIdConfig {
    /// Smallest suffix.
    pub suffix_min: u32,
    /// Largest suffix.
    pub suffix_max: u32,
}

impl Default for EmployeeIdConfig {
    fn default() -> Self {
        Self {
            suffix_min: 1001,
            suffix_max: 9999,
        }
    }
}

/// Contents of `documents.yaml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DocumentsConfig {
    /// Employee ID generation settings.
    #[serde(default)]
    pub employee_id: EmployeeIdConfig,
    /// Calendar days between resignation and relieving.
    pub notice_days: u32,
    /// Working days the offer letter is dated before joining.
    pub offer_lead_working_days: u32,
    /// `chrono` format string for dates printed on documents.
    pub date_format: String,
}

impl Default for DocumentsConfig {
    fn default() -> Self {
        Self {
            employee_id: EmployeeIdConfig::default(),
            notice_days: 30,
            offer_lead_working_days: 8,
            date_format: "%d %B %Y".to_string(),
        }
    }
}

impl DocumentsConfig {
    /// Checks the settings that would otherwise fail at generation time.
    ///
    /// Returns a description of the first problem found.
    pub fn validate(&self) -> Result<(), String> {
        if self.employee_id.suffix_min > self.employee_id.suffix_max {
            return Err(format!(
                "employee_id.suffix_min ({}) is greater than suffix_max ({})",
                self.employee_id.suffix_min, self.employee_id.suffix_max
            ));
        }
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(format!("invalid date_format '{}'", self.date_format));
        }
        Ok(())
    }
}

/// A company documents can be issued under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    /// Identifier used by the form's company select.
    pub id: String,
    /// Registered name printed on documents.
    pub name: String,
    /// Postal address printed on letterheads.
    #[serde(default)]
    pub address: String,
    /// Watermark image; falls back to the default watermark when absent.
    #[serde(default)]
    pub watermark_logo: Option<String>,
}

/// Contents of `companies.yaml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CompaniesConfig {
    /// Watermark used when a company has none.
    pub default_watermark: String,
    /// All configured companies.
    #[serde(default)]
    pub companies: Vec<Company>,
}

impl Default for CompaniesConfig {
    fn default() -> Self {
        Self {
            default_watermark: "lc_logo.png".to_string(),
            companies: Vec::new(),
        }
    }
}

/// The complete engine configuration loaded from YAML files.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EngineConfig {
    /// Salary breakdown configuration.
    pub breakdown: BreakdownConfig,
    /// Document and employee ID configuration.
    pub documents: DocumentsConfig,
    /// Company configuration.
    pub companies: CompaniesConfig,
}
