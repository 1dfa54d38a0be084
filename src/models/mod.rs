//! Core data models for the HR document engine.
//!
//! This module contains all the domain models used throughout the engine.

mod compensation;
mod document;
mod person;
mod salary_breakdown;

pub use compensation::{Ctc, MONTHS_PER_YEAR, parse_amount, parse_non_negative_amount};
pub use document::{DocumentType, UnknownDocumentType};
pub use person::{EmployeeIdentifier, PersonName};
pub use salary_breakdown::{
    AuditStep, Breakdown, BreakdownReport, ComponentAmount, ComponentKind,
    MonthlyAllowanceBreakdown, Payslip, SalaryBreakdown,
};
