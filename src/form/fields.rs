//! Named form fields.
//!
//! The document form is a flat mapping from field id to string value.
//! Only fields registered on a page exist; reads and writes to any other
//! field are skipped, so one page type can omit features another has.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::ComponentKind;

/// Identifier of a field on the document form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    /// Annual CTC input.
    Ctc,
    /// Monthly increment input.
    IncrementPerMonth,
    /// Annual basic output.
    BasicAnnual,
    /// Monthly basic output.
    BasicMonthly,
    /// Annual HRA output.
    HraAnnual,
    /// Monthly HRA output.
    HraMonthly,
    /// Annual PF output.
    PfAnnual,
    /// Monthly PF output.
    PfMonthly,
    /// Annual gratuity output.
    GratuityAnnual,
    /// Monthly gratuity output.
    GratuityMonthly,
    /// Annual special allowance output.
    SpecialAnnual,
    /// Monthly special allowance output.
    SpecialMonthly,
    /// Monthly basic output (monthly percentages form).
    Basic,
    /// Monthly HRA output (monthly percentages form).
    Hra,
    /// Monthly DA output.
    Da,
    /// Monthly conveyance output.
    Conveyance,
    /// Monthly medical output.
    Medical,
    /// Monthly special allowance output (monthly percentages form).
    SpecialAllowance,
    /// Monthly PF output (monthly percentages form).
    Pf,
    /// Professional tax output.
    ProfessionalTax,
    /// Employee's full name.
    FullName,
    /// Bank account holder name.
    AccountHolder,
    /// Employee ID.
    EmployeeId,
    /// Selected company.
    Company,
    /// Selected document type.
    DocumentType,
    /// Joining date.
    JoiningDate,
    /// Resignation date.
    ResignationDate,
    /// Selected month.
    Month,
    /// Entered year.
    Year,
    /// Printable month and year label.
    #[serde(rename = "printMonthYear")]
    PrintMonthYear,
}

impl FieldId {
    /// The element id used by the form markup.
    pub fn id(&self) -> &'static str {
        match self {
            FieldId::Ctc => "ctc",
            FieldId::IncrementPerMonth => "increment_per_month",
            FieldId::BasicAnnual => "basic_annual",
            FieldId::BasicMonthly => "basic_monthly",
            FieldId::HraAnnual => "hra_annual",
            FieldId::HraMonthly => "hra_monthly",
            FieldId::PfAnnual => "pf_annual",
            FieldId::PfMonthly => "pf_monthly",
            FieldId::GratuityAnnual => "gratuity_annual",
            FieldId::GratuityMonthly => "gratuity_monthly",
            FieldId::SpecialAnnual => "special_annual",
            FieldId::SpecialMonthly => "special_monthly",
            FieldId::Basic => "basic",
            FieldId::Hra => "hra",
            FieldId::Da => "da",
            FieldId::Conveyance => "conveyance",
            FieldId::Medical => "medical",
            FieldId::SpecialAllowance => "special_allowance",
            FieldId::Pf => "pf",
            FieldId::ProfessionalTax => "professional_tax",
            FieldId::FullName => "full_name",
            FieldId::AccountHolder => "account_holder",
            FieldId::EmployeeId => "employee_id",
            FieldId::Company => "company",
            FieldId::DocumentType => "document_type",
            FieldId::JoiningDate => "joining_date",
            FieldId::ResignationDate => "resignation_date",
            FieldId::Month => "month",
            FieldId::Year => "year",
            FieldId::PrintMonthYear => "printMonthYear",
        }
    }

    /// Annual and monthly output fields for a partition breakdown component.
    pub fn partition_outputs(kind: ComponentKind) -> Option<(FieldId, FieldId)> {
        match kind {
            ComponentKind::Basic => Some((FieldId::BasicAnnual, FieldId::BasicMonthly)),
            ComponentKind::Hra => Some((FieldId::HraAnnual, FieldId::HraMonthly)),
            ComponentKind::ProvidentFund => Some((FieldId::PfAnnual, FieldId::PfMonthly)),
            ComponentKind::Gratuity => Some((FieldId::GratuityAnnual, FieldId::GratuityMonthly)),
            ComponentKind::SpecialAllowance => {
                Some((FieldId::SpecialAnnual, FieldId::SpecialMonthly))
            }
            _ => None,
        }
    }

    /// Output field for a monthly percentages breakdown component.
    pub fn monthly_output(kind: ComponentKind) -> Option<FieldId> {
        match kind {
            ComponentKind::Basic => Some(FieldId::Basic),
            ComponentKind::Hra => Some(FieldId::Hra),
            ComponentKind::DearnessAllowance => Some(FieldId::Da),
            ComponentKind::Conveyance => Some(FieldId::Conveyance),
            ComponentKind::Medical => Some(FieldId::Medical),
            ComponentKind::SpecialAllowance => Some(FieldId::SpecialAllowance),
            ComponentKind::ProvidentFund => Some(FieldId::Pf),
            ComponentKind::ProfessionalTax => Some(FieldId::ProfessionalTax),
            _ => None,
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// The fields present on a page and their current values.
///
/// # Example
///
/// ```
/// use hr_document_engine::form::{FieldId, FormFields};
///
/// let mut fields = FormFields::with_fields([FieldId::Month, FieldId::Year]);
/// assert!(fields.set(FieldId::Month, "March"));
/// assert!(!fields.set(FieldId::Ctc, "600000"));
/// assert_eq!(fields.get(FieldId::Month), Some("March"));
/// assert_eq!(fields.get(FieldId::Ctc), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    values: HashMap<FieldId, String>,
}

impl FormFields {
    /// Creates a page with no fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a page with the given fields, all empty.
    pub fn with_fields<I: IntoIterator<Item = FieldId>>(ids: I) -> Self {
        Self {
            values: ids.into_iter().map(|id| (id, String::new())).collect(),
        }
    }

    /// Whether the field is on the page.
    pub fn has(&self, id: FieldId) -> bool {
        self.values.contains_key(&id)
    }

    /// The field's value, or `None` when the field is not on the page.
    pub fn get(&self, id: FieldId) -> Option<&str> {
        self.values.get(&id).map(String::as_str)
    }

    /// Whether the field is on the page and holds an empty string.
    pub fn is_empty(&self, id: FieldId) -> bool {
        self.get(id).is_some_and(str::is_empty)
    }

    /// Overwrites the field's value. Returns `false` when the field is not on the page.
    pub fn set(&mut self, id: FieldId, value: impl Into<String>) -> bool {
        match self.values.get_mut(&id) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }
}
