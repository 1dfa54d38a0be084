//! Document types the generator can produce.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The kind of document selected on the form.
///
/// # Example
///
/// ```
/// use hr_document_engine::models::DocumentType;
///
/// let doc: DocumentType = "relieving_letter".parse().unwrap();
/// assert!(doc.requires_resignation_date());
/// assert_eq!(doc.template_name(), "relieving_letter");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    /// Monthly salary slip.
    SalarySlip,
    /// Offer letter.
    OfferLetter,
    /// Offer letter issued together with salary slips.
    OfferAndSalary,
    /// Experience letter.
    ExperienceLetter,
    /// Relieving letter.
    RelievingLetter,
}

impl DocumentType {
    /// Every document type, in form order.
    pub const ALL: [DocumentType; 5] = [
        DocumentType::SalarySlip,
        DocumentType::OfferLetter,
        DocumentType::OfferAndSalary,
        DocumentType::ExperienceLetter,
        DocumentType::RelievingLetter,
    ];

    /// The identifier used by the form's select element.
    pub fn id(&self) -> &'static str {
        match self {
            DocumentType::SalarySlip => "salary_slip",
            DocumentType::OfferLetter => "offer_letter",
            DocumentType::OfferAndSalary => "offer_and_salary",
            DocumentType::ExperienceLetter => "experience_letter",
            DocumentType::RelievingLetter => "relieving_letter",
        }
    }

    /// Whether the resignation date field must be filled in.
    pub fn requires_resignation_date(&self) -> bool {
        matches!(
            self,
            DocumentType::ExperienceLetter | DocumentType::RelievingLetter
        )
    }

    /// Whether the document is issued per selected month.
    pub fn uses_month_selection(&self) -> bool {
        matches!(self, DocumentType::SalarySlip | DocumentType::OfferAndSalary)
    }

    /// The template that renders the document's first page.
    pub fn template_name(&self) -> &'static str {
        match self {
            DocumentType::OfferAndSalary => DocumentType::OfferLetter.id(),
            other => other.id(),
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Error returned when a document type id is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown document type: {0}")]
pub struct UnknownDocumentType(pub String);

impl FromStr for DocumentType {
    type Err = UnknownDocumentType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim();
        DocumentType::ALL
            .into_iter()
            .find(|d| d.id() == id)
            .ok_or_else(|| UnknownDocumentType(s.to_string()))
    }
}
