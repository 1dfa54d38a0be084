//! Form events and their outcomes.

use serde::{Deserialize, Serialize};

use super::fields::FieldId;

/// Notification shown when the breakdown is requested without a usable CTC.
pub const INVALID_CTC_MESSAGE: &str = "Please enter valid CTC";

/// A UI event the page reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormEvent {
    /// The page finished loading.
    PageLoaded,
    /// The salary breakdown button was clicked.
    SalaryBreakdownClicked,
    /// The full name field lost focus.
    FullNameBlurred,
    /// The explicit "generate ID" button was clicked.
    GenerateIdClicked,
    /// The document type select changed.
    DocumentTypeChanged,
    /// The month select changed.
    MonthChanged,
    /// The year field received input.
    YearInput,
}

/// A blocking message for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// The message text.
    pub message: String,
}

impl Notification {
    /// Creates a notification.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// What handling one event did to the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventOutcome {
    /// Fields that were overwritten, in write order.
    pub written: Vec<FieldId>,
    /// Notification to show, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification: Option<Notification>,
}

impl EventOutcome {
    /// An outcome that changed nothing.
    pub fn unchanged() -> Self {
        Self::default()
    }

    /// An outcome that wrote the given fields.
    pub fn wrote(written: Vec<FieldId>) -> Self {
        Self {
            written,
            notification: None,
        }
    }

    /// An outcome that only raised a notification.
    pub fn notify(message: impl Into<String>) -> Self {
        Self {
            written: Vec::new(),
            notification: Some(Notification::new(message)),
        }
    }

    /// Whether no field was written and nothing was shown.
    pub fn is_unchanged(&self) -> bool {
        self.written.is_empty() && self.notification.is_none()
    }
}
