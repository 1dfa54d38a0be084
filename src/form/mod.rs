//! The document form: fields, events and the handlers that connect them
//! to the calculations.

mod events;
mod fields;
mod page;
mod panel;

pub use events::{EventOutcome, FormEvent, INVALID_CTC_MESSAGE, Notification};
pub use fields::{FieldId, FormFields};
pub use page::{FormPage, PreparedDocument};
pub use panel::{BreakdownPanel, HIDE_BREAKDOWN_LABEL, SHOW_BREAKDOWN_LABEL};
