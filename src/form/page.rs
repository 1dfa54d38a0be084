//! Event handlers for the document form.
//!
//! A [`FormPage`] owns the page's fields and reacts to UI events by
//! running the calculations and writing their results back into fields.
//! Handlers run one at a time through `&mut self`; fields or controls that
//! are not on the page make the matching handler a no-op.

use std::sync::Arc;

use chrono::{Datelike, Utc};
use rand::Rng;
use rand::rngs::ThreadRng;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::calculation::{
    DocumentDates, build_breakdown_report, calculate_payslip, format_fixed_two,
    format_grouped_en_in, generate_employee_id, print_month_year, slip_month_labels,
};
use crate::config::{Company, ConfigLoader};
use crate::error::{EngineError, EngineResult};
use crate::models::{
    Breakdown, BreakdownReport, Ctc, DocumentType, Payslip, parse_non_negative_amount,
};

use super::events::{EventOutcome, FormEvent, INVALID_CTC_MESSAGE};
use super::fields::{FieldId, FormFields};
use super::panel::BreakdownPanel;

/// When an employee ID generation was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IdTrigger {
    PageLoad,
    NameBlur,
    Explicit,
}

impl IdTrigger {
    /// Automatic triggers never overwrite an existing ID.
    fn overwrites(&self) -> bool {
        matches!(self, IdTrigger::Explicit)
    }
}

/// The document form and its event handlers.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use hr_document_engine::config::ConfigLoader;
/// use hr_document_engine::form::{FieldId, FormEvent, FormFields, FormPage};
///
/// let fields = FormFields::with_fields([FieldId::Month, FieldId::Year, FieldId::PrintMonthYear]);
/// let mut page = FormPage::new(Arc::new(ConfigLoader::default()), fields);
///
/// page.enter(FieldId::Month, "March");
/// page.enter(FieldId::Year, "2024");
/// page.handle(FormEvent::YearInput);
///
/// assert_eq!(page.fields().get(FieldId::PrintMonthYear), Some("March 2024"));
/// ```
#[derive(Debug)]
pub struct FormPage<R = ThreadRng> {
    config: Arc<ConfigLoader>,
    fields: FormFields,
    panel: Option<BreakdownPanel>,
    resignation_required: bool,
    last_report: Option<BreakdownReport>,
    rng: R,
}

impl FormPage<ThreadRng> {
    /// Creates a page drawing ID suffixes from the thread-local generator.
    pub fn new(config: Arc<ConfigLoader>, fields: FormFields) -> Self {
        Self::with_rng(config, fields, rand::thread_rng())
    }
}

impl<R: Rng> FormPage<R> {
    /// Creates a page with an explicit random source.
    pub fn with_rng(config: Arc<ConfigLoader>, fields: FormFields, rng: R) -> Self {
        Self {
            config,
            fields,
            panel: None,
            resignation_required: false,
            last_report: None,
            rng,
        }
    }

    /// Adds the salary breakdown button and panel to the page.
    pub fn with_breakdown_panel(mut self) -> Self {
        self.panel = Some(BreakdownPanel::new());
        self
    }

    /// The page's fields.
    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    /// Types a value into a field without firing any event.
    ///
    /// Returns `false` when the field is not on the page.
    pub fn enter(&mut self, id: FieldId, value: impl Into<String>) -> bool {
        self.fields.set(id, value)
    }

    /// The breakdown panel, when the page has one.
    pub fn panel(&self) -> Option<&BreakdownPanel> {
        self.panel.as_ref()
    }

    /// Whether the resignation date is currently required.
    pub fn resignation_required(&self) -> bool {
        self.resignation_required
    }

    /// The most recent successful breakdown.
    pub fn last_report(&self) -> Option<&BreakdownReport> {
        self.last_report.as_ref()
    }

    /// Reacts to one UI event.
    pub fn handle(&mut self, event: FormEvent) -> EventOutcome {
        debug!(event = ?event, "Handling form event");
        match event {
            FormEvent::PageLoaded => self.on_page_loaded(),
            FormEvent::SalaryBreakdownClicked => self.on_salary_breakdown_clicked(),
            FormEvent::FullNameBlurred => self.on_full_name_blurred(),
            FormEvent::GenerateIdClicked => EventOutcome::wrote(self.generate_id(IdTrigger::Explicit)),
            FormEvent::DocumentTypeChanged => self.on_document_type_changed(),
            FormEvent::MonthChanged | FormEvent::YearInput => self.on_month_year_changed(),
        }
    }

    fn on_page_loaded(&mut self) -> EventOutcome {
        EventOutcome::wrote(self.generate_id(IdTrigger::PageLoad))
    }

    fn on_salary_breakdown_clicked(&mut self) -> EventOutcome {
        let Some(raw_ctc) = self.fields.get(FieldId::Ctc).map(str::to_string) else {
            return EventOutcome::unchanged();
        };
        let Some(panel) = self.panel.as_mut() else {
            return EventOutcome::unchanged();
        };

        // The panel flips on every click, valid CTC or not.
        let visible = panel.toggle();
        debug!(visible, label = panel.button_label(), "Toggled salary breakdown panel");

        let ctc = match Ctc::parse(&raw_ctc) {
            Ok(ctc) => ctc,
            Err(err) => {
                warn!(ctc = %raw_ctc, error = %err, "Rejected salary breakdown request");
                return EventOutcome::notify(INVALID_CTC_MESSAGE);
            }
        };

        let report = build_breakdown_report(ctc, self.config.breakdown());
        let written = self.write_breakdown(&report.breakdown);

        info!(
            correlation_id = %report.report_id,
            ctc = %report.ctc,
            scheme = ?report.breakdown.scheme(),
            fields_written = written.len(),
            "Salary breakdown completed"
        );

        self.last_report = Some(report);
        EventOutcome::wrote(written)
    }

    fn write_breakdown(&mut self, breakdown: &Breakdown) -> Vec<FieldId> {
        let mut written = Vec::new();
        match breakdown {
            Breakdown::Partition(b) => {
                for (kind, amount) in b.components() {
                    let Some((annual_field, monthly_field)) = FieldId::partition_outputs(kind)
                    else {
                        continue;
                    };
                    if self.fields.set(annual_field, format_grouped_en_in(amount.annual)) {
                        written.push(annual_field);
                    }
                    if self.fields.set(monthly_field, format_grouped_en_in(amount.monthly)) {
                        written.push(monthly_field);
                    }
                }
            }
            Breakdown::MonthlyPercentages(b) => {
                for (kind, amount) in b.components() {
                    let Some(field) = FieldId::monthly_output(kind) else {
                        continue;
                    };
                    if self.fields.set(field, format_fixed_two(amount)) {
                        written.push(field);
                    }
                }
            }
        }
        written
    }

    fn on_full_name_blurred(&mut self) -> EventOutcome {
        let mut written = Vec::new();

        if let Some(name) = self.fields.get(FieldId::FullName).map(str::to_string) {
            if !name.is_empty()
                && self.fields.is_empty(FieldId::AccountHolder)
                && self.fields.set(FieldId::AccountHolder, name)
            {
                written.push(FieldId::AccountHolder);
            }
        }

        written.extend(self.generate_id(IdTrigger::NameBlur));
        EventOutcome::wrote(written)
    }

    fn generate_id(&mut self, trigger: IdTrigger) -> Vec<FieldId> {
        let Some(full_name) = self.fields.get(FieldId::FullName).map(str::to_string) else {
            return Vec::new();
        };
        let Some(current) = self.fields.get(FieldId::EmployeeId) else {
            return Vec::new();
        };
        if !trigger.overwrites() && !current.is_empty() {
            debug!(trigger = ?trigger, "Employee ID already set");
            return Vec::new();
        }

        let range = self.config.documents().employee_id;
        match generate_employee_id(&full_name, &range, &mut self.rng) {
            Ok(id) => {
                info!(trigger = ?trigger, employee_id = %id, "Generated employee ID");
                self.fields.set(FieldId::EmployeeId, id.to_string());
                vec![FieldId::EmployeeId]
            }
            Err(EngineError::EmptyName) => {
                debug!(trigger = ?trigger, "No name entered, employee ID not generated");
                Vec::new()
            }
            Err(err) => {
                warn!(trigger = ?trigger, error = %err, "Employee ID generation failed");
                Vec::new()
            }
        }
    }

    fn on_document_type_changed(&mut self) -> EventOutcome {
        let Some(selected) = self.fields.get(FieldId::DocumentType) else {
            return EventOutcome::unchanged();
        };

        let required = match selected.parse::<DocumentType>() {
            Ok(doc) => doc.requires_resignation_date(),
            Err(err) => {
                debug!(error = %err, "Unrecognised document type selected");
                false
            }
        };

        if required != self.resignation_required {
            debug!(required, "Resignation date requirement changed");
        }
        self.resignation_required = required;
        EventOutcome::unchanged()
    }

    fn on_month_year_changed(&mut self) -> EventOutcome {
        if !self.fields.has(FieldId::PrintMonthYear) {
            return EventOutcome::unchanged();
        }
        let (Some(month), Some(year)) = (
            self.fields.get(FieldId::Month),
            self.fields.get(FieldId::Year),
        ) else {
            return EventOutcome::unchanged();
        };

        let label = print_month_year(month, year);
        self.fields.set(FieldId::PrintMonthYear, label);
        EventOutcome::wrote(vec![FieldId::PrintMonthYear])
    }

    /// Computes the salary slip from the page's CTC and increment fields.
    ///
    /// A blank CTC or increment counts as zero.
    pub fn prepare_payslip(&self) -> EngineResult<Payslip> {
        let breakdown = self.config.breakdown();
        let ctc = parse_non_negative_amount(self.fields.get(FieldId::Ctc))?;
        let increment = parse_non_negative_amount(self.fields.get(FieldId::IncrementPerMonth))?;
        calculate_payslip(ctc, increment, &breakdown.payslip, breakdown.professional_tax)
    }

    /// Prepares the letter dates from the page's joining and resignation fields.
    ///
    /// A missing resignation date is an error while the selected document
    /// requires one.
    pub fn prepare_document_dates(&self) -> EngineResult<DocumentDates> {
        let resignation = self.fields.get(FieldId::ResignationDate);
        if self.resignation_required && resignation.is_none_or(|s| s.trim().is_empty()) {
            return Err(EngineError::InvalidDate {
                field: FieldId::ResignationDate.id().to_string(),
                value: String::new(),
            });
        }

        DocumentDates::prepare(
            self.fields.get(FieldId::JoiningDate),
            resignation,
            self.config.documents(),
        )
    }

    /// Gathers everything needed to render the selected document.
    ///
    /// Month labels are only built for documents issued per month; the
    /// year falls back to the current year when the field is blank.
    pub fn prepare_document<I, S>(&self, selected_months: I) -> EngineResult<PreparedDocument>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let document_type: DocumentType =
            self.fields.get(FieldId::DocumentType).unwrap_or_default().parse()?;
        let company_id = self.fields.get(FieldId::Company).unwrap_or_default();
        let company = self.config.get_company(company_id)?.clone();

        let month_labels = if document_type.uses_month_selection() {
            let year = match self.fields.get(FieldId::Year).map(str::trim) {
                Some(year) if !year.is_empty() => year.to_string(),
                _ => Utc::now().year().to_string(),
            };
            slip_month_labels(selected_months, &year)
        } else {
            Vec::new()
        };

        let prepared = PreparedDocument {
            document_type,
            template: document_type.template_name(),
            watermark_logo: self.config.watermark_for(company_id).to_string(),
            company,
            dates: self.prepare_document_dates()?,
            payslip: self.prepare_payslip()?,
            month_labels,
        };

        info!(
            document_type = %prepared.document_type,
            template = prepared.template,
            company = %prepared.company.id,
            months = prepared.month_labels.len(),
            "Prepared document"
        );
        Ok(prepared)
    }
}

/// Inputs for rendering one document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreparedDocument {
    /// The selected document type.
    pub document_type: DocumentType,
    /// Template for the first page.
    pub template: &'static str,
    /// Issuing company.
    pub company: Company,
    /// Watermark image for the company.
    pub watermark_logo: String,
    /// Formatted letter dates.
    pub dates: DocumentDates,
    /// Salary slip figures.
    pub payslip: Payslip,
    /// Printable month labels, empty unless the document is issued per month.
    pub month_labels: Vec<String>,
}
