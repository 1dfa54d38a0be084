//! Integration tests for the HR document engine.
//!
//! These drive a `FormPage` end to end with the shipped configuration:
//! - Salary breakdown (partition and monthly percentages)
//! - CTC validation and the breakdown panel
//! - Employee ID generation on load, blur and explicit request
//! - Document type and resignation date
//! - Month/year print label
//! - Salary slip figures and letter dates
//! - Company lookup

use std::str::FromStr;
use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rust_decimal::Decimal;

use hr_document_engine::calculation::{
    build_breakdown_report, derive_id_prefix, format_grouped_en_in, slip_month_labels,
};
use hr_document_engine::config::{BreakdownScheme, ConfigLoader, EngineConfig};
use hr_document_engine::error::EngineError;
use hr_document_engine::form::{
    EventOutcome, FieldId, FormEvent, FormFields, FormPage, HIDE_BREAKDOWN_LABEL,
    INVALID_CTC_MESSAGE, SHOW_BREAKDOWN_LABEL,
};
use hr_document_engine::models::{Breakdown, Ctc, DocumentType, PersonName};

// =============================================================================
// Test Helpers
// =============================================================================

const PARTITION_OUTPUTS: [FieldId; 10] = [
    FieldId::BasicAnnual,
    FieldId::BasicMonthly,
    FieldId::HraAnnual,
    FieldId::HraMonthly,
    FieldId::PfAnnual,
    FieldId::PfMonthly,
    FieldId::GratuityAnnual,
    FieldId::GratuityMonthly,
    FieldId::SpecialAnnual,
    FieldId::SpecialMonthly,
];

const MONTHLY_OUTPUTS: [FieldId; 8] = [
    FieldId::Basic,
    FieldId::Hra,
    FieldId::Da,
    FieldId::Conveyance,
    FieldId::Medical,
    FieldId::SpecialAllowance,
    FieldId::Pf,
    FieldId::ProfessionalTax,
];

fn load_config() -> Arc<ConfigLoader> {
    Arc::new(ConfigLoader::load("./config/default").expect("Failed to load config"))
}

fn create_page(fields: &[FieldId], seed: u64) -> FormPage<StdRng> {
    FormPage::with_rng(
        load_config(),
        FormFields::with_fields(fields.iter().copied()),
        StdRng::seed_from_u64(seed),
    )
}

fn create_breakdown_page() -> FormPage<StdRng> {
    let mut fields = vec![FieldId::Ctc];
    fields.extend(PARTITION_OUTPUTS);
    create_page(&fields, 1).with_breakdown_panel()
}

fn create_identity_page() -> FormPage<StdRng> {
    create_page(
        &[FieldId::FullName, FieldId::AccountHolder, FieldId::EmployeeId],
        7,
    )
}

/// Parses a grouped en-IN amount back into a decimal.
fn ungroup(value: &str) -> Decimal {
    Decimal::from_str(&value.replace(',', "")).unwrap()
}

fn employee_id(page: &FormPage<StdRng>) -> String {
    page.fields().get(FieldId::EmployeeId).unwrap().to_string()
}

fn id_suffix(id: &str, prefix: &str) -> u32 {
    assert!(id.starts_with(prefix), "{} does not start with {}", id, prefix);
    id[prefix.len()..].parse().unwrap()
}

fn assert_notified(outcome: &EventOutcome) {
    assert!(outcome.written.is_empty());
    assert_eq!(
        outcome.notification.as_ref().map(|n| n.message.as_str()),
        Some(INVALID_CTC_MESSAGE)
    );
}

// =============================================================================
// SECTION 1: Salary Breakdown
// =============================================================================

#[test]
fn test_breakdown_12_lakh_ctc() {
    let mut page = create_breakdown_page();
    page.enter(FieldId::Ctc, "1200000");

    let outcome = page.handle(FormEvent::SalaryBreakdownClicked);

    assert_eq!(outcome.written.len(), 10);
    let f = page.fields();
    assert_eq!(f.get(FieldId::BasicAnnual), Some("4,80,000"));
    assert_eq!(f.get(FieldId::HraAnnual), Some("96,000"));
    assert_eq!(f.get(FieldId::PfAnnual), Some("57,600"));
    assert_eq!(f.get(FieldId::GratuityAnnual), Some("23,088"));
    assert_eq!(f.get(FieldId::SpecialAnnual), Some("5,43,312"));
    assert_eq!(f.get(FieldId::BasicMonthly), Some("40,000"));
    assert_eq!(f.get(FieldId::HraMonthly), Some("8,000"));
    assert_eq!(f.get(FieldId::PfMonthly), Some("4,800"));
    assert_eq!(f.get(FieldId::GratuityMonthly), Some("1,924"));
    assert_eq!(f.get(FieldId::SpecialMonthly), Some("45,276"));
}

#[test]
fn test_breakdown_annual_components_sum_to_ctc() {
    for ctc in ["1200000", "600000", "350000", "1000000"] {
        let mut page = create_breakdown_page();
        page.enter(FieldId::Ctc, ctc);
        page.handle(FormEvent::SalaryBreakdownClicked);

        let report = page.last_report().unwrap();
        let Breakdown::Partition(breakdown) = &report.breakdown else {
            panic!("expected partition breakdown");
        };
        assert_eq!(breakdown.annual_total(), Decimal::from_str(ctc).unwrap());
    }
}

#[test]
fn test_breakdown_displayed_values_are_whole_numbers() {
    let mut page = create_breakdown_page();
    page.enter(FieldId::Ctc, "987654");
    page.handle(FormEvent::SalaryBreakdownClicked);

    for field in PARTITION_OUTPUTS {
        let value = page.fields().get(field).unwrap();
        assert!(!value.contains('.'), "{} shows {}", field, value);
        assert!(ungroup(value) > Decimal::ZERO);
    }
}

#[test]
fn test_breakdown_accepts_grouped_ctc_input() {
    let mut page = create_breakdown_page();
    page.enter(FieldId::Ctc, "12,00,000");
    page.handle(FormEvent::SalaryBreakdownClicked);

    assert_eq!(page.fields().get(FieldId::BasicAnnual), Some("4,80,000"));
}

#[test]
fn test_breakdown_writes_only_present_fields() {
    let mut page = create_page(&[FieldId::Ctc, FieldId::BasicAnnual, FieldId::SpecialMonthly], 1)
        .with_breakdown_panel();
    page.enter(FieldId::Ctc, "1200000");

    let outcome = page.handle(FormEvent::SalaryBreakdownClicked);

    assert_eq!(
        outcome.written,
        vec![FieldId::BasicAnnual, FieldId::SpecialMonthly]
    );
    assert!(!page.fields().has(FieldId::HraAnnual));
}

#[test]
fn test_monthly_percentages_scheme_from_config() {
    let mut config = EngineConfig::default();
    config.breakdown.scheme = BreakdownScheme::MonthlyPercentages;

    let mut fields = vec![FieldId::Ctc];
    fields.extend(MONTHLY_OUTPUTS);
    let mut page = FormPage::with_rng(
        Arc::new(ConfigLoader::from_config(config).unwrap()),
        FormFields::with_fields(fields),
        StdRng::seed_from_u64(3),
    )
    .with_breakdown_panel();
    page.enter(FieldId::Ctc, "1200000");

    let outcome = page.handle(FormEvent::SalaryBreakdownClicked);

    assert_eq!(outcome.written, MONTHLY_OUTPUTS.to_vec());
    let f = page.fields();
    assert_eq!(f.get(FieldId::Basic), Some("40000.00"));
    assert_eq!(f.get(FieldId::Hra), Some("20000.00"));
    assert_eq!(f.get(FieldId::Da), Some("10000.00"));
    assert_eq!(f.get(FieldId::Conveyance), Some("5000.00"));
    assert_eq!(f.get(FieldId::Medical), Some("5000.00"));
    assert_eq!(f.get(FieldId::SpecialAllowance), Some("20000.00"));
    assert_eq!(f.get(FieldId::Pf), Some("12000.00"));
    assert_eq!(f.get(FieldId::ProfessionalTax), Some("200.00"));
}

#[test]
fn test_report_serializes_with_scheme_tag() {
    let config = load_config();
    let report = build_breakdown_report(Ctc::parse("1200000").unwrap(), config.breakdown());

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["breakdown"]["scheme"], "partition");
    assert_eq!(json["audit_steps"].as_array().unwrap().len(), 5);
    assert_eq!(json["audit_steps"][0]["rule_id"], "partition_basic");
}

// =============================================================================
// SECTION 2: CTC Validation and Panel
// =============================================================================

#[test]
fn test_invalid_ctc_modifies_nothing() {
    for raw in ["", "   ", "0", "-5000", "NaN", "twelve lakh"] {
        let mut page = create_breakdown_page();
        for field in PARTITION_OUTPUTS {
            page.enter(field, "previous");
        }
        page.enter(FieldId::Ctc, raw);

        let outcome = page.handle(FormEvent::SalaryBreakdownClicked);

        assert_notified(&outcome);
        for field in PARTITION_OUTPUTS {
            assert_eq!(page.fields().get(field), Some("previous"), "{:?}", raw);
        }
    }
}

#[test]
fn test_double_toggle_restores_panel() {
    let mut page = create_breakdown_page();
    page.enter(FieldId::Ctc, "600000");

    page.handle(FormEvent::SalaryBreakdownClicked);
    let panel = page.panel().unwrap();
    assert!(panel.is_visible());
    assert_eq!(panel.button_label(), HIDE_BREAKDOWN_LABEL);

    page.handle(FormEvent::SalaryBreakdownClicked);
    let panel = page.panel().unwrap();
    assert!(!panel.is_visible());
    assert_eq!(panel.button_label(), SHOW_BREAKDOWN_LABEL);
}

#[test]
fn test_page_without_ctc_field_ignores_click() {
    let mut page = create_page(&[FieldId::BasicAnnual], 1).with_breakdown_panel();

    assert!(page.handle(FormEvent::SalaryBreakdownClicked).is_unchanged());
    assert!(!page.panel().unwrap().is_visible());
}

// =============================================================================
// SECTION 3: Employee ID
// =============================================================================

#[test]
fn test_prefix_examples() {
    let cases = [
        ("Asha Kumari Singh", "AKUMARIS"),
        ("Asha Singh", "AS"),
        ("Asha", "A"),
        ("  asha   kumari  devi singh ", "AKUMARIS"),
    ];
    for (name, expected) in cases {
        let parsed = PersonName::parse(name).unwrap();
        assert_eq!(derive_id_prefix(&parsed), expected, "{}", name);
    }
}

#[test]
fn test_generated_suffixes_stay_in_range() {
    let mut page = create_identity_page();
    page.enter(FieldId::FullName, "Asha Singh");

    for _ in 0..10_000 {
        page.handle(FormEvent::GenerateIdClicked);
        let id = employee_id(&page);
        let suffix = id_suffix(&id, "AS");
        assert!((1001..=9999).contains(&suffix), "suffix {} out of range", suffix);
        assert_eq!(id.len(), 6);
    }
}

#[test]
fn test_same_seed_same_id() {
    let mut first = create_identity_page();
    let mut second = create_identity_page();
    for page in [&mut first, &mut second] {
        page.enter(FieldId::FullName, "Asha Kumari Singh");
        page.handle(FormEvent::GenerateIdClicked);
    }
    assert_eq!(employee_id(&first), employee_id(&second));
}

#[test]
fn test_explicit_generation_overwrites() {
    let mut page = create_identity_page();
    page.enter(FieldId::FullName, "Asha Kumari Singh");
    page.enter(FieldId::EmployeeId, "OLD1234");

    let outcome = page.handle(FormEvent::GenerateIdClicked);

    assert_eq!(outcome.written, vec![FieldId::EmployeeId]);
    let id = employee_id(&page);
    assert_ne!(id, "OLD1234");
    id_suffix(&id, "AKUMARIS");
}

#[test]
fn test_blur_never_overwrites_id() {
    let mut page = create_identity_page();
    page.enter(FieldId::FullName, "Asha Kumari Singh");
    page.enter(FieldId::EmployeeId, "OLD1234");

    page.handle(FormEvent::FullNameBlurred);

    assert_eq!(employee_id(&page), "OLD1234");
    assert_eq!(
        page.fields().get(FieldId::AccountHolder),
        Some("Asha Kumari Singh")
    );
}

#[test]
fn test_blur_then_load_keeps_first_id() {
    let mut page = create_identity_page();
    page.enter(FieldId::FullName, "Asha");

    page.handle(FormEvent::FullNameBlurred);
    let first = employee_id(&page);
    id_suffix(&first, "A");

    page.handle(FormEvent::PageLoaded);
    page.handle(FormEvent::FullNameBlurred);
    assert_eq!(employee_id(&page), first);
}

#[test]
fn test_empty_name_is_silent_no_op() {
    let mut page = create_identity_page();

    for event in [
        FormEvent::PageLoaded,
        FormEvent::FullNameBlurred,
        FormEvent::GenerateIdClicked,
    ] {
        let outcome = page.handle(event);
        assert!(outcome.is_unchanged(), "{:?}", event);
    }
    assert_eq!(employee_id(&page), "");
    assert_eq!(page.fields().get(FieldId::AccountHolder), Some(""));
}

// =============================================================================
// SECTION 4: Document Type and Dates
// =============================================================================

#[test]
fn test_resignation_required_for_exit_letters() {
    let mut page = create_page(&[FieldId::DocumentType], 1);

    for doc in DocumentType::ALL {
        page.enter(FieldId::DocumentType, doc.id());
        page.handle(FormEvent::DocumentTypeChanged);
        let expected = matches!(
            doc,
            DocumentType::ExperienceLetter | DocumentType::RelievingLetter
        );
        assert_eq!(page.resignation_required(), expected, "{}", doc.id());
    }
}

#[test]
fn test_document_dates_from_form() {
    let mut page = create_page(
        &[
            FieldId::DocumentType,
            FieldId::JoiningDate,
            FieldId::ResignationDate,
        ],
        1,
    );
    page.enter(FieldId::DocumentType, "experience_letter");
    page.handle(FormEvent::DocumentTypeChanged);
    page.enter(FieldId::JoiningDate, "2024-03-18");
    page.enter(FieldId::ResignationDate, "2024-12-15");

    let dates = page.prepare_document_dates().unwrap();

    assert_eq!(dates.joining_date.as_deref(), Some("18 March 2024"));
    assert_eq!(dates.offer_date.as_deref(), Some("06 March 2024"));
    assert_eq!(dates.resignation_date.as_deref(), Some("15 December 2024"));
    assert_eq!(dates.relieving_date.as_deref(), Some("14 January 2025"));
}

#[test]
fn test_malformed_date_is_rejected() {
    let mut page = create_page(&[FieldId::JoiningDate], 1);
    page.enter(FieldId::JoiningDate, "18/03/2024");

    assert!(matches!(
        page.prepare_document_dates(),
        Err(EngineError::InvalidDate { .. })
    ));
}

// =============================================================================
// SECTION 5: Month Label and Salary Slip
// =============================================================================

#[test]
fn test_print_label_after_either_change() {
    let fields = [FieldId::Month, FieldId::Year, FieldId::PrintMonthYear];

    for event in [FormEvent::MonthChanged, FormEvent::YearInput] {
        let mut page = create_page(&fields, 1);
        page.enter(FieldId::Month, "March");
        page.enter(FieldId::Year, "2024");

        let outcome = page.handle(event);

        assert_eq!(outcome.written, vec![FieldId::PrintMonthYear]);
        assert_eq!(page.fields().get(FieldId::PrintMonthYear), Some("March 2024"));
    }
}

#[test]
fn test_slip_month_labels() {
    assert_eq!(
        slip_month_labels(["january", "FEBRUARY"], "2024"),
        vec!["January 2024", "February 2024"]
    );
}

#[test]
fn test_payslip_from_form() {
    let mut page = create_page(&[FieldId::Ctc, FieldId::IncrementPerMonth], 1);
    page.enter(FieldId::Ctc, "600000");

    let slip = page.prepare_payslip().unwrap();
    assert_eq!(slip.monthly_ctc, Decimal::from(50_000));
    assert_eq!(slip.gross_salary, Decimal::from(50_000));
    assert_eq!(slip.net_salary, Decimal::from(49_800));
    assert_eq!(format_grouped_en_in(slip.net_salary), "49,800");
}

#[test]
fn test_payslip_rejects_negative_increment() {
    let mut page = create_page(&[FieldId::Ctc, FieldId::IncrementPerMonth], 1);
    page.enter(FieldId::Ctc, "600000");
    page.enter(FieldId::IncrementPerMonth, "-10");

    assert!(matches!(
        page.prepare_payslip(),
        Err(EngineError::InvalidAmount { .. })
    ));
}

#[test]
fn test_prepare_salary_slip_document() {
    let mut page = create_page(
        &[
            FieldId::Company,
            FieldId::DocumentType,
            FieldId::Ctc,
            FieldId::IncrementPerMonth,
            FieldId::Year,
        ],
        1,
    );
    page.enter(FieldId::Company, "company2");
    page.enter(FieldId::DocumentType, "salary_slip");
    page.enter(FieldId::Ctc, "600000");
    page.enter(FieldId::IncrementPerMonth, "1500");
    page.enter(FieldId::Year, "2024");
    page.handle(FormEvent::DocumentTypeChanged);

    let doc = page.prepare_document(["january", "FEBRUARY"]).unwrap();

    assert_eq!(doc.template, "salary_slip");
    assert_eq!(doc.company.name, "ARR Solutions Pvt. Ltd.");
    assert_eq!(doc.watermark_logo, "arr_logo.png");
    assert_eq!(doc.month_labels, vec!["January 2024", "February 2024"]);
    assert_eq!(doc.payslip.net_salary, Decimal::from(51_300));
}

#[test]
fn test_payslip_rejects_amounts_beyond_range() {
    let mut page = create_page(&[FieldId::Ctc, FieldId::IncrementPerMonth], 1);
    page.enter(FieldId::Ctc, "79228162514264337593543950335");
    page.enter(FieldId::IncrementPerMonth, "79228162514264337593543950335");

    assert!(matches!(
        page.prepare_payslip(),
        Err(EngineError::InvalidAmount { .. })
    ));
}

// =============================================================================
// SECTION 6: Configuration
// =============================================================================

#[test]
fn test_shipped_config_matches_defaults() {
    let config = load_config();
    let defaults = EngineConfig::default();
    assert_eq!(config.breakdown(), &defaults.breakdown);
    assert_eq!(config.documents(), &defaults.documents);
    assert_eq!(config.config().companies.companies.len(), 2);
}

#[test]
fn test_company_watermarks() {
    let config = load_config();
    assert_eq!(config.watermark_for("company2"), "arr_logo.png");
    assert_eq!(config.watermark_for("unknown"), "lc_logo.png");
    assert!(matches!(
        config.get_company("unknown"),
        Err(EngineError::CompanyNotFound { .. })
    ));
}

#[test]
fn test_inverted_suffix_range_rejected_before_generation() {
    let mut config = EngineConfig::default();
    config.documents.employee_id.suffix_min = 9999;
    config.documents.employee_id.suffix_max = 1001;

    assert!(matches!(
        ConfigLoader::from_config(config),
        Err(EngineError::ConfigParseError { .. })
    ));
}
