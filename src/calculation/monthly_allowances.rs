//! Monthly percentages breakdown.
//!
//! Every component is an independent share of monthly CTC, and a fixed
//! professional tax is listed alongside. The shares do not partition
//! monthly CTC.

use rust_decimal::Decimal;

use crate::config::MonthlyRates;
use crate::models::{AuditStep, ComponentKind, Ctc, MonthlyAllowanceBreakdown};

/// The result of a monthly percentages breakdown.
#[derive(Debug, Clone)]
pub struct MonthlyBreakdownResult {
    /// The computed breakdown.
    pub breakdown: MonthlyAllowanceBreakdown,
    /// One audit step per component, professional tax last.
    pub audit_steps: Vec<AuditStep>,
}

/// Computes each allowance as a share of monthly CTC.
///
/// # Examples
///
/// ```
/// use hr_document_engine::calculation::calculate_monthly_breakdown;
/// use hr_document_engine::config::MonthlyRates;
/// use hr_document_engine::models::Ctc;
/// use rust_decimal::Decimal;
///
/// let ctc = Ctc::parse("1200000").unwrap();
/// let result = calculate_monthly_breakdown(ctc, &MonthlyRates::default(), Decimal::from(200), 1);
///
/// assert_eq!(result.breakdown.monthly_ctc, Decimal::from(100_000));
/// assert_eq!(result.breakdown.pf, Decimal::from(12_000));
/// ```
pub fn calculate_monthly_breakdown(
    ctc: Ctc,
    rates: &MonthlyRates,
    professional_tax: Decimal,
    step_number: u32,
) -> MonthlyBreakdownResult {
    let monthly_ctc = ctc.monthly();

    let breakdown = MonthlyAllowanceBreakdown {
        monthly_ctc,
        basic: monthly_ctc * rates.basic,
        hra: monthly_ctc * rates.hra,
        da: monthly_ctc * rates.da,
        conveyance: monthly_ctc * rates.conveyance,
        medical: monthly_ctc * rates.medical,
        special_allowance: monthly_ctc * rates.special_allowance,
        pf: monthly_ctc * rates.pf,
        professional_tax,
    };

    let shares = [
        (ComponentKind::Basic, rates.basic, breakdown.basic),
        (ComponentKind::Hra, rates.hra, breakdown.hra),
        (ComponentKind::DearnessAllowance, rates.da, breakdown.da),
        (ComponentKind::Conveyance, rates.conveyance, breakdown.conveyance),
        (ComponentKind::Medical, rates.medical, breakdown.medical),
        (
            ComponentKind::SpecialAllowance,
            rates.special_allowance,
            breakdown.special_allowance,
        ),
        (ComponentKind::ProvidentFund, rates.pf, breakdown.pf),
    ];

    let mut audit_steps: Vec<AuditStep> = shares
        .iter()
        .zip(step_number..)
        .map(|((kind, rate, amount), number)| AuditStep {
            step_number: number,
            rule_id: format!("monthly_{}", kind.id()),
            rule_name: kind.to_string(),
            basis: format!(
                "{}% of monthly CTC",
                (*rate * Decimal::ONE_HUNDRED).normalize()
            ),
            input: serde_json::json!({
                "monthly_ctc": monthly_ctc.normalize().to_string(),
                "rate": rate.normalize().to_string()
            }),
            output: serde_json::json!({
                "monthly": amount.normalize().to_string()
            }),
            reasoning: format!(
                "{} x {} = {}",
                monthly_ctc.round_dp(2).normalize(),
                rate.normalize(),
                amount.round_dp(2).normalize()
            ),
        })
        .collect();

    audit_steps.push(AuditStep {
        step_number: step_number + shares.len() as u32,
        rule_id: format!("monthly_{}", ComponentKind::ProfessionalTax.id()),
        rule_name: ComponentKind::ProfessionalTax.to_string(),
        basis: "fixed monthly amount".to_string(),
        input: serde_json::json!({}),
        output: serde_json::json!({
            "monthly": professional_tax.normalize().to_string()
        }),
        reasoning: format!("Fixed professional tax of {}", professional_tax.normalize()),
    });

    MonthlyBreakdownResult {
        breakdown,
        audit_steps,
    }
}
