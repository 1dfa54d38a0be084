//! Partition breakdown of an annual CTC.
//!
//! Basic is a share of CTC; HRA, provident fund and gratuity are shares of
//! basic; special allowance takes whatever is left. Because special
//! allowance is the residual and the arithmetic is decimal, the five
//! annual components always sum to CTC exactly.

use rust_decimal::Decimal;

use crate::config::PartitionRates;
use crate::models::{AuditStep, ComponentAmount, ComponentKind, Ctc, SalaryBreakdown};

/// The result of a partition breakdown, including its audit steps.
#[derive(Debug, Clone)]
pub struct PartitionBreakdownResult {
    /// The computed breakdown.
    pub breakdown: SalaryBreakdown,
    /// One audit step per component, basic first.
    pub audit_steps: Vec<AuditStep>,
}

/// Splits an annual CTC into basic, HRA, PF, gratuity and special allowance.
///
/// # Arguments
///
/// * `ctc` - The validated annual CTC
/// * `rates` - Shares for basic (of CTC) and HRA, PF, gratuity (of basic)
/// * `step_number` - The step number of the first audit step
///
/// # Examples
///
/// ```
/// use hr_document_engine::calculation::calculate_partition_breakdown;
/// use hr_document_engine::config::PartitionRates;
/// use hr_document_engine::models::Ctc;
/// use rust_decimal::Decimal;
///
/// let ctc = Ctc::parse("1200000").unwrap();
/// let result = calculate_partition_breakdown(ctc, &PartitionRates::default(), 1);
///
/// assert_eq!(result.breakdown.basic.annual, Decimal::from(480_000));
/// assert_eq!(result.breakdown.special.annual, Decimal::from(543_312));
/// assert_eq!(result.breakdown.annual_total(), ctc.annual());
/// ```
pub fn calculate_partition_breakdown(
    ctc: Ctc,
    rates: &PartitionRates,
    step_number: u32,
) -> PartitionBreakdownResult {
    let ctc_annual = ctc.annual();

    let basic = ctc_annual * rates.basic_of_ctc;
    let hra = basic * rates.hra_of_basic;
    let pf = basic * rates.pf_of_basic;
    let gratuity = basic * rates.gratuity_of_basic;
    let allocated = basic + hra + pf + gratuity;
    let special = ctc_annual - allocated;

    let mut audit_steps = Vec::with_capacity(5);
    audit_steps.push(share_step(
        step_number,
        ComponentKind::Basic,
        "CTC",
        ctc_annual,
        rates.basic_of_ctc,
        basic,
    ));
    audit_steps.push(share_step(
        step_number + 1,
        ComponentKind::Hra,
        "basic",
        basic,
        rates.hra_of_basic,
        hra,
    ));
    audit_steps.push(share_step(
        step_number + 2,
        ComponentKind::ProvidentFund,
        "basic",
        basic,
        rates.pf_of_basic,
        pf,
    ));
    audit_steps.push(share_step(
        step_number + 3,
        ComponentKind::Gratuity,
        "basic",
        basic,
        rates.gratuity_of_basic,
        gratuity,
    ));

    // Residual, so the five annual components sum to CTC.
    audit_steps.push(AuditStep {
        step_number: step_number + 4,
        rule_id: format!("partition_{}", ComponentKind::SpecialAllowance.id()),
        rule_name: ComponentKind::SpecialAllowance.to_string(),
        basis: "CTC less all other components".to_string(),
        input: serde_json::json!({
            "ctc": ctc_annual.normalize().to_string(),
            "allocated": allocated.normalize().to_string()
        }),
        output: serde_json::json!({
            "annual": special.normalize().to_string()
        }),
        reasoning: format!(
            "{} - {} = {}",
            ctc_annual.normalize(),
            allocated.normalize(),
            special.normalize()
        ),
    });

    PartitionBreakdownResult {
        breakdown: SalaryBreakdown {
            ctc: ctc_annual,
            basic: ComponentAmount::from_annual(basic),
            hra: ComponentAmount::from_annual(hra),
            pf: ComponentAmount::from_annual(pf),
            gratuity: ComponentAmount::from_annual(gratuity),
            special: ComponentAmount::from_annual(special),
        },
        audit_steps,
    }
}

fn share_step(
    step_number: u32,
    kind: ComponentKind,
    base_name: &str,
    base: Decimal,
    rate: Decimal,
    amount: Decimal,
) -> AuditStep {
    let percent = (rate * Decimal::ONE_HUNDRED).normalize();
    AuditStep {
        step_number,
        rule_id: format!("partition_{}", kind.id()),
        rule_name: kind.to_string(),
        basis: format!("{}% of {}", percent, base_name),
        input: serde_json::json!({
            "base": base_name,
            "base_amount": base.normalize().to_string(),
            "rate": rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "annual": amount.normalize().to_string()
        }),
        reasoning: format!(
            "{} x {} = {}",
            base.normalize(),
            rate.normalize(),
            amount.normalize()
        ),
    }
}
