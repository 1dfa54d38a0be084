//! Salary slip figures.
//!
//! A slip starts from monthly CTC rounded to whole currency units, adds
//! the monthly increment, and derives each earning from that total.
//! Rounding is half-to-even throughout. Special allowance is the residual,
//! so gross salary always equals monthly CTC after increment.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::PayslipRates;
use crate::error::{EngineError, EngineResult};
use crate::models::{MONTHS_PER_YEAR, Payslip};

fn round_whole(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
}

/// Computes the monthly salary slip for an annual CTC and monthly increment.
///
/// A CTC of zero is accepted and yields a slip whose net salary is the
/// negative professional tax. Negative CTC or increment is rejected, as
/// are amounts too large to add up without overflowing.
///
/// # Examples
///
/// ```
/// use hr_document_engine::calculation::calculate_payslip;
/// use hr_document_engine::config::PayslipRates;
/// use rust_decimal::Decimal;
///
/// let slip = calculate_payslip(
///     Decimal::from(600_000),
///     Decimal::ZERO,
///     &PayslipRates::default(),
///     Decimal::from(200),
/// )
/// .unwrap();
///
/// assert_eq!(slip.basic, Decimal::from(25_000));
/// assert_eq!(slip.net_salary, Decimal::from(49_800));
/// ```
pub fn calculate_payslip(
    annual_ctc: Decimal,
    increment_per_month: Decimal,
    rates: &PayslipRates,
    professional_tax: Decimal,
) -> EngineResult<Payslip> {
    if annual_ctc < Decimal::ZERO {
        return Err(EngineError::InvalidAmount {
            input: annual_ctc.to_string(),
        });
    }
    if increment_per_month < Decimal::ZERO {
        return Err(EngineError::InvalidAmount {
            input: increment_per_month.to_string(),
        });
    }

    let too_large = || EngineError::InvalidAmount {
        input: format!("{} + {}", annual_ctc, increment_per_month),
    };

    let monthly_ctc = round_whole(annual_ctc / Decimal::from(MONTHS_PER_YEAR));
    let after_increment = monthly_ctc
        .checked_add(increment_per_month)
        .ok_or_else(too_large)?;
    let share = |base: Decimal, rate: Decimal| {
        base.checked_mul(rate).map(round_whole).ok_or_else(too_large)
    };

    let basic = share(after_increment, rates.basic)?;
    let hra = share(basic, rates.hra_of_basic)?;
    let conveyance = share(after_increment, rates.conveyance)?;
    let medical = share(after_increment, rates.medical)?;
    let telephone = share(after_increment, rates.telephone)?;

    let allocated = [basic, hra, conveyance, medical, telephone]
        .into_iter()
        .try_fold(Decimal::ZERO, Decimal::checked_add)
        .ok_or_else(too_large)?;
    let special_allowance = after_increment
        .checked_sub(allocated)
        .ok_or_else(too_large)?;

    let gross_salary = allocated
        .checked_add(special_allowance)
        .ok_or_else(too_large)?;
    let net_salary = gross_salary
        .checked_sub(professional_tax)
        .ok_or_else(too_large)?;

    Ok(Payslip {
        monthly_ctc,
        increment_per_month,
        monthly_ctc_after_increment: after_increment,
        basic,
        hra,
        conveyance,
        medical,
        telephone,
        special_allowance,
        professional_tax,
        gross_salary,
        net_salary,
    })
}
