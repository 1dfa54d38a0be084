//! Compensation amounts entered on the document form.
//!
//! [`Ctc`] is the validated annual Cost to Company figure every salary
//! breakdown starts from.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Number of months an annual figure is spread over.
pub const MONTHS_PER_YEAR: u32 = 12;

/// A validated, strictly positive annual CTC.
///
/// # Example
///
/// ```
/// use hr_document_engine::models::Ctc;
/// use rust_decimal::Decimal;
///
/// let ctc = Ctc::parse(" 12,00,000 ").unwrap();
/// assert_eq!(ctc.annual(), Decimal::from(1_200_000));
/// assert_eq!(ctc.monthly(), Decimal::from(100_000));
///
/// assert!(Ctc::parse("0").is_err());
/// assert!(Ctc::parse("").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Ctc(Decimal);

impl Ctc {
    /// Wraps an amount, rejecting zero and negative values.
    pub fn new(amount: Decimal) -> EngineResult<Self> {
        if amount <= Decimal::ZERO {
            return Err(EngineError::InvalidAmount {
                input: amount.to_string(),
            });
        }
        Ok(Self(amount))
    }

    /// Parses a CTC typed into the form.
    ///
    /// Surrounding whitespace and `,` grouping separators are ignored.
    /// Empty, non-numeric, zero and negative input is rejected.
    pub fn parse(input: &str) -> EngineResult<Self> {
        let amount = parse_amount(input)?;
        Self::new(amount).map_err(|_| EngineError::InvalidAmount {
            input: input.to_string(),
        })
    }

    /// The annual amount.
    pub fn annual(&self) -> Decimal {
        self.0
    }

    /// The annual amount spread evenly over twelve months.
    pub fn monthly(&self) -> Decimal {
        self.0 / Decimal::from(MONTHS_PER_YEAR)
    }
}

impl FromStr for Ctc {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<Decimal> for Ctc {
    type Error = EngineError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Ctc> for Decimal {
    fn from(ctc: Ctc) -> Self {
        ctc.0
    }
}

impl fmt::Display for Ctc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parses a monetary amount typed into a form field.
///
/// Accepts plain decimals (`1200000.50`), grouped input (`12,00,000`)
/// and scientific notation (`1.2e6`). Empty input is an error.
pub fn parse_amount(input: &str) -> EngineResult<Decimal> {
    let invalid = || EngineError::InvalidAmount {
        input: input.to_string(),
    };

    let cleaned: String = input.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return Err(invalid());
    }

    Decimal::from_str(&cleaned)
        .or_else(|_| Decimal::from_scientific(&cleaned))
        .map_err(|_| invalid())
}

/// Parses an optional amount where a blank field means zero.
///
/// Negative amounts are rejected.
pub fn parse_non_negative_amount(input: Option<&str>) -> EngineResult<Decimal> {
    let Some(raw) = input.filter(|s| !s.trim().is_empty()) else {
        return Ok(Decimal::ZERO);
    };

    let amount = parse_amount(raw)?;
    if amount < Decimal::ZERO {
        return Err(EngineError::InvalidAmount {
            input: raw.to_string(),
        });
    }
    Ok(amount)
}
