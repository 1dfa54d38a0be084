//! Person name and employee identifier models.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A full name split into whitespace-separated tokens.
///
/// # Example
///
/// ```
/// use hr_document_engine::models::PersonName;
///
/// let name = PersonName::parse("  Asha   Kumari Singh ").unwrap();
/// assert_eq!(name.tokens(), ["Asha", "Kumari", "Singh"]);
/// assert!(PersonName::parse("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonName {
    tokens: Vec<String>,
}

impl PersonName {
    /// Splits a full name into tokens.
    ///
    /// Returns `EmptyName` when nothing but whitespace was entered.
    pub fn parse(full_name: &str) -> EngineResult<Self> {
        let tokens: Vec<String> = full_name.split_whitespace().map(str::to_string).collect();
        if tokens.is_empty() {
            return Err(EngineError::EmptyName);
        }
        Ok(Self { tokens })
    }

    /// The name tokens, never empty.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// The first token.
    pub fn first(&self) -> &str {
        &self.tokens[0]
    }

    /// The last token; the same as [`first`](Self::first) for single-token names.
    pub fn last(&self) -> &str {
        &self.tokens[self.tokens.len() - 1]
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tokens.join(" "))
    }
}

/// An employee identifier: uppercase prefix followed by a numeric suffix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmployeeIdentifier {
    /// Uppercase prefix derived from the name.
    pub prefix: String,
    /// Random numeric suffix.
    pub suffix: u32,
}

impl fmt::Display for EmployeeIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.prefix, self.suffix)
    }
}
