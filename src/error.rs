//! Error types for the HR document engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while preparing form data.

use thiserror::Error;

use crate::models::UnknownDocumentType;

/// The main error type for the HR document engine.
///
/// The form layer decides how each variant surfaces: an invalid amount
/// becomes a blocking notification, an empty name is a silent no-op.
///
/// # Example
///
/// ```
/// use hr_document_engine::error::EngineError;
///
/// let error = EngineError::InvalidAmount {
///     input: "abc".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid amount 'abc': expected a positive number");
/// ```
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// An amount was missing, not a number, zero, or negative.
    #[error("Invalid amount '{input}': expected a positive number")]
    InvalidAmount {
        /// The raw input that was rejected.
        input: String,
    },

    /// A name was empty after trimming.
    #[error("Name is empty")]
    EmptyName,

    /// A date field could not be parsed.
    #[error("Invalid date in field '{field}': {value}")]
    InvalidDate {
        /// The field holding the date.
        field: String,
        /// The raw value that failed to parse.
        value: String,
    },

    /// The selected document type is not one the generator produces.
    #[error(transparent)]
    UnknownDocumentType(#[from] UnknownDocumentType),

    /// Company id was not found in the configuration.
    #[error("Company not found: {id}")]
    CompanyNotFound {
        /// The company id that was not found.
        id: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
