//! HR Document Engine
//!
//! This crate provides the form logic behind an HR document generator:
//! salary breakdowns derived from a single CTC figure, employee ID
//! generation from a person's name, salary slip figures, document dates,
//! and the event handlers that write results into the document form.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod form;
pub mod models;
