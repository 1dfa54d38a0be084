//! Configuration loading and management for the document engine.
//!
//! This module loads salary breakdown rates, document settings and the
//! company list from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use hr_document_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Breakdown scheme: {:?}", config.breakdown().scheme);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    BreakdownConfig, BreakdownScheme, CompaniesConfig, Company, DocumentsConfig, EmployeeIdConfig,
    EngineConfig, MonthlyRates, PartitionRates, PayslipRates,
};
