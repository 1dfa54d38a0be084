//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{BreakdownConfig, CompaniesConfig, Company, DocumentsConfig, EngineConfig};

/// Loads and provides access to engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── breakdown.yaml   # Breakdown scheme, percentages, professional tax
/// ├── documents.yaml   # Employee ID range, notice period, date format
/// └── companies.yaml   # Companies and watermarks
/// ```
///
/// # Example
///
/// ```no_run
/// use hr_document_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// let company = loader.get_company("company1").unwrap();
/// println!("Issuing as {}", company.name);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if any of the three files is missing, contains
    /// invalid YAML, or holds document settings that fail validation.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let breakdown = Self::load_yaml::<BreakdownConfig>(&path.join("breakdown.yaml"))?;
        let documents = Self::load_yaml::<DocumentsConfig>(&path.join("documents.yaml"))?;
        let companies = Self::load_yaml::<CompaniesConfig>(&path.join("companies.yaml"))?;

        documents
            .validate()
            .map_err(|message| EngineError::ConfigParseError {
                path: path.join("documents.yaml").display().to_string(),
                message,
            })?;

        debug!(
            path = %path.display(),
            scheme = ?breakdown.scheme,
            companies = companies.companies.len(),
            "Loaded engine configuration"
        );

        Ok(Self {
            config: EngineConfig {
                breakdown,
                documents,
                companies,
            },
        })
    }

    /// Wraps an already built configuration.
    ///
    /// Document settings go through the same validation as [`load`](Self::load).
    pub fn from_config(config: EngineConfig) -> EngineResult<Self> {
        config
            .documents
            .validate()
            .map_err(|message| EngineError::ConfigParseError {
                path: "<in-memory>".to_string(),
                message,
            })?;
        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the breakdown configuration.
    pub fn breakdown(&self) -> &BreakdownConfig {
        &self.config.breakdown
    }

    /// Returns the document configuration.
    pub fn documents(&self) -> &DocumentsConfig {
        &self.config.documents
    }

    /// Gets a company by its id.
    ///
    /// Returns `CompanyNotFound` for unknown ids.
    pub fn get_company(&self, id: &str) -> EngineResult<&Company> {
        self.config
            .companies
            .companies
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| EngineError::CompanyNotFound { id: id.to_string() })
    }

    /// Returns the watermark for a company id.
    ///
    /// Unknown companies and companies without a logo get the default watermark.
    pub fn watermark_for(&self, company_id: &str) -> &str {
        let companies = &self.config.companies;
        self.get_company(company_id)
            .ok()
            .and_then(|c| c.watermark_logo.as_deref())
            .unwrap_or(companies.default_watermark.as_str())
    }
}
