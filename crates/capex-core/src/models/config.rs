//! Configuration structures for the extraction tools and the event handler.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Report file shipped with the capital markets day material.
pub const DEFAULT_REPORT_PATH: &str = "CMD25-strategic-plan-update.pdf";

/// Main configuration for capex.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CapexConfig {
    /// Geography page extraction.
    pub geography: ReportConfig,

    /// Renewables page extraction.
    pub renewables: ReportConfig,

    /// Storage event handler.
    pub handler: HandlerConfig,
}

/// Where to find one report page and how to title its result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// PDF to read when no input is given on the command line.
    pub pdf_path: PathBuf,

    /// Substring identifying the page of interest (case-sensitive).
    pub needle: String,

    /// Title written into the extraction result.
    pub title: String,
}

impl ReportConfig {
    /// Defaults for the "Gross Investments by geography" page.
    pub fn geography() -> Self {
        Self {
            pdf_path: PathBuf::from(DEFAULT_REPORT_PATH),
            needle: "Gross Investments by geography".to_string(),
            title: "Gross Investments by Geography 2025-28".to_string(),
        }
    }

    /// Defaults for the renewable power & customers page.
    pub fn renewables() -> Self {
        Self {
            pdf_path: PathBuf::from(DEFAULT_REPORT_PATH),
            needle: "Renewable Power & Customers".to_string(),
            title: "Gross Investments in Renewable Power & Customers 2025-28".to_string(),
        }
    }
}

impl Default for CapexConfig {
    fn default() -> Self {
        Self {
            geography: ReportConfig::geography(),
            renewables: ReportConfig::renewables(),
            handler: HandlerConfig::default(),
        }
    }
}

/// Storage event handler configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandlerConfig {
    /// Name of the secret fetched on every invocation.
    pub secret_name: String,

    /// Region the secret lives in.
    pub region: String,

    /// Root directory of the local object store (`<root>/<bucket>/<key>`).
    pub storage_root: PathBuf,

    /// JSON file backing the local secret store.
    pub secrets_file: PathBuf,
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self {
            secret_name: "prod".to_string(),
            region: "eu-north-1".to_string(),
            storage_root: PathBuf::from("storage"),
            secrets_file: PathBuf::from("secrets.json"),
        }
    }
}

impl CapexConfig {
    /// Load configuration from a JSON file.
    ///
    /// Sections missing from the file fall back to their defaults; a report
    /// section has to be given in full if present.
    pub fn from_file(path: &Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }
}
