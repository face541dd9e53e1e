//! Configuration handling for the report form

use crate::submit::DeliveryMode;
use anyhow::Result;
use directories::{ProjectDirs, UserDirs};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Environment override for the submission endpoint
const ENV_ENDPOINT: &str = "FIELD_REPORT_ENDPOINT";
/// Environment override for the xlsx output directory
const ENV_EXPORT_DIR: &str = "FIELD_REPORT_EXPORT_DIR";

/// Roster used when the config file does not list collaborators
pub const DEFAULT_ROSTER: &[&str] = &[
    "Ana", "Bruno", "Carlos", "Daniela", "Eduardo", "Fernanda", "Gustavo", "Helena", "Igor",
];

/// User configuration for the report form
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ReportConfig {
    /// Endpoint receiving submitted reports
    pub endpoint_url: Option<String>,
    /// Whether the endpoint response is inspected
    pub delivery_mode: Option<DeliveryMode>,
    /// Directory for xlsx exports
    pub export_dir: Option<PathBuf>,
    /// Collaborator roster shown in the form
    pub collaborators: Option<Vec<String>>,
}

impl ReportConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = Self::load_file()?;
        config.apply_env(
            std::env::var(ENV_ENDPOINT).ok(),
            std::env::var(ENV_EXPORT_DIR).ok(),
        );
        Ok(config)
    }

    fn load_file() -> Result<Self> {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: ReportConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    fn apply_env(&mut self, endpoint: Option<String>, export_dir: Option<String>) {
        if let Some(endpoint) = endpoint.filter(|e| !e.is_empty()) {
            self.endpoint_url = Some(endpoint);
        }
        if let Some(dir) = export_dir.filter(|d| !d.is_empty()) {
            self.export_dir = Some(PathBuf::from(dir));
        }
    }

    pub fn delivery_mode(&self) -> DeliveryMode {
        self.delivery_mode.unwrap_or_default()
    }

    /// Configured roster, or the built-in one when absent or empty
    pub fn roster(&self) -> Vec<String> {
        match &self.collaborators {
            Some(names) if !names.is_empty() => names.clone(),
            _ => DEFAULT_ROSTER.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Export directory: configured, else the user's downloads, else cwd
    pub fn export_dir(&self) -> PathBuf {
        self.export_dir
            .clone()
            .or_else(|| UserDirs::new().and_then(|d| d.download_dir().map(|p| p.to_path_buf())))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "jxa", "field-report")
}

/// Directory for the log file
pub fn log_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_local_dir().to_path_buf())
}
