//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the analysis
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::{AnalysisConfig, DepartmentStyles};

/// Loads and provides access to the analysis configuration.
///
/// # File Format
///
/// ```yaml
/// role_delimiter: "/"
/// departments:
///   production:
///     label: Production
///     color: royalblue
///   office:
///     label: Office
///     color: darkorange
/// server:
///   bind: 127.0.0.1:8080
/// ```
///
/// Every key is optional and falls back to the built-in default.
///
/// # Example
///
/// ```no_run
/// use nonconformance_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/analysis.yaml")?;
/// println!("Splitting roles on '{}'", loader.role_delimiter());
/// # Ok::<(), nonconformance_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: AnalysisConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing or unreadable
    /// - The file contains invalid YAML
    /// - The role delimiter is empty
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config: AnalysisConfig =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        let loader = Self::from_config(config)?;
        info!(path = %path_str, "Loaded analysis configuration");
        Ok(loader)
    }

    /// Wraps an already-built configuration after validating it.
    pub fn from_config(config: AnalysisConfig) -> EngineResult<Self> {
        if config.role_delimiter.is_empty() {
            return Err(EngineError::InvalidConfig {
                field: "role_delimiter".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        Ok(Self { config })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Returns the role delimiter.
    pub fn role_delimiter(&self) -> &str {
        &self.config.role_delimiter
    }

    /// Returns the department presentation styles.
    pub fn departments(&self) -> &DepartmentStyles {
        &self.config.departments
    }
}
