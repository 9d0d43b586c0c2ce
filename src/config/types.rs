//! Configuration types for non-conformance analysis.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file.

use std::net::SocketAddr;

use serde::Deserialize;

use crate::analysis::DEFAULT_ROLE_DELIMITER;
use crate::models::Department;

/// How a department is presented in charts and tables.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DepartmentStyle {
    /// The display label.
    pub label: String,
    /// The chart color (any CSS color name or hex value).
    pub color: String,
}

/// Presentation styles for both departments.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DepartmentStyles {
    /// Style for the production department.
    #[serde(default = "default_production_style")]
    pub production: DepartmentStyle,
    /// Style for the office department.
    #[serde(default = "default_office_style")]
    pub office: DepartmentStyle,
}

impl DepartmentStyles {
    /// Returns the style for a department.
    pub fn get(&self, department: Department) -> &DepartmentStyle {
        match department {
            Department::Production => &self.production,
            Department::Office => &self.office,
        }
    }
}

impl Default for DepartmentStyles {
    fn default() -> Self {
        Self {
            production: default_production_style(),
            office: default_office_style(),
        }
    }
}

fn default_production_style() -> DepartmentStyle {
    DepartmentStyle {
        label: "Production".to_string(),
        color: "royalblue".to_string(),
    }
}

fn default_office_style() -> DepartmentStyle {
    DepartmentStyle {
        label: "Office".to_string(),
        color: "darkorange".to_string(),
    }
}

/// Local endpoint settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    /// The address the local endpoint listens on.
    #[serde(default = "default_bind")]
    pub bind: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8080))
}

/// The complete analysis configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AnalysisConfig {
    /// The delimiter separating roles within one cell.
    #[serde(default = "default_role_delimiter")]
    pub role_delimiter: String,
    /// Department presentation styles.
    #[serde(default)]
    pub departments: DepartmentStyles,
    /// Local endpoint settings.
    #[serde(default)]
    pub server: ServerConfig,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            role_delimiter: default_role_delimiter(),
            departments: DepartmentStyles::default(),
            server: ServerConfig::default(),
        }
    }
}

fn default_role_delimiter() -> String {
    DEFAULT_ROLE_DELIMITER.to_string()
}
