//! Configuration loading and management for the analysis engine.
//!
//! This module loads the analysis configuration from a YAML file: the role
//! delimiter, department presentation styles and local endpoint settings.
//!
//! # Example
//!
//! ```no_run
//! use nonconformance_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/analysis.yaml").unwrap();
//! println!("Office label: {}", config.departments().office.label);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AnalysisConfig, DepartmentStyle, DepartmentStyles, ServerConfig};
