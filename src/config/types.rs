//! Configuration types for the payroll desk.
//!
//! This module contains the strongly-typed configuration structure that is
//! deserialized from the YAML configuration file.

use std::path::PathBuf;

use serde::Deserialize;

use crate::models::Employee;
use crate::payroll_log::DEFAULT_LOG_PATH;

/// The desk configuration file structure.
///
/// ```yaml
/// log_path: payroll.txt
/// employees:
///   - id: 1
///     name: Ana Reyes
///     age: 30
///     type: full_time
///     daily_rate: "500"
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct DeskConfig {
    /// Path of the payroll log file.
    #[serde(default = "default_log_path")]
    pub log_path: PathBuf,
    /// Employee roster used to populate the directory.
    #[serde(default)]
    pub employees: Vec<Employee>,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            log_path: default_log_path(),
            employees: Vec::new(),
        }
    }
}

fn default_log_path() -> PathBuf {
    PathBuf::from(DEFAULT_LOG_PATH)
}
