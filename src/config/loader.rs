//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the desk
//! configuration from a YAML file.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::directory::EmployeeDirectory;
use crate::error::{PayrollError, PayrollResult};
use crate::models::Employee;

use super::types::DeskConfig;

/// Loads and provides access to the desk configuration.
///
/// Loading also builds the employee directory, so a roster with duplicate ids
/// is rejected up front.
///
/// # Example
///
/// ```no_run
/// use payroll_desk::config::ConfigLoader;
/// use payroll_desk::directory::EmployeeLookup;
///
/// let loader = ConfigLoader::load("./payroll.yaml")?;
/// let employee = loader.directory().lookup(1)?;
/// println!("{} logs to {}", employee.name, loader.log_path().display());
/// # Ok::<(), payroll_desk::error::PayrollError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: DeskConfig,
    directory: EmployeeDirectory,
}

impl ConfigLoader {
    /// Loads configuration from the YAML file at `path`.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file cannot be read (`ConfigNotFound`)
    /// - The file contains invalid YAML or unknown variants (`ConfigParseError`)
    /// - Two roster entries share an id (`DuplicateEmployee`)
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let loader = Self::from_yaml(&content, &path_str)?;
        info!(
            path = %path_str,
            employees = loader.directory.len(),
            "Configuration loaded"
        );
        Ok(loader)
    }

    /// Parses configuration from YAML text. `source` names it in errors.
    pub fn from_yaml(content: &str, source: &str) -> PayrollResult<Self> {
        let config: DeskConfig =
            serde_yaml::from_str(content).map_err(|e| PayrollError::ConfigParseError {
                path: source.to_string(),
                message: e.to_string(),
            })?;
        Self::from_config(config)
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: DeskConfig) -> PayrollResult<Self> {
        let directory = EmployeeDirectory::from_employees(config.employees.iter().cloned())?;
        Ok(Self { config, directory })
    }

    /// Replaces the configured log path.
    pub fn with_log_path<P: Into<PathBuf>>(mut self, log_path: P) -> Self {
        self.config.log_path = log_path.into();
        self
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &DeskConfig {
        &self.config
    }

    /// Returns the payroll log path.
    pub fn log_path(&self) -> &Path {
        &self.config.log_path
    }

    /// Returns the configured roster in file order.
    pub fn employees(&self) -> &[Employee] {
        &self.config.employees
    }

    /// Returns the employee directory built from the roster.
    pub fn directory(&self) -> &EmployeeDirectory {
        &self.directory
    }

    /// Consumes the loader, returning the directory.
    pub fn into_directory(self) -> EmployeeDirectory {
        self.directory
    }
}
