//! Error types for the payroll desk.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure a desk action can report. None of them are fatal: the
//! desk turns each one into a user-visible message.

use thiserror::Error;

/// The main error type for the payroll desk.
///
/// # Example
///
/// ```
/// use payroll_desk::error::PayrollError;
///
/// let error = PayrollError::Validation {
///     field: "days_present".to_string(),
///     message: "Days Present is required.".to_string(),
/// };
/// assert_eq!(error.to_string(), "Days Present is required.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayrollError {
    /// No employee id was entered.
    #[error("Please enter an Employee ID.")]
    MissingEmployeeId,

    /// The employee id was not a number.
    #[error("Invalid Employee ID. Please enter a numeric value.")]
    InvalidEmployeeId {
        /// The text that was entered.
        input: String,
    },

    /// The directory has no employee with this id.
    ///
    /// Negative ids are well-formed but never match an employee.
    #[error("Employee not found.")]
    EmployeeNotFound {
        /// The id that was looked up.
        id: i64,
    },

    /// Two employee records share an id.
    #[error("Duplicate employee id: {id}")]
    DuplicateEmployee {
        /// The id that was already taken.
        id: u32,
    },

    /// A required input was missing or not numeric.
    #[error("{message}")]
    Validation {
        /// The offending field.
        field: String,
        /// The user-facing message.
        message: String,
    },

    /// A salary formula overflowed the decimal range.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },

    /// Reading or writing the payroll log failed.
    #[error("Error accessing payroll log '{path}': {message}")]
    Io {
        /// The log file path.
        path: String,
        /// The underlying cause.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl PayrollError {
    /// Returns the field name for validation errors.
    pub fn field(&self) -> Option<&str> {
        match self {
            PayrollError::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
