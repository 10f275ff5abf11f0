//! Attendance inputs requested from the user for each compensation variant.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single attendance figure the calculator may ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    /// Days the full-time employee was present.
    DaysPresent,
    /// Days the full-time employee was absent.
    DaysAbsent,
    /// Hours the part-time employee worked.
    HoursWorked,
    /// Days the contract employee was absent.
    AbsenceDays,
}

impl InputField {
    /// Machine name used in validation errors.
    pub fn key(&self) -> &'static str {
        match self {
            InputField::DaysPresent => "days_present",
            InputField::DaysAbsent => "days_absent",
            InputField::HoursWorked => "hours_worked",
            InputField::AbsenceDays => "absence_days",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            InputField::DaysPresent => "Days Present",
            InputField::DaysAbsent => "Days Absent",
            InputField::HoursWorked => "Hours Worked",
            InputField::AbsenceDays => "Absence Days",
        }
    }

    /// Prompt shown when asking for this field.
    pub fn prompt(&self) -> String {
        format!("Enter {}:", self.label())
    }

    /// Message for a missing value.
    ///
    /// `Absence Days` is plural, so its message reads "Absence Days are
    /// required." rather than "... is required.".
    pub fn required_message(&self) -> String {
        match self {
            InputField::AbsenceDays => "Absence Days are required.".to_string(),
            _ => format!("{} is required.", self.label()),
        }
    }

    /// Message for a value that is not a non-negative integer.
    pub fn invalid_message(&self) -> String {
        format!("Invalid {}. Please enter a numeric value.", self.label())
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Validated attendance figures for one calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum VariantInputs {
    /// Inputs for a full-time employee.
    FullTime {
        /// Days present in the period.
        days_present: u32,
        /// Days absent in the period.
        absences: u32,
    },
    /// Inputs for a part-time employee.
    PartTime {
        /// Hours worked in the period.
        hours_worked: u32,
    },
    /// Inputs for a contract employee.
    Contract {
        /// Days absent in the month.
        absence_days: u32,
    },
}
