//! Employee model and compensation variants.
//!
//! This module defines the [`Employee`] record and the [`Compensation`] sum
//! type that selects which salary formula applies to it.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The compensation variant of an employee, carrying the rate its formula needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Compensation {
    /// Paid per day present.
    FullTime {
        /// Pay for one day of attendance.
        daily_rate: Decimal,
    },
    /// Paid per hour worked.
    PartTime {
        /// Pay for one hour of work.
        hourly_rate: Decimal,
    },
    /// Paid a fixed monthly amount, reduced for absences.
    Contract {
        /// Pay for a full month.
        monthly_rate: Decimal,
    },
}

impl Compensation {
    /// Returns the display name of the variant, as shown in statements.
    pub fn name(&self) -> &'static str {
        match self {
            Compensation::FullTime { .. } => "Full-Time",
            Compensation::PartTime { .. } => "Part-Time",
            Compensation::Contract { .. } => "Contract",
        }
    }

    /// Returns the rate the variant's formula is based on.
    pub fn rate(&self) -> Decimal {
        match *self {
            Compensation::FullTime { daily_rate } => daily_rate,
            Compensation::PartTime { hourly_rate } => hourly_rate,
            Compensation::Contract { monthly_rate } => monthly_rate,
        }
    }
}

impl fmt::Display for Compensation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An employee known to the directory.
///
/// # Examples
///
/// ```
/// use payroll_desk::models::{Compensation, Employee};
/// use rust_decimal::Decimal;
///
/// let employee = Employee::new(
///     1,
///     "Ana Reyes",
///     30,
///     Compensation::FullTime { daily_rate: Decimal::from(500) },
/// );
/// assert_eq!(employee.compensation.name(), "Full-Time");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier within the directory.
    pub id: u32,
    /// Full name.
    pub name: String,
    /// Age in years.
    pub age: u32,
    /// Compensation variant and rate.
    #[serde(flatten)]
    pub compensation: Compensation,
}

impl Employee {
    /// Creates an employee record.
    pub fn new(id: u32, name: impl Into<String>, age: u32, compensation: Compensation) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            compensation,
        }
    }
}
