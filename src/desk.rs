//! The payroll desk: session state behind the interactive front end.
//!
//! The desk owns the employee directory, the payroll log handle and the text
//! currently on display. Each action runs to completion and replaces the
//! displayed text with either its result or its error message.

use std::path::Path;

use tracing::info;

use crate::calculation::{InputProvider, collect_inputs, compute};
use crate::config::ConfigLoader;
use crate::directory::{EmployeeDirectory, EmployeeLookup};
use crate::error::{PayrollError, PayrollResult};
use crate::models::SalaryCalculation;
use crate::payroll_log::PayrollLog;

/// Session state for one desk user.
///
/// # Examples
///
/// ```
/// use payroll_desk::calculation::ScriptedInputs;
/// use payroll_desk::desk::PayrollDesk;
/// use payroll_desk::directory::EmployeeDirectory;
/// use payroll_desk::models::{Compensation, Employee, InputField};
/// use payroll_desk::payroll_log::PayrollLog;
/// use rust_decimal::Decimal;
///
/// let directory = EmployeeDirectory::from_employees([Employee::new(
///     2,
///     "Sam Ortiz",
///     25,
///     Compensation::PartTime { hourly_rate: Decimal::from(150) },
/// )])
/// .unwrap();
/// let mut desk = PayrollDesk::new(directory, PayrollLog::new("payroll.txt"));
///
/// let mut answers = ScriptedInputs::new().with(InputField::HoursWorked, "80");
/// let result = desk.calculate("2", &mut answers).unwrap();
/// assert_eq!(result.salary, Decimal::from(12000));
/// assert!(desk.output().ends_with("Total Salary: 12000\n"));
/// ```
#[derive(Debug, Clone)]
pub struct PayrollDesk<D = EmployeeDirectory> {
    directory: D,
    log: PayrollLog,
    output: String,
}

impl PayrollDesk<EmployeeDirectory> {
    /// Builds a desk from loaded configuration.
    pub fn from_config(loader: ConfigLoader) -> Self {
        let log = PayrollLog::new(loader.log_path());
        Self::new(loader.into_directory(), log)
    }
}

impl<D: EmployeeLookup> PayrollDesk<D> {
    /// Creates a desk with an empty display.
    pub fn new(directory: D, log: PayrollLog) -> Self {
        Self {
            directory,
            log,
            output: String::new(),
        }
    }

    /// Returns the text currently on display.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Returns the employee directory.
    pub fn directory(&self) -> &D {
        &self.directory
    }

    /// Returns the payroll log path.
    pub fn log_path(&self) -> &Path {
        self.log.path()
    }

    /// Calculates the salary of the employee whose id was entered.
    ///
    /// Attendance inputs are requested from `provider`. On success the
    /// breakdown is displayed; on failure the error message is displayed and
    /// the error returned.
    pub fn calculate<P>(
        &mut self,
        id_text: &str,
        provider: &mut P,
    ) -> PayrollResult<SalaryCalculation>
    where
        P: InputProvider + ?Sized,
    {
        let result = self.try_calculate(id_text, provider);
        self.output = match &result {
            Ok(calculation) => calculation.breakdown.clone(),
            Err(error) => error.to_string(),
        };
        result
    }

    fn try_calculate<P>(&self, id_text: &str, provider: &mut P) -> PayrollResult<SalaryCalculation>
    where
        P: InputProvider + ?Sized,
    {
        let id = parse_employee_id(id_text)?;
        let employee = self.directory.lookup(id)?;
        let inputs = collect_inputs(employee, provider)?;
        compute(employee, inputs)
    }

    /// Appends the displayed text to the payroll log.
    ///
    /// Returns the confirmation message. The display is left unchanged.
    pub fn save(&self) -> PayrollResult<String> {
        self.log.append(&self.output)?;
        info!(path = %self.log.path().display(), "Payroll data saved");
        Ok(format!(
            "Payroll data saved to {}",
            self.log.path().display()
        ))
    }

    /// Displays the full payroll log.
    ///
    /// On failure the display is left unchanged.
    pub fn show_history(&mut self) -> PayrollResult<&str> {
        self.output = self.log.read_all()?;
        Ok(&self.output)
    }
}

/// Parses the employee id field of the form.
///
/// Any signed 32-bit integer is a well-formed id. Negative ids cannot belong
/// to an employee and are reported as `EmployeeNotFound`.
pub fn parse_employee_id(id_text: &str) -> PayrollResult<u32> {
    if id_text.is_empty() {
        return Err(PayrollError::MissingEmployeeId);
    }
    let id = id_text
        .parse::<i32>()
        .map_err(|_| PayrollError::InvalidEmployeeId {
            input: id_text.to_string(),
        })?;
    u32::try_from(id).map_err(|_| PayrollError::EmployeeNotFound { id: id.into() })
}
