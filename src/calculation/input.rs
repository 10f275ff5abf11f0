//! Input request/response exchange between the calculator and its caller.
//!
//! The calculator never prompts on its own. It names the fields a variant
//! needs ([`required_inputs`]), asks an [`InputProvider`] for each one in
//! turn and validates the answer before asking for the next.

use std::collections::HashMap;

use tracing::warn;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{Compensation, Employee, InputField, VariantInputs};

/// Supplies raw answers for requested input fields.
///
/// Returning `None` means the request was cancelled or left unanswered, which
/// is treated the same as an empty answer.
pub trait InputProvider {
    /// Answers a request for `field`.
    fn request(&mut self, field: InputField) -> Option<String>;
}

impl<F> InputProvider for F
where
    F: FnMut(InputField) -> Option<String>,
{
    fn request(&mut self, field: InputField) -> Option<String> {
        self(field)
    }
}

/// Answers taken from a prepared map, for non-interactive callers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptedInputs(HashMap<InputField, String>);

impl ScriptedInputs {
    /// Creates an empty set of answers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an answer for `field`.
    pub fn with(mut self, field: InputField, answer: impl Into<String>) -> Self {
        self.0.insert(field, answer.into());
        self
    }
}

impl InputProvider for ScriptedInputs {
    fn request(&mut self, field: InputField) -> Option<String> {
        self.0.get(&field).cloned()
    }
}

/// Returns the ordered fields a compensation variant needs.
///
/// # Examples
///
/// ```
/// use payroll_desk::calculation::required_inputs;
/// use payroll_desk::models::{Compensation, InputField};
/// use rust_decimal::Decimal;
///
/// let fields = required_inputs(&Compensation::FullTime { daily_rate: Decimal::from(500) });
/// assert_eq!(fields, &[InputField::DaysPresent, InputField::DaysAbsent]);
/// ```
pub fn required_inputs(compensation: &Compensation) -> &'static [InputField] {
    match compensation {
        Compensation::FullTime { .. } => &[InputField::DaysPresent, InputField::DaysAbsent],
        Compensation::PartTime { .. } => &[InputField::HoursWorked],
        Compensation::Contract { .. } => &[InputField::AbsenceDays],
    }
}

/// Validates one raw answer as a non-negative integer.
///
/// Missing or blank answers are reported as required; anything other than a
/// run of ASCII digits that fits in a `u32` is reported as invalid.
pub fn parse_input(field: InputField, raw: Option<&str>) -> PayrollResult<u32> {
    let raw = match raw {
        Some(raw) if !raw.trim().is_empty() => raw,
        _ => {
            warn!(field = field.key(), "Required input missing");
            return Err(validation_error(field, field.required_message()));
        }
    };

    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        warn!(field = field.key(), input = raw, "Non-numeric input rejected");
        return Err(validation_error(field, field.invalid_message()));
    }

    raw.parse::<u32>().map_err(|e| {
        warn!(field = field.key(), input = raw, error = %e, "Input out of range");
        validation_error(field, field.invalid_message())
    })
}

/// Requests and validates every input the employee's variant needs.
///
/// Fields are requested in order and the exchange stops at the first invalid
/// answer, so later fields are never requested.
pub fn collect_inputs<P>(employee: &Employee, provider: &mut P) -> PayrollResult<VariantInputs>
where
    P: InputProvider + ?Sized,
{
    let mut ask = |field: InputField| parse_input(field, provider.request(field).as_deref());

    let inputs = match employee.compensation {
        Compensation::FullTime { .. } => {
            let days_present = ask(InputField::DaysPresent)?;
            let absences = ask(InputField::DaysAbsent)?;
            VariantInputs::FullTime {
                days_present,
                absences,
            }
        }
        Compensation::PartTime { .. } => VariantInputs::PartTime {
            hours_worked: ask(InputField::HoursWorked)?,
        },
        Compensation::Contract { .. } => VariantInputs::Contract {
            absence_days: ask(InputField::AbsenceDays)?,
        },
    };

    Ok(inputs)
}

pub(crate) fn validation_error(field: InputField, message: String) -> PayrollError {
    PayrollError::Validation {
        field: field.key().to_string(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn full_time() -> Employee {
        Employee::new(
            1,
            "Ana Reyes",
            30,
            Compensation::FullTime {
                daily_rate: Decimal::from(500),
            },
        )
    }

    #[test]
    fn test_parse_input_accepts_digits() {
        assert_eq!(parse_input(InputField::HoursWorked, Some("80")), Ok(80));
        assert_eq!(parse_input(InputField::HoursWorked, Some("007")), Ok(7));
    }

    #[test]
    fn test_parse_input_missing_is_required() {
        for raw in [None, Some(""), Some("   ")] {
            let error = parse_input(InputField::DaysPresent, raw).unwrap_err();
            assert_eq!(error.field(), Some("days_present"));
            assert_eq!(error.to_string(), "Days Present is required.");
        }
    }

    #[test]
    fn test_parse_input_rejects_non_digits() {
        for raw in ["abc", "-3", "2.5", " 4", "4 ", "+1"] {
            let error = parse_input(InputField::AbsenceDays, Some(raw)).unwrap_err();
            assert_eq!(
                error.to_string(),
                "Invalid Absence Days. Please enter a numeric value.",
                "input {raw:?}"
            );
        }
    }

    #[test]
    fn test_parse_input_rejects_overflow() {
        let error = parse_input(InputField::HoursWorked, Some("99999999999")).unwrap_err();
        assert_eq!(error.field(), Some("hours_worked"));
    }

    #[test]
    fn test_collect_inputs_in_order() {
        let mut asked = Vec::new();
        let mut provider = |field: InputField| {
            asked.push(field);
            Some(match field {
                InputField::DaysPresent => "22".to_string(),
                _ => "2".to_string(),
            })
        };

        let inputs = collect_inputs(&full_time(), &mut provider).unwrap();
        assert_eq!(
            inputs,
            VariantInputs::FullTime {
                days_present: 22,
                absences: 2
            }
        );
        assert_eq!(asked, vec![InputField::DaysPresent, InputField::DaysAbsent]);
    }

    #[test]
    fn test_collect_inputs_stops_at_first_failure() {
        let mut asked = Vec::new();
        let mut provider = |field: InputField| {
            asked.push(field);
            Some("x".to_string())
        };

        let error = collect_inputs(&full_time(), &mut provider).unwrap_err();
        assert_eq!(error.field(), Some("days_present"));
        assert_eq!(asked, vec![InputField::DaysPresent]);
    }

    #[test]
    fn test_collect_inputs_from_map() {
        let employee = Employee::new(
            2,
            "Sam Ortiz",
            25,
            Compensation::PartTime {
                hourly_rate: Decimal::from(150),
            },
        );
        let mut answers = ScriptedInputs::new().with(InputField::HoursWorked, "80");

        let inputs = collect_inputs(&employee, &mut answers).unwrap();
        assert_eq!(inputs, VariantInputs::PartTime { hours_worked: 80 });
    }

    #[test]
    fn test_collect_inputs_cancelled() {
        let employee = Employee::new(
            3,
            "Lee Park",
            41,
            Compensation::Contract {
                monthly_rate: Decimal::from(15000),
            },
        );
        let mut provider = |_: InputField| None;

        let error = collect_inputs(&employee, &mut provider).unwrap_err();
        assert_eq!(error.to_string(), "Absence Days are required.");
    }
}
