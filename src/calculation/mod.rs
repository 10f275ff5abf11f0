//! Salary calculation for the payroll desk.
//!
//! This module contains the three salary formulas (full-time, part-time and
//! contract), the input exchange used to gather attendance figures, and
//! [`compute`], which dispatches on an employee's compensation variant and
//! renders the breakdown statement.

mod contract;
mod full_time;
mod input;
mod part_time;

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::error::{PayrollError, PayrollResult};
use crate::models::{AuditStep, Compensation, Employee, SalaryCalculation, VariantInputs};

pub use contract::{DAYS_PER_MONTH, calculate_contract_salary};
pub use full_time::calculate_full_time_salary;
pub use input::{InputProvider, ScriptedInputs, collect_inputs, parse_input, required_inputs};
pub use part_time::calculate_part_time_salary;

/// The outcome of applying one salary formula.
#[derive(Debug, Clone)]
pub struct FormulaResult {
    /// The computed salary.
    pub salary: Decimal,
    /// Statement lines echoing the inputs, e.g. `Days Present: 22`.
    pub input_lines: Vec<String>,
    /// The formula with operands substituted, e.g. `500 * (22 - 2) = 10000`.
    pub formula: String,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes an employee's salary from validated attendance inputs.
///
/// The formula is chosen by the employee's compensation variant. Inputs for
/// a different variant are rejected with a validation error naming the first
/// field the employee's variant needs. A result outside the decimal range is
/// a `CalculationError`.
///
/// # Examples
///
/// ```
/// use payroll_desk::calculation::compute;
/// use payroll_desk::models::{Compensation, Employee, VariantInputs};
/// use rust_decimal::Decimal;
///
/// let employee = Employee::new(
///     3,
///     "Lee Park",
///     41,
///     Compensation::Contract { monthly_rate: Decimal::from(15000) },
/// );
/// let result = compute(&employee, VariantInputs::Contract { absence_days: 3 }).unwrap();
/// assert_eq!(result.salary, Decimal::from(13500));
/// assert!(result.breakdown.contains("Salary Calculation: 15000 - (500 * 3) = 13500"));
/// ```
pub fn compute(employee: &Employee, inputs: VariantInputs) -> PayrollResult<SalaryCalculation> {
    let result = match (employee.compensation, inputs) {
        (
            Compensation::FullTime { daily_rate },
            VariantInputs::FullTime {
                days_present,
                absences,
            },
        ) => calculate_full_time_salary(daily_rate, days_present, absences)?,
        (Compensation::PartTime { hourly_rate }, VariantInputs::PartTime { hours_worked }) => {
            calculate_part_time_salary(hourly_rate, hours_worked)?
        }
        (Compensation::Contract { monthly_rate }, VariantInputs::Contract { absence_days }) => {
            calculate_contract_salary(monthly_rate, absence_days)?
        }
        (compensation, _) => {
            let field = required_inputs(&compensation)[0];
            return Err(input::validation_error(field, field.required_message()));
        }
    };

    debug!(
        employee_id = employee.id,
        rule = %result.audit_step.rule_id,
        salary = %result.salary,
        "Salary computed"
    );

    Ok(SalaryCalculation {
        employee_id: employee.id,
        inputs,
        salary: result.salary,
        breakdown: render_breakdown(employee, &result),
        audit_step: result.audit_step,
    })
}

fn overflow_error(rule: &str, expression: String) -> PayrollError {
    warn!(rule, expression = %expression, "Salary formula overflowed");
    PayrollError::CalculationError {
        message: format!("{rule} salary overflows: {expression}"),
    }
}

fn render_breakdown(employee: &Employee, result: &FormulaResult) -> String {
    let mut lines = vec![
        format!("Employee ID: {}", employee.id),
        format!("Name: {}", employee.name),
        format!("Age: {}", employee.age),
        format!("Type: {}", employee.compensation.name()),
    ];
    lines.extend(result.input_lines.iter().cloned());
    lines.push(format!("Salary Calculation: {}", result.formula));
    lines.push(format!("Total Salary: {}", result.salary.normalize()));

    let mut breakdown = lines.join("\n");
    breakdown.push('\n');
    breakdown
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn full_time() -> Employee {
        Employee::new(
            1,
            "Ana Reyes",
            30,
            Compensation::FullTime {
                daily_rate: dec("500"),
            },
        )
    }

    #[test]
    fn test_full_time_breakdown_statement() {
        let result = compute(
            &full_time(),
            VariantInputs::FullTime {
                days_present: 22,
                absences: 2,
            },
        )
        .unwrap();

        assert_eq!(result.salary, dec("10000"));
        assert_eq!(result.employee_id, 1);
        assert_eq!(
            result.breakdown,
            "Employee ID: 1\n\
             Name: Ana Reyes\n\
             Age: 30\n\
             Type: Full-Time\n\
             Days Present: 22\n\
             Absences: 2\n\
             Salary Calculation: 500 * (22 - 2) = 10000\n\
             Total Salary: 10000\n"
        );
    }

    #[test]
    fn test_part_time_breakdown_statement() {
        let employee = Employee::new(
            2,
            "Sam Ortiz",
            25,
            Compensation::PartTime {
                hourly_rate: dec("150"),
            },
        );
        let result = compute(&employee, VariantInputs::PartTime { hours_worked: 80 }).unwrap();

        assert_eq!(result.salary, dec("12000"));
        assert!(result.breakdown.contains("Type: Part-Time\n"));
        assert!(result.breakdown.contains("Hours Worked: 80\n"));
        assert!(result.breakdown.contains("Salary Calculation: 150 * 80 = 12000\n"));
        assert!(result.breakdown.ends_with("Total Salary: 12000\n"));
    }

    #[test]
    fn test_mismatched_inputs_name_first_required_field() {
        let error = compute(&full_time(), VariantInputs::PartTime { hours_worked: 8 }).unwrap_err();

        assert_eq!(error.field(), Some("days_present"));
        assert_eq!(error.to_string(), "Days Present is required.");
    }

    #[test]
    fn test_negative_salary_is_reported_unchanged() {
        let result = compute(
            &full_time(),
            VariantInputs::FullTime {
                days_present: 1,
                absences: 3,
            },
        )
        .unwrap();

        assert_eq!(result.salary, dec("-1000"));
        assert!(result.breakdown.ends_with("Total Salary: -1000\n"));
    }

    #[test]
    fn test_overflow_propagates_from_compute() {
        let employee = Employee::new(
            2,
            "Sam Ortiz",
            25,
            Compensation::PartTime {
                hourly_rate: dec("100000000000000000000"),
            },
        );

        let error = compute(
            &employee,
            VariantInputs::PartTime {
                hours_worked: 4_000_000_000,
            },
        )
        .unwrap_err();

        assert!(matches!(error, PayrollError::CalculationError { .. }));
    }
}
