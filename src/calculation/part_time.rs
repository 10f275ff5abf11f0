//! Part-time salary calculation.

use rust_decimal::Decimal;

use crate::error::PayrollResult;
use crate::models::AuditStep;

use super::{FormulaResult, overflow_error};

/// Calculates a part-time salary: `hourly_rate * hours_worked`.
///
/// Fails with a `CalculationError` when the product leaves the decimal range.
///
/// # Examples
///
/// ```
/// use payroll_desk::calculation::calculate_part_time_salary;
/// use rust_decimal::Decimal;
///
/// let result = calculate_part_time_salary(Decimal::from(150), 80).unwrap();
/// assert_eq!(result.salary, Decimal::from(12000));
/// ```
pub fn calculate_part_time_salary(
    hourly_rate: Decimal,
    hours_worked: u32,
) -> PayrollResult<FormulaResult> {
    let salary = hourly_rate
        .checked_mul(Decimal::from(hours_worked))
        .ok_or_else(|| {
            overflow_error(
                "part-time",
                format!("{} * {}", hourly_rate.normalize(), hours_worked),
            )
        })?;

    let formula = format!(
        "{} * {} = {}",
        hourly_rate.normalize(),
        hours_worked,
        salary.normalize()
    );

    let audit_step = AuditStep {
        rule_id: "part_time_salary".to_string(),
        rule_name: "Part-Time Salary".to_string(),
        input: serde_json::json!({
            "hourly_rate": hourly_rate.normalize().to_string(),
            "hours_worked": hours_worked
        }),
        output: serde_json::json!({
            "salary": salary.normalize().to_string()
        }),
        reasoning: formula.clone(),
    };

    Ok(FormulaResult {
        salary,
        input_lines: vec![format!("Hours Worked: {}", hours_worked)],
        formula,
        audit_step,
    })
}
