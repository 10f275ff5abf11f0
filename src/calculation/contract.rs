//! Contract salary calculation.
//!
//! Contract employees receive their monthly rate less a daily equivalent for
//! every day of absence. A month is always counted as 30 days.

use rust_decimal::Decimal;

use crate::error::PayrollResult;
use crate::models::AuditStep;

use super::{FormulaResult, overflow_error};

/// Days in a month for the daily equivalent of a contract rate.
pub const DAYS_PER_MONTH: u32 = 30;

/// Calculates a contract salary:
/// `monthly_rate - (monthly_rate / 30) * absence_days`.
///
/// Enough absence days produce a negative salary; it is not clamped. A
/// deduction outside the decimal range is reported as a `CalculationError`.
///
/// # Examples
///
/// ```
/// use payroll_desk::calculation::calculate_contract_salary;
/// use rust_decimal::Decimal;
///
/// let result = calculate_contract_salary(Decimal::from(15000), 3).unwrap();
/// assert_eq!(result.salary, Decimal::from(13500));
/// assert_eq!(result.formula, "15000 - (500 * 3) = 13500");
/// ```
pub fn calculate_contract_salary(
    monthly_rate: Decimal,
    absence_days: u32,
) -> PayrollResult<FormulaResult> {
    let overflow = || {
        overflow_error(
            "contract",
            format!(
                "{} - ({} / {} * {})",
                monthly_rate.normalize(),
                monthly_rate.normalize(),
                DAYS_PER_MONTH,
                absence_days
            ),
        )
    };

    let daily_equivalent = monthly_rate
        .checked_div(Decimal::from(DAYS_PER_MONTH))
        .ok_or_else(overflow)?;
    let deduction = daily_equivalent
        .checked_mul(Decimal::from(absence_days))
        .ok_or_else(overflow)?;
    let salary = monthly_rate.checked_sub(deduction).ok_or_else(overflow)?;

    let formula = format!(
        "{} - ({} * {}) = {}",
        monthly_rate.normalize(),
        daily_equivalent.normalize(),
        absence_days,
        salary.normalize()
    );

    let audit_step = AuditStep {
        rule_id: "contract_salary".to_string(),
        rule_name: "Contract Salary".to_string(),
        input: serde_json::json!({
            "monthly_rate": monthly_rate.normalize().to_string(),
            "absence_days": absence_days
        }),
        output: serde_json::json!({
            "daily_equivalent": daily_equivalent.normalize().to_string(),
            "deduction": deduction.normalize().to_string(),
            "salary": salary.normalize().to_string()
        }),
        reasoning: formula.clone(),
    };

    Ok(FormulaResult {
        salary,
        input_lines: vec![format!("Absence Days: {}", absence_days)],
        formula,
        audit_step,
    })
}
