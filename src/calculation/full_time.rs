//! Full-time salary calculation.
//!
//! Full-time employees are paid their daily rate for every day present, less
//! one day for each absence.

use rust_decimal::Decimal;

use crate::error::PayrollResult;
use crate::models::AuditStep;

use super::{FormulaResult, overflow_error};

/// Calculates a full-time salary: `daily_rate * (days_present - absences)`.
///
/// Absences exceeding days present produce a negative salary; it is not
/// clamped. A product outside the decimal range is reported as a
/// `CalculationError`.
///
/// # Examples
///
/// ```
/// use payroll_desk::calculation::calculate_full_time_salary;
/// use rust_decimal::Decimal;
///
/// let result = calculate_full_time_salary(Decimal::from(500), 22, 2).unwrap();
/// assert_eq!(result.salary, Decimal::from(10000));
/// assert_eq!(result.formula, "500 * (22 - 2) = 10000");
/// ```
pub fn calculate_full_time_salary(
    daily_rate: Decimal,
    days_present: u32,
    absences: u32,
) -> PayrollResult<FormulaResult> {
    let paid_days = i64::from(days_present) - i64::from(absences);
    let salary = daily_rate
        .checked_mul(Decimal::from(paid_days))
        .ok_or_else(|| {
            overflow_error(
                "full-time",
                format!("{} * ({} - {})", daily_rate.normalize(), days_present, absences),
            )
        })?;

    let formula = format!(
        "{} * ({} - {}) = {}",
        daily_rate.normalize(),
        days_present,
        absences,
        salary.normalize()
    );

    let audit_step = AuditStep {
        rule_id: "full_time_salary".to_string(),
        rule_name: "Full-Time Salary".to_string(),
        input: serde_json::json!({
            "daily_rate": daily_rate.normalize().to_string(),
            "days_present": days_present,
            "absences": absences
        }),
        output: serde_json::json!({
            "paid_days": paid_days,
            "salary": salary.normalize().to_string()
        }),
        reasoning: formula.clone(),
    };

    Ok(FormulaResult {
        salary,
        input_lines: vec![
            format!("Days Present: {}", days_present),
            format!("Absences: {}", absences),
        ],
        formula,
        audit_step,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PayrollError;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_full_time_twenty_days_paid() {
        let result = calculate_full_time_salary(dec("500"), 22, 2).unwrap();

        assert_eq!(result.salary, dec("10000"));
        assert_eq!(result.formula, "500 * (22 - 2) = 10000");
        assert_eq!(result.input_lines, vec!["Days Present: 22", "Absences: 2"]);
        assert_eq!(result.audit_step.rule_id, "full_time_salary");
        assert_eq!(result.audit_step.input["daily_rate"], "500");
        assert_eq!(result.audit_step.output["paid_days"], 20);
        assert_eq!(result.audit_step.output["salary"], "10000");
    }

    #[test]
    fn test_full_time_negative_when_absences_exceed_presence() {
        let result = calculate_full_time_salary(dec("500"), 2, 5).unwrap();

        assert_eq!(result.salary, dec("-1500"));
        assert_eq!(result.formula, "500 * (2 - 5) = -1500");
    }

    #[test]
    fn test_full_time_fractional_rate_not_rounded() {
        let result = calculate_full_time_salary(dec("123.456"), 3, 0).unwrap();

        assert_eq!(result.salary, dec("370.368"));
        assert!(result.formula.ends_with("= 370.368"));
    }

    #[test]
    fn test_full_time_zero_days() {
        let result = calculate_full_time_salary(dec("500"), 0, 0).unwrap();
        assert_eq!(result.salary, Decimal::ZERO);
    }

    #[test]
    fn test_full_time_overflow_is_an_error() {
        let error = calculate_full_time_salary(Decimal::MAX, u32::MAX, 0).unwrap_err();

        assert!(matches!(error, PayrollError::CalculationError { .. }));
        assert!(error.to_string().contains("full-time salary overflows"));
    }
}
