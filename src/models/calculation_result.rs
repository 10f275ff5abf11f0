//! Calculation result models for the payroll desk.
//!
//! This module contains the [`SalaryCalculation`] type that captures the
//! outcome of a salary computation: the amount, the user-visible breakdown and
//! an audit step recording the formula that produced it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::VariantInputs;

/// A record of one formula application.
///
/// Captures the input, output, and substituted formula for auditing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// The formula with every operand substituted.
    pub reasoning: String,
}

/// The complete result of a salary computation.
///
/// `breakdown` is the statement shown to the user and written to the payroll
/// log; it always ends with a newline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryCalculation {
    /// The employee the salary was computed for.
    pub employee_id: u32,
    /// The inputs used.
    pub inputs: VariantInputs,
    /// The computed salary, unrounded.
    pub salary: Decimal,
    /// The statement block, including the formula substitution.
    pub breakdown: String,
    /// The audit record of the formula application.
    pub audit_step: AuditStep,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serialize_salary_calculation() {
        let calculation = SalaryCalculation {
            employee_id: 2,
            inputs: VariantInputs::PartTime { hours_worked: 80 },
            salary: Decimal::from(12000),
            breakdown: "Total Salary: 12000\n".to_string(),
            audit_step: AuditStep {
                rule_id: "part_time_salary".to_string(),
                rule_name: "Part-Time Salary".to_string(),
                input: json!({"hourly_rate": "150", "hours_worked": 80}),
                output: json!({"salary": "12000"}),
                reasoning: "150 * 80 = 12000".to_string(),
            },
        };

        let value = serde_json::to_value(&calculation).unwrap();
        assert_eq!(value["employee_id"], 2);
        assert_eq!(value["salary"], "12000");
        assert_eq!(value["inputs"]["hours_worked"], 80);
        assert_eq!(value["audit_step"]["reasoning"], "150 * 80 = 12000");
    }
}
