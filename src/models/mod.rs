//! Core data models for the payroll desk.
//!
//! This module contains the domain models used throughout the crate.

mod calculation_result;
mod employee;
mod inputs;

pub use calculation_result::{AuditStep, SalaryCalculation};
pub use employee::{Compensation, Employee};
pub use inputs::{InputField, VariantInputs};
