//! Payroll desk
//!
//! This crate computes employee salaries from manually entered attendance
//! figures (full-time, part-time and contract formulas), renders an auditable
//! breakdown of each calculation and keeps an append-only plain-text payroll
//! log that can be read back in full.

#![warn(missing_docs)]

pub mod calculation;
pub mod cli;
pub mod config;
pub mod desk;
pub mod directory;
pub mod error;
pub mod models;
pub mod payroll_log;
