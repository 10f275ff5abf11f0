//! Employee directory.
//!
//! The directory maps employee ids to their records. It is populated once
//! (usually from the roster in the configuration file) and is read-only
//! afterwards.

use std::collections::BTreeMap;

use crate::error::{PayrollError, PayrollResult};
use crate::models::Employee;

/// Resolves employee ids to records.
pub trait EmployeeLookup {
    /// Returns the employee with `id`, or `EmployeeNotFound`.
    fn lookup(&self, id: u32) -> PayrollResult<&Employee>;
}

/// In-memory employee directory keyed by id.
///
/// # Examples
///
/// ```
/// use payroll_desk::directory::{EmployeeDirectory, EmployeeLookup};
/// use payroll_desk::error::PayrollError;
///
/// let directory = EmployeeDirectory::new();
/// assert_eq!(
///     directory.lookup(999).unwrap_err(),
///     PayrollError::EmployeeNotFound { id: 999 }
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct EmployeeDirectory {
    employees: BTreeMap<u32, Employee>,
}

impl EmployeeDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a directory from records, rejecting duplicate ids.
    pub fn from_employees<I>(employees: I) -> PayrollResult<Self>
    where
        I: IntoIterator<Item = Employee>,
    {
        let mut directory = Self::new();
        for employee in employees {
            directory.insert(employee)?;
        }
        Ok(directory)
    }

    /// Adds a record. Fails with `DuplicateEmployee` if the id is taken.
    pub fn insert(&mut self, employee: Employee) -> PayrollResult<()> {
        if self.employees.contains_key(&employee.id) {
            return Err(PayrollError::DuplicateEmployee { id: employee.id });
        }
        self.employees.insert(employee.id, employee);
        Ok(())
    }

    /// Number of employees.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true if the directory has no employees.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Iterates over employees in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Employee> {
        self.employees.values()
    }
}

impl EmployeeLookup for EmployeeDirectory {
    fn lookup(&self, id: u32) -> PayrollResult<&Employee> {
        self.employees
            .get(&id)
            .ok_or(PayrollError::EmployeeNotFound { id: id.into() })
    }
}
