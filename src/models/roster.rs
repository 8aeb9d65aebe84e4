use super::employee::Employee;
use crate::core::{ledger::BreakLedger, ordering};
use crate::errors::{AppError, AppResult};

/// The whole board: every employee currently rostered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    employees: Vec<Employee>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_employees(employees: Vec<Employee>) -> Self {
        Self { employees }
    }

    /// Wholesale replacement, used by import.
    pub fn replace(&mut self, employees: Vec<Employee>) {
        self.employees = employees;
    }

    pub fn clear(&mut self) {
        self.employees.clear();
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&Employee> {
        self.employees.get(idx)
    }

    pub fn get_mut(&mut self, idx: usize) -> Option<&mut Employee> {
        self.employees.get_mut(idx)
    }

    /// Resolve an employee by name (case-insensitive) or by 1-based row
    /// number in the current order.
    pub fn resolve(&self, key: &str) -> AppResult<usize> {
        let needle = key.trim();

        let matches: Vec<usize> = self
            .employees
            .iter()
            .enumerate()
            .filter(|(_, e)| e.name.trim().eq_ignore_ascii_case(needle))
            .map(|(i, _)| i)
            .collect();

        match matches.as_slice() {
            [idx] => return Ok(*idx),
            [] => {}
            _ => return Err(AppError::AmbiguousEmployee(needle.to_string())),
        }

        match needle.parse::<usize>() {
            Ok(row) if row >= 1 && row <= self.employees.len() => Ok(row - 1),
            _ => Err(AppError::EmployeeNotFound(needle.to_string())),
        }
    }

    pub fn resolve_mut(&mut self, key: &str) -> AppResult<&mut Employee> {
        let idx = self.resolve(key)?;
        self.employees
            .get_mut(idx)
            .ok_or_else(|| AppError::EmployeeNotFound(key.to_string()))
    }

    pub fn sort_for_display(&mut self) {
        ordering::sort_for_display(&mut self.employees);
    }

    pub fn refresh_derived(&mut self) {
        for emp in self.employees.iter_mut() {
            BreakLedger::refresh_derived(emp);
        }
    }
}
