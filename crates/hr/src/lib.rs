//! HR domain module: employee records.

pub mod employee;

pub use employee::{Employee, EmployeePatch, EmployeeStatus, NewEmployee};
