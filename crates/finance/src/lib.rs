//! Finance domain module: expense records.

pub mod expense;

pub use expense::{Expense, NewExpense};
