use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use minierp_core::{DomainError, DomainResult, Entity, ExpenseId};

/// Expense record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    /// Free-text category label (e.g. "Office Rent").
    pub category: String,
    /// Amount in whole currency units.
    pub amount: u64,
    pub description: String,
    pub date: NaiveDate,
}

impl Expense {
    pub fn record(id: ExpenseId, draft: NewExpense, date: NaiveDate) -> Self {
        Self {
            id,
            category: draft.category,
            amount: draft.amount,
            description: draft.description,
            date,
        }
    }
}

impl Entity for Expense {
    type Id = ExpenseId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Input for recording an expense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewExpense {
    pub category: String,
    pub amount: u64,
    pub description: String,
}

impl NewExpense {
    pub fn new(category: impl Into<String>, amount: u64, description: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            amount,
            description: description.into(),
        }
    }

    /// Form-level checks: every field is required and the amount positive.
    pub fn validate(&self) -> DomainResult<()> {
        if self.category.trim().is_empty() || self.description.trim().is_empty() {
            return Err(DomainError::validation("please fill all expense fields"));
        }
        if self.amount == 0 {
            return Err(DomainError::validation("amount must be positive"));
        }
        Ok(())
    }
}
