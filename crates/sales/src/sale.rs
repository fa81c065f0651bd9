use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use minierp_core::{DomainError, DomainResult, Entity, SaleId};

/// Sale status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SaleStatus {
    #[default]
    Pending,
    Processing,
    Completed,
}

impl SaleStatus {
    /// Pending and Processing sales are still open.
    pub fn is_open(self) -> bool {
        matches!(self, SaleStatus::Pending | SaleStatus::Processing)
    }
}

impl core::fmt::Display for SaleStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SaleStatus::Pending => write!(f, "Pending"),
            SaleStatus::Processing => write!(f, "Processing"),
            SaleStatus::Completed => write!(f, "Completed"),
        }
    }
}

/// Sale record.
///
/// `amount` is computed once when the sale is recorded and never recomputed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    id: SaleId,
    customer_name: String,
    product_name: String,
    quantity: u32,
    amount: u64,
    date: NaiveDate,
    status: SaleStatus,
}

impl Sale {
    /// Record a sale with a frozen `amount`.
    pub fn record(id: SaleId, draft: NewSale, amount: u64, date: NaiveDate) -> Self {
        Self {
            id,
            customer_name: draft.customer_name,
            product_name: draft.product_name,
            quantity: draft.quantity,
            amount,
            date,
            status: draft.status,
        }
    }

    pub fn sale_id(&self) -> SaleId {
        self.id
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn amount(&self) -> u64 {
        self.amount
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn status(&self) -> SaleStatus {
        self.status
    }
}

impl Entity for Sale {
    type Id = SaleId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Input for recording a sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSale {
    pub customer_name: String,
    /// Name of the product being sold; matched exactly.
    pub product_name: String,
    pub quantity: u32,
    #[serde(default)]
    pub status: SaleStatus,
}

impl NewSale {
    pub fn new(
        customer_name: impl Into<String>,
        product_name: impl Into<String>,
        quantity: u32,
        status: SaleStatus,
    ) -> Self {
        Self {
            customer_name: customer_name.into(),
            product_name: product_name.into(),
            quantity,
            status,
        }
    }

    /// Quantity must be positive.
    pub fn ensure_quantity(&self) -> DomainResult<()> {
        if self.quantity == 0 {
            return Err(DomainError::validation("quantity must be positive"));
        }
        Ok(())
    }

    /// Form-level checks: customer and product are required, quantity positive.
    pub fn validate(&self) -> DomainResult<()> {
        if self.customer_name.trim().is_empty() || self.product_name.trim().is_empty() {
            return Err(DomainError::validation("please fill all sale fields"));
        }
        self.ensure_quantity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 16).unwrap()
    }

    #[test]
    fn record_freezes_amount_and_date() {
        let draft = NewSale::new("XYZ Corp", "Mouse", 10, SaleStatus::Pending);
        let sale = Sale::record(SaleId::new(), draft, 5000, day());
        assert_eq!(sale.amount(), 5000);
        assert_eq!(sale.quantity(), 10);
        assert_eq!(sale.date(), day());
        assert_eq!(sale.product_name(), "Mouse");
        assert_eq!(sale.customer_name(), "XYZ Corp");
        assert_eq!(sale.status(), SaleStatus::Pending);
    }

    #[test]
    fn open_statuses() {
        assert!(SaleStatus::Pending.is_open());
        assert!(SaleStatus::Processing.is_open());
        assert!(!SaleStatus::Completed.is_open());
    }

    #[test]
    fn zero_quantity_is_rejected() {
        let draft = NewSale::new("ABC Company", "Laptop", 0, SaleStatus::Completed);
        assert!(matches!(draft.ensure_quantity(), Err(DomainError::Validation(_))));
        assert!(draft.validate().is_err());
    }

    #[test]
    fn blank_customer_is_rejected() {
        let draft = NewSale::new(" ", "Laptop", 1, SaleStatus::Completed);
        assert!(draft.validate().is_err());
        assert!(draft.ensure_quantity().is_ok());
    }

    #[test]
    fn status_defaults_to_pending_when_deserializing() {
        let draft: NewSale = serde_json::from_str(
            r#"{"customerName":"Tech Solutions","productName":"Monitor","quantity":3}"#,
        )
        .unwrap();
        assert_eq!(draft.status, SaleStatus::Pending);
    }
}
