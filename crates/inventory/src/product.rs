use serde::{Deserialize, Serialize};

use minierp_core::{DomainError, DomainResult, Entity, ProductId};

use crate::stock::{StockTier, classify};

/// Product record.
///
/// Invariant: `stock` is never negative (enforced by the unsigned type; every
/// decrement floors at zero).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Free-text category label.
    pub category: String,
    pub stock: u32,
    /// Unit price in whole currency units.
    pub price: u64,
    pub reorder_level: u32,
}

impl Product {
    pub fn create(id: ProductId, draft: NewProduct) -> Self {
        Self {
            id,
            name: draft.name,
            category: draft.category,
            stock: draft.stock,
            price: draft.price,
            reorder_level: draft.reorder_level,
        }
    }

    /// Current stock tier.
    pub fn tier(&self) -> StockTier {
        classify(self.stock, self.reorder_level)
    }

    /// Remove `quantity` units, flooring at zero. Returns the new stock.
    pub fn withdraw(&mut self, quantity: u32) -> u32 {
        self.stock = self.stock.saturating_sub(quantity);
        self.stock
    }

    /// Add `quantity` units. Returns the new stock.
    pub fn restock(&mut self, quantity: u32) -> u32 {
        self.stock = self.stock.saturating_add(quantity);
        self.stock
    }

    /// Value of `quantity` units at the current price, `None` if it does not
    /// fit in a `u64`.
    pub fn price_for(&self, quantity: u32) -> Option<u64> {
        self.price.checked_mul(u64::from(quantity))
    }

    /// Merge every field present in `patch`.
    pub fn apply(&mut self, patch: ProductPatch) {
        let ProductPatch {
            name,
            category,
            stock,
            price,
            reorder_level,
        } = patch;

        if let Some(v) = name {
            self.name = v;
        }
        if let Some(v) = category {
            self.category = v;
        }
        if let Some(v) = stock {
            self.stock = v;
        }
        if let Some(v) = price {
            self.price = v;
        }
        if let Some(v) = reorder_level {
            self.reorder_level = v;
        }
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Input for creating a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub stock: u32,
    pub price: u64,
    pub reorder_level: u32,
}

impl NewProduct {
    /// Form-level checks: name and category are required.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() || self.category.trim().is_empty() {
            return Err(DomainError::validation("please fill all product fields"));
        }
        Ok(())
    }
}

/// Partial update; `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub stock: Option<u32>,
    pub price: Option<u64>,
    pub reorder_level: Option<u32>,
}
