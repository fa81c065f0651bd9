//! Stock alerts raised after stock leaves a product.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use minierp_core::ProductId;
use minierp_events::Event;

use crate::product::Product;
use crate::stock::StockTier;

/// Notification that a product fell to or below its reorder level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StockAlert {
    /// Stock is positive but Critical or Low.
    LowStock {
        product_id: ProductId,
        product_name: String,
        stock: u32,
        reorder_level: u32,
        tier: StockTier,
        occurred_on: NaiveDate,
    },
    /// Stock reached zero.
    OutOfStock {
        product_id: ProductId,
        product_name: String,
        reorder_level: u32,
        occurred_on: NaiveDate,
    },
}

impl StockAlert {
    /// Alert for the product's current tier, if it warrants one.
    pub fn for_product(product: &Product, occurred_on: NaiveDate) -> Option<Self> {
        match product.tier() {
            StockTier::OutOfStock => Some(StockAlert::OutOfStock {
                product_id: product.id,
                product_name: product.name.clone(),
                reorder_level: product.reorder_level,
                occurred_on,
            }),
            tier @ (StockTier::Critical | StockTier::Low) => Some(StockAlert::LowStock {
                product_id: product.id,
                product_name: product.name.clone(),
                stock: product.stock,
                reorder_level: product.reorder_level,
                tier,
                occurred_on,
            }),
            StockTier::WellStocked => None,
        }
    }

    pub fn product_name(&self) -> &str {
        match self {
            StockAlert::LowStock { product_name, .. } => product_name,
            StockAlert::OutOfStock { product_name, .. } => product_name,
        }
    }

    pub fn product_id(&self) -> ProductId {
        match self {
            StockAlert::LowStock { product_id, .. } => *product_id,
            StockAlert::OutOfStock { product_id, .. } => *product_id,
        }
    }
}

impl Event for StockAlert {
    fn event_type(&self) -> &'static str {
        match self {
            StockAlert::LowStock { .. } => "inventory.stock.low",
            StockAlert::OutOfStock { .. } => "inventory.stock.out",
        }
    }

    fn occurred_on(&self) -> NaiveDate {
        match self {
            StockAlert::LowStock { occurred_on, .. } => *occurred_on,
            StockAlert::OutOfStock { occurred_on, .. } => *occurred_on,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::NewProduct;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 10).unwrap()
    }

    fn product(stock: u32, reorder_level: u32) -> Product {
        Product::create(
            ProductId::new(),
            NewProduct {
                name: "Mouse".to_string(),
                category: "Electronics".to_string(),
                stock,
                price: 500,
                reorder_level,
            },
        )
    }

    #[test]
    fn well_stocked_raises_nothing() {
        assert_eq!(StockAlert::for_product(&product(50, 20), day()), None);
    }

    #[test]
    fn critical_and_low_raise_low_stock() {
        let critical = StockAlert::for_product(&product(3, 20), day()).unwrap();
        assert_eq!(critical.event_type(), "inventory.stock.low");
        match critical {
            StockAlert::LowStock { stock, reorder_level, tier, .. } => {
                assert_eq!(stock, 3);
                assert_eq!(reorder_level, 20);
                assert_eq!(tier, StockTier::Critical);
            }
            other => panic!("expected LowStock, got {other:?}"),
        }

        let low = StockAlert::for_product(&product(15, 20), day()).unwrap();
        assert!(matches!(low, StockAlert::LowStock { tier: StockTier::Low, .. }));
    }

    #[test]
    fn zero_raises_out_of_stock() {
        let alert = StockAlert::for_product(&product(0, 20), day()).unwrap();
        assert_eq!(alert.event_type(), "inventory.stock.out");
        assert_eq!(alert.product_name(), "Mouse");
        assert_eq!(alert.occurred_on(), day());
    }
}
