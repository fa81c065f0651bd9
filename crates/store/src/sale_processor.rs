//! Sale processor: records a sale and keeps product stock consistent.

use serde::Serialize;

use minierp_core::{DomainError, DomainResult, SaleId};
use minierp_events::{EventBus, publish_best_effort};
use minierp_inventory::{StockAlert, StockTier};
use minierp_sales::NewSale;

use crate::store::EntityStore;

/// Outcome of a recorded sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaleReceipt {
    pub sale_id: SaleId,
    /// `unit price × quantity` at the time of the sale.
    pub amount: u64,
    pub remaining_stock: u32,
    pub tier: StockTier,
    /// Alert published for this sale, if any.
    pub alert: Option<StockAlert>,
}

/// Records sales against the entity store and publishes stock alerts.
///
/// The whole operation runs under one `&mut EntityStore` borrow, so the sale
/// and the stock withdrawal are never observed apart.
#[derive(Debug)]
pub struct SaleProcessor<B> {
    alerts: B,
}

impl<B> SaleProcessor<B>
where
    B: EventBus<StockAlert>,
{
    pub fn new(alerts: B) -> Self {
        Self { alerts }
    }

    pub fn alerts(&self) -> &B {
        &self.alerts
    }

    /// Record a sale of `draft.quantity` units of the product named
    /// `draft.product_name`.
    ///
    /// - Rejects zero quantity and unknown products without mutating anything.
    /// - Freezes `amount = price × quantity` using the current price. An amount
    ///   that overflows `u64` is rejected before anything is recorded.
    /// - Withdraws the quantity from stock, flooring at zero. Availability is
    ///   not checked here: an oversell succeeds and leaves the stock at zero.
    /// - Publishes a [`StockAlert`] when the new tier is Critical, Low or
    ///   OutOfStock. Publication failures are logged and ignored.
    pub fn create_sale(&self, store: &mut EntityStore, draft: NewSale) -> DomainResult<SaleReceipt> {
        draft.ensure_quantity()?;

        let Some(product) = store.product_by_name(&draft.product_name) else {
            tracing::warn!(product = %draft.product_name, "sale rejected: product not found");
            return Err(DomainError::product_not_found(&draft.product_name));
        };

        let Some(amount) = product.price_for(draft.quantity) else {
            tracing::warn!(product = %draft.product_name, quantity = draft.quantity, "sale rejected: amount overflow");
            return Err(DomainError::validation(format!(
                "sale amount for {} x '{}' exceeds the representable range",
                draft.quantity, draft.product_name
            )));
        };
        let quantity = draft.quantity;
        let product_name = draft.product_name.clone();
        let today = store.today();

        let sale_id = store.add_sale(draft, amount);

        let product = store
            .product_by_name_mut(&product_name)
            .ok_or_else(|| DomainError::invariant("product vanished while recording sale"))?;
        let prior_stock = product.stock;
        let remaining_stock = product.withdraw(quantity);
        let tier = product.tier();
        let alert = StockAlert::for_product(product, today);

        tracing::info!(
            sale_id = %sale_id,
            product = %product_name,
            quantity,
            amount,
            prior_stock,
            remaining_stock,
            tier = %tier,
            "sale recorded"
        );

        if quantity > prior_stock {
            tracing::warn!(
                product = %product_name,
                quantity,
                prior_stock,
                "oversell: stock floored at zero"
            );
        }

        if let Some(alert) = &alert {
            tracing::warn!(
                product = %product_name,
                stock = remaining_stock,
                event_type = minierp_events::Event::event_type(alert),
                "stock alert"
            );
            publish_best_effort(&self.alerts, alert.clone());
        }

        Ok(SaleReceipt {
            sale_id,
            amount,
            remaining_stock,
            tier,
            alert,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::NaiveDate;

    use minierp_core::FixedClock;
    use minierp_events::InMemoryEventBus;
    use minierp_inventory::{NewProduct, ProductPatch};
    use minierp_sales::SaleStatus;

    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 20).unwrap()
    }

    fn store_with(name: &str, stock: u32, price: u64, reorder_level: u32) -> EntityStore {
        let mut store = EntityStore::new(Arc::new(FixedClock(day())));
        store.add_product(NewProduct {
            name: name.to_string(),
            category: "Electronics".to_string(),
            stock,
            price,
            reorder_level,
        });
        store
    }

    fn processor() -> SaleProcessor<Arc<InMemoryEventBus<StockAlert>>> {
        SaleProcessor::new(Arc::new(InMemoryEventBus::new()))
    }

    fn sale(product: &str, quantity: u32) -> NewSale {
        NewSale::new("ABC Company", product, quantity, SaleStatus::Pending)
    }

    #[test]
    fn computes_amount_and_withdraws_stock() {
        let mut store = store_with("Laptop", 25, 50000, 5);
        let receipt = processor().create_sale(&mut store, sale("Laptop", 2)).unwrap();

        assert_eq!(receipt.amount, 100000);
        assert_eq!(receipt.remaining_stock, 23);
        assert_eq!(receipt.tier, StockTier::WellStocked);
        assert_eq!(receipt.alert, None);
        assert_eq!(store.product_by_name("Laptop").unwrap().stock, 23);
        assert_eq!(store.sale(&receipt.sale_id).unwrap().amount(), 100000);
    }

    #[test]
    fn oversell_floors_stock_at_zero() {
        let mut store = store_with("Keyboard", 3, 1500, 10);
        let receipt = processor().create_sale(&mut store, sale("Keyboard", 5)).unwrap();

        assert_eq!(receipt.remaining_stock, 0);
        assert_eq!(receipt.amount, 7500);
        assert_eq!(store.product_by_name("Keyboard").unwrap().stock, 0);
    }

    #[test]
    fn unknown_product_is_rejected_without_mutation() {
        let mut store = store_with("Mouse", 100, 500, 20);
        let err = processor().create_sale(&mut store, sale("Webcam", 1)).unwrap_err();

        assert!(matches!(err, DomainError::NotFound(ref m) if m.contains("Webcam")));
        assert!(store.sales().is_empty());
        assert_eq!(store.product_by_name("Mouse").unwrap().stock, 100);
    }

    #[test]
    fn zero_quantity_is_rejected_without_mutation() {
        let mut store = store_with("Mouse", 100, 500, 20);
        let err = processor().create_sale(&mut store, sale("Mouse", 0)).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(store.sales().is_empty());
    }

    #[test]
    fn overflowing_amount_is_rejected_without_mutation() {
        let mut store = store_with("Server", 10, u64::MAX / 2, 2);
        let err = processor().create_sale(&mut store, sale("Server", 3)).unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
        assert!(store.sales().is_empty());
        assert_eq!(store.product_by_name("Server").unwrap().stock, 10);
    }

    #[test]
    fn dropping_into_low_band_publishes_low_stock_alert() {
        let mut store = store_with("Mouse", 25, 500, 20);
        let processor = processor();
        let subscription = processor.alerts().subscribe();

        let receipt = processor.create_sale(&mut store, sale("Mouse", 10)).unwrap();
        assert_eq!(receipt.tier, StockTier::Low);

        let published = subscription.drain();
        assert_eq!(published.len(), 1);
        match &published[0] {
            StockAlert::LowStock { product_name, stock, reorder_level, .. } => {
                assert_eq!(product_name, "Mouse");
                assert_eq!(*stock, 15);
                assert_eq!(*reorder_level, 20);
            }
            other => panic!("expected LowStock, got {other:?}"),
        }
    }

    #[test]
    fn selling_out_publishes_out_of_stock_alert() {
        let mut store = store_with("Monitor", 3, 15000, 5);
        let processor = processor();
        let subscription = processor.alerts().subscribe();

        processor.create_sale(&mut store, sale("Monitor", 3)).unwrap();

        let published = subscription.drain();
        assert!(matches!(published.as_slice(), [StockAlert::OutOfStock { .. }]));
    }

    #[test]
    fn amount_is_frozen_when_price_changes_later() {
        let mut store = store_with("Laptop", 25, 50000, 5);
        let receipt = processor().create_sale(&mut store, sale("Laptop", 2)).unwrap();

        let id = store.product_by_name("Laptop").unwrap().id;
        store.update_product(
            &id,
            ProductPatch {
                price: Some(60000),
                ..Default::default()
            },
        );

        assert_eq!(store.sale(&receipt.sale_id).unwrap().amount(), 100000);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: stock after a sale is max(0, prior - quantity).
            #[test]
            fn stock_after_sale_is_floored_difference(
                stock in 0u32..500,
                quantity in 1u32..600,
                price in 0u64..100_000,
                reorder in 0u32..200,
            ) {
                let mut store = store_with("Widget", stock, price, reorder);
                let receipt = processor().create_sale(&mut store, sale("Widget", quantity)).unwrap();

                prop_assert_eq!(receipt.remaining_stock, stock.saturating_sub(quantity));
                prop_assert_eq!(store.product_by_name("Widget").unwrap().stock, stock.saturating_sub(quantity));
                prop_assert_eq!(receipt.amount, price * u64::from(quantity));
            }

            /// Property: an alert is raised iff the resulting tier needs reorder.
            #[test]
            fn alert_iff_tier_needs_reorder(
                stock in 0u32..500,
                quantity in 1u32..600,
                reorder in 0u32..200,
            ) {
                let mut store = store_with("Widget", stock, 10, reorder);
                let receipt = processor().create_sale(&mut store, sale("Widget", quantity)).unwrap();
                prop_assert_eq!(receipt.alert.is_some(), receipt.tier.needs_reorder());
            }
        }
    }
}
