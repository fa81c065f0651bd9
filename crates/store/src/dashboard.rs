//! Dashboard aggregator.
//!
//! Everything here is recomputed from the store on each call: there is no
//! cache and no incremental bookkeeping, so results always match a fresh scan.

use serde::{Deserialize, Serialize};

use minierp_finance::Expense;
use minierp_inventory::{Product, StockTier};
use minierp_sales::{Sale, SaleStatus};

use crate::store::EntityStore;

/// Product counts per stock tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockTierCounts {
    pub out_of_stock: usize,
    pub critical: usize,
    pub low: usize,
    pub well_stocked: usize,
}

impl StockTierCounts {
    fn record(&mut self, tier: StockTier) {
        match tier {
            StockTier::OutOfStock => self.out_of_stock += 1,
            StockTier::Critical => self.critical += 1,
            StockTier::Low => self.low += 1,
            StockTier::WellStocked => self.well_stocked += 1,
        }
    }

    /// Products at or below their reorder level.
    pub fn needing_reorder(&self) -> usize {
        self.out_of_stock + self.critical + self.low
    }
}

/// Summary metrics for the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_employees: usize,
    pub active_employees: usize,
    pub total_products: usize,
    /// Sum of every sale amount, exact for any number of sales.
    pub total_sales: u128,
    /// Sum of every expense amount.
    pub total_expenses: u128,
    /// `total_sales - total_expenses`; negative on a loss.
    pub profit: i128,
    pub stock: StockTierCounts,
    /// Sales that are Pending or Processing.
    pub pending_sales: usize,
    pub completed_sales: usize,
}

/// A product paired with its current stock tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedProduct {
    pub product: Product,
    pub tier: StockTier,
}

/// Read-only view computing metrics over one store snapshot.
#[derive(Debug, Clone, Copy)]
pub struct Dashboard<'a> {
    store: &'a EntityStore,
}

impl<'a> Dashboard<'a> {
    pub fn new(store: &'a EntityStore) -> Self {
        Self { store }
    }

    pub fn stats(&self) -> DashboardStats {
        let employees = self.store.employees();
        let sales = self.store.sales();

        let total_sales = total(sales.iter().map(Sale::amount));
        let total_expenses = total(self.store.expenses().iter().map(|e| e.amount));

        DashboardStats {
            total_employees: employees.len(),
            active_employees: employees.iter().filter(|e| e.is_active()).count(),
            total_products: self.store.products().len(),
            total_sales,
            total_expenses,
            profit: signed(total_sales) - signed(total_expenses),
            stock: self.tier_counts(),
            pending_sales: sales.iter().filter(|s| s.status().is_open()).count(),
            completed_sales: sales
                .iter()
                .filter(|s| s.status() == SaleStatus::Completed)
                .count(),
        }
    }

    pub fn tier_counts(&self) -> StockTierCounts {
        let mut counts = StockTierCounts::default();
        for product in self.store.products() {
            counts.record(product.tier());
        }
        counts
    }

    /// Products classified Low, Critical or OutOfStock, in store order.
    pub fn low_stock_products(&self) -> Vec<ClassifiedProduct> {
        self.classified(StockTier::needs_reorder)
    }

    /// Products classified Critical or OutOfStock, in store order.
    pub fn critical_stock_products(&self) -> Vec<ClassifiedProduct> {
        self.classified(|tier| matches!(tier, StockTier::Critical | StockTier::OutOfStock))
    }

    /// Up to `n` products with the highest stock. Ties keep store order.
    pub fn top_products(&self, n: usize) -> Vec<&'a Product> {
        let mut products: Vec<&Product> = self.store.products().iter().collect();
        // `sort_by` is stable.
        products.sort_by(|a, b| b.stock.cmp(&a.stock));
        products.truncate(n);
        products
    }

    /// The last `n` sales, newest first.
    pub fn recent_sales(&self, n: usize) -> Vec<&'a Sale> {
        self.store.sales().iter().rev().take(n).collect()
    }

    /// The last `n` expenses, newest first.
    pub fn recent_expenses(&self, n: usize) -> Vec<&'a Expense> {
        self.store.expenses().iter().rev().take(n).collect()
    }

    fn classified(&self, keep: impl Fn(StockTier) -> bool) -> Vec<ClassifiedProduct> {
        self.store
            .products()
            .iter()
            .filter_map(|p| {
                let tier = p.tier();
                keep(tier).then(|| ClassifiedProduct {
                    product: p.clone(),
                    tier,
                })
            })
            .collect()
    }
}

fn total(amounts: impl Iterator<Item = u64>) -> u128 {
    amounts.map(u128::from).sum()
}

/// A total of fewer than 2^63 `u64` amounts stays below 2^127, so the
/// conversion is lossless for any collection that fits in memory.
fn signed(total: u128) -> i128 {
    total as i128
}
