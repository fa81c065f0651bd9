//! `minierp-store`: the in-memory business state.
//!
//! - [`EntityStore`]: owns the employee/product/sale/expense collections and is
//!   the only mutation surface.
//! - [`SaleProcessor`]: records a sale and withdraws the sold stock, raising a
//!   [`StockAlert`](minierp_inventory::StockAlert) when the product runs low.
//! - [`Dashboard`]: summary metrics recomputed from the collections on every call.

pub mod collection;
pub mod dashboard;
pub mod sale_processor;
pub mod seed;
pub mod store;

pub use collection::Collection;
pub use dashboard::{ClassifiedProduct, Dashboard, DashboardStats, StockTierCounts};
pub use sale_processor::{SaleProcessor, SaleReceipt};
pub use store::EntityStore;
