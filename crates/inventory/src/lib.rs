//! Inventory domain module.
//!
//! Product records, the stock classifier and the alerts raised when a product
//! drops to or below its reorder level. Pure logic, no IO.

pub mod alert;
pub mod product;
pub mod stock;

pub use alert::StockAlert;
pub use product::{NewProduct, Product, ProductPatch};
pub use stock::{StockTier, classify, critical_threshold};
