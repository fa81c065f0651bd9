//! Sales domain module: sale records.
//!
//! A sale keeps a copy of the product name and a frozen amount; it never links
//! to the product record itself.

pub mod sale;

pub use sale::{NewSale, Sale, SaleStatus};
