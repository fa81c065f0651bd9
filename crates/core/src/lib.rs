//! `minierp-core`: shared domain building blocks.
//!
//! Identifiers, the entity contract, the domain error model and the clock used
//! to stamp creation dates. No IO, no storage.

pub mod clock;
pub mod entity;
pub mod error;
pub mod id;

pub use clock::{Clock, FixedClock, SystemClock};
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{EmployeeId, ExpenseId, ProductId, SaleId, UserId};
