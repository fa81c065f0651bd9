//! Application layer: configuration, role-gated access and wiring.
//!
//! [`Erp`] is the single entry point used by the `minierp` binary and by
//! integration tests. It composes the entity store, the identity provider and
//! the stock-alert bus, and checks the signed-in user's role before every call.

pub mod config;
pub mod erp;
pub mod errors;

pub use config::{AppConfig, ConfigError};
pub use erp::{AlertBus, DashboardOverview, Erp};
pub use errors::{AppError, AppResult};
