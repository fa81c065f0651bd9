//! `minierp-auth`: identity and role-based access for the ERP.
//!
//! Roles map to module access and permissions. The [`IdentityProvider`]
//! handles login, signup and logout against a pluggable [`KeyValueStore`].

pub mod authorize;
pub mod error;
pub mod identity;
pub mod permissions;
pub mod roles;
pub mod storage;
pub mod user;

pub use authorize::{AuthzError, authorize};
pub use error::AuthError;
pub use identity::{IdentityProvider, REGISTERED_USERS_KEY, SESSION_KEY, demo_accounts};
pub use permissions::Permission;
pub use roles::{Module, Role};
pub use storage::{InMemoryKeyValueStore, JsonFileStore, KeyValueStore, StorageError};
pub use user::{SessionUser, SignupRequest, UserAccount};
