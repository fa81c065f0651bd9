use thiserror::Error;

use crate::storage::StorageError;

/// Identity failures (login, signup, persistence of accounts).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("an account with email '{0}' already exists")]
    DuplicateEmail(String),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl AuthError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
