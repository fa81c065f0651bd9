use thiserror::Error;

use minierp_auth::{AuthError, AuthzError};
use minierp_core::DomainError;

use crate::config::ConfigError;

/// Every failure surfaced by the application facade.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Authz(#[from] AuthzError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Domain(DomainError::Validation(_)) => "validation_error",
            AppError::Domain(DomainError::NotFound(_)) => "not_found",
            AppError::Domain(DomainError::Conflict(_)) => "conflict",
            AppError::Domain(_) => "domain_error",
            AppError::Authz(AuthzError::NotAuthenticated) => "not_authenticated",
            AppError::Authz(AuthzError::Forbidden { .. }) => "forbidden",
            AppError::Auth(AuthError::InvalidCredentials) => "invalid_credentials",
            AppError::Auth(AuthError::DuplicateEmail(_)) => "duplicate_email",
            AppError::Auth(AuthError::Validation(_)) => "validation_error",
            AppError::Auth(AuthError::Storage(_)) => "storage_error",
            AppError::Config(_) => "config_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use minierp_auth::{Permission, Role};

    use super::*;

    #[test]
    fn codes_distinguish_auth_failures() {
        let forbidden = AppError::from(AuthzError::Forbidden {
            role: Role::Staff,
            permission: Permission::HR_WRITE,
        });
        assert_eq!(forbidden.code(), "forbidden");
        assert_eq!(AppError::from(AuthzError::NotAuthenticated).code(), "not_authenticated");
        assert_eq!(AppError::from(AuthError::InvalidCredentials).code(), "invalid_credentials");
    }

    #[test]
    fn domain_messages_pass_through() {
        let err = AppError::from(DomainError::product_not_found("Webcam"));
        assert_eq!(err.code(), "not_found");
        assert_eq!(err.to_string(), "not found: product 'Webcam' not found");
    }
}
