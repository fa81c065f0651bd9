use thiserror::Error;

use crate::{Permission, Role, SessionUser};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("not authenticated")]
    NotAuthenticated,

    #[error("forbidden: role '{role}' lacks permission '{permission}'")]
    Forbidden { role: Role, permission: Permission },
}

/// Authorize the current user for `required`.
///
/// - No IO
/// - No panics
/// - Pure policy check against the role grants
pub fn authorize(user: Option<&SessionUser>, required: &Permission) -> Result<(), AuthzError> {
    let user = user.ok_or(AuthzError::NotAuthenticated)?;

    if user.role.grants(required) {
        Ok(())
    } else {
        Err(AuthzError::Forbidden {
            role: user.role,
            permission: required.clone(),
        })
    }
}
