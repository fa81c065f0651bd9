//! Login, signup and logout against a [`KeyValueStore`].
//!
//! The signed-in user is persisted under [`SESSION_KEY`] so that a new
//! provider over the same storage resumes the session. Self-registered
//! accounts live as an ordered list under [`REGISTERED_USERS_KEY`].

use serde_json::Value;
use uuid::Uuid;

use minierp_core::UserId;

use crate::storage::{KeyValueStore, StorageError};
use crate::user::{SessionUser, SignupRequest, UserAccount};
use crate::{AuthError, Role};

pub const SESSION_KEY: &str = "erpUser";
pub const REGISTERED_USERS_KEY: &str = "erpUsers";

const DEMO_ACCOUNTS: [(u128, &str, &str, &str, Role); 3] = [
    (1, "Admin User", "admin@erp.com", "admin123", Role::Admin),
    (2, "Manager User", "manager@erp.com", "manager123", Role::Manager),
    (3, "Staff User", "staff@erp.com", "staff123", Role::Staff),
];

/// Built-in accounts, available on every store.
pub fn demo_accounts() -> Vec<UserAccount> {
    DEMO_ACCOUNTS
        .iter()
        .map(|&(id, name, email, password, role)| UserAccount {
            id: UserId::from_uuid(Uuid::from_u128(id)),
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            role,
        })
        .collect()
}

#[derive(Debug)]
pub struct IdentityProvider<S> {
    storage: S,
    demo: Vec<UserAccount>,
    current: Option<SessionUser>,
}

impl<S> IdentityProvider<S>
where
    S: KeyValueStore,
{
    /// Create a provider, restoring any session persisted in `storage`.
    pub fn new(storage: S) -> Self {
        let current = restore_session(&storage);
        if let Some(user) = &current {
            tracing::info!(email = %user.email, role = %user.role, "session restored");
        }

        Self {
            storage,
            demo: demo_accounts(),
            current,
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn current_user(&self) -> Option<&SessionUser> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// Accounts created through [`signup`](Self::signup), in creation order.
    pub fn registered_users(&self) -> Result<Vec<UserAccount>, AuthError> {
        match self.storage.get(REGISTERED_USERS_KEY)? {
            None => Ok(Vec::new()),
            Some(value) => Ok(serde_json::from_value(value).map_err(StorageError::from)?),
        }
    }

    /// Sign in with a demo or registered account.
    ///
    /// On success the user becomes current and is persisted as the session.
    /// A failed session write is logged; the login still succeeds.
    pub fn login(&mut self, email: &str, password: &str) -> Result<SessionUser, AuthError> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(AuthError::validation("please fill in all fields"));
        }

        let registered = self.registered_users().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "registered accounts unreadable, only demo accounts available");
            Vec::new()
        });

        let Some(account) = self
            .demo
            .iter()
            .chain(registered.iter())
            .find(|a| a.matches(email, password))
        else {
            tracing::warn!(email, "login rejected");
            return Err(AuthError::InvalidCredentials);
        };

        let user = account.session();
        if let Err(err) = persist(&self.storage, SESSION_KEY, &user) {
            tracing::warn!(error = %err, "failed to persist session");
        }

        tracing::info!(email = %user.email, role = %user.role, "login");
        self.current = Some(user.clone());
        Ok(user)
    }

    /// Register a new account. Does not sign the new user in.
    pub fn signup(&self, request: SignupRequest) -> Result<SessionUser, AuthError> {
        request.validate()?;

        let mut registered = self.registered_users()?;
        let taken = self
            .demo
            .iter()
            .chain(registered.iter())
            .any(|a| a.email.trim().eq_ignore_ascii_case(request.email.trim()));
        if taken {
            return Err(AuthError::DuplicateEmail(request.email));
        }

        let account = request.into_account(UserId::new());
        let user = account.session();
        registered.push(account);
        persist(&self.storage, REGISTERED_USERS_KEY, &registered)?;

        tracing::info!(email = %user.email, role = %user.role, "account registered");
        Ok(user)
    }

    /// Clear the current user and the persisted session.
    pub fn logout(&mut self) -> Option<SessionUser> {
        let previous = self.current.take();
        if let Err(err) = self.storage.remove(SESSION_KEY) {
            tracing::warn!(error = %err, "failed to clear persisted session");
        }
        if let Some(user) = &previous {
            tracing::info!(email = %user.email, "logout");
        }
        previous
    }
}

fn persist<S, T>(storage: &S, key: &str, value: &T) -> Result<(), StorageError>
where
    S: KeyValueStore + ?Sized,
    T: serde::Serialize,
{
    let value: Value = serde_json::to_value(value)?;
    storage.set(key, value)
}

fn restore_session<S>(storage: &S) -> Option<SessionUser>
where
    S: KeyValueStore + ?Sized,
{
    let value = match storage.get(SESSION_KEY) {
        Ok(value) => value?,
        Err(err) => {
            tracing::warn!(error = %err, "failed to read persisted session");
            return None;
        }
    };

    match serde_json::from_value(value) {
        Ok(user) => Some(user),
        Err(err) => {
            tracing::warn!(error = %err, "ignoring malformed persisted session");
            None
        }
    }
}
