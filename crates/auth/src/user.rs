//! Account records and the signed-in user.

use serde::{Deserialize, Serialize};

use minierp_core::UserId;

use crate::{AuthError, Role};

pub const MIN_PASSWORD_LEN: usize = 6;

/// A stored account. The password is kept as entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl UserAccount {
    pub fn matches(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }

    /// The account as exposed to the rest of the application (no password).
    pub fn session(&self) -> SessionUser {
        SessionUser {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role,
        }
    }
}

/// The authenticated user. This is what gets persisted as the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Signup form input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    #[serde(default)]
    pub role: Role,
}

impl SignupRequest {
    pub fn validate(&self) -> Result<(), AuthError> {
        let fields = [&self.name, &self.email, &self.password, &self.confirm_password];
        if fields.iter().any(|f| f.trim().is_empty()) {
            return Err(AuthError::validation("please fill in all fields"));
        }
        if self.password != self.confirm_password {
            return Err(AuthError::validation("passwords do not match"));
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthError::validation(format!(
                "password must be at least {MIN_PASSWORD_LEN} characters long"
            )));
        }
        Ok(())
    }

    pub(crate) fn into_account(self, id: UserId) -> UserAccount {
        UserAccount {
            id,
            name: self.name,
            email: self.email,
            password: self.password,
            role: self.role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(password: &str, confirm: &str) -> SignupRequest {
        SignupRequest {
            name: "New User".to_string(),
            email: "new@erp.com".to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
            role: Role::Staff,
        }
    }

    #[test]
    fn accepts_matching_long_enough_passwords() {
        assert!(request("secret1", "secret1").validate().is_ok());
    }

    #[test]
    fn rejects_mismatched_passwords() {
        let err = request("secret1", "secret2").validate().unwrap_err();
        assert_eq!(err, AuthError::validation("passwords do not match"));
    }

    #[test]
    fn rejects_short_passwords() {
        assert!(matches!(request("abc", "abc").validate(), Err(AuthError::Validation(_))));
    }

    #[test]
    fn rejects_blank_fields() {
        let mut req = request("secret1", "secret1");
        req.name = "  ".to_string();
        assert_eq!(
            req.validate().unwrap_err(),
            AuthError::validation("please fill in all fields")
        );
    }

    #[test]
    fn session_drops_the_password() {
        let account = request("secret1", "secret1").into_account(UserId::new());
        let json = serde_json::to_string(&account.session()).unwrap();
        assert!(!json.contains("secret1"));
        assert!(json.contains("\"role\":\"staff\""));
    }
}
