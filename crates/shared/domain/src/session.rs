//! Values exchanged with the authentication backend.

use uuid::Uuid;
use validator::Validate;

use crate::error::{DomainError, DomainResult};
use crate::organization::OrganizationCode;
use crate::password::Password;
use crate::user::User;

pub const MISSING_CREDENTIALS_MESSAGE: &str = "Please enter username and password";

/// Login input after normalization. Exists only while a form is submitted.
#[derive(Clone, Validate)]
pub struct Credentials {
    pub organization_code: Option<OrganizationCode>,
    #[validate(length(min = 1, message = "Please enter username and password"))]
    pub username: String,
    #[validate(length(min = 1, message = "Please enter username and password"))]
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("organization_code", &self.organization_code)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl Credentials {
    /// Build credentials from raw form input.
    ///
    /// # Errors
    /// Returns a validation error if username or password is empty.
    pub fn from_input(organization_code: &str, username: &str, password: &str) -> DomainResult<Self> {
        let credentials = Self {
            organization_code: OrganizationCode::parse(organization_code),
            username: username.to_string(),
            password: password.to_string(),
        };

        credentials
            .validate()
            .map_err(|_| DomainError::validation(MISSING_CREDENTIALS_MESSAGE))?;

        Ok(credentials)
    }
}

/// Outcome of one login attempt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuthenticationResult {
    pub success: bool,
    pub organization_name: Option<String>,
    pub trial_expired: bool,
}

impl AuthenticationResult {
    pub fn signed_in(organization_name: Option<String>) -> Self {
        Self {
            success: true,
            organization_name,
            trial_expired: false,
        }
    }

    pub fn rejected() -> Self {
        Self::default()
    }

    pub fn trial_expired(organization_name: impl Into<String>) -> Self {
        Self {
            success: false,
            organization_name: Some(organization_name.into()),
            trial_expired: true,
        }
    }
}

/// The signed-in user as seen by the forms.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: Uuid,
    pub username: String,
    pub password: Password,
    pub must_change_password: bool,
}

impl From<&User> for CurrentUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            password: user.password.clone(),
            must_change_password: user.must_change_password,
        }
    }
}

/// Credential update sent after a forced password change.
#[derive(Clone, PartialEq, Eq)]
pub struct UserUpdate {
    pub password: String,
    pub must_change_password: bool,
}

impl UserUpdate {
    /// Set a new password and clear the forced-change requirement.
    pub fn password_changed(password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
            must_change_password: false,
        }
    }
}

impl std::fmt::Debug for UserUpdate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserUpdate")
            .field("password", &"[REDACTED]")
            .field("must_change_password", &self.must_change_password)
            .finish()
    }
}
