//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{ROLE_ADMIN, ROLE_PARENT, ROLE_SUPER_ADMIN, ROLE_USER};
use crate::password::Password;

/// User roles enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    SuperAdmin,
    Admin,
    User,
    Parent,
}

impl UserRole {
    /// Super admins sign in without a daycare code
    pub fn is_super_admin(&self) -> bool {
        matches!(self, UserRole::SuperAdmin)
    }
}

impl From<&str> for UserRole {
    fn from(s: &str) -> Self {
        match s {
            ROLE_SUPER_ADMIN => UserRole::SuperAdmin,
            ROLE_ADMIN => UserRole::Admin,
            ROLE_PARENT => UserRole::Parent,
            _ => UserRole::User,
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let role = match self {
            UserRole::SuperAdmin => ROLE_SUPER_ADMIN,
            UserRole::Admin => ROLE_ADMIN,
            UserRole::User => ROLE_USER,
            UserRole::Parent => ROLE_PARENT,
        };
        f.write_str(role)
    }
}

/// Account or daycare status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    #[default]
    Active,
    Inactive,
}

/// User domain entity
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password: Password,
    pub full_name: String,
    pub role: UserRole,
    pub status: AccountStatus,
    /// Daycare the user belongs to; `None` for platform accounts
    pub daycare_id: Option<Uuid>,
    /// Set for accounts created with a temporary password
    pub must_change_password: bool,
    pub created_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

impl User {
    pub fn is_active(&self) -> bool {
        self.status == AccountStatus::Active
    }

    /// Match a login name against username or email, ignoring case.
    /// `login_name` is expected to be lowercased already.
    pub fn answers_to(&self, login_name: &str) -> bool {
        self.username.to_lowercase() == login_name || self.email.to_lowercase() == login_name
    }

    /// Record a successful sign-in
    pub fn touch_login(&mut self, now: DateTime<Utc>) {
        self.last_login = Some(now);
    }

    /// Replace the password and clear the forced-change requirement
    pub fn set_password(&mut self, password: Password, must_change_password: bool) {
        self.password = password;
        self.must_change_password = must_change_password;
    }
}
