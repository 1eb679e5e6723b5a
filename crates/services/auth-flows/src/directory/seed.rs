//! JSON seed for the in-memory directory.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::{
    AccountStatus, Daycare, OrganizationCode, Password, SubscriptionStatus, User, UserRole,
};

use super::store::InMemoryDirectory;

#[derive(Deserialize)]
pub struct DirectorySeed {
    #[serde(default)]
    pub daycares: Vec<SeedDaycare>,
    #[serde(default)]
    pub users: Vec<SeedUser>,
}

#[derive(Debug, Deserialize)]
pub struct SeedDaycare {
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub status: AccountStatus,
    pub subscription_status: Option<SubscriptionStatus>,
    pub trial_ends_at: Option<DateTime<Utc>>,
}

/// Account with a plaintext password, hashed on load.
#[derive(Deserialize)]
pub struct SeedUser {
    pub username: String,
    #[serde(default)]
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default = "default_role")]
    pub role: UserRole,
    #[serde(default)]
    pub status: AccountStatus,
    pub daycare_code: Option<String>,
    #[serde(default)]
    pub must_change_password: bool,
}

fn default_role() -> UserRole {
    UserRole::User
}

impl DirectorySeed {
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

impl InMemoryDirectory {
    /// Build a directory from a seed. Users reference daycares by code.
    pub fn from_seed(seed: DirectorySeed) -> AppResult<Self> {
        let directory = Self::new();
        let now = Utc::now();
        let mut daycares: Vec<(OrganizationCode, Uuid)> = Vec::new();

        for entry in seed.daycares {
            let code = OrganizationCode::parse(&entry.code)
                .ok_or_else(|| AppError::validation(format!("Daycare {} has no code", entry.name)))?;
            let id = Uuid::new_v4();
            daycares.push((code.clone(), id));
            directory.add_daycare(Daycare {
                id,
                name: entry.name,
                code,
                status: entry.status,
                subscription_status: entry.subscription_status,
                trial_ends_at: entry.trial_ends_at,
                created_at: now,
            })?;
        }

        for entry in seed.users {
            let daycare_id = match entry.daycare_code.as_deref().and_then(OrganizationCode::parse) {
                Some(code) => Some(
                    daycares
                        .iter()
                        .find(|(c, _)| *c == code)
                        .map(|(_, id)| *id)
                        .ok_or_else(|| {
                            AppError::validation(format!(
                                "User {} references unknown daycare {}",
                                entry.username, code
                            ))
                        })?,
                ),
                None => None,
            };

            directory.add_user(User {
                id: Uuid::new_v4(),
                email: entry.email,
                password: Password::import(&entry.password)?,
                full_name: entry.full_name,
                role: entry.role,
                status: entry.status,
                daycare_id,
                must_change_password: entry.must_change_password,
                created_at: now,
                last_login: None,
                username: entry.username,
            })?;
        }

        info!(daycares = daycares.len(), "Directory seeded");
        Ok(directory)
    }
}
