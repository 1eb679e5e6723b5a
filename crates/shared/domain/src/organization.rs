//! Daycare (organization) code handling.

use serde::{Deserialize, Serialize};

use crate::constants::ORGANIZATION_CODE_MAX_LENGTH;

/// Short uppercase identifier selecting which daycare a login applies to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrganizationCode(String);

impl OrganizationCode {
    /// Normalize code input as it is typed: uppercase, capped at
    /// [`ORGANIZATION_CODE_MAX_LENGTH`] characters.
    pub fn normalize_input(raw: &str) -> String {
        raw.to_uppercase()
            .chars()
            .take(ORGANIZATION_CODE_MAX_LENGTH)
            .collect()
    }

    /// Turn submitted input into a code. Blank input means no code.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OrganizationCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
