//! Daycare (tenant) entity.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::organization::OrganizationCode;
use crate::trial::{SubscriptionStatus, TrialInfo};
use crate::user::AccountStatus;

#[derive(Debug, Clone)]
pub struct Daycare {
    pub id: Uuid,
    pub name: String,
    pub code: OrganizationCode,
    pub status: AccountStatus,
    pub subscription_status: Option<SubscriptionStatus>,
    pub trial_ends_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Daycare {
    pub fn is_active(&self) -> bool {
        self.status == AccountStatus::Active
    }

    pub fn trial_info(&self, now: DateTime<Utc>) -> TrialInfo {
        TrialInfo::evaluate(self.subscription_status, self.trial_ends_at, now)
    }
}
