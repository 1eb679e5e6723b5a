//! Free-trial and subscription status of a daycare.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{SECONDS_PER_DAY, TRIAL_LENGTH_DAYS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    Trial,
    Active,
    Expired,
}

/// Access decision derived from a daycare's subscription fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialInfo {
    pub is_on_trial: bool,
    pub is_trial_expired: bool,
    pub is_permanently_active: bool,
    pub is_access_allowed: bool,
    /// `None` means no countdown applies
    pub days_remaining: Option<i64>,
    pub trial_ends_at: Option<DateTime<Utc>>,
}

impl TrialInfo {
    pub fn evaluate(
        status: Option<SubscriptionStatus>,
        trial_ends_at: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> Self {
        match (status, trial_ends_at) {
            (Some(SubscriptionStatus::Active), _) => Self {
                is_on_trial: false,
                is_trial_expired: false,
                is_permanently_active: true,
                is_access_allowed: true,
                days_remaining: None,
                trial_ends_at,
            },
            (Some(SubscriptionStatus::Expired), _) => Self {
                is_on_trial: false,
                is_trial_expired: true,
                is_permanently_active: false,
                is_access_allowed: false,
                days_remaining: Some(0),
                trial_ends_at,
            },
            (Some(SubscriptionStatus::Trial), Some(end)) => {
                let days = days_until(end, now);
                let expired = days <= 0;
                Self {
                    is_on_trial: !expired,
                    is_trial_expired: expired,
                    is_permanently_active: false,
                    is_access_allowed: !expired,
                    days_remaining: Some(days),
                    trial_ends_at: Some(end),
                }
            }
            // Records created before subscriptions existed keep access
            _ => Self {
                is_on_trial: false,
                is_trial_expired: false,
                is_permanently_active: false,
                is_access_allowed: true,
                days_remaining: None,
                trial_ends_at: None,
            },
        }
    }
}

/// Whole days left until `end`, rounded up, never negative.
fn days_until(end: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let day_ms = SECONDS_PER_DAY * 1000;
    let diff_ms = (end - now).num_milliseconds();
    if diff_ms <= 0 {
        0
    } else {
        (diff_ms + day_ms - 1) / day_ms
    }
}

/// End of a trial started at `now`.
pub fn trial_end_date(now: DateTime<Utc>) -> DateTime<Utc> {
    now + Duration::days(TRIAL_LENGTH_DAYS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_is_always_allowed() {
        let now = Utc::now();
        let info = TrialInfo::evaluate(
            Some(SubscriptionStatus::Active),
            Some(now - Duration::days(30)),
            now,
        );
        assert!(info.is_access_allowed);
        assert!(info.is_permanently_active);
        assert_eq!(info.days_remaining, None);
    }

    #[test]
    fn test_expired_is_always_blocked() {
        let now = Utc::now();
        let info = TrialInfo::evaluate(
            Some(SubscriptionStatus::Expired),
            Some(now + Duration::days(3)),
            now,
        );
        assert!(!info.is_access_allowed);
        assert!(info.is_trial_expired);
        assert_eq!(info.days_remaining, Some(0));
    }

    #[test]
    fn test_trial_rounds_partial_days_up() {
        let now = Utc::now();
        let info = TrialInfo::evaluate(
            Some(SubscriptionStatus::Trial),
            Some(now + Duration::hours(25)),
            now,
        );
        assert!(info.is_on_trial);
        assert_eq!(info.days_remaining, Some(2));
    }

    #[test]
    fn test_trial_past_end_date_is_expired() {
        let now = Utc::now();
        let info = TrialInfo::evaluate(
            Some(SubscriptionStatus::Trial),
            Some(now - Duration::minutes(1)),
            now,
        );
        assert!(info.is_trial_expired);
        assert!(!info.is_access_allowed);
        assert_eq!(info.days_remaining, Some(0));
    }

    #[test]
    fn test_missing_fields_allow_access() {
        let info = TrialInfo::evaluate(None, None, Utc::now());
        assert!(info.is_access_allowed);
        assert!(!info.is_trial_expired);

        let trial_without_date =
            TrialInfo::evaluate(Some(SubscriptionStatus::Trial), None, Utc::now());
        assert!(trial_without_date.is_access_allowed);
    }

    #[test]
    fn test_trial_end_date_is_fourteen_days_out() {
        let now = Utc::now();
        assert_eq!(trial_end_date(now) - now, Duration::days(14));
    }
}
