//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// User Roles
// =============================================================================

/// Platform-wide administrator, not bound to a daycare
pub const ROLE_SUPER_ADMIN: &str = "super_admin";

/// Daycare administrator
pub const ROLE_ADMIN: &str = "admin";

/// Default role assigned to new staff users
pub const ROLE_USER: &str = "user";

/// Parent portal account
pub const ROLE_PARENT: &str = "parent";

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum length of a daycare (organization) code
pub const ORGANIZATION_CODE_MAX_LENGTH: usize = 6;

// =============================================================================
// Subscription
// =============================================================================

/// Length of the free trial granted on signup
pub const TRIAL_LENGTH_DAYS: i64 = 14;

/// Seconds per day (for trial countdown calculation)
pub const SECONDS_PER_DAY: i64 = 86_400;

// =============================================================================
// Notices
// =============================================================================

/// Default display duration for notices in milliseconds
pub const DEFAULT_NOTICE_DURATION_MS: u64 = 4000;

/// Display duration for notices that must stay on screen longer
pub const EXTENDED_NOTICE_DURATION_MS: u64 = 8000;

/// Who users are told to contact when a trial has lapsed
pub const DEFAULT_SUPPORT_CONTACT: &str = "GDI Digital Solutions";

