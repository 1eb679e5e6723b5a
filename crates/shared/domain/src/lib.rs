//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! credentials, password rules, daycare codes and trial status.

pub mod constants;
pub mod daycare;
pub mod error;
pub mod organization;
pub mod password;
pub mod session;
pub mod trial;
pub mod user;

pub use constants::*;
pub use daycare::Daycare;
pub use error::{DomainError, DomainResult};
pub use organization::OrganizationCode;
pub use password::{
    check_new_password, ensure_changed, validate_password_change, Password, PasswordFeedback,
};
pub use session::{AuthenticationResult, Credentials, CurrentUser, UserUpdate};
pub use trial::{trial_end_date, SubscriptionStatus, TrialInfo};
pub use user::{AccountStatus, User, UserRole};
