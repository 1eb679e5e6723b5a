//! Form state and submission logic for the sign-in screens.

mod in_flight;
pub mod messages;
mod login;
mod password_change;

pub use in_flight::InFlight;
pub use login::{LoginForm, LoginOutcome};
pub use password_change::{PasswordChangeForm, PasswordChangeOutcome};
