//! Notice texts shown by the forms.

pub const LOGIN_SUCCESS: &str = "Login successful!";
pub const INVALID_CREDENTIALS: &str =
    "Invalid credentials. Please check your daycare code, username, and password.";
pub const LOGIN_FAILED: &str = "Login failed. Please try again.";

pub const NOT_SIGNED_IN: &str = "You must be signed in to change your password";
pub const PASSWORD_CHANGED: &str = "Password changed successfully!";
pub const PASSWORD_CHANGE_FAILED: &str = "Failed to change password. Please try again.";

pub fn welcome(organization_name: Option<&str>) -> String {
    match organization_name {
        Some(name) => format!("Welcome to {}!", name),
        None => LOGIN_SUCCESS.to_string(),
    }
}

/// Backends are expected to name the daycare; fall back to a generic
/// phrase when they don't.
pub fn trial_expired(organization_name: Option<&str>, support_contact: &str) -> String {
    format!(
        "The free trial for {} has expired. Contact {} to activate your subscription.",
        organization_name.unwrap_or("your daycare"),
        support_contact
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_welcome() {
        assert_eq!(welcome(Some("Acme")), "Welcome to Acme!");
        assert_eq!(welcome(None), LOGIN_SUCCESS);
    }

    #[test]
    fn test_trial_expired_without_name() {
        let msg = trial_expired(None, "Support");
        assert!(msg.starts_with("The free trial for your daycare has expired."));
    }
}
