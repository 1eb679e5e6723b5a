//! Forced password change shown to users signed in with a temporary password.

use std::sync::Arc;

use tracing::{debug, info, warn};

use domain::{check_new_password, ensure_changed, DomainError, PasswordFeedback, UserUpdate};

use super::in_flight::InFlight;
use super::messages;
use crate::client::AuthCollaborator;
use crate::notify::{Notice, Notifier};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasswordChangeOutcome {
    /// A local rule failed; nothing was sent
    Rejected(DomainError),
    Changed,
    /// The update call itself failed
    Failed,
}

pub struct PasswordChangeForm {
    auth: Arc<dyn AuthCollaborator>,
    notifier: Arc<dyn Notifier>,
    new_password: String,
    confirmation: String,
    show_new: bool,
    show_confirmation: bool,
    in_flight: InFlight,
}

impl PasswordChangeForm {
    pub fn new(auth: Arc<dyn AuthCollaborator>, notifier: Arc<dyn Notifier>) -> Self {
        let mut form = Self {
            auth,
            notifier,
            new_password: String::new(),
            confirmation: String::new(),
            show_new: false,
            show_confirmation: false,
            in_flight: InFlight::default(),
        };
        form.reset();
        form
    }

    pub fn reset(&mut self) {
        self.new_password.clear();
        self.confirmation.clear();
        self.show_new = false;
        self.show_confirmation = false;
    }

    pub fn set_new_password(&mut self, value: impl Into<String>) {
        self.new_password = value.into();
    }

    pub fn set_confirmation(&mut self, value: impl Into<String>) {
        self.confirmation = value.into();
    }

    pub fn toggle_new_visibility(&mut self) {
        self.show_new = !self.show_new;
    }

    pub fn toggle_confirmation_visibility(&mut self) {
        self.show_confirmation = !self.show_confirmation;
    }

    pub fn new_password_visible(&self) -> bool {
        self.show_new
    }

    pub fn confirmation_visible(&self) -> bool {
        self.show_confirmation
    }

    /// Inline hints for the current input. Advisory only.
    pub fn feedback(&self) -> PasswordFeedback {
        PasswordFeedback::evaluate(&self.new_password, &self.confirmation)
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_active()
    }

    pub fn in_flight(&self) -> InFlight {
        self.in_flight.clone()
    }

    /// Check the new password and update the signed-in user's credentials.
    pub async fn submit(&mut self) -> PasswordChangeOutcome {
        if let Err(e) = check_new_password(&self.new_password, &self.confirmation) {
            return self.reject(e);
        }

        let Some(user) = self.auth.current_user() else {
            return self.reject(DomainError::Unauthorized);
        };
        if let Err(e) = ensure_changed(&self.new_password, Some(&user.password)) {
            return self.reject(e);
        }

        let guard = self.in_flight.raise();
        debug!(user_id = %user.id, "Submitting password change");

        let result = self
            .auth
            .update_user(user.id, UserUpdate::password_changed(self.new_password.as_str()))
            .await;
        drop(guard);

        match result {
            Ok(()) => {
                info!(user_id = %user.id, "Password changed");
                self.notifier.notify(Notice::success(messages::PASSWORD_CHANGED));
                PasswordChangeOutcome::Changed
            }
            Err(e) => {
                warn!(user_id = %user.id, code = e.code(), "Password change failed: {}", e);
                self.notifier.notify(Notice::error(messages::PASSWORD_CHANGE_FAILED));
                PasswordChangeOutcome::Failed
            }
        }
    }

    fn reject(&self, err: DomainError) -> PasswordChangeOutcome {
        let message = match &err {
            DomainError::Unauthorized => messages::NOT_SIGNED_IN.to_string(),
            other => other.to_string(),
        };
        debug!("Password change rejected: {}", message);
        self.notifier.notify(Notice::error(message));
        PasswordChangeOutcome::Rejected(err)
    }
}
