//! Login form: daycare code, username and password.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use common::NoticeConfig;
use domain::{Credentials, OrganizationCode};

use super::in_flight::InFlight;
use super::messages;
use crate::client::AuthCollaborator;
use crate::notify::{Notice, Notifier};

/// How a login submission ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Username or password missing; nothing was sent
    Incomplete,
    SignedIn { organization_name: Option<String> },
    TrialExpired { organization_name: Option<String> },
    InvalidCredentials,
    /// The backend call itself failed
    Failed,
}

pub struct LoginForm {
    auth: Arc<dyn AuthCollaborator>,
    notifier: Arc<dyn Notifier>,
    notices: NoticeConfig,
    organization_code: String,
    username: String,
    password: String,
    show_password: bool,
    in_flight: InFlight,
}

impl LoginForm {
    /// Create a form with every field cleared.
    pub fn new(
        auth: Arc<dyn AuthCollaborator>,
        notifier: Arc<dyn Notifier>,
        notices: NoticeConfig,
    ) -> Self {
        let mut form = Self {
            auth,
            notifier,
            notices,
            organization_code: String::new(),
            username: String::new(),
            password: String::new(),
            show_password: false,
            in_flight: InFlight::default(),
        };
        form.reset();
        form
    }

    /// Clear all fields, e.g. when the screen is shown again after logout.
    pub fn reset(&mut self) {
        self.organization_code.clear();
        self.username.clear();
        self.password.clear();
        self.show_password = false;
    }

    /// Daycare code input is uppercased and capped as it is typed.
    pub fn set_organization_code(&mut self, value: &str) {
        self.organization_code = OrganizationCode::normalize_input(value);
    }

    pub fn set_username(&mut self, value: impl Into<String>) {
        self.username = value.into();
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password = value.into();
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    pub fn organization_code(&self) -> &str {
        &self.organization_code
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password_visible(&self) -> bool {
        self.show_password
    }

    /// Inputs and the submit action are disabled while this is true.
    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_active()
    }

    /// Handle to the in-flight flag for the presentation layer.
    pub fn in_flight(&self) -> InFlight {
        self.in_flight.clone()
    }

    /// Validate the inputs and ask the backend for a session.
    pub async fn submit(&mut self) -> LoginOutcome {
        let credentials = match Credentials::from_input(
            &self.organization_code,
            &self.username,
            &self.password,
        ) {
            Ok(credentials) => credentials,
            Err(e) => {
                self.notifier.notify(Notice::error(e.to_string()));
                return LoginOutcome::Incomplete;
            }
        };

        let guard = self.in_flight.raise();
        debug!(
            username = %credentials.username,
            organization_code = ?credentials.organization_code,
            "Submitting login"
        );

        let result = self
            .auth
            .login(
                &credentials.username,
                &credentials.password,
                credentials.organization_code.clone(),
            )
            .await;
        drop(guard);

        match result {
            Ok(result) if result.success => {
                info!(username = %credentials.username, "Login succeeded");
                self.notifier.notify(Notice::success(messages::welcome(
                    result.organization_name.as_deref(),
                )));
                LoginOutcome::SignedIn {
                    organization_name: result.organization_name,
                }
            }
            Ok(result) if result.trial_expired => {
                info!(organization = ?result.organization_name, "Login blocked, trial expired");
                let message = messages::trial_expired(
                    result.organization_name.as_deref(),
                    &self.notices.support_contact,
                );
                self.notifier.notify(
                    Notice::error(message)
                        .lasting(Duration::from_millis(self.notices.extended_duration_ms)),
                );
                LoginOutcome::TrialExpired {
                    organization_name: result.organization_name,
                }
            }
            Ok(_) => {
                info!(username = %credentials.username, "Login rejected");
                self.notifier.notify(Notice::error(messages::INVALID_CREDENTIALS));
                LoginOutcome::InvalidCredentials
            }
            Err(e) => {
                warn!(code = e.code(), "Login request failed: {}", e);
                self.notifier.notify(Notice::error(messages::LOGIN_FAILED));
                LoginOutcome::Failed
            }
        }
    }
}
