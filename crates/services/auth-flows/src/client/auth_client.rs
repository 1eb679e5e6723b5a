//! Authentication backend as seen by the forms.

use async_trait::async_trait;
use uuid::Uuid;

use common::AppResult;
use domain::{AuthenticationResult, CurrentUser, OrganizationCode, UserUpdate};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Operations the login and password-change forms delegate to.
///
/// An `Err` from any method means the request itself failed (transport or
/// unexpected error). A rejected login is an `Ok` with `success == false`.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AuthCollaborator: Send + Sync {
    /// Try to open a session. `organization_code` is `None` when the user
    /// left the code blank.
    async fn login(
        &self,
        username: &str,
        password: &str,
        organization_code: Option<OrganizationCode>,
    ) -> AppResult<AuthenticationResult>;

    /// Apply a credential update to the given user
    async fn update_user(&self, user_id: Uuid, update: UserUpdate) -> AppResult<()>;

    /// The signed-in user, if any
    fn current_user(&self) -> Option<CurrentUser>;
}
