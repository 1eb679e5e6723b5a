//! In-memory account directory implementing the authentication backend.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{debug, error, info};
use uuid::Uuid;

use common::{AppError, AppResult, OptionExt};
use domain::{
    AuthenticationResult, CurrentUser, Daycare, OrganizationCode, Password, User, UserUpdate,
};

use crate::client::AuthCollaborator;

#[derive(Debug, Default)]
struct DirectoryState {
    daycares: Vec<Daycare>,
    users: Vec<User>,
    current_user: Option<Uuid>,
    current_daycare: Option<Uuid>,
}

/// Daycares and their accounts, plus the signed-in session.
#[derive(Debug, Default)]
pub struct InMemoryDirectory {
    state: RwLock<DirectoryState>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_daycare(&self, daycare: Daycare) -> AppResult<()> {
        self.write()?.daycares.push(daycare);
        Ok(())
    }

    pub fn add_user(&self, user: User) -> AppResult<()> {
        self.write()?.users.push(user);
        Ok(())
    }

    pub fn user(&self, id: Uuid) -> AppResult<User> {
        self.read()?
            .users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or_not_found()
    }

    /// Daycare selected by the last successful login
    pub fn current_daycare(&self) -> Option<Daycare> {
        let state = self.read().ok()?;
        let id = state.current_daycare?;
        state.daycares.iter().find(|d| d.id == id).cloned()
    }

    pub fn logout(&self) -> AppResult<()> {
        let mut state = self.write()?;
        state.current_user = None;
        state.current_daycare = None;
        Ok(())
    }

    /// Login rules, evaluated at `now`.
    ///
    /// Super admins sign in without a code. Everyone else needs the code of
    /// an active daycare whose trial still allows access, and must belong to
    /// that daycare or to none.
    pub fn authenticate(
        &self,
        username: &str,
        password: &str,
        organization_code: Option<&OrganizationCode>,
        now: DateTime<Utc>,
    ) -> AppResult<AuthenticationResult> {
        let login_name = username.trim().to_lowercase();
        let password = password.trim();

        let mut guard = self.write()?;
        let state = &mut *guard;

        if let Some(admin) = state.users.iter_mut().find(|u| {
            u.is_active()
                && u.role.is_super_admin()
                && u.answers_to(&login_name)
                && u.password.verify(password)
        }) {
            admin.touch_login(now);
            state.current_user = Some(admin.id);
            state.current_daycare = None;
            info!(user_id = %admin.id, "Super admin signed in");
            return Ok(AuthenticationResult::signed_in(None));
        }

        let Some(code) = organization_code else {
            debug!("Daycare code required for {}", login_name);
            return Ok(AuthenticationResult::rejected());
        };

        let Some(daycare) = state
            .daycares
            .iter()
            .find(|d| d.is_active() && &d.code == code)
        else {
            debug!(%code, "Unknown or inactive daycare code");
            return Ok(AuthenticationResult::rejected());
        };

        if !daycare.trial_info(now).is_access_allowed {
            info!(daycare = %daycare.name, "Trial expired");
            return Ok(AuthenticationResult::trial_expired(daycare.name.clone()));
        }

        let daycare_id = daycare.id;
        let daycare_name = daycare.name.clone();

        let Some(user) = state.users.iter_mut().find(|u| {
            u.is_active()
                && u.daycare_id.map_or(true, |id| id == daycare_id)
                && u.answers_to(&login_name)
                && u.password.verify(password)
        }) else {
            debug!(daycare = %daycare_name, "No matching user for {}", login_name);
            return Ok(AuthenticationResult::rejected());
        };

        user.touch_login(now);
        user.daycare_id = Some(daycare_id);
        state.current_user = Some(user.id);
        state.current_daycare = Some(daycare_id);
        info!(user_id = %user.id, daycare = %daycare_name, "User signed in");

        Ok(AuthenticationResult::signed_in(Some(daycare_name)))
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, DirectoryState>> {
        self.state
            .read()
            .map_err(|_| AppError::internal("directory lock poisoned"))
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, DirectoryState>> {
        self.state
            .write()
            .map_err(|_| AppError::internal("directory lock poisoned"))
    }
}

#[async_trait]
impl AuthCollaborator for InMemoryDirectory {
    async fn login(
        &self,
        username: &str,
        password: &str,
        organization_code: Option<OrganizationCode>,
    ) -> AppResult<AuthenticationResult> {
        self.authenticate(username, password, organization_code.as_ref(), Utc::now())
    }

    async fn update_user(&self, user_id: Uuid, update: UserUpdate) -> AppResult<()> {
        // Hash before taking the lock
        let password = Password::new(&update.password)?;

        let mut state = self.write()?;
        let user = state
            .users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or_not_found()?;
        user.set_password(password, update.must_change_password);
        info!(%user_id, "Credentials updated");
        Ok(())
    }

    fn current_user(&self) -> Option<CurrentUser> {
        let state = match self.read() {
            Ok(state) => state,
            Err(e) => {
                error!("Cannot read session: {}", e);
                return None;
            }
        };
        let id = state.current_user?;
        state.users.iter().find(|u| u.id == id).map(CurrentUser::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use domain::{AccountStatus, SubscriptionStatus, UserRole};

    fn daycare(name: &str, code: &str, status: Option<SubscriptionStatus>, ends: Option<DateTime<Utc>>) -> Daycare {
        Daycare {
            id: Uuid::new_v4(),
            name: name.to_string(),
            code: OrganizationCode::parse(code).unwrap(),
            status: AccountStatus::Active,
            subscription_status: status,
            trial_ends_at: ends,
            created_at: Utc::now(),
        }
    }

    fn user(username: &str, password: &str, role: UserRole, daycare_id: Option<Uuid>) -> User {
        User {
            id: Uuid::new_v4(),
            username: username.to_string(),
            email: format!("{}@example.com", username),
            password: Password::import(password).unwrap(),
            full_name: username.to_string(),
            role,
            status: AccountStatus::Active,
            daycare_id,
            must_change_password: false,
            created_at: Utc::now(),
            last_login: None,
        }
    }

    fn code(s: &str) -> OrganizationCode {
        OrganizationCode::parse(s).unwrap()
    }

    #[test]
    fn test_super_admin_needs_no_code() {
        let dir = InMemoryDirectory::new();
        let admin = user("root", "rootpass", UserRole::SuperAdmin, None);
        let admin_id = admin.id;
        dir.add_user(admin).unwrap();

        let result = dir.authenticate(" ROOT ", "rootpass", None, Utc::now()).unwrap();
        assert_eq!(result, AuthenticationResult::signed_in(None));
        assert_eq!(dir.current_user().unwrap().id, admin_id);
        assert!(dir.current_daycare().is_none());
    }

    #[test]
    fn test_staff_needs_code() {
        let dir = InMemoryDirectory::new();
        let sun = daycare("Sunshine", "SUN123", None, None);
        dir.add_user(user("amy", "amypass1", UserRole::User, Some(sun.id))).unwrap();
        dir.add_daycare(sun).unwrap();

        let result = dir.authenticate("amy", "amypass1", None, Utc::now()).unwrap();
        assert_eq!(result, AuthenticationResult::rejected());
        assert!(dir.current_user().is_none());
    }

    #[test]
    fn test_staff_signs_in_to_own_daycare() {
        let dir = InMemoryDirectory::new();
        let sun = daycare("Sunshine", "SUN123", Some(SubscriptionStatus::Active), None);
        let amy = user("amy", "amypass1", UserRole::User, Some(sun.id));
        let amy_id = amy.id;
        dir.add_user(amy).unwrap();
        dir.add_daycare(sun).unwrap();

        let now = Utc::now();
        let result = dir
            .authenticate("amy@example.com", "amypass1", Some(&code("SUN123")), now)
            .unwrap();
        assert_eq!(result, AuthenticationResult::signed_in(Some("Sunshine".to_string())));
        assert_eq!(dir.user(amy_id).unwrap().last_login, Some(now));
        assert_eq!(dir.current_daycare().unwrap().name, "Sunshine");
    }

    #[test]
    fn test_other_daycare_rejected() {
        let dir = InMemoryDirectory::new();
        let sun = daycare("Sunshine", "SUN123", None, None);
        let moon = daycare("Moonbeam", "MOO456", None, None);
        dir.add_user(user("amy", "amypass1", UserRole::User, Some(sun.id))).unwrap();
        dir.add_daycare(sun).unwrap();
        dir.add_daycare(moon).unwrap();

        let result = dir
            .authenticate("amy", "amypass1", Some(&code("MOO456")), Utc::now())
            .unwrap();
        assert!(!result.success);
        assert!(!result.trial_expired);
    }

    #[test]
    fn test_expired_trial_names_daycare() {
        let dir = InMemoryDirectory::new();
        let now = Utc::now();
        let sun = daycare(
            "Sunshine",
            "SUN123",
            Some(SubscriptionStatus::Trial),
            Some(now - Duration::days(1)),
        );
        dir.add_user(user("amy", "amypass1", UserRole::User, Some(sun.id))).unwrap();
        dir.add_daycare(sun).unwrap();

        let result = dir
            .authenticate("amy", "amypass1", Some(&code("SUN123")), now)
            .unwrap();
        assert_eq!(result, AuthenticationResult::trial_expired("Sunshine"));
    }

    #[test]
    fn test_unassigned_user_joins_daycare() {
        let dir = InMemoryDirectory::new();
        let sun = daycare("Sunshine", "SUN123", None, None);
        let sun_id = sun.id;
        let bo = user("bo", "bopass12", UserRole::Admin, None);
        let bo_id = bo.id;
        dir.add_user(bo).unwrap();
        dir.add_daycare(sun).unwrap();

        dir.authenticate("bo", "bopass12", Some(&code("SUN123")), Utc::now())
            .unwrap();
        assert_eq!(dir.user(bo_id).unwrap().daycare_id, Some(sun_id));

        dir.logout().unwrap();
        assert!(dir.current_user().is_none());
    }

    #[tokio::test]
    async fn test_update_user_replaces_password() {
        let dir = InMemoryDirectory::new();
        let mut amy = user("amy", "temp", UserRole::User, None);
        amy.must_change_password = true;
        let amy_id = amy.id;
        dir.add_user(amy).unwrap();

        dir.update_user(amy_id, UserUpdate::password_changed("brandnew99"))
            .await
            .unwrap();

        let updated = dir.user(amy_id).unwrap();
        assert!(updated.password.verify("brandnew99"));
        assert!(!updated.must_change_password);
    }

    #[test]
    fn test_update_unknown_user() {
        let dir = InMemoryDirectory::new();
        let err = tokio_test::block_on(
            dir.update_user(Uuid::new_v4(), UserUpdate::password_changed("brandnew99")),
        )
        .unwrap_err();
        assert!(matches!(err, AppError::NotFound));
    }
}
